use std::path::PathBuf;

use marshaldoc::marshal::{Document, Result, TreeStats};

use crate::cmd::util::emit_json;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	#[arg(long)]
	pub json: bool,
}

/// Print high-level tree statistics.
pub fn run(args: Args) -> Result<()> {
	let Args { path, json } = args;

	let document = Document::open(&path)?;
	let stats = TreeStats::scan(&document.root);

	let mut kinds: Vec<_> = stats.kinds.iter().map(|(kind, count)| (kind.label(), *count)).collect();
	kinds.sort_by(|left, right| right.1.cmp(&left.1).then_with(|| left.0.cmp(right.0)));

	if json {
		let payload = InfoJson {
			path: path.display().to_string(),
			compression: document.compression.as_str().to_owned(),
			node_count: stats.node_count,
			max_depth: stats.max_depth,
			raw_source_nodes: stats.raw_source_nodes,
			raw_source_bytes: stats.raw_source_bytes,
			nested_candidates: stats.nested_candidates,
			failed_packed_rows: stats.failed_packed_rows,
			unknown_nodes: stats.unknown_nodes,
			kinds: kinds
				.iter()
				.map(|(kind, count)| KindCountJson {
					kind: (*kind).to_owned(),
					count: *count,
				})
				.collect(),
		};
		return emit_json(&payload);
	}

	println!("path: {}", path.display());
	println!("compression: {}", document.compression.as_str());
	println!("node_count: {}", stats.node_count);
	println!("max_depth: {}", stats.max_depth);
	println!("raw_source_nodes: {}", stats.raw_source_nodes);
	println!("raw_source_bytes: {}", stats.raw_source_bytes);
	println!("nested_candidates: {}", stats.nested_candidates);
	println!("failed_packed_rows: {}", stats.failed_packed_rows);
	println!("unknown_nodes: {}", stats.unknown_nodes);

	println!("kinds:");
	for (kind, count) in kinds {
		println!("  {kind}: {count}");
	}

	Ok(())
}

#[derive(serde::Serialize)]
struct KindCountJson {
	kind: String,
	count: usize,
}

#[derive(serde::Serialize)]
struct InfoJson {
	path: String,
	compression: String,
	node_count: usize,
	max_depth: usize,
	raw_source_nodes: usize,
	raw_source_bytes: usize,
	nested_candidates: usize,
	failed_packed_rows: usize,
	unknown_nodes: usize,
	kinds: Vec<KindCountJson>,
}
