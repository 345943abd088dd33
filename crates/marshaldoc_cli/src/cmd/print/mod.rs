use std::path::PathBuf;

use marshaldoc::marshal::{Document, NoNestedDecoder, PrintOptions, Result, render_with};
use tracing::debug;

use crate::cmd::util::emit_text;

#[derive(clap::Args)]
pub struct Args {
	pub path: PathBuf,
	/// Deepest level printed before subtrees collapse to a warning line.
	#[arg(long = "max-depth", default_value_t = PrintOptions::default().max_depth)]
	pub max_depth: usize,
	/// Emit the normalized JSON document instead of the text dump.
	#[arg(long)]
	pub json: bool,
}

/// Print the indented dump of a tree document.
pub fn run(args: Args) -> Result<()> {
	let Args { path, max_depth, json } = args;

	let document = Document::open(&path)?;
	debug!(path = %path.display(), compression = document.compression.as_str(), "loaded tree document");

	if json {
		let mut text = document.to_json()?;
		text.push('\n');
		return emit_text(&text);
	}

	let options = PrintOptions {
		max_depth,
		..PrintOptions::default()
	};
	emit_text(&render_with(&document.root, &options, &NoNestedDecoder))
}
