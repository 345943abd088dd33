use std::collections::BTreeMap;

use crate::marshal::{Columns, Kind, NESTED_STREAM_MARKER, Node, Value};

/// Whole-tree counters gathered in one traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeStats {
	/// Total number of nodes, root included.
	pub node_count: usize,
	/// Deepest node depth; the root is depth 0.
	pub max_depth: usize,
	/// Node count per kind.
	pub kinds: BTreeMap<Kind, usize>,
	/// Nodes carrying captured source bytes.
	pub raw_source_nodes: usize,
	/// Sum of captured source byte lengths.
	pub raw_source_bytes: usize,
	/// String nodes whose payload starts with [`NESTED_STREAM_MARKER`].
	pub nested_candidates: usize,
	/// Packed rows whose column layout failed to parse.
	pub failed_packed_rows: usize,
	/// Nodes the decoder could not model.
	pub unknown_nodes: usize,
}

impl TreeStats {
	/// Walk the tree rooted at `root` and collect counters.
	pub fn scan(root: &Node) -> Self {
		let mut stats = Self::default();
		let mut stack = vec![(root, 0_usize)];

		while let Some((node, depth)) = stack.pop() {
			stats.node_count += 1;
			stats.max_depth = stats.max_depth.max(depth);
			*stats.kinds.entry(node.kind()).or_default() += 1;

			if let Some(raw) = &node.raw_source {
				stats.raw_source_nodes += 1;
				stats.raw_source_bytes += raw.len();
			}

			match &node.value {
				Value::String { raw, .. } if raw.first() == Some(&NESTED_STREAM_MARKER) => stats.nested_candidates += 1,
				Value::PackedRow { columns: Columns::Failed, .. } => stats.failed_packed_rows += 1,
				Value::Unknown { .. } => stats.unknown_nodes += 1,
				_ => {}
			}

			stack.extend(node.children().into_iter().rev().map(|child| (child, depth + 1)));
		}

		stats
	}

	/// Number of nodes of `kind`.
	pub fn count(&self, kind: Kind) -> usize {
		self.kinds.get(&kind).copied().unwrap_or(0)
	}
}
