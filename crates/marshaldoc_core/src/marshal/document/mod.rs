use std::path::Path;

use serde::Deserialize;

use crate::marshal::compression::decode_bytes;
use crate::marshal::{Compression, MarshalError, Node, Result};

/// Decoded value tree loaded from a JSON document.
#[derive(Debug, Clone)]
pub struct Document {
	/// Compression detected on the source bytes.
	pub compression: Compression,
	/// Root node of the tree.
	pub root: Node,
}

impl Document {
	/// Read a document from disk, undoing zstd compression when present.
	pub fn open(path: impl AsRef<Path>) -> Result<Self> {
		let raw = std::fs::read(path)?;
		Self::from_bytes(raw)
	}

	/// Parse a document from in-memory bytes.
	pub fn from_bytes(raw: Vec<u8>) -> Result<Self> {
		let (compression, bytes) = decode_bytes(raw)?;
		if bytes.iter().all(u8::is_ascii_whitespace) {
			return Err(MarshalError::EmptyDocument);
		}

		Ok(Self {
			compression,
			root: parse_tree(&bytes)?,
		})
	}

	/// Serialize the tree back to pretty JSON.
	pub fn to_json(&self) -> Result<String> {
		Ok(serde_json::to_string_pretty(&self.root)?)
	}
}

/// Parse a JSON tree without serde_json's nesting limit.
///
/// Every tree level costs an object and an array of JSON nesting, so the
/// default limit would reject trees far shallower than the printer's depth
/// cap. The stack grows on the heap instead.
fn parse_tree(bytes: &[u8]) -> Result<Node> {
	let mut json = serde_json::Deserializer::from_slice(bytes);
	json.disable_recursion_limit();
	let root = Node::deserialize(serde_stacker::Deserializer::new(&mut json))?;
	json.end()?;
	Ok(root)
}

#[cfg(test)]
mod tests;
