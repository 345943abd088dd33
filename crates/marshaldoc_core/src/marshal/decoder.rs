use crate::marshal::{DecodeError, Node};

/// First byte of an embedded serialized stream.
///
/// String payloads starting with this byte are handed to the [`Decoder`]
/// before falling back to text or hex output.
pub const NESTED_STREAM_MARKER: u8 = 0x78;

/// External marshal decoder used to expand embedded streams.
pub trait Decoder {
	/// Decode a complete serialized stream into its root node.
	fn decode(&self, bytes: &[u8]) -> Result<Node, DecodeError>;
}

impl<F> Decoder for F
where
	F: Fn(&[u8]) -> Result<Node, DecodeError>,
{
	fn decode(&self, bytes: &[u8]) -> Result<Node, DecodeError> {
		self(bytes)
	}
}

/// Decoder that never expands embedded streams.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoNestedDecoder;

impl Decoder for NoNestedDecoder {
	fn decode(&self, _bytes: &[u8]) -> Result<Node, DecodeError> {
		Err(DecodeError::Unsupported)
	}
}
