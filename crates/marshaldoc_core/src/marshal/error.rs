use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, MarshalError>;

/// Errors produced while loading tree documents.
#[derive(Debug, Error)]
pub enum MarshalError {
	/// Filesystem or stream IO failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Document bytes were not a valid JSON value tree.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Decompression output exceeded configured safety limit.
	#[error("decompressed output exceeded limit {limit} bytes")]
	DecompressedTooLarge {
		/// Maximum allowed output bytes.
		limit: usize,
	},
	/// Document contained no data after decompression.
	#[error("document is empty")]
	EmptyDocument,
}

/// Failures reported by an external marshal decoder.
///
/// The printer treats every variant the same way: the string payload is
/// printed as plain text or hex instead of as a nested tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
	/// No decoder is available for nested streams.
	#[error("nested stream decoding is not supported")]
	Unsupported,
	/// Not enough bytes remained for a requested read.
	#[error("unexpected eof at offset {at}, need {need} bytes, remaining {rem}")]
	UnexpectedEof {
		/// Byte offset where the read was attempted.
		at: usize,
		/// Requested bytes.
		need: usize,
		/// Bytes still available.
		rem: usize,
	},
	/// Stream contained an opcode the decoder does not know.
	#[error("unknown opcode 0x{opcode:02X} at offset {at}")]
	UnknownOpcode {
		/// Offending opcode byte.
		opcode: u8,
		/// Byte offset of the opcode.
		at: usize,
	},
	/// Any other structural problem in the stream.
	#[error("malformed stream: {reason}")]
	Malformed {
		/// Human-readable description.
		reason: String,
	},
}
