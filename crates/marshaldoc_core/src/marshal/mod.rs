mod annotate;
mod bytes_serde;
mod compression;
mod decoder;
mod document;
mod error;
mod print;
mod stats;
mod value;

#[cfg(test)]
mod test_support;

/// Raw-source preview and byte classification helpers.
pub use annotate::{RAW_PREVIEW_LIMIT, hex_upper, is_binary, raw_preview};
/// Compression detection result.
pub use compression::Compression;
/// External decoder seam used for embedded streams.
pub use decoder::{Decoder, NESTED_STREAM_MARKER, NoNestedDecoder};
/// Tree documents loaded from disk.
pub use document::Document;
/// Error and result aliases.
pub use error::{DecodeError, MarshalError, Result};
/// Text rendering entry points and options.
pub use print::{PLATFORM_LINE_ENDING, PrintOptions, Printer, render, render_with};
/// Whole-tree statistics.
pub use stats::TreeStats;
/// Decoded value tree types.
pub use value::{Column, Columns, Kind, Node, Value};
