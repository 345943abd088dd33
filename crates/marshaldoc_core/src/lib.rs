//! Public library API for dumping decoded marshal value trees as indented text.

/// Value tree model, nested stream decoding seam, printer, and document loading.
pub mod marshal;
