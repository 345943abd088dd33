use std::cell::Cell;

use crate::marshal::{Column, Columns, DecodeError, Node, PrintOptions, Value};

pub(crate) fn opts() -> PrintOptions {
	PrintOptions::unix()
}

pub(crate) fn node(value: Value) -> Node {
	Node::new(value)
}

pub(crate) fn boxed(value: Value) -> Box<Node> {
	Box::new(Node::new(value))
}

pub(crate) fn int(value: i32) -> Node {
	Node::new(Value::Int(value))
}

pub(crate) fn text(value: &str) -> Node {
	Node::new(Value::string(value))
}

pub(crate) fn column(name: &str, value: &str, field_type: &str) -> Column {
	Column::new(name, value, field_type)
}

pub(crate) fn packed_row(raw_data: &[u8], columns: Columns) -> Node {
	Node::new(Value::PackedRow {
		raw_data: raw_data.to_vec(),
		columns,
	})
}

/// Stub decoder yielding `None` and counting calls.
pub(crate) struct CountingDecoder {
	pub(crate) calls: Cell<usize>,
	result: std::result::Result<Value, DecodeError>,
}

impl CountingDecoder {
	pub(crate) fn ok(value: Value) -> Self {
		Self {
			calls: Cell::new(0),
			result: Ok(value),
		}
	}

	pub(crate) fn failing(err: DecodeError) -> Self {
		Self {
			calls: Cell::new(0),
			result: Err(err),
		}
	}
}

impl crate::marshal::Decoder for CountingDecoder {
	fn decode(&self, _bytes: &[u8]) -> std::result::Result<Node, DecodeError> {
		self.calls.set(self.calls.get() + 1);
		self.result.clone().map(Node::new)
	}
}
