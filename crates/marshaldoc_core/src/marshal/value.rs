use num_bigint::BigInt;
use serde::{Deserialize, Serialize};

use crate::marshal::bytes_serde;

/// One decoded node: a typed payload plus the bytes it was decoded from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
	/// Variant payload. The node kind is derived from it.
	#[serde(flatten)]
	pub value: Value,
	/// Exact source bytes, when the decoder chose to keep them.
	#[serde(default, skip_serializing_if = "Option::is_none", with = "bytes_serde::opt")]
	pub raw_source: Option<Box<[u8]>>,
}

impl Node {
	/// Create a node without captured source bytes.
	pub fn new(value: Value) -> Self {
		Self { value, raw_source: None }
	}

	/// Create a node that remembers the bytes it was decoded from.
	pub fn with_raw(value: Value, raw: impl Into<Box<[u8]>>) -> Self {
		Self {
			value,
			raw_source: Some(raw.into()),
		}
	}

	/// Return the discriminant of this node's payload.
	pub fn kind(&self) -> Kind {
		self.value.kind()
	}

	/// Structural children in print order.
	///
	/// Dict-like payloads contribute key then value for every pair.
	pub fn children(&self) -> Vec<&Node> {
		match &self.value {
			Value::Tuple(items) | Value::List(items) => items.iter().collect(),
			Value::Dict(pairs) => pairs.iter().flat_map(|(key, value)| [key, value]).collect(),
			Value::ObjectData { arguments, .. } => vec![arguments.as_ref()],
			Value::ObjectEx { header, list, dict, .. } => {
				let mut out = Vec::with_capacity(1 + list.len() + dict.len() * 2);
				out.push(header.as_ref());
				out.extend(list.iter());
				out.extend(dict.iter().flat_map(|(key, value)| [key, value]));
				out
			}
			Value::SubStream { data, .. } | Value::ChecksumedStream { data, .. } => vec![data.as_ref()],
			Value::SubStruct { definition } => vec![definition.as_ref()],
			Value::None
			| Value::Bool(_)
			| Value::Int(_)
			| Value::LongLong(_)
			| Value::IntegerVar(_)
			| Value::Float(_)
			| Value::String { .. }
			| Value::Buffer(_)
			| Value::Token(_)
			| Value::PackedRow { .. }
			| Value::Unknown { .. } => Vec::new(),
		}
	}
}

impl From<Value> for Node {
	fn from(value: Value) -> Self {
		Self::new(value)
	}
}

/// Payload of a decoded node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum Value {
	/// Python `None`.
	None,
	/// Boolean scalar.
	Bool(bool),
	/// 32-bit integer.
	Int(i32),
	/// 64-bit integer.
	LongLong(i64),
	/// Arbitrary-width integer.
	IntegerVar(#[serde(with = "bytes_serde::decimal")] BigInt),
	/// Double-precision float.
	Float(#[serde(with = "bytes_serde::float")] f64),
	/// Text with the bytes it was decoded from.
	String {
		/// Decoded text.
		text: Box<str>,
		/// Byte form the text was decoded from.
		#[serde(with = "bytes_serde::hex")]
		raw: Vec<u8>,
	},
	/// Opaque byte buffer.
	Buffer(#[serde(with = "bytes_serde::hex")] Vec<u8>),
	/// Ordered tuple items.
	Tuple(Vec<Node>),
	/// Ordered list items.
	List(Vec<Node>),
	/// Pairs in stream order; duplicate keys are kept.
	Dict(Vec<(Node, Node)>),
	/// Object built from a constructor name and arguments.
	ObjectData {
		/// Constructor name.
		name: Box<str>,
		/// Constructor arguments.
		arguments: Box<Node>,
	},
	/// Extended object record.
	ObjectEx {
		/// Whether the record used the second extended layout.
		type2: bool,
		/// Reduce header.
		header: Box<Node>,
		/// List items appended after construction.
		list: Vec<Node>,
		/// Dict items assigned after construction.
		dict: Vec<(Node, Node)>,
	},
	/// Payload decoded from an embedded buffer.
	SubStream {
		/// Buffer the payload was decoded from, if retained.
		#[serde(default, with = "bytes_serde::opt")]
		raw_data: Option<Vec<u8>>,
		/// Decoded payload.
		data: Box<Node>,
	},
	/// Definition payload wrapper.
	SubStruct {
		/// Definition payload.
		definition: Box<Node>,
	},
	/// Token string.
	Token(Box<str>),
	/// Packed database row.
	PackedRow {
		/// Packed row bytes.
		#[serde(with = "bytes_serde::hex")]
		raw_data: Vec<u8>,
		/// Columns unpacked from the row.
		columns: Columns,
	},
	/// Payload guarded by a checksum.
	ChecksumedStream {
		/// Stream checksum.
		checksum: u32,
		/// Checked payload.
		data: Box<Node>,
	},
	/// Opcode the decoder could not turn into a node.
	Unknown {
		/// Raw stream opcode.
		opcode: u8,
	},
}

impl Value {
	/// Build a string payload whose byte form is the UTF-8 encoding of `text`.
	pub fn string(text: &str) -> Self {
		Self::String {
			text: text.into(),
			raw: text.as_bytes().to_vec(),
		}
	}

	/// Build a string payload from raw bytes, decoding them lossily for the text form.
	pub fn string_bytes(raw: impl Into<Vec<u8>>) -> Self {
		let raw = raw.into();
		Self::String {
			text: String::from_utf8_lossy(&raw).into(),
			raw,
		}
	}

	/// Return the discriminant of this payload.
	pub fn kind(&self) -> Kind {
		match self {
			Self::None => Kind::None,
			Self::Bool(_) => Kind::Bool,
			Self::Int(_) => Kind::Int,
			Self::LongLong(_) => Kind::LongLong,
			Self::IntegerVar(_) => Kind::IntegerVar,
			Self::Float(_) => Kind::Float,
			Self::String { .. } => Kind::String,
			Self::Buffer(_) => Kind::Buffer,
			Self::Tuple(_) => Kind::Tuple,
			Self::List(_) => Kind::List,
			Self::Dict(_) => Kind::Dict,
			Self::ObjectData { .. } => Kind::ObjectData,
			Self::ObjectEx { .. } => Kind::ObjectEx,
			Self::SubStream { .. } => Kind::SubStream,
			Self::SubStruct { .. } => Kind::SubStruct,
			Self::Token(_) => Kind::Token,
			Self::PackedRow { .. } => Kind::PackedRow,
			Self::ChecksumedStream { .. } => Kind::ChecksumedStream,
			Self::Unknown { .. } => Kind::Unknown,
		}
	}
}

/// Column list of a packed row.
///
/// `Parsed(vec![])` and `Failed` are different states: the first is a row
/// with no columns, the second is a row whose column layout could not be read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Option<Vec<Column>>", into = "Option<Vec<Column>>")]
pub enum Columns {
	/// Columns read from the row, possibly none.
	Parsed(Vec<Column>),
	/// Column layout could not be parsed.
	Failed,
}

impl From<Option<Vec<Column>>> for Columns {
	fn from(value: Option<Vec<Column>>) -> Self {
		match value {
			Some(columns) => Self::Parsed(columns),
			None => Self::Failed,
		}
	}
}

impl From<Columns> for Option<Vec<Column>> {
	fn from(value: Columns) -> Self {
		match value {
			Columns::Parsed(columns) => Some(columns),
			Columns::Failed => None,
		}
	}
}

/// One unpacked packed-row column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
	/// Column name.
	pub name: Box<str>,
	/// Value as formatted by the decoder.
	pub value: Box<str>,
	/// Declared column type.
	pub field_type: Box<str>,
}

impl Column {
	/// Create a column record.
	pub fn new(name: &str, value: &str, field_type: &str) -> Self {
		Self {
			name: name.into(),
			value: value.into(),
			field_type: field_type.into(),
		}
	}
}

/// Fieldless discriminant of [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
	/// [`Value::None`].
	None,
	/// [`Value::Bool`].
	Bool,
	/// [`Value::Int`].
	Int,
	/// [`Value::LongLong`].
	LongLong,
	/// [`Value::IntegerVar`].
	IntegerVar,
	/// [`Value::Float`].
	Float,
	/// [`Value::String`].
	String,
	/// [`Value::Buffer`].
	Buffer,
	/// [`Value::Tuple`].
	Tuple,
	/// [`Value::List`].
	List,
	/// [`Value::Dict`].
	Dict,
	/// [`Value::ObjectData`].
	ObjectData,
	/// [`Value::ObjectEx`].
	ObjectEx,
	/// [`Value::SubStream`].
	SubStream,
	/// [`Value::SubStruct`].
	SubStruct,
	/// [`Value::Token`].
	Token,
	/// [`Value::PackedRow`].
	PackedRow,
	/// [`Value::ChecksumedStream`].
	ChecksumedStream,
	/// [`Value::Unknown`].
	Unknown,
}

impl Kind {
	/// Tag printed at the start of a node's summary line.
	pub fn label(self) -> &'static str {
		match self {
			Self::None => "PyNone",
			Self::Bool => "PyBool",
			Self::Int => "PyInt",
			Self::LongLong => "PyLongLong",
			Self::IntegerVar => "PyIntegerVar",
			Self::Float => "PyFloat",
			Self::String => "PyString",
			Self::Buffer => "PyBuffer",
			Self::Tuple => "PyTuple",
			Self::List => "PyList",
			Self::Dict => "PyDict",
			Self::ObjectData => "PyObjectData",
			Self::ObjectEx => "PyObjectEx",
			Self::SubStream => "PySubStream",
			Self::SubStruct => "PySubStruct",
			Self::Token => "PyToken",
			Self::PackedRow => "PyPackedRow",
			Self::ChecksumedStream => "PyChecksumedStream",
			Self::Unknown => "Unknown",
		}
	}
}
