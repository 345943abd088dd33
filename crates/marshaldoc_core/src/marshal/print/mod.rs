use tracing::{debug, warn};

use crate::marshal::{Columns, Decoder, Kind, NESTED_STREAM_MARKER, NoNestedDecoder, Node, Value, hex_upper, is_binary, raw_preview};

/// Line terminator of the host platform.
pub const PLATFORM_LINE_ENDING: &str = if cfg!(windows) { "\r\n" } else { "\n" };

/// Opening of a string summary; continuation lines align under its end.
const STRING_OPEN: &str = "[PyString ";

/// Layout and recursion limits for rendered dumps.
#[derive(Debug, Clone, Copy)]
pub struct PrintOptions {
	/// Indent unit repeated once per depth level.
	pub indent: &'static str,
	/// Terminator written after every line.
	pub line_ending: &'static str,
	/// Deepest level that is still printed; deeper subtrees collapse to a warning line.
	pub max_depth: usize,
	/// Whether string payloads starting with [`NESTED_STREAM_MARKER`] are decoded and expanded.
	pub nested_decode: bool,
}

impl Default for PrintOptions {
	fn default() -> Self {
		Self {
			indent: "    ",
			line_ending: PLATFORM_LINE_ENDING,
			max_depth: 256,
			nested_decode: true,
		}
	}
}

impl PrintOptions {
	/// Default layout with `\n` terminators on every platform.
	pub fn unix() -> Self {
		Self {
			line_ending: "\n",
			..Self::default()
		}
	}
}

/// Render a tree with default options and no nested stream decoding.
pub fn render(root: &Node) -> String {
	render_with(root, &PrintOptions::default(), &NoNestedDecoder)
}

/// Render a tree, expanding embedded streams through `decoder`.
pub fn render_with(root: &Node, options: &PrintOptions, decoder: &dyn Decoder) -> String {
	Printer::new(*options, decoder).render(root)
}

/// Recursive value tree printer.
pub struct Printer<'d> {
	options: PrintOptions,
	decoder: &'d dyn Decoder,
}

impl<'d> Printer<'d> {
	/// Create a printer that expands embedded streams through `decoder`.
	pub fn new(options: PrintOptions, decoder: &'d dyn Decoder) -> Self {
		Self { options, decoder }
	}

	/// Render `root` starting at depth 0.
	pub fn render(&self, root: &Node) -> String {
		self.print(root, 0)
	}

	/// Render `node` and its subtree with the summary line at `depth`.
	pub fn print(&self, node: &Node, depth: usize) -> String {
		let mut out = Output::new(&self.options);
		self.write_node(&mut out, node, depth);
		out.buf
	}

	fn write_node(&self, out: &mut Output<'_>, node: &Node, depth: usize) {
		let kind = node.kind();
		if depth > self.options.max_depth {
			warn!(depth, kind = kind.label(), "print depth limit reached");
			out.line(depth, &format!("[Warning: depth limit {} reached at {}]", self.options.max_depth, kind.label()));
			return;
		}

		let annotation = raw_preview(node.raw_source.as_deref());
		match &node.value {
			Value::String { text, raw } => self.write_string(out, depth, &node.value, text, raw, &annotation),
			Value::PackedRow { raw_data, columns } => {
				out.line(depth, &format!("[{} {} bytes]", kind.label(), raw_data.len()));
				write_columns(out, depth + 1, columns);
			}
			Value::Unknown { opcode } => {
				warn!(opcode, "no printable representation for node");
				out.line(depth, &summary(&node.value));
			}
			value => {
				let mut line = summary(value);
				if takes_annotation(kind) {
					line.push_str(&annotation);
				}
				out.line(depth, &line);
				for child in node.children() {
					self.write_node(out, child, depth + 1);
				}
			}
		}
	}

	/// `value` is the string payload itself; `text` and `raw` are its fields.
	fn write_string(&self, out: &mut Output<'_>, depth: usize, value: &Value, text: &str, raw: &[u8], annotation: &str) {
		if let Some(nested) = self.decode_nested(raw) {
			out.line(depth, STRING_OPEN.trim_end());
			self.write_node(out, &nested, depth + 1);
			out.line(depth, &format!("]{annotation}"));
			return;
		}

		if !is_binary(raw) {
			out.line(depth, &format!("{}{annotation}", summary(value)));
			return;
		}

		out.line(depth, &format!("{STRING_OPEN}\"{text}\""));
		out.continuation(
			depth,
			STRING_OPEN.len(),
			&format!("<binary len={}> hex=\"{}\"]{annotation}", text.chars().count(), hex_upper(raw)),
		);
	}

	fn decode_nested(&self, raw: &[u8]) -> Option<Node> {
		if !self.options.nested_decode || raw.first() != Some(&NESTED_STREAM_MARKER) {
			return None;
		}

		match self.decoder.decode(raw) {
			Ok(node) => Some(node),
			Err(err) => {
				debug!(%err, len = raw.len(), "embedded stream did not decode, printing as string");
				None
			}
		}
	}
}

/// One-line summary for a node payload, without raw-source annotation.
fn summary(value: &Value) -> String {
	let label = value.kind().label();
	match value {
		Value::None => format!("[{label}]"),
		Value::Bool(v) => format!("[{label} {}]", if *v { "True" } else { "False" }),
		Value::Int(v) => format!("[{label} {v}]"),
		Value::LongLong(v) => format!("[{label} {v}]"),
		Value::IntegerVar(v) => format!("[{label} {v}]"),
		Value::Float(v) => format!("[{label} {v}]"),
		Value::Buffer(data) => format!("[{label} {} bytes]", data.len()),
		Value::Tuple(items) | Value::List(items) => format!("[{label} {} items]", items.len()),
		Value::Dict(pairs) => format!("[{label} {} kvp]", pairs.len()),
		Value::ObjectData { name, .. } => format!("[{label} Name: {name}]"),
		Value::ObjectEx { type2, .. } => format!("[{label} {}]", if *type2 { "Type2" } else { "Normal" }),
		Value::SubStream { raw_data: Some(data), .. } => format!("[{label} {} bytes]", data.len()),
		Value::SubStream { raw_data: None, .. } => format!("[{label}]"),
		Value::SubStruct { .. } => format!("[{label}]"),
		Value::Token(token) => format!("[{label} {token}]"),
		Value::PackedRow { raw_data, .. } => format!("[{label} {} bytes]", raw_data.len()),
		Value::ChecksumedStream { checksum, .. } => format!("[{label} Checksum: {checksum}]"),
		Value::String { text, .. } => format!("{STRING_OPEN}\"{text}\"]"),
		Value::Unknown { opcode } => format!("[Warning: unable to print {label} (opcode 0x{opcode:02X})]"),
	}
}

/// Wrapper kinds print their own tag without the raw-source preview.
fn takes_annotation(kind: Kind) -> bool {
	!matches!(kind, Kind::SubStruct | Kind::PackedRow | Kind::ChecksumedStream)
}

fn write_columns(out: &mut Output<'_>, depth: usize, columns: &Columns) {
	match columns {
		Columns::Parsed(columns) => {
			for column in columns {
				out.line(depth, &format!("[\"{}\" => {} [{}]]", column.name, column.value, column.field_type));
			}
		}
		Columns::Failed => out.line(depth, "[Columns parsing failed!]"),
	}
}

/// Text sink scoped to a single print call.
struct Output<'o> {
	options: &'o PrintOptions,
	buf: String,
}

impl<'o> Output<'o> {
	fn new(options: &'o PrintOptions) -> Self {
		Self { options, buf: String::new() }
	}

	fn line(&mut self, depth: usize, text: &str) {
		self.continuation(depth, 0, text);
	}

	/// Write a line indented to `depth` plus `align` extra spaces.
	fn continuation(&mut self, depth: usize, align: usize, text: &str) {
		for _ in 0..depth {
			self.buf.push_str(self.options.indent);
		}
		self.buf.extend(std::iter::repeat_n(' ', align));
		self.buf.push_str(text);
		self.buf.push_str(self.options.line_ending);
	}
}
