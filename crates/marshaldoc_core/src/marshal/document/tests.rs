use marshaldoc_testkit::fixture_path;

use num_bigint::BigInt;

use super::Document;
use crate::marshal::{Column, Columns, Compression, MarshalError, NoNestedDecoder, Node, PrintOptions, Value, render_with};

#[test]
fn session_fixture_loads_into_tree() {
	let document = Document::open(fixture_path("session_change.json")).expect("fixture opens");

	assert_eq!(document.compression, Compression::None);
	let Value::Tuple(items) = &document.root.value else {
		panic!("expected tuple root, got {:?}", document.root.kind());
	};
	assert_eq!(items.len(), 4);
	assert_eq!(document.root.raw_source.as_deref(), Some(&[0x7E_u8, 0x00, 0x00, 0x00, 0x00, 0x14][..]));
}

#[test]
fn packed_row_columns_distinguish_null_from_empty() {
	let json = br#"{"kind":"list","value":[
		{"kind":"packed_row","value":{"raw_data":"0102","columns":null}},
		{"kind":"packed_row","value":{"raw_data":"0102","columns":[]}},
		{"kind":"packed_row","value":{"raw_data":"","columns":[{"name":"a","value":"1","field_type":"int"}]}}
	]}"#;
	let document = Document::from_bytes(json.to_vec()).expect("document parses");

	let Value::List(rows) = document.root.value else {
		panic!("expected list root");
	};
	let columns: Vec<Columns> = rows
		.into_iter()
		.map(|row| match row.value {
			Value::PackedRow { columns, .. } => columns,
			other => panic!("expected packed row, got {:?}", other.kind()),
		})
		.collect();

	assert_eq!(columns[0], Columns::Failed);
	assert_eq!(columns[1], Columns::Parsed(Vec::new()));
	assert_eq!(columns[2], Columns::Parsed(vec![Column::new("a", "1", "int")]));
}

#[test]
fn scalar_payloads_and_raw_source_parse_from_json() {
	let json = br#"{"kind":"dict","value":[
		[{"kind":"string","value":{"text":"id","raw":"6964"}}, {"kind":"integer_var","value":"18446744073709551621"}],
		[{"kind":"token","value":"blue.DBRow"}, {"kind":"float","value":2}]
	],"raw_source":"1602"}"#;
	let document = Document::from_bytes(json.to_vec()).expect("document parses");

	assert_eq!(document.root.raw_source.as_deref(), Some(&[0x16_u8, 0x02][..]));
	let Value::Dict(pairs) = &document.root.value else {
		panic!("expected dict root");
	};
	assert_eq!(pairs[0].0, Node::new(Value::string("id")));
	assert_eq!(pairs[1].1, Node::new(Value::Float(2.0)));
	let Value::IntegerVar(big) = &pairs[0].1.value else {
		panic!("expected integer var");
	};
	assert_eq!(big.to_string(), "18446744073709551621");
}

#[test]
fn json_round_trip_preserves_tree() {
	let document = Document::open(fixture_path("session_change.json")).expect("fixture opens");
	let json = document.to_json().expect("tree serializes");
	let reparsed = Document::from_bytes(json.into_bytes()).expect("serialized tree parses");

	assert_eq!(reparsed.root, document.root);
}

#[test]
fn zstd_documents_are_decompressed() {
	let json = br#"{"kind":"list","value":[{"kind":"none"},{"kind":"bool","value":true}]}"#;
	let compressed = zstd::encode_all(&json[..], 3).expect("zstd encodes");
	let document = Document::from_bytes(compressed).expect("compressed document parses");

	assert_eq!(document.compression, Compression::Zstd);
	assert_eq!(
		document.root,
		Node::new(Value::List(vec![Node::new(Value::None), Node::new(Value::Bool(true))]))
	);
}

#[test]
fn empty_and_malformed_documents_are_rejected() {
	assert!(matches!(Document::from_bytes(b" \n".to_vec()), Err(MarshalError::EmptyDocument)));
	assert!(matches!(Document::from_bytes(b"{\"kind\":\"nope\"}".to_vec()), Err(MarshalError::Json(_))));
	assert!(matches!(
		Document::from_bytes(br#"{"kind":"buffer","value":"XYZ"}"#.to_vec()),
		Err(MarshalError::Json(_))
	));
}

#[test]
fn integer_var_survives_json_round_trip() {
	let big: BigInt = "-340282366920938463463374607431768211457".parse().expect("literal parses");
	let document = Document {
		compression: Compression::None,
		root: Node::new(Value::IntegerVar(big.clone())),
	};
	let json = document.to_json().expect("tree serializes");
	assert!(json.contains("\"-340282366920938463463374607431768211457\""), "integer_var is written as a decimal string: {json}");

	let reparsed = Document::from_bytes(json.into_bytes()).expect("serialized tree parses");
	assert_eq!(reparsed.root.value, Value::IntegerVar(big));
}

#[test]
fn non_finite_floats_survive_json_round_trip() {
	let document = Document {
		compression: Compression::None,
		root: Node::new(Value::List(vec![
			Node::new(Value::Float(f64::NAN)),
			Node::new(Value::Float(f64::INFINITY)),
			Node::new(Value::Float(f64::NEG_INFINITY)),
			Node::new(Value::Float(-0.5)),
		])),
	};
	let json = document.to_json().expect("tree serializes");
	assert!(!json.contains("null"), "non-finite floats must not collapse to null: {json}");

	let reparsed = Document::from_bytes(json.into_bytes()).expect("serialized tree parses");
	let Value::List(items) = &reparsed.root.value else {
		panic!("expected list root");
	};
	let floats: Vec<f64> = items
		.iter()
		.map(|item| match item.value {
			Value::Float(v) => v,
			ref other => panic!("expected float, got {:?}", other.kind()),
		})
		.collect();
	assert!(floats[0].is_nan());
	assert_eq!(floats[1], f64::INFINITY);
	assert_eq!(floats[2], f64::NEG_INFINITY);
	assert_eq!(floats[3], -0.5);

	assert!(matches!(
		Document::from_bytes(br#"{"kind":"float","value":"nan"}"#.to_vec()),
		Err(MarshalError::Json(_))
	));
}

#[test]
fn deeply_nested_documents_load_and_print() {
	const LEVELS: usize = 80;
	let mut json = String::new();
	for _ in 0..LEVELS {
		json.push_str(r#"{"kind":"list","value":["#);
	}
	json.push_str(r#"{"kind":"int","value":7}"#);
	for _ in 0..LEVELS {
		json.push_str("]}");
	}

	let document = Document::from_bytes(json.into_bytes()).expect("deep document parses");
	let out = render_with(&document.root, &PrintOptions::unix(), &NoNestedDecoder);
	let lines: Vec<&str> = out.lines().collect();

	assert_eq!(lines.len(), LEVELS + 1);
	assert_eq!(lines[0], "[PyList 1 items]");
	assert_eq!(lines[LEVELS], format!("{}[PyInt 7]", "    ".repeat(LEVELS)));
}
