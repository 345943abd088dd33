use super::{RAW_PREVIEW_LIMIT, hex_upper, is_binary, raw_preview};

#[test]
fn preview_is_empty_without_source_bytes() {
	assert_eq!(raw_preview(None), "");
}

#[test]
fn preview_of_empty_slice_keeps_brackets() {
	assert_eq!(raw_preview(Some(&[])), " []");
}

#[test]
fn preview_lists_short_slices_in_full() {
	assert_eq!(raw_preview(Some(&[0x04, 0xAB, 0x0f])), " [04-AB-0F]");
}

#[test]
fn preview_truncates_to_first_eight_bytes() {
	let raw: Vec<u8> = (0x10..0x20).collect();
	let preview = raw_preview(Some(&raw));

	assert_eq!(preview, " [10-11-12-13-14-15-16-17]");
	let pairs = preview.trim().trim_start_matches('[').trim_end_matches(']').split('-').count();
	assert_eq!(pairs, RAW_PREVIEW_LIMIT);
}

#[test]
fn preview_pair_count_tracks_slice_length() {
	for len in 1..=12_usize {
		let raw = vec![0xEE_u8; len];
		let preview = raw_preview(Some(&raw));
		let pairs = preview.matches("EE").count();
		assert_eq!(pairs, len.min(RAW_PREVIEW_LIMIT), "len={len}");
	}
}

#[test]
fn binary_detection_uses_printable_ascii_bounds() {
	assert!(!is_binary(b"Hi"));
	assert!(!is_binary(b""));
	assert!(!is_binary(&[32, 126]));
	assert!(is_binary(&[31]));
	assert!(is_binary(&[127]));
	assert!(is_binary(&[0, 1, 2]));
	assert!(is_binary("caf\u{e9}".as_bytes()));
}

#[test]
fn full_hex_is_uppercase_and_unseparated() {
	assert_eq!(hex_upper(&[0x00, 0x01, 0xfe]), "0001FE");
	assert_eq!(hex_upper(&[]), "");
}
