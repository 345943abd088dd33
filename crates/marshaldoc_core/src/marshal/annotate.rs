/// Maximum number of source bytes shown in a raw-source preview.
pub const RAW_PREVIEW_LIMIT: usize = 8;

/// Render the bounded raw-source annotation appended to summary lines.
///
/// Returns an empty string when no source bytes were captured, otherwise a
/// leading space and up to [`RAW_PREVIEW_LIMIT`] dash-separated uppercase hex
/// pairs in brackets, e.g. ` [78-9C-01]`.
pub fn raw_preview(raw: Option<&[u8]>) -> String {
	let Some(raw) = raw else {
		return String::new();
	};

	let pairs: Vec<String> = raw.iter().take(RAW_PREVIEW_LIMIT).map(|byte| format!("{byte:02X}")).collect();
	format!(" [{}]", pairs.join("-"))
}

/// Whether any byte falls outside printable ASCII (32..=126).
pub fn is_binary(bytes: &[u8]) -> bool {
	bytes.iter().any(|byte| !(32..=126).contains(byte))
}

/// Full uppercase hex of `bytes` without separators.
pub fn hex_upper(bytes: &[u8]) -> String {
	hex::encode_upper(bytes)
}

#[cfg(test)]
mod tests;
