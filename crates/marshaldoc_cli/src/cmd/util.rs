use std::io::Write;

use marshaldoc::marshal::Result;

/// Write `text` to stdout, surfacing broken pipes as IO errors.
pub(crate) fn emit_text(text: &str) -> Result<()> {
	let mut stdout = std::io::stdout().lock();
	stdout.write_all(text.as_bytes())?;
	stdout.flush()?;
	Ok(())
}

/// Serialize `value` as pretty JSON on stdout.
pub(crate) fn emit_json<T: serde::Serialize>(value: &T) -> Result<()> {
	let mut text = serde_json::to_string_pretty(value)?;
	text.push('\n');
	emit_text(&text)
}
