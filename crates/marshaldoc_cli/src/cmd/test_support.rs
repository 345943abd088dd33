use std::path::PathBuf;
use std::process::{Command, Output};
use std::sync::OnceLock;

use marshaldoc_testkit::{fixture_path as shared_fixture_path, target_dir as workspace_target_dir};

static MARSHALDOC_BIN: OnceLock<PathBuf> = OnceLock::new();

pub(crate) fn fixture_path(name: &str) -> PathBuf {
	shared_fixture_path(name)
}

pub(crate) fn run_marshaldoc(args: &[&str]) -> Output {
	Command::new(marshaldoc_bin())
		.args(args)
		.output()
		.expect("marshaldoc command executes")
}

pub(crate) fn run_marshaldoc_stdout(args: &[&str]) -> String {
	let output = run_marshaldoc(args);
	assert!(
		output.status.success(),
		"marshaldoc command failed with status={}: {}",
		output.status,
		String::from_utf8_lossy(&output.stderr)
	);
	String::from_utf8(output.stdout).expect("stdout is utf8")
}

pub(crate) fn run_marshaldoc_json(args: &[&str]) -> serde_json::Value {
	let stdout = run_marshaldoc_stdout(args);
	serde_json::from_str(&stdout).expect("stdout should be valid json")
}

fn marshaldoc_bin() -> &'static PathBuf {
	MARSHALDOC_BIN.get_or_init(resolve_marshaldoc_bin)
}

fn resolve_marshaldoc_bin() -> PathBuf {
	if let Ok(path) = std::env::var("CARGO_BIN_EXE_marshaldoc") {
		return PathBuf::from(path);
	}

	let manifest_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
	let target_dir = workspace_target_dir();

	let mut bin = target_dir.join("debug");
	bin.push(if cfg!(windows) { "marshaldoc.exe" } else { "marshaldoc" });

	let status = Command::new("cargo")
		.current_dir(&manifest_dir)
		.args(["build", "--quiet", "--bin", "marshaldoc"])
		.status()
		.expect("cargo build executes");
	assert!(status.success(), "failed to build marshaldoc binary at {}", bin.display());

	bin
}
