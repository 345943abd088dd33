#![allow(missing_docs)]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod cmd;

#[derive(Parser)]
#[command(name = "marshaldoc", about = "Decoded marshal value tree inspection tools")]
struct Cli {
	#[command(subcommand)]
	command: Commands,
}

#[derive(Subcommand)]
enum Commands {
	/// Print the indented text dump of a tree document.
	Print(cmd::print::Args),
	/// Print node counts and depth of a tree document.
	Info(cmd::info::Args),
}

fn main() {
	init_tracing();

	if let Err(err) = run() {
		eprintln!("error: {err}");
		std::process::exit(1);
	}
}

fn run() -> marshaldoc::marshal::Result<()> {
	let cli = Cli::parse();

	match cli.command {
		Commands::Print(args) => cmd::print::run(args),
		Commands::Info(args) => cmd::info::run(args),
	}
}

fn init_tracing() {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
	tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}
