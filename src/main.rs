use anyhow::Result;
use clap::Parser;
use clap_verbosity_flag::{ErrorLevel, Verbosity};
use std::path::PathBuf;

// Define the command-line interface using the clap crate
#[derive(Parser, Debug)]
#[command(
	author, // Set the author
	version, // Set the version
	about, // Set a short description
	long_about = None, // Disable long description
	disable_help_subcommand = true, // Disable help subcommand
)]
struct Cli {
	/// root directory of the bundle archive (the directory containing "p12")
	#[arg()]
	input_folder: PathBuf,

	/// output MBTiles file; defaults to "<name>.mbtiles" from the archive's root document
	#[arg()]
	output_file: Option<PathBuf>,

	#[command(flatten)]
	verbose: Verbosity<ErrorLevel>, // Set verbosity flag
}

fn main() -> Result<()> {
	let cli = Cli::parse();

	// Initialize logger and set log level based on verbosity flag
	env_logger::Builder::new()
		.filter_level(cli.verbose.log_level_filter())
		.format_timestamp(None)
		.init();

	run(cli)
}

fn run(cli: Cli) -> Result<()> {
	vtpk2mbtiles::tools::convert::run(&cli.input_folder, cli.output_file.as_deref())
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn help() {
		let err = Cli::try_parse_from(vec!["vtpk2mbtiles", "--help"])
			.unwrap_err()
			.to_string();
		assert!(err.contains("Usage: vtpk2mbtiles"));
		assert!(err.contains("INPUT_FOLDER"));
	}

	#[test]
	fn missing_arguments() {
		assert!(Cli::try_parse_from(vec!["vtpk2mbtiles"]).is_err());
	}

	#[test]
	fn missing_archive_fails() {
		let cli = Cli::try_parse_from(vec!["vtpk2mbtiles", "/does/not/exist"]).unwrap();
		assert!(run(cli).is_err());
	}
}
