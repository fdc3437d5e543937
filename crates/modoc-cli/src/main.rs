//! CLI entrypoint.

use std::path::PathBuf;
use std::process;

use clap::{Parser, ValueEnum};
use modoc_core::{DocFormat, ExemptRegistry, Modoc, VersionTag, boilerplate};
use owo_colors::OwoColorize;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
/// Document types accepted by `--type`.
enum DocType {
	/// HTML pages.
	Html,
	/// LaTeX sources.
	Latex,
	/// Man pages.
	Man,
	/// reStructuredText (the only type with a renderer).
	Rst,
	/// JSON dumps.
	Json,
	/// Markdown pages.
	Markdown,
	/// JavaScript data.
	Js,
}

impl From<DocType> for DocFormat {
	fn from(doc_type: DocType) -> Self {
		match doc_type {
			DocType::Html => Self::Html,
			DocType::Latex => Self::Latex,
			DocType::Man => Self::Man,
			DocType::Rst => Self::Rst,
			DocType::Json => Self::Json,
			DocType::Markdown => Self::Markdown,
			DocType::Js => Self::Js,
		}
	}
}

#[derive(Parser)]
#[command(author, version, about = "Generate module documentation from metadata", long_about = None)]
/// Parsed command-line options for the modoc CLI.
struct Cli {
	/// Version number of the documented tool, shown on every page
	#[arg(short = 'A', long, env = "MODOC_TOOL_VERSION", default_value = "unknown")]
	tool_version: String,

	/// Module library path, laid out as <category>/<module>
	#[arg(short = 'M', long, env = "MODOC_MODULE_DIR", default_value = "library")]
	module_dir: PathBuf,

	/// Directory containing the page templates
	#[arg(short = 'T', long, env = "MODOC_TEMPLATE_DIR", default_value = "templates")]
	template_dir: PathBuf,

	/// Document type
	#[arg(short = 't', long = "type", value_enum, default_value = "rst")]
	doc_type: DocType,

	/// Enable verbose mode, logging each discovered block and skipped file
	#[arg(short = 'v', long, default_value_t = false)]
	verbose: bool,

	/// Output directory for module files; pages go to stdout when omitted
	#[arg(short = 'o', long, env = "MODOC_OUTPUT_DIR", value_name = "DIR")]
	output_dir: Option<PathBuf>,

	/// Create a file containing the list of processed modules
	#[arg(short = 'I', long, value_name = "FILE")]
	includes_file: Option<PathBuf>,

	/// Print boilerplate documentation for a new module to stdout and exit
	#[arg(short = 'G', long = "generate", default_value_t = false)]
	generate: bool,

	/// Modules added before this version get no "version added" note
	#[arg(long, value_name = "VERSION", default_value = "1.0")]
	notable_version: VersionTag,

	/// Additional modules allowed to ship without documentation
	#[arg(long, value_delimiter = ',', value_name = "MODULE[,MODULE...]")]
	exempt: Vec<String>,
}

/// Install the stderr log subscriber; `RUST_LOG` overrides the verbosity flag.
fn init_tracing(verbose: bool) {
	let default_level = if verbose { "debug" } else { "info" };
	let filter =
		EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}

/// Run the documentation build described by the CLI flags.
fn run_cmdline(cli: &Cli) -> modoc_core::Result<()> {
	let exempt = ExemptRegistry::new().with_modules(cli.exempt.iter().cloned());

	let summary = Modoc::new(&cli.module_dir, &cli.template_dir)
		.with_format(cli.doc_type.into())
		.with_output_dir(cli.output_dir.clone())
		.with_includes_file(cli.includes_file.clone())
		.with_tool_version(cli.tool_version.as_str())
		.with_notable_version(cli.notable_version)
		.with_exempt(exempt)
		.run()?;

	info!(
		categories = summary.categories.len(),
		rendered = summary.rendered.len(),
		skipped = summary.skipped.len(),
		"documentation build complete"
	);
	Ok(())
}

fn main() {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	if cli.generate {
		print!("{}", boilerplate());
		return;
	}

	if let Err(e) = run_cmdline(&cli) {
		eprintln!("{}", format!("*** ERROR: {e} ***").red());
		process::exit(1);
	}
}

#[cfg(test)]
mod tests {
	use clap::CommandFactory;

	use super::*;

	#[test]
	fn cli_definition_is_consistent() {
		Cli::command().debug_assert();
	}

	#[test]
	fn parses_short_flags() {
		let cli = Cli::try_parse_from([
			"modoc", "-A", "1.3", "-M", "lib", "-T", "tpl", "-t", "rst", "-o", "out", "-I",
			"inc.rst", "--notable-version", "1.2", "--exempt", "a,b",
		])
		.unwrap();
		assert_eq!(cli.tool_version, "1.3");
		assert_eq!(cli.module_dir, PathBuf::from("lib"));
		assert_eq!(cli.output_dir, Some(PathBuf::from("out")));
		assert_eq!(cli.notable_version, VersionTag::new(1, 2));
		assert_eq!(cli.exempt, vec!["a", "b"]);
		assert!(matches!(cli.doc_type, DocType::Rst));
	}

	#[test]
	fn rejects_unknown_type_and_bad_threshold() {
		assert!(Cli::try_parse_from(["modoc", "-t", "docx"]).is_err());
		assert!(Cli::try_parse_from(["modoc", "--notable-version", "soon"]).is_err());
	}
}
