use std::path::PathBuf;

use clap::Parser;
use clap::Subcommand;

#[derive(Parser)]
#[command(
	author,
	version,
	about = "Assemble a consistency-checked catalog of documents from front-matter files.",
	long_about = "tome folds a directory of front-matter, TOML, and JSON files into a single \
	              catalog of documents.\n\nDocuments in the same file inherit from a per-file \
	              defaults document, `$`-prefixed fields define textual macros, and `@`/`#` \
	              expressions import file contents or content hashes.\n\nQuick start:\n  tome \
	              build --class page   Build and print the catalog as JSON\n  tome list --class \
	              page    Show the source files and document ids"
)]
pub struct TomeCli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	/// Path to the catalog root directory.
	#[arg(long, short, global = true)]
	pub path: Option<PathBuf>,

	/// Document-class filter; selects files named `*.<class>.<ext>`.
	/// Overrides the `class` key in tome.toml.
	#[arg(long, short, global = true)]
	pub class: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Build the catalog and print it as JSON on stdout.
	///
	/// Discovers every source file for the document class, resolves front
	/// matter, path expressions, inheritance, and macros, renders the
	/// configured markdown fields, and prints the resulting catalog keyed by
	/// document id. Exits with a non-zero status on any conflict or
	/// resolution error.
	Build {
		/// Pretty-print the JSON output.
		#[arg(long, default_value_t = false)]
		pretty: bool,
	},
	/// List discovered source files and the document ids they define.
	List,
}
