use std::path::Path;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tome_cli::Commands;
use tome_cli::TomeCli;
use tome_core::AnyEmptyResult;
use tome_core::TomeConfig;
use tome_core::catalog::build_catalog;
use tome_core::catalog::parse_file;
use tome_core::scanner::scan_files;

fn main() {
	let args = TomeCli::parse();

	// Install miette's fancy handler for rich error diagnostics.
	let use_color = std::env::var_os("NO_COLOR").is_none();
	miette::set_hook(Box::new(move |_| {
		Box::new(
			miette::MietteHandlerOpts::new()
				.color(use_color)
				.unicode(use_color)
				.build(),
		)
	}))
	.ok();

	let result = match args.command {
		Some(Commands::Build { pretty }) => run_build(&args, pretty),
		Some(Commands::List) => run_list(&args),
		None => {
			eprintln!("No subcommand specified. Run `tome --help` for usage.");
			process::exit(1);
		}
	};

	if let Err(e) = result {
		// Render through miette for rich diagnostics with help text and
		// error codes where possible.
		match e.downcast::<tome_core::TomeError>() {
			Ok(tome_err) => {
				let report: miette::Report = (*tome_err).into();
				eprintln!("{report:?}");
			}
			Err(e) => {
				eprintln!("error: {e}");
			}
		}
		process::exit(2);
	}
}

fn resolve_root(args: &TomeCli) -> PathBuf {
	args.path
		.clone()
		.unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
}

/// The document class comes from the `--class` flag, falling back to the
/// `class` key in tome.toml.
fn resolve_class(args: &TomeCli, config: &TomeConfig) -> Result<String, tome_core::AnyError> {
	args.class
		.clone()
		.or_else(|| config.class.clone())
		.ok_or_else(|| "no document class given; pass --class or set `class` in tome.toml".into())
}

fn load_config(root: &Path) -> Result<TomeConfig, tome_core::AnyError> {
	Ok(TomeConfig::load(root)?.unwrap_or_default())
}

fn run_build(args: &TomeCli, pretty: bool) -> AnyEmptyResult {
	let root = resolve_root(args);
	let config = load_config(&root)?;
	let class = resolve_class(args, &config)?;

	let catalog = build_catalog(&root, &class, &config)?;

	let json = catalog.to_json();
	if pretty {
		println!("{}", serde_json::to_string_pretty(&json)?);
	} else {
		println!("{json}");
	}

	Ok(())
}

fn run_list(args: &TomeCli) -> AnyEmptyResult {
	let root = resolve_root(args);
	let config = load_config(&root)?;
	let class = resolve_class(args, &config)?;

	let files = scan_files(&root, &class)?;
	if files.is_empty() {
		println!("No source files found for class `{class}`.");
		return Ok(());
	}

	for file in &files {
		let parsed = parse_file(file)?;
		let rel = make_relative(file, &root);
		if parsed.documents.is_empty() {
			println!("{rel} (no documents)");
		} else {
			let ids: Vec<&str> = parsed
				.documents
				.iter()
				.map(|(id, _)| id.as_str())
				.collect();
			println!("{rel}: {}", ids.join(", "));
		}
	}

	println!("\n{} file(s) for class `{class}`", files.len());

	Ok(())
}

/// Make a path relative to root for display purposes.
fn make_relative(path: &Path, root: &Path) -> String {
	path.strip_prefix(root)
		.unwrap_or(path)
		.display()
		.to_string()
}
