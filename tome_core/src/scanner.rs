use std::path::Path;
use std::path::PathBuf;

use crate::TomeResult;

/// Extensions recognized for catalog source files.
pub const SOURCE_EXTENSIONS: &[&str] = &["md", "markdown", "json", "toml"];

/// Collect every source file for the given document class: any file under
/// `root` named `*.<class>.<ext>` for a recognized extension. Matching is
/// case-sensitive and recursive; results are sorted for deterministic
/// ordering.
pub fn scan_files(root: &Path, class: &str) -> TomeResult<Vec<PathBuf>> {
	let suffixes: Vec<String> = SOURCE_EXTENSIONS
		.iter()
		.map(|ext| format!(".{class}.{ext}"))
		.collect();

	let mut all = Vec::new();
	walk_files(root, &mut all)?;

	let mut files: Vec<PathBuf> = all
		.into_iter()
		.filter(|path| matches_class(path, &suffixes))
		.collect();
	files.sort();

	Ok(files)
}

fn matches_class(path: &Path, suffixes: &[String]) -> bool {
	path.file_name()
		.and_then(|name| name.to_str())
		.is_some_and(|name| suffixes.iter().any(|suffix| name.ends_with(suffix.as_str())))
}

/// Recursively collect every file under `dir`, skipping hidden directories
/// and common non-source directories.
pub(crate) fn walk_files(dir: &Path, files: &mut Vec<PathBuf>) -> TomeResult<()> {
	if !dir.is_dir() {
		return Ok(());
	}

	for entry in std::fs::read_dir(dir)? {
		let entry = entry?;
		let path = entry.path();

		if let Some(name) = path.file_name().and_then(|name| name.to_str()) {
			if name.starts_with('.') || name == "node_modules" || name == "target" {
				continue;
			}
		}

		if path.is_dir() {
			walk_files(&path, files)?;
		} else {
			files.push(path);
		}
	}

	Ok(())
}
