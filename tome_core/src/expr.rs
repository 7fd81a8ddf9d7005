use std::path::Path;
use std::path::PathBuf;

use globset::GlobBuilder;
use sha1::Digest;
use sha1::Sha1;

use crate::Document;
use crate::Scalar;
use crate::TomeError;
use crate::TomeResult;
use crate::Value;
use crate::scanner::walk_files;

/// Sigil marking a content import expression.
pub const CONTENT_SIGIL: char = '@';

/// Sigil marking a hash import expression.
pub const HASH_SIGIL: char = '#';

/// A classified field-value expression. Doubling a sigil escapes it: `@@x`
/// and `##x` are literals with one leading character stripped, and never touch
/// the filesystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathExpr {
	/// A plain value, or an escaped sigil with the escape consumed.
	Literal(String),
	/// `@pattern`: import the UTF-8 contents of every matching file.
	ContentImport(String),
	/// `#pattern`: import the SHA-1 hex digest of every matching file.
	HashImport(String),
}

/// Classify a single string value. Escape prefixes are checked before the
/// bare sigils.
pub fn classify(input: &str) -> PathExpr {
	if let Some(rest) = input.strip_prefix("@@") {
		return PathExpr::Literal(format!("{CONTENT_SIGIL}{rest}"));
	}
	if let Some(rest) = input.strip_prefix("##") {
		return PathExpr::Literal(format!("{HASH_SIGIL}{rest}"));
	}
	if let Some(rest) = input.strip_prefix(CONTENT_SIGIL) {
		return PathExpr::ContentImport(rest.to_string());
	}
	if let Some(rest) = input.strip_prefix(HASH_SIGIL) {
		return PathExpr::HashImport(rest.to_string());
	}
	PathExpr::Literal(input.to_string())
}

/// Resolve one string value against the filesystem. A literal yields exactly
/// itself; imports yield one entry per matched file, in sorted path order, so
/// a single expression may expand to zero or many values.
pub fn resolve_expr(input: &str, base: &Path) -> TomeResult<Vec<String>> {
	match classify(input) {
		PathExpr::Literal(text) => Ok(vec![text]),
		PathExpr::ContentImport(pattern) => {
			let mut contents = Vec::new();
			for path in matching_files(base, &pattern)? {
				contents.push(read_import(&path)?);
			}
			Ok(contents)
		}
		PathExpr::HashImport(pattern) => {
			let mut digests = Vec::new();
			for path in matching_files(base, &pattern)? {
				let content = read_import(&path)?;
				digests.push(hex_digest(&Sha1::digest(content.as_bytes())));
			}
			Ok(digests)
		}
	}
}

/// Resolve every string field and every string array element of a document.
/// Array fields concatenate the per-element results; a scalar string field
/// must resolve to exactly one value (zero matches collapse to an empty
/// string, two or more are an error). Non-string values pass through.
pub fn resolve_document(
	id: &str,
	document: &Document,
	base: &Path,
	file: &Path,
) -> TomeResult<Document> {
	let mut resolved = Document::new();

	for (name, value) in document.iter() {
		let value = match value {
			Value::Scalar(Scalar::String(text)) => {
				let mut results = resolve_expr(text, base)?;
				match results.len() {
					0 => Value::string(""),
					1 => Value::Scalar(Scalar::String(results.remove(0))),
					matches => {
						return Err(TomeError::AmbiguousExpansion {
							document: id.to_string(),
							field: name.to_string(),
							pattern: text.clone(),
							matches,
							file: file.display().to_string(),
						});
					}
				}
			}
			Value::Array(elements) => {
				let mut out = Vec::new();
				for element in elements {
					match element {
						Scalar::String(text) => {
							for result in resolve_expr(text, base)? {
								out.push(Scalar::String(result));
							}
						}
						other => out.push(other.clone()),
					}
				}
				Value::Array(out)
			}
			other => other.clone(),
		};
		resolved.insert(name, value);
	}

	Ok(resolved)
}

/// Hex-encode a digest, lowercase.
fn hex_digest(bytes: &[u8]) -> String {
	use std::fmt::Write;

	let mut out = String::with_capacity(bytes.len() * 2);
	for byte in bytes {
		let _ = write!(out, "{byte:02x}");
	}
	out
}

fn read_import(path: &Path) -> TomeResult<String> {
	std::fs::read_to_string(path).map_err(|e| {
		TomeError::FileRead {
			path: path.display().to_string(),
			reason: e.to_string(),
		}
	})
}

/// Expand a glob pattern relative to `base`, returning matches in sorted path
/// order.
fn matching_files(base: &Path, pattern: &str) -> TomeResult<Vec<PathBuf>> {
	// `*` must not cross path separators; only `**` descends.
	let matcher = GlobBuilder::new(pattern)
		.literal_separator(true)
		.build()
		.map_err(|e| {
			TomeError::GlobPattern {
				pattern: pattern.to_string(),
				reason: e.to_string(),
			}
		})?
		.compile_matcher();

	let mut all = Vec::new();
	walk_files(base, &mut all)?;

	let mut matched: Vec<PathBuf> = all
		.into_iter()
		.filter(|path| {
			path.strip_prefix(base)
				.is_ok_and(|relative| matcher.is_match(relative))
		})
		.collect();
	matched.sort();

	Ok(matched)
}
