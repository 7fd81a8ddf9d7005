use std::path::Path;

use crate::Document;
use crate::OrderedFloat;
use crate::Scalar;
use crate::TomeError;
use crate::TomeResult;
use crate::Value;

/// Line-based fence delimiting the metadata block in markdown sources.
pub const FRONT_MATTER_FENCE: &str = "+++";

/// Marker inside the body that separates the short description from the rest.
pub const EXCERPT_SEPARATOR: &str = "<!---->";

/// The reserved document id selecting the per-file defaults document. It only
/// exists at this parse boundary; inside the pipeline the defaults document is
/// threaded explicitly as [`FileGroup::defaults`].
pub const DEFAULTS_ID: &str = "*";

/// Field synthesized onto the defaults document from the full body text.
pub const DESCRIPTION_FIELD: &str = "description";

/// Field synthesized onto the defaults document from the body text before the
/// excerpt separator.
pub const SHORT_DESCRIPTION_FIELD: &str = "short_description";

/// How a source file's raw text maps to a metadata block and body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
	/// A `+++`-fenced metadata block (parsed as TOML) followed by a body.
	Markdown,
	/// The entire file is the metadata mapping; there is no body.
	Toml,
	/// The entire file is the metadata mapping (JSON); there is no body.
	Json,
}

impl SourceFormat {
	/// Determine the format from a file extension. Matching is case-sensitive.
	pub fn from_path(path: &Path) -> Option<Self> {
		let ext = path.extension().and_then(|ext| ext.to_str())?;
		match ext {
			"md" | "markdown" => Some(Self::Markdown),
			"toml" => Some(Self::Toml),
			"json" => Some(Self::Json),
			_ => None,
		}
	}
}

/// One file's defaults-aware group of documents: the optional defaults
/// document plus every document keyed by id, in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FileGroup {
	/// The per-file ancestor document, when the file defines one (or when body
	/// text synthesizes description fields onto it).
	pub defaults: Option<Document>,
	/// The remaining documents in source order.
	pub documents: Vec<(String, Document)>,
}

/// Split raw file text into a [`FileGroup`]. Markdown sources are split on the
/// front-matter fence and gain body-derived description fields; whole-file
/// TOML and JSON sources have no body. Malformed metadata surfaces as a
/// [`TomeError::FrontMatter`] and aborts the file.
pub fn extract(raw: &str, format: SourceFormat, path: &Path) -> TomeResult<FileGroup> {
	match format {
		SourceFormat::Markdown => {
			let (metadata, body) = split_front_matter(raw);
			let mut group = group_from_toml(parse_toml(metadata, path)?, path)?;
			attach_body_fields(&mut group, body);
			Ok(group)
		}
		SourceFormat::Toml => group_from_toml(parse_toml(raw, path)?, path),
		SourceFormat::Json => group_from_json(parse_json(raw, path)?, path),
	}
}

/// Split text into (metadata, body). The metadata block is delimited by a
/// `+++` line at the very start and a matching `+++` line; without an opening
/// fence the whole text is body. An unterminated block is all metadata.
fn split_front_matter(raw: &str) -> (&str, &str) {
	let mut lines = raw.split_inclusive('\n');
	let Some(first) = lines.next() else {
		return ("", raw);
	};
	if first.trim_end() != FRONT_MATTER_FENCE {
		return ("", raw);
	}

	let metadata_start = first.len();
	let mut offset = metadata_start;
	for line in lines {
		if line.trim_end() == FRONT_MATTER_FENCE {
			let metadata = &raw[metadata_start..offset];
			let body = &raw[offset + line.len()..];
			return (metadata, body);
		}
		offset += line.len();
	}

	(&raw[metadata_start..], "")
}

/// Attach `description`/`short_description` to the defaults document when the
/// body holds any non-whitespace text. The full body is stored verbatim; the
/// short description is the text before the excerpt separator, or the full
/// body when no separator is present.
fn attach_body_fields(group: &mut FileGroup, body: &str) {
	if body.trim().is_empty() {
		return;
	}

	let short = match body.split_once(EXCERPT_SEPARATOR) {
		Some((before, _)) => before,
		None => body,
	};

	let defaults = group.defaults.get_or_insert_with(Document::new);
	defaults.insert(SHORT_DESCRIPTION_FIELD, Value::string(short));
	defaults.insert(DESCRIPTION_FIELD, Value::string(body));
}

fn parse_toml(raw: &str, path: &Path) -> TomeResult<toml::Table> {
	toml::from_str(raw).map_err(|e| {
		TomeError::FrontMatter {
			path: path.display().to_string(),
			reason: e.to_string(),
		}
	})
}

fn parse_json(raw: &str, path: &Path) -> TomeResult<serde_json::Map<String, serde_json::Value>> {
	if raw.trim().is_empty() {
		return Ok(serde_json::Map::new());
	}
	serde_json::from_str(raw).map_err(|e| {
		TomeError::FrontMatter {
			path: path.display().to_string(),
			reason: e.to_string(),
		}
	})
}

/// Build a [`FileGroup`] from a parsed TOML table. Top-level tables become
/// documents keyed by id (with `*` selecting the defaults document); top-level
/// scalar entries attach to the defaults document.
fn group_from_toml(table: toml::Table, path: &Path) -> TomeResult<FileGroup> {
	let mut group = FileGroup::default();

	for (key, value) in table {
		match value {
			toml::Value::Table(fields) => {
				let mut document = Document::new();
				for (name, field_value) in fields {
					document.insert(name, value_from_toml(field_value, path)?);
				}
				if key == DEFAULTS_ID {
					merge_defaults(&mut group, document);
				} else {
					group.documents.push((key, document));
				}
			}
			other => {
				let defaults = group.defaults.get_or_insert_with(Document::new);
				defaults.insert(key, value_from_toml(other, path)?);
			}
		}
	}

	Ok(group)
}

fn group_from_json(
	object: serde_json::Map<String, serde_json::Value>,
	path: &Path,
) -> TomeResult<FileGroup> {
	let mut group = FileGroup::default();

	for (key, value) in object {
		match value {
			serde_json::Value::Object(fields) => {
				let mut document = Document::new();
				for (name, field_value) in fields {
					document.insert(name, value_from_json(field_value, path)?);
				}
				if key == DEFAULTS_ID {
					merge_defaults(&mut group, document);
				} else {
					group.documents.push((key, document));
				}
			}
			other => {
				let defaults = group.defaults.get_or_insert_with(Document::new);
				defaults.insert(key, value_from_json(other, path)?);
			}
		}
	}

	Ok(group)
}

fn merge_defaults(group: &mut FileGroup, document: Document) {
	let defaults = group.defaults.get_or_insert_with(Document::new);
	for (name, value) in document {
		defaults.insert(name, value);
	}
}

fn value_from_toml(value: toml::Value, path: &Path) -> TomeResult<Value> {
	let value = match value {
		toml::Value::Array(elements) => {
			let scalars: TomeResult<Vec<Scalar>> = elements
				.into_iter()
				.map(|element| scalar_from_toml(element, path))
				.collect();
			Value::Array(scalars?)
		}
		other => Value::Scalar(scalar_from_toml(other, path)?),
	};
	Ok(value)
}

fn scalar_from_toml(value: toml::Value, path: &Path) -> TomeResult<Scalar> {
	let scalar = match value {
		toml::Value::String(text) => Scalar::String(text),
		toml::Value::Integer(number) => Scalar::Number(OrderedFloat(number as f64)),
		toml::Value::Float(number) => Scalar::Number(OrderedFloat(number)),
		toml::Value::Boolean(flag) => Scalar::Bool(flag),
		toml::Value::Datetime(datetime) => Scalar::String(datetime.to_string()),
		toml::Value::Array(_) | toml::Value::Table(_) => {
			return Err(TomeError::FrontMatter {
				path: path.display().to_string(),
				reason: "nested arrays and tables are not supported in document fields".to_string(),
			});
		}
	};
	Ok(scalar)
}

fn value_from_json(value: serde_json::Value, path: &Path) -> TomeResult<Value> {
	let value = match value {
		serde_json::Value::Array(elements) => {
			let scalars: TomeResult<Vec<Scalar>> = elements
				.into_iter()
				.map(|element| scalar_from_json(element, path))
				.collect();
			Value::Array(scalars?)
		}
		other => Value::Scalar(scalar_from_json(other, path)?),
	};
	Ok(value)
}

fn scalar_from_json(value: serde_json::Value, path: &Path) -> TomeResult<Scalar> {
	let scalar = match value {
		serde_json::Value::String(text) => Scalar::String(text),
		serde_json::Value::Number(number) => {
			Scalar::Number(OrderedFloat(number.as_f64().unwrap_or_default()))
		}
		serde_json::Value::Bool(flag) => Scalar::Bool(flag),
		serde_json::Value::Null
		| serde_json::Value::Array(_)
		| serde_json::Value::Object(_) => {
			return Err(TomeError::FrontMatter {
				path: path.display().to_string(),
				reason: "null, nested arrays, and objects are not supported in document fields"
					.to_string(),
			});
		}
	};
	Ok(scalar)
}
