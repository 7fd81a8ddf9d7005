use std::path::Path;
use std::path::PathBuf;

use crate::Document;
use crate::Scalar;
use crate::TomeConfig;
use crate::TomeError;
use crate::TomeResult;
use crate::Value;
use crate::expand_macros;
use crate::extract;
use crate::front_matter::DEFAULTS_ID;
use crate::front_matter::SourceFormat;
use crate::inherit;
use crate::resolve_document;
use crate::scanner::scan_files;

/// One source file's contribution to the catalog: its documents after front
/// matter extraction, path-expression resolution, and inheritance. The
/// defaults document has been consumed and does not appear here.
#[derive(Debug, Clone, PartialEq)]
pub struct ParsedFile {
	pub path: PathBuf,
	pub documents: Vec<(String, Document)>,
}

/// The full collection of documents across all parsed files, keyed by
/// document id in first-seen order.
#[derive(Debug, Default)]
pub struct Catalog {
	entries: Vec<CatalogEntry>,
}

#[derive(Debug)]
struct CatalogEntry {
	id: String,
	document: Document,
	/// Files that contributed fields to this id, in fold order.
	sources: Vec<PathBuf>,
}

impl Catalog {
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Look up a document by id.
	pub fn get(&self, id: &str) -> Option<&Document> {
		self.entries
			.iter()
			.find(|entry| entry.id == id)
			.map(|entry| &entry.document)
	}

	/// Iterate (id, document) pairs in first-seen order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Document)> {
		self.entries
			.iter()
			.map(|entry| (entry.id.as_str(), &entry.document))
	}

	/// Fold one parsed file into the catalog. Two files may contribute to the
	/// same document id only with disjoint field-name sets; any overlap is a
	/// conflict naming the id, the offending fields, and both files.
	pub fn merge_file(&mut self, file: ParsedFile) -> TomeResult<()> {
		for (id, document) in file.documents {
			match self.entries.iter_mut().find(|entry| entry.id == id) {
				Some(entry) => {
					let overlap: Vec<&str> = document
						.field_names()
						.filter(|name| entry.document.contains(name))
						.collect();
					if !overlap.is_empty() {
						return Err(TomeError::Conflict {
							id,
							fields: overlap.join(", "),
							first_file: entry
								.sources
								.first()
								.map(|path| path.display().to_string())
								.unwrap_or_default(),
							second_file: file.path.display().to_string(),
						});
					}
					for (name, value) in document {
						entry.document.insert(name, value);
					}
					entry.sources.push(file.path.clone());
				}
				None => {
					self.entries.push(CatalogEntry {
						id,
						document,
						sources: vec![file.path.clone()],
					});
				}
			}
		}

		Ok(())
	}

	/// Expand the macros defined by each document, removing the macro fields.
	pub fn expand_macros(&mut self) {
		for entry in &mut self.entries {
			entry.document = expand_macros(&entry.document);
		}
	}

	/// Render every configured field that is present as a string scalar
	/// through the markdown renderer. Unlisted fields, absent fields, and
	/// non-string values are untouched.
	pub fn render_markdown_fields(&mut self, fields: &[String]) {
		for entry in &mut self.entries {
			for field in fields {
				let Some(Value::Scalar(Scalar::String(text))) = entry.document.get(field) else {
					continue;
				};
				let html = markdown::to_html(text);
				entry.document.insert(field.clone(), Value::string(html));
			}
		}
	}

	/// Convert the catalog into a JSON object keyed by document id.
	pub fn to_json(&self) -> serde_json::Value {
		let mut object = serde_json::Map::new();
		for entry in &self.entries {
			object.insert(entry.id.clone(), entry.document.to_json());
		}
		serde_json::Value::Object(object)
	}
}

/// Parse one source file: extract front matter, resolve path expressions on
/// the defaults document and every other document, then apply inheritance,
/// consuming the defaults document.
pub fn parse_file(path: &Path) -> TomeResult<ParsedFile> {
	let Some(format) = SourceFormat::from_path(path) else {
		return Err(TomeError::UnsupportedFormat(
			path.extension()
				.and_then(|ext| ext.to_str())
				.unwrap_or_default()
				.to_string(),
		));
	};

	let raw = std::fs::read_to_string(path).map_err(|e| {
		TomeError::FileRead {
			path: path.display().to_string(),
			reason: e.to_string(),
		}
	})?;

	let group = extract(&raw, format, path)?;
	let base = path.parent().unwrap_or_else(|| Path::new("."));

	let defaults = match group.defaults {
		Some(document) => resolve_document(DEFAULTS_ID, &document, base, path)?,
		None => Document::new(),
	};

	let mut documents = Vec::new();
	for (id, document) in group.documents {
		let resolved = resolve_document(&id, &document, base, path)?;
		documents.push((id, inherit(&resolved, &defaults)));
	}

	Ok(ParsedFile {
		path: path.to_path_buf(),
		documents,
	})
}

/// Build the catalog for one document class: discover files, parse each one,
/// fold the per-file results with conflict detection, then expand macros and
/// render the configured markdown fields. Any fatal error aborts the run.
pub fn build_catalog(root: &Path, class: &str, config: &TomeConfig) -> TomeResult<Catalog> {
	let files = scan_files(root, class)?;

	let mut catalog = Catalog::default();
	for file in &files {
		let parsed = parse_file(file)?;
		catalog.merge_file(parsed)?;
	}

	catalog.expand_macros();
	catalog.render_markdown_fields(&config.markdown_fields);

	Ok(catalog)
}
