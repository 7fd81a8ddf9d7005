use crate::Document;
use crate::Scalar;
use crate::Value;

/// Array element signaling insertion of the ancestor's array for that field.
pub const SPLICE_MARKER: &str = "^";

/// Merge a document with its per-file ancestor (defaults) document.
///
/// Document fields override ancestor fields; ancestor-only fields are copied
/// through after them. Array fields are rewritten left-to-right: every element
/// equal to the splice marker expands to the ancestor's complete array for the
/// same field (nothing when the ancestor field is missing or not an array),
/// and every other element is kept as-is. Repeated markers each re-insert the
/// full ancestor array.
pub fn inherit(document: &Document, ancestor: &Document) -> Document {
	let mut merged = Document::new();

	for (name, value) in document.iter() {
		let value = match value {
			Value::Array(elements) => Value::Array(splice(elements, ancestor.get(name))),
			other => other.clone(),
		};
		merged.insert(name, value);
	}

	for (name, value) in ancestor.iter() {
		if !merged.contains(name) {
			merged.insert(name, value.clone());
		}
	}

	merged
}

fn splice(elements: &[Scalar], ancestor_value: Option<&Value>) -> Vec<Scalar> {
	let mut out = Vec::new();

	for element in elements {
		let is_marker = matches!(element, Scalar::String(text) if text == SPLICE_MARKER);
		if is_marker {
			if let Some(Value::Array(ancestor_elements)) = ancestor_value {
				out.extend(ancestor_elements.iter().cloned());
			}
		} else {
			out.push(element.clone());
		}
	}

	out
}
