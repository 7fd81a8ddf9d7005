use crate::Document;
use crate::Scalar;
use crate::Value;

/// Prefix on a field *name* marking a macro definition.
pub const MACRO_SIGIL: char = '$';

/// Expand the macros defined by a document into its remaining string fields.
///
/// Every field whose name starts with the macro sigil defines a macro: the
/// full field name (sigil included) is the search key and its scalar value is
/// the replacement. Macro fields are removed from the result. Each macro is
/// applied to every remaining string field in definition order, substituting
/// only the first textual occurrence of its key per field. Non-string values
/// pass through untouched, and unmatched macros are not an error.
pub fn expand_macros(document: &Document) -> Document {
	let mut macros: Vec<(&str, String)> = Vec::new();
	for (name, value) in document.iter() {
		if !name.starts_with(MACRO_SIGIL) {
			continue;
		}
		// Array-valued macro fields are removed but define no substitution.
		if let Value::Scalar(scalar) = value {
			macros.push((name, scalar.to_string()));
		}
	}

	let mut expanded = Document::new();
	for (name, value) in document.iter() {
		if name.starts_with(MACRO_SIGIL) {
			continue;
		}
		let value = match value {
			Value::Scalar(Scalar::String(text)) => {
				let mut text = text.clone();
				for (key, replacement) in &macros {
					// Only the first occurrence per field is substituted.
					text = text.replacen(key, replacement, 1);
				}
				Value::Scalar(Scalar::String(text))
			}
			other => other.clone(),
		};
		expanded.insert(name, value);
	}

	expanded
}
