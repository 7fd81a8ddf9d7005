/// A float wrapper that implements `Eq` via approximate comparison,
/// allowing [`Scalar`] to derive `PartialEq` cleanly.
#[derive(Debug, Clone, Copy)]
pub struct OrderedFloat(pub f64);

impl PartialEq for OrderedFloat {
	fn eq(&self, other: &Self) -> bool {
		float_cmp::approx_eq!(f64, self.0, other.0)
	}
}

impl std::fmt::Display for OrderedFloat {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", self.0)
	}
}

impl From<f64> for OrderedFloat {
	fn from(value: f64) -> Self {
		Self(value)
	}
}

/// A single field element: a string, a number, or a boolean.
///
/// Numbers are kept as floats regardless of how the source file spelled them;
/// integral values are rendered without a fractional part.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
	String(String),
	Number(OrderedFloat),
	Bool(bool),
}

impl Scalar {
	/// The string content, if this scalar is a string.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(text) => Some(text),
			_ => None,
		}
	}
}

impl std::fmt::Display for Scalar {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::String(text) => write!(f, "{text}"),
			Self::Number(number) => write!(f, "{number}"),
			Self::Bool(value) => write!(f, "{value}"),
		}
	}
}

/// A field value: a single [`Scalar`] or an ordered array of scalars.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
	Scalar(Scalar),
	Array(Vec<Scalar>),
}

impl Value {
	/// Shorthand for a string scalar value.
	pub fn string(text: impl Into<String>) -> Self {
		Self::Scalar(Scalar::String(text.into()))
	}

	/// The string content, if this value is a string scalar.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::Scalar(scalar) => scalar.as_str(),
			Self::Array(_) => None,
		}
	}
}

/// An ordered mapping from field name to [`Value`], describing one logical
/// entity. Insertion order is preserved; inserting an existing field replaces
/// its value in place.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
	fields: Vec<(String, Value)>,
}

impl Document {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn len(&self) -> usize {
		self.fields.len()
	}

	pub fn is_empty(&self) -> bool {
		self.fields.is_empty()
	}

	/// Look up a field by name.
	pub fn get(&self, name: &str) -> Option<&Value> {
		self.fields
			.iter()
			.find(|(field, _)| field == name)
			.map(|(_, value)| value)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.fields.iter().any(|(field, _)| field == name)
	}

	/// Insert a field. An existing field keeps its position and has its value
	/// replaced; a new field is appended.
	pub fn insert(&mut self, name: impl Into<String>, value: Value) {
		let name = name.into();
		match self.fields.iter_mut().find(|(field, _)| *field == name) {
			Some((_, existing)) => *existing = value,
			None => self.fields.push((name, value)),
		}
	}

	/// Remove a field by name, returning its value if it was present.
	pub fn remove(&mut self, name: &str) -> Option<Value> {
		let index = self.fields.iter().position(|(field, _)| field == name)?;
		Some(self.fields.remove(index).1)
	}

	/// Iterate fields in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
		self.fields
			.iter()
			.map(|(name, value)| (name.as_str(), value))
	}

	/// Iterate field names in insertion order.
	pub fn field_names(&self) -> impl Iterator<Item = &str> {
		self.fields.iter().map(|(name, _)| name.as_str())
	}

	/// Convert this document into a JSON object, preserving field order.
	pub fn to_json(&self) -> serde_json::Value {
		let mut object = serde_json::Map::new();
		for (name, value) in &self.fields {
			object.insert(name.clone(), value_to_json(value));
		}
		serde_json::Value::Object(object)
	}
}

impl FromIterator<(String, Value)> for Document {
	fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
		let mut document = Self::new();
		for (name, value) in iter {
			document.insert(name, value);
		}
		document
	}
}

impl IntoIterator for Document {
	type Item = (String, Value);
	type IntoIter = std::vec::IntoIter<(String, Value)>;

	fn into_iter(self) -> Self::IntoIter {
		self.fields.into_iter()
	}
}

fn value_to_json(value: &Value) -> serde_json::Value {
	match value {
		Value::Scalar(scalar) => scalar_to_json(scalar),
		Value::Array(elements) => {
			serde_json::Value::Array(elements.iter().map(scalar_to_json).collect())
		}
	}
}

fn scalar_to_json(scalar: &Scalar) -> serde_json::Value {
	match scalar {
		Scalar::String(text) => serde_json::Value::String(text.clone()),
		Scalar::Number(number) => {
			let float = number.0;
			// Integral numbers serialize without a fractional part.
			if float.fract() == 0.0 && float.abs() < i64::MAX as f64 {
				serde_json::Value::Number(serde_json::Number::from(float as i64))
			} else {
				serde_json::Number::from_f64(float)
					.map_or(serde_json::Value::Null, serde_json::Value::Number)
			}
		}
		Scalar::Bool(value) => serde_json::Value::Bool(*value),
	}
}
