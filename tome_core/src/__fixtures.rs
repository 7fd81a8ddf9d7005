use crate::Document;
use crate::OrderedFloat;
use crate::Scalar;
use crate::Value;

pub fn string_value(text: &str) -> Value {
	Value::Scalar(Scalar::String(text.to_string()))
}

pub fn number_value(value: f64) -> Value {
	Value::Scalar(Scalar::Number(OrderedFloat(value)))
}

pub fn string_item(text: &str) -> Scalar {
	Scalar::String(text.to_string())
}

pub fn number_item(value: f64) -> Scalar {
	Scalar::Number(OrderedFloat(value))
}

pub fn array_value(items: &[Scalar]) -> Value {
	Value::Array(items.to_vec())
}

pub fn document(fields: &[(&str, Value)]) -> Document {
	fields
		.iter()
		.map(|(name, value)| ((*name).to_string(), value.clone()))
		.collect()
}
