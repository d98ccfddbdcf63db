use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::ser::{Error as _, SerializeMap, SerializeSeq};
use serde::{Serialize, Serializer};
use serde_json::value::RawValue;

use crate::decode::FieldPath;

/// String-keyed mapping used for JSON objects.
pub type Map = BTreeMap<String, Value>;

/// Dynamic JSON value tree produced by document parsing.
///
/// Numbers keep their original decimal text so that width and precision are
/// only decided once a destination type asks for them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Value {
	/// Explicit `null`.
	#[default]
	Null,
	/// `true` or `false`.
	Bool(bool),
	/// Number literal, text preserved.
	Number(Number),
	/// String literal.
	String(String),
	/// Ordered sequence.
	Array(Vec<Value>),
	/// String-keyed object.
	Object(Map),
}

/// JSON number preserved as its decimal text.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Number(Box<str>);

/// Dynamic kind of a [`Value`], named as in diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
	/// `null`
	Null,
	/// `bool`
	Bool,
	/// `number`
	Number,
	/// `string`
	String,
	/// `array`
	Array,
	/// `object`
	Object,
}

impl JsonKind {
	/// Lowercase kind name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Null => "null",
			Self::Bool => "bool",
			Self::Number => "number",
			Self::String => "string",
			Self::Array => "array",
			Self::Object => "object",
		}
	}
}

impl fmt::Display for JsonKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl Value {
	/// Dynamic kind of this value.
	pub fn kind(&self) -> JsonKind {
		match self {
			Self::Null => JsonKind::Null,
			Self::Bool(_) => JsonKind::Bool,
			Self::Number(_) => JsonKind::Number,
			Self::String(_) => JsonKind::String,
			Self::Array(_) => JsonKind::Array,
			Self::Object(_) => JsonKind::Object,
		}
	}

	/// Whether this is an explicit `null`.
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}

	/// Boolean payload, if any.
	pub fn as_bool(&self) -> Option<bool> {
		match self {
			Self::Bool(value) => Some(*value),
			_ => None,
		}
	}

	/// String payload, if any.
	pub fn as_str(&self) -> Option<&str> {
		match self {
			Self::String(value) => Some(value),
			_ => None,
		}
	}

	/// Number payload, if any.
	pub fn as_number(&self) -> Option<&Number> {
		match self {
			Self::Number(value) => Some(value),
			_ => None,
		}
	}

	/// Array elements, if any.
	pub fn as_array(&self) -> Option<&[Value]> {
		match self {
			Self::Array(items) => Some(items),
			_ => None,
		}
	}

	/// Object entries, if any.
	pub fn as_object(&self) -> Option<&Map> {
		match self {
			Self::Object(map) => Some(map),
			_ => None,
		}
	}

	/// Look up one object key.
	pub fn get(&self, key: &str) -> Option<&Value> {
		self.as_object().and_then(|map| map.get(key))
	}

	/// Follow a dotted path through nested objects.
	pub fn at(&self, path: &FieldPath) -> Option<&Value> {
		crate::decode::locate(self, path)
	}

	/// Textual rendering used inside diagnostics.
	///
	/// Scalars render bare (`foo`, `12`, `true`), `null` renders as `<nil>`,
	/// arrays and objects render as compact JSON.
	pub fn render(&self) -> String {
		match self {
			Self::Null => "<nil>".to_owned(),
			Self::Bool(value) => value.to_string(),
			Self::Number(value) => value.as_str().to_owned(),
			Self::String(value) => value.clone(),
			Self::Array(_) | Self::Object(_) => self.to_string(),
		}
	}

	/// Re-serialize to canonical compact JSON bytes.
	pub fn to_json_vec(&self) -> serde_json::Result<Vec<u8>> {
		serde_json::to_vec(self)
	}
}

impl fmt::Display for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
		f.write_str(&text)
	}
}

impl Number {
	pub(crate) fn from_text(text: impl Into<Box<str>>) -> Self {
		Self(text.into())
	}

	/// Original decimal text.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	/// Whether the literal has no fraction or exponent part.
	pub fn is_integer(&self) -> bool {
		!self.0.contains(['.', 'e', 'E'])
	}

	/// Parse the literal as any `FromStr` type.
	pub fn parse<T: FromStr>(&self) -> Option<T> {
		self.0.parse().ok()
	}

	/// Interpret as `i64` when the literal is an in-range integer.
	pub fn as_i64(&self) -> Option<i64> {
		self.parse()
	}

	/// Interpret as `u64` when the literal is an in-range integer.
	pub fn as_u64(&self) -> Option<u64> {
		self.parse()
	}

	/// Interpret as the nearest `f64`.
	pub fn as_f64(&self) -> Option<f64> {
		self.parse::<f64>().filter(|value| value.is_finite())
	}
}

impl fmt::Display for Number {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

impl FromStr for Number {
	type Err = serde_json::Error;

	fn from_str(text: &str) -> Result<Self, Self::Err> {
		serde_json::Number::from_str(text)?;
		Ok(Self::from_text(text))
	}
}

macro_rules! number_from_primitive {
	($($ty:ty),* $(,)?) => {
		$(
			impl From<$ty> for Number {
				fn from(value: $ty) -> Self {
					Self::from_text(value.to_string())
				}
			}

			impl From<$ty> for Value {
				fn from(value: $ty) -> Self {
					Self::Number(Number::from(value))
				}
			}
		)*
	};
}

number_from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<bool> for Value {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

impl From<&str> for Value {
	fn from(value: &str) -> Self {
		Self::String(value.to_owned())
	}
}

impl From<String> for Value {
	fn from(value: String) -> Self {
		Self::String(value)
	}
}

impl From<Vec<Value>> for Value {
	fn from(items: Vec<Value>) -> Self {
		Self::Array(items)
	}
}

impl From<Map> for Value {
	fn from(map: Map) -> Self {
		Self::Object(map)
	}
}

impl From<serde_json::Value> for Value {
	fn from(value: serde_json::Value) -> Self {
		match value {
			serde_json::Value::Null => Self::Null,
			serde_json::Value::Bool(value) => Self::Bool(value),
			serde_json::Value::Number(number) => Self::Number(Number::from_text(number.to_string())),
			serde_json::Value::String(value) => Self::String(value),
			serde_json::Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
			serde_json::Value::Object(map) => Self::Object(map.into_iter().map(|(key, item)| (key, Self::from(item))).collect()),
		}
	}
}

impl Serialize for Number {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		let raw = RawValue::from_string(self.0.to_string()).map_err(S::Error::custom)?;
		raw.serialize(serializer)
	}
}

impl Serialize for Value {
	fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
		match self {
			Self::Null => serializer.serialize_unit(),
			Self::Bool(value) => serializer.serialize_bool(*value),
			Self::Number(number) => number.serialize(serializer),
			Self::String(value) => serializer.serialize_str(value),
			Self::Array(items) => {
				let mut seq = serializer.serialize_seq(Some(items.len()))?;
				for item in items {
					seq.serialize_element(item)?;
				}
				seq.end()
			}
			Self::Object(map) => {
				let mut out = serializer.serialize_map(Some(map.len()))?;
				for (key, item) in map {
					out.serialize_entry(key, item)?;
				}
				out.end()
			}
		}
	}
}
