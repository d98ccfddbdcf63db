use std::collections::BTreeMap;

use serde_json::value::RawValue;

use crate::decode::{Number, Result, Value};

/// Parse a complete JSON document into a [`Value`] tree.
///
/// Number literals keep their source text byte for byte. Trailing
/// non-whitespace after the top-level value is rejected.
pub fn parse_document(bytes: &[u8]) -> Result<Value> {
	let raw: &RawValue = serde_json::from_slice(bytes)?;
	from_raw(raw)
}

/// Build a value from an already validated raw slice.
fn from_raw(raw: &RawValue) -> Result<Value> {
	let text = raw.get().trim();
	let value = match text.as_bytes().first() {
		Some(b'{') => {
			let entries: BTreeMap<String, &RawValue> = serde_json::from_str(text)?;
			let map = entries.into_iter().map(|(key, item)| Ok((key, from_raw(item)?))).collect::<Result<_>>()?;
			Value::Object(map)
		}
		Some(b'[') => {
			let items: Vec<&RawValue> = serde_json::from_str(text)?;
			Value::Array(items.into_iter().map(from_raw).collect::<Result<_>>()?)
		}
		Some(b'"') => Value::String(serde_json::from_str(text)?),
		_ => match text {
			"null" => Value::Null,
			"true" => Value::Bool(true),
			"false" => Value::Bool(false),
			number => Value::Number(Number::from_text(number)),
		},
	};
	Ok(value)
}
