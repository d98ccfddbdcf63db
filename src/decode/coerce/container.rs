use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use super::declared;
use crate::decode::{Context, Def, Map, Result, Shape, Unmarshal, Value};

impl<T: Unmarshal + Default> Unmarshal for Option<T> {
	fn shape() -> Shape {
		let inner = T::shape();
		Shape::new(format!("Option<{}>", inner.type_name), Def::Pointer(Box::new(inner)))
	}

	fn unmarshal(&mut self, raw: Option<&Value>, ctx: &Context<'_>) -> Result<()> {
		match raw {
			None | Some(Value::Null) => Ok(()),
			Some(value) => self.insert(T::default()).unmarshal(Some(value), &ctx.pointee()),
		}
	}
}

impl<T: Unmarshal> Unmarshal for Box<T> {
	fn shape() -> Shape {
		let inner = T::shape();
		Shape::new(format!("Box<{}>", inner.type_name), inner.def)
	}

	fn unmarshal(&mut self, raw: Option<&Value>, ctx: &Context<'_>) -> Result<()> {
		(**self).unmarshal(raw, ctx)
	}

	fn as_record_mut(&mut self) -> Option<&mut dyn crate::decode::Record> {
		(**self).as_record_mut()
	}
}

/// Decode one sequence element or map value into a fresh `T`.
///
/// `null` yields `T`'s zero value, except for records, which reject it.
fn unmarshal_element<T: Unmarshal + Default>(item: &Value, shape: &Shape, ctx: &Context<'_>) -> Result<T> {
	let mut slot = T::default();
	if item.is_null() {
		if shape.rejects_null_element() {
			return Err(ctx.null_element());
		}
		return Ok(slot);
	}
	slot.unmarshal(Some(item), ctx)?;
	Ok(slot)
}

impl<T: Unmarshal + Default> Unmarshal for Vec<T> {
	fn shape() -> Shape {
		let elem = T::shape();
		Shape::new(format!("Vec<{}>", elem.type_name), Def::Sequence(Box::new(elem)))
	}

	fn unmarshal(&mut self, raw: Option<&Value>, ctx: &Context<'_>) -> Result<()> {
		let items = match raw {
			None | Some(Value::Null) => return Ok(()),
			Some(Value::Array(items)) => items,
			Some(other) => return Err(ctx.mismatch(other)),
		};

		let found = ctx.shape().and_then(|shape| match &shape.def {
			Def::Sequence(elem) => Some(&**elem),
			_ => None,
		});
		let elem = declared(found, T::shape);
		let mut out = Vec::with_capacity(items.len());
		for (index, item) in items.iter().enumerate() {
			let elem_ctx = ctx.index(index, &elem)?;
			out.push(unmarshal_element(item, &elem, &elem_ctx)?);
		}
		*self = out;
		Ok(())
	}
}

impl<T: Unmarshal, const N: usize> Unmarshal for [T; N] {
	fn shape() -> Shape {
		let elem = T::shape();
		Shape::new(
			format!("[{}; {N}]", elem.type_name),
			Def::Array {
				len: N,
				elem: Box::new(elem),
			},
		)
	}

	fn unmarshal(&mut self, _raw: Option<&Value>, ctx: &Context<'_>) -> Result<()> {
		let found = ctx.shape().filter(|shape| matches!(shape.def, Def::Array { .. }));
		Err(ctx.unsupported(&declared(found, Self::shape).type_name))
	}
}

fn map_shape<K: Unmarshal, V: Unmarshal>(container: &str) -> Shape {
	let key = K::shape();
	let value = V::shape();
	Shape::new(
		format!("{container}<{}, {}>", key.type_name, value.type_name),
		Def::Map {
			key: Box::new(key),
			value: Box::new(value),
		},
	)
}

/// Coerce a located object into the entries of a map destination.
///
/// The key type is validated before the value is looked at. `Ok(None)` when
/// the value is absent or `null`.
fn unmarshal_map<K, V>(raw: Option<&Value>, ctx: &Context<'_>) -> Result<Option<Vec<(K, V)>>>
where
	K: Unmarshal + Default,
	V: Unmarshal + Default,
{
	let found = ctx.shape().and_then(|shape| match &shape.def {
		Def::Map { key, value } => Some((&**key, &**value)),
		_ => None,
	});
	let key_shape = declared(found.map(|(key, _)| key), K::shape);
	if !key_shape.is_string() {
		return Err(ctx.unsupported_key(&key_shape.type_name));
	}
	let entries: &Map = match raw {
		None | Some(Value::Null) => return Ok(None),
		Some(Value::Object(entries)) => entries,
		Some(other) => return Err(ctx.mismatch(other)),
	};

	let value_shape = declared(found.map(|(_, value)| value), V::shape);
	let mut out = Vec::with_capacity(entries.len());
	for (key, item) in entries {
		let entry_ctx = ctx.key(key, &value_shape)?;
		let mut typed_key = K::default();
		typed_key.unmarshal(Some(&Value::String(key.clone())), &entry_ctx)?;
		out.push((typed_key, unmarshal_element(item, &value_shape, &entry_ctx)?));
	}
	Ok(Some(out))
}

impl<K, V, S> Unmarshal for HashMap<K, V, S>
where
	K: Unmarshal + Default + Eq + Hash,
	V: Unmarshal + Default,
	S: BuildHasher + Default,
{
	fn shape() -> Shape {
		map_shape::<K, V>("HashMap")
	}

	fn unmarshal(&mut self, raw: Option<&Value>, ctx: &Context<'_>) -> Result<()> {
		if let Some(entries) = unmarshal_map(raw, ctx)? {
			*self = entries.into_iter().collect();
		}
		Ok(())
	}
}

impl<K, V> Unmarshal for BTreeMap<K, V>
where
	K: Unmarshal + Default + Ord,
	V: Unmarshal + Default,
{
	fn shape() -> Shape {
		map_shape::<K, V>("BTreeMap")
	}

	fn unmarshal(&mut self, raw: Option<&Value>, ctx: &Context<'_>) -> Result<()> {
		if let Some(entries) = unmarshal_map(raw, ctx)? {
			*self = entries.into_iter().collect();
		}
		Ok(())
	}
}
