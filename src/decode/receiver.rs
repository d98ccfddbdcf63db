use std::collections::{BTreeMap, HashMap};

use num_complex::Complex;

use crate::decode::{Context, DecodeOptions, Record, ReceiverError, Result, Unmarshal, Value, parse_document, unmarshal_fields};

/// Something handed to [`unmarshal`] as the decode destination.
///
/// Only a mutable reference to a record is accepted. Records and builtin
/// destination types passed by value are receivers too, so that the mistake
/// surfaces as an error naming it.
pub trait Receiver {
	/// The record to decode into, or why this receiver is unusable.
	fn target(&mut self) -> std::result::Result<&mut dyn Record, ReceiverError>;
}

impl<T: Unmarshal> Receiver for &mut T {
	fn target(&mut self) -> std::result::Result<&mut dyn Record, ReceiverError> {
		(**self).as_record_mut().ok_or_else(|| ReceiverError::NotAStruct {
			type_name: T::shape().type_name.into_owned(),
		})
	}
}

macro_rules! by_value_receiver {
	($([$($generics:tt)*] $ty:ty),* $(,)?) => {
		$(
			impl<$($generics)*> Receiver for $ty {
				fn target(&mut self) -> std::result::Result<&mut dyn Record, ReceiverError> {
					Err(ReceiverError::NonPointer)
				}
			}
		)*
	};
}

by_value_receiver!(
	[] bool,
	[] String,
	[] Value,
	[] i8,
	[] i16,
	[] i32,
	[] i64,
	[] i128,
	[] isize,
	[] u8,
	[] u16,
	[] u32,
	[] u64,
	[] u128,
	[] usize,
	[] f32,
	[] f64,
	[T] Complex<T>,
	[T] Option<T>,
	[T] Vec<T>,
	[T, const N: usize] [T; N],
	[K, V, S] HashMap<K, V, S>,
	[K, V] BTreeMap<K, V>,
);

/// Decode `data` into the record behind `receiver` with default options.
pub fn unmarshal<R: Receiver>(data: &[u8], receiver: R) -> Result<()> {
	unmarshal_with(data, receiver, &DecodeOptions::default())
}

/// Decode `data` into the record behind `receiver`.
///
/// The receiver is validated before the document is parsed. Fields are then
/// decoded in declaration order; the first failure is returned.
pub fn unmarshal_with<R: Receiver>(data: &[u8], mut receiver: R, options: &DecodeOptions) -> Result<()> {
	let record = receiver.target()?;
	let root = parse_document(data)?;
	let descriptor = record.record_descriptor()?;
	let ctx = Context::root(descriptor.type_name(), options);
	unmarshal_fields(record, &root, &ctx)
}
