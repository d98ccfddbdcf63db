use std::borrow::Cow;
use std::str::FromStr;

use num_complex::Complex;

use crate::decode::{Context, Def, NumberReason, Number, Record, Result, Shape, Value};

mod container;

/// A destination type the decoder can coerce dynamic values into.
///
/// `raw` is `None` when the field's path did not resolve; implementations
/// leave `self` untouched in that case.
pub trait Unmarshal {
	/// Static shape of the type.
	fn shape() -> Shape
	where
		Self: Sized;

	/// Coerce `raw` into `self`, or fail with a context-qualified error.
	///
	/// `ctx.shape()` is the declared shape of `Self` when decoding through a
	/// record field; containers read their element shapes from it.
	fn unmarshal(&mut self, raw: Option<&Value>, ctx: &Context<'_>) -> Result<()>;

	/// View as a record when the type is one; used to validate receivers.
	fn as_record_mut(&mut self) -> Option<&mut dyn Record> {
		None
	}
}

impl Unmarshal for bool {
	fn shape() -> Shape {
		Shape::new("bool", Def::Bool)
	}

	fn unmarshal(&mut self, raw: Option<&Value>, ctx: &Context<'_>) -> Result<()> {
		match raw {
			None => Ok(()),
			Some(Value::Bool(value)) => {
				*self = *value;
				Ok(())
			}
			Some(other) => Err(ctx.mismatch(other)),
		}
	}
}

impl Unmarshal for String {
	fn shape() -> Shape {
		Shape::new("String", Def::String)
	}

	fn unmarshal(&mut self, raw: Option<&Value>, ctx: &Context<'_>) -> Result<()> {
		match raw {
			None => Ok(()),
			Some(Value::String(value)) => {
				self.clone_from(value);
				Ok(())
			}
			Some(other) => Err(ctx.mismatch(other)),
		}
	}
}

impl Unmarshal for Value {
	fn shape() -> Shape {
		Shape::new("Value", Def::Any)
	}

	fn unmarshal(&mut self, raw: Option<&Value>, _ctx: &Context<'_>) -> Result<()> {
		if let Some(raw) = raw {
			*self = raw.clone();
		}
		Ok(())
	}
}

/// Shape found in the context, or one built from `build` when there is none.
fn declared<'s>(found: Option<&'s Shape>, build: impl FnOnce() -> Shape) -> Cow<'s, Shape> {
	match found {
		Some(shape) => Cow::Borrowed(shape),
		None => Cow::Owned(build()),
	}
}

fn parse_integer<T: FromStr>(number: &Number, ctx: &Context<'_>) -> Result<T> {
	let text = number.as_str();
	// Negative zero is zero for every width, unsigned included.
	let text = match text.strip_prefix('-') {
		Some(digits) if digits.bytes().all(|digit| digit == b'0') => digits,
		_ => text,
	};
	if let Ok(value) = text.parse::<T>() {
		return Ok(value);
	}
	let reason = if number.is_integer() {
		NumberReason::OutOfRange
	} else {
		NumberReason::NotAnInteger
	};
	Err(ctx.invalid_number(number.as_str(), reason))
}

macro_rules! unmarshal_integer {
	($($ty:ty => $signed:expr),* $(,)?) => {
		$(
			impl Unmarshal for $ty {
				fn shape() -> Shape {
					Shape::new(stringify!($ty), Def::Integer { signed: $signed, bits: <$ty>::BITS })
				}

				fn unmarshal(&mut self, raw: Option<&Value>, ctx: &Context<'_>) -> Result<()> {
					match raw {
						None => Ok(()),
						Some(Value::Number(number)) => {
							*self = parse_integer(number, ctx)?;
							Ok(())
						}
						Some(other) => Err(ctx.mismatch(other)),
					}
				}
			}
		)*
	};
}

unmarshal_integer!(
	i8 => true,
	i16 => true,
	i32 => true,
	i64 => true,
	i128 => true,
	isize => true,
	u8 => false,
	u16 => false,
	u32 => false,
	u64 => false,
	u128 => false,
	usize => false,
);

macro_rules! unmarshal_float {
	($($ty:ty => $bits:expr),* $(,)?) => {
		$(
			impl Unmarshal for $ty {
				fn shape() -> Shape {
					Shape::new(stringify!($ty), Def::Float { bits: $bits })
				}

				fn unmarshal(&mut self, raw: Option<&Value>, ctx: &Context<'_>) -> Result<()> {
					match raw {
						None => Ok(()),
						Some(Value::Number(number)) => match number.parse::<$ty>() {
							Some(value) if value.is_finite() => {
								*self = value;
								Ok(())
							}
							_ => Err(ctx.invalid_number(number.as_str(), NumberReason::OutOfRange)),
						},
						Some(other) => Err(ctx.mismatch(other)),
					}
				}
			}
		)*
	};
}

unmarshal_float!(f32 => 32, f64 => 64);

macro_rules! unmarshal_complex {
	($($part:ty => $bits:expr),* $(,)?) => {
		$(
			impl Unmarshal for Complex<$part> {
				fn shape() -> Shape {
					Shape::new(concat!("Complex<", stringify!($part), ">"), Def::Complex { bits: $bits })
				}

				fn unmarshal(&mut self, _raw: Option<&Value>, ctx: &Context<'_>) -> Result<()> {
					let found = ctx.shape().filter(|shape| matches!(shape.def, Def::Complex { .. }));
					Err(ctx.unsupported(&declared(found, Self::shape).type_name))
				}
			}
		)*
	};
}

unmarshal_complex!(f32 => 64, f64 => 128);
