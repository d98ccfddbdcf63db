use crate::decode::{Context, Result, Value};

/// Capability for types that decode themselves from raw JSON.
///
/// Register an implementing type with [`impl_unmarshal_json!`](crate::impl_unmarshal_json)
/// so the decoder hands it the located value re-serialized as canonical JSON.
pub trait UnmarshalJson {
	/// Decode from one JSON value.
	fn unmarshal_json(&mut self, data: &[u8]) -> std::result::Result<(), Box<dyn std::error::Error + Send + Sync>>;
}

/// Dispatch a located value to a type's own [`UnmarshalJson`] hook.
///
/// An absent value never calls the hook; `null` is passed through as `null`.
/// Hook failures are wrapped with the current location, message verbatim.
pub fn unmarshal_custom<T: UnmarshalJson + ?Sized>(target: &mut T, raw: Option<&Value>, ctx: &Context<'_>) -> Result<()> {
	let Some(raw) = raw else {
		return Ok(());
	};
	let data = raw.to_json_vec().map_err(|err| ctx.custom_failed(Box::new(err)))?;
	target.unmarshal_json(&data).map_err(|source| ctx.custom_failed(source))
}

/// Implement [`Unmarshal`](crate::Unmarshal) for types implementing [`UnmarshalJson`].
///
/// ```
/// use jsonry::UnmarshalJson;
///
/// #[derive(Default)]
/// struct Flag(bool);
///
/// impl UnmarshalJson for Flag {
/// 	fn unmarshal_json(&mut self, data: &[u8]) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
/// 		self.0 = data == b"\"on\"";
/// 		Ok(())
/// 	}
/// }
///
/// jsonry::impl_unmarshal_json!(Flag);
/// ```
#[macro_export]
macro_rules! impl_unmarshal_json {
	($($ty:ty),+ $(,)?) => {
		$(
			impl $crate::decode::Unmarshal for $ty {
				fn shape() -> $crate::decode::Shape {
					$crate::decode::Shape::new(
						::core::concat!(::core::module_path!(), "::", ::core::stringify!($ty)),
						$crate::decode::Def::Custom,
					)
				}

				fn unmarshal(
					&mut self,
					raw: ::core::option::Option<&$crate::decode::Value>,
					ctx: &$crate::decode::Context<'_>,
				) -> $crate::decode::Result<()> {
					$crate::decode::unmarshal_custom(self, raw, ctx)
				}
			}

			impl $crate::decode::Receiver for $ty {
				fn target(&mut self) -> ::core::result::Result<&mut dyn $crate::decode::Record, $crate::decode::ReceiverError> {
					::core::result::Result::Err($crate::decode::ReceiverError::NonPointer)
				}
			}
		)+
	};
}
