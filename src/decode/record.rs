use crate::decode::{Context, FieldDescriptor, RecordDescriptor, Result, Unmarshal, Value, locate};

/// A struct whose fields are decoded one by one from document paths.
///
/// Implemented by `#[derive(Record)]`.
pub trait Record {
	/// Cached descriptor for this record type.
	fn descriptor() -> Result<&'static RecordDescriptor>
	where
		Self: Sized;

	/// Object-safe access to [`Record::descriptor`].
	fn record_descriptor(&self) -> Result<&'static RecordDescriptor>;

	/// Coerce `raw` into the field described by `field`.
	fn unmarshal_field(&mut self, field: &FieldDescriptor, raw: Option<&Value>, ctx: &Context<'_>) -> Result<()>;
}

/// Decode every non-skipped field of `record` from `root`, in declaration order.
///
/// A non-object `root` leaves every field absent. Stops at the first error.
pub fn unmarshal_fields(record: &mut dyn Record, root: &Value, ctx: &Context<'_>) -> Result<()> {
	let descriptor = record.record_descriptor()?;
	for field in descriptor.fields() {
		let Some(path) = &field.path else {
			continue;
		};
		let field_ctx = ctx.field(field)?;
		field.shape.check(&field_ctx)?;

		let raw = locate(root, path);
		if let Err(err) = record.unmarshal_field(field, raw, &field_ctx) {
			tracing::trace!(record = descriptor.type_name(), path = %field_ctx.path(), "field decode failed");
			return Err(err);
		}
	}
	Ok(())
}

/// Coerce a located value into a nested record.
///
/// Absent and `null` leave the record at its current value; anything but an
/// object is a type mismatch.
pub fn unmarshal_record<R: Record + Unmarshal>(record: &mut R, raw: Option<&Value>, ctx: &Context<'_>) -> Result<()> {
	match raw {
		None | Some(Value::Null) => Ok(()),
		Some(object @ Value::Object(_)) => unmarshal_fields(record, object, ctx),
		Some(other) => Err(ctx.mismatch(other)),
	}
}
