use std::borrow::Cow;
use std::sync::OnceLock;

use crate::decode::{Context, DecodeError, FieldPath, FieldTags, Resolution, Result, resolve_field};

/// Lazily fetches a record's cached descriptor.
pub type DescriptorFn = fn() -> Result<&'static RecordDescriptor>;

/// Static description of a destination type.
#[derive(Debug, Clone)]
pub struct Shape {
	/// Type name rendered in diagnostics.
	pub type_name: Cow<'static, str>,
	/// Structural definition.
	pub def: Def,
}

/// Structural kind of a destination type.
#[derive(Debug, Clone)]
pub enum Def {
	/// `bool`.
	Bool,
	/// `String`.
	String,
	/// Signed or unsigned integer of the given width.
	Integer {
		/// Whether negative values are representable.
		signed: bool,
		/// Width in bits.
		bits: u32,
	},
	/// IEEE float of the given width.
	Float {
		/// Width in bits.
		bits: u32,
	},
	/// Complex number; never decodable.
	Complex {
		/// Width in bits of both parts together.
		bits: u32,
	},
	/// Fixed-size array; never decodable.
	Array {
		/// Element count.
		len: usize,
		/// Element shape.
		elem: Box<Shape>,
	},
	/// Growable sequence.
	Sequence(Box<Shape>),
	/// Keyed mapping.
	Map {
		/// Key shape; must be [`Def::String`].
		key: Box<Shape>,
		/// Value shape.
		value: Box<Shape>,
	},
	/// Nested record.
	Record(DescriptorFn),
	/// Optional indirection; absent and `null` leave it unset.
	Pointer(Box<Shape>),
	/// Fully dynamic [`Value`](crate::Value).
	Any,
	/// Type decoding itself through [`UnmarshalJson`](crate::UnmarshalJson).
	Custom,
}

impl Shape {
	/// Construct a shape.
	pub fn new(type_name: impl Into<Cow<'static, str>>, def: Def) -> Self {
		Self {
			type_name: type_name.into(),
			def,
		}
	}

	/// Whether this is a string-typed shape usable as a map key.
	pub fn is_string(&self) -> bool {
		matches!(self.def, Def::String)
	}

	/// Whether a `null` sequence element must be rejected instead of zeroed.
	pub fn rejects_null_element(&self) -> bool {
		matches!(self.def, Def::Record(_))
	}

	/// Payload-independent validation, run before the field's value is located.
	///
	/// Walks through pointers, sequences, and map values; stops at records,
	/// which validate their own fields when decoded.
	pub fn check(&self, ctx: &Context<'_>) -> Result<()> {
		match &self.def {
			Def::Complex { .. } | Def::Array { .. } => Err(ctx.unsupported(&self.type_name)),
			Def::Map { key, value } => {
				if !key.is_string() {
					return Err(ctx.unsupported_key(&key.type_name));
				}
				value.check(ctx)
			}
			Def::Pointer(inner) | Def::Sequence(inner) => inner.check(ctx),
			Def::Bool | Def::String | Def::Integer { .. } | Def::Float { .. } | Def::Record(_) | Def::Any | Def::Custom => Ok(()),
		}
	}
}

/// One field as declared on the record type, before tag resolution.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
	/// Field identifier as written.
	pub ident: &'static str,
	/// `#[jsonry("...")]` value.
	pub path_tag: Option<&'static str>,
	/// `#[json("...")]` value.
	pub name_tag: Option<&'static str>,
	/// Destination shape of the field's type.
	pub shape: fn() -> Shape,
}

/// A resolved record field.
#[derive(Debug, Clone)]
pub struct FieldDescriptor {
	/// Declaration index, used to dispatch writes back into the record.
	pub index: usize,
	/// Field identifier without any raw-identifier prefix.
	pub ident: &'static str,
	/// Resolved document path; `None` when the field is skipped.
	pub path: Option<FieldPath>,
	/// Destination shape.
	pub shape: Shape,
}

impl FieldDescriptor {
	/// Whether the field is left untouched by decoding.
	pub fn is_skipped(&self) -> bool {
		self.path.is_none()
	}
}

/// Ordered field descriptors for one record type.
#[derive(Debug, Clone)]
pub struct RecordDescriptor {
	type_name: &'static str,
	fields: Vec<FieldDescriptor>,
}

impl RecordDescriptor {
	/// Resolve every declared field of `type_name`.
	pub fn build(type_name: &'static str, specs: &[FieldSpec]) -> Result<Self> {
		let mut fields = Vec::with_capacity(specs.len());
		for (index, spec) in specs.iter().enumerate() {
			let ident = spec.ident.strip_prefix("r#").unwrap_or(spec.ident);
			let tags = FieldTags {
				path: spec.path_tag,
				name: spec.name_tag,
			};
			let path = match resolve_field(ident, tags) {
				Some(Resolution::Path(path)) => Some(path),
				Some(Resolution::Skip) => None,
				None => {
					return Err(DecodeError::InvalidPath {
						record: type_name.to_owned(),
						field: ident.to_owned(),
						tag: spec.path_tag.unwrap_or_default().to_owned(),
					});
				}
			};
			fields.push(FieldDescriptor {
				index,
				ident,
				path,
				shape: (spec.shape)(),
			});
		}

		tracing::debug!(record = type_name, fields = fields.len(), "built record descriptor");
		Ok(Self { type_name, fields })
	}

	/// Return the descriptor stored in `cell`, building it on first use.
	///
	/// Concurrent first calls may each build; the first stored value wins and
	/// is never mutated afterwards. Build failures are not cached.
	pub fn cached(cell: &'static OnceLock<Self>, build: impl FnOnce() -> Result<Self>) -> Result<&'static Self> {
		if let Some(descriptor) = cell.get() {
			return Ok(descriptor);
		}
		let descriptor = build()?;
		Ok(cell.get_or_init(|| descriptor))
	}

	/// Record type name.
	pub fn type_name(&self) -> &'static str {
		self.type_name
	}

	/// Fields in declaration order, skipped ones included.
	pub fn fields(&self) -> &[FieldDescriptor] {
		&self.fields
	}

	/// Look up a field by identifier.
	pub fn field(&self, ident: &str) -> Option<&FieldDescriptor> {
		self.fields.iter().find(|field| field.ident == ident)
	}
}
