use std::fmt::Write as _;

use crate::decode::{Def, DecodeError, DecodeOptions, FieldDescriptor, Location, NumberReason, Result, Shape, Slot, Value};

/// Where the value currently being coerced sits, and how deep.
///
/// Contexts form a chain back to the decode root and borrow the shapes held by
/// the cached record descriptors, so entering a field, element, or entry
/// allocates nothing. The diagnostic [`Location`] is only rendered when an
/// error is built.
#[derive(Debug, Clone, Copy)]
pub struct Context<'a> {
	parent: Option<&'a Context<'a>>,
	step: Step<'a>,
	type_name: &'a str,
	shape: Option<&'a Shape>,
	depth: u32,
	max_depth: u32,
}

#[derive(Debug, Clone, Copy)]
enum Step<'a> {
	Root,
	Field(&'a str),
	Index(usize),
	Key(&'a str),
}

impl<'a> Context<'a> {
	/// Context for a decode root of the given record type.
	pub fn root(type_name: &'a str, options: &DecodeOptions) -> Self {
		Self {
			parent: None,
			step: Step::Root,
			type_name,
			shape: None,
			depth: 0,
			max_depth: options.max_depth,
		}
	}

	/// Enter a record field.
	pub fn field<'b>(&'b self, field: &'b FieldDescriptor) -> Result<Context<'b>> {
		self.enter(Step::Field(field.ident), &field.shape)
	}

	/// Enter a sequence element declared as `elem`.
	pub fn index<'b>(&'b self, index: usize, elem: &'b Shape) -> Result<Context<'b>> {
		self.enter(Step::Index(index), elem)
	}

	/// Enter the map entry `key`, whose value is declared as `value`.
	pub fn key<'b>(&'b self, key: &'b str, value: &'b Shape) -> Result<Context<'b>> {
		self.enter(Step::Key(key), value)
	}

	fn enter<'b>(&'b self, step: Step<'b>, shape: &'b Shape) -> Result<Context<'b>> {
		let child = Context {
			parent: Some(self),
			step,
			type_name: &*shape.type_name,
			shape: Some(shape),
			depth: self.depth + 1,
			max_depth: self.max_depth,
		};
		if child.depth > child.max_depth {
			return Err(DecodeError::DepthExceeded {
				max_depth: child.max_depth,
				location: child.location(),
			});
		}
		Ok(child)
	}

	/// Same location, dispatching on the pointee of a pointer shape.
	///
	/// The declared type in diagnostics stays the pointer's.
	pub fn pointee(&self) -> Context<'a> {
		let shape = match self.shape {
			Some(Shape { def: Def::Pointer(inner), .. }) => Some(&**inner),
			other => other,
		};
		Context { shape, ..*self }
	}

	/// Declared shape at this location; `None` at the decode root.
	pub fn shape(&self) -> Option<&'a Shape> {
		self.shape
	}

	/// Declared type name at this location.
	pub fn type_name(&self) -> &'a str {
		self.type_name
	}

	/// Nesting depth; fields of the root record are at depth 1.
	pub fn depth(&self) -> u32 {
		self.depth
	}

	/// Subscript path from the decode root, e.g. `apps[1].routes["web"]`.
	pub fn path(&self) -> String {
		let mut out = String::new();
		self.write_path(&mut out);
		out
	}

	fn write_path(&self, out: &mut String) {
		if let Some(parent) = self.parent {
			parent.write_path(out);
		}
		match self.step {
			Step::Root => {}
			Step::Field(name) => {
				if !out.is_empty() {
					out.push('.');
				}
				out.push_str(name);
			}
			Step::Index(index) => {
				let _ = write!(out, "[{index}]");
			}
			Step::Key(key) => {
				let _ = write!(out, "[{key:?}]");
			}
		}
	}

	/// Diagnostic location of this context.
	pub fn location(&self) -> Location {
		let slot = match self.step {
			Step::Root => Slot::Field(String::new()),
			Step::Field(name) => Slot::Field(name.to_owned()),
			Step::Index(index) => Slot::Index(index),
			Step::Key(key) => Slot::Key(key.to_owned()),
		};
		Location {
			slot,
			type_name: self.type_name.to_owned(),
			path: self.path(),
		}
	}

	/// `raw` has the wrong dynamic kind.
	pub fn mismatch(&self, raw: &Value) -> DecodeError {
		DecodeError::TypeMismatch {
			value: raw.render(),
			kind: raw.kind(),
			location: self.location(),
		}
	}

	/// Number literal rejected by the destination width.
	pub fn invalid_number(&self, text: &str, reason: NumberReason) -> DecodeError {
		DecodeError::InvalidNumber {
			value: text.to_owned(),
			reason,
			location: self.location(),
		}
	}

	/// `type_name` cannot be decoded at all.
	pub fn unsupported(&self, type_name: &str) -> DecodeError {
		DecodeError::UnsupportedType {
			type_name: type_name.to_owned(),
			location: self.location(),
		}
	}

	/// Map keyed by a non-string type.
	pub fn unsupported_key(&self, key_type: &str) -> DecodeError {
		DecodeError::UnsupportedKeyType {
			key_type: key_type.to_owned(),
			location: self.location(),
		}
	}

	/// `null` where a record element is required.
	pub fn null_element(&self) -> DecodeError {
		DecodeError::NullElement { location: self.location() }
	}

	/// A self-decoding type reported failure.
	pub fn custom_failed(&self, source: Box<dyn std::error::Error + Send + Sync>) -> DecodeError {
		DecodeError::CustomDecodeFailed {
			call: "unmarshal_json()",
			location: self.location(),
			source,
		}
	}
}
