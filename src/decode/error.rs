use std::fmt;

use thiserror::Error;

use crate::decode::JsonKind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, DecodeError>;

/// Errors produced while validating the receiver, parsing, and coercing.
///
/// Decoding is fail-fast: the first error aborts the call.
#[derive(Debug, Error)]
pub enum DecodeError {
	/// Input bytes are not a single well-formed JSON document.
	#[error("malformed document: {0}")]
	Malformed(#[from] serde_json::Error),
	/// Receiver is not a reference to a record.
	#[error(transparent)]
	InvalidReceiver(#[from] ReceiverError),
	/// Located value has the wrong dynamic kind for the destination.
	#[error("cannot unmarshal \"{value}\" type \"{kind}\" into {location}")]
	TypeMismatch {
		/// Textual rendering of the offending value.
		value: String,
		/// Dynamic kind of the offending value.
		kind: JsonKind,
		/// Where the value was headed.
		location: Location,
	},
	/// Number literal does not fit the destination numeric type.
	#[error("cannot unmarshal \"{value}\" type \"number\" into {location}: {reason}")]
	InvalidNumber {
		/// Original number text.
		value: String,
		/// Why the literal was rejected.
		reason: NumberReason,
		/// Where the value was headed.
		location: Location,
	},
	/// Destination type has no JSON representation.
	#[error("unsupported type \"{type_name}\" at {location}")]
	UnsupportedType {
		/// The unsupported type itself.
		type_name: String,
		/// Field or element declaring it.
		location: Location,
	},
	/// Map destination keyed by something other than a string.
	#[error("maps must only have string keys for \"{key_type}\" at {location}")]
	UnsupportedKeyType {
		/// Declared key type.
		key_type: String,
		/// Field or element declaring the map.
		location: Location,
	},
	/// A type's own `unmarshal_json` hook failed.
	#[error("error from {call} call at {location}: {source}")]
	CustomDecodeFailed {
		/// Rendered hook call.
		call: &'static str,
		/// Field or element being decoded.
		location: Location,
		/// Error returned by the hook, rendered verbatim.
		source: Box<dyn std::error::Error + Send + Sync>,
	},
	/// `null` element in a sequence of records.
	#[error("cannot unmarshal \"<nil>\" into {location}")]
	NullElement {
		/// Element location, including index and subscript path.
		location: Location,
	},
	/// Path tag is empty or has an empty segment.
	#[error("invalid path \"{tag}\" for field \"{field}\" in \"{record}\"")]
	InvalidPath {
		/// Record type declaring the field.
		record: String,
		/// Field identifier.
		field: String,
		/// Offending tag text.
		tag: String,
	},
	/// Field descriptor does not belong to the record it was applied to.
	#[error("record \"{record}\" has no field \"{field}\" at index {index}")]
	UnknownField {
		/// Record type the write was dispatched to.
		record: &'static str,
		/// Identifier carried by the descriptor.
		field: String,
		/// Declaration index carried by the descriptor.
		index: usize,
	},
	/// Coercion recursed deeper than [`DecodeOptions::max_depth`](crate::DecodeOptions::max_depth).
	#[error("decode depth exceeded (max={max_depth}) at {location}")]
	DepthExceeded {
		/// Configured depth ceiling.
		max_depth: u32,
		/// Value at which the ceiling was hit.
		location: Location,
	},
}

impl DecodeError {
	/// Location carried by per-value failures.
	pub fn location(&self) -> Option<&Location> {
		match self {
			Self::TypeMismatch { location, .. }
			| Self::InvalidNumber { location, .. }
			| Self::UnsupportedType { location, .. }
			| Self::UnsupportedKeyType { location, .. }
			| Self::CustomDecodeFailed { location, .. }
			| Self::NullElement { location }
			| Self::DepthExceeded { location, .. } => Some(location),
			Self::Malformed(_) | Self::InvalidReceiver(_) | Self::InvalidPath { .. } | Self::UnknownField { .. } => None,
		}
	}
}

/// Receiver shape failures, checked before any parsing happens.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReceiverError {
	/// Receiver was passed by value.
	#[error("receiver must be a pointer to a struct, got a non-pointer")]
	NonPointer,
	/// Receiver references a non-record type.
	#[error("receiver must be a pointer to a struct type, got: {type_name}")]
	NotAStruct {
		/// Referenced type.
		type_name: String,
	},
}

/// Reason a number literal was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberReason {
	/// Integral, but outside the destination range.
	OutOfRange,
	/// Has a fraction or exponent where an integer is required.
	NotAnInteger,
}

impl fmt::Display for NumberReason {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::OutOfRange => f.write_str("out of range"),
			Self::NotAnInteger => f.write_str("not an integer"),
		}
	}
}

/// What kind of slot a value was being decoded into.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot {
	/// Named record field.
	Field(String),
	/// Sequence element.
	Index(usize),
	/// Map entry.
	Key(String),
}

/// Diagnostic position of a failing value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
	/// Field, index, or key.
	pub slot: Slot,
	/// Declared destination type.
	pub type_name: String,
	/// Subscript path from the decode root, e.g. `spaces[0].name`.
	pub path: String,
}

impl fmt::Display for Location {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match &self.slot {
			Slot::Field(name) => {
				write!(f, "field \"{name}\" (type \"{}\")", self.type_name)?;
				if self.path != *name {
					write!(f, " path {}", self.path)?;
				}
				Ok(())
			}
			Slot::Index(index) => write!(f, "index {index} (type \"{}\") path {}", self.type_name, self.path),
			Slot::Key(key) => write!(f, "key \"{key}\" (type \"{}\") path {}", self.type_name, self.path),
		}
	}
}
