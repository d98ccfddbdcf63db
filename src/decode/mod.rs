mod coerce;
mod context;
mod custom;
mod error;
mod navigate;
mod options;
mod parse;
mod path;
mod receiver;
mod record;
mod shape;
mod tag;
mod value;

/// Type-directed coercion trait implemented by every destination type.
pub use coerce::Unmarshal;
/// Per-value coercion context carried through recursion.
pub use context::Context;
/// Self-decode capability and its dispatch helper.
pub use custom::{UnmarshalJson, unmarshal_custom};
/// Error, result alias, and diagnostic location types.
pub use error::{DecodeError, Location, NumberReason, ReceiverError, Result, Slot};
/// Non-erroring path lookup.
pub use navigate::locate;
/// Runtime limits for decoding.
pub use options::DecodeOptions;
/// Document parser entry point.
pub use parse::parse_document;
/// Dot-separated field path.
pub use path::FieldPath;
/// Receiver validation and the top-level entry points.
pub use receiver::{Receiver, unmarshal, unmarshal_with};
/// Record trait and the per-field decode driver.
pub use record::{Record, unmarshal_fields, unmarshal_record};
/// Static destination shapes and record descriptors.
pub use shape::{Def, DescriptorFn, FieldDescriptor, FieldSpec, RecordDescriptor, Shape};
/// Field tag resolution.
pub use tag::{FieldTags, Resolution, resolve_field};
/// Dynamic JSON value tree.
pub use value::{JsonKind, Map, Number, Value};
