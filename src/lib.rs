//! Public library API for decoding nested JSON documents into flat records.
//!
//! Fields declare where their value lives with `#[jsonry("a.b.c")]`, fall back
//! to `#[json("name")]`, and otherwise use their own identifier:
//!
//! ```
//! use jsonry::Record;
//!
//! #[derive(Debug, Default, Record)]
//! struct Space {
//! 	name: String,
//! 	#[jsonry("relationships.organization.data.guid")]
//! 	org_guid: String,
//! }
//!
//! let mut space = Space::default();
//! jsonry::unmarshal(br#"{"name":"dev","relationships":{"organization":{"data":{"guid":"abc"}}}}"#, &mut space).unwrap();
//! assert_eq!(space.org_guid, "abc");
//! ```

extern crate self as jsonry;

/// Document parsing, path navigation, and type-directed coercion.
pub mod decode;

pub use decode::{
	Context, DecodeError, DecodeOptions, FieldDescriptor, FieldPath, JsonKind, Location, Map, Number, Receiver, Record, RecordDescriptor, Result, Unmarshal,
	UnmarshalJson, Value, parse_document, unmarshal, unmarshal_with,
};
/// Registers a struct as a decodable record.
pub use jsonry_derive::Record;
