use crate::decode::{FieldPath, Value};

/// Walk `root` along `path`, one object key per segment.
///
/// A missing key, or any intermediate that is not an object (including
/// `null`), means the value is absent. This never fails; type mismatches only
/// become errors once a leaf is coerced.
pub fn locate<'v>(root: &'v Value, path: &FieldPath) -> Option<&'v Value> {
	let mut current = root;
	for segment in path.segments() {
		let Value::Object(map) = current else {
			return None;
		};
		current = map.get(segment)?;
	}
	Some(current)
}
