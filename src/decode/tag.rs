use crate::decode::FieldPath;

const NAME_TAG_SKIP: &str = "-";

/// Raw attribute values attached to one record field.
#[derive(Debug, Clone, Copy, Default)]
pub struct FieldTags<'a> {
	/// Hierarchical path tag, `#[jsonry("a.b.c")]`.
	pub path: Option<&'a str>,
	/// Generic name tag, `#[json("name,omitempty")]`.
	pub name: Option<&'a str>,
}

/// Outcome of resolving a field's tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
	/// Decode the field from this path.
	Path(FieldPath),
	/// Leave the field untouched.
	Skip,
}

/// Derive a field's path from its tags and identifier.
///
/// Precedence is path tag, then the name tag's first comma-separated token,
/// then the identifier. A name tag of exactly `-` skips the field; an empty
/// name falls through to the identifier. Returns `None` for a malformed path
/// tag.
pub fn resolve_field(ident: &str, tags: FieldTags<'_>) -> Option<Resolution> {
	if let Some(path) = tags.path {
		return FieldPath::parse(path).map(Resolution::Path);
	}

	if let Some(name) = tags.name {
		if name == NAME_TAG_SKIP {
			return Some(Resolution::Skip);
		}
		let key = name.split(',').next().unwrap_or_default();
		if !key.is_empty() {
			return Some(Resolution::Path(FieldPath::single(key)));
		}
	}

	let ident = ident.strip_prefix("r#").unwrap_or(ident);
	Some(Resolution::Path(FieldPath::single(ident)))
}
