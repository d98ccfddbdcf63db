use std::fmt;

/// Ordered object keys locating a field's value inside a document.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
	segments: Vec<String>,
}

impl FieldPath {
	/// Parse dotted syntax into literal segments.
	///
	/// There is no escaping; `None` when the input is empty or any segment is.
	pub fn parse(input: &str) -> Option<Self> {
		let segments: Vec<String> = input.split('.').map(str::to_owned).collect();
		if segments.iter().any(String::is_empty) {
			return None;
		}
		Some(Self { segments })
	}

	/// One-segment path, used for identifier and name-tag defaults.
	pub fn single(key: impl Into<String>) -> Self {
		Self { segments: vec![key.into()] }
	}

	/// Segments in descent order.
	pub fn segments(&self) -> &[String] {
		&self.segments
	}

	/// Number of segments.
	pub fn len(&self) -> usize {
		self.segments.len()
	}

	/// Always false for parsed paths.
	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}
}

impl fmt::Display for FieldPath {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.segments.join("."))
	}
}
