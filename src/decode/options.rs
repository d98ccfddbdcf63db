/// Runtime limits for one decode call.
///
/// Deserializable so embedding applications can load it from their own
/// config; missing keys fall back to [`DecodeOptions::default`].
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
	/// Maximum nesting depth, counted once per record field, sequence element,
	/// and map entry. `Option` and `Box` add no level of their own.
	pub max_depth: u32,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self { max_depth: 64 }
	}
}

impl DecodeOptions {
	/// Preset for payloads from untrusted peers.
	pub fn strict() -> Self {
		Self { max_depth: 16 }
	}
}
