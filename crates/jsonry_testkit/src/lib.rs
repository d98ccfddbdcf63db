//! Shared test helpers for workspace crates.

use std::path::{Path, PathBuf};

use jsonry::{DecodeError, Receiver, Value};

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Read a fixture document.
pub fn read_fixture(name: &str) -> Vec<u8> {
	let path = fixture_path(name);
	std::fs::read(&path).unwrap_or_else(|err| panic!("fixture {} unreadable: {err}", path.display()))
}

/// Decode `json` into `receiver`, panicking with the decode error on failure.
pub fn assert_decodes<R: Receiver>(json: &str, receiver: R) {
	if let Err(err) = jsonry::unmarshal(json.as_bytes(), receiver) {
		panic!("decode of {json} failed: {err}");
	}
}

/// Decode `json` into `receiver` and assert the exact error message.
pub fn assert_decode_error<R: Receiver>(json: &str, receiver: R, message: &str) -> DecodeError {
	match jsonry::unmarshal(json.as_bytes(), receiver) {
		Ok(()) => panic!("decode of {json} succeeded, expected: {message}"),
		Err(err) => {
			assert_eq!(err.to_string(), message, "decode of {json}");
			err
		}
	}
}

/// Assert that a dynamic value re-serializes to the given JSON.
pub fn assert_json_eq(value: &Value, expected: serde_json::Value) {
	let actual = serde_json::to_value(value).unwrap_or_else(|err| panic!("value serializes: {err}"));
	assert_eq!(actual, expected);
}
