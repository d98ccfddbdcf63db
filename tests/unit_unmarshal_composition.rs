#![allow(missing_docs)]

use std::collections::HashMap;

use jsonry::{DecodeError, Record};
use jsonry_testkit::{assert_decode_error, assert_decodes};

#[derive(Debug, Default, Clone, PartialEq, Record)]
struct Inner {
	s: String,
}

fn inner(s: &str) -> Inner {
	Inner { s: s.to_owned() }
}

#[test]
fn struct_field() {
	#[derive(Default, Record)]
	struct Holder {
		t: Inner,
	}

	let mut holder = Holder::default();
	assert_decodes(r#"{"t":{"s":"foo"}}"#, &mut holder);
	assert_eq!(holder.t.s, "foo");

	assert_decode_error(
		r#"{"t":"foo"}"#,
		&mut holder,
		r#"cannot unmarshal "foo" type "string" into field "t" (type "unit_unmarshal_composition::Inner")"#,
	);
}

#[test]
fn optional_struct_field() {
	#[derive(Default, Record)]
	struct Holder {
		t: Option<Inner>,
	}

	let mut holder = Holder::default();
	assert_decodes(r#"{"t":null}"#, &mut holder);
	assert_eq!(holder.t, None);
	assert_decodes(r#"{"t":{"s":"foo"}}"#, &mut holder);
	assert_eq!(holder.t, Some(inner("foo")));

	assert_decode_error(
		r#"{"t":"foo"}"#,
		&mut holder,
		r#"cannot unmarshal "foo" type "string" into field "t" (type "Option<unit_unmarshal_composition::Inner>")"#,
	);
}

#[test]
fn boxed_struct_field_is_transparent() {
	#[derive(Default, Record)]
	struct Holder {
		t: Box<Inner>,
	}

	let mut holder = Holder::default();
	assert_decodes(r#"{"t":{"s":"foo"}}"#, &mut holder);
	assert_eq!(*holder.t, inner("foo"));
}

#[test]
fn slice_of_structs() {
	#[derive(Default, Record)]
	struct Holder {
		t: Vec<Inner>,
	}

	let mut holder = Holder::default();
	assert_decodes(r#"{"t":[{"s":"foo"},{"s":"bar"},{},{"s":"baz"}]}"#, &mut holder);
	assert_eq!(holder.t, vec![inner("foo"), inner("bar"), Inner::default(), inner("baz")]);

	let err = assert_decode_error(
		r#"{"t":[null]}"#,
		&mut holder,
		r#"cannot unmarshal "<nil>" into index 0 (type "unit_unmarshal_composition::Inner") path t[0]"#,
	);
	assert!(matches!(err, DecodeError::NullElement { .. }));
}

#[test]
fn slice_of_optional_structs_accepts_null() {
	#[derive(Default, Record)]
	struct Holder {
		t: Vec<Option<Inner>>,
	}

	let mut holder = Holder::default();
	assert_decodes(r#"{"t":[null,{"s":"foo"}]}"#, &mut holder);
	assert_eq!(holder.t, vec![None, Some(inner("foo"))]);
}

#[test]
fn map_of_structs() {
	#[derive(Default, Record)]
	struct Holder {
		t: HashMap<String, Inner>,
	}

	let mut holder = Holder::default();
	assert_decodes(r#"{"t":{"foo":{"s":"alpha"},"bar":{"s":"beta"}}}"#, &mut holder);
	assert_eq!(
		holder.t,
		HashMap::from([("foo".to_owned(), inner("alpha")), ("bar".to_owned(), inner("beta"))])
	);

	assert_decode_error(
		r#"{"t":5}"#,
		&mut holder,
		r#"cannot unmarshal "5" type "number" into field "t" (type "HashMap<String, unit_unmarshal_composition::Inner>")"#,
	);
}

#[test]
fn map_of_structs_rejects_null_values() {
	#[derive(Default, Record)]
	struct Holder {
		t: HashMap<String, Inner>,
	}

	assert_decode_error(
		r#"{"t":{"foo":null}}"#,
		&mut Holder::default(),
		r#"cannot unmarshal "<nil>" into key "foo" (type "unit_unmarshal_composition::Inner") path t["foo"]"#,
	);
}

#[test]
fn nested_record_paths_are_relative_to_the_located_object() {
	#[derive(Debug, Default, PartialEq, Record)]
	struct Org {
		#[jsonry("data.guid")]
		guid: String,
		#[jsonry("data.meta.count")]
		count: u32,
	}

	#[derive(Default, Record)]
	struct Holder {
		#[jsonry("relationships.organization")]
		org: Org,
	}

	let mut holder = Holder::default();
	assert_decodes(r#"{"relationships":{"organization":{"data":{"guid":"abc","meta":{"count":3}}}}}"#, &mut holder);
	assert_eq!(
		holder.org,
		Org {
			guid: "abc".to_owned(),
			count: 3
		}
	);

	assert_decode_error(
		r#"{"relationships":{"organization":{"data":{"meta":{"count":"x"}}}}}"#,
		&mut holder,
		r#"cannot unmarshal "x" type "string" into field "count" (type "u32") path org.count"#,
	);
}

#[test]
fn nested_element_errors_carry_the_full_subscript_path() {
	#[derive(Default, Record)]
	struct Route {
		host: String,
		port: u16,
	}

	#[derive(Default, Record)]
	struct App {
		routes: Vec<Route>,
	}

	#[derive(Default, Record)]
	struct Holder {
		#[jsonry("resources")]
		apps: Vec<App>,
	}

	assert_decode_error(
		r#"{"resources":[{"routes":[]},{"routes":[{"host":"a","port":80},{"host":"b","port":70000}]}]}"#,
		&mut Holder::default(),
		r#"cannot unmarshal "70000" type "number" into field "port" (type "u16") path apps[1].routes[1].port: out of range"#,
	);
}

#[test]
fn first_error_wins() {
	#[derive(Default, Record)]
	struct Holder {
		a: String,
		b: bool,
		c: i32,
	}

	let mut holder = Holder::default();
	assert_decode_error(
		r#"{"a":"set","b":"bad","c":"also bad"}"#,
		&mut holder,
		r#"cannot unmarshal "bad" type "string" into field "b" (type "bool")"#,
	);
	assert_eq!(holder.a, "set");
	assert_eq!(holder.c, 0);
}
