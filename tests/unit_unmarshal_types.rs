#![allow(missing_docs)]

use std::collections::{BTreeMap, HashMap};

use jsonry::{Record, Value};
use jsonry_testkit::{assert_decode_error, assert_decodes, assert_json_eq};
use num_complex::Complex;
use serde_json::json;

#[test]
fn basic_string_field() {
	#[derive(Default, Record)]
	struct Holder {
		foo: String,
	}

	let mut holder = Holder::default();
	assert_decodes(r#"{"foo": "works"}"#, &mut holder);
	assert_eq!(holder.foo, "works");
}

#[test]
fn string_field() {
	#[derive(Default, Record)]
	struct Holder {
		s: String,
	}

	let mut holder = Holder::default();
	assert_decodes(r#"{"s": "works"}"#, &mut holder);
	assert_eq!(holder.s, "works");

	assert_decode_error(r#"{"s": 12}"#, &mut holder, r#"cannot unmarshal "12" type "number" into field "s" (type "String")"#);
}

#[test]
fn bool_fields() {
	#[derive(Default, Record)]
	struct Holder {
		t: bool,
		f: bool,
	}

	let mut holder = Holder { t: false, f: true };
	assert_decodes(r#"{"t":true,"f":false}"#, &mut holder);
	assert!(holder.t);
	assert!(!holder.f);

	assert_decode_error(r#"{"t": 12}"#, &mut holder, r#"cannot unmarshal "12" type "number" into field "t" (type "bool")"#);
}

macro_rules! integer_field_test {
	($($name:ident => $ty:ty),* $(,)?) => {
		$(
			#[test]
			fn $name() {
				#[derive(Default, Record)]
				struct Holder {
					i: $ty,
				}

				let mut holder = Holder::default();
				assert_decodes(r#"{"i":42}"#, &mut holder);
				assert_eq!(holder.i, 42);

				let message = format!(
					r#"cannot unmarshal "foo" type "string" into field "i" (type "{}")"#,
					stringify!($ty)
				);
				assert_decode_error(r#"{"i":"foo"}"#, &mut holder, &message);
			}
		)*
	};
}

integer_field_test!(
	i8_field => i8,
	i16_field => i16,
	i32_field => i32,
	i64_field => i64,
	i128_field => i128,
	isize_field => isize,
	u8_field => u8,
	u16_field => u16,
	u32_field => u32,
	u64_field => u64,
	u128_field => u128,
	usize_field => usize,
);

#[test]
fn integer_overflow_and_fraction() {
	#[derive(Default, Record)]
	struct Holder {
		small: i8,
		count: u32,
	}

	let mut holder = Holder::default();
	assert_decode_error(
		r#"{"small":300}"#,
		&mut holder,
		r#"cannot unmarshal "300" type "number" into field "small" (type "i8"): out of range"#,
	);
	assert_decode_error(
		r#"{"count":2.5}"#,
		&mut holder,
		r#"cannot unmarshal "2.5" type "number" into field "count" (type "u32"): not an integer"#,
	);
	assert_decode_error(
		r#"{"count":-1}"#,
		&mut holder,
		r#"cannot unmarshal "-1" type "number" into field "count" (type "u32"): out of range"#,
	);
}

#[test]
fn integer_literal_spelling() {
	#[derive(Default, Record)]
	struct Holder {
		n: u32,
		m: i64,
	}

	let mut holder = Holder { n: 7, m: 7 };
	assert_decodes(r#"{"n":-0,"m":-0}"#, &mut holder);
	assert_eq!((holder.n, holder.m), (0, 0));

	assert_decode_error(
		r#"{"n":1E2}"#,
		&mut holder,
		r#"cannot unmarshal "1E2" type "number" into field "n" (type "u32"): not an integer"#,
	);
	assert_decode_error(
		r#"{"m":1.0E+2}"#,
		&mut holder,
		r#"cannot unmarshal "1.0E+2" type "number" into field "m" (type "i64"): not an integer"#,
	);
}

#[test]
fn f32_fields() {
	#[derive(Default, Record)]
	struct Holder {
		a: f32,
		b: f32,
	}

	let mut holder = Holder::default();
	assert_decodes(r#"{"a":42,"b":4.2}"#, &mut holder);
	assert_eq!(holder.a, 42.0);
	assert_eq!(holder.b, 4.2_f32);

	assert_decode_error(r#"{"a":"foo"}"#, &mut holder, r#"cannot unmarshal "foo" type "string" into field "a" (type "f32")"#);
}

#[test]
fn f64_fields() {
	#[derive(Default, Record)]
	struct Holder {
		a: f64,
		b: f64,
	}

	let mut holder = Holder::default();
	assert_decodes(r#"{"a":42,"b":4.2}"#, &mut holder);
	assert_eq!(holder.a, 42.0);
	assert_eq!(holder.b, 4.2);

	assert_decode_error(r#"{"a":"foo"}"#, &mut holder, r#"cannot unmarshal "foo" type "string" into field "a" (type "f64")"#);
}

#[test]
fn complex_fields_are_rejected_without_payload() {
	#[derive(Default, Record)]
	struct Narrow {
		c: Complex<f32>,
	}

	#[derive(Default, Record)]
	struct Wide {
		c: Complex<f64>,
	}

	assert_decode_error("{}", &mut Narrow::default(), r#"unsupported type "Complex<f32>" at field "c" (type "Complex<f32>")"#);
	assert_decode_error("{}", &mut Wide::default(), r#"unsupported type "Complex<f64>" at field "c" (type "Complex<f64>")"#);
}

#[test]
fn any_fields() {
	#[derive(Default, Record)]
	struct Holder {
		n: Value,
		b: Value,
		s: Value,
		i: Value,
		u: Value,
		f: Value,
		l: Value,
		m: Value,
	}

	let mut holder = Holder {
		n: Value::from("stale"),
		..Holder::default()
	};
	assert_decodes(
		r#"{"n":null,"b":true,"s":"foo","i":-42,"u":12,"f":4.2,"l":[1,2],"m":{"f":"b"}}"#,
		&mut holder,
	);

	assert!(holder.n.is_null());
	assert_eq!(holder.b.as_bool(), Some(true));
	assert_eq!(holder.s.as_str(), Some("foo"));
	assert_eq!(holder.i.as_number().and_then(|number| number.as_i64()), Some(-42));
	assert_eq!(holder.u.as_number().and_then(|number| number.as_u64()), Some(12));
	assert_eq!(holder.f.as_number().and_then(|number| number.as_f64()), Some(4.2));
	assert_json_eq(&holder.l, json!([1, 2]));
	assert_json_eq(&holder.m, json!({"f": "b"}));
}

#[test]
fn optional_scalars() {
	#[derive(Default, Record)]
	struct Holder {
		s: Option<String>,
		t: Option<String>,
		i: Option<i64>,
		j: Option<i64>,
	}

	let mut holder = Holder::default();
	assert_decodes(r#"{"s":"foo","t":null,"i":12,"j":null}"#, &mut holder);
	assert_eq!(holder.s.as_deref(), Some("foo"));
	assert_eq!(holder.t, None);
	assert_eq!(holder.i, Some(12));
	assert_eq!(holder.j, None);

	assert_decode_error(r#"{"j":"foo"}"#, &mut holder, r#"cannot unmarshal "foo" type "string" into field "j" (type "Option<i64>")"#);
}

#[test]
fn sequence_fields() {
	#[derive(Default, Record)]
	struct Holder {
		s: Vec<String>,
		n: Vec<i64>,
		i: Vec<Value>,
		e: Vec<String>,
	}

	let mut holder = Holder::default();
	assert_decodes(r#"{"s":["a","b","c"],"n":[1,2,3],"i":["a",2,true]}"#, &mut holder);
	assert_eq!(holder.s, ["a", "b", "c"]);
	assert_eq!(holder.n, [1, 2, 3]);
	assert_eq!(holder.i, vec![Value::from("a"), Value::from(2_i64), Value::from(true)]);
	assert!(holder.e.is_empty());

	assert_decode_error(r#"{"s":"foo"}"#, &mut holder, r#"cannot unmarshal "foo" type "string" into field "s" (type "Vec<String>")"#);
}

#[test]
fn optional_sequence_field() {
	#[derive(Default, Record)]
	struct Holder {
		s: Option<Vec<String>>,
	}

	let mut holder = Holder::default();
	assert_decodes(r#"{"s":["a","b","c"]}"#, &mut holder);
	assert_eq!(holder.s.as_deref(), Some(&["a".to_owned(), "b".to_owned(), "c".to_owned()][..]));

	assert_decode_error(
		r#"{"s":"foo"}"#,
		&mut holder,
		r#"cannot unmarshal "foo" type "string" into field "s" (type "Option<Vec<String>>")"#,
	);
}

#[test]
fn fixed_array_field_is_rejected_without_payload() {
	#[derive(Default, Record)]
	struct Holder {
		s: [String; 3],
	}

	assert_decode_error("{}", &mut Holder::default(), r#"unsupported type "[String; 3]" at field "s" (type "[String; 3]")"#);
}

#[test]
fn map_fields() {
	#[derive(Default, Record)]
	struct Holder {
		s: HashMap<String, String>,
		n: BTreeMap<String, i32>,
		i: HashMap<String, Value>,
		e: HashMap<String, String>,
	}

	let mut holder = Holder::default();
	assert_decodes(r#"{"s":{"a":"b","c":"d"},"n":{"f":5},"i":{"a":"b","c":5,"d":true}}"#, &mut holder);
	assert_eq!(holder.s, HashMap::from([("a".to_owned(), "b".to_owned()), ("c".to_owned(), "d".to_owned())]));
	assert_eq!(holder.n, BTreeMap::from([("f".to_owned(), 5)]));
	assert_eq!(
		holder.i,
		HashMap::from([
			("a".to_owned(), Value::from("b")),
			("c".to_owned(), Value::from(5_i64)),
			("d".to_owned(), Value::from(true)),
		])
	);
	assert!(holder.e.is_empty());

	assert_decode_error(
		r#"{"s":"foo"}"#,
		&mut holder,
		r#"cannot unmarshal "foo" type "string" into field "s" (type "HashMap<String, String>")"#,
	);
}

#[test]
fn optional_map_fields() {
	#[derive(Default, Record)]
	struct Holder {
		s: Option<HashMap<String, String>>,
		n: Option<HashMap<String, i32>>,
		e: Option<HashMap<String, String>>,
	}

	let mut holder = Holder::default();
	assert_decodes(r#"{"s":{"a":"b","c":"d"},"n":{"f":5}}"#, &mut holder);
	assert_eq!(holder.s.as_ref().map(HashMap::len), Some(2));
	assert_eq!(holder.n.as_ref().and_then(|map| map.get("f")), Some(&5));
	assert!(holder.e.is_none());

	assert_decode_error(
		r#"{"s":"foo"}"#,
		&mut holder,
		r#"cannot unmarshal "foo" type "string" into field "s" (type "Option<HashMap<String, String>>")"#,
	);
}

#[test]
fn map_with_non_string_keys_is_rejected_without_payload() {
	#[derive(Default, Record)]
	struct Holder {
		s: HashMap<i64, String>,
	}

	assert_decode_error(
		"{}",
		&mut Holder::default(),
		r#"maps must only have string keys for "i64" at field "s" (type "HashMap<i64, String>")"#,
	);
}

#[test]
fn map_value_errors_name_the_key() {
	#[derive(Default, Record)]
	struct Holder {
		limits: BTreeMap<String, u16>,
	}

	assert_decode_error(
		r#"{"limits":{"memory":512,"disk":"big"}}"#,
		&mut Holder::default(),
		r#"cannot unmarshal "big" type "string" into key "disk" (type "u16") path limits["disk"]"#,
	);
}
