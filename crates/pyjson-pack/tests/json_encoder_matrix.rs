use num_bigint::BigInt;
use proptest::prelude::*;
use pyjson_pack::json::{JsonEncoder, JsonEncoderStable, JsonError, Separators};
use pyjson_pack::{OtherValue, PyValue};

fn stable(value: &PyValue) -> String {
    let bytes = JsonEncoderStable::new().encode(value).expect("encode");
    String::from_utf8(bytes).expect("ascii output")
}

fn s(v: &str) -> PyValue {
    PyValue::from(v)
}

#[test]
fn set_of_scalars_becomes_object_of_empty_objects() {
    let set = PyValue::Set(vec![
        s("alpha"),
        PyValue::Int(3),
        PyValue::Float(0.5),
        PyValue::Bool(true),
        PyValue::None,
    ]);
    let out = stable(&set);
    let parsed: serde_json::Value = serde_json::from_str(&out).expect("valid json");
    let obj = parsed.as_object().expect("object");
    let mut keys: Vec<&str> = obj.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, ["0.5", "3", "alpha", "null", "true"]);
    for value in obj.values() {
        assert_eq!(value, &serde_json::json!({}));
    }
}

#[test]
fn frozenset_behaves_like_set() {
    let value = PyValue::FrozenSet(vec![s("b"), s("a")]);
    assert_eq!(stable(&value), r#"{"a": {}, "b": {}}"#);
}

#[test]
fn nested_set_transformed_in_place() {
    let value = PyValue::dict([
        (
            "outer",
            PyValue::List(vec![
                PyValue::Int(1),
                PyValue::Set(vec![s("y"), s("x")]),
                s("tail"),
            ]),
        ),
        ("next", PyValue::Tuple(vec![PyValue::None])),
    ]);
    assert_eq!(
        stable(&value),
        r#"{"next": [null], "outer": [1, {"x": {}, "y": {}}, "tail"]}"#
    );
}

#[test]
fn set_of_tuples_fails_key_coercion() {
    let value = PyValue::Set(vec![PyValue::Tuple(vec![PyValue::Int(1)])]);
    assert_eq!(
        JsonEncoderStable::new().encode(&value),
        Err(JsonError::InvalidKey("tuple"))
    );
}

#[test]
fn colliding_set_elements_keep_one_key() {
    let value = PyValue::Set(vec![PyValue::Int(1), s("1")]);
    assert_eq!(stable(&value), r#"{"1": {}}"#);

    let value = PyValue::Set(vec![PyValue::Bool(true), s("true"), PyValue::None, s("null")]);
    assert_eq!(stable(&value), r#"{"null": {}, "true": {}}"#);
}

#[test]
fn weights_and_classes_wrapping_order() {
    let weights = PyValue::dict([(
        "layer1",
        PyValue::List(vec![PyValue::Float(0.1), PyValue::Float(0.2)]),
    )]);
    let classes = PyValue::List(vec![s("cat"), s("dog")]);
    let value = PyValue::dict([("Weights", weights), ("Classes", classes)]);
    assert_eq!(
        stable(&value),
        r#"{"Classes": ["cat", "dog"], "Weights": {"layer1": [0.1, 0.2]}}"#
    );
}

#[test]
fn keys_are_escaped_like_values() {
    let value = PyValue::Set(vec![s("naïve"), s("a\"b")]);
    assert_eq!(stable(&value), r#"{"a\"b": {}, "na\u00efve": {}}"#);
}

#[test]
fn non_ascii_sorts_by_code_point() {
    let value = PyValue::dict([("é", PyValue::Int(1)), ("z", PyValue::Int(2)), ("😀", PyValue::Int(3))]);
    assert_eq!(
        stable(&value),
        r#"{"z": 2, "\u00e9": 1, "\ud83d\ude00": 3}"#
    );
}

#[test]
fn floats_follow_python_repr() {
    let value = PyValue::List(vec![
        PyValue::Float(1.0),
        PyValue::Float(1e-5),
        PyValue::Float(1e16),
        PyValue::Float(-0.25),
    ]);
    assert_eq!(stable(&value), "[1.0, 1e-05, 1e+16, -0.25]");

    let keys = PyValue::Dict(vec![(PyValue::Float(2.0), PyValue::None)]);
    assert_eq!(stable(&keys), r#"{"2.0": null}"#);
}

#[test]
fn big_ints_and_bytes() {
    let big: BigInt = "123456789012345678901234567890".parse().unwrap();
    let value = PyValue::List(vec![PyValue::from(-big), PyValue::Bytes(b"py2 str".to_vec())]);
    assert_eq!(stable(&value), r#"[-123456789012345678901234567890, "py2 str"]"#);

    let bad = PyValue::Bytes(vec![0xc3, 0x28]);
    assert_eq!(
        JsonEncoderStable::new().encode(&bad),
        Err(JsonError::InvalidUtf8)
    );
}

#[test]
fn unsupported_values_abort_encoding() {
    for other in [
        OtherValue::Ellipsis,
        OtherValue::StopIteration,
        OtherValue::Complex { re: 0.0, im: 1.0 },
    ] {
        let name = other.type_name();
        let value = PyValue::dict([("deep", PyValue::List(vec![PyValue::Other(other)]))]);
        assert_eq!(
            JsonEncoderStable::new().encode(&value),
            Err(JsonError::Unsupported(name))
        );
    }
}

#[test]
fn non_finite_floats_rejected() {
    for f in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
        let err = JsonEncoderStable::new()
            .encode(&PyValue::Float(f))
            .unwrap_err();
        assert!(matches!(err, JsonError::NonFinite(_)));
    }
}

#[test]
fn insertion_order_encoder_still_handles_sets() {
    let value = PyValue::dict([("z", PyValue::Set(vec![s("q")])), ("a", PyValue::None)]);
    let out = JsonEncoder::with_separators(Separators::compact())
        .encode(&value)
        .unwrap();
    assert_eq!(out, br#"{"z":{"q":{}},"a":null}"#);
}

proptest! {
    #[test]
    fn key_order_is_independent_of_insertion_order(
        entries in prop::collection::btree_map("[a-zA-Z0-9_]{0,6}", any::<i64>(), 0..12)
    ) {
        let forward: Vec<(String, PyValue)> = entries
            .iter()
            .map(|(k, v)| (k.clone(), PyValue::Int(*v)))
            .collect();
        let mut backward = forward.clone();
        backward.reverse();

        let nested = |pairs: Vec<(String, PyValue)>| {
            let inner = PyValue::dict(pairs.clone());
            PyValue::dict(pairs.into_iter().chain([("inner".to_owned(), inner)]))
        };

        let mut encoder = JsonEncoderStable::new();
        let a = encoder.encode(&nested(forward.clone())).unwrap();
        let b = encoder.encode(&nested(backward)).unwrap();
        prop_assert_eq!(&a, &b);

        // BTreeMap iteration order is byte-lexicographic, the expected output order.
        let flat = encoder.encode(&PyValue::dict(forward.clone())).unwrap();
        let mut expected = String::from("{");
        for (i, (k, v)) in entries.iter().enumerate() {
            if i > 0 {
                expected.push_str(", ");
            }
            expected.push_str(&format!("\"{}\": {}", k, v));
        }
        expected.push('}');
        prop_assert_eq!(String::from_utf8(flat).unwrap(), expected);
    }
}
