use pyjson_pack::json::JsonEncoderStable;
use pyjson_pack::marshal::{self, MarshalDecoder, MarshalError};
use pyjson_pack::{OtherValue, PyValue};

const FLAG_REF: u8 = 0x80;

fn short_ascii(out: &mut Vec<u8>, s: &str) {
    out.push(b'z');
    out.push(s.len() as u8);
    out.extend_from_slice(s.as_bytes());
}

fn int(out: &mut Vec<u8>, i: i32) {
    out.push(b'i');
    out.extend_from_slice(&i.to_le_bytes());
}

fn size(out: &mut Vec<u8>, n: i32) {
    out.extend_from_slice(&n.to_le_bytes());
}

#[test]
fn scalar_matrix() {
    let mut unicode = vec![b'u'];
    size(&mut unicode, "héllo".len() as i32);
    unicode.extend_from_slice("héllo".as_bytes());

    let mut binary_float = vec![b'g'];
    binary_float.extend_from_slice(&0.1f64.to_le_bytes());

    let mut int64 = vec![b'I'];
    int64.extend_from_slice(&(1i64 << 40).to_le_bytes());

    let mut ascii = vec![b'a'];
    size(&mut ascii, 3);
    ascii.extend_from_slice(b"abc");

    let mut bytes = vec![b's'];
    size(&mut bytes, 2);
    bytes.extend_from_slice(&[0x00, 0xff]);

    let cases: Vec<(Vec<u8>, PyValue)> = vec![
        (b"N".to_vec(), PyValue::None),
        (b"T".to_vec(), PyValue::Bool(true)),
        (b"S".to_vec(), PyValue::Other(OtherValue::StopIteration)),
        (unicode, PyValue::from("héllo")),
        (binary_float, PyValue::Float(0.1)),
        (b"f\x040.25".to_vec(), PyValue::Float(0.25)),
        (int64, PyValue::Int(1 << 40)),
        (ascii, PyValue::from("abc")),
        (b"Z\x02hi".to_vec(), PyValue::from("hi")),
        (bytes, PyValue::Bytes(vec![0x00, 0xff])),
        (
            b"x\x031.5\x03-2.0".to_vec(),
            PyValue::Other(OtherValue::Complex { re: 1.5, im: -2.0 }),
        ),
    ];
    let mut decoder = MarshalDecoder::new();
    for (input, expected) in cases {
        assert_eq!(decoder.decode(&input), Ok(expected), "input {:?}", input);
    }
}

#[test]
fn containers() {
    // {'a': {1, 2}, 'b': [None, (True,)], 'c': frozenset()}
    let mut input = vec![b'{'];
    short_ascii(&mut input, "a");
    input.push(b'<');
    size(&mut input, 2);
    int(&mut input, 1);
    int(&mut input, 2);
    short_ascii(&mut input, "b");
    input.push(b'[');
    size(&mut input, 2);
    input.push(b'N');
    input.extend_from_slice(&[b')', 1, b'T']);
    short_ascii(&mut input, "c");
    input.push(b'>');
    size(&mut input, 0);
    input.push(b'0');

    let expected = PyValue::dict([
        ("a", PyValue::Set(vec![PyValue::Int(1), PyValue::Int(2)])),
        (
            "b",
            PyValue::List(vec![PyValue::None, PyValue::Tuple(vec![PyValue::Bool(true)])]),
        ),
        ("c", PyValue::FrozenSet(vec![])),
    ]);
    assert_eq!(marshal::decode(&input), Ok(expected));
}

#[test]
fn flag_ref_back_references() {
    // [s, s] where the second item points back at the first
    let mut input = vec![b'[' | FLAG_REF];
    size(&mut input, 2);
    input.extend_from_slice(&[b'Z' | FLAG_REF, 3]);
    input.extend_from_slice(b"cat");
    input.push(b'r');
    input.extend_from_slice(&1u32.to_le_bytes());

    assert_eq!(
        marshal::decode(&input),
        Ok(PyValue::List(vec![PyValue::from("cat"), PyValue::from("cat")]))
    );
}

#[test]
fn self_reference_is_rejected() {
    let mut input = vec![b'[' | FLAG_REF];
    size(&mut input, 1);
    input.push(b'r');
    input.extend_from_slice(&0u32.to_le_bytes());
    assert_eq!(marshal::decode(&input), Err(MarshalError::RecursiveRef(0)));
}

#[test]
fn dangling_reference_is_rejected() {
    let mut input = vec![b'r'];
    input.extend_from_slice(&5u32.to_le_bytes());
    assert_eq!(marshal::decode(&input), Err(MarshalError::InvalidRef(5)));
}

#[test]
fn python2_interned_strings() {
    // ('abc', 'abc') as written by Python 2: `t` then `R` 0
    let mut input = vec![b'('];
    size(&mut input, 2);
    input.push(b't');
    size(&mut input, 3);
    input.extend_from_slice(b"abc");
    input.push(b'R');
    input.extend_from_slice(&0u32.to_le_bytes());
    assert_eq!(
        marshal::decode(&input),
        Ok(PyValue::Tuple(vec![PyValue::from("abc"), PyValue::from("abc")]))
    );
}

#[test]
fn code_objects_are_unsupported() {
    assert_eq!(
        marshal::decode(b"c\x00\x00\x00\x00"),
        Err(MarshalError::UnsupportedType('c'))
    );
}

#[test]
fn bad_float_text() {
    assert_eq!(
        marshal::decode(b"f\x03abc"),
        Err(MarshalError::InvalidFloat("abc".into()))
    );
}

#[test]
fn decoded_graph_encodes_with_sets_as_objects() {
    // {'words': {'b', 'a'}, 'count': 2}
    let mut input = vec![b'{' | FLAG_REF];
    short_ascii(&mut input, "words");
    input.push(b'<');
    size(&mut input, 2);
    short_ascii(&mut input, "b");
    short_ascii(&mut input, "a");
    short_ascii(&mut input, "count");
    int(&mut input, 2);
    input.push(b'0');

    let value = marshal::decode(&input).expect("decode");
    let json = JsonEncoderStable::new().encode(&value).expect("encode");
    assert_eq!(
        String::from_utf8(json).unwrap(),
        r#"{"count": 2, "words": {"a": {}, "b": {}}}"#
    );
}
