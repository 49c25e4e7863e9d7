//! The decoded Python object tree shared by every decoder and
//! the JSON encoders.

use num_bigint::BigInt;

/// A decoded Python value.
///
/// The variant is decided once by the decoder that produced it; encoders
/// dispatch on it with an exhaustive `match`.
#[derive(Debug, Clone, PartialEq)]
pub enum PyValue {
    /// `None`
    None,
    /// `True` / `False`
    Bool(bool),
    /// Integer that fits in `i64`
    Int(i64),
    /// Arbitrary precision integer outside the `i64` range
    BigInt(BigInt),
    /// `float`
    Float(f64),
    /// Text string
    Str(String),
    /// Byte string (Python 2 `str`, Python 3 `bytes`)
    Bytes(Vec<u8>),
    /// `list`
    List(Vec<PyValue>),
    /// `tuple`
    Tuple(Vec<PyValue>),
    /// `dict`, pairs in insertion order
    Dict(Vec<(PyValue, PyValue)>),
    /// `set`
    Set(Vec<PyValue>),
    /// `frozenset`
    FrozenSet(Vec<PyValue>),
    /// Decodable values with no JSON form
    Other(OtherValue),
}

/// Python values a decoder can read but the JSON encoders reject.
#[derive(Debug, Clone, PartialEq)]
pub enum OtherValue {
    Ellipsis,
    StopIteration,
    Complex { re: f64, im: f64 },
}

impl OtherValue {
    /// Python type name, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            OtherValue::Ellipsis => "ellipsis",
            OtherValue::StopIteration => "StopIteration",
            OtherValue::Complex { .. } => "complex",
        }
    }
}

/// Coarse classification of a [`PyValue`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Scalar,
    Sequence,
    Mapping,
    Set,
    Unsupported,
}

impl PyValue {
    /// An empty `dict`.
    pub const EMPTY_DICT: PyValue = PyValue::Dict(Vec::new());

    pub fn kind(&self) -> ValueKind {
        match self {
            PyValue::None
            | PyValue::Bool(_)
            | PyValue::Int(_)
            | PyValue::BigInt(_)
            | PyValue::Float(_)
            | PyValue::Str(_)
            | PyValue::Bytes(_) => ValueKind::Scalar,
            PyValue::List(_) | PyValue::Tuple(_) => ValueKind::Sequence,
            PyValue::Dict(_) => ValueKind::Mapping,
            PyValue::Set(_) | PyValue::FrozenSet(_) => ValueKind::Set,
            PyValue::Other(_) => ValueKind::Unsupported,
        }
    }

    /// Python type name, used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            PyValue::None => "NoneType",
            PyValue::Bool(_) => "bool",
            PyValue::Int(_) | PyValue::BigInt(_) => "int",
            PyValue::Float(_) => "float",
            PyValue::Str(_) => "str",
            PyValue::Bytes(_) => "bytes",
            PyValue::List(_) => "list",
            PyValue::Tuple(_) => "tuple",
            PyValue::Dict(_) => "dict",
            PyValue::Set(_) => "set",
            PyValue::FrozenSet(_) => "frozenset",
            PyValue::Other(other) => other.type_name(),
        }
    }

    /// Builds a `dict` with string keys.
    pub fn dict<K: Into<String>>(entries: impl IntoIterator<Item = (K, PyValue)>) -> PyValue {
        PyValue::Dict(
            entries
                .into_iter()
                .map(|(k, v)| (PyValue::Str(k.into()), v))
                .collect(),
        )
    }
}

impl From<BigInt> for PyValue {
    /// Narrows to [`PyValue::Int`] when the value fits in `i64`.
    fn from(int: BigInt) -> Self {
        match i64::try_from(&int) {
            Ok(i) => PyValue::Int(i),
            Err(_) => PyValue::BigInt(int),
        }
    }
}

impl From<&str> for PyValue {
    fn from(s: &str) -> Self {
        PyValue::Str(s.to_owned())
    }
}

impl From<String> for PyValue {
    fn from(s: String) -> Self {
        PyValue::Str(s)
    }
}

impl From<i64> for PyValue {
    fn from(i: i64) -> Self {
        PyValue::Int(i)
    }
}

impl From<f64> for PyValue {
    fn from(f: f64) -> Self {
        PyValue::Float(f)
    }
}

impl From<bool> for PyValue {
    fn from(b: bool) -> Self {
        PyValue::Bool(b)
    }
}
