//! `serde_pickle` value tree to [`PyValue`].

use serde_pickle::{HashableValue, Value};

use crate::PyValue;

impl From<Value> for PyValue {
    fn from(value: Value) -> Self {
        match value {
            Value::None => PyValue::None,
            Value::Bool(b) => PyValue::Bool(b),
            Value::I64(i) => PyValue::Int(i),
            Value::Int(i) => PyValue::from(i),
            Value::F64(f) => PyValue::Float(f),
            Value::Bytes(b) => PyValue::Bytes(b),
            Value::String(s) => PyValue::Str(s),
            Value::List(items) => PyValue::List(items.into_iter().map(PyValue::from).collect()),
            Value::Tuple(items) => PyValue::Tuple(items.into_iter().map(PyValue::from).collect()),
            Value::Set(items) => PyValue::Set(items.into_iter().map(PyValue::from).collect()),
            Value::FrozenSet(items) => {
                PyValue::FrozenSet(items.into_iter().map(PyValue::from).collect())
            }
            Value::Dict(pairs) => PyValue::Dict(
                pairs
                    .into_iter()
                    .map(|(k, v)| (PyValue::from(k), PyValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<HashableValue> for PyValue {
    fn from(value: HashableValue) -> Self {
        match value {
            HashableValue::None => PyValue::None,
            HashableValue::Bool(b) => PyValue::Bool(b),
            HashableValue::I64(i) => PyValue::Int(i),
            HashableValue::Int(i) => PyValue::from(i),
            HashableValue::F64(f) => PyValue::Float(f),
            HashableValue::Bytes(b) => PyValue::Bytes(b),
            HashableValue::String(s) => PyValue::Str(s),
            HashableValue::Tuple(items) => {
                PyValue::Tuple(items.into_iter().map(PyValue::from).collect())
            }
            HashableValue::FrozenSet(items) => {
                PyValue::FrozenSet(items.into_iter().map(PyValue::from).collect())
            }
        }
    }
}
