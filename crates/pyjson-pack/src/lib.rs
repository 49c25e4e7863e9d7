//! Decoding of Python `marshal` and `pickle` dumps into a [`PyValue`] tree,
//! and set-aware JSON encoding of that tree.
//!
//! ```
//! use pyjson_pack::json::JsonEncoderStable;
//! use pyjson_pack::PyValue;
//!
//! let classes = PyValue::Set(vec![PyValue::from("neg"), PyValue::from("pos")]);
//! let value = PyValue::dict([("Classes", classes)]);
//! let json = JsonEncoderStable::new().encode(&value).unwrap();
//! assert_eq!(json, br#"{"Classes": {"neg": {}, "pos": {}}}"#);
//! ```

mod value;

pub mod json;
pub mod marshal;
pub mod pickle;

pub use value::{OtherValue, PyValue, ValueKind};
