//! JSON encoder error type.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum JsonError {
    #[error("object of type {0} is not JSON serializable")]
    Unsupported(&'static str),
    #[error("keys must be str, int, float, bool or None, not {0}")]
    InvalidKey(&'static str),
    #[error("byte string is not valid UTF-8")]
    InvalidUtf8,
    #[error("out of range float value {0} is not JSON compliant")]
    NonFinite(f64),
}
