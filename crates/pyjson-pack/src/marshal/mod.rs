//! CPython `marshal` format decoding.
//!
//! Covers the data types `marshal.dumps` produces under Python 2 and 3.
//! Code objects are rejected.

pub mod constants;
pub mod decoder;
pub mod error;

pub use decoder::MarshalDecoder;
pub use error::MarshalError;

use crate::PyValue;

/// Decodes the first marshalled object in `input`.
pub fn decode(input: &[u8]) -> Result<PyValue, MarshalError> {
    MarshalDecoder::new().decode(input)
}
