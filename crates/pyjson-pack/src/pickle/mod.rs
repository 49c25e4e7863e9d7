//! Python `pickle` decoding, backed by `serde_pickle`.

pub mod convert;
pub mod error;

pub use error::PickleError;

use serde_pickle::DeOptions;

use crate::PyValue;

/// Decodes one pickled object.
pub fn decode(input: &[u8]) -> Result<PyValue, PickleError> {
    let value = serde_pickle::value_from_slice(input, DeOptions::new())?;
    Ok(PyValue::from(value))
}

/// Decodes a pickled 2-sequence, e.g. the `(weights, classes)` tuple, into
/// its two positional values.
pub fn decode_pair(input: &[u8]) -> Result<(PyValue, PyValue), PickleError> {
    match decode(input)? {
        PyValue::Tuple(items) | PyValue::List(items) => match <[PyValue; 2]>::try_from(items) {
            Ok([first, second]) => Ok((first, second)),
            Err(items) => Err(PickleError::NotAPair {
                found: format!("a sequence of {} values", items.len()),
            }),
        },
        other => Err(PickleError::NotAPair {
            found: format!("a {}", other.type_name()),
        }),
    }
}
