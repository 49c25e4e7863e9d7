//! Pickle decoding error type.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PickleError {
    #[error("pickle decode failed: {0}")]
    Decode(#[from] serde_pickle::Error),
    #[error("expected a pair of values, found {found}")]
    NotAPair { found: String },
}
