//! Set-aware JSON encoding of [`PyValue`](crate::PyValue) trees.
//!
//! JSON has no set type. Both encoders turn a `set`/`frozenset` into an
//! object whose keys are the elements and whose values are all `{}`.

pub mod encoder;
pub mod encoder_stable;
pub mod error;
pub mod types;
pub mod util;

pub use encoder::JsonEncoder;
pub use encoder_stable::JsonEncoderStable;
pub use error::JsonError;
pub use types::Separators;
pub use util::{coerce_key, format_float};
