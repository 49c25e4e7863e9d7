//! Conversion pipelines behind the `marshal2json` and `pickle2json` tools.
//!
//! Both read a gzip-compressed Python dump, decode it into a
//! [`PyValue`](pyjson_pack::PyValue) tree and write it out as JSON with
//! sorted keys and sets turned into objects.

pub mod cli;
mod error;
mod pipeline;

pub use error::ConvertError;
pub use pipeline::{convert_file, default_destination, encode, gunzip, weights_and_classes, Pipeline};
