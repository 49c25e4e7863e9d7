//! Conversion error type.

use std::io;
use std::path::PathBuf;

use pyjson_pack::json::JsonError;
use pyjson_pack::marshal::MarshalError;
use pyjson_pack::pickle::PickleError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("{}: {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("gzip decompression failed: {0}")]
    Decompress(#[source] io::Error),
    #[error("marshal decode failed: {0}")]
    Marshal(#[from] MarshalError),
    #[error(transparent)]
    Pickle(#[from] PickleError),
    #[error("JSON encode failed: {0}")]
    Encode(#[from] JsonError),
}
