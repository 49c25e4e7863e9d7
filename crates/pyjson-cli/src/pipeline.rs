//! gunzip → decode → JSON → file.

use std::fs::{self, File};
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use flate2::read::MultiGzDecoder;
use pyjson_pack::json::JsonEncoderStable;
use pyjson_pack::{marshal, pickle, PyValue};

use crate::ConvertError;

/// Which kind of Python dump the compressed payload holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pipeline {
    /// One arbitrary object written with `marshal.dump`.
    Marshal,
    /// A `(weights, classes)` pair written with `pickle.dump`.
    Pickle,
}

impl Pipeline {
    /// Name of the binary that runs this pipeline.
    pub fn program(self) -> &'static str {
        match self {
            Pipeline::Marshal => "marshal2json",
            Pipeline::Pickle => "pickle2json",
        }
    }

    pub fn about(self) -> &'static str {
        match self {
            Pipeline::Marshal => "Convert a gzip'd Python marshal file into a JSON file",
            Pipeline::Pickle => "Convert a gzip'd (weights, classes) pickle into a JSON file",
        }
    }

    /// Decodes an uncompressed payload into the tree that gets encoded.
    pub fn decode(self, payload: &[u8]) -> Result<PyValue, ConvertError> {
        match self {
            Pipeline::Marshal => Ok(marshal::decode(payload)?),
            Pipeline::Pickle => {
                let (weights, classes) = pickle::decode_pair(payload)?;
                Ok(weights_and_classes(weights, classes))
            }
        }
    }
}

/// `{"Weights": weights, "Classes": classes}`
pub fn weights_and_classes(weights: PyValue, classes: PyValue) -> PyValue {
    PyValue::dict([("Weights", weights), ("Classes", classes)])
}

/// Reads a whole gzip stream, concatenated members included.
pub fn gunzip<R: Read>(reader: R) -> Result<Vec<u8>, ConvertError> {
    let mut payload = Vec::new();
    MultiGzDecoder::new(reader)
        .read_to_end(&mut payload)
        .map_err(ConvertError::Decompress)?;
    Ok(payload)
}

/// Encodes with sorted keys and ASCII-only output.
pub fn encode(value: &PyValue) -> Result<Vec<u8>, ConvertError> {
    Ok(JsonEncoderStable::new().encode(value)?)
}

/// Runs `pipeline` from `source` to `destination`.
///
/// The destination is only created once the JSON is fully encoded, so a
/// failed conversion leaves nothing behind.
pub fn convert_file(
    pipeline: Pipeline,
    source: &Path,
    destination: &Path,
) -> Result<(), ConvertError> {
    let file = File::open(source).map_err(|source_err| ConvertError::Io {
        path: source.to_path_buf(),
        source: source_err,
    })?;
    let payload = gunzip(BufReader::new(file))?;
    let value = pipeline.decode(&payload)?;
    let json = encode(&value)?;
    fs::write(destination, json).map_err(|err| ConvertError::Io {
        path: destination.to_path_buf(),
        source: err,
    })
}

/// `./<file name of source>` in the working directory.
///
/// The name is kept verbatim: `/data/model.bin.gz` becomes `./model.bin.gz`.
pub fn default_destination(source: &Path) -> PathBuf {
    let name = source.file_name().unwrap_or(source.as_os_str());
    Path::new(".").join(name)
}
