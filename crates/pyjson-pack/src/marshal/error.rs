//! Marshal decoder error type.

use pyjson_buffers::BufferError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MarshalError {
    #[error("unexpected end of input")]
    UnexpectedEof,
    #[error("invalid marshal type code 0x{code:02x} at offset {offset}")]
    InvalidType { code: u8, offset: usize },
    #[error("unsupported marshal type `{0}`")]
    UnsupportedType(char),
    #[error("invalid size {0}")]
    InvalidSize(i64),
    #[error("invalid reference {0}")]
    InvalidRef(u32),
    #[error("reference {0} points to an object that is still being decoded")]
    RecursiveRef(u32),
    #[error("NULL object outside of a dict")]
    UnexpectedNull,
    #[error("invalid UTF-8")]
    InvalidUtf8,
    #[error("long digit {0} out of range")]
    InvalidDigit(u16),
    #[error("invalid float literal {0:?}")]
    InvalidFloat(String),
    #[error("nesting deeper than {0} levels")]
    TooDeep(usize),
}

impl From<BufferError> for MarshalError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer => MarshalError::UnexpectedEof,
            BufferError::InvalidUtf8 => MarshalError::InvalidUtf8,
        }
    }
}
