//! Byte buffer utilities for pyjson.
//!
//! - [`Reader`] - bounds-checked little-endian reads from a byte slice
//! - [`Writer`] - writes bytes to an auto-growing buffer
//!
//! # Example
//!
//! ```
//! use pyjson_buffers::{Reader, Writer};
//!
//! let mut writer = Writer::new();
//! writer.u8(b'z');
//! writer.u8(5);
//! writer.ascii("hello");
//! let data = writer.flush();
//!
//! let mut reader = Reader::new(&data);
//! assert_eq!(reader.u8().unwrap(), b'z');
//! let n = reader.u8().unwrap() as usize;
//! assert_eq!(reader.utf8(n).unwrap(), "hello");
//! ```

mod reader;
mod writer;

pub use reader::Reader;
pub use writer::Writer;

/// Error type for buffer operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BufferError {
    /// Attempted to read past the end of the buffer.
    EndOfBuffer,
    /// Invalid UTF-8 sequence.
    InvalidUtf8,
}

impl std::fmt::Display for BufferError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BufferError::EndOfBuffer => write!(f, "end of buffer"),
            BufferError::InvalidUtf8 => write!(f, "invalid UTF-8 sequence"),
        }
    }
}

impl std::error::Error for BufferError {}
