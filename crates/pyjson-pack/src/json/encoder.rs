//! Writes a [`PyValue`] tree as ASCII-only JSON.
//!
//! Objects keep the insertion order of their keys; see
//! [`JsonEncoderStable`](super::JsonEncoderStable) for sorted output.
//!
//! Besides standard JSON rules this encoder:
//! - writes `set`/`frozenset` as an object of `{}` values (the set fallback)
//! - escapes every non-printable or non-ASCII character as `\uXXXX`
//! - formats floats the way Python's `repr` does

use pyjson_buffers::Writer;

use super::error::JsonError;
use super::types::Separators;
use super::util::{self, Entry};
use crate::PyValue;

pub struct JsonEncoder {
    pub writer: Writer,
    pub separators: Separators,
}

impl Default for JsonEncoder {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonEncoder {
    pub fn new() -> Self {
        Self::with_separators(Separators::default())
    }

    pub fn with_separators(separators: Separators) -> Self {
        Self {
            writer: Writer::new(),
            separators,
        }
    }

    /// Encodes `value`; on error nothing written so far is kept.
    pub fn encode(&mut self, value: &PyValue) -> Result<Vec<u8>, JsonError> {
        self.writer.reset();
        match self.write_any(value) {
            Ok(()) => Ok(self.writer.flush()),
            Err(err) => {
                self.writer.discard();
                Err(err)
            }
        }
    }

    pub fn write_any(&mut self, value: &PyValue) -> Result<(), JsonError> {
        match value {
            PyValue::None => self.write_null(),
            PyValue::Bool(b) => self.write_boolean(*b),
            PyValue::Int(i) => self.write_integer(*i),
            PyValue::BigInt(i) => self.writer.ascii(&i.to_string()),
            PyValue::Float(f) => self.write_float(*f)?,
            PyValue::Str(s) => self.write_str(s),
            PyValue::Bytes(b) => self.write_bytes(b)?,
            PyValue::List(arr) | PyValue::Tuple(arr) => self.write_arr(arr)?,
            PyValue::Dict(pairs) => self.write_obj(pairs)?,
            PyValue::Set(items) | PyValue::FrozenSet(items) => self.write_set(items)?,
            PyValue::Other(other) => return Err(JsonError::Unsupported(other.type_name())),
        }
        Ok(())
    }

    pub fn write_null(&mut self) {
        self.writer.ascii("null");
    }

    pub fn write_boolean(&mut self, b: bool) {
        self.writer.ascii(if b { "true" } else { "false" });
    }

    pub fn write_integer(&mut self, int: i64) {
        self.writer.ascii(&int.to_string());
    }

    pub fn write_float(&mut self, float: f64) -> Result<(), JsonError> {
        if !float.is_finite() {
            return Err(JsonError::NonFinite(float));
        }
        self.writer.ascii(&util::format_float(float));
        Ok(())
    }

    /// Writes a byte string as text; it must be valid UTF-8.
    pub fn write_bytes(&mut self, bytes: &[u8]) -> Result<(), JsonError> {
        let s = std::str::from_utf8(bytes).map_err(|_| JsonError::InvalidUtf8)?;
        self.write_str(s);
        Ok(())
    }

    /// Writes a quoted JSON string, escaping everything outside printable ASCII.
    pub fn write_str(&mut self, s: &str) {
        let bytes = s.as_bytes();
        self.writer.ensure_capacity(bytes.len() + 2);
        self.writer.u8(b'"');
        // Fast path: nothing to escape.
        if bytes.iter().all(|&b| (0x20..0x7f).contains(&b) && b != b'"' && b != b'\\') {
            self.writer.buf(bytes);
            self.writer.u8(b'"');
            return;
        }
        let mut units = [0u16; 2];
        for c in s.chars() {
            match c {
                '"' => self.writer.ascii("\\\""),
                '\\' => self.writer.ascii("\\\\"),
                '\n' => self.writer.ascii("\\n"),
                '\r' => self.writer.ascii("\\r"),
                '\t' => self.writer.ascii("\\t"),
                '\u{8}' => self.writer.ascii("\\b"),
                '\u{c}' => self.writer.ascii("\\f"),
                ' '..='~' => self.writer.u8(c as u8),
                _ => {
                    for unit in c.encode_utf16(&mut units) {
                        self.writer.ascii(&format!("\\u{:04x}", unit));
                    }
                }
            }
        }
        self.writer.u8(b'"');
    }

    pub fn write_arr(&mut self, arr: &[PyValue]) -> Result<(), JsonError> {
        self.writer.u8(b'[');
        for (i, item) in arr.iter().enumerate() {
            if i > 0 {
                self.writer.ascii(self.separators.item);
            }
            self.write_any(item)?;
        }
        self.writer.u8(b']');
        Ok(())
    }

    pub fn write_obj(&mut self, pairs: &[(PyValue, PyValue)]) -> Result<(), JsonError> {
        let entries = util::dict_entries(pairs)?;
        self.write_entries(&entries)
    }

    /// The set fallback: writes `items` as an object of empty objects.
    pub fn write_set(&mut self, items: &[PyValue]) -> Result<(), JsonError> {
        let entries = util::set_entries(items)?;
        self.write_entries(&entries)
    }

    pub fn write_entries(&mut self, entries: &[Entry<'_>]) -> Result<(), JsonError> {
        self.writer.u8(b'{');
        for (i, (key, val)) in entries.iter().enumerate() {
            if i > 0 {
                self.writer.ascii(self.separators.item);
            }
            self.write_str(key);
            self.writer.ascii(self.separators.key);
            self.write_any(val)?;
        }
        self.writer.u8(b'}');
        Ok(())
    }
}
