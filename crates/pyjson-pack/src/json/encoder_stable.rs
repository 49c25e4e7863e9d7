//! JSON encoder with deterministic (sorted) key order.
//!
//! Keys are sorted by their coerced text at every level, including the
//! objects synthesized from sets, so equal trees always encode to the same
//! bytes whatever order their keys were inserted in.

use super::encoder::JsonEncoder;
use super::error::JsonError;
use super::types::Separators;
use super::util::{self, Entry};
use crate::PyValue;

pub struct JsonEncoderStable {
    pub inner: JsonEncoder,
}

impl Default for JsonEncoderStable {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonEncoderStable {
    pub fn new() -> Self {
        Self {
            inner: JsonEncoder::new(),
        }
    }

    pub fn with_separators(separators: Separators) -> Self {
        Self {
            inner: JsonEncoder::with_separators(separators),
        }
    }

    /// Encodes `value`; on error nothing written so far is kept.
    pub fn encode(&mut self, value: &PyValue) -> Result<Vec<u8>, JsonError> {
        self.inner.writer.reset();
        match self.write_any(value) {
            Ok(()) => Ok(self.inner.writer.flush()),
            Err(err) => {
                self.inner.writer.discard();
                Err(err)
            }
        }
    }

    pub fn write_any(&mut self, value: &PyValue) -> Result<(), JsonError> {
        match value {
            PyValue::None => self.inner.write_null(),
            PyValue::Bool(b) => self.inner.write_boolean(*b),
            PyValue::Int(i) => self.inner.write_integer(*i),
            PyValue::BigInt(i) => self.inner.writer.ascii(&i.to_string()),
            PyValue::Float(f) => self.inner.write_float(*f)?,
            PyValue::Str(s) => self.inner.write_str(s),
            PyValue::Bytes(b) => self.inner.write_bytes(b)?,
            PyValue::List(arr) | PyValue::Tuple(arr) => self.write_arr(arr)?,
            PyValue::Dict(pairs) => self.write_obj(pairs)?,
            PyValue::Set(items) | PyValue::FrozenSet(items) => self.write_set(items)?,
            PyValue::Other(other) => return Err(JsonError::Unsupported(other.type_name())),
        }
        Ok(())
    }

    pub fn write_arr(&mut self, arr: &[PyValue]) -> Result<(), JsonError> {
        self.inner.writer.u8(b'[');
        for (i, item) in arr.iter().enumerate() {
            if i > 0 {
                self.inner.writer.ascii(self.inner.separators.item);
            }
            self.write_any(item)?;
        }
        self.inner.writer.u8(b']');
        Ok(())
    }

    pub fn write_obj(&mut self, pairs: &[(PyValue, PyValue)]) -> Result<(), JsonError> {
        let entries = util::dict_entries(pairs)?;
        self.write_entries(entries)
    }

    /// The set fallback: writes `items` as a sorted object of empty objects.
    pub fn write_set(&mut self, items: &[PyValue]) -> Result<(), JsonError> {
        let entries = util::set_entries(items)?;
        self.write_entries(entries)
    }

    /// Writes object members sorted by key.
    pub fn write_entries(&mut self, mut entries: Vec<Entry<'_>>) -> Result<(), JsonError> {
        // Keys are unique after coercion, so an unstable sort is enough.
        entries.sort_unstable_by(|a, b| a.0.cmp(&b.0));
        self.inner.writer.u8(b'{');
        for (i, (key, val)) in entries.iter().enumerate() {
            if i > 0 {
                self.inner.writer.ascii(self.inner.separators.item);
            }
            self.inner.write_str(key);
            self.inner.writer.ascii(self.inner.separators.key);
            self.write_any(val)?;
        }
        self.inner.writer.u8(b'}');
        Ok(())
    }
}
