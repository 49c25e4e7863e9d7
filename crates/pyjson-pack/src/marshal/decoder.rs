//! Decodes CPython `marshal` data into [`PyValue`]s.
//!
//! marshal is a little-endian format: one type code byte, then a
//! type-specific body. Bit `0x80` of the type code registers the object in
//! the reference table so later `r` codes can point back at it.

use num_bigint::BigInt;
use pyjson_buffers::Reader;

use super::constants::*;
use super::error::MarshalError;
use crate::{OtherValue, PyValue};

pub struct MarshalDecoder {
    /// Objects flagged with `FLAG_REF`; `None` while still being decoded.
    refs: Vec<Option<PyValue>>,
    /// Python 2 interned strings, addressed by `R` codes.
    interned: Vec<PyValue>,
    depth: usize,
}

impl Default for MarshalDecoder {
    fn default() -> Self {
        Self::new()
    }
}

impl MarshalDecoder {
    pub fn new() -> Self {
        Self {
            refs: Vec::new(),
            interned: Vec::new(),
            depth: 0,
        }
    }

    /// Decodes the first object in `input`. Trailing bytes are ignored.
    pub fn decode(&mut self, input: &[u8]) -> Result<PyValue, MarshalError> {
        self.refs.clear();
        self.interned.clear();
        self.depth = 0;
        let mut reader = Reader::new(input);
        self.read_value(&mut reader)
    }

    /// Reads one object that must not be the NULL terminator.
    pub fn read_value(&mut self, r: &mut Reader<'_>) -> Result<PyValue, MarshalError> {
        self.read_object(r)?.ok_or(MarshalError::UnexpectedNull)
    }

    /// Reads one object; `None` is the NULL code that ends a dict.
    pub fn read_object(&mut self, r: &mut Reader<'_>) -> Result<Option<PyValue>, MarshalError> {
        let offset = r.x;
        let byte = r.u8()?;
        let code = byte & !FLAG_REF;
        match code {
            TYPE_NULL => return Ok(None),
            TYPE_REF => {
                let index = r.u32_le()?;
                return self.resolve_ref(index).map(Some);
            }
            _ => {}
        }
        if self.depth >= MAX_DEPTH {
            return Err(MarshalError::TooDeep(MAX_DEPTH));
        }
        // The slot is reserved before children are read, as CPython does.
        let slot = if byte & FLAG_REF != 0 {
            self.refs.push(None);
            Some(self.refs.len() - 1)
        } else {
            None
        };
        self.depth += 1;
        let value = self.read_body(code, offset, r);
        self.depth -= 1;
        let value = value?;
        if let Some(slot) = slot {
            self.refs[slot] = Some(value.clone());
        }
        Ok(Some(value))
    }

    fn read_body(
        &mut self,
        code: u8,
        offset: usize,
        r: &mut Reader<'_>,
    ) -> Result<PyValue, MarshalError> {
        let value = match code {
            TYPE_NONE => PyValue::None,
            TYPE_TRUE => PyValue::Bool(true),
            TYPE_FALSE => PyValue::Bool(false),
            TYPE_ELLIPSIS => PyValue::Other(OtherValue::Ellipsis),
            TYPE_STOPITER => PyValue::Other(OtherValue::StopIteration),
            TYPE_INT => PyValue::Int(r.i32_le()? as i64),
            TYPE_INT64 => PyValue::Int(r.i64_le()?),
            TYPE_LONG => read_long(r)?,
            TYPE_FLOAT => PyValue::Float(read_text_float(r)?),
            TYPE_BINARY_FLOAT => PyValue::Float(r.f64_le()?),
            TYPE_COMPLEX => {
                let re = read_text_float(r)?;
                let im = read_text_float(r)?;
                PyValue::Other(OtherValue::Complex { re, im })
            }
            TYPE_BINARY_COMPLEX => {
                let re = r.f64_le()?;
                let im = r.f64_le()?;
                PyValue::Other(OtherValue::Complex { re, im })
            }
            TYPE_STRING => {
                let n = read_size(r)?;
                PyValue::Bytes(r.buf(n)?.to_vec())
            }
            TYPE_INTERNED => {
                let n = read_size(r)?;
                let bytes = r.buf(n)?;
                let value = match std::str::from_utf8(bytes) {
                    Ok(s) => PyValue::Str(s.to_owned()),
                    Err(_) => PyValue::Bytes(bytes.to_vec()),
                };
                self.interned.push(value.clone());
                value
            }
            TYPE_STRINGREF => {
                let index = r.u32_le()?;
                self.interned
                    .get(index as usize)
                    .cloned()
                    .ok_or(MarshalError::InvalidRef(index))?
            }
            TYPE_UNICODE | TYPE_ASCII | TYPE_ASCII_INTERNED => {
                let n = read_size(r)?;
                PyValue::Str(r.utf8(n)?.to_owned())
            }
            TYPE_SHORT_ASCII | TYPE_SHORT_ASCII_INTERNED => {
                let n = r.u8()? as usize;
                PyValue::Str(r.utf8(n)?.to_owned())
            }
            TYPE_TUPLE => {
                let n = read_size(r)?;
                PyValue::Tuple(self.read_items(n, r)?)
            }
            TYPE_SMALL_TUPLE => {
                let n = r.u8()? as usize;
                PyValue::Tuple(self.read_items(n, r)?)
            }
            TYPE_LIST => {
                let n = read_size(r)?;
                PyValue::List(self.read_items(n, r)?)
            }
            TYPE_SET => {
                let n = read_size(r)?;
                PyValue::Set(self.read_items(n, r)?)
            }
            TYPE_FROZENSET => {
                let n = read_size(r)?;
                PyValue::FrozenSet(self.read_items(n, r)?)
            }
            TYPE_DICT => {
                let mut pairs = Vec::new();
                while let Some(key) = self.read_object(r)? {
                    let val = self.read_value(r)?;
                    pairs.push((key, val));
                }
                PyValue::Dict(pairs)
            }
            TYPE_CODE => return Err(MarshalError::UnsupportedType(TYPE_CODE as char)),
            _ => return Err(MarshalError::InvalidType { code, offset }),
        };
        Ok(value)
    }

    fn read_items(&mut self, n: usize, r: &mut Reader<'_>) -> Result<Vec<PyValue>, MarshalError> {
        // Every item takes at least one byte.
        let mut items = Vec::with_capacity(n.min(r.size()));
        for _ in 0..n {
            items.push(self.read_value(r)?);
        }
        Ok(items)
    }

    fn resolve_ref(&self, index: u32) -> Result<PyValue, MarshalError> {
        match self.refs.get(index as usize) {
            Some(Some(value)) => Ok(value.clone()),
            Some(None) => Err(MarshalError::RecursiveRef(index)),
            None => Err(MarshalError::InvalidRef(index)),
        }
    }
}

/// Signed digit count, then base 2**15 digits, least significant first.
fn read_long(r: &mut Reader<'_>) -> Result<PyValue, MarshalError> {
    let n = r.i32_le()?;
    let count = n.unsigned_abs() as usize;
    if count.saturating_mul(2) > r.size() {
        return Err(MarshalError::UnexpectedEof);
    }
    let mut digits = Vec::with_capacity(count);
    for _ in 0..count {
        let digit = r.u16_le()?;
        if digit >> PYLONG_MARSHAL_SHIFT != 0 {
            return Err(MarshalError::InvalidDigit(digit));
        }
        digits.push(digit);
    }
    let mut int = BigInt::from(0);
    for digit in digits.into_iter().rev() {
        int = (int << PYLONG_MARSHAL_SHIFT) + BigInt::from(digit);
    }
    if n < 0 {
        int = -int;
    }
    Ok(PyValue::from(int))
}

fn read_size(r: &mut Reader<'_>) -> Result<usize, MarshalError> {
    let n = r.i32_le()?;
    usize::try_from(n).map_err(|_| MarshalError::InvalidSize(n as i64))
}

/// Python 2 style float: one length byte, then the `repr` text.
fn read_text_float(r: &mut Reader<'_>) -> Result<f64, MarshalError> {
    let n = r.u8()? as usize;
    let text = r.utf8(n)?;
    text.parse::<f64>()
        .map_err(|_| MarshalError::InvalidFloat(text.to_owned()))
}
