//! Key coercion, the set fallback and Python-style float formatting.

use std::borrow::Cow;
use std::collections::HashMap;

use super::error::JsonError;
use crate::PyValue;

static EMPTY_DICT: PyValue = PyValue::EMPTY_DICT;

/// An object member ready to be written: coerced key and borrowed value.
pub type Entry<'a> = (Cow<'a, str>, &'a PyValue);

/// Converts a mapping key (or set element) to the text it is written as.
pub fn coerce_key(key: &PyValue) -> Result<Cow<'_, str>, JsonError> {
    match key {
        PyValue::Str(s) => Ok(Cow::Borrowed(s)),
        PyValue::Bytes(b) => std::str::from_utf8(b)
            .map(Cow::Borrowed)
            .map_err(|_| JsonError::InvalidUtf8),
        PyValue::Int(i) => Ok(Cow::Owned(i.to_string())),
        PyValue::BigInt(i) => Ok(Cow::Owned(i.to_string())),
        PyValue::Float(f) if f.is_finite() => Ok(Cow::Owned(format_float(*f))),
        PyValue::Float(f) => Err(JsonError::NonFinite(*f)),
        PyValue::Bool(true) => Ok(Cow::Borrowed("true")),
        PyValue::Bool(false) => Ok(Cow::Borrowed("false")),
        PyValue::None => Ok(Cow::Borrowed("null")),
        other => Err(JsonError::InvalidKey(other.type_name())),
    }
}

/// Coerces `dict` pairs to object members.
///
/// Keys that collide after coercion keep the position of the first
/// occurrence and the value of the last one.
pub fn dict_entries(pairs: &[(PyValue, PyValue)]) -> Result<Vec<Entry<'_>>, JsonError> {
    collect_entries(pairs.iter().map(|(k, v)| (k, v)))
}

/// The set fallback: every element becomes a key mapped to `{}`.
///
/// Elements that coerce to the same key collapse into one member.
pub fn set_entries(items: &[PyValue]) -> Result<Vec<Entry<'_>>, JsonError> {
    collect_entries(items.iter().map(|item| (item, &EMPTY_DICT)))
}

fn collect_entries<'a>(
    pairs: impl Iterator<Item = (&'a PyValue, &'a PyValue)>,
) -> Result<Vec<Entry<'a>>, JsonError> {
    let mut entries: Vec<Entry<'a>> = Vec::new();
    let mut positions: HashMap<Cow<'a, str>, usize> = HashMap::new();
    for (key, val) in pairs {
        let key = coerce_key(key)?;
        match positions.get(&key) {
            Some(&i) => entries[i].1 = val,
            None => {
                positions.insert(key.clone(), entries.len());
                entries.push((key, val));
            }
        }
    }
    Ok(entries)
}

/// Formats a finite float the way Python's `repr` does.
///
/// Shortest round-trip digits; fixed notation when the decimal exponent is in
/// `-4..16`, otherwise `d.ddde±XX`. Integral values keep a trailing `.0`.
pub fn format_float(f: f64) -> String {
    // `{:e}` yields the shortest round-trip digits, e.g. "-1.25e-7".
    let sci = format!("{:e}", f);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return sci;
    };
    let exp: i32 = exp.parse().unwrap_or(0);
    let (sign, mantissa) = match mantissa.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", mantissa),
    };
    let digits: String = mantissa.chars().filter(|c| *c != '.').collect();

    let mut out = String::with_capacity(digits.len() + 8);
    out.push_str(sign);
    if (-4..16).contains(&exp) {
        if exp < 0 {
            out.push_str("0.");
            out.extend(std::iter::repeat('0').take((-exp - 1) as usize));
            out.push_str(&digits);
        } else {
            let int_len = exp as usize + 1;
            if digits.len() <= int_len {
                out.push_str(&digits);
                out.extend(std::iter::repeat('0').take(int_len - digits.len()));
                out.push_str(".0");
            } else {
                out.push_str(&digits[..int_len]);
                out.push('.');
                out.push_str(&digits[int_len..]);
            }
        }
    } else {
        out.push_str(&digits[..1]);
        if digits.len() > 1 {
            out.push('.');
            out.push_str(&digits[1..]);
        }
        out.push('e');
        out.push(if exp < 0 { '-' } else { '+' });
        out.push_str(&format!("{:02}", exp.unsigned_abs()));
    }
    out
}
