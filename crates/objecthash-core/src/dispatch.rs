use std::any::type_name;

use objecthash_types::{Digest, Value};
use serde::Serialize;
use tracing::trace;

use crate::composite::{hash_list, hash_map};
use crate::error::{HashError, HashResult};
use crate::leaf::{hash_bool, hash_null, hash_number, hash_string};
use crate::options::HashOptions;
use crate::redaction::parse_placeholder;

/// Digest of a value with default options (NFC normalization on).
pub fn digest(value: &Value) -> HashResult<Digest> {
    digest_with(value, &HashOptions::default())
}

/// Digest of a value.
///
/// Strings carrying the redaction prefix are decoded and stand in for the
/// digest they carry; they are never hashed as text.
pub fn digest_with(value: &Value, options: &HashOptions) -> HashResult<Digest> {
    match value {
        Value::Null => Ok(hash_null()),
        Value::Bool(b) => Ok(hash_bool(*b)),
        Value::Number(n) => hash_number(*n),
        Value::String(s) => match parse_placeholder(s) {
            Some(redacted) => {
                trace!("substituting redacted digest");
                redacted
            }
            None => Ok(hash_string(s, options)),
        },
        Value::List(items) => hash_list(items, options),
        Value::Map(map) => hash_map(map, options),
        Value::Redacted(digest) => Ok(*digest),
    }
}

/// Lowercase hex digest of a value.
pub fn hex_digest(value: &Value, options: &HashOptions) -> HashResult<String> {
    digest_with(value, options).map(|d| d.to_hex())
}

/// Parse a hex digest, tolerating odd-length and short input.
pub fn digest_from_hex(hex: &str) -> HashResult<Digest> {
    Ok(Digest::from_hex_lenient(hex)?)
}

/// Convert any serializable value into the value model.
///
/// Types that have no JSON form, such as maps with non-string keys, fail with
/// [`HashError::UnsupportedType`] naming the offending type.
pub fn to_value<T: Serialize + ?Sized>(value: &T) -> HashResult<Value> {
    let json = serde_json::to_value(value)
        .map_err(|e| HashError::UnsupportedType(format!("{} ({e})", type_name::<T>())))?;
    Ok(Value::from_json(&json))
}

/// Digest of any serializable value.
pub fn digest_serialize<T: Serialize + ?Sized>(value: &T, options: &HashOptions) -> HashResult<Digest> {
    digest_with(&to_value(value)?, options)
}

/// Parse JSON text and digest it. All numbers take the float path.
pub fn json_digest(text: &str, options: &HashOptions) -> HashResult<Digest> {
    let json: serde_json::Value =
        serde_json::from_str(text).map_err(|e| HashError::InvalidJson(e.to_string()))?;
    digest_with(&Value::from_json(&json), options)
}
