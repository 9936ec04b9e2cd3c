//! Digest-transparent redaction.
//!
//! A subtree can be swapped for a placeholder string carrying only its
//! digest. The placeholder hashes to that digest, so every ancestor keeps
//! its digest.

use objecthash_types::{decode_hex, Digest, Value, REDACTED_PREFIX};
use tracing::debug;

use crate::dispatch::digest_with;
use crate::error::{HashError, HashResult};
use crate::options::HashOptions;

/// Build the placeholder string value for a digest.
pub fn redaction_placeholder(digest: &Digest) -> Value {
    Value::String(placeholder_text(digest))
}

/// The placeholder text for a digest: prefix followed by lowercase hex.
pub fn placeholder_text(digest: &Digest) -> String {
    format!("{REDACTED_PREFIX}{}", digest.to_hex())
}

/// Returns `true` if the string starts with the redaction prefix.
pub fn is_placeholder(text: &str) -> bool {
    text.starts_with(REDACTED_PREFIX)
}

/// Decode a placeholder string.
///
/// Returns `None` for ordinary strings. A string that carries the prefix but
/// no valid hex after it is an error rather than an ordinary string. The hex
/// must decode to a full 32-byte digest; a single missing leading nibble is
/// tolerated, a truncated digest is not.
pub fn parse_placeholder(text: &str) -> Option<HashResult<Digest>> {
    text.strip_prefix(REDACTED_PREFIX).map(|hex| -> HashResult<Digest> {
        let bytes = decode_hex(hex)?;
        Ok(Digest::from_slice(&bytes)?)
    })
}

/// Replace a whole value with its placeholder.
pub fn redact(value: &Value, options: &HashOptions) -> HashResult<Value> {
    let digest = digest_with(value, options)?;
    Ok(redaction_placeholder(&digest))
}

/// Replace the subtree at `path` with its placeholder.
///
/// Each segment is a map key, or a decimal index when the container is a
/// list. An empty path redacts the root itself.
pub fn redact_path(value: &Value, path: &[&str], options: &HashOptions) -> HashResult<Value> {
    let Some((head, rest)) = path.split_first() else {
        let redacted = redact(value, options)?;
        debug!(kind = value.type_name(), "redacted subtree");
        return Ok(redacted);
    };
    match value {
        Value::Map(map) => {
            let child = map
                .get(*head)
                .ok_or_else(|| HashError::PathNotFound((*head).to_owned()))?;
            let replaced = redact_path(child, rest, options)?;
            let mut out = map.clone();
            out.insert((*head).to_owned(), replaced);
            Ok(Value::Map(out))
        }
        Value::List(items) => {
            let index: usize = head
                .parse()
                .map_err(|_| HashError::PathNotFound((*head).to_owned()))?;
            let child = items
                .get(index)
                .ok_or_else(|| HashError::PathNotFound((*head).to_owned()))?;
            let replaced = redact_path(child, rest, options)?;
            let mut out = items.clone();
            out[index] = replaced;
            Ok(Value::List(out))
        }
        _ => Err(HashError::PathNotFound((*head).to_owned())),
    }
}

/// Split a dotted path such as `a.b.0` into segments.
pub fn split_path(path: &str) -> Vec<&str> {
    if path.is_empty() {
        Vec::new()
    } else {
        path.split('.').collect()
    }
}
