use std::borrow::Cow;

use objecthash_types::Digest;
use unicode_normalization::{is_nfc, UnicodeNormalization};

use crate::error::HashResult;
use crate::float::canonicalize;
use crate::hasher::TaggedHasher;
use crate::options::HashOptions;

/// Digest of null: tag `n` with an empty payload.
pub fn hash_null() -> Digest {
    TaggedHasher::NULL.hash(b"")
}

/// Digest of a boolean: tag `b` with payload `1` or `0`.
pub fn hash_bool(value: bool) -> Digest {
    TaggedHasher::BOOL.hash(if value { b"1" } else { b"0" })
}

/// Digest of a string: tag `u` over its UTF-8 bytes, NFC-normalized first
/// when `options.normalize` is set.
pub fn hash_string(value: &str, options: &HashOptions) -> Digest {
    let text = normalize(value, options);
    TaggedHasher::UNICODE.hash(text.as_bytes())
}

/// Digest of a number: tag `f` over its canonical float form.
pub fn hash_number(value: f64) -> HashResult<Digest> {
    let form = canonicalize(value)?;
    Ok(TaggedHasher::FLOAT.hash(form.as_bytes()))
}

fn normalize<'a>(value: &'a str, options: &HashOptions) -> Cow<'a, str> {
    if options.normalize && !is_nfc(value) {
        Cow::Owned(value.nfc().collect())
    } else {
        Cow::Borrowed(value)
    }
}
