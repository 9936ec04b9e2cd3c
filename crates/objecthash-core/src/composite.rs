use std::collections::BTreeMap;

use objecthash_types::{Digest, Value};
use tracing::trace;

use crate::dispatch::digest_with;
use crate::error::HashResult;
use crate::hasher::TaggedHasher;
use crate::leaf::hash_string;
use crate::options::HashOptions;
use crate::redaction::parse_placeholder;

/// Digest of a list: tag `l` followed by each element's digest in order.
pub fn hash_list(items: &[Value], options: &HashOptions) -> HashResult<Digest> {
    let mut ctx = TaggedHasher::LIST.begin();
    for item in items {
        ctx.update(digest_with(item, options)?.as_bytes());
    }
    Ok(ctx.finish())
}

/// Digest of a map: tag `d` followed by the sorted 64-byte entries.
///
/// Each entry is the key's string digest concatenated with the value's
/// digest. Entries are sorted by raw bytes, so the result does not depend on
/// the order the map was built in.
pub fn hash_map(map: &BTreeMap<String, Value>, options: &HashOptions) -> HashResult<Digest> {
    let entries = map
        .iter()
        .map(|(key, value)| map_entry(key, value, options))
        .collect::<HashResult<Vec<_>>>()?;
    Ok(hash_entries(entries))
}

/// Build the 64-byte entry for one key/value pair.
///
/// A key carrying the redaction prefix contributes the digest it embeds, so
/// keys can be redacted the same way values are.
pub fn map_entry(key: &str, value: &Value, options: &HashOptions) -> HashResult<[u8; 64]> {
    let key_digest = match parse_placeholder(key) {
        Some(redacted) => redacted?,
        None => hash_string(key, options),
    };
    let mut entry = [0u8; 64];
    entry[..32].copy_from_slice(key_digest.as_bytes());
    entry[32..].copy_from_slice(digest_with(value, options)?.as_bytes());
    Ok(entry)
}

/// Sort entries and hash them under the map tag.
pub fn hash_entries(mut entries: Vec<[u8; 64]>) -> Digest {
    entries.sort_unstable();
    trace!(entries = entries.len(), "hashing sorted map entries");
    let mut ctx = TaggedHasher::DICT.begin();
    for entry in &entries {
        ctx.update(entry);
    }
    ctx.finish()
}
