//! Redactable salting.
//!
//! Redacting a low-entropy leaf such as `true` or a short name leaks it: an
//! observer can hash every candidate and compare. Salting wraps each leaf as
//! `[salt, leaf]` and prefixes each map key with a salt, so a redacted
//! digest can only be confirmed by someone holding the salt.

use objecthash_types::{encode_hex, Value};
use rand::Rng;

use crate::error::{HashError, HashResult};

/// Salt length in random bytes.
pub const SALT_BYTES: usize = 16;

/// Salt length in hex characters.
pub const SALT_HEX_LEN: usize = SALT_BYTES * 2;

/// Salt every leaf and map key in a value.
pub fn salt<R: Rng>(value: &Value, rng: &mut R) -> Value {
    match value {
        Value::List(items) => Value::List(items.iter().map(|item| salt(item, rng)).collect()),
        Value::Map(map) => Value::Map(
            map.iter()
                .map(|(key, item)| (format!("{}{key}", fresh_salt(rng)), salt(item, rng)))
                .collect(),
        ),
        leaf => Value::List(vec![Value::String(fresh_salt(rng)), leaf.clone()]),
    }
}

/// Strip the salts added by [`salt`].
///
/// Placeholders left behind by redaction are kept as they are.
pub fn unsalt(value: &Value) -> HashResult<Value> {
    match value {
        Value::List(items) => {
            if let [Value::String(s), leaf] = items.as_slice() {
                if is_salt(s) && !leaf.is_composite() {
                    return Ok(leaf.clone());
                }
            }
            items.iter().map(unsalt).collect::<HashResult<Vec<_>>>().map(Value::List)
        }
        Value::Map(map) => map
            .iter()
            .map(|(key, item)| -> HashResult<(String, Value)> {
                Ok((strip_salt(key)?.to_owned(), unsalt(item)?))
            })
            .collect::<HashResult<_>>()
            .map(Value::Map),
        other => Ok(other.clone()),
    }
}

fn fresh_salt<R: Rng>(rng: &mut R) -> String {
    let mut bytes = [0u8; SALT_BYTES];
    rng.fill(&mut bytes[..]);
    encode_hex(&bytes)
}

fn is_salt(text: &str) -> bool {
    text.len() == SALT_HEX_LEN && text.bytes().all(|b| b.is_ascii_hexdigit())
}

fn strip_salt(key: &str) -> HashResult<&str> {
    match key.get(..SALT_HEX_LEN) {
        Some(prefix) if is_salt(prefix) => Ok(&key[SALT_HEX_LEN..]),
        _ => Err(HashError::UnsaltedKey(key.to_owned())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatch::digest;
    use crate::options::HashOptions;
    use crate::redaction::redact_path;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use serde_json::json;

    fn doc() -> Value {
        Value::from_json(&json!({
            "approved": true,
            "name": "ann",
            "scores": [1, 2.5, null]
        }))
    }

    #[test]
    fn salt_then_unsalt_restores_value() {
        let mut rng = StdRng::seed_from_u64(7);
        let salted = salt(&doc(), &mut rng);
        assert_ne!(salted, doc());
        assert_eq!(unsalt(&salted).unwrap(), doc());
    }

    #[test]
    fn salting_changes_digest_per_run() {
        let mut rng = StdRng::seed_from_u64(1);
        let a = salt(&doc(), &mut rng);
        let b = salt(&doc(), &mut rng);
        assert_ne!(digest(&a).unwrap(), digest(&b).unwrap());
    }

    #[test]
    fn leaves_become_salted_pairs() {
        let mut rng = StdRng::seed_from_u64(3);
        let Value::List(pair) = salt(&Value::Bool(true), &mut rng) else {
            panic!("expected a salted pair");
        };
        assert_eq!(pair.len(), 2);
        assert!(matches!(&pair[0], Value::String(s) if s.len() == SALT_HEX_LEN));
        assert_eq!(pair[1], Value::Bool(true));
    }

    #[test]
    fn keys_carry_salt_prefix() {
        let mut rng = StdRng::seed_from_u64(5);
        let Value::Map(map) = salt(&doc(), &mut rng) else {
            panic!("expected map");
        };
        assert!(map.keys().all(|k| k.len() > SALT_HEX_LEN && is_salt(&k[..SALT_HEX_LEN])));
    }

    #[test]
    fn redacted_salted_leaf_survives_unsalt() {
        let mut rng = StdRng::seed_from_u64(11);
        let salted = salt(&doc(), &mut rng);
        let Value::Map(map) = &salted else { panic!("expected map") };
        let approved_key = map
            .keys()
            .find(|k| k.ends_with("approved"))
            .cloned()
            .unwrap();
        let redacted = redact_path(&salted, &[approved_key.as_str()], &HashOptions::default()).unwrap();
        assert_eq!(digest(&redacted).unwrap(), digest(&salted).unwrap());

        let Value::Map(restored) = unsalt(&redacted).unwrap() else {
            panic!("expected map");
        };
        assert!(matches!(&restored["approved"], Value::String(s) if s.starts_with("**REDACTED**")));
        assert_eq!(restored["name"], Value::from("ann"));
    }

    #[test]
    fn unsalted_key_is_rejected() {
        let plain = Value::map([("short", Value::Null)]);
        assert_eq!(unsalt(&plain), Err(HashError::UnsaltedKey("short".into())));
    }

    #[test]
    fn nested_lists_keep_shape() {
        let value = Value::List(vec![Value::List(vec![]), Value::from("x")]);
        let mut rng = StdRng::seed_from_u64(9);
        assert_eq!(unsalt(&salt(&value, &mut rng)).unwrap(), value);
    }
}
