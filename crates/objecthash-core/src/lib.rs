//! ObjectHash: stable SHA-256 digests of structured values.
//!
//! Semantically equal values always hash alike: map entries are combined in
//! digest order rather than insertion order, strings are NFC-normalized, and
//! numbers are reduced to an exact binary form. Any subtree can be replaced
//! by a redaction placeholder carrying its digest without changing the
//! digest of anything above it.
//!
//! All hashing goes through SHA-256 via the `sha2` crate. No custom
//! cryptography.
//!
//! ```
//! use objecthash_core::{digest, json_digest, HashOptions, Value};
//!
//! let a = json_digest(r#"{"k1":"v1","k2":"v2"}"#, &HashOptions::default()).unwrap();
//! let b = json_digest(r#"{"k2":"v2","k1":"v1"}"#, &HashOptions::default()).unwrap();
//! assert_eq!(a, b);
//! assert_eq!(
//!     digest(&Value::List(vec![])).unwrap().to_hex(),
//!     "acac86c0e609ca906f632b0e2dacccb2b77d22b0621f20ebece1a4835b93f6f0"
//! );
//! ```

pub mod composite;
pub mod dispatch;
pub mod error;
pub mod float;
pub mod hasher;
pub mod leaf;
pub mod options;
pub mod redaction;
pub mod salt;

pub use dispatch::{
    digest, digest_from_hex, digest_serialize, digest_with, hex_digest, json_digest, to_value,
};
pub use error::{HashError, HashResult};
pub use float::canonicalize;
pub use hasher::{TaggedContext, TaggedHasher};
pub use options::HashOptions;
pub use redaction::{
    is_placeholder, parse_placeholder, redact, redact_path, redaction_placeholder, split_path,
};
pub use salt::{salt, unsalt};

pub use objecthash_types::{Digest, Value, REDACTED_PREFIX};
