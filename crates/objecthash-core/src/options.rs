use serde::{Deserialize, Serialize};

/// Options controlling how values are hashed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HashOptions {
    /// Normalize string leaves and map keys to Unicode NFC before hashing.
    pub normalize: bool,
}

impl Default for HashOptions {
    fn default() -> Self {
        Self { normalize: true }
    }
}

impl HashOptions {
    /// Hash strings byte-for-byte as given, without normalization.
    pub fn raw() -> Self {
        Self { normalize: false }
    }
}
