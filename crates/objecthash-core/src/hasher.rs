use objecthash_types::Digest;
use sha2::{Digest as _, Sha256};

/// Tag-prefixed SHA-256 hasher.
///
/// Each hasher carries a one-byte type tag that is fed to SHA-256 ahead of
/// the payload, with no separator or length prefix. Leaf payloads can have
/// any length because composites only ever concatenate fixed 32-byte child
/// digests, so two different values never produce the same hash input.
///
/// Every computation starts from a fresh SHA-256 context, which keeps the
/// engine re-entrant.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TaggedHasher {
    tag: u8,
}

impl TaggedHasher {
    /// Hasher for null.
    pub const NULL: Self = Self::new(b'n');
    /// Hasher for booleans.
    pub const BOOL: Self = Self::new(b'b');
    /// Hasher for Unicode strings (and map keys).
    pub const UNICODE: Self = Self::new(b'u');
    /// Hasher for canonical float forms.
    pub const FLOAT: Self = Self::new(b'f');
    /// Hasher for ordered lists.
    pub const LIST: Self = Self::new(b'l');
    /// Hasher for string-keyed maps.
    pub const DICT: Self = Self::new(b'd');

    /// Create a hasher with a custom tag byte.
    pub const fn new(tag: u8) -> Self {
        Self { tag }
    }

    /// Hash a complete payload under this tag.
    pub fn hash(&self, payload: &[u8]) -> Digest {
        let mut ctx = self.begin();
        ctx.update(payload);
        ctx.finish()
    }

    /// Start an incremental computation with the tag already written.
    pub fn begin(&self) -> TaggedContext {
        let mut inner = Sha256::new();
        inner.update([self.tag]);
        TaggedContext { inner }
    }
}

/// An in-progress tagged hash computation.
pub struct TaggedContext {
    inner: Sha256,
}

impl TaggedContext {
    /// Append bytes to the hash input.
    pub fn update(&mut self, data: &[u8]) {
        self.inner.update(data);
    }

    /// Consume the context and produce the digest.
    pub fn finish(self) -> Digest {
        Digest::from_hash(self.inner.finalize().into())
    }
}
