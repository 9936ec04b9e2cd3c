//! Foundation types for ObjectHash.
//!
//! This crate provides the value model that the hashing engine consumes and
//! the digest type it produces. Every other ObjectHash crate depends on
//! `objecthash-types`.
//!
//! # Key Types
//!
//! - [`Value`] — Closed JSON-like value model plus a redacted placeholder
//! - [`Digest`] — 32-byte SHA-256 output with a lowercase hex form
//! - [`TypeError`] — Hex and length errors from the digest codec

pub mod digest;
pub mod error;
pub mod value;

pub use digest::{decode_hex, encode_hex, Digest};
pub use error::TypeError;
pub use value::{Value, REDACTED_PREFIX};
