use objecthash_types::TypeError;
use thiserror::Error;

/// Errors from hashing operations.
///
/// Every error is fatal to the call that raised it. Nothing external is
/// mutated while hashing, so there is no partial state to recover.
#[derive(Debug, Error, PartialEq)]
pub enum HashError {
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    #[error("unsupported number {0}: only finite doubles have a canonical form")]
    UnsupportedNumber(f64),

    #[error("mantissa {0} outside (0.5, 1.0] after exponent normalization")]
    MantissaRange(f64),

    #[error("mantissa longer than {bits} bits")]
    MantissaOverflow { bits: usize },

    #[error("invalid hex string: {0}")]
    InvalidHex(String),

    #[error("invalid digest length: expected {expected} bytes, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("invalid JSON: {0}")]
    InvalidJson(String),

    #[error("path not found: {0}")]
    PathNotFound(String),

    #[error("map key is not salted: {0}")]
    UnsaltedKey(String),
}

impl From<TypeError> for HashError {
    fn from(err: TypeError) -> Self {
        match err {
            TypeError::InvalidHex(msg) => Self::InvalidHex(msg),
            TypeError::InvalidLength { expected, actual } => Self::InvalidLength { expected, actual },
        }
    }
}

pub type HashResult<T> = Result<T, HashError>;
