//! Error types for the ternary cipher engine.

use std::fmt;

/// Errors produced by the cipher engine.
///
/// Every transform either fully succeeds and returns a valid text, or fails
/// as a whole with one of these conditions. There is no partial-success
/// state: the operations are pure functions with no side effects to undo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CipherError {
    /// A digit sequence does not cleanly decode through the codebook tree,
    /// e.g. the digit count is not a multiple of 3 for the fixed-depth code,
    /// or a variable-depth decode leaves a dangling non-leaf descent.
    MalformedInput(String),

    /// The key's ring value is a zero-divisor for the working modulus, so no
    /// multiplicative inverse exists.
    NotInvertible,

    /// An operation requiring a key was invoked without one. The payload
    /// names the operation.
    MissingKey(&'static str),

    /// An injected codebook tree is not a valid ternary prefix code over the
    /// 27-symbol alphabet.
    InvalidCodebook(String),
}

impl fmt::Display for CipherError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CipherError::MalformedInput(msg) => write!(f, "malformed input: {}", msg),
            CipherError::NotInvertible => {
                write!(f, "key is not invertible for the working modulus")
            }
            CipherError::MissingKey(op) => write!(f, "can't {} without a key", op),
            CipherError::InvalidCodebook(msg) => write!(f, "invalid codebook: {}", msg),
        }
    }
}

impl std::error::Error for CipherError {}

/// Result alias used throughout the crate.
pub type CipherResult<T> = Result<T, CipherError>;
