use thiserror::Error;

/// Common result type used across this crate.
pub type Result<T, E = MathError> = core::result::Result<T, E>;

/// Errors raised by the field arithmetic helpers.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
#[non_exhaustive]
pub enum MathError {
    #[error("element has no multiplicative inverse modulo the given modulus")]
    NotInvertible,
    #[error("modulus must be at least 2")]
    InvalidModulus,
}
