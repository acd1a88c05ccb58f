use math::MathError;
use num_bigint::BigUint;
use thiserror::Error;

/// Result type specialized for secret sharing operations.
pub type ShamirResult<T> = std::result::Result<T, ShamirError>;

/// Scheme parameters that cannot be used together.
#[non_exhaustive]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    #[error("Invalid threshold configuration: threshold {threshold} must lie in 1..={participants}")]
    InvalidThreshold { threshold: usize, participants: usize },
    #[error("Secret is not below the modulus")]
    ModulusNotAboveSecret,
    #[error("Modulus {modulus} must exceed the share count {participants}")]
    ModulusNotAboveShareCount { modulus: BigUint, participants: usize },
    #[error("Sampling range [1, {available}] cannot hold {participants} distinct points")]
    EvaluationRangeTooSmall { available: BigUint, participants: usize },
    #[error("Sampling width of {bits} bits is below the modulus width of {required} bits")]
    InsufficientBits { bits: u64, required: u64 },
}

/// Errors that can arise while splitting or reconstructing a secret.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ShamirError {
    #[error("Invalid parameters: {0}")]
    InvalidParameters(#[from] ParameterError),
    #[error("Insufficient shares: need {required}, got {provided}")]
    InsufficientShares { required: usize, provided: usize },
    #[error("Duplicate x-coordinate in share set: {0}")]
    DuplicateXValue(BigUint),
    #[error("Share x-coordinate {x} or its y-coordinate lies outside the field")]
    ShareOutOfRange { x: BigUint },
    #[error("Modulus {0} is not prime")]
    NonPrimeModulus(BigUint),
    #[error("No fresh evaluation point found after {attempts} attempts")]
    SamplingExhausted { attempts: usize },
    #[error(transparent)]
    Math(#[from] MathError),
}
