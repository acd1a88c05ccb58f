use std::fmt;

use math::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{ParameterError, ShamirError, ShamirResult};

/// Extra bits drawn beyond the modulus width, keeping the bias of the
/// `mod (p - 2)` reduction below `2^-64`.
pub const SAMPLING_MARGIN_BITS: u64 = 64;

/// Well-known primes usable as the field modulus.
pub const SUPPORTED_STANDARD_PRIMES: [StandardPrime; 3] = [
    StandardPrime::Mersenne61,
    StandardPrime::Mersenne127,
    StandardPrime::Mersenne521,
];

/// Mersenne primes `2^e - 1` offered as ready-made moduli.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum StandardPrime {
    Mersenne61 = 61,
    Mersenne127 = 127,
    Mersenne521 = 521,
}

impl StandardPrime {
    /// The exponent `e` of `2^e - 1`.
    #[inline]
    pub const fn exponent(self) -> u32 {
        self as u32
    }

    pub fn modulus(self) -> BigUint {
        (BigUint::one() << self.exponent()) - BigUint::one()
    }
}

impl TryFrom<u32> for StandardPrime {
    type Error = InvalidStandardPrime;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        SUPPORTED_STANDARD_PRIMES
            .into_iter()
            .find(|prime| prime.exponent() == value)
            .ok_or(InvalidStandardPrime(value))
    }
}

/// Error raised when no standard prime has the requested exponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidStandardPrime(pub u32);

impl fmt::Display for InvalidStandardPrime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "no standard Mersenne prime with exponent {}", self.0)
    }
}

impl std::error::Error for InvalidStandardPrime {}

/// Validate the relation between threshold and participant counts.
pub fn validate_threshold_config(threshold: usize, participants: usize) -> bool {
    (1..=participants).contains(&threshold)
}

/// Immutable `(bits, n, k, p)` configuration of a threshold scheme.
///
/// Deserialization goes through [`SchemeParams::new`], so a loaded
/// configuration is validated exactly like one built in code.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSchemeParams")]
pub struct SchemeParams {
    bits: u64,
    n: usize,
    k: usize,
    #[serde(with = "crate::encoding")]
    p: BigUint,
}

#[derive(Deserialize)]
struct RawSchemeParams {
    bits: u64,
    n: usize,
    k: usize,
    #[serde(with = "crate::encoding")]
    p: BigUint,
}

impl TryFrom<RawSchemeParams> for SchemeParams {
    type Error = ShamirError;

    fn try_from(raw: RawSchemeParams) -> ShamirResult<Self> {
        Self::new(raw.bits, raw.n, raw.k, raw.p)
    }
}

impl SchemeParams {
    /// Validate and freeze a configuration.
    ///
    /// `p` must be a prime with `p - 2 >= n` (so `n` distinct evaluation
    /// points fit in `[1, p - 2]`), `1 <= k <= n`, and `bits` must cover the
    /// bit length of `p`.
    pub fn new(bits: u64, n: usize, k: usize, p: BigUint) -> ShamirResult<Self> {
        if !validate_threshold_config(k, n) {
            return Err(ParameterError::InvalidThreshold {
                threshold: k,
                participants: n,
            }
            .into());
        }

        let participants = BigUint::from(n);
        if p <= participants {
            return Err(ParameterError::ModulusNotAboveShareCount {
                modulus: p,
                participants: n,
            }
            .into());
        }

        let available = &p - 2u32;
        if available < participants {
            return Err(ParameterError::EvaluationRangeTooSmall {
                available,
                participants: n,
            }
            .into());
        }

        let required = p.bit_length();
        if bits < required {
            return Err(ParameterError::InsufficientBits { bits, required }.into());
        }

        if !is_probable_prime(&p) {
            return Err(ShamirError::NonPrimeModulus(p));
        }

        Ok(Self { bits, n, k, p })
    }

    /// Configuration over a [`StandardPrime`] with the recommended width.
    pub fn with_standard_prime(prime: StandardPrime, n: usize, k: usize) -> ShamirResult<Self> {
        let p = prime.modulus();
        Self::new(Self::recommended_bits(&p), n, k, p)
    }

    /// Bit length of `p` plus [`SAMPLING_MARGIN_BITS`].
    pub fn recommended_bits(p: &BigUint) -> u64 {
        p.bit_length() + SAMPLING_MARGIN_BITS
    }

    #[inline]
    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Total number of shares `n`.
    #[inline]
    pub fn participants(&self) -> usize {
        self.n
    }

    /// Reconstruction threshold `k`.
    #[inline]
    pub fn threshold(&self) -> usize {
        self.k
    }

    #[inline]
    pub fn modulus(&self) -> &BigUint {
        &self.p
    }
}
