use std::fmt;

use num_bigint::BigUint;
use num_traits::Zero;
use serde::{Deserialize, Serialize};

use crate::error::{ShamirError, ShamirResult};
use crate::traits::PointSource;

/// One point `(x, f(x) mod p)` of the secret polynomial.
///
/// Deserialization goes through [`Share::new`], so a stored share with
/// `x = 0` is rejected on load.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawShare")]
pub struct Share {
    #[serde(with = "crate::encoding")]
    pub x: BigUint,
    #[serde(with = "crate::encoding")]
    pub y: BigUint,
}

#[derive(Deserialize)]
struct RawShare {
    #[serde(with = "crate::encoding")]
    x: BigUint,
    #[serde(with = "crate::encoding")]
    y: BigUint,
}

impl TryFrom<RawShare> for Share {
    type Error = ShamirError;

    fn try_from(raw: RawShare) -> ShamirResult<Self> {
        Self::new(raw.x, raw.y)
    }
}

impl Share {
    /// Build a share; `x = 0` would be the secret itself and is rejected.
    pub fn new(x: BigUint, y: BigUint) -> ShamirResult<Self> {
        if x.is_zero() {
            return Err(ShamirError::ShareOutOfRange { x });
        }

        Ok(Share { x, y })
    }

    pub fn into_point(self) -> (BigUint, BigUint) {
        (self.x, self.y)
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl PointSource for Share {
    fn x(&self) -> &BigUint {
        &self.x
    }

    fn y(&self) -> &BigUint {
        &self.y
    }
}
