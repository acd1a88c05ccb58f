//! The randomness seam: where coefficients and evaluation points come from.

use math::prelude::*;
use num_bigint::RandBigInt;
use rand::RngCore;

/// A source of uniformly random integers of a requested bit width.
pub trait RandomSource {
    /// A uniformly random integer in `[0, 2^bits)`.
    fn random_bits(&mut self, bits: u64) -> BigUint;
}

impl<R: RngCore + ?Sized> RandomSource for R {
    fn random_bits(&mut self, bits: u64) -> BigUint {
        self.gen_biguint(bits)
    }
}

/// Draw `bits` random bits and map them into `[1, p - 2]` as
/// `draw mod (p - 2) + 1`. The value `p - 1` is never produced.
///
/// `p` must be at least 3; [`SchemeParams`](crate::params::SchemeParams)
/// guarantees this.
pub fn sample_residue<S>(source: &mut S, bits: u64, p: &BigUint) -> BigUint
where
    S: RandomSource + ?Sized,
{
    let range = p - 2u32;
    source.random_bits(bits) % range + 1u32
}
