use math::prelude::*;

use crate::error::ShamirResult;
use crate::params::{SchemeParams, StandardPrime};
use crate::random::RandomSource;
use crate::traits::PointSource;

use super::generator::generate_shares;
use super::reconstruct::reconstruct_secret;
use super::share::Share;

/// A `(k, n)` threshold secret sharing scheme over `Z_p`.
///
/// The scheme holds only its immutable parameters, so one instance can be
/// shared between threads and used for any number of splits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShamirScheme {
    params: SchemeParams,
}

impl ShamirScheme {
    /// Configure a scheme; see [`SchemeParams::new`] for the checks.
    pub fn new(bits: u64, n: usize, k: usize, p: BigUint) -> ShamirResult<Self> {
        SchemeParams::new(bits, n, k, p).map(Self::from_params)
    }

    /// A scheme over one of the [`StandardPrime`]s.
    pub fn with_standard_prime(prime: StandardPrime, n: usize, k: usize) -> ShamirResult<Self> {
        SchemeParams::with_standard_prime(prime, n, k).map(Self::from_params)
    }

    pub fn from_params(params: SchemeParams) -> Self {
        ShamirScheme { params }
    }

    pub fn params(&self) -> &SchemeParams {
        &self.params
    }

    /// Split `secret` into `n` shares using the thread-local CSPRNG.
    pub fn split(&self, secret: &BigUint) -> ShamirResult<Vec<Share>> {
        self.split_with(&mut rand::thread_rng(), secret)
    }

    /// Split `secret` drawing every coefficient and evaluation point from
    /// `source`.
    pub fn split_with<S>(&self, source: &mut S, secret: &BigUint) -> ShamirResult<Vec<Share>>
    where
        S: RandomSource + ?Sized,
    {
        generate_shares(&self.params, secret, source)
    }

    /// Reconstruct the secret from at least `k` shares.
    pub fn interpolate<S: PointSource>(&self, shares: &[S]) -> ShamirResult<BigUint> {
        reconstruct_secret(&self.params, shares)
    }
}

impl From<SchemeParams> for ShamirScheme {
    fn from(params: SchemeParams) -> Self {
        Self::from_params(params)
    }
}

#[cfg(test)]
mod tests {
    use math::uint;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::seq::SliceRandom;
    use rand::SeedableRng;
    use test_strategy::proptest;

    use super::*;
    use crate::error::ShamirError;

    #[test]
    fn split_then_interpolate_small_prime() {
        let scheme = ShamirScheme::new(64, 5, 3, uint!(257)).unwrap();
        let secret = uint!(123);
        let shares = scheme.split(&secret).unwrap();

        assert_eq!(shares.len(), 5);
        assert_eq!(scheme.interpolate(&shares[..3]).unwrap(), secret);
        assert_eq!(scheme.interpolate(&shares[2..]).unwrap(), secret);
        assert_eq!(scheme.interpolate(&shares).unwrap(), secret);
    }

    #[test]
    fn edge_case_secrets() {
        let scheme = ShamirScheme::new(64, 5, 3, uint!(17)).unwrap();
        for secret in [BigUint::zero(), uint!(16)] {
            let shares = scheme.split(&secret).unwrap();
            assert_eq!(scheme.interpolate(&shares[..3]).unwrap(), secret);
        }
        assert!(matches!(
            scheme.split(&uint!(17)),
            Err(ShamirError::InvalidParameters(_))
        ));
    }

    #[test]
    fn threshold_equal_to_share_count() {
        let scheme = ShamirScheme::new(64, 4, 4, uint!(101)).unwrap();
        let shares = scheme.split(&uint!(55)).unwrap();
        assert_eq!(scheme.interpolate(&shares).unwrap(), uint!(55));
        assert!(scheme.interpolate(&shares[..3]).is_err());
    }

    #[test]
    fn threshold_one_reveals_secret_in_every_share() {
        let scheme = ShamirScheme::new(64, 3, 1, uint!(41)).unwrap();
        let shares = scheme.split(&uint!(7)).unwrap();
        for share in &shares {
            assert_eq!(share.y, uint!(7));
            assert_eq!(scheme.interpolate(std::slice::from_ref(share)).unwrap(), uint!(7));
        }
    }

    #[test]
    fn large_standard_prime_round_trip() {
        let scheme = ShamirScheme::with_standard_prime(StandardPrime::Mersenne521, 7, 4).unwrap();
        let secret = scheme.params().modulus() - 1u32;
        let shares = scheme.split(&secret).unwrap();
        assert_eq!(scheme.interpolate(&shares[3..]).unwrap(), secret);
    }

    #[test]
    fn seeded_sources_are_reproducible() {
        let scheme = ShamirScheme::with_standard_prime(StandardPrime::Mersenne61, 4, 2).unwrap();
        let first = scheme.split_with(&mut StdRng::seed_from_u64(3), &uint!(9)).unwrap();
        let again = scheme.split_with(&mut StdRng::seed_from_u64(3), &uint!(9)).unwrap();
        let other = scheme.split_with(&mut StdRng::seed_from_u64(4), &uint!(9)).unwrap();
        assert_eq!(first, again);
        assert_ne!(first, other);
    }

    #[test]
    fn scheme_from_params() {
        let params = SchemeParams::new(64, 3, 2, uint!(41)).unwrap();
        let scheme = ShamirScheme::from(params.clone());
        assert_eq!(scheme.params(), &params);
    }

    #[proptest(cases = 32)]
    fn round_trip_in_any_order(
        #[strategy(1usize..8)] n: usize,
        #[strategy(1usize..=#n)] k: usize,
        secret: u64,
        seed: u64,
    ) {
        let scheme = ShamirScheme::with_standard_prime(StandardPrime::Mersenne127, n, k).unwrap();
        let mut rng = StdRng::seed_from_u64(seed);
        let mut shares = scheme.split_with(&mut rng, &uint!(secret)).unwrap();
        shares.shuffle(&mut rng);
        prop_assert_eq!(scheme.interpolate(&shares[..k]).unwrap(), uint!(secret));
    }
}
