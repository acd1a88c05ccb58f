use std::collections::HashSet;

use math::prelude::*;
use tracing::debug;

use crate::error::{ShamirError, ShamirResult};
use crate::params::SchemeParams;
use crate::traits::PointSource;

/// Recover the secret from at least `k` shares by Lagrange interpolation at
/// `x = 0`.
///
/// Every supplied share is validated before any arithmetic: x must lie in
/// `[1, p)`, y in `[0, p)`, and no two shares may share an x-coordinate.
/// The first `k` shares are then interpolated. Whether the shares come from
/// the same split is not (and cannot be) checked.
pub fn reconstruct_secret<S>(params: &SchemeParams, shares: &[S]) -> ShamirResult<BigUint>
where
    S: PointSource,
{
    let threshold = params.threshold();
    if shares.len() < threshold {
        return Err(ShamirError::InsufficientShares {
            required: threshold,
            provided: shares.len(),
        });
    }

    validate_points(params.modulus(), shares)?;

    let points: Vec<(BigUint, BigUint)> = shares[..threshold]
        .iter()
        .map(|share| (share.x().clone(), share.y().clone()))
        .collect();
    let secret = interpolate_at_zero(&points, params.modulus())?;

    debug!(threshold, provided = shares.len(), "reconstructed secret from shares");
    Ok(secret)
}

fn validate_points<S: PointSource>(p: &BigUint, shares: &[S]) -> ShamirResult<()> {
    let mut seen: HashSet<&BigUint> = HashSet::with_capacity(shares.len());

    for share in shares {
        let (x, y) = (share.x(), share.y());
        if x.is_zero() || x >= p || y >= p {
            return Err(ShamirError::ShareOutOfRange { x: x.clone() });
        }
        if !seen.insert(x) {
            return Err(ShamirError::DuplicateXValue(x.clone()));
        }
    }

    Ok(())
}
