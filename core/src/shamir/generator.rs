use math::prelude::*;
use tracing::{debug, trace, warn};

use crate::error::{ParameterError, ShamirError, ShamirResult};
use crate::params::SchemeParams;
use crate::random::{sample_residue, RandomSource};

use super::accumulator::ShareAccumulator;
use super::share::Share;

/// Candidate draws allowed per share, per participant (at least 16
/// participants are assumed when sizing the budget).
pub(crate) const ATTEMPTS_PER_PARTICIPANT: usize = 64;

/// Split `secret` into `n` shares, any `k` of which reconstruct it.
///
/// Coefficients `1..k` and every evaluation point are drawn from `source`
/// and mapped into `[1, p - 2]`. Evaluation points are pairwise distinct.
/// A secret that is not below `p` is rejected before any randomness is
/// consumed.
pub fn generate_shares<S>(
    params: &SchemeParams,
    secret: &BigUint,
    source: &mut S,
) -> ShamirResult<Vec<Share>>
where
    S: RandomSource + ?Sized,
{
    let p = params.modulus();
    if secret >= p {
        return Err(ParameterError::ModulusNotAboveSecret.into());
    }

    let participants = params.participants();
    let polynomial = random_polynomial(params, secret, source);
    let budget = attempt_budget(participants);
    let mut accumulator = ShareAccumulator::with_capacity(participants);

    while accumulator.len() < participants {
        let x = fresh_point(&accumulator, params, source, budget)?;
        let y = polynomial.evaluate(&x, p);
        accumulator.insert(x, y);
    }

    debug!(
        participants,
        threshold = params.threshold(),
        bits = params.bits(),
        "split secret into shares"
    );
    Ok(accumulator.finalize())
}

/// Build a random polynomial of degree `k - 1` with the constant term set to
/// `secret`.
fn random_polynomial<S>(params: &SchemeParams, secret: &BigUint, source: &mut S) -> Polynomial<BigUint>
where
    S: RandomSource + ?Sized,
{
    let (bits, p) = (params.bits(), params.modulus());
    let coefficients: Vec<BigUint> = std::iter::once(secret.clone())
        .chain(
            std::iter::repeat_with(|| sample_residue(source, bits, p))
                .take(params.threshold().saturating_sub(1)),
        )
        .collect();
    Polynomial::from(coefficients)
}

/// Draw evaluation points until one is not yet taken, within `budget` draws.
fn fresh_point<S>(
    accumulator: &ShareAccumulator,
    params: &SchemeParams,
    source: &mut S,
    budget: usize,
) -> ShamirResult<BigUint>
where
    S: RandomSource + ?Sized,
{
    for attempt in 1..=budget {
        let candidate = sample_residue(source, params.bits(), params.modulus());
        if !accumulator.is_taken(&candidate) {
            return Ok(candidate);
        }
        trace!(attempt, share = accumulator.len(), "evaluation point collision, resampling");
    }

    warn!(attempts = budget, share = accumulator.len(), "evaluation point sampling exhausted");
    Err(ShamirError::SamplingExhausted { attempts: budget })
}

fn attempt_budget(participants: usize) -> usize {
    ATTEMPTS_PER_PARTICIPANT.saturating_mul(participants.max(16))
}
