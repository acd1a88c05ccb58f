//! Modular arithmetic helpers. Every result is reduced into `[0, m)`.
//!
//! The infallible helpers panic when `m` is zero, exactly like the underlying
//! `%` operator.

use crate::error::{MathError, Result};
use crate::traits::FieldInteger;

/// `(a + b) mod m`.
#[inline]
pub fn add_mod<I: FieldInteger>(a: &I, b: &I, m: &I) -> I {
    (a.clone() + b.clone()) % m.clone()
}

/// `(a - b) mod m`, wrapping through `m` when `b > a`.
#[inline]
pub fn sub_mod<I: FieldInteger>(a: &I, b: &I, m: &I) -> I {
    let a = a.clone() % m.clone();
    let b = b.clone() % m.clone();
    (a + m.clone() - b) % m.clone()
}

/// `(a * b) mod m`.
#[inline]
pub fn mul_mod<I: FieldInteger>(a: &I, b: &I, m: &I) -> I {
    a.mul_mod(b, m)
}

/// Square-and-multiply exponentiation, scanning the exponent from its least
/// significant bit upwards.
#[must_use]
pub fn pow_mod<I: FieldInteger>(base: &I, exponent: &I, m: &I) -> I {
    let mut acc = I::one() % m.clone();
    let mut base = base.clone() % m.clone();

    for i in 0..exponent.bit_length() {
        if exponent.bit(i) {
            acc = acc.mul_mod(&base, m);
        }
        base = base.mul_mod(&base, m);
    }

    acc
}

/// Multiplicative inverse of `x` modulo the prime `p`, as `x^(p-2) mod p`.
///
/// The candidate is checked against `x * x^-1 ≡ 1`, so a composite `p` for
/// which Fermat's little theorem does not hold is reported instead of
/// returning a bogus value.
pub fn mod_inverse<I: FieldInteger>(x: &I, p: &I) -> Result<I> {
    let two = I::from(2);
    if *p < two {
        return Err(MathError::InvalidModulus);
    }

    let x = x.clone() % p.clone();
    if x.is_zero() {
        return Err(MathError::NotInvertible);
    }

    let candidate = pow_mod(&x, &(p.clone() - two), p);
    if !x.mul_mod(&candidate, p).ct_eq(&I::one()) {
        return Err(MathError::NotInvertible);
    }

    Ok(candidate)
}
