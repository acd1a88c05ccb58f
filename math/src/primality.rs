//! Miller-Rabin primality testing.

use crate::field::pow_mod;
use crate::traits::FieldInteger;

/// Witness bases: the first thirteen primes. Together they make the test
/// deterministic for every `n < 3_317_044_064_679_887_385_961_981`.
const WITNESSES: [u64; 13] = [2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41];

/// Whether `n` is prime, certainly so below ~3.3·10^24 and with
/// overwhelming probability above.
pub fn is_probable_prime<I: FieldInteger>(n: &I) -> bool {
    if *n < I::from(2) {
        return false;
    }

    for &w in &WITNESSES {
        let w = I::from(w);
        if *n == w {
            return true;
        }
        if (n.clone() % w).is_zero() {
            return false;
        }
    }

    let one = I::one();
    let two = I::from(2);
    let n_minus_one = n.clone() - one.clone();

    // n - 1 = d * 2^s with d odd
    let mut d = n_minus_one.clone();
    let mut s = 0u32;
    while !d.bit(0) {
        d = d / two.clone();
        s += 1;
    }

    WITNESSES.iter().all(|&w| {
        let mut x = pow_mod(&I::from(w), &d, n);
        if x == one || x == n_minus_one {
            return true;
        }
        for _ in 1..s {
            x = x.mul_mod(&x, n);
            if x == n_minus_one {
                return true;
            }
        }
        false
    })
}
