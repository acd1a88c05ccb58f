//! Polynomials over `Z_p` with the constant term at index 0.

use crate::error::Result;
use crate::field::{add_mod, mod_inverse, sub_mod};
use crate::traits::FieldInteger;

/// Evaluate `coeffs[0] + coeffs[1]*x + ... + coeffs[k-1]*x^(k-1) mod p` with
/// Horner's rule, reducing after every step.
pub fn horner<I: FieldInteger>(x: &I, coeffs: &[I], p: &I) -> I {
    let Some((constant, rest)) = coeffs.split_first() else {
        return I::zero();
    };

    let acc = rest.iter().rev().fold(I::zero(), |acc, coeff| {
        add_mod(&acc, coeff, p).mul_mod(x, p)
    });

    add_mod(&acc, constant, p)
}

/// Lagrange interpolation of the points at `x = 0`.
///
/// For every point `i` the basis value is `Π x_j / Π (x_j - x_i)` over
/// `j != i`, computed with a single inversion. Points are not validated:
/// a repeated x-coordinate surfaces as [`MathError::NotInvertible`].
///
/// [`MathError::NotInvertible`]: crate::error::MathError::NotInvertible
pub fn interpolate_at_zero<I: FieldInteger>(points: &[(I, I)], p: &I) -> Result<I> {
    let mut acc = I::zero();

    for (i, (x_i, y_i)) in points.iter().enumerate() {
        let mut numerator = I::one();
        let mut denominator = I::one();

        for (j, (x_j, _)) in points.iter().enumerate() {
            if i == j {
                continue;
            }
            numerator = numerator.mul_mod(x_j, p);
            denominator = denominator.mul_mod(&sub_mod(x_j, x_i, p), p);
        }

        let basis = numerator.mul_mod(&mod_inverse(&denominator, p)?, p);
        acc = add_mod(&acc, &y_i.mul_mod(&basis, p), p);
    }

    Ok(acc)
}

/// A polynomial of degree `coefficients.len() - 1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial<I: FieldInteger> {
    coefficients: Vec<I>,
}

impl<I: FieldInteger> Polynomial<I> {
    pub fn new(coefficients: Vec<I>) -> Self {
        Self { coefficients }
    }

    pub fn coefficients(&self) -> &[I] {
        &self.coefficients
    }

    /// Number of coefficients minus one; zero for the empty polynomial.
    pub fn degree(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }

    pub fn constant_term(&self) -> Option<&I> {
        self.coefficients.first()
    }

    pub fn evaluate(&self, x: &I, p: &I) -> I {
        horner(x, &self.coefficients, p)
    }
}

impl<I: FieldInteger> From<Vec<I>> for Polynomial<I> {
    fn from(coefficients: Vec<I>) -> Self {
        Self::new(coefficients)
    }
}
