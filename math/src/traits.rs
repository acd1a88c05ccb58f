use std::fmt::Debug;
use std::fmt::Display;
use std::hash::Hash;
use std::ops::Add;
use std::ops::Div;
use std::ops::Mul;
use std::ops::Rem;
use std::ops::Sub;

use num_bigint::BigUint;
use num_traits::One;
use num_traits::Zero;

/// Plain integer arithmetic by value. Subtraction is only ever performed with
/// a minuend at least as large as the subtrahend.
pub trait IntegerOps:
    Sized
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Rem<Output = Self>
{
}

impl<T> IntegerOps for T where
    T: Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + Rem<Output = T>
{
}

pub trait IntegerCore:
    Clone + Debug + Display + Eq + Ord + Hash + Send + Sync
{
}

impl<T> IntegerCore for T where
    T: Clone + Debug + Display + Eq + Ord + Hash + Send + Sync
{
}

/// The minimal non-negative arbitrary-precision integer interface the field
/// layer is written against.
pub trait FieldInteger: IntegerCore + IntegerOps + Zero + One + From<u64> {
    /// `(self * rhs) mod modulus`.
    #[must_use]
    fn mul_mod(&self, rhs: &Self, modulus: &Self) -> Self {
        (self.clone() * rhs.clone()) % modulus.clone()
    }

    /// Number of significant bits; zero for zero.
    fn bit_length(&self) -> u64;

    /// Whether bit `index` (least significant first) is set.
    fn bit(&self, index: u64) -> bool;

    /// Equality that inspects every byte of both operands.
    fn ct_eq(&self, other: &Self) -> bool;
}

impl FieldInteger for BigUint {
    #[inline]
    fn mul_mod(&self, rhs: &Self, modulus: &Self) -> Self {
        (self * rhs) % modulus
    }

    #[inline]
    fn bit_length(&self) -> u64 {
        self.bits()
    }

    #[inline]
    fn bit(&self, index: u64) -> bool {
        BigUint::bit(self, index)
    }

    fn ct_eq(&self, other: &Self) -> bool {
        let lhs = self.to_bytes_le();
        let rhs = other.to_bytes_le();
        let width = lhs.len().max(rhs.len());
        let byte_at = |bytes: &[u8], i: usize| bytes.get(i).copied().unwrap_or(0);

        (0..width).fold(0u8, |acc, i| acc | (byte_at(&lhs, i) ^ byte_at(&rhs, i))) == 0
    }
}
