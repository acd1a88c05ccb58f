//! Prime-field arithmetic over arbitrary-precision integers: modular
//! operations, Horner evaluation, Lagrange interpolation at zero and a
//! Miller-Rabin primality test.

pub mod error;
pub mod field;
pub mod macros;
pub mod poly;
pub mod prelude;
pub mod primality;
pub mod traits;

pub use num_bigint;

pub use crate::{
    error::{MathError, Result},
    poly::Polynomial,
    traits::FieldInteger,
};
