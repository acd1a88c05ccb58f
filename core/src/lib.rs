//! `(k, n)` threshold secret sharing over a prime field.
//!
//! A secret residue is hidden as the constant term of a random polynomial of
//! degree `k - 1`; each of the `n` shares is one evaluation of it at a
//! distinct random point. Any `k` shares recover the secret by Lagrange
//! interpolation at zero, fewer reveal nothing about it.

pub mod encoding;
pub mod error;
pub mod params;
pub mod random;
pub mod shamir;
pub mod traits;

pub use error::{ParameterError, ShamirError, ShamirResult};
pub use params::{SchemeParams, StandardPrime};
pub use random::RandomSource;
pub use shamir::{ShamirScheme, Share};
pub use traits::PointSource;
