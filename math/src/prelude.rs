pub use num_bigint::BigUint;
pub use num_traits::{One, Zero};

pub use crate::{uint, uint_vec};
pub use crate::{
    field::{add_mod, mod_inverse, mul_mod, pow_mod, sub_mod},
    poly::{horner, interpolate_at_zero, Polynomial},
    primality::is_probable_prime,
    traits::FieldInteger,
};
