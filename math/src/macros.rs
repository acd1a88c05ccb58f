/// Simplifies constructing [`BigUint`](num_bigint::BigUint)s from literals.
///
/// # Examples
///
/// ```
/// use math::prelude::*;
/// let a = uint!(41);
/// assert_eq!(a, BigUint::from(41u64));
/// ```
///
/// Values wider than `u64` do not compile:
///
/// ```compile_fail
/// use math::prelude::*;
/// let _ = uint!(1u128 << 70);
/// ```
#[macro_export]
macro_rules! uint {
    ($value:expr) => {
        <$crate::num_bigint::BigUint as ::core::convert::From<u64>>::from($value)
    };
}

/// Simplifies constructing vectors of [`BigUint`](num_bigint::BigUint)s.
///
/// # Examples
///
/// ```
/// use math::prelude::*;
/// let a = uint_vec![3, 2, 1];
/// let b = vec![uint!(3), uint!(2), uint!(1)];
/// assert_eq!(a, b);
/// ```
///
/// ```
/// use math::prelude::*;
/// let a = uint_vec![7; 4];
/// assert_eq!(a, vec![uint!(7); 4]);
/// ```
#[macro_export]
macro_rules! uint_vec {
    ($b:expr; $n:expr) => {
        vec![<$crate::num_bigint::BigUint as ::core::convert::From<u64>>::from($b); $n]
    };
    ($($b:expr),* $(,)?) => {
        vec![$(<$crate::num_bigint::BigUint as ::core::convert::From<u64>>::from($b)),*]
    };
}
