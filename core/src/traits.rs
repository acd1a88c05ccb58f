use num_bigint::BigUint;

/// Abstract source of an `(x, y)` evaluation point used during reconstruction.
pub trait PointSource {
    /// The x-coordinate of this point.
    fn x(&self) -> &BigUint;

    /// The polynomial value at [`x`](PointSource::x).
    fn y(&self) -> &BigUint;
}

impl PointSource for (BigUint, BigUint) {
    fn x(&self) -> &BigUint {
        &self.0
    }

    fn y(&self) -> &BigUint {
        &self.1
    }
}

impl<T: PointSource + ?Sized> PointSource for &T {
    fn x(&self) -> &BigUint {
        (**self).x()
    }

    fn y(&self) -> &BigUint {
        (**self).y()
    }
}
