//! Share coordinates.

use std::fmt::{Display, Formatter, Result};

use num_bigint::BigInt;

/// A single share: one evaluation `(x, y)` of the secret polynomial.
///
/// Coordinates are fixed at construction. The x-coordinate is the share
/// index (small and positive in practice), the y-coordinate can be
/// arbitrarily large.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Point {
    x: BigInt,
    y: BigInt,
}

impl Point {
    pub fn new(x: impl Into<BigInt>, y: impl Into<BigInt>) -> Self {
        Self {
            x: x.into(),
            y: y.into(),
        }
    }

    /// Share index.
    pub fn x(&self) -> &BigInt {
        &self.x
    }

    /// Share value.
    pub fn y(&self) -> &BigInt {
        &self.y
    }
}

impl<X: Into<BigInt>, Y: Into<BigInt>> From<(X, Y)> for Point {
    fn from((x, y): (X, Y)) -> Self {
        Self::new(x, y)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
