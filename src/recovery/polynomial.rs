//! Exact polynomial reconstruction.
//!
//! [`lagrange`](crate::recovery::lagrange) only ever needs `f(0)`. Auditing
//! the shares that were *not* used requires the whole polynomial, which is
//! rebuilt here with rational coefficients so that no precision is lost.
//!
//! Coefficients are stored in increasing degree order:
//!
//! ```text
//! f(x) = c[0] + c[1]·x + c[2]·x² + ...
//! ```

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use crate::recovery::lagrange::{InterpolationError, check_points};
use crate::recovery::point::Point;

/// A polynomial with rational coefficients.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Polynomial {
    coefficients: Vec<BigRational>,
}

impl Polynomial {
    /// Builds a polynomial from integer coefficients, lowest degree first.
    pub fn from_coefficients<I, T>(coefficients: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<BigInt>,
    {
        let mut poly = Self {
            coefficients: coefficients
                .into_iter()
                .map(|c| BigRational::from_integer(c.into()))
                .collect(),
        };
        poly.trim();
        poly
    }

    /// Reconstructs the unique polynomial of degree `< points.len()` passing
    /// through every point.
    ///
    /// # Errors
    ///
    /// Returns an error if `points` is empty or contains duplicate x values.
    pub fn interpolate(points: &[Point]) -> Result<Self, InterpolationError> {
        check_points(points)?;

        let mut acc = vec![BigRational::zero(); points.len()];

        for (i, pi) in points.iter().enumerate() {
            // Π_{j≠i} (x − x_j), built one linear factor at a time.
            let mut basis = vec![BigRational::one()];
            let mut den = BigInt::one();

            for (j, pj) in points.iter().enumerate() {
                if i == j {
                    continue;
                }

                let root = BigRational::from_integer(pj.x().clone());
                let mut next = vec![BigRational::zero(); basis.len() + 1];
                for (deg, c) in basis.iter().enumerate() {
                    next[deg] -= c * &root;
                    next[deg + 1] += c.clone();
                }
                basis = next;

                den *= pi.x() - pj.x();
            }

            let scale = BigRational::new(pi.y().clone(), den);
            for (a, b) in acc.iter_mut().zip(basis.iter()) {
                *a += b * &scale;
            }
        }

        let mut poly = Self { coefficients: acc };
        poly.trim();
        Ok(poly)
    }

    /// Coefficients, lowest degree first. Empty for the zero polynomial.
    pub fn coefficients(&self) -> &[BigRational] {
        &self.coefficients
    }

    /// Degree of the polynomial, `None` for the zero polynomial.
    pub fn degree(&self) -> Option<usize> {
        self.coefficients.len().checked_sub(1)
    }

    /// Returns `f(0)`.
    pub fn constant_term(&self) -> BigRational {
        self.coefficients
            .first()
            .cloned()
            .unwrap_or_else(BigRational::zero)
    }

    /// Returns the coefficients as integers if all of them are integral.
    pub fn integer_coefficients(&self) -> Option<Vec<BigInt>> {
        self.coefficients
            .iter()
            .map(|c| c.is_integer().then(|| c.to_integer()))
            .collect()
    }

    /// Evaluates the polynomial at `x` using Horner's method.
    pub fn evaluate(&self, x: &BigInt) -> BigRational {
        let x = BigRational::from_integer(x.clone());

        self.coefficients
            .iter()
            .rev()
            .fold(BigRational::zero(), |acc, c| acc * &x + c)
    }

    fn trim(&mut self) {
        while self.coefficients.last().is_some_and(Zero::is_zero) {
            self.coefficients.pop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn horner_evaluation() {
        // f(x) = 1 + 2x + 3x²
        let poly = Polynomial::from_coefficients([1, 2, 3]);
        assert_eq!(
            poly.evaluate(&BigInt::from(2)),
            BigRational::from_integer(BigInt::from(17))
        );
    }

    #[test]
    fn trailing_zeros_are_dropped() {
        let poly = Polynomial::from_coefficients([4, 0, 0]);
        assert_eq!(poly.degree(), Some(0));

        let zero = Polynomial::from_coefficients([0, 0]);
        assert_eq!(zero.degree(), None);
        assert!(zero.constant_term().is_zero());
    }

    #[test]
    fn recovers_line() {
        // f(x) = 2x
        let points = [Point::new(2, 4), Point::new(4, 8)];
        let poly = Polynomial::interpolate(&points).unwrap();
        assert_eq!(
            poly.integer_coefficients(),
            Some(vec![BigInt::from(0), BigInt::from(2)])
        );
    }
}
