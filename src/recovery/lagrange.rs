//! Lagrange interpolation at zero over the integers.
//!
//! Given `k` points with distinct x-coordinates, the constant term of the
//! unique polynomial of degree `< k` through them is
//!
//! ```text
//! f(0) = Σ_i  y_i · Π_{j≠i} (0 − x_j) / Π_{j≠i} (x_i − x_j)
//! ```
//!
//! The polynomial itself is never built. Two division strategies are
//! offered because they disagree on inputs that do not come from an
//! integer-coefficient polynomial:
//!
//! - [`Division::Truncating`] divides every term toward zero before adding
//!   it to the sum. This is the reference behaviour and is exact whenever
//!   each term is integral.
//! - [`Division::Exact`] adds the terms as rationals and only requires the
//!   final sum to be an integer.
//!
//! For points `(1, 1), (2, 0), (4, 1)` the exact constant term is `3`
//! while per-term truncation yields `2`.

use std::collections::HashSet;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};
use thiserror::Error;
use tracing::trace;

use crate::recovery::point::Point;

/// How each Lagrange term is divided by its denominator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Division {
    /// Integer division toward zero on every term.
    #[default]
    Truncating,

    /// Rational accumulation, integrality checked on the final sum.
    Exact,
}

/// Errors that may occur during interpolation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InterpolationError {
    /// No points were supplied.
    #[error("interpolation requires at least one point")]
    NoPoints,

    /// Two points share the same x-coordinate.
    #[error("duplicate x-coordinate {0}")]
    DuplicateAbscissa(BigInt),

    /// The exact constant term is a proper fraction.
    #[error("constant term {numer}/{denom} is not an integer")]
    NonIntegral { numer: BigInt, denom: BigInt },
}

/// Computes `f(0)` with the requested division strategy.
pub fn interpolate(points: &[Point], division: Division) -> Result<BigInt, InterpolationError> {
    match division {
        Division::Truncating => interpolate_truncating(points),
        Division::Exact => interpolate_exact(points),
    }
}

/// Computes `f(0)`, truncating each term toward zero before summing.
///
/// # Errors
///
/// Returns an error if `points` is empty or contains duplicate x values.
pub fn interpolate_truncating(points: &[Point]) -> Result<BigInt, InterpolationError> {
    check_points(points)?;

    let secret = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let (num, den) = basis_at_zero(points, i);
            let term = point.y() * num / den;
            trace!(x = %point.x(), %term, "truncated lagrange term");
            term
        })
        .fold(BigInt::zero(), |acc, term| acc + term);

    Ok(secret)
}

/// Computes `f(0)` with exact rational arithmetic.
///
/// # Errors
///
/// In addition to the input checks of [`interpolate_truncating`], returns
/// [`InterpolationError::NonIntegral`] if the constant term is not an
/// integer.
pub fn interpolate_exact(points: &[Point]) -> Result<BigInt, InterpolationError> {
    let constant = constant_term(points)?;

    if constant.is_integer() {
        Ok(constant.to_integer())
    } else {
        Err(InterpolationError::NonIntegral {
            numer: constant.numer().clone(),
            denom: constant.denom().clone(),
        })
    }
}

/// Computes `f(0)` as a reduced rational.
pub fn constant_term(points: &[Point]) -> Result<BigRational, InterpolationError> {
    check_points(points)?;

    let constant = points
        .iter()
        .enumerate()
        .map(|(i, point)| {
            let (num, den) = basis_at_zero(points, i);
            BigRational::new(point.y() * num, den)
        })
        .fold(BigRational::zero(), |acc, term| acc + term);

    Ok(constant)
}

/// Returns `(Π_{j≠i} −x_j, Π_{j≠i} (x_i − x_j))`.
fn basis_at_zero(points: &[Point], i: usize) -> (BigInt, BigInt) {
    let xi = points[i].x();

    points
        .iter()
        .enumerate()
        .filter(|&(j, _)| j != i)
        .fold((BigInt::one(), BigInt::one()), |(num, den), (_, p)| {
            (num * -p.x(), den * (xi - p.x()))
        })
}

pub(crate) fn check_points(points: &[Point]) -> Result<(), InterpolationError> {
    if points.is_empty() {
        return Err(InterpolationError::NoPoints);
    }

    let mut seen = HashSet::with_capacity(points.len());
    for p in points {
        if !seen.insert(p.x()) {
            return Err(InterpolationError::DuplicateAbscissa(p.x().clone()));
        }
    }

    Ok(())
}
