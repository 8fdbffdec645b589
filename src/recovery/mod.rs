//! Secret reconstruction.
//!
//! This module recovers the constant term of a polynomial from its
//! evaluations, using plain integer and rational arithmetic.
//!
//! # Components
//!
//! - [`point`]
//!   The `(x, y)` share value type.
//!
//! - [`lagrange`]
//!   Lagrange interpolation at zero. Computes `f(0)` directly from `k`
//!   points without building the polynomial, either truncating each term
//!   or accumulating exact rationals.
//!
//! - [`polynomial`]
//!   Full polynomial reconstruction with rational coefficients and
//!   evaluation. Used to check shares that were not needed for the secret.
//!
//! - [`core`]
//!   The test case processor: threshold validation, share decoding,
//!   deterministic selection of the lowest `k` indices, interpolation and
//!   share auditing.
//!
//! # Scope
//!
//! There is no finite field here. Interpolation is exact only for shares
//! generated from a polynomial over the integers. This module does not
//! generate shares.

pub mod core;
pub mod lagrange;
pub mod point;
pub mod polynomial;
