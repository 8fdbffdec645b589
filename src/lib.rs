//! Secret reconstruction for threshold secret sharing over the integers
//!
//! This crate recovers the constant term `f(0)` of a polynomial from a set
//! of `(x, y)` shares whose y-values are written in arbitrary numeric bases.
//! Arithmetic is performed over arbitrary-precision integers and rationals;
//! there is no finite field and no modular reduction.
//!
//! # Module overview
//!
//! - `encoding`
//!   Radix decoding of share values. Converts a digit string in a stated
//!   base (2 to 36) into a `BigInt`, and back.
//!
//! - `recovery`
//!   The reconstruction machinery.
//!
//!   This module holds the `Point` value type, Lagrange interpolation at
//!   zero (with either per-term truncating division or exact rational
//!   accumulation), full polynomial reconstruction, and the test case
//!   processor that ties decoding, validation and interpolation together.
//!
//! - `record`
//!   Extraction of a test case from its JSON representation. The record
//!   carries the declared share count `n`, the threshold `k` and a sparse
//!   map of share entries keyed by index.
//!
//! - `config`
//!   Parameters accepted by the processor.
//!
//! - `error`
//!   The crate-level error type. Every failure path maps to a distinct
//!   variant so callers can tell a bad base apart from a missing share.
//!
//! # Design goals
//!
//! - Exact arithmetic only, never floating point
//! - Deterministic results independent of JSON key order
//! - One failing test case never aborts the others
//!
//! # Limitations
//!
//! Canonical Shamir secret sharing works in a finite field. Here the
//! polynomial is assumed to have been built over the integers, so results
//! are only meaningful for shares produced that way.

pub mod config;
pub mod encoding;
pub mod error;
pub mod record;
pub mod recovery;

pub use config::RecoveryParams;
pub use error::RecoveryError;
pub use record::TestCase;
pub use recovery::core::{audit_shares, find_constant_term, find_constant_term_with};
pub use recovery::lagrange::Division;
pub use recovery::point::Point;
