//! Numeric encodings for share values.
//!
//! Share y-values are transported as digit strings together with the base
//! they are written in. This module turns them into arbitrary-precision
//! integers.
//!
//! # Radix encoding
//!
//! The `radix` submodule accepts any base from 2 to 36. Digits beyond `9`
//! are the letters `a` to `z`, matched case-insensitively. A single
//! leading `+` or `-` is allowed.
//!
//! Decoding is pure and allocation is bounded by the length of the input.
//! A failure only concerns the value being decoded; callers decide whether
//! it is fatal for anything larger.

pub mod radix;

pub use radix::{DecodeError, decode, decode_share, encode};
