//! Crate-level error type.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::encoding::DecodeError;
use crate::recovery::lagrange::InterpolationError;

/// Errors that may occur while recovering the secret of a test case.
///
/// Each variant is scoped to a single test case. None of them leave state
/// behind, so callers can report the failure and move on to the next case.
#[derive(Debug, Error)]
pub enum RecoveryError {
    /// The record source could not be read.
    #[error("cannot read record {}: {source}", .path.display())]
    MissingSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The record is not shaped like a test case.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// A share value could not be decoded in its stated base.
    #[error("share {index}: {source}")]
    Decode {
        index: u64,
        #[source]
        source: DecodeError,
    },

    /// The threshold is zero or exceeds the declared share count.
    #[error("invalid threshold: k = {k} must be between 1 and n = {n}")]
    InvalidThreshold { n: u64, k: u64 },

    /// Fewer than `k` shares are present in the record.
    #[error("not enough shares: need {k}, found {found}")]
    InsufficientShares { k: u64, found: usize },

    /// Interpolation rejected the selected points.
    #[error(transparent)]
    Interpolation(#[from] InterpolationError),
}

impl RecoveryError {
    pub(crate) fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedRecord(message.into())
    }
}
