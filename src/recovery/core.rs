//! Test case processing.
//!
//! This module ties the pieces together for one test case:
//!
//! 1. validate the threshold (`1 <= k <= n`)
//! 2. decode every present share in `1..=n`, in ascending index order
//! 3. check that at least `k` points were decoded
//! 4. keep the `k` lowest indices
//! 5. interpolate `f(0)`
//!
//! Selection is deterministic: the lowest indices win. Any `k` honest
//! shares reconstruct the same secret, so this only matters when some
//! shares are corrupted, which is what [`audit_shares`] is for.

use num_bigint::BigInt;
use num_rational::BigRational;
use tracing::{debug, warn};

use crate::config::RecoveryParams;
use crate::encoding::decode_share;
use crate::error::RecoveryError;
use crate::record::TestCase;
use crate::recovery::lagrange::interpolate;
use crate::recovery::point::Point;
use crate::recovery::polynomial::Polynomial;

/// Outcome of [`audit_shares`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShareAudit {
    /// Secret reconstructed from the selected shares.
    pub secret: BigInt,

    /// Exact constant term of the polynomial through the selected shares.
    pub exact_secret: BigRational,

    /// Indices of the remaining shares that do not lie on the polynomial
    /// defined by the selected ones, ascending.
    pub inconsistent: Vec<u64>,
}

impl ShareAudit {
    /// True when `secret` differs from the exact constant term, which
    /// happens when per-term truncation loses precision.
    pub fn truncation_mismatch(&self) -> bool {
        BigRational::from_integer(self.secret.clone()) != self.exact_secret
    }
}

/// Recovers the secret of a test case with default parameters.
///
/// # Errors
///
/// - [`RecoveryError::InvalidThreshold`] if `k == 0` or `k > n`
/// - [`RecoveryError::Decode`] if a present share cannot be decoded
/// - [`RecoveryError::InsufficientShares`] if fewer than `k` shares exist
pub fn find_constant_term(record: &TestCase) -> Result<BigInt, RecoveryError> {
    find_constant_term_with(record, &RecoveryParams::default())
}

/// Recovers the secret of a test case.
pub fn find_constant_term_with(
    record: &TestCase,
    params: &RecoveryParams,
) -> Result<BigInt, RecoveryError> {
    let points = decode_points(record)?;
    let selected = select_points(&points, record.k())?;

    let secret = interpolate(selected, params.division)?;
    debug!(%secret, division = ?params.division, "recovered secret");

    Ok(secret)
}

/// Checks the threshold and decodes every present share into a point.
///
/// Points are returned in ascending x order, with `x` equal to the share
/// index.
pub fn decode_points(record: &TestCase) -> Result<Vec<Point>, RecoveryError> {
    let (n, k) = (record.n(), record.k());

    if k == 0 || k > n {
        return Err(RecoveryError::InvalidThreshold { n, k });
    }

    record
        .shares()
        .map(|(index, entry)| {
            let y = decode_share(&entry.base, &entry.value)
                .map_err(|source| RecoveryError::Decode { index, source })?;

            debug!(index, base = %entry.base, %y, "decoded share");

            Ok(Point::new(index, y))
        })
        .collect()
}

/// Keeps the first `k` points.
///
/// # Errors
///
/// Returns [`RecoveryError::InsufficientShares`] if fewer than `k` points
/// are available.
pub fn select_points(points: &[Point], k: u64) -> Result<&[Point], RecoveryError> {
    let insufficient = || RecoveryError::InsufficientShares {
        k,
        found: points.len(),
    };

    let k = usize::try_from(k).map_err(|_| insufficient())?;

    points.get(..k).ok_or_else(insufficient)
}

/// Recovers the secret and checks the unused shares against it.
///
/// The full polynomial through the selected shares is rebuilt exactly and
/// evaluated at every other decoded share. Any share whose value differs
/// is reported as inconsistent. The recovered secret is also compared with
/// the exact constant term of that polynomial.
pub fn audit_shares(record: &TestCase, params: &RecoveryParams) -> Result<ShareAudit, RecoveryError> {
    let points = decode_points(record)?;
    let selected = select_points(&points, record.k())?;

    let secret = interpolate(selected, params.division)?;
    let polynomial = Polynomial::interpolate(selected)?;

    let inconsistent: Vec<u64> = points[selected.len()..]
        .iter()
        .filter(|p| polynomial.evaluate(p.x()) != BigRational::from_integer(p.y().clone()))
        .filter_map(|p| u64::try_from(p.x()).ok())
        .collect();

    for index in &inconsistent {
        warn!(index, "share does not lie on the reconstructed polynomial");
    }

    let audit = ShareAudit {
        secret,
        exact_secret: polynomial.constant_term(),
        inconsistent,
    };

    if audit.truncation_mismatch() {
        warn!(
            secret = %audit.secret,
            exact = %audit.exact_secret,
            "recovered secret differs from the exact constant term"
        );
    }

    Ok(audit)
}
