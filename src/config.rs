//! Parameters for secret recovery.

use crate::recovery::lagrange::Division;

/// Configuration for [`find_constant_term_with`](crate::find_constant_term_with)
/// and [`audit_shares`](crate::audit_shares).
///
/// The default reproduces the reference behaviour: the lowest `k` share
/// indices are used and every Lagrange term is truncated toward zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RecoveryParams {
    /// Division strategy used by the interpolator.
    pub division: Division,
}

impl RecoveryParams {
    /// Parameters using exact rational accumulation.
    pub fn exact() -> Self {
        Self {
            division: Division::Exact,
        }
    }
}
