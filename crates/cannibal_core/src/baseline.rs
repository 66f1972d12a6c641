//! Baseline calculator.
//!
//! Turns raw transaction rows into derived rows and aggregate baseline
//! scalars. Everything here is a pure, order-preserving function of its
//! input; no validation is performed and no error can be produced.

use serde::Serialize;

use crate::types::{DerivedRow, TransactionRow};

/// Compute per-row baseline metrics for a set of transaction rows.
///
/// Deterministic, pure and row-order-preserving. The caller's rows are
/// never mutated; each output row owns fresh copies of the input fields.
///
/// Out-of-range inputs (negative prices, `fee_rate > 1`, ...) are not
/// rejected and flow into the derived numbers unchanged.
pub fn compute_baseline(rows: &[TransactionRow]) -> Vec<DerivedRow> {
    rows.iter().map(DerivedRow::from_transaction).collect()
}

/// Aggregate scalars over a full baseline row set.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct BaselineSummary {
    /// Sum of `revenue` over all rows
    pub total_revenue: f64,
    /// Sum of `revenue` over direct-channel rows
    pub direct_revenue: f64,
    /// `direct_revenue / total_revenue`, or `0.0` when total revenue is zero
    pub direct_share: f64,
    /// Sum of `contribution` over all rows
    pub total_contribution: f64,
}

impl BaselineSummary {
    /// Summarize a baseline row set.
    ///
    /// An empty row set yields all-zero aggregates; the share denominator
    /// is guarded so no division by zero can occur.
    pub fn summarize(rows: &[DerivedRow]) -> Self {
        let total_revenue: f64 = rows.iter().map(|r| r.revenue).sum();
        let direct_revenue: f64 = rows
            .iter()
            .filter(|r| r.is_direct())
            .map(|r| r.revenue)
            .sum();
        let direct_share = if total_revenue > 0.0 {
            direct_revenue / total_revenue
        } else {
            0.0
        };
        let total_contribution: f64 = rows.iter().map(|r| r.contribution).sum();
        Self {
            total_revenue,
            direct_revenue,
            direct_share,
            total_contribution,
        }
    }
}
