//! Scenario execution.
//!
//! Implements the demand-shift transformation: per-channel volume
//! reduction, recapture of a fraction of the removed demand by the direct
//! channel within each (date, product) group, fee-policy overrides and
//! recomputation of the financial metrics.

use std::collections::HashMap;

use cannibal_core::DerivedRow;
use serde::Serialize;

use crate::comparison::{ChannelDelta, ContributionMatrix};
use crate::config::ScenarioConfig;

/// A baseline row with its scenario-adjusted counterpart fields.
///
/// Baseline fields (`volume`, `revenue`, `fee_cost`, `contribution`) are
/// carried through unchanged for comparison; `fee_rate` is the *effective*
/// scenario rate, which differs from the baseline only when the zero-fee
/// policy zeroes a direct row's fee.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ScenarioRow {
    /// Calendar date label (grouping key only)
    pub date: String,
    /// Product identifier
    pub product: String,
    /// Channel identifier (case-insensitive)
    pub channel: String,
    /// Unit sale price (never altered by the scenario)
    pub price: f64,
    /// Baseline units sold
    pub volume: f64,
    /// Effective scenario fee rate
    pub fee_rate: f64,
    /// Cost per unit (never altered by the scenario)
    pub unit_cost: f64,
    /// Baseline revenue
    pub revenue: f64,
    /// Baseline fee cost
    pub fee_cost: f64,
    /// Per-unit margin: `price - unit_cost`
    pub unit_margin: f64,
    /// Baseline contribution
    pub contribution: f64,
    /// Reduction fraction applied to this row (0 for direct rows)
    pub reduction_rate: f64,
    /// Volume removed from this row: `volume * reduction_rate`
    pub reduced_volume: f64,
    /// Recaptured volume for this row's (date, product) group
    pub direct_gain: f64,
    /// Post-scenario volume
    pub volume_new: f64,
    /// Post-scenario revenue: `price * volume_new`
    pub revenue_new: f64,
    /// Post-scenario fee cost: `revenue_new * fee_rate`
    pub fee_cost_new: f64,
    /// Post-scenario contribution
    pub contribution_new: f64,
}

/// Complete output of a scenario run.
#[derive(Clone, Debug, Serialize)]
pub struct ScenarioResult {
    /// Adjusted rows, in baseline order
    pub rows: Vec<ScenarioRow>,
    /// Total scenario contribution minus total baseline contribution
    pub delta_total_contribution: f64,
    /// Total scenario revenue minus total baseline revenue
    pub delta_total_revenue: f64,
    /// Per-channel contribution comparison, sorted by delta descending
    pub by_channel: Vec<ChannelDelta>,
    /// Product×channel scenario contribution matrix
    pub matrix: ContributionMatrix,
}

/// Run a what-if scenario against a baseline row set.
///
/// Pure function of `(rows, config)`: the baseline rows are never mutated
/// and every call produces freshly owned output. Empty input yields empty
/// tables and zero deltas. The engine never fails; missing reduction rates
/// and unmatched group keys all default to zero.
///
/// The recapture rule: within each (date, product) group the direct row
/// absorbs `shift_ratio` times the group's total reduced external volume.
/// A group holding more than one direct row is a data anomaly; each such
/// row independently receives the full gain (the gain is not split).
pub fn simulate(rows: &[DerivedRow], config: &ScenarioConfig) -> ScenarioResult {
    // Group key -> shift_ratio * sum of reduced non-direct volume.
    let mut gains: HashMap<(String, String), f64> = HashMap::new();
    for row in rows {
        if row.is_direct() {
            continue;
        }
        let reduced = row.volume * config.reduction_for(&row.channel);
        *gains
            .entry((row.date.clone(), row.product.clone()))
            .or_insert(0.0) += reduced * config.shift_ratio();
    }

    let scenario_rows: Vec<ScenarioRow> = rows
        .iter()
        .map(|row| adjust_row(row, config, &gains))
        .collect();

    let baseline_contribution: f64 = rows.iter().map(|r| r.contribution).sum();
    let baseline_revenue: f64 = rows.iter().map(|r| r.revenue).sum();
    let scenario_contribution: f64 = scenario_rows.iter().map(|r| r.contribution_new).sum();
    let scenario_revenue: f64 = scenario_rows.iter().map(|r| r.revenue_new).sum();

    let by_channel = ChannelDelta::compare(rows, &scenario_rows);
    let matrix = ContributionMatrix::from_scenario(&scenario_rows);

    ScenarioResult {
        rows: scenario_rows,
        delta_total_contribution: scenario_contribution - baseline_contribution,
        delta_total_revenue: scenario_revenue - baseline_revenue,
        by_channel,
        matrix,
    }
}

/// Adjust a single row given the precomputed per-group gains.
fn adjust_row(
    row: &DerivedRow,
    config: &ScenarioConfig,
    gains: &HashMap<(String, String), f64>,
) -> ScenarioRow {
    let is_direct = row.is_direct();
    let reduction_rate = config.reduction_for(&row.channel);
    let reduced_volume = row.volume * reduction_rate;
    let direct_gain = gains
        .get(&(row.date.clone(), row.product.clone()))
        .copied()
        .unwrap_or(0.0);

    let volume_new = if is_direct {
        row.volume + direct_gain
    } else {
        // Floor at zero; rates above 1 would otherwise over-reduce.
        (row.volume - reduced_volume).max(0.0)
    };

    let fee_rate = if is_direct && config.apply_direct_fee_zero() {
        0.0
    } else {
        row.fee_rate
    };
    // apply_direct_price_policy: reserved, price stays as-is.

    let revenue_new = row.price * volume_new;
    let fee_cost_new = revenue_new * fee_rate;
    let contribution_new = volume_new * (row.price - row.unit_cost) - fee_cost_new;

    ScenarioRow {
        date: row.date.clone(),
        product: row.product.clone(),
        channel: row.channel.clone(),
        price: row.price,
        volume: row.volume,
        fee_rate,
        unit_cost: row.unit_cost,
        revenue: row.revenue,
        fee_cost: row.fee_cost,
        unit_margin: row.unit_margin,
        contribution: row.contribution,
        reduction_rate,
        reduced_volume,
        direct_gain,
        volume_new,
        revenue_new,
        fee_cost_new,
        contribution_new,
    }
}

impl ScenarioRow {
    /// Canonical lowercased channel key for this row.
    pub fn channel_key(&self) -> String {
        cannibal_core::channel_key(&self.channel)
    }

    /// Check whether this row belongs to the direct channel.
    pub fn is_direct(&self) -> bool {
        self.channel_key() == cannibal_core::DIRECT_CHANNEL
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cannibal_core::{compute_baseline, TransactionRow};

    fn two_channel_rows() -> Vec<DerivedRow> {
        compute_baseline(&[
            TransactionRow::new("2025-09-01", "Hoodie A", "d2c", 59_000.0, 120.0, 0.0, 27_000.0),
            TransactionRow::new("2025-09-01", "Hoodie A", "musinsa", 62_000.0, 180.0, 0.15, 27_000.0),
        ])
    }

    #[test]
    fn test_simulate_empty_input() {
        let result = simulate(&[], &ScenarioConfig::new());

        assert!(result.rows.is_empty());
        assert!(result.by_channel.is_empty());
        assert_eq!(result.delta_total_contribution, 0.0);
        assert_eq!(result.delta_total_revenue, 0.0);
    }

    #[test]
    fn test_simulate_identity_without_reductions() {
        let rows = two_channel_rows();
        let result = simulate(&rows, &ScenarioConfig::new());

        for (base, sim) in rows.iter().zip(&result.rows) {
            assert_relative_eq!(sim.volume_new, base.volume);
            assert_relative_eq!(sim.contribution_new, base.contribution);
        }
        assert_relative_eq!(result.delta_total_contribution, 0.0);
    }

    #[test]
    fn test_zero_shift_ratio_means_zero_gain() {
        let rows = two_channel_rows();
        let config = ScenarioConfig::new()
            .with_reduction("musinsa", 0.8)
            .with_shift_ratio(0.0);
        let result = simulate(&rows, &config);

        for row in &result.rows {
            assert_eq!(row.direct_gain, 0.0);
        }
        // External volume still drops even though nothing is recaptured.
        assert_relative_eq!(result.rows[1].volume_new, 180.0 - 180.0 * 0.8);
    }

    #[test]
    fn test_direct_row_absorbs_group_gain() {
        let rows = two_channel_rows();
        let config = ScenarioConfig::new()
            .with_reduction("musinsa", 0.5)
            .with_shift_ratio(0.5);
        let result = simulate(&rows, &config);

        let direct = &result.rows[0];
        let external = &result.rows[1];
        assert_relative_eq!(external.reduced_volume, 90.0);
        assert_relative_eq!(direct.direct_gain, 45.0);
        assert_relative_eq!(direct.volume_new, 165.0);
        assert_relative_eq!(external.volume_new, 90.0);
    }

    #[test]
    fn test_gain_does_not_cross_groups() {
        let rows = compute_baseline(&[
            TransactionRow::new("2025-09-01", "Hoodie A", "d2c", 59_000.0, 120.0, 0.0, 27_000.0),
            TransactionRow::new("2025-09-01", "Hoodie A", "musinsa", 62_000.0, 180.0, 0.15, 27_000.0),
            TransactionRow::new("2025-09-02", "Pants B", "d2c", 69_000.0, 90.0, 0.0, 33_000.0),
            TransactionRow::new("2025-09-02", "Pants B", "musinsa", 72_000.0, 160.0, 0.15, 33_000.0),
        ]);
        let config = ScenarioConfig::new()
            .with_reduction("musinsa", 0.5)
            .with_shift_ratio(1.0);
        let result = simulate(&rows, &config);

        assert_relative_eq!(result.rows[0].direct_gain, 90.0);
        assert_relative_eq!(result.rows[2].direct_gain, 80.0);
        assert_relative_eq!(result.rows[0].volume_new, 210.0);
        assert_relative_eq!(result.rows[2].volume_new, 170.0);
    }

    #[test]
    fn test_duplicate_direct_rows_each_take_full_gain() {
        // Data anomaly: two direct rows in one (date, product) group.
        // Observed behavior is duplication of the gain, not splitting.
        let rows = compute_baseline(&[
            TransactionRow::new("2025-09-01", "Hoodie A", "d2c", 59_000.0, 100.0, 0.0, 27_000.0),
            TransactionRow::new("2025-09-01", "Hoodie A", "D2C", 59_000.0, 20.0, 0.0, 27_000.0),
            TransactionRow::new("2025-09-01", "Hoodie A", "musinsa", 62_000.0, 180.0, 0.15, 27_000.0),
        ]);
        let config = ScenarioConfig::new()
            .with_reduction("musinsa", 0.5)
            .with_shift_ratio(0.5);
        let result = simulate(&rows, &config);

        assert_relative_eq!(result.rows[0].volume_new, 100.0 + 45.0);
        assert_relative_eq!(result.rows[1].volume_new, 20.0 + 45.0);
    }

    #[test]
    fn test_direct_fee_zero_policy() {
        let rows = compute_baseline(&[TransactionRow::new(
            "2025-09-01",
            "Hoodie A",
            "d2c",
            59_000.0,
            120.0,
            0.05,
            27_000.0,
        )]);
        let config = ScenarioConfig::new().with_direct_fee_zero(true);
        let result = simulate(&rows, &config);

        assert_eq!(result.rows[0].fee_rate, 0.0);
        assert_eq!(result.rows[0].fee_cost_new, 0.0);
        // Volume unchanged but the fee removal lifts contribution.
        assert!(result.rows[0].contribution_new > result.rows[0].contribution);
    }

    #[test]
    fn test_fee_zero_policy_leaves_external_fees() {
        let rows = two_channel_rows();
        let config = ScenarioConfig::new().with_direct_fee_zero(true);
        let result = simulate(&rows, &config);

        assert_eq!(result.rows[1].fee_rate, 0.15);
    }

    #[test]
    fn test_price_policy_flag_is_noop() {
        let rows = two_channel_rows();
        let config = ScenarioConfig::new()
            .with_reduction("musinsa", 0.5)
            .with_shift_ratio(0.5);
        let with_flag = simulate(&rows, &config.clone().with_direct_price_policy(true));
        let without_flag = simulate(&rows, &config);

        assert_eq!(with_flag.rows, without_flag.rows);
    }

    #[test]
    fn test_over_reduction_floors_at_zero() {
        // Rates above 1 are out of domain but must not go negative.
        let rows = two_channel_rows();
        let config = ScenarioConfig::new().with_reduction("musinsa", 1.5);
        let result = simulate(&rows, &config);

        assert_eq!(result.rows[1].volume_new, 0.0);
    }

    #[test]
    fn test_external_group_without_direct_row() {
        // Reduced demand with nowhere to land: the gain is computed for the
        // group but no row absorbs it, so total volume simply shrinks.
        let rows = compute_baseline(&[TransactionRow::new(
            "2025-09-01",
            "Hoodie A",
            "musinsa",
            62_000.0,
            180.0,
            0.15,
            27_000.0,
        )]);
        let config = ScenarioConfig::new()
            .with_reduction("musinsa", 0.5)
            .with_shift_ratio(0.5);
        let result = simulate(&rows, &config);

        assert_relative_eq!(result.rows[0].volume_new, 90.0);
        assert!(result.delta_total_revenue < 0.0);
    }

    #[test]
    fn test_simulate_does_not_mutate_baseline() {
        let rows = two_channel_rows();
        let before = rows.clone();
        let _ = simulate(
            &rows,
            &ScenarioConfig::new()
                .with_reduction("musinsa", 0.5)
                .with_shift_ratio(0.5)
                .with_direct_fee_zero(true),
        );
        assert_eq!(rows, before);
    }
}
