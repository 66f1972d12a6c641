//! Aggregate comparison views over baseline and scenario rows.
//!
//! Provides:
//! - `ChannelDelta`: per-channel baseline-vs-scenario contribution table
//! - `ContributionMatrix`: product×channel scenario contribution grid

use std::collections::HashMap;

use cannibal_core::DerivedRow;
use serde::Serialize;

use crate::engine::ScenarioRow;

/// Contribution comparison for one channel.
///
/// Channels are compared by their raw identifier as it appears in the rows.
/// The channel set is the full outer union of both row sets; a channel
/// present on only one side gets `0.0` for the missing side.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ChannelDelta {
    /// Channel identifier
    pub channel: String,
    /// Baseline contribution for the channel
    pub contribution_now: f64,
    /// Scenario contribution for the channel
    pub contribution_new: f64,
    /// `contribution_new - contribution_now`
    pub delta: f64,
}

impl ChannelDelta {
    /// Build the per-channel comparison table, sorted by delta descending.
    pub fn compare(baseline: &[DerivedRow], scenario: &[ScenarioRow]) -> Vec<ChannelDelta> {
        // channel -> (baseline contribution, scenario contribution)
        let mut totals: HashMap<String, (f64, f64)> = HashMap::new();
        for row in baseline {
            totals.entry(row.channel.clone()).or_insert((0.0, 0.0)).0 += row.contribution;
        }
        for row in scenario {
            totals.entry(row.channel.clone()).or_insert((0.0, 0.0)).1 += row.contribution_new;
        }

        let mut deltas: Vec<ChannelDelta> = totals
            .into_iter()
            .map(|(channel, (now, new))| ChannelDelta {
                channel,
                contribution_now: now,
                contribution_new: new,
                delta: new - now,
            })
            .collect();
        deltas.sort_by(|a, b| {
            b.delta
                .partial_cmp(&a.delta)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        deltas
    }
}

/// Product×channel matrix of scenario contribution.
///
/// Rows are distinct products and columns distinct channels, both sorted
/// lexicographically for deterministic output. Cells hold the summed
/// `contribution_new` for the pair; combinations absent from the row set
/// are `0.0`.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ContributionMatrix {
    /// Row labels: distinct products, sorted
    pub products: Vec<String>,
    /// Column labels: distinct channels, sorted
    pub channels: Vec<String>,
    /// `cells[i][j]` = scenario contribution for `(products[i], channels[j])`
    pub cells: Vec<Vec<f64>>,
}

impl ContributionMatrix {
    /// Pivot scenario rows into a product×channel contribution grid.
    pub fn from_scenario(rows: &[ScenarioRow]) -> Self {
        let mut products: Vec<String> = rows.iter().map(|r| r.product.clone()).collect();
        products.sort();
        products.dedup();
        let mut channels: Vec<String> = rows.iter().map(|r| r.channel.clone()).collect();
        channels.sort();
        channels.dedup();

        let mut sums: HashMap<(&str, &str), f64> = HashMap::new();
        for row in rows {
            *sums
                .entry((row.product.as_str(), row.channel.as_str()))
                .or_insert(0.0) += row.contribution_new;
        }

        let cells = products
            .iter()
            .map(|p| {
                channels
                    .iter()
                    .map(|c| sums.get(&(p.as_str(), c.as_str())).copied().unwrap_or(0.0))
                    .collect()
            })
            .collect();

        Self {
            products,
            channels,
            cells,
        }
    }

    /// Cell value for a (product, channel) pair.
    ///
    /// Returns `None` when either label is absent from the matrix.
    pub fn get(&self, product: &str, channel: &str) -> Option<f64> {
        let i = self.products.iter().position(|p| p == product)?;
        let j = self.channels.iter().position(|c| c == channel)?;
        Some(self.cells[i][j])
    }

    /// Check whether the matrix has no rows.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cannibal_core::{compute_baseline, TransactionRow};
    use crate::config::ScenarioConfig;
    use crate::engine::simulate;

    fn sample_rows() -> Vec<DerivedRow> {
        compute_baseline(&[
            TransactionRow::new("2025-09-01", "Hoodie A", "d2c", 59_000.0, 120.0, 0.0, 27_000.0),
            TransactionRow::new("2025-09-01", "Hoodie A", "musinsa", 62_000.0, 180.0, 0.15, 27_000.0),
            TransactionRow::new("2025-09-01", "Pants B", "d2c", 69_000.0, 90.0, 0.0, 33_000.0),
            TransactionRow::new("2025-09-01", "Pants B", "coupang", 70_000.0, 110.0, 0.20, 33_000.0),
        ])
    }

    #[test]
    fn test_compare_covers_channel_union() {
        let rows = sample_rows();
        let result = simulate(&rows, &ScenarioConfig::new());

        let mut channels: Vec<&str> = result
            .by_channel
            .iter()
            .map(|d| d.channel.as_str())
            .collect();
        channels.sort_unstable();
        assert_eq!(channels, vec!["coupang", "d2c", "musinsa"]);
    }

    #[test]
    fn test_compare_sorted_by_delta_descending() {
        let rows = sample_rows();
        let config = ScenarioConfig::new()
            .with_reductions([("musinsa", 0.5), ("coupang", 0.2)])
            .with_shift_ratio(0.5);
        let result = simulate(&rows, &config);

        for pair in result.by_channel.windows(2) {
            assert!(pair[0].delta >= pair[1].delta);
        }
        // External channels lose volume, the direct channel gains it.
        assert_eq!(result.by_channel[0].channel, "d2c");
    }

    #[test]
    fn test_compare_missing_side_fills_zero() {
        // Channel exists only in the scenario rows.
        let baseline: Vec<DerivedRow> = Vec::new();
        let scenario = simulate(&sample_rows(), &ScenarioConfig::new());
        let deltas = ChannelDelta::compare(&baseline, &scenario.rows);

        for delta in &deltas {
            assert_eq!(delta.contribution_now, 0.0);
            assert_relative_eq!(delta.delta, delta.contribution_new);
        }
    }

    #[test]
    fn test_matrix_labels_sorted_and_filled() {
        let result = simulate(&sample_rows(), &ScenarioConfig::new());
        let matrix = &result.matrix;

        assert_eq!(matrix.products, vec!["Hoodie A", "Pants B"]);
        assert_eq!(matrix.channels, vec!["coupang", "d2c", "musinsa"]);
        // Hoodie A was never sold on coupang: filled with zero.
        assert_eq!(matrix.get("Hoodie A", "coupang"), Some(0.0));
        assert!(matrix.get("Hoodie A", "musinsa").unwrap() > 0.0);
        assert_eq!(matrix.get("Socks C", "d2c"), None);
    }

    #[test]
    fn test_matrix_sums_duplicate_pairs() {
        let rows = compute_baseline(&[
            TransactionRow::new("2025-09-01", "Hoodie A", "d2c", 59_000.0, 100.0, 0.0, 27_000.0),
            TransactionRow::new("2025-09-02", "Hoodie A", "d2c", 59_000.0, 50.0, 0.0, 27_000.0),
        ]);
        let result = simulate(&rows, &ScenarioConfig::new());

        let expected: f64 = result.rows.iter().map(|r| r.contribution_new).sum();
        assert_relative_eq!(result.matrix.get("Hoodie A", "d2c").unwrap(), expected);
    }

    #[test]
    fn test_matrix_empty_rows() {
        let matrix = ContributionMatrix::from_scenario(&[]);
        assert!(matrix.is_empty());
        assert!(matrix.channels.is_empty());
    }
}
