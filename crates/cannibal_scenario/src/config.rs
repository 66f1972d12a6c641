//! Scenario configuration.
//!
//! Provides:
//! - `ScenarioConfig`: per-channel reduction rates, the global shift ratio
//!   and the direct-channel policy flags
//! - `non_direct_channels`: the channel set a configuration UI would offer
//!   reduction controls for

use std::collections::HashMap;

use cannibal_core::{channel_key, DerivedRow, DIRECT_CHANNEL};

/// Configuration for a single what-if scenario run.
///
/// Reduction rates are keyed by lowercased channel name and apply only to
/// non-direct channels; a rate keyed on the direct channel is stored but
/// ignored during simulation. Channels absent from the map default to a
/// reduction of `0.0`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScenarioConfig {
    /// Reduction fraction per non-direct channel, keyed lowercased
    reduction_rates: HashMap<String, f64>,
    /// Fraction of reduced external demand recaptured by the direct channel
    shift_ratio: f64,
    /// Force `fee_rate = 0` on direct-channel rows in the scenario
    apply_direct_fee_zero: bool,
    /// Reserved for future direct-channel price rules; currently a no-op
    apply_direct_price_policy: bool,
}

impl ScenarioConfig {
    /// Create an empty configuration: no reductions, zero shift ratio,
    /// both policy flags off. Simulating with it reproduces the baseline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the reduction rate for a channel.
    ///
    /// The channel name is lowercased before insertion, so callers may pass
    /// any casing. Expected range is `[0, 1]`; out-of-range values are not
    /// rejected (the engine floors resulting volumes at zero).
    pub fn with_reduction(mut self, channel: impl Into<String>, rate: f64) -> Self {
        self.reduction_rates.insert(channel_key(&channel.into()), rate);
        self
    }

    /// Set reduction rates for several channels at once.
    pub fn with_reductions<I, S>(mut self, rates: I) -> Self
    where
        I: IntoIterator<Item = (S, f64)>,
        S: Into<String>,
    {
        for (channel, rate) in rates {
            self.reduction_rates
                .insert(channel_key(&channel.into()), rate);
        }
        self
    }

    /// Set the global external-to-direct shift ratio.
    pub fn with_shift_ratio(mut self, shift_ratio: f64) -> Self {
        self.shift_ratio = shift_ratio;
        self
    }

    /// Enable or disable the zero-fee policy for direct-channel rows.
    pub fn with_direct_fee_zero(mut self, enabled: bool) -> Self {
        self.apply_direct_fee_zero = enabled;
        self
    }

    /// Enable or disable the direct price policy flag.
    ///
    /// The flag is carried through untouched; no price adjustment rule is
    /// implemented yet, so simulation output does not depend on it.
    pub fn with_direct_price_policy(mut self, enabled: bool) -> Self {
        self.apply_direct_price_policy = enabled;
        self
    }

    /// Reduction rate for a channel, looked up by its lowercased key.
    ///
    /// Returns `0.0` for the direct channel (regardless of the map content)
    /// and for channels with no configured rate.
    pub fn reduction_for(&self, channel: &str) -> f64 {
        let key = channel_key(channel);
        if key == DIRECT_CHANNEL {
            return 0.0;
        }
        self.reduction_rates.get(&key).copied().unwrap_or(0.0)
    }

    /// The configured reduction map, keyed by lowercased channel.
    pub fn reduction_rates(&self) -> &HashMap<String, f64> {
        &self.reduction_rates
    }

    /// The global shift ratio.
    pub fn shift_ratio(&self) -> f64 {
        self.shift_ratio
    }

    /// Whether direct-channel rows get `fee_rate = 0` in the scenario.
    pub fn apply_direct_fee_zero(&self) -> bool {
        self.apply_direct_fee_zero
    }

    /// Whether the (currently no-op) direct price policy flag is set.
    pub fn apply_direct_price_policy(&self) -> bool {
        self.apply_direct_price_policy
    }
}

/// Distinct non-direct channel keys observed in a row set, in first-seen
/// order.
///
/// This is the set a configuration surface offers reduction controls for;
/// the direct channel is excluded because it is never reduced.
pub fn non_direct_channels(rows: &[DerivedRow]) -> Vec<String> {
    let mut seen = Vec::new();
    for row in rows {
        let key = row.channel_key();
        if key != DIRECT_CHANNEL && !seen.contains(&key) {
            seen.push(key);
        }
    }
    seen
}
