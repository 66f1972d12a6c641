//! Transaction records and derived per-row metrics.
//!
//! This module provides:
//! - `TransactionRow`: one product × channel × date sales observation
//! - `DerivedRow`: a transaction row plus computed financial metrics
//! - `channel_key` / `DIRECT_CHANNEL`: case-insensitive channel identity

use serde::{Deserialize, Serialize};

/// The distinguished direct-to-consumer channel identifier.
///
/// Channel names are matched against this value case-insensitively; any row
/// whose lowercased channel equals `"d2c"` is a direct-channel row.
pub const DIRECT_CHANNEL: &str = "d2c";

/// Normalise a channel name to its canonical lookup key.
///
/// Channel identity is case-insensitive throughout the system: reduction
/// maps are keyed by this lowercased form, and direct-channel detection
/// compares against [`DIRECT_CHANNEL`].
///
/// # Examples
/// ```
/// use cannibal_core::channel_key;
///
/// assert_eq!(channel_key("Musinsa"), "musinsa");
/// assert_eq!(channel_key("D2C"), "d2c");
/// ```
pub fn channel_key(channel: &str) -> String {
    channel.to_lowercase()
}

/// One sales observation: a product sold on a channel on a date.
///
/// Dates are opaque grouping labels; no calendar arithmetic is performed.
/// Each (date, product, channel) combination is expected to be unique in a
/// row set. Duplicates are not merged and will double-count in aggregates.
///
/// Numeric fields are not validated: `price`, `volume` and `unit_cost` are
/// expected non-negative and `fee_rate` in `[0, 1]`, but out-of-range values
/// propagate into derived metrics silently.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TransactionRow {
    /// Calendar date label (grouping key only)
    pub date: String,
    /// Product identifier
    pub product: String,
    /// Channel identifier (case-insensitive)
    pub channel: String,
    /// Unit sale price
    pub price: f64,
    /// Units sold
    pub volume: f64,
    /// Fraction of revenue taken as channel fee
    pub fee_rate: f64,
    /// Cost to produce or acquire one unit
    pub unit_cost: f64,
}

impl TransactionRow {
    /// Create a new transaction row.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        date: impl Into<String>,
        product: impl Into<String>,
        channel: impl Into<String>,
        price: f64,
        volume: f64,
        fee_rate: f64,
        unit_cost: f64,
    ) -> Self {
        Self {
            date: date.into(),
            product: product.into(),
            channel: channel.into(),
            price,
            volume,
            fee_rate,
            unit_cost,
        }
    }

    /// Canonical lowercased channel key for this row.
    pub fn channel_key(&self) -> String {
        channel_key(&self.channel)
    }

    /// Check whether this row belongs to the direct channel.
    pub fn is_direct(&self) -> bool {
        self.channel_key() == DIRECT_CHANNEL
    }
}

/// A transaction row with computed baseline financial metrics.
///
/// Produced by [`crate::compute_baseline`]; the input fields are carried
/// through unchanged and the four metric fields are derived from them:
///
/// - `revenue = price * volume`
/// - `fee_cost = revenue * fee_rate`
/// - `unit_margin = price - unit_cost` (may be negative)
/// - `contribution = volume * unit_margin - fee_cost`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DerivedRow {
    /// Calendar date label (grouping key only)
    pub date: String,
    /// Product identifier
    pub product: String,
    /// Channel identifier (case-insensitive)
    pub channel: String,
    /// Unit sale price
    pub price: f64,
    /// Units sold
    pub volume: f64,
    /// Fraction of revenue taken as channel fee
    pub fee_rate: f64,
    /// Cost to produce or acquire one unit
    pub unit_cost: f64,
    /// Gross revenue: `price * volume`
    pub revenue: f64,
    /// Channel fee cost: `revenue * fee_rate`
    pub fee_cost: f64,
    /// Per-unit margin: `price - unit_cost`
    pub unit_margin: f64,
    /// Contribution margin: `volume * unit_margin - fee_cost`
    pub contribution: f64,
}

impl DerivedRow {
    /// Derive the baseline metrics for a single transaction row.
    ///
    /// The input row is copied, never mutated.
    pub fn from_transaction(tx: &TransactionRow) -> Self {
        let revenue = tx.price * tx.volume;
        let fee_cost = revenue * tx.fee_rate;
        let unit_margin = tx.price - tx.unit_cost;
        let contribution = tx.volume * unit_margin - fee_cost;
        Self {
            date: tx.date.clone(),
            product: tx.product.clone(),
            channel: tx.channel.clone(),
            price: tx.price,
            volume: tx.volume,
            fee_rate: tx.fee_rate,
            unit_cost: tx.unit_cost,
            revenue,
            fee_cost,
            unit_margin,
            contribution,
        }
    }

    /// Canonical lowercased channel key for this row.
    pub fn channel_key(&self) -> String {
        channel_key(&self.channel)
    }

    /// Check whether this row belongs to the direct channel.
    pub fn is_direct(&self) -> bool {
        self.channel_key() == DIRECT_CHANNEL
    }
}
