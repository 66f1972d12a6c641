//! # Cannibal Scenario (K2: Kernel)
//!
//! Channel-cannibalization "what-if" engine: reduce volume on external
//! channels, shift a fraction of the removed demand to the direct channel,
//! and compare the counterfactual against the baseline.
//!
//! This crate provides:
//! - `ScenarioConfig`: per-channel reduction rates, shift ratio, fee policy
//! - `simulate`: baseline rows + config → adjusted rows and delta scalars
//! - Comparison views: by-channel delta table, product×channel matrix
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │               Scenario Engine                │
//! ├──────────────────────────────────────────────┤
//! │  ScenarioConfig     - Reductions & policies  │
//! │  simulate           - Shift & recompute      │
//! │  ChannelDelta       - By-channel comparison  │
//! │  ContributionMatrix - Product×channel grid   │
//! └──────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use cannibal_core::{compute_baseline, TransactionRow};
//! use cannibal_scenario::{simulate, ScenarioConfig};
//!
//! let rows = vec![
//!     TransactionRow::new("2025-09-01", "Hoodie A", "d2c", 59_000.0, 120.0, 0.0, 27_000.0),
//!     TransactionRow::new("2025-09-01", "Hoodie A", "musinsa", 62_000.0, 180.0, 0.15, 27_000.0),
//! ];
//! let baseline = compute_baseline(&rows);
//!
//! let config = ScenarioConfig::new()
//!     .with_reduction("musinsa", 0.5)
//!     .with_shift_ratio(0.5)
//!     .with_direct_fee_zero(true);
//!
//! let result = simulate(&baseline, &config);
//! assert_eq!(result.rows[1].volume_new, 90.0);
//! assert_eq!(result.rows[0].volume_new, 165.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod comparison;
pub mod config;
pub mod engine;

// Re-export commonly used types
pub use comparison::{ChannelDelta, ContributionMatrix};
pub use config::{non_direct_channels, ScenarioConfig};
pub use engine::{simulate, ScenarioResult, ScenarioRow};
