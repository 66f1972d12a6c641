//! # Cannibal Core (K1: Kernel)
//!
//! Transaction data model and baseline financial metrics for
//! channel-cannibalization analysis.
//!
//! This crate provides:
//! - Per-observation sales records (`TransactionRow`)
//! - Derived per-row financial metrics (`DerivedRow`)
//! - Baseline aggregation over a full row set (`BaselineSummary`)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            cannibal_core (K1)           │
//! ├─────────────────────────────────────────┤
//! │  types/     - TransactionRow,           │
//! │               DerivedRow, channel keys  │
//! │  baseline/  - compute_baseline,         │
//! │               BaselineSummary           │
//! └─────────────────────────────────────────┘
//!          ↑
//! ┌─────────────────────────────────────────┐
//! │          cannibal_scenario (K2)         │
//! │  What-if volume shifts and comparisons  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Design posture
//!
//! The kernel never raises errors: out-of-range numeric inputs propagate
//! arithmetically, duplicate keys double-count, and ratio denominators of
//! zero yield `0.0`. Input validation belongs to the adapter layer.
//!
//! ## Example
//!
//! ```
//! use cannibal_core::{compute_baseline, BaselineSummary, TransactionRow};
//!
//! let rows = vec![
//!     TransactionRow::new("2025-09-01", "Hoodie A", "d2c", 59_000.0, 120.0, 0.0, 27_000.0),
//!     TransactionRow::new("2025-09-01", "Hoodie A", "musinsa", 62_000.0, 180.0, 0.15, 27_000.0),
//! ];
//!
//! let baseline = compute_baseline(&rows);
//! assert_eq!(baseline[0].revenue, 59_000.0 * 120.0);
//!
//! let summary = BaselineSummary::summarize(&baseline);
//! assert!(summary.direct_share > 0.0 && summary.direct_share < 1.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod baseline;
pub mod types;

// Re-export commonly used types
pub use baseline::{compute_baseline, BaselineSummary};
pub use types::{channel_key, DerivedRow, TransactionRow, DIRECT_CHANNEL};
