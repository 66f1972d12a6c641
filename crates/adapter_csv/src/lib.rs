//! # Adapter CSV (A: Adapter Layer)
//!
//! CSV ingestion for transaction rows.
//!
//! This crate is the input gate in front of the computation kernel: the
//! kernel itself never errors, so malformed files, missing columns and
//! unparseable numbers are rejected here with typed errors before any
//! row reaches it.
//!
//! The expected header is exactly the seven columns
//! `date, product, channel, price, volume, fee_rate, unit_cost`
//! (any column order, no aliasing).
//!
//! A bundled [`sample::sample_rows`] dataset mirrors the demo data of the
//! original prototype for quick experimentation.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod error;
pub mod loader;
pub mod sample;

// Re-export commonly used items
pub use error::LoadError;
pub use loader::{load_rows, load_rows_from_path, EXPECTED_COLUMNS};
pub use sample::sample_rows;
