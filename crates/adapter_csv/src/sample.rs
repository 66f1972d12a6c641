//! Bundled demo dataset.

use cannibal_core::TransactionRow;

/// The six-row demo dataset: two products across the direct channel and
/// two external marketplaces on a single date.
///
/// Useful for trying out the CLI without a CSV file; the numbers match the
/// sample data shipped with the original prototype.
pub fn sample_rows() -> Vec<TransactionRow> {
    vec![
        TransactionRow::new("2025-09-01", "Hoodie A", "d2c", 59_000.0, 120.0, 0.00, 27_000.0),
        TransactionRow::new("2025-09-01", "Hoodie A", "musinsa", 62_000.0, 180.0, 0.15, 27_000.0),
        TransactionRow::new("2025-09-01", "Hoodie A", "coupang", 61_000.0, 140.0, 0.20, 27_000.0),
        TransactionRow::new("2025-09-01", "Pants B", "d2c", 69_000.0, 90.0, 0.00, 33_000.0),
        TransactionRow::new("2025-09-01", "Pants B", "musinsa", 72_000.0, 160.0, 0.15, 33_000.0),
        TransactionRow::new("2025-09-01", "Pants B", "coupang", 70_000.0, 110.0, 0.20, 33_000.0),
    ]
}
