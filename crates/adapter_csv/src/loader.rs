//! Strict-header CSV loader for transaction rows.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use cannibal_core::TransactionRow;

use crate::error::LoadError;

/// The required CSV columns, as they must appear in the header row.
///
/// Column order does not matter, but every column must be present under
/// exactly this name; no aliasing is tolerated.
pub const EXPECTED_COLUMNS: [&str; 7] = [
    "date",
    "product",
    "channel",
    "price",
    "volume",
    "fee_rate",
    "unit_cost",
];

/// Load transaction rows from any CSV reader.
///
/// The first record is treated as the header and checked against
/// [`EXPECTED_COLUMNS`]; data rows are then deserialized by column name.
/// Row order is preserved and duplicates are passed through untouched;
/// deduplication is deliberately not an ingestion concern.
pub fn load_rows<R: Read>(reader: R) -> Result<Vec<TransactionRow>, LoadError> {
    let mut rdr = csv::Reader::from_reader(reader);

    let headers = rdr.headers()?.clone();
    for column in EXPECTED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(LoadError::MissingColumn(column));
        }
    }

    let mut rows = Vec::new();
    for record in rdr.deserialize() {
        let row: TransactionRow = record?;
        rows.push(row);
    }
    Ok(rows)
}

/// Load transaction rows from a CSV file on disk.
pub fn load_rows_from_path(path: impl AsRef<Path>) -> Result<Vec<TransactionRow>, LoadError> {
    let file = File::open(path)?;
    load_rows(file)
}

#[cfg(test)]
mod tests {
    use super::*;

    const GOOD_CSV: &str = "\
date,product,channel,price,volume,fee_rate,unit_cost
2025-09-01,Hoodie A,d2c,59000,120,0.00,27000
2025-09-01,Hoodie A,musinsa,62000,180,0.15,27000
";

    #[test]
    fn test_load_rows_happy_path() {
        let rows = load_rows(GOOD_CSV.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].channel, "d2c");
        assert_eq!(rows[1].fee_rate, 0.15);
        assert_eq!(rows[1].volume, 180.0);
    }

    #[test]
    fn test_load_rows_column_order_insensitive() {
        let csv = "\
channel,date,product,unit_cost,fee_rate,volume,price
d2c,2025-09-01,Hoodie A,27000,0.0,120,59000
";
        let rows = load_rows(csv.as_bytes()).unwrap();
        assert_eq!(rows[0].price, 59_000.0);
        assert_eq!(rows[0].unit_cost, 27_000.0);
    }

    #[test]
    fn test_load_rows_missing_column() {
        let csv = "\
date,product,channel,price,volume,fee_rate
2025-09-01,Hoodie A,d2c,59000,120,0.00
";
        let err = load_rows(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("unit_cost")));
    }

    #[test]
    fn test_load_rows_rejects_aliased_header() {
        // "cost" is not an accepted alias for "unit_cost".
        let csv = "\
date,product,channel,price,volume,fee_rate,cost
2025-09-01,Hoodie A,d2c,59000,120,0.00,27000
";
        let err = load_rows(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::MissingColumn("unit_cost")));
    }

    #[test]
    fn test_load_rows_malformed_number() {
        let csv = "\
date,product,channel,price,volume,fee_rate,unit_cost
2025-09-01,Hoodie A,d2c,not-a-price,120,0.00,27000
";
        let err = load_rows(csv.as_bytes()).unwrap_err();
        assert!(matches!(err, LoadError::Csv(_)));
    }

    #[test]
    fn test_load_rows_empty_body() {
        let csv = "date,product,channel,price,volume,fee_rate,unit_cost\n";
        let rows = load_rows(csv.as_bytes()).unwrap();
        assert!(rows.is_empty());
    }
}
