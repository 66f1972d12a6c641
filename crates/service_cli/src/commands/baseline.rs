//! Baseline command implementation
//!
//! Computes baseline metrics and KPIs using the cannibal_core crate.

use cannibal_core::{compute_baseline, BaselineSummary};
use tracing::info;

use crate::render::{money, percent};
use crate::{CliError, Result};

/// Run the baseline command
pub fn run(input: Option<&str>, sample: bool, format: &str) -> Result<()> {
    info!("Computing baseline...");

    let rows = super::load_input(input, sample)?;
    let baseline = compute_baseline(&rows);
    let summary = BaselineSummary::summarize(&baseline);
    info!("  Rows: {}", baseline.len());

    match format {
        "table" => {
            println!();
            println!("Baseline KPIs");
            println!("  D2C share           {}", percent(summary.direct_share));
            println!("  Total contribution  {}", money(summary.total_contribution));
            println!("  Total revenue       {}", money(summary.total_revenue));
            println!();
            println!(
                "{:<12} {:<14} {:<10} {:>10} {:>14} {:>14} {:>14}",
                "date", "product", "channel", "volume", "revenue", "fee_cost", "contribution"
            );
            for row in &baseline {
                println!(
                    "{:<12} {:<14} {:<10} {:>10} {:>14} {:>14} {:>14}",
                    row.date,
                    row.product,
                    row.channel,
                    row.volume,
                    money(row.revenue),
                    money(row.fee_cost),
                    money(row.contribution)
                );
            }
        }
        "json" => {
            let payload = serde_json::json!({ "summary": summary, "rows": baseline });
            println!("{}", serde_json::to_string_pretty(&payload)?);
        }
        "csv" => {
            let mut wtr = csv::Writer::from_writer(std::io::stdout());
            for row in &baseline {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
        other => {
            return Err(CliError::InvalidArgument(format!(
                "Unknown format: {}. Supported: table, json, csv",
                other
            )));
        }
    }

    info!("Baseline complete");
    Ok(())
}
