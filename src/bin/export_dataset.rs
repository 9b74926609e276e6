use std::path::PathBuf;

use anyhow::{Context, Result};
use arrow::util::pretty::pretty_format_batches;

use sales_dashboard::config::DashboardConfig;
use sales_dashboard::data::export;
use sales_dashboard::data::generator;
use sales_dashboard::data::model::Record;

/// Generate the synthetic dataset and write it to disk.
///
/// Usage: `export_dataset [PATH]` (default `sales_data.parquet`); the format
/// follows the extension. `DASHBOARD_SEED` / `DASHBOARD_RECORDS` apply.
fn main() -> Result<()> {
    env_logger::init();

    let output_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("sales_data.parquet"));

    let config = DashboardConfig::from_env();
    let dataset = generator::generate(config.seed, config.record_count);
    let records: Vec<&Record> = dataset.records.iter().collect();

    export::write_file(&output_path, &records)
        .with_context(|| format!("writing {}", output_path.display()))?;

    log::info!("Wrote {} records to {}", records.len(), output_path.display());
    println!(
        "Wrote {} records (seed {}) to {}",
        records.len(),
        config.seed,
        output_path.display()
    );

    // Short preview of the head of the table.
    let preview = export::to_record_batch(&records[..records.len().min(5)])?;
    println!("{}", pretty_format_batches(&[preview])?);
    Ok(())
}
