//! Taxi Fare Clean - load a taxi fare CSV, clean it, print the report.

use anyhow::{Context, Result};
use std::path::PathBuf;
use taxi_fare_clean::data::{DataCleaner, DataLoader, LoaderConfig, DEFAULT_DATA_PATH};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args_os()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

    let mut loader = DataLoader::new(LoaderConfig::with_path(&path));
    loader
        .load()
        .with_context(|| format!("loading {}", path.display()))?;

    log::info!(
        "{}: {} rows, columns [{}]",
        loader.get_file_path().display(),
        loader.get_row_count(),
        loader.get_columns().join(", ")
    );
    let df = loader.get_dataframe().context("no data loaded")?;

    let (cleaned, report) = DataCleaner::default()
        .clean_with_report(df)
        .context("cleaning taxi fare data")?;

    log::info!(
        "Removed {} rows, {} remain",
        report.rows_removed(),
        cleaned.height()
    );
    println!("{}", serde_json::to_string_pretty(&report)?);

    Ok(())
}
