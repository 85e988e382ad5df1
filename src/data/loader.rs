//! CSV Data Loader Module
//! Reads the taxi fare CSV into a Polars DataFrame.

use polars::prelude::*;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Location of the dataset when no path is given.
pub const DEFAULT_DATA_PATH: &str = "data/data.csv";

/// Cell text read as missing, in addition to empty fields.
pub const NA_VALUES: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("CSV file not found: {}", .0.display())]
    FileNotFound(PathBuf),
    #[error("Failed to parse CSV: {0}")]
    ParseError(#[from] PolarsError),
}

/// Where and how to read the CSV.
#[derive(Debug, Clone, PartialEq)]
pub struct LoaderConfig {
    pub path: PathBuf,
    /// Rows sampled for dtype inference; `None` scans the whole file.
    pub infer_schema_length: Option<usize>,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_DATA_PATH),
            infer_schema_length: None,
        }
    }
}

impl LoaderConfig {
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }
}

/// Handles CSV file loading with Polars.
pub struct DataLoader {
    config: LoaderConfig,
    df: Option<DataFrame>,
}

impl Default for DataLoader {
    fn default() -> Self {
        Self::new(LoaderConfig::default())
    }
}

impl DataLoader {
    pub fn new(config: LoaderConfig) -> Self {
        Self { config, df: None }
    }

    /// Load the configured CSV file.
    pub fn load(&mut self) -> Result<&DataFrame, LoaderError> {
        let df = read_csv(&self.config)?;
        Ok(self.df.insert(df))
    }

    /// Get list of column names from loaded DataFrame.
    pub fn get_columns(&self) -> Vec<String> {
        self.df
            .as_ref()
            .map(|df| {
                df.get_column_names()
                    .iter()
                    .map(|s| s.to_string())
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Get the number of rows in the DataFrame.
    pub fn get_row_count(&self) -> usize {
        self.df.as_ref().map(|df| df.height()).unwrap_or(0)
    }

    /// Get a reference to the loaded DataFrame.
    pub fn get_dataframe(&self) -> Option<&DataFrame> {
        self.df.as_ref()
    }

    pub fn get_file_path(&self) -> &Path {
        &self.config.path
    }
}

/// Read a CSV file into a DataFrame.
///
/// Rows with too many fields abort the load. Short rows are padded with
/// nulls, which the completeness rule later drops.
fn read_csv(config: &LoaderConfig) -> Result<DataFrame, LoaderError> {
    let path = config.path.as_path();
    if !path.is_file() {
        return Err(LoaderError::FileNotFound(path.to_path_buf()));
    }

    let null_values: Vec<PlSmallStr> = NA_VALUES.iter().map(|v| PlSmallStr::from(*v)).collect();

    let df = LazyCsvReader::new(path)
        .with_glob(false)
        .with_has_header(true)
        .with_infer_schema_length(config.infer_schema_length)
        .with_null_values(Some(NullValues::AllColumns(null_values)))
        .with_ignore_errors(false)
        .finish()?
        .collect()?;

    log::info!(
        "Loaded {} rows x {} columns from {}",
        df.height(),
        df.width(),
        path.display()
    );

    Ok(df)
}

/// Load a CSV file with default options.
pub fn load_csv(path: impl Into<PathBuf>) -> Result<DataFrame, LoaderError> {
    read_csv(&LoaderConfig::with_path(path))
}

/// Load `data/data.csv` relative to the working directory.
pub fn get_data() -> Result<DataFrame, LoaderError> {
    load_csv(DEFAULT_DATA_PATH)
}
