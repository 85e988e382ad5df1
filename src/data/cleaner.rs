//! Data Cleaner Module
//! Drops taxi fare rows that fail any of the cleaning predicates.

use polars::prelude::*;
use serde::Serialize;
use thiserror::Error;

use super::predicate::{taxi_predicates, Requirement, RowPredicate};

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Missing required column: {0}")]
    MissingColumn(String),
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Rows removed by one applied predicate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PredicateOutcome {
    pub predicate: String,
    pub rows_before: usize,
    pub rows_removed: usize,
}

/// Summary of one cleaning pass.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct CleaningReport {
    pub input_rows: usize,
    pub output_rows: usize,
    pub applied: Vec<PredicateOutcome>,
    /// Optional predicates whose columns were absent.
    pub skipped: Vec<String>,
}

impl CleaningReport {
    pub fn rows_removed(&self) -> usize {
        self.input_rows.saturating_sub(self.output_rows)
    }
}

/// Applies a fixed list of row predicates to a DataFrame.
pub struct DataCleaner {
    predicates: Vec<RowPredicate>,
}

impl Default for DataCleaner {
    fn default() -> Self {
        Self::new(taxi_predicates())
    }
}

impl DataCleaner {
    pub fn new(predicates: Vec<RowPredicate>) -> Self {
        Self { predicates }
    }

    pub fn predicates(&self) -> &[RowPredicate] {
        &self.predicates
    }

    /// Split predicates into (active, skipped) for the columns of `df`.
    ///
    /// Fails before any row is touched when a required column is absent.
    pub fn active_predicates(
        &self,
        df: &DataFrame,
    ) -> Result<(Vec<&RowPredicate>, Vec<&RowPredicate>), CleanerError> {
        let mut active = Vec::new();
        let mut skipped = Vec::new();

        for predicate in &self.predicates {
            match (predicate.missing_column(df), predicate.requirement) {
                (None, _) => active.push(predicate),
                (Some(_), Requirement::Optional) => skipped.push(predicate),
                (Some(column), Requirement::Required) => {
                    return Err(CleanerError::MissingColumn(column.to_string()));
                }
            }
        }

        Ok((active, skipped))
    }

    /// Return the rows of `df` that pass every active predicate.
    pub fn clean(&self, df: &DataFrame) -> Result<DataFrame, CleanerError> {
        self.clean_with_report(df).map(|(cleaned, _)| cleaned)
    }

    /// Like [`DataCleaner::clean`], also counting the rows each predicate removed.
    ///
    /// Predicates run in list order; the input frame is left untouched.
    pub fn clean_with_report(
        &self,
        df: &DataFrame,
    ) -> Result<(DataFrame, CleaningReport), CleanerError> {
        let (active, skipped) = self.active_predicates(df)?;

        let mut report = CleaningReport {
            input_rows: df.height(),
            skipped: skipped.iter().map(|p| p.name.to_string()).collect(),
            ..Default::default()
        };

        let mut current = df.clone();
        for predicate in active {
            let rows_before = current.height();
            let mask = predicate.keep_mask(&current)?;
            current = current.filter(&mask)?;

            let rows_removed = rows_before - current.height();
            log::debug!("{}: removed {} of {} rows", predicate.name, rows_removed, rows_before);

            report.applied.push(PredicateOutcome {
                predicate: predicate.name.to_string(),
                rows_before,
                rows_removed,
            });
        }

        report.output_rows = current.height();
        log::info!(
            "Cleaning kept {} of {} rows",
            report.output_rows,
            report.input_rows
        );

        Ok((current, report))
    }
}

/// Clean a taxi fare DataFrame with the standard rules.
pub fn clean_df(df: &DataFrame) -> Result<DataFrame, CleanerError> {
    DataCleaner::default().clean(df)
}

/// Clean a taxi fare DataFrame and report per-predicate removals.
pub fn clean_with_report(df: &DataFrame) -> Result<(DataFrame, CleaningReport), CleanerError> {
    DataCleaner::default().clean_with_report(df)
}
