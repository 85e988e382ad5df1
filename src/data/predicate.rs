//! Row Predicate Module
//! Row-exclusion rules as data, lowered to Polars expressions.

use polars::prelude::*;

/// Bound of a [`Condition::Range`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Bound {
    Inclusive(f64),
    Exclusive(f64),
    Unbounded,
}

/// Whether a predicate must find its columns in the frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Requirement {
    /// Absent columns are an error.
    Required,
    /// Absent columns deactivate the predicate.
    Optional,
}

/// Condition a row must satisfy to be kept.
#[derive(Debug, Clone, PartialEq)]
pub enum Condition {
    /// No null (or NaN) in any column.
    Complete,
    /// The coordinate pair is not exactly (0, 0).
    NonOrigin {
        lat: &'static str,
        lon: &'static str,
    },
    Range {
        column: &'static str,
        lower: Bound,
        upper: Bound,
    },
}

#[derive(Debug, Clone, PartialEq)]
pub struct RowPredicate {
    pub name: &'static str,
    pub requirement: Requirement,
    pub condition: Condition,
}

impl RowPredicate {
    pub fn required(name: &'static str, condition: Condition) -> Self {
        Self {
            name,
            requirement: Requirement::Required,
            condition,
        }
    }

    pub fn optional(name: &'static str, condition: Condition) -> Self {
        Self {
            name,
            requirement: Requirement::Optional,
            condition,
        }
    }

    pub fn range(name: &'static str, column: &'static str, lower: Bound, upper: Bound) -> Self {
        Self::required(
            name,
            Condition::Range {
                column,
                lower,
                upper,
            },
        )
    }

    /// Columns the condition reads by name.
    pub fn columns(&self) -> Vec<&'static str> {
        match &self.condition {
            Condition::Complete => Vec::new(),
            Condition::NonOrigin { lat, lon } => vec![*lat, *lon],
            Condition::Range { column, .. } => vec![*column],
        }
    }

    /// First referenced column absent from `df`, if any.
    pub fn missing_column(&self, df: &DataFrame) -> Option<&'static str> {
        self.columns()
            .into_iter()
            .find(|name| df.column(name).is_err())
    }

    /// Evaluate the predicate over `df`; null entries count as rejected.
    pub fn keep_mask(&self, df: &DataFrame) -> PolarsResult<BooleanChunked> {
        let Some(expr) = self.to_expr() else {
            return complete_mask(df);
        };

        let out = df
            .clone()
            .lazy()
            .with_column(expr.alias(KEEP_COLUMN))
            .collect()?;
        Ok(out.column(KEEP_COLUMN)?.bool()?.clone())
    }

    /// Keep-mask expression over the named columns; `None` for [`Condition::Complete`].
    fn to_expr(&self) -> Option<Expr> {
        match &self.condition {
            Condition::Complete => None,
            Condition::NonOrigin { lat, lon } => Some(
                col(*lat)
                    .neq(lit(0.0))
                    .or(col(*lon).neq(lit(0.0))),
            ),
            Condition::Range {
                column,
                lower,
                upper,
            } => {
                let lower = match *lower {
                    Bound::Inclusive(v) => Some(col(*column).gt_eq(lit(v))),
                    Bound::Exclusive(v) => Some(col(*column).gt(lit(v))),
                    Bound::Unbounded => None,
                };
                let upper = match *upper {
                    Bound::Inclusive(v) => Some(col(*column).lt_eq(lit(v))),
                    Bound::Exclusive(v) => Some(col(*column).lt(lit(v))),
                    Bound::Unbounded => None,
                };
                Some(match (lower, upper) {
                    (Some(l), Some(u)) => l.and(u),
                    (Some(e), None) | (None, Some(e)) => e,
                    (None, None) => lit(true),
                })
            }
        }
    }
}

const KEEP_COLUMN: &str = "__keep_row";

/// Rows with no null in any column and no NaN in any float column.
///
/// Works on the column data directly, so header text like `*` or `^a$` is
/// never read as a column pattern.
fn complete_mask(df: &DataFrame) -> PolarsResult<BooleanChunked> {
    let mut mask = BooleanChunked::full(KEEP_COLUMN.into(), true, df.height());
    for column in df.get_columns() {
        let series = column.as_materialized_series();
        mask = &mask & &series.is_not_null();
        if series.dtype().is_float() {
            mask = &mask & &series.is_not_nan()?;
        }
    }
    Ok(mask)
}

pub const FARE_AMOUNT_RANGE: (f64, f64) = (0.0, 4000.0);
/// Passenger count must stay below this.
pub const MAX_PASSENGER_COUNT: f64 = 8.0;
pub const MIN_PASSENGER_COUNT: f64 = 0.0;
pub const PICKUP_LATITUDE_RANGE: (f64, f64) = (40.0, 42.0);
pub const PICKUP_LONGITUDE_RANGE: (f64, f64) = (-74.3, -72.9);
pub const DROPOFF_LATITUDE_RANGE: (f64, f64) = (40.0, 42.0);
pub const DROPOFF_LONGITUDE_RANGE: (f64, f64) = (-74.0, -72.9);

/// The taxi fare cleaning rules, in application order.
pub fn taxi_predicates() -> Vec<RowPredicate> {
    let between = |name: &'static str, column: &'static str, (lo, hi): (f64, f64)| {
        RowPredicate::range(name, column, Bound::Inclusive(lo), Bound::Inclusive(hi))
    };

    vec![
        RowPredicate::required("completeness", Condition::Complete),
        RowPredicate::required(
            "dropoff_non_origin",
            Condition::NonOrigin {
                lat: "dropoff_latitude",
                lon: "dropoff_longitude",
            },
        ),
        RowPredicate::required(
            "pickup_non_origin",
            Condition::NonOrigin {
                lat: "pickup_latitude",
                lon: "pickup_longitude",
            },
        ),
        RowPredicate::optional(
            "fare_sanity",
            Condition::Range {
                column: "fare_amount",
                lower: Bound::Inclusive(FARE_AMOUNT_RANGE.0),
                upper: Bound::Inclusive(FARE_AMOUNT_RANGE.1),
            },
        ),
        RowPredicate::range(
            "passenger_upper_bound",
            "passenger_count",
            Bound::Unbounded,
            Bound::Exclusive(MAX_PASSENGER_COUNT),
        ),
        RowPredicate::range(
            "passenger_lower_bound",
            "passenger_count",
            Bound::Inclusive(MIN_PASSENGER_COUNT),
            Bound::Unbounded,
        ),
        between("pickup_latitude_range", "pickup_latitude", PICKUP_LATITUDE_RANGE),
        between("pickup_longitude_range", "pickup_longitude", PICKUP_LONGITUDE_RANGE),
        between("dropoff_latitude_range", "dropoff_latitude", DROPOFF_LATITUDE_RANGE),
        between("dropoff_longitude_range", "dropoff_longitude", DROPOFF_LONGITUDE_RANGE),
    ]
}
