//! Taxi Fare Clean - CSV loading & row cleaning for taxi fare data
//!
//! Loads a taxi fare CSV into a Polars DataFrame and drops rows outside the
//! New York bounding box, with implausible passenger counts or fares, or with
//! missing values.

pub mod data;

pub use data::{clean_df, clean_with_report, get_data, load_csv};
