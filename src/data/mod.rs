//! Data module - CSV loading and row cleaning

mod cleaner;
mod loader;
mod predicate;

pub use cleaner::{
    clean_df, clean_with_report, CleanerError, CleaningReport, DataCleaner, PredicateOutcome,
};
pub use loader::{
    get_data, load_csv, DataLoader, LoaderConfig, LoaderError, DEFAULT_DATA_PATH, NA_VALUES,
};
pub use predicate::{
    taxi_predicates, Bound, Condition, Requirement, RowPredicate, DROPOFF_LATITUDE_RANGE,
    DROPOFF_LONGITUDE_RANGE, FARE_AMOUNT_RANGE, MAX_PASSENGER_COUNT, MIN_PASSENGER_COUNT,
    PICKUP_LATITUDE_RANGE, PICKUP_LONGITUDE_RANGE,
};
