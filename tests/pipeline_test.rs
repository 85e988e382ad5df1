use anyhow::Result;
use std::io::Write;
use taxi_fare_clean::data::{clean_df, load_csv, CleanerError, LoaderError};
use tempfile::NamedTempFile;

fn create_temp_csv(content: &str) -> NamedTempFile {
    let mut temp_file = NamedTempFile::new().unwrap();
    write!(temp_file, "{}", content).unwrap();
    temp_file
}

const HEADER: &str = "key,fare_amount,pickup_datetime,pickup_longitude,pickup_latitude,dropoff_longitude,dropoff_latitude,passenger_count\n";

/// Load a small taxi CSV and clean it end to end
#[test]
fn test_load_then_clean() -> Result<()> {
    let rows = [
        "k1,4.5,2009-06-15 17:26:21 UTC,-73.844311,40.721319,-73.84161,40.712278,1",
        "k2,16.9,2010-01-05 16:52:16 UTC,0,0,-73.979268,40.782004,1",
        "k3,5.7,2011-08-18 00:35:00 UTC,-73.982738,40.76127,-73.991242,40.750562,9",
        "k4,7.7,2012-04-21 04:30:42 UTC,-73.98713,40.733143,,40.758092,1",
        "k5,5000,2010-03-09 07:51:00 UTC,-73.968095,40.768008,-73.956655,40.783762,1",
        "k6,5.3,2011-01-06 09:50:45 UTC,-74.000964,40.73163,-73.972892,40.758233,0",
    ];
    let file = create_temp_csv(&format!("{HEADER}{}\n", rows.join("\n")));

    let df = load_csv(file.path())?;
    assert_eq!(df.height(), 6);

    let cleaned = clean_df(&df)?;
    assert_eq!(cleaned.height(), 2);
    assert_eq!(cleaned.get_column_names(), df.get_column_names());

    let keys: Vec<Option<&str>> = cleaned.column("key")?.str()?.into_iter().collect();
    assert_eq!(keys, vec![Some("k1"), Some("k6")]);

    Ok(())
}

/// Without fare_amount the fare predicate is skipped, not an error
#[test]
fn test_clean_without_fare_column() -> Result<()> {
    let file = create_temp_csv(
        "pickup_longitude,pickup_latitude,dropoff_longitude,dropoff_latitude,passenger_count\n\
         -73.844311,40.721319,-73.84161,40.712278,1\n\
         -73.844311,40.721319,0,0,1\n",
    );

    let cleaned = clean_df(&load_csv(file.path())?)?;
    assert_eq!(cleaned.height(), 1);

    Ok(())
}

#[test]
fn test_clean_missing_coordinates_column() -> Result<()> {
    let file = create_temp_csv("fare_amount,passenger_count\n4.5,1\n");

    let df = load_csv(file.path())?;
    let result = clean_df(&df);
    assert!(matches!(result, Err(CleanerError::MissingColumn(_))));

    Ok(())
}

#[test]
fn test_missing_file_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let result = load_csv(dir.path().join("data.csv"));
    assert!(matches!(result, Err(LoaderError::FileNotFound(_))));
}

/// NA-style tokens load as nulls, so only their rows are dropped
#[test]
fn test_na_row_dropped_by_clean() -> Result<()> {
    let file = create_temp_csv(
        "pickup_longitude,pickup_latitude,dropoff_longitude,dropoff_latitude,passenger_count\n\
         -73.844311,40.721319,-73.84161,40.712278,1\n\
         -73.844311,40.721319,-73.84161,40.712278,NA\n\
         -73.982738,40.76127,-73.991242,40.750562,2\n",
    );

    let df = load_csv(file.path())?;
    assert_eq!(df.height(), 3);

    let cleaned = clean_df(&df)?;
    let passengers: Vec<Option<i64>> = cleaned.column("passenger_count")?.i64()?.into_iter().collect();
    assert_eq!(passengers, vec![Some(1), Some(2)]);

    Ok(())
}

/// A short row loads padded with nulls and is then removed
#[test]
fn test_short_row_dropped_by_clean() -> Result<()> {
    let file = create_temp_csv(
        "pickup_longitude,pickup_latitude,dropoff_longitude,dropoff_latitude,passenger_count\n\
         -73.844311,40.721319,-73.84161,40.712278,1\n\
         -73.844311,40.721319\n",
    );

    let df = load_csv(file.path())?;
    assert_eq!(df.height(), 2);
    assert_eq!(clean_df(&df)?.height(), 1);

    Ok(())
}
