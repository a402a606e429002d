//! Date-indexed tables built from FinBrain payloads.
//!
//! Two payload layouts are reshaped into a [`DataTable`]:
//!
//! - a list of records, each carrying a `date` field plus other scalars
//!   (house trades, analyst ratings, put/call data, ...);
//! - a single series, an object mapping date strings to one value each
//!   (sentiment scores).
//!
//! The first column of every table is the `date` index with dtype `Date`,
//! followed by one column per value field.

use crate::{FinBrainError, Result};
use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime};
use polars::prelude::*;
use serde_json::{Map, Value};

/// Name of the index column.
pub const INDEX_COLUMN: &str = "date";

/// Days from 0001-01-01 (CE) to 1970-01-01, the epoch of polars `Date`.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

/// How a resource payload maps onto a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableShape {
    /// `payload[key]` is an array of records with a `date` field.
    Records {
        /// Payload key holding the records.
        key: &'static str,
    },
    /// `payload[key]` is an object of date → value.
    Series {
        /// Payload key holding the series.
        key: &'static str,
        /// Name of the value column.
        column: &'static str,
    },
}

impl TableShape {
    /// Reshape a full response payload.
    ///
    /// A payload without the key yields an empty table.
    ///
    /// # Errors
    ///
    /// Returns [`FinBrainError::DataShape`] if the payload is not an object or
    /// the key holds the wrong JSON type.
    pub fn apply(&self, payload: &Value) -> Result<DataTable> {
        let object = payload.as_object().ok_or_else(|| {
            FinBrainError::DataShape(format!("expected a JSON object, got {}", kind(payload)))
        })?;

        match *self {
            Self::Records { key } => match object.get(key) {
                None | Some(Value::Null) => DataTable::from_records(&[]),
                Some(Value::Array(records)) => DataTable::from_records(records),
                Some(other) => Err(FinBrainError::DataShape(format!(
                    "'{key}' should be an array of records, got {}",
                    kind(other)
                ))),
            },
            Self::Series { key, column } => match object.get(key) {
                None | Some(Value::Null) => DataTable::from_series(&Map::new(), column),
                Some(Value::Object(series)) => DataTable::from_series(series, column),
                Some(other) => Err(FinBrainError::DataShape(format!(
                    "'{key}' should be an object of date to value, got {}",
                    kind(other)
                ))),
            },
        }
    }
}

/// A table whose rows are indexed by date.
///
/// `DataTable` wraps a Polars DataFrame. The index lives in the first column,
/// [`INDEX_COLUMN`], so the frame can be used directly with Polars.
#[derive(Debug, Clone)]
pub struct DataTable {
    data: DataFrame,
}

impl DataTable {
    /// Build a table from a list of records.
    ///
    /// Columns are the union of the record keys other than `date`, in the
    /// order they are first seen. Records missing a key get a null.
    ///
    /// # Errors
    ///
    /// Returns [`FinBrainError::DataShape`] if a record is not an object or has
    /// no parseable `date`.
    pub fn from_records(records: &[Value]) -> Result<Self> {
        let mut dates = Vec::with_capacity(records.len());
        let mut names: Vec<&str> = Vec::new();
        let mut rows = Vec::with_capacity(records.len());

        for (i, record) in records.iter().enumerate() {
            let fields = record.as_object().ok_or_else(|| {
                FinBrainError::DataShape(format!("record {i} is {}, not an object", kind(record)))
            })?;
            let date = fields
                .get(INDEX_COLUMN)
                .ok_or_else(|| FinBrainError::DataShape(format!("record {i} has no 'date' field")))?;
            dates.push(parse_date_value(date)?);

            for name in fields.keys() {
                if name != INDEX_COLUMN && !names.contains(&name.as_str()) {
                    names.push(name);
                }
            }
            rows.push(fields);
        }

        let mut columns = Vec::with_capacity(names.len() + 1);
        columns.push(date_column(&dates)?);
        for name in names {
            let values: Vec<&Value> = rows
                .iter()
                .map(|fields| fields.get(name).unwrap_or(&Value::Null))
                .collect();
            columns.push(infer_column(name, &values).into());
        }

        Ok(Self::new(DataFrame::new(columns)?))
    }

    /// Build a single-column table from a date → value object.
    ///
    /// Values are coerced to `f64`; numeric strings such as `"-0.045"` are
    /// parsed. Rows are sorted by date.
    ///
    /// # Errors
    ///
    /// Returns [`FinBrainError::DataShape`] if a key is not a date or a value is
    /// not numeric.
    pub fn from_series(series: &Map<String, Value>, column: &str) -> Result<Self> {
        let mut rows = series
            .iter()
            .map(|(key, value)| -> Result<(NaiveDate, Option<f64>)> {
                Ok((parse_date(key)?, coerce_f64(key, value)?))
            })
            .collect::<Result<Vec<_>>>()?;
        rows.sort_by_key(|(date, _)| *date);
        let (dates, values): (Vec<NaiveDate>, Vec<Option<f64>>) = rows.into_iter().unzip();

        let columns = vec![
            date_column(&dates)?,
            Series::new(column.into(), values).into(),
        ];
        Ok(Self::new(DataFrame::new(columns)?))
    }

    /// Wrap a DataFrame whose first column is the date index.
    pub const fn new(data: DataFrame) -> Self {
        Self { data }
    }

    /// Returns a reference to the underlying DataFrame.
    pub const fn data(&self) -> &DataFrame {
        &self.data
    }

    /// Consumes self and returns the underlying DataFrame.
    pub fn into_inner(self) -> DataFrame {
        self.data
    }

    /// Name of the index column.
    pub const fn index_name(&self) -> &'static str {
        INDEX_COLUMN
    }

    /// Returns the number of rows.
    pub fn len(&self) -> usize {
        self.data.height()
    }

    /// Returns whether the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.data.height() == 0
    }

    /// Value column names, excluding the index.
    pub fn columns(&self) -> Vec<String> {
        self.data
            .get_column_names()
            .iter()
            .filter(|s| s.as_str() != INDEX_COLUMN)
            .map(|s| s.to_string())
            .collect()
    }

    /// Checks if a value column exists.
    pub fn has_column(&self, name: &str) -> bool {
        name != INDEX_COLUMN && self.columns().iter().any(|c| c == name)
    }

    /// Gets a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.data.column(name).ok()
    }

    /// The row index as calendar dates.
    ///
    /// # Errors
    ///
    /// Returns an error if the index column is missing or not of dtype `Date`.
    pub fn index(&self) -> Result<Vec<NaiveDate>> {
        let column = self.data.column(INDEX_COLUMN)?;
        let dates = column.as_materialized_series().date()?;
        dates
            .into_iter()
            .map(|d: Option<i32>| {
                d.and_then(|days| NaiveDate::from_num_days_from_ce_opt(days + UNIX_EPOCH_DAYS_FROM_CE))
                    .ok_or_else(|| FinBrainError::DataShape("null or out-of-range index date".into()))
            })
            .collect()
    }
}

impl From<DataTable> for DataFrame {
    fn from(table: DataTable) -> Self {
        table.into_inner()
    }
}

impl AsRef<DataFrame> for DataTable {
    fn as_ref(&self) -> &DataFrame {
        &self.data
    }
}

fn date_column(dates: &[NaiveDate]) -> Result<Column> {
    let days: Vec<i32> = dates
        .iter()
        .map(|d| d.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE)
        .collect();
    let series = Series::new(INDEX_COLUMN.into(), days).cast(&DataType::Date)?;
    Ok(series.into())
}

fn parse_date_value(value: &Value) -> Result<NaiveDate> {
    match value {
        Value::String(s) => parse_date(s),
        other => Err(FinBrainError::DataShape(format!(
            "date must be a string, got {}",
            kind(other)
        ))),
    }
}

/// Parse `YYYY-MM-DD`, RFC 3339 or a naive ISO timestamp into a date.
fn parse_date(s: &str) -> Result<NaiveDate> {
    let s = s.trim();
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .or_else(|| DateTime::parse_from_rfc3339(s).ok().map(|dt| dt.date_naive()))
        .or_else(|| {
            ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
                .iter()
                .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                .map(|dt| dt.date())
        })
        .ok_or_else(|| FinBrainError::DataShape(format!("invalid date '{s}'")))
}

fn coerce_f64(key: &str, value: &Value) -> Result<Option<f64>> {
    match value {
        Value::Null => Ok(None),
        Value::Number(n) => Ok(n.as_f64()),
        Value::String(s) => s.trim().parse::<f64>().map(Some).map_err(|_| {
            FinBrainError::DataShape(format!("value '{s}' for {key} is not numeric"))
        }),
        other => Err(FinBrainError::DataShape(format!(
            "value for {key} should be numeric, got {}",
            kind(other)
        ))),
    }
}

/// Pick the narrowest column type that holds every non-null value.
fn infer_column(name: &str, values: &[&Value]) -> Series {
    let present = || values.iter().filter(|v| !v.is_null());

    if present().all(|v| v.is_i64()) {
        let data: Vec<Option<i64>> = values.iter().map(|v| v.as_i64()).collect();
        Series::new(name.into(), data)
    } else if present().all(|v| v.is_number()) {
        let data: Vec<Option<f64>> = values.iter().map(|v| v.as_f64()).collect();
        Series::new(name.into(), data)
    } else if present().all(|v| v.is_boolean()) {
        let data: Vec<Option<bool>> = values.iter().map(|v| v.as_bool()).collect();
        Series::new(name.into(), data)
    } else {
        let data: Vec<Option<String>> = values
            .iter()
            .map(|v| match v {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                other => Some(other.to_string()),
            })
            .collect();
        Series::new(name.into(), data)
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use serde_json::json;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn f64_at(table: &DataTable, name: &str, i: usize) -> Option<f64> {
        table
            .column(name)
            .unwrap()
            .as_materialized_series()
            .f64()
            .unwrap()
            .get(i)
    }

    #[test]
    fn test_records_rows_match_records() {
        let records = json!([
            {"date": "2024-02-02", "ratio": 0.81, "callCount": 1200, "putCount": 972},
            {"date": "2024-02-01", "ratio": 0.75, "callCount": 1100, "putCount": 825},
            {"date": "2024-01-31", "ratio": 0.9, "callCount": 1000, "putCount": 900},
        ]);
        let table = DataTable::from_records(records.as_array().unwrap()).unwrap();

        assert_eq!(table.len(), 3);
        assert_eq!(table.columns(), vec!["ratio", "callCount", "putCount"]);
        assert_eq!(
            table.index().unwrap(),
            vec![date(2024, 2, 2), date(2024, 2, 1), date(2024, 1, 31)]
        );
        assert_eq!(table.column("date").unwrap().dtype(), &DataType::Date);
        assert_eq!(table.column("callCount").unwrap().dtype(), &DataType::Int64);
        assert_eq!(table.column("ratio").unwrap().dtype(), &DataType::Float64);
        assert_relative_eq!(f64_at(&table, "ratio", 1).unwrap(), 0.75);
    }

    #[test]
    fn test_records_empty_array() {
        let table = DataTable::from_records(&[]).unwrap();
        assert!(table.is_empty());
        assert_eq!(table.index_name(), "date");
        assert!(table.columns().is_empty());
        assert_eq!(table.column("date").unwrap().dtype(), &DataType::Date);
    }

    #[test]
    fn test_records_mixed_and_missing_fields() {
        let records = json!([
            {"date": "2024-01-02", "representative": "Jane Doe", "amount": "$1,001 - $15,000"},
            {"date": "2024-01-03", "representative": "John Roe", "type": "Sale", "playStoreInstallCount": null},
        ]);
        let table = DataTable::from_records(records.as_array().unwrap()).unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(
            table.columns(),
            vec!["representative", "amount", "type", "playStoreInstallCount"]
        );
        let kind = table.column("type").unwrap().as_materialized_series();
        assert_eq!(kind.dtype(), &DataType::String);
        assert_eq!(kind.str().unwrap().get(0), None);
        assert_eq!(kind.str().unwrap().get(1), Some("Sale"));
        assert_eq!(table.column("playStoreInstallCount").unwrap().null_count(), 2);
    }

    #[test]
    fn test_records_missing_date_is_shape_error() {
        let records = json!([{"ratio": 0.5}]);
        let err = DataTable::from_records(records.as_array().unwrap()).unwrap_err();
        assert!(matches!(err, FinBrainError::DataShape(_)));
    }

    #[test]
    fn test_records_non_object_is_shape_error() {
        let records = json!(["2024-01-01"]);
        let err = DataTable::from_records(records.as_array().unwrap()).unwrap_err();
        assert!(matches!(err, FinBrainError::DataShape(_)));
    }

    #[test]
    fn test_records_accept_timestamps() {
        let records = json!([
            {"date": "2024-03-04T15:30:00Z", "rating": "Buy"},
            {"date": "2024-03-05 09:00:00", "rating": "Hold"},
            {"date": "2024-01-02T00:00:00", "rating": "Buy"},
            {"date": "2024-01-02T10:11:12.123456", "rating": "Sell"},
            {"date": "2024-01-03 08:30:00.5", "rating": "Hold"},
        ]);
        let table = DataTable::from_records(records.as_array().unwrap()).unwrap();
        assert_eq!(
            table.index().unwrap(),
            vec![
                date(2024, 3, 4),
                date(2024, 3, 5),
                date(2024, 1, 2),
                date(2024, 1, 2),
                date(2024, 1, 3)
            ]
        );
    }

    #[test]
    fn test_series_sorted_by_date() {
        let series = json!({"2024-01-02": 0.5, "2023-12-29": "0.1", "2024-01-01": null});
        let table = DataTable::from_series(series.as_object().unwrap(), "sentiment").unwrap();

        assert_eq!(
            table.index().unwrap(),
            vec![date(2023, 12, 29), date(2024, 1, 1), date(2024, 1, 2)]
        );
        let scores = table.column("sentiment").unwrap().as_materialized_series();
        let scores = scores.f64().unwrap();
        assert_eq!(scores.get(1), None);
        assert_relative_eq!(scores.get(2).unwrap(), 0.5);
    }

    #[test]
    fn test_series_single_column() {
        let series = json!({"2024-01-01": "-0.045", "2024-01-02": "0.123"});
        let table = DataTable::from_series(series.as_object().unwrap(), "sentiment").unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.columns(), vec!["sentiment"]);
        assert_eq!(table.column("sentiment").unwrap().dtype(), &DataType::Float64);

        let index = table.index().unwrap();
        assert_eq!(index.len(), 2);
        assert!(index.contains(&date(2024, 1, 1)));
        assert!(index.contains(&date(2024, 1, 2)));

        let pos = index.iter().position(|d| *d == date(2024, 1, 1)).unwrap();
        assert_relative_eq!(f64_at(&table, "sentiment", pos).unwrap(), -0.045);
        let pos = index.iter().position(|d| *d == date(2024, 1, 2)).unwrap();
        assert_relative_eq!(f64_at(&table, "sentiment", pos).unwrap(), 0.123);
    }

    #[test]
    fn test_series_non_numeric_is_shape_error() {
        let series = json!({"2024-01-01": "bullish"});
        let err = DataTable::from_series(series.as_object().unwrap(), "sentiment").unwrap_err();
        assert!(matches!(err, FinBrainError::DataShape(_)));
    }

    #[test]
    fn test_series_bad_date_is_shape_error() {
        let series = json!({"yesterday": "0.1"});
        let err = DataTable::from_series(series.as_object().unwrap(), "sentiment").unwrap_err();
        assert!(matches!(err, FinBrainError::DataShape(_)));
    }

    #[test]
    fn test_shape_apply_records() {
        let shape = TableShape::Records { key: "houseTrades" };
        let payload = json!({
            "ticker": "AMZN",
            "houseTrades": [{"date": "2024-01-02", "amount": "$1,001 - $15,000"}],
        });
        let table = shape.apply(&payload).unwrap();
        assert_eq!(table.len(), 1);

        let missing = shape.apply(&json!({"ticker": "AMZN"})).unwrap();
        assert!(missing.is_empty());

        let err = shape.apply(&json!({"houseTrades": {}})).unwrap_err();
        assert!(matches!(err, FinBrainError::DataShape(_)));

        let err = shape.apply(&json!([])).unwrap_err();
        assert!(matches!(err, FinBrainError::DataShape(_)));
    }

    #[test]
    fn test_shape_apply_series() {
        let shape = TableShape::Series {
            key: "sentimentAnalysis",
            column: "sentiment",
        };
        let payload = json!({
            "ticker": "AMZN",
            "name": "Amazon.com Inc.",
            "sentimentAnalysis": {"2024-01-02": "0.123", "2024-01-01": "-0.045"},
        });
        let table = shape.apply(&payload).unwrap();
        assert_eq!(table.len(), 2);
        assert!(table.has_column("sentiment"));
        assert!(!table.has_column("date"));
    }

    #[test]
    fn test_into_dataframe() {
        let series = json!({"2024-01-01": 1.5});
        let table = DataTable::from_series(series.as_object().unwrap(), "value").unwrap();
        let df: DataFrame = table.into();
        assert_eq!(df.height(), 1);
        assert_eq!(df.width(), 2);
    }
}
