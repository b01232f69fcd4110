use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use crate::data::timestamp::TimeFormat;
use crate::series::TimeSeries;

/// Selects a CSV column by header name or zero-based index.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColumnSelector {
    Index(usize),
    Name(String),
}

impl FromStr for ColumnSelector {
    type Err = String;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.parse::<usize>() {
            Ok(i) => Ok(ColumnSelector::Index(i)),
            Err(_) => Ok(ColumnSelector::Name(raw.to_string())),
        }
    }
}

impl ColumnSelector {
    fn resolve(&self, headers: &csv::StringRecord) -> Result<usize, String> {
        match self {
            ColumnSelector::Index(i) => {
                if *i < headers.len() {
                    Ok(*i)
                } else {
                    Err(format!(
                        "column index {i} out of range ({} columns)",
                        headers.len()
                    ))
                }
            }
            ColumnSelector::Name(name) => headers
                .iter()
                .position(|h| h.trim() == name.as_str())
                .ok_or_else(|| format!("no column named {name:?}")),
        }
    }
}

/// A series read from CSV, with how its time column was interpreted and how
/// many rows failed to parse.
#[derive(Debug)]
pub struct LoadedSeries {
    pub series: TimeSeries,
    pub time_format: TimeFormat,
    pub skipped_rows: usize,
}

/// Read a two-column time series out of CSV data.
///
/// The time column may hold numbers (fractional Unix seconds) or datetimes;
/// the format is detected from a sample of the column. Rows whose time or
/// value fails to parse, or whose value is non-finite, are skipped and
/// counted.
pub fn read_series<R: Read>(
    input: R,
    time_col: &ColumnSelector,
    value_col: &ColumnSelector,
) -> Result<LoadedSeries, String> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);

    let headers = reader
        .headers()
        .map_err(|e| format!("cannot read CSV header: {e}"))?
        .clone();
    let t_idx = time_col.resolve(&headers)?;
    let v_idx = value_col.resolve(&headers)?;

    let mut raw_times: Vec<String> = Vec::new();
    let mut raw_values: Vec<String> = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| format!("CSV parse error: {e}"))?;
        raw_times.push(record.get(t_idx).unwrap_or("").to_string());
        raw_values.push(record.get(v_idx).unwrap_or("").to_string());
    }

    if raw_times.is_empty() {
        return Ok(LoadedSeries {
            series: TimeSeries::empty(),
            time_format: TimeFormat::Numeric,
            skipped_rows: 0,
        });
    }

    let time_format = TimeFormat::detect(&raw_times)
        .ok_or_else(|| "time column is neither numeric nor a recognizable datetime".to_string())?;

    let mut times = Vec::with_capacity(raw_times.len());
    let mut values = Vec::with_capacity(raw_values.len());
    let mut skipped = 0usize;
    for (t_raw, v_raw) in raw_times.iter().zip(raw_values.iter()) {
        let t = time_format.parse(t_raw);
        let v = v_raw.trim().parse::<f32>().ok();
        match (t, v) {
            (Some(t), Some(v)) if t.is_finite() && v.is_finite() => {
                times.push(t);
                values.push(v);
            }
            _ => skipped += 1,
        }
    }

    if skipped > 0 {
        tracing::warn!(skipped, "skipped rows that failed to parse");
    }

    Ok(LoadedSeries {
        series: TimeSeries::new(times, values)?,
        time_format,
        skipped_rows: skipped,
    })
}

/// [`read_series`] over a file path.
pub fn read_series_file(
    path: &Path,
    time_col: &ColumnSelector,
    value_col: &ColumnSelector,
) -> Result<LoadedSeries, String> {
    let file = std::fs::File::open(path).map_err(|e| format!("cannot open {path:?}: {e}"))?;
    read_series(file, time_col, value_col)
}
