use std::io::Write;

use crate::data::timestamp::format_timestamp;
use crate::series::TimeSeries;

/// Write a series as two-column CSV. When `as_datetime` is set, timestamps
/// are rendered as RFC 3339 strings instead of raw numbers.
pub fn write_csv<W: Write>(out: W, series: &TimeSeries, as_datetime: bool) -> Result<(), String> {
    let mut writer = csv::WriterBuilder::new().from_writer(out);
    writer
        .write_record(["time", "value"])
        .map_err(|e| format!("cannot write CSV header: {e}"))?;

    for i in 0..series.len() {
        let (t, v) = series.point(i).ok_or("series index out of range")?;
        let t_str = if as_datetime {
            format_timestamp(t)
        } else {
            format!("{t}")
        };
        writer
            .write_record([t_str, format!("{v}")])
            .map_err(|e| format!("cannot write CSV row: {e}"))?;
    }
    writer.flush().map_err(|e| format!("cannot flush CSV: {e}"))
}

/// Write a series as pretty-printed JSON (`{"times": [...], "values": [...]}`).
pub fn write_json<W: Write>(mut out: W, series: &TimeSeries) -> Result<(), String> {
    let json = serde_json::to_string_pretty(series)
        .map_err(|e| format!("cannot serialize series: {e}"))?;
    writeln!(out, "{json}").map_err(|e| format!("cannot write JSON: {e}"))
}
