use serde::{Deserialize, Serialize};

/// A single time series: parallel arrays of timestamps and sampled values.
///
/// Times are fractional Unix seconds (`f64`), values are the sampled metric
/// (`f32`). The two arrays are always the same length; `new` enforces this
/// and is the only way to build a series from raw parts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TimeSeries {
    times: Vec<f64>,
    values: Vec<f32>,
}

impl TimeSeries {
    /// Build a series from parallel arrays, rejecting mismatched lengths.
    pub fn new(times: Vec<f64>, values: Vec<f32>) -> Result<Self, String> {
        if times.len() != values.len() {
            return Err(format!(
                "times/values length mismatch: {} times vs {} values",
                times.len(),
                values.len()
            ));
        }
        Ok(Self { times, values })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    pub fn times(&self) -> &[f64] {
        &self.times
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    /// The `(time, value)` pair at `index`, if in range.
    pub fn point(&self, index: usize) -> Option<(f64, f32)> {
        Some((*self.times.get(index)?, *self.values.get(index)?))
    }

    /// First and last timestamp, if the series is non-empty.
    pub fn time_span(&self) -> Option<(f64, f64)> {
        Some((*self.times.first()?, *self.times.last()?))
    }

    pub fn into_parts(self) -> (Vec<f64>, Vec<f32>) {
        (self.times, self.values)
    }
}
