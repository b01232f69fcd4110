/// Summary statistics over a value array, ignoring non-finite entries.
#[derive(Debug, Clone)]
pub struct SeriesStats {
    pub count: usize,
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub std_dev: f64,
}

impl SeriesStats {
    /// Compute statistics from values, filtering out NaN and infinities.
    /// Returns `None` when no finite values remain.
    pub fn compute(values: &[f32]) -> Option<Self> {
        let vals: Vec<f64> = values
            .iter()
            .map(|&v| v as f64)
            .filter(|v| v.is_finite())
            .collect();
        if vals.is_empty() {
            return None;
        }

        let count = vals.len();
        let min = vals.iter().copied().fold(f64::INFINITY, f64::min);
        let max = vals.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let mean = vals.iter().sum::<f64>() / count as f64;
        let variance = vals.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count as f64;

        Some(SeriesStats {
            count,
            min,
            max,
            mean,
            std_dev: variance.sqrt(),
        })
    }

    /// Format as a multi-line report string.
    pub fn report(&self, label: &str) -> String {
        format!(
            "{}:\n  Count: {}\n  Min: {:.3}\n  Max: {:.3}\n  Mean: {:.3}\n  Std Dev: {:.3}\n",
            label, self.count, self.min, self.max, self.mean, self.std_dev
        )
    }
}

/// Outcome of one simplification pass.
#[derive(Debug, Clone, Copy)]
pub struct ReductionStats {
    pub input_points: usize,
    pub output_points: usize,
}

impl ReductionStats {
    pub fn new(input_points: usize, output_points: usize) -> Self {
        Self {
            input_points,
            output_points,
        }
    }

    /// Fraction of points removed, 0 for an empty input.
    pub fn ratio(&self) -> f64 {
        if self.input_points == 0 {
            return 0.0;
        }
        1.0 - self.output_points as f64 / self.input_points as f64
    }

    pub fn report(&self) -> String {
        format!(
            "{} -> {} points ({:.1}% removed)",
            self.input_points,
            self.output_points,
            self.ratio() * 100.0
        )
    }
}
