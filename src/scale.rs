use serde::{Deserialize, Serialize};

/// Linear mapping from a data domain onto a screen range, the concrete form
/// of the scale functions a charting library hands to the simplifier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    pub domain: (f64, f64),
    pub range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    /// Map a domain value to a range coordinate. A collapsed domain maps
    /// everything to the middle of the range.
    pub fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d1 == d0 {
            return (r0 + r1) / 2.0;
        }
        r0 + (v - d0) / (d1 - d0) * (r1 - r0)
    }
}

/// A pixel viewport. Produces the x and y scales for a data extent, with the
/// y axis inverted to match screen coordinates (origin at the top).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn x_scale(&self, t_min: f64, t_max: f64) -> LinearScale {
        LinearScale::new((t_min, t_max), (0.0, self.width))
    }

    pub fn y_scale(&self, v_min: f64, v_max: f64) -> LinearScale {
        LinearScale::new((v_min, v_max), (self.height, 0.0))
    }
}
