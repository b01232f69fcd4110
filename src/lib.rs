//! Screen-space simplification of dense time series for display.
//!
//! The engine takes a series of `(time, value)` samples, a pixel tolerance,
//! and two coordinate-mapping functions (time to x, value to y), and returns
//! a reduced series whose rendered polyline stays within the tolerance of
//! the original. See [`simplify::simplify`] for the entry point.

pub mod data;
pub mod scale;
pub mod series;
pub mod simplify;
pub mod stats;

pub use scale::{LinearScale, Viewport};
pub use series::TimeSeries;
pub use simplify::simplify;
