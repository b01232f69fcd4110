mod geometry;
mod prefilter;
mod rdp;

use crate::series::TimeSeries;

/// Reduce a time series to the minimum set of points that preserves its
/// shape when drawn at a given screen resolution.
///
/// `x_scale` and `y_scale` map times and values to screen coordinates; all
/// simplification decisions happen in that projected space, but the output
/// is drawn from the original `(time, value)` pairs, in original order, with
/// the first and last point always included. `epsilon` is the maximum
/// allowed perpendicular deviation in screen units; negative values are
/// clamped to zero.
///
/// Two passes run back to back: a greedy O(n) distance pre-filter collapses
/// visually indistinguishable runs, then Douglas-Peucker refinement on the
/// survivors enforces the true error bound. At `epsilon == 0` only the
/// pre-filter runs (collapsing exactly coincident projections), so every
/// screen-distinguishable point survives.
///
/// Points whose projection is non-finite are always retained. Mismatched
/// input lengths are an error, never a truncation.
pub fn simplify<Fx, Fy>(
    times: &[f64],
    values: &[f32],
    epsilon: f64,
    x_scale: Fx,
    y_scale: Fy,
) -> Result<TimeSeries, String>
where
    Fx: Fn(f64) -> f64,
    Fy: Fn(f32) -> f64,
{
    if times.len() != values.len() {
        return Err(format!(
            "times/values length mismatch: {} times vs {} values",
            times.len(),
            values.len()
        ));
    }

    let n = times.len();
    if n <= 2 {
        return TimeSeries::new(times.to_vec(), values.to_vec());
    }

    let epsilon = epsilon.max(0.0);
    let eps_sq = epsilon * epsilon;

    // Project once; both stages work on the screen coordinates.
    let px: Vec<f64> = times.iter().map(|&t| x_scale(t)).collect();
    let py: Vec<f64> = values.iter().map(|&v| y_scale(v)).collect();

    // Greedy distance pre-filter collapses visually indistinguishable runs.
    let mask_a = prefilter::distance_prefilter(&px, &py, eps_sq);
    let survivors: Vec<usize> = mask_a
        .iter()
        .enumerate()
        .filter(|(_, &k)| k)
        .map(|(i, _)| i)
        .collect();

    // Douglas-Peucker refinement on the survivors enforces the error bound.
    // Its keep mask is indexed against the reduced set, so map back through
    // `survivors`.
    let final_indices: Vec<usize> = if epsilon > 0.0 {
        let rx: Vec<f64> = survivors.iter().map(|&i| px[i]).collect();
        let ry: Vec<f64> = survivors.iter().map(|&i| py[i]).collect();
        let mask_b = rdp::refine(&rx, &ry, eps_sq);
        survivors
            .iter()
            .zip(mask_b.iter())
            .filter(|(_, &k)| k)
            .map(|(&i, _)| i)
            .collect()
    } else {
        survivors
    };

    let mut out_times = Vec::with_capacity(final_indices.len());
    let mut out_values = Vec::with_capacity(final_indices.len());
    for &i in &final_indices {
        out_times.push(times[i]);
        out_values.push(values[i]);
    }

    tracing::debug!(
        input_points = n,
        output_points = out_times.len(),
        epsilon,
        "simplified series"
    );
    TimeSeries::new(out_times, out_values)
}

/// Convenience wrapper over [`simplify`] for an existing [`TimeSeries`].
pub fn simplify_series<Fx, Fy>(
    series: &TimeSeries,
    epsilon: f64,
    x_scale: Fx,
    y_scale: Fy,
) -> Result<TimeSeries, String>
where
    Fx: Fn(f64) -> f64,
    Fy: Fn(f32) -> f64,
{
    simplify(series.times(), series.values(), epsilon, x_scale, y_scale)
}
