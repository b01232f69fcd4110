/// Greedy screen-distance pre-filter over projected points.
///
/// Walks left to right keeping a point whenever its squared distance from
/// the last kept point exceeds `eps_sq`; first and last points are always
/// kept. This is a cheap pre-reduction, not a shape-preserving pass on its
/// own: it shrinks dense runs before the Douglas-Peucker refinement does the
/// error-bounded work.
pub fn distance_prefilter(px: &[f64], py: &[f64], eps_sq: f64) -> Vec<bool> {
    let n = px.len();
    let mut keep = vec![false; n];
    if n == 0 {
        return keep;
    }
    keep[0] = true;
    keep[n - 1] = true;

    let mut last_x = px[0];
    let mut last_y = py[0];
    for i in 1..n.saturating_sub(1) {
        let dx = px[i] - last_x;
        let dy = py[i] - last_y;
        let d_sq = dx * dx + dy * dy;
        // Non-finite projections never compare as close; keep them.
        if d_sq > eps_sq || !d_sq.is_finite() {
            keep[i] = true;
            last_x = px[i];
            last_y = py[i];
        }
    }
    keep
}
