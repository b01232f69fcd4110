/// Squared distance from point `(qx, qy)` to the segment `(x0, y0)-(x1, y1)`.
///
/// The projection onto the segment's line is clamped to the segment, so the
/// result is the distance to the nearest point of the segment itself, not of
/// the infinite line. A zero-length segment degrades to point distance.
pub fn point_segment_dist_sq(qx: f64, qy: f64, x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let len_sq = dx * dx + dy * dy;

    if len_sq == 0.0 {
        let ex = qx - x0;
        let ey = qy - y0;
        return ex * ex + ey * ey;
    }

    let t = (((qx - x0) * dx + (qy - y0) * dy) / len_sq).clamp(0.0, 1.0);
    let ex = qx - (x0 + t * dx);
    let ey = qy - (y0 + t * dy);
    ex * ex + ey * ey
}
