use crate::simplify::geometry::point_segment_dist_sq;

/// Ramer-Douglas-Peucker refinement over projected points.
///
/// Splits each span at the interior point farthest from the span's chord
/// whenever that squared distance exceeds `eps_sq`, and discards the rest of
/// the span's interior. Spans are processed from an explicit work stack, so
/// adversarial inputs (a perfect staircase, say) cannot exhaust the call
/// stack. First and last points are always kept.
pub fn refine(px: &[f64], py: &[f64], eps_sq: f64) -> Vec<bool> {
    let n = px.len();
    let mut keep = vec![false; n];
    if n == 0 {
        return keep;
    }
    keep[0] = true;
    keep[n - 1] = true;
    if n <= 2 {
        return keep;
    }

    let mut spans: Vec<(usize, usize)> = vec![(0, n - 1)];
    while let Some((i0, i1)) = spans.pop() {
        if i1 <= i0 + 1 {
            continue;
        }

        let mut max_d = 0.0_f64;
        let mut max_i = i0;
        for i in (i0 + 1)..i1 {
            let mut d = point_segment_dist_sq(px[i], py[i], px[i0], py[i0], px[i1], py[i1]);
            // A non-finite distance counts as infinitely far, so the point
            // is retained rather than silently dropped.
            if !d.is_finite() {
                d = f64::INFINITY;
            }
            if d > max_d {
                max_d = d;
                max_i = i;
            }
        }

        if max_d > eps_sq {
            keep[max_i] = true;
            spans.push((i0, max_i));
            spans.push((max_i, i1));
        }
    }
    keep
}
