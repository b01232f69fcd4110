use curvetrim::{simplify, TimeSeries, Viewport};

fn identity_x(t: f64) -> f64 {
    t
}

fn identity_y(v: f32) -> f64 {
    v as f64
}

/// A noisy sine wave: dense enough to exercise both stages.
fn noisy_wave(n: usize) -> (Vec<f64>, Vec<f32>) {
    let times: Vec<f64> = (0..n).map(|i| i as f64 * 0.01).collect();
    let values: Vec<f32> = times
        .iter()
        .map(|&t| {
            let noise = ((t * 997.0).sin() * 0.05) as f32;
            (t * 2.0).sin() as f32 * 50.0 + noise
        })
        .collect();
    (times, values)
}

/// Squared distance from a point to a segment, clamped to the segment.
fn dist_sq_to_segment(qx: f64, qy: f64, x0: f64, y0: f64, x1: f64, y1: f64) -> f64 {
    let dx = x1 - x0;
    let dy = y1 - y0;
    let len_sq = dx * dx + dy * dy;
    let t = if len_sq == 0.0 {
        0.0
    } else {
        (((qx - x0) * dx + (qy - y0) * dy) / len_sq).clamp(0.0, 1.0)
    };
    let ex = qx - (x0 + t * dx);
    let ey = qy - (y0 + t * dy);
    ex * ex + ey * ey
}

/// Maximum screen-space deviation of any original point from the simplified
/// polyline, for strictly increasing times and identity scales.
fn max_deviation(times: &[f64], values: &[f32], simplified: &TimeSeries) -> f64 {
    let st = simplified.times();
    let sv = simplified.values();
    let mut worst = 0.0_f64;
    for (&t, &v) in times.iter().zip(values.iter()) {
        // Bracketing simplified segment by time.
        let j = st.partition_point(|&s| s <= t).clamp(1, st.len() - 1);
        let d = dist_sq_to_segment(
            t,
            v as f64,
            st[j - 1],
            sv[j - 1] as f64,
            st[j],
            sv[j] as f64,
        );
        worst = worst.max(d);
    }
    worst.sqrt()
}

#[test]
fn endpoints_are_preserved_exactly() {
    let (times, values) = noisy_wave(10_000);
    let out = simplify(&times, &values, 2.0, identity_x, identity_y).unwrap();
    assert_eq!(out.times().first(), times.first());
    assert_eq!(out.times().last(), times.last());
    assert_eq!(out.values().first(), values.first());
    assert_eq!(out.values().last(), values.last());
}

#[test]
fn reduction_is_monotone() {
    let (times, values) = noisy_wave(10_000);
    let out = simplify(&times, &values, 2.0, identity_x, identity_y).unwrap();
    assert!(out.len() <= times.len());
    assert!(out.len() < times.len() / 10, "noisy wave should reduce heavily");
}

#[test]
fn zero_epsilon_keeps_distinguishable_points() {
    let (times, values) = noisy_wave(500);
    let out = simplify(&times, &values, 0.0, identity_x, identity_y).unwrap();
    assert_eq!(out.len(), times.len());
}

#[test]
fn order_is_preserved_without_duplication() {
    let (times, values) = noisy_wave(5_000);
    let out = simplify(&times, &values, 1.0, identity_x, identity_y).unwrap();
    for w in out.times().windows(2) {
        assert!(w[0] < w[1], "output times must stay strictly increasing");
    }
}

#[test]
fn resimplification_is_idempotent() {
    let (times, values) = noisy_wave(10_000);
    let once = simplify(&times, &values, 2.0, identity_x, identity_y).unwrap();
    let twice = simplify(once.times(), once.values(), 2.0, identity_x, identity_y).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn refinement_deviation_is_bounded_by_epsilon() {
    // Point spacing above the tolerance makes the pre-filter a pass-through,
    // so every drop is the refinement's and carries its exact error bound.
    let times: Vec<f64> = (0..2_000).map(|i| i as f64).collect();
    let values: Vec<f32> = times.iter().map(|&t| (t * 0.02).sin() as f32 * 40.0).collect();
    let epsilon = 0.5;
    let out = simplify(&times, &values, epsilon, identity_x, identity_y).unwrap();
    assert!(out.len() < times.len());
    let worst = max_deviation(&times, &values, &out);
    assert!(
        worst <= epsilon + 1e-9,
        "max deviation {worst} exceeds epsilon {epsilon}"
    );
}

#[test]
fn composed_deviation_is_bounded() {
    // The pre-filter can fold a point up to epsilon away from a kept anchor
    // that the refinement then displaces by up to epsilon again, so the
    // composed pipeline is bounded by twice the tolerance.
    let (times, values) = noisy_wave(10_000);
    let epsilon = 2.0;
    let out = simplify(&times, &values, epsilon, identity_x, identity_y).unwrap();
    let worst = max_deviation(&times, &values, &out);
    assert!(
        worst <= 2.0 * epsilon + 1e-9,
        "max deviation {worst} exceeds composed bound {}",
        2.0 * epsilon
    );
}

#[test]
fn viewport_scales_feed_the_engine() {
    // The CLI path: data extent mapped onto a pixel box, y inverted.
    let (times, values) = noisy_wave(10_000);
    let vp = Viewport::new(800.0, 400.0);
    let xs = vp.x_scale(times[0], *times.last().unwrap());
    let ys = vp.y_scale(-51.0, 51.0);
    let out = simplify(&times, &values, 1.0, |t| xs.apply(t), |v| {
        ys.apply(v as f64)
    })
    .unwrap();
    assert!(out.len() < times.len());
    assert_eq!(out.times().first(), times.first());
    assert_eq!(out.times().last(), times.last());
}

#[test]
fn degenerate_inputs() {
    let out = simplify(&[], &[], 1.0, identity_x, identity_y).unwrap();
    assert!(out.is_empty());

    let out = simplify(&[5.0], &[9.0], 1.0, identity_x, identity_y).unwrap();
    assert_eq!(out.times(), &[5.0]);
    assert_eq!(out.values(), &[9.0]);

    let out = simplify(&[1.0, 1.0], &[4.0, 4.0], 1_000.0, identity_x, identity_y).unwrap();
    assert_eq!(out.len(), 2, "identical endpoints are both kept");
}

#[test]
fn flat_line_scenario() {
    let times = [0.0, 1.0, 2.0, 3.0, 4.0];
    let values = [0.0_f32; 5];
    let out = simplify(&times, &values, 0.5, identity_x, identity_y).unwrap();
    assert_eq!(out.times(), &[0.0, 4.0]);
    assert_eq!(out.values(), &[0.0, 0.0]);
}

#[test]
fn ramp_scenario() {
    let times = [0.0, 1.0, 2.0, 3.0, 4.0];
    let values = [0.0_f32, 1.0, 2.0, 3.0, 4.0];
    for epsilon in [0.1, 1.0, 10.0] {
        let out = simplify(&times, &values, epsilon, identity_x, identity_y).unwrap();
        assert_eq!(out.times(), &[0.0, 4.0]);
        assert_eq!(out.values(), &[0.0, 4.0]);
    }
}

#[test]
fn spike_scenario() {
    let times = [0.0, 1.0, 2.0, 3.0, 4.0];
    let values = [0.0_f32, 0.0, 10.0, 0.0, 0.0];
    let out = simplify(&times, &values, 1.0, identity_x, identity_y).unwrap();
    assert!(out.times().contains(&2.0), "spike must survive");
    assert_eq!(out.times().first(), Some(&0.0));
    assert_eq!(out.times().last(), Some(&4.0));
}
