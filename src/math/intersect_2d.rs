use super::{Point2, Vector2, TOLERANCE};

/// Parametric 2D line-line intersection.
///
/// Given lines `p1 + t * d1` and `p2 + u * d2`, returns `(t, u)` if not parallel.
/// Lines count as parallel when the sine of the angle between them is within
/// [`TOLERANCE`].
#[must_use]
pub fn line_line_intersect_2d(
    p1: &Point2,
    d1: &Vector2,
    p2: &Point2,
    d2: &Vector2,
) -> Option<(f64, f64)> {
    let cross = d1.perp(d2);
    if cross.abs() <= TOLERANCE * d1.norm() * d2.norm() {
        return None;
    }
    let dx = p2.x - p1.x;
    let dy = p2.y - p1.y;
    let t = (dx * d2.y - dy * d2.x) / cross;
    let u = (dx * d1.y - dy * d1.x) / cross;
    Some((t, u))
}

/// Bounded segment-segment intersection in 2D.
///
/// Returns `(intersection_point, t, u)` where `t` and `u` are in `[0, 1]`.
#[must_use]
pub fn segment_segment_intersect_2d(
    a0: &Point2,
    a1: &Point2,
    b0: &Point2,
    b1: &Point2,
) -> Option<(Point2, f64, f64)> {
    let da = a1 - a0;
    let db = b1 - b0;
    let (t, u) = line_line_intersect_2d(a0, &da, b0, &db)?;

    // Use a small epsilon to include endpoints.
    let eps = TOLERANCE;
    if t >= -eps && t <= 1.0 + eps && u >= -eps && u <= 1.0 + eps {
        let t_clamped = t.clamp(0.0, 1.0);
        Some((a0 + da * t_clamped, t_clamped, u.clamp(0.0, 1.0)))
    } else {
        None
    }
}

/// X coordinate where the supporting line of `a -> b` crosses the sweep line
/// through `event`.
///
/// The sweep line is tilted: it rises by `tilt` per unit of `x`, which keeps
/// horizontal edges crossable and matches the sweep order (equal `y`,
/// smaller `x` first). When the edge runs parallel to the sweep line the
/// edge's leftmost `x` is returned.
#[must_use]
pub fn sweep_line_x(a: &Point2, b: &Point2, event: &Point2, tilt: f64) -> f64 {
    let sweep_dir = Vector2::new(1.0, tilt);
    match line_line_intersect_2d(a, &(b - a), event, &sweep_dir) {
        Some((t, _)) => a.x + (b.x - a.x) * t,
        None => a.x.min(b.x),
    }
}
