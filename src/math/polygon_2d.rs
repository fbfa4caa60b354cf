use std::cmp::Ordering;

use super::{Point2, TOLERANCE};

/// Direction of the walk `a -> b -> c` at `b`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    /// Counter-clockwise bend.
    Left,
    /// Clockwise bend.
    Right,
    /// The three points lie on one line (within tolerance).
    Collinear,
}

/// Cross product of `(b - a)` and `(c - b)`.
#[must_use]
pub fn cross(a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let ab = b - a;
    let bc = c - b;
    ab.x * bc.y - ab.y * bc.x
}

/// Classifies the walk `a -> b -> c` as a left turn, a right turn or a
/// straight line.
#[must_use]
pub fn turn(a: &Point2, b: &Point2, c: &Point2) -> Turn {
    turn_with_tolerance(a, b, c, TOLERANCE)
}

/// Like [`turn`], with an explicit width for the collinear band.
///
/// The band is relative to the two legs: the walk is collinear when the sine
/// of its bend angle is within `tolerance`, so the answer does not depend on
/// the coordinate scale.
#[must_use]
pub fn turn_with_tolerance(a: &Point2, b: &Point2, c: &Point2, tolerance: f64) -> Turn {
    let z = cross(a, b, c);
    let band = tolerance * (b - a).norm() * (c - b).norm();
    if z > band {
        Turn::Left
    } else if z < -band {
        Turn::Right
    } else {
        Turn::Collinear
    }
}

/// Total order of sweep events.
///
/// The sweep runs from the top of the plane downwards: a point comes first
/// when it has the larger `y`, or the same `y` and the smaller `x`.
/// Returns `None` for coincident points (or NaN coordinates).
#[must_use]
pub fn sweep_cmp(a: &Point2, b: &Point2) -> Option<Ordering> {
    match b.y.partial_cmp(&a.y)? {
        Ordering::Equal => match a.x.partial_cmp(&b.x)? {
            Ordering::Equal => None,
            o => Some(o),
        },
        o => Some(o),
    }
}

/// Returns `true` if `a` is visited strictly before `b` by the sweep.
#[must_use]
pub fn sweeps_before(a: &Point2, b: &Point2) -> bool {
    sweep_cmp(a, b) == Some(Ordering::Less)
}

/// Computes the signed area of a closed polygon (shoelace formula).
///
/// Positive for counter-clockwise, negative for clockwise.
#[must_use]
pub fn signed_area(points: &[Point2]) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += points[i].x * points[j].y - points[j].x * points[i].y;
    }
    sum * 0.5
}

/// Length of the diagonal of the axis-aligned bounding box of `points`.
#[must_use]
pub fn extent(points: &[Point2]) -> f64 {
    let Some(first) = points.first() else {
        return 0.0;
    };
    let (mut lo, mut hi) = (*first, *first);
    for pt in points {
        lo = lo.inf(pt);
        hi = hi.sup(pt);
    }
    (hi - lo).norm()
}

/// Returns `true` if the ring encloses no area relative to its size.
#[must_use]
pub fn is_degenerate(points: &[Point2], tolerance: f64) -> bool {
    signed_area(points).abs() <= tolerance * extent(points).powi(2)
}

/// Index of the leftmost point (smallest `x`, ties broken by smallest `y`).
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn leftmost_index(points: &[Point2]) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (i, pt) in points.iter().enumerate() {
        match best {
            None => best = Some(i),
            Some(b) => {
                let b = &points[b];
                if pt.x < b.x - TOLERANCE || ((pt.x - b.x).abs() < TOLERANCE && pt.y < b.y) {
                    best = Some(i);
                }
            }
        }
    }
    best
}

/// Winding of a closed ring, read from the turn at its leftmost vertex.
///
/// The leftmost vertex is always convex, so its turn gives the orientation
/// of the whole ring. A collinear reading falls back to the signed area.
#[must_use]
pub fn ring_turn(points: &[Point2]) -> Turn {
    ring_turn_with_tolerance(points, TOLERANCE)
}

/// Like [`ring_turn`], with an explicit tolerance for the turn and area tests.
#[must_use]
pub fn ring_turn_with_tolerance(points: &[Point2], tolerance: f64) -> Turn {
    let Some(i) = leftmost_index(points) else {
        return Turn::Collinear;
    };
    let n = points.len();
    if n < 3 {
        return Turn::Collinear;
    }
    let prev = &points[(i + n - 1) % n];
    let next = &points[(i + 1) % n];
    match turn_with_tolerance(prev, &points[i], next, tolerance) {
        Turn::Collinear => {
            let area = signed_area(points);
            let band = tolerance * extent(points).powi(2);
            if area > band {
                Turn::Left
            } else if area < -band {
                Turn::Right
            } else {
                Turn::Collinear
            }
        }
        t => t,
    }
}
