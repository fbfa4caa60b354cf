use super::Point2;

/// Euclidean distance between two points.
#[must_use]
pub fn distance(a: &Point2, b: &Point2) -> f64 {
    nalgebra::distance(a, b)
}

/// Returns `true` if the two points coincide within `tolerance`.
#[must_use]
pub fn coincident(a: &Point2, b: &Point2, tolerance: f64) -> bool {
    distance(a, b) < tolerance
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOL: f64 = 1e-10;

    #[test]
    fn distance_pythagorean() {
        let d = distance(&Point2::new(0.0, 0.0), &Point2::new(3.0, 4.0));
        assert!((d - 5.0).abs() < TOL, "d={d}");
    }

    #[test]
    fn coincident_within_tolerance() {
        let a = Point2::new(1.0, 1.0);
        assert!(coincident(&a, &Point2::new(1.0, 1.0 + 1e-12), TOL));
        assert!(!coincident(&a, &Point2::new(1.0, 1.001), TOL));
    }
}
