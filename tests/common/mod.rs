#![allow(dead_code)]

use std::f64::consts::TAU;

use monotri::math::Point2;

/// Installs a fmt subscriber once per test binary; `RUST_LOG` overrides the
/// WARN default.
pub fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

pub fn ring(coords: &[(f64, f64)]) -> Vec<Point2> {
    coords.iter().map(|&(x, y)| Point2::new(x, y)).collect()
}

pub fn unit_square() -> Vec<Point2> {
    ring(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)])
}

/// Clockwise hexagon with one SPLIT and one MERGE vertex.
pub fn hexagon() -> Vec<Point2> {
    ring(&[
        (5.0, 1.0),
        (8.0, 3.0),
        (5.0, -2.0),
        (2.0, 2.0),
        (-1.0, -1.0),
        (1.0, 5.0),
    ])
}

/// 15-vertex demo polygon with several notches on both sides.
pub fn jagged15() -> Vec<Point2> {
    ring(&[
        (4.5, 3.0),
        (3.5, 2.5),
        (3.0, 4.0),
        (2.5, 3.75),
        (2.0, 4.0),
        (1.0, 3.5),
        (1.5, 2.75),
        (1.0, 1.5),
        (0.5, 2.0),
        (0.0, 1.0),
        (1.0, 0.0),
        (2.0, 0.5),
        (3.0, 0.0),
        (2.5, 1.0),
        (4.0, 0.5),
    ])
}

/// 18-vertex demo polygon, given clockwise.
pub fn towers18() -> Vec<Point2> {
    ring(&[
        (9.0, -1.0),
        (8.0, 6.0),
        (7.0, -3.0),
        (6.0, 3.0),
        (4.0, -4.0),
        (2.0, -4.0),
        (3.0, 4.0),
        (4.0, 2.5),
        (5.0, 12.0),
        (7.0, 12.0),
        (10.0, 6.0),
        (9.5, 11.0),
        (11.0, 15.0),
        (13.0, 15.0),
        (12.0, 10.0),
        (13.0, 3.0),
        (11.0, 4.0),
        (10.0, -1.0),
    ])
}

/// A comb with six teeth pointing up; every gap between teeth is a MERGE
/// vertex.
pub fn comb() -> Vec<Point2> {
    ring(&[
        (0.0, 0.0),
        (12.0, 0.0),
        (11.5, 7.0),
        (11.0, 1.5),
        (9.5, 6.0),
        (9.0, 1.4),
        (7.5, 5.0),
        (7.0, 1.3),
        (5.5, 7.0),
        (5.0, 1.2),
        (3.5, 6.0),
        (3.0, 1.1),
        (1.5, 5.0),
        (0.5, 5.0),
    ])
}

/// The comb mirrored across the x axis, so the gaps become SPLIT vertices.
pub fn comb_down() -> Vec<Point2> {
    comb().into_iter().map(|p| Point2::new(p.x, -p.y)).collect()
}

/// Star-shaped ring with radii cycling through eleven steps.
pub fn star(n: usize) -> Vec<Point2> {
    (0..n)
        .map(|i| {
            let step = ((i * 7) % 11) as f64 / 11.0;
            let r = 4.0 + 3.0 * step;
            let a = TAU * i as f64 / n as f64;
            Point2::new(r * a.cos(), r * a.sin())
        })
        .collect()
}

/// A thick Archimedean spiral band: three turns, 80 vertices.
pub fn spiral() -> Vec<Point2> {
    let k = 40;
    let mut outer = Vec::with_capacity(k);
    let mut inner = Vec::with_capacity(k);
    for i in 0..k {
        let a = 3.0 * TAU * i as f64 / k as f64;
        let r = 1.0 + a;
        outer.push(Point2::new(r * a.cos(), r * a.sin()));
        inner.push(Point2::new((r + 0.6) * a.cos(), (r + 0.6) * a.sin()));
    }
    inner.reverse();
    outer.extend(inner);
    outer
}

/// Axis-aligned U: the notch bottom is a horizontal MERGE edge.
pub fn u_shape() -> Vec<Point2> {
    ring(&[
        (0.0, 0.0),
        (1.0, 0.0),
        (1.0, 2.0),
        (2.0, 2.0),
        (2.0, 0.0),
        (3.0, 0.0),
        (3.0, 3.0),
        (0.0, 3.0),
    ])
}

/// Axis-aligned crown: two flat notches cut down from the top edge.
pub fn crown() -> Vec<Point2> {
    ring(&[
        (0.0, 0.0),
        (8.0, 0.0),
        (8.0, 3.0),
        (6.0, 3.0),
        (6.0, 2.0),
        (5.0, 2.0),
        (5.0, 3.0),
        (3.0, 3.0),
        (3.0, 2.0),
        (2.0, 2.0),
        (2.0, 3.0),
        (0.0, 3.0),
    ])
}

/// Axis-aligned H: one flat notch from above and one from below.
pub fn h_shape() -> Vec<Point2> {
    ring(&[
        (0.0, 0.0),
        (1.0, 0.0),
        (1.0, 1.0),
        (2.0, 1.0),
        (2.0, 0.0),
        (3.0, 0.0),
        (3.0, 3.0),
        (2.0, 3.0),
        (2.0, 2.0),
        (1.0, 2.0),
        (1.0, 3.0),
        (0.0, 3.0),
    ])
}

/// Comb with flat-topped teeth on a common baseline; equal-y events at
/// every tooth.
pub fn flat_comb() -> Vec<Point2> {
    ring(&[
        (0.0, 0.0),
        (7.0, 0.0),
        (7.0, 3.0),
        (6.0, 3.0),
        (6.0, 1.0),
        (5.0, 1.0),
        (5.0, 3.0),
        (4.0, 3.0),
        (4.0, 1.0),
        (3.0, 1.0),
        (3.0, 3.0),
        (2.0, 3.0),
        (2.0, 1.0),
        (1.0, 1.0),
        (1.0, 3.0),
        (0.0, 3.0),
    ])
}

/// The same ring walked the other way round.
pub fn reversed(mut points: Vec<Point2>) -> Vec<Point2> {
    points.reverse();
    points
}

/// `points` scaled about the origin.
pub fn scaled(points: Vec<Point2>, factor: f64) -> Vec<Point2> {
    points.into_iter().map(|p| Point2::new(p.x * factor, p.y * factor)).collect()
}

/// Every test polygon with a label.
pub fn gallery() -> Vec<(&'static str, Vec<Point2>)> {
    vec![
        ("square", unit_square()),
        ("hexagon", hexagon()),
        ("jagged15", jagged15()),
        ("towers18", towers18()),
        ("comb", comb()),
        ("comb_down", comb_down()),
        ("star25", star(25)),
        ("star40", star(40)),
        ("spiral", spiral()),
        ("u_shape", u_shape()),
        ("u_shape_cw", reversed(u_shape())),
        ("crown", crown()),
        ("crown_cw", reversed(crown())),
        ("h_shape", h_shape()),
        ("h_shape_cw", reversed(h_shape())),
        ("flat_comb", flat_comb()),
        ("flat_comb_cw", reversed(flat_comb())),
        ("hexagon_micro", scaled(hexagon(), 1e-6)),
    ]
}

/// Absolute area enclosed by a ring.
pub fn ring_area(points: &[Point2]) -> f64 {
    monotri::math::polygon_2d::signed_area(points).abs()
}
