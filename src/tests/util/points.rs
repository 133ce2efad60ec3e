use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::Point;

pub fn square() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(1.0, 0.0),
        Point::new(1.0, 1.0),
        Point::new(0.0, 1.0),
    ]
}

/// Three corners and one point inside
pub fn triangle_with_interior() -> Vec<Point> {
    vec![
        Point::new(0.0, 0.0),
        Point::new(4.0, 0.0),
        Point::new(0.0, 4.0),
        Point::new(1.0, 1.0),
    ]
}

/// Integer lattice of `w` by `h` points
pub fn grid(w: usize, h: usize) -> Vec<Point> {
    let mut points = Vec::with_capacity(w * h);
    for y in 0..h {
        for x in 0..w {
            points.push(Point::new(x as f64, y as f64));
        }
    }
    points
}

/// `n` points uniformly distributed over the unit square
pub fn random(n: usize, seed: u64) -> Vec<Point> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n).map(|_| Point::new(rng.gen::<f64>(), rng.gen::<f64>())).collect()
}

/// Points `0..=n` along the x axis, plus one point of height `apex` above the middle
pub fn fan(n: usize, apex: f64) -> Vec<Point> {
    let mut points: Vec<_> = (0..=n).map(|x| Point::new(x as f64, 0.0)).collect();
    points.push(Point::new((n / 2) as f64, apex));
    points
}

/// Points on the very flat parabola `y = curvature * x^2`, for `x` in `-n..=n`
pub fn shallow_arc(n: i32, curvature: f64) -> Vec<Point> {
    (-n..=n).map(|x| Point::new(x as f64, curvature * (x * x) as f64)).collect()
}

/// Points winding outward around the origin
pub fn spiral(n: usize) -> Vec<Point> {
    (0..n)
        .map(|k| {
            let k = k as f64;
            let (sin, cos) = (0.7 * k).sin_cos();
            let r = 0.1 + 0.01 * k;
            Point::new(r * cos, r * sin)
        })
        .collect()
}

pub fn all() -> Vec<Vec<Point>> {
    vec![
        square(),
        triangle_with_interior(),
        grid(8, 5),
        random(200, 1),
        fan(16, 1.0),
        spiral(150),
    ]
}
