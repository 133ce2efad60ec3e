use crate::{EMPTY, Point, PointSet, Triangulation, VALIDATION_TOLERANCE, convex_hull, math, next_halfedge, triangulate, triangulator::Triangulator};

use super::util::{self, assert_closed, assert_delaunay, same_cycle};

fn check(points: &[Point]) -> Triangulation {
    let t = triangulate(points).expect("Triangulation failed");
    assert_closed(&t);
    assert_delaunay(&t);
    if let Err(e) = t.validate() {
        panic!("Validation failed: {}", e);
    }
    t
}

#[test]
fn square() {
    let t = check(&util::points::square());
    assert_eq!(t.len(), 2);
    assert_eq!(t.hull().len(), 4);
    assert!(same_cycle(&t.convex_hull(), &util::points::square()));
    assert!((t.area() - 1.0).abs() < VALIDATION_TOLERANCE);

    // exactly one shared edge
    let shared = t.halfedges().iter().filter(|&&e| e != EMPTY).count();
    assert_eq!(shared, 2);
}

#[test]
fn triangle_with_interior() {
    let points = util::points::triangle_with_interior();
    let t = check(&points);
    assert_eq!(t.len(), 3);
    for triangle in t.iter() {
        assert!(triangle.contains(&3), "{:?} does not use the interior point", triangle);
    }
    assert!(same_cycle(&t.convex_hull(), &points[..3]));
    assert!((t.area() - 8.0).abs() < VALIDATION_TOLERANCE);
}

#[test]
fn fixtures() {
    for points in util::points::all() {
        let t = check(&points);
        let hull_area = math::polygon_area(&convex_hull(&points));
        assert!((math::polygon_area(&t.convex_hull()) - hull_area).abs() < VALIDATION_TOLERANCE);
    }
}

#[test]
fn triangles_are_wound_consistently() {
    let t = check(&util::points::random(300, 7));
    let points = t.points();
    for [a, b, c] in t.iter() {
        assert!(math::signed_area(points[a], points[b], points[c]) >= 0.0);
    }
}

#[test]
fn halfedges_join_matching_points() {
    let t = check(&util::points::random(100, 3));
    let triangles = t.triangles();
    for (e, &opposite) in t.halfedges().iter().enumerate() {
        if opposite == EMPTY {
            continue;
        }
        assert_eq!(triangles[e], triangles[next_halfedge(opposite)]);
        assert_eq!(triangles[next_halfedge(e)], triangles[opposite]);
    }
}

#[test]
fn hull_edges_are_unpaired() {
    let t = check(&util::points::random(100, 5));
    let unpaired = t.halfedges().iter().filter(|&&e| e == EMPTY).count();
    assert_eq!(unpaired, t.hull().len());
}

#[test]
fn triangle_count() {
    // 2n - h - 2 for points in general position
    let n = 500;
    let t = check(&util::points::random(n, 11));
    assert_eq!(t.len(), 2 * n - t.hull().len() - 2);
}

#[test]
fn area_is_conserved() {
    let points = util::points::grid(10, 10);
    let t = check(&points);
    assert!((t.area() - 81.0).abs() < VALIDATION_TOLERANCE);
    assert!((math::polygon_area(&t.convex_hull()) - 81.0).abs() < VALIDATION_TOLERANCE);
}

#[test]
fn duplicates_are_skipped() {
    let points = util::points::random(200, 1);
    let mut with_duplicate = points.clone();
    with_duplicate.push(points[7]);

    let t = check(&points);
    let u = check(&with_duplicate);
    assert_eq!(u.points().len(), points.len() + 1);
    assert_eq!(t.len(), u.len());
    assert!((t.area() - u.area()).abs() < VALIDATION_TOLERANCE);
    assert!(same_cycle(&t.convex_hull(), &u.convex_hull()));

    // only one of the two copies is used
    let original = u.triangles().contains(&7);
    let copy = u.triangles().contains(&points.len());
    assert!(original != copy);
}

#[test]
fn other_vertex_types() {
    let t = [[0f32, 0.], [1., 0.], [1., 1.], [0., 1.]].triangulate().expect("Triangulation failed");
    assert_eq!(t.len(), 2);
    assert_eq!(t.points()[2], Point::new(1.0, 1.0));

    let t = vec![(0f64, 0f64), (4., 0.), (0., 4.), (1., 1.)].triangulate().expect("Triangulation failed");
    assert_eq!(t.len(), 3);
}

#[test]
fn into_parts() {
    let t = check(&util::points::square());
    let expected = t.clone();
    let (points, hull, triangles, halfedges) = t.into_parts();
    assert_eq!(points, util::points::square());
    assert_eq!(hull, expected.hull());
    assert_eq!(triangles, expected.triangles());
    assert_eq!(halfedges, expected.halfedges());
    assert_eq!(expected.triangle(1), [triangles[3], triangles[4], triangles[5]]);
}

#[test]
fn near_duplicates_are_skipped() {
    let points = util::points::random(200, 4);
    let offset = f64::EPSILON.sqrt() / 2.0;

    // a point whose copy takes part in neither seed triangle
    let (k, with_near_duplicate) = (0..points.len())
        .map(|k| {
            let mut with_near_duplicate = points.clone();
            with_near_duplicate.push(Point::new(points[k].x, points[k].y + offset));
            (k, with_near_duplicate)
        })
        .find(|(k, with_near_duplicate)| {
            let seeds = [
                Triangulator::new(points.clone()).select_seed(),
                Triangulator::new(with_near_duplicate.clone()).select_seed(),
            ];
            seeds.iter().all(|seed| match seed {
                Ok(seed) => ![seed.i0, seed.i1, seed.i2].iter().any(|&i| i == *k || i == points.len()),
                Err(_) => false,
            })
        })
        .expect("No point outside the seed triangles");
    assert_ne!(with_near_duplicate[k], with_near_duplicate[points.len()]);
    assert!(math::squared_distance(with_near_duplicate[k], with_near_duplicate[points.len()]) < math::EPSILON);

    let t = check(&points);
    let u = check(&with_near_duplicate);
    assert_eq!(t.len(), u.len());
    assert!((t.area() - u.area()).abs() < VALIDATION_TOLERANCE);
    assert_eq!(t.hull().len(), u.hull().len());
    assert!((math::polygon_area(&t.convex_hull()) - math::polygon_area(&u.convex_hull())).abs() < VALIDATION_TOLERANCE);

    let original = u.triangles().contains(&k);
    let copy = u.triangles().contains(&points.len());
    assert!(original != copy);
}

#[test]
fn hull_starts_at_last_seed_point() {
    // Seeded as (0, 2, 1) after reordering for a non-negative signed area
    let t = triangulate(&[Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(0.0, 1.0)]).expect("Triangulation failed");
    assert_eq!(t.triangles(), &[0, 2, 1]);
    assert_eq!(t.hull(), &[1, 2, 0]);
}
