//! Incremental Delaunay construction by an advancing convex hull.
//!
//! Construction moves through consuming stages, so a finished triangulation can never be swept again:
//! [Triangulator] (the raw points) selects a [Seed], [Sweep::new] lays down the seed triangle and
//! the initial hull, [Sweep::insert] absorbs the remaining points in order of distance from the seed
//! circumcenter, and [Sweep::finish] freezes the mesh.

use ordered_float::OrderedFloat;
use smallvec::SmallVec;

use crate::{Point, Triangulation, TriangulationError, front::{AdvancingFront, HullNode}, idx::Idx, math::{self, EPSILON}, mesh::{EMPTY, HalfEdgeMesh}};

#[cfg(feature = "debugging")]
use crate::debug;

pub(crate) struct Triangulator {
    points: Vec<Point>,
}

/// The first triangle, wound so its [signed_area](math::signed_area) is non-negative,
/// and its circumcenter, which stays the sweep's reference point throughout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Seed {
    pub i0: usize,
    pub i1: usize,
    pub i2: usize,
    pub center: Point,
}

impl Seed {
    fn contains(&self, i: usize) -> bool {
        i == self.i0 || i == self.i1 || i == self.i2
    }
}

impl Triangulator {
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    pub fn build(self) -> Result<Triangulation, TriangulationError> {
        if self.points.is_empty() {
            return Ok(Triangulation::empty());
        }

        let seed = self.select_seed()?;
        let order = self.sweep_order(seed.center);

        let mut sweep = Sweep::new(&self.points, seed);
        for i in order {
            sweep.insert(i)?;
        }
        let (hull, triangles, halfedges) = sweep.finish();

        Ok(Triangulation::new(self.points, hull, triangles, halfedges))
    }

    fn bbox_center(&self) -> Point {
        let mut min = Point::new(f64::INFINITY, f64::INFINITY);
        let mut max = Point::new(f64::NEG_INFINITY, f64::NEG_INFINITY);
        for p in &self.points {
            min.x = min.x.min(p.x);
            min.y = min.y.min(p.y);
            max.x = max.x.max(p.x);
            max.y = max.y.max(p.y);
        }
        Point::new((min.x + max.x) / 2.0, (min.y + max.y) / 2.0)
    }

    pub fn select_seed(&self) -> Result<Seed, TriangulationError> {
        let points = &self.points;
        let degenerate = || TriangulationError::DegenerateInput { points: points.len() };

        // pick a seed point close to the middle of the bounding box
        let m = self.bbox_center();
        let i0 = closest(points, m, |_, _| true).ok_or_else(degenerate)?;
        let p0 = points[i0];

        // the nearest point that does not coincide with it
        let i1 = closest(points, p0, |i, d| i != i0 && d > 0.0).ok_or_else(degenerate)?;
        let p1 = points[i1];

        // and the third point forming the smallest circumcircle with the first two
        let mut min_radius = f64::INFINITY;
        let mut i2 = None;
        for (i, p) in points.iter().enumerate() {
            if i == i0 || i == i1 {
                continue;
            }
            let r = math::squared_circumradius(p0, p1, *p);
            if r < min_radius {
                i2 = Some(i);
                min_radius = r;
            }
        }
        let mut i2 = i2.ok_or_else(degenerate)?;
        let mut i1 = i1;

        if math::signed_area(p0, points[i1], points[i2]) < 0.0 {
            std::mem::swap(&mut i1, &mut i2);
        }

        let center = math::circumcenter(p0, points[i1], points[i2]);
        log::debug!("seed triangle ({}, {}, {}) with circumcenter {}", i0, i1, i2, center);

        Ok(Seed { i0, i1, i2, center })
    }

    /// All point indices, ordered by distance from `center`, ties broken by `x` then `y`.
    pub fn sweep_order(&self, center: Point) -> Vec<usize> {
        let points = &self.points;
        let distances: Vec<f64> = points.iter().map(|p| math::squared_distance(*p, center)).collect();

        let mut ids: Vec<usize> = (0..points.len()).collect();
        ids.sort_unstable_by_key(|&i| (OrderedFloat(distances[i]), OrderedFloat(points[i].x), OrderedFloat(points[i].y)));
        ids
    }
}

// Index of the point nearest `p` among those `accept`ed, given each candidate's index and squared distance.
fn closest(points: &[Point], p: Point, accept: impl Fn(usize, f64) -> bool) -> Option<usize> {
    let mut min_distance = f64::INFINITY;
    let mut result = None;
    for (i, q) in points.iter().enumerate() {
        let d = math::squared_distance(*q, p);
        if accept(i, d) && d < min_distance {
            result = Some(i);
            min_distance = d;
        }
    }
    result
}

pub(crate) struct Sweep<'a> {
    points: &'a [Point],
    seed: Seed,
    mesh: HalfEdgeMesh,
    front: AdvancingFront,
    edge_stack: SmallVec<[usize; 64]>,
    // The last point taken from the sweep order, for near-duplicate detection
    last: Point,
    skipped: usize,
    #[cfg(feature = "debugging")]
    svg: Option<debug::svg::SvgContext>,
}

impl<'a> Sweep<'a> {
    pub fn new(points: &'a [Point], seed: Seed) -> Self {
        let Seed { i0, i1, i2, center } = seed;

        let mut front = AdvancingFront::new(points.len(), center);
        let mut e = None;
        for (t, i) in [i0, i1, i2].iter().copied().enumerate() {
            let ni = front.new_node(i, e);
            front.set_tri(ni, t);
            front.hash_edge(ni, points);
            e = Some(ni);
        }
        // the sweep starts from the last seed node
        if let Some(last) = e {
            front.set_head(last);
        }

        let mut mesh = HalfEdgeMesh::with_point_count(points.len());
        mesh.add_triangle(i0, i1, i2, EMPTY, EMPTY, EMPTY);

        Self {
            points,
            seed,
            mesh,
            front,
            edge_stack: SmallVec::new(),
            last: Point::infinity(),
            skipped: 0,
            #[cfg(feature = "debugging")]
            svg: debug::svg::SvgContext::from_env(points),
        }
    }

    #[inline]
    fn is_visible(&self, p: Point, from: Idx<HullNode>, to: Idx<HullNode>) -> bool {
        math::signed_area(p, self.points[self.front.vertex(from)], self.points[self.front.vertex(to)]) < 0.0
    }

    /// Absorb point `i`, which must not be nearer `center` than any point already inserted.
    ///
    /// Near-duplicates of the previous point, seed points, and points with no visible hull edge are skipped.
    pub fn insert(&mut self, i: usize) -> Result<(), TriangulationError> {
        let p = self.points[i];

        if math::squared_distance(p, self.last) < EPSILON {
            log::trace!("skipping point {} {}: near-duplicate of the previous point", i, p);
            self.skipped += 1;
            return Ok(());
        }
        self.last = p;

        if self.seed.contains(i) {
            return Ok(());
        }

        let start = self.front.locate(p)
            .ok_or_else(|| TriangulationError::internal(format!("No live hull node to locate point {} from", i)))?;
        let (e, walk_back) = match self.front.find_visible_edge(p, start, self.points) {
            Some(found) => found,
            None => {
                log::trace!("skipping point {} {}: no visible hull edge", i, p);
                self.skipped += 1;
                return Ok(());
            }
        };

        log::trace!("point {} joins the hull after {}", i, e);

        let front = &mut self.front;
        let t = self.mesh.add_triangle(front.vertex(e), i, front.vertex(front.next(e)), EMPTY, EMPTY, front.tri(e));
        front.set_tri(e, t);
        let ni = front.new_node(i, Some(e));

        let outer = self.legalize(t + 2);
        self.front.set_tri(ni, outer);

        // walk forward through the hull, fanning out over every visible edge
        let mut q = self.front.next(ni);
        while self.is_visible(p, q, self.front.next(q)) {
            let front = &self.front;
            let t = self.mesh.add_triangle(front.vertex(q), i, front.vertex(front.next(q)), front.tri(front.prev(q)), EMPTY, front.tri(q));
            let outer = self.legalize(t + 2);
            let prev = self.front.prev(q);
            self.front.set_tri(prev, outer);
            self.front.remove(q);
            q = self.front.next(q);
        }

        if walk_back {
            let mut q = self.front.prev(ni);
            while self.is_visible(p, self.front.prev(q), q) {
                let front = &self.front;
                let t = self.mesh.add_triangle(front.vertex(front.prev(q)), i, front.vertex(q), EMPTY, front.tri(q), front.tri(front.prev(q)));
                self.legalize(t + 2);
                let prev = self.front.prev(q);
                self.front.set_tri(prev, t);
                self.front.remove(q);
                q = self.front.prev(q);
            }
        }

        let prev = self.front.prev(ni);
        self.front.hash_edge(ni, self.points);
        self.front.hash_edge(prev, self.points);

        #[cfg(feature = "debugging")]
        self.output_svg(debug::svg::SvgOutputLevel::MajorSteps, Some(i));

        Ok(())
    }

    /// Restore the Delaunay condition across halfedge `a` of a freshly added triangle.
    ///
    /// ```text
    ///           pl                    pl
    ///          /||\                  /  \
    ///       al/ || \bl            al/    \a
    ///        /  ||  \              /      \
    ///       /  a||b  \    flip    /___ar___\
    ///     p0\   ||   /p1   =>   p0\---bl---/p1
    ///        \  ||  /              \      /
    ///       ar\ || /br             b\    /br
    ///          \||/                  \  /
    ///           pr                    pr
    /// ```
    ///
    /// If `p1` is inside the circumcircle of `p0, pr, pl` the pair is flipped, then `a` is
    /// checked again before `br`. Returns the outer halfedge `ar` of the last triangle checked.
    fn legalize(&mut self, mut a: usize) -> usize {
        let mut ar;
        loop {
            let b = self.mesh.halfedges[a];
            let a0 = a - a % 3;
            ar = a0 + (a + 2) % 3;

            if b == EMPTY {
                match self.edge_stack.pop() {
                    Some(next) => {
                        a = next;
                        continue;
                    }
                    None => break,
                }
            }

            let b0 = b - b % 3;
            let al = a0 + (a + 1) % 3;
            let bl = b0 + (b + 2) % 3;

            let triangles = &self.mesh.triangles;
            let p0 = triangles[ar];
            let pr = triangles[a];
            let pl = triangles[al];
            let p1 = triangles[bl];

            let illegal = math::in_circle(self.points[p0], self.points[pr], self.points[pl], self.points[p1]);
            if !illegal {
                match self.edge_stack.pop() {
                    Some(next) => {
                        a = next;
                        continue;
                    }
                    None => break,
                }
            }

            self.mesh.triangles[a] = p1;
            self.mesh.triangles[b] = p0;

            let hbl = self.mesh.halfedges[bl];
            // edge swapped on the other side of the hull (rare)
            if hbl == EMPTY {
                self.front.retarget(bl, a);
            }

            let har = self.mesh.halfedges[ar];
            self.mesh.link(a, hbl);
            self.mesh.link(b, har);
            self.mesh.link(ar, bl);

            let br = b0 + (b + 1) % 3;
            self.edge_stack.push(br);

            #[cfg(feature = "debugging")]
            self.output_svg(debug::svg::SvgOutputLevel::AllSteps, None);
        }
        ar
    }

    /// Freeze the sweep into the hull (walked backward from its head), triangles and halfedges.
    pub fn finish(self) -> (Vec<usize>, Vec<usize>, Vec<usize>) {
        #[cfg(feature = "debugging")]
        self.output_svg(debug::svg::SvgOutputLevel::ResultOnly, None);

        let hull = self.front.vertices();
        log::debug!("triangulated {} points into {} triangles with {} hull points, {} points skipped",
            self.points.len(), self.mesh.len() / 3, hull.len(), self.skipped);

        let (triangles, halfedges) = self.mesh.freeze();
        (hull, triangles, halfedges)
    }

    #[cfg(feature = "debugging")]
    fn output_svg(&self, level: debug::svg::SvgOutputLevel, highlight: Option<usize>) {
        if let Some(svg) = &self.svg {
            svg.output(level, &debug::svg::SweepSnapshot {
                points: self.points,
                triangles: &self.mesh.triangles,
                hull: self.front.vertices(),
                highlight,
            });
        }
    }
}
