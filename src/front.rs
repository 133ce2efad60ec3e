use std::fmt;

use crate::{Point, idx::{Idx, IdxDisplay}, math};

/// One vertex of the advancing hull, and the hull edge leaving it.
#[derive(Debug, Clone)]
pub(crate) struct HullNode {
    vertex: usize,
    // Halfedge of the triangle on the inner side of the edge `vertex -> next`
    tri: usize,
    prev: Idx<HullNode>,
    next: Idx<HullNode>,
    live: bool,
}

impl HullNode {
    fn detached(i: usize) -> Self {
        Self {
            vertex: i,
            tri: 0,
            prev: Idx::new(i),
            next: Idx::new(i),
            live: false,
        }
    }
}

impl IdxDisplay for HullNode {
    fn fmt(f: &mut fmt::Formatter<'_>, idx: usize) -> fmt::Result {
        write!(f, "h{}", idx)
    }
}

/// The boundary of the triangulated region during the sweep.
///
/// A circular doubly-linked list over a preallocated arena, where the node for point `i`
/// lives in slot `i`. Each point joins the boundary at most once, so removed nodes are
/// tombstoned rather than recycled. The angular hash holds weak references into the
/// ring: entries may be stale or overwritten and only seed the visibility walk.
pub(crate) struct AdvancingFront {
    nodes: Vec<HullNode>,
    hash: Vec<Option<Idx<HullNode>>>,
    center: Point,
    head: Option<Idx<HullNode>>,
}

impl AdvancingFront {
    pub fn new(n: usize, center: Point) -> Self {
        let hash_len = ((n as f64).sqrt().ceil() as usize).max(1);
        Self {
            nodes: (0..n).map(HullNode::detached).collect(),
            hash: vec![None; hash_len],
            center,
            head: None,
        }
    }

    /// Put point `i` on the ring, right after `after`, or as a ring of its own if `after` is `None`.
    pub fn new_node(&mut self, i: usize, after: Option<Idx<HullNode>>) -> Idx<HullNode> {
        let ni = Idx::new(i);
        self.nodes[ni].vertex = i;
        self.nodes[ni].live = true;
        match after {
            None => {
                self.nodes[ni].prev = ni;
                self.nodes[ni].next = ni;
                self.head = Some(ni);
            }
            Some(prev) => {
                let next = self.nodes[prev].next;
                self.nodes[ni].prev = prev;
                self.nodes[ni].next = next;
                self.nodes[next].prev = ni;
                self.nodes[prev].next = ni;
            }
        }
        ni
    }

    /// Unlink `ni` from the ring and return its former predecessor, which becomes the head.
    ///
    /// The removed node keeps its own links, so a walk standing on it can still step off.
    pub fn remove(&mut self, ni: Idx<HullNode>) -> Idx<HullNode> {
        let prev = self.nodes[ni].prev;
        let next = self.nodes[ni].next;
        self.nodes[prev].next = next;
        self.nodes[next].prev = prev;
        self.nodes[ni].live = false;
        self.head = Some(prev);
        prev
    }

    pub fn set_head(&mut self, ni: Idx<HullNode>) {
        self.head = Some(ni);
    }

    #[inline]
    pub fn vertex(&self, ni: Idx<HullNode>) -> usize {
        self.nodes[ni].vertex
    }

    #[inline]
    pub fn tri(&self, ni: Idx<HullNode>) -> usize {
        self.nodes[ni].tri
    }

    #[inline]
    pub fn set_tri(&mut self, ni: Idx<HullNode>, t: usize) {
        self.nodes[ni].tri = t;
    }

    #[inline]
    pub fn next(&self, ni: Idx<HullNode>) -> Idx<HullNode> {
        self.nodes[ni].next
    }

    #[inline]
    pub fn prev(&self, ni: Idx<HullNode>) -> Idx<HullNode> {
        self.nodes[ni].prev
    }

    pub fn hash_key(&self, p: Point) -> usize {
        let d = p - self.center;
        let len = self.hash.len();
        ((math::pseudo_angle(d.x, d.y) * len as f64).floor() as usize) % len
    }

    pub fn hash_edge(&mut self, ni: Idx<HullNode>, points: &[Point]) {
        let key = self.hash_key(points[self.vertex(ni)]);
        self.hash[key] = Some(ni);
    }

    /// A live node near `p`'s angle around the center, probing forward from `p`'s bucket.
    pub fn locate(&self, p: Point) -> Option<Idx<HullNode>> {
        let len = self.hash.len();
        let key = self.hash_key(p);
        (0..len)
            .filter_map(|j| self.hash[(key + j) % len])
            .find(|ni| self.nodes[*ni].live)
    }

    /// Walk the ring from the edge before `start` to the first edge visible from `p`.
    ///
    /// Returns the node starting that edge, and whether it is the edge the walk started on
    /// (in which case edges behind it may be visible too). `None` if no edge is visible.
    pub fn find_visible_edge(&self, p: Point, start: Idx<HullNode>, points: &[Point]) -> Option<(Idx<HullNode>, bool)> {
        let start = self.prev(start);
        let mut e = start;
        while math::signed_area(p, points[self.vertex(e)], points[self.vertex(self.next(e))]) >= 0.0 {
            e = self.next(e);
            if e == start {
                return None;
            }
        }
        Some((e, e == start))
    }

    /// Point the boundary node whose triangle was `from` at `to` instead.
    ///
    /// Needed when a flip moves a boundary halfedge to another slot.
    pub fn retarget(&mut self, from: usize, to: usize) {
        let head = match self.head {
            Some(head) => head,
            None => return,
        };
        let mut e = head;
        loop {
            if self.nodes[e].tri == from {
                self.nodes[e].tri = to;
                break;
            }
            e = self.next(e);
            if e == head {
                break;
            }
        }
    }

    /// Point indices of the ring, walking backward from the head.
    pub fn vertices(&self) -> Vec<usize> {
        let mut result = Vec::new();
        let head = match self.head {
            Some(head) => head,
            None => return result,
        };
        let mut e = head;
        loop {
            result.push(self.vertex(e));
            e = self.prev(e);
            if e == head {
                break;
            }
        }
        result
    }
}
