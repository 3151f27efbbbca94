//! Edge adjacency index.
//!
//! Faces never point at each other. Whenever an operator needs to know who
//! shares an edge it rebuilds this index from the face table.

use std::collections::BTreeMap;

use super::{FaceId, NodeId, Polyhedron};

/// Unordered pair of node handles, stored smaller handle first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EdgeKey(NodeId, NodeId);

impl EdgeKey {
    /// Key for the edge between `a` and `b`, in either order.
    ///
    /// # Examples
    /// ```
    /// use hexsphere::polyhedron::{EdgeKey, NodeId};
    /// assert_eq!(EdgeKey::new(NodeId(4), NodeId(1)), EdgeKey::new(NodeId(1), NodeId(4)));
    /// ```
    pub fn new(a: NodeId, b: NodeId) -> Self {
        if a <= b {
            Self(a, b)
        } else {
            Self(b, a)
        }
    }

    /// Both endpoints, smaller handle first.
    pub fn nodes(&self) -> (NodeId, NodeId) {
        (self.0, self.1)
    }
}

/// Mapping from each edge to the faces touching it.
#[derive(Debug, Clone, Default)]
pub struct AdjacencyIndex {
    edges: BTreeMap<EdgeKey, Vec<FaceId>>,
}

impl AdjacencyIndex {
    /// Indexes every edge of every face.
    pub fn build(poly: &Polyhedron) -> Self {
        let mut edges: BTreeMap<EdgeKey, Vec<FaceId>> = BTreeMap::new();
        for (id, face) in poly.faces() {
            for edge in face.edges() {
                edges.entry(edge).or_default().push(id);
            }
        }
        Self { edges }
    }

    /// Number of distinct edges.
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Faces on an edge; empty if the edge does not exist.
    pub fn faces_on(&self, edge: EdgeKey) -> &[FaceId] {
        self.edges.get(&edge).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Edges with their faces, in key order.
    pub fn edges(&self) -> impl Iterator<Item = (EdgeKey, &[FaceId])> + '_ {
        self.edges.iter().map(|(edge, faces)| (*edge, faces.as_slice()))
    }

    /// Faces sharing an edge with `face`, in edge order (center-prev,
    /// prev-next, next-center).
    pub fn neighbors(&self, poly: &Polyhedron, face: FaceId) -> Vec<FaceId> {
        let Some(f) = poly.face(face) else {
            return Vec::new();
        };
        f.edges()
            .iter()
            .flat_map(|edge| self.faces_on(*edge).iter().copied())
            .filter(|other| *other != face)
            .collect()
    }

    /// The first edge not shared by exactly two faces, with its face count.
    pub fn first_unpaired_edge(&self) -> Option<(EdgeKey, usize)> {
        self.edges
            .iter()
            .find(|(_, faces)| faces.len() != 2)
            .map(|(edge, faces)| (*edge, faces.len()))
    }

    /// Returns true if every edge is shared by exactly two faces.
    pub fn is_closed_manifold(&self) -> bool {
        self.first_unpaired_edge().is_none()
    }
}
