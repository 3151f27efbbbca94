//! # Polyhedron Graph
//!
//! The mutable topology store shared by every operator: nodes (position +
//! group tag) and triangular faces (three node handles + group tag), plus a
//! color per group.
//!
//! Nodes, faces and groups are addressed by opaque handles drawn from
//! monotonically increasing counters. A handle is never reused, not even by
//! the polyhedron an operator derives from this one, so callers can key maps
//! by handle without caring where the element is stored.
//!
//! Iteration is always in ascending handle order. Buffer export and seeded
//! coloring depend on that to be reproducible.

mod adjacency;

pub use adjacency::{AdjacencyIndex, EdgeKey};

use std::collections::BTreeMap;

use config::constants::POSITION_MERGE_EPSILON;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::color::Color;
use crate::error::{GeodesicError, GeodesicResult};
use crate::vec3::Vec3;

// =============================================================================
// HANDLES
// =============================================================================

/// Stable identity of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(pub u32);

/// Stable identity of a face.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct FaceId(pub u32);

/// Identity of a tile group: the faces drawn with one color and raised or
/// sunk as one unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GroupId(pub u32);

// =============================================================================
// ELEMENTS
// =============================================================================

/// A point of the mesh.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    /// Position in 3D space.
    pub position: Vec3,
    /// Tile group the node belongs to.
    pub group: GroupId,
}

/// A triangle stored as (center, prev, next).
///
/// The order is significant: subdivision and tiling read the first slot as
/// the local center and walk prev -> next around it, which fixes which edge
/// is shared with which neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Face {
    nodes: [NodeId; 3],
    /// Tile group the face belongs to.
    pub group: GroupId,
}

impl Face {
    /// The three node handles in (center, prev, next) order.
    #[inline]
    pub fn nodes(&self) -> [NodeId; 3] {
        self.nodes
    }

    /// The local center node.
    #[inline]
    pub fn center(&self) -> NodeId {
        self.nodes[0]
    }

    /// The node before the center when walking the face.
    #[inline]
    pub fn prev(&self) -> NodeId {
        self.nodes[1]
    }

    /// The node after the center when walking the face.
    #[inline]
    pub fn next(&self) -> NodeId {
        self.nodes[2]
    }

    /// Undirected keys of the three edges: center-prev, prev-next, next-center.
    pub fn edges(&self) -> [EdgeKey; 3] {
        let [c, p, n] = self.nodes;
        [EdgeKey::new(c, p), EdgeKey::new(p, n), EdgeKey::new(n, c)]
    }

    /// Returns true if the face references `node`.
    pub fn contains(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }
}

/// Whether `add_node` may hand back an existing node instead of inserting.
///
/// Deduplication is always the caller's decision. Flat shading needs
/// coincident nodes of different groups to stay apart, so even
/// `ByPosition` only merges with a node of the same group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DedupPolicy {
    /// Always insert a new node.
    Never,
    /// Reuse a node of the same group lying within `epsilon`.
    ByPosition {
        /// Merge distance.
        epsilon: f64,
    },
}

impl DedupPolicy {
    /// Position dedup with the configured merge tolerance.
    pub fn by_position() -> Self {
        Self::ByPosition {
            epsilon: POSITION_MERGE_EPSILON,
        }
    }
}

// =============================================================================
// POLYHEDRON
// =============================================================================

/// Owning collection of nodes and faces keyed by handle.
///
/// # Example
///
/// ```rust
/// use hexsphere::{DedupPolicy, Polyhedron, Vec3};
///
/// let mut poly = Polyhedron::new();
/// let group = poly.new_group();
/// let a = poly.add_node(Vec3::X, group, DedupPolicy::Never);
/// let b = poly.add_node(Vec3::Y, group, DedupPolicy::Never);
/// let c = poly.add_node(Vec3::Z, group, DedupPolicy::Never);
/// let face = poly.add_face(a, b, c, group).unwrap();
///
/// assert_eq!(poly.face_count(), 1);
/// assert_eq!(poly.face(face).unwrap().center(), a);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Polyhedron {
    nodes: BTreeMap<NodeId, Node>,
    faces: BTreeMap<FaceId, Face>,
    colors: BTreeMap<GroupId, Color>,
    next_node: u32,
    next_face: u32,
    next_group: u32,
}

impl Polyhedron {
    /// Creates an empty polyhedron.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a polyhedron from a triangle soup.
    ///
    /// Every corner is inserted through `add_node` with `policy`, so
    /// `DedupPolicy::ByPosition` welds the soup into shared vertices and
    /// `DedupPolicy::Never` keeps three private nodes per triangle. Each
    /// triangle becomes a face with its own group; all nodes share one group.
    ///
    /// # Errors
    ///
    /// `InvalidFace` if welding collapses a triangle onto fewer than three
    /// nodes.
    pub fn from_triangles(triangles: &[[Vec3; 3]], policy: DedupPolicy) -> GeodesicResult<Self> {
        let mut poly = Self::new();
        let node_group = poly.new_group();
        for [a, b, c] in triangles {
            let a = poly.add_node(*a, node_group, policy);
            let b = poly.add_node(*b, node_group, policy);
            let c = poly.add_node(*c, node_group, policy);
            let group = poly.new_group();
            poly.add_face(a, b, c, group)?;
        }
        Ok(poly)
    }

    /// An empty polyhedron that continues this one's handle counters.
    ///
    /// Operators build their output here so handles stay unique across the
    /// whole session.
    pub(crate) fn successor(&self) -> Self {
        Self {
            nodes: BTreeMap::new(),
            faces: BTreeMap::new(),
            colors: BTreeMap::new(),
            next_node: self.next_node,
            next_face: self.next_face,
            next_group: self.next_group,
        }
    }

    /// Like [`Polyhedron::successor`] but keeps every node under its handle.
    pub(crate) fn successor_with_nodes(&self) -> Self {
        let mut next = self.successor();
        next.nodes = self.nodes.clone();
        next
    }

    // -------------------------------------------------------------------------
    // Mutation
    // -------------------------------------------------------------------------

    /// Allocates a fresh group handle with no color.
    pub fn new_group(&mut self) -> GroupId {
        let group = GroupId(self.next_group);
        self.next_group += 1;
        group
    }

    /// Allocates a fresh group handle painted with `color`.
    pub fn add_group(&mut self, color: Color) -> GroupId {
        let group = self.new_group();
        self.colors.insert(group, color);
        group
    }

    /// Sets the display color of a group.
    pub fn set_color(&mut self, group: GroupId, color: Color) {
        self.colors.insert(group, color);
    }

    /// Inserts a node, or returns an existing one when `policy` allows it.
    pub fn add_node(&mut self, position: Vec3, group: GroupId, policy: DedupPolicy) -> NodeId {
        if let DedupPolicy::ByPosition { epsilon } = policy {
            let existing = self.nodes.iter().find(|(_, node)| {
                node.group == group && node.position.distance(position) <= epsilon
            });
            if let Some((id, _)) = existing {
                return *id;
            }
        }

        let id = NodeId(self.next_node);
        self.next_node += 1;
        self.nodes.insert(id, Node { position, group });
        id
    }

    /// Inserts a face over three existing, distinct nodes.
    ///
    /// # Errors
    ///
    /// - `InvalidFace` if two of the handles are equal
    /// - `UnknownNode` if a handle is not in the polyhedron
    ///
    /// A rejected face leaves the polyhedron unchanged.
    pub fn add_face(
        &mut self,
        center: NodeId,
        prev: NodeId,
        next: NodeId,
        group: GroupId,
    ) -> GeodesicResult<FaceId> {
        let nodes = [center, prev, next];
        if center == prev || prev == next || next == center {
            warn!(?nodes, "rejected face with repeated node");
            return Err(GeodesicError::InvalidFace { nodes });
        }
        if let Some(missing) = nodes.iter().find(|id| !self.nodes.contains_key(id)) {
            return Err(GeodesicError::UnknownNode(*missing));
        }

        let id = FaceId(self.next_face);
        self.next_face += 1;
        self.faces.insert(id, Face { nodes, group });
        Ok(id)
    }

    /// Deletes a face. Its nodes stay; see [`Polyhedron::prune_orphan_nodes`].
    pub fn remove_face(&mut self, id: FaceId) -> Option<Face> {
        self.faces.remove(&id)
    }

    /// Deletes every node no face references and returns how many went.
    pub fn prune_orphan_nodes(&mut self) -> usize {
        let degrees = self.node_degrees();
        let before = self.nodes.len();
        self.nodes.retain(|id, _| degrees.contains_key(id));
        before - self.nodes.len()
    }

    /// Moves a node without touching its connections.
    pub(crate) fn set_position(&mut self, id: NodeId, position: Vec3) -> GeodesicResult<()> {
        let node = self.nodes.get_mut(&id).ok_or(GeodesicError::UnknownNode(id))?;
        node.position = position;
        Ok(())
    }

    // -------------------------------------------------------------------------
    // Queries
    // -------------------------------------------------------------------------

    /// Number of nodes, referenced or not.
    #[inline]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of faces.
    #[inline]
    pub fn face_count(&self) -> usize {
        self.faces.len()
    }

    /// Returns true if there are no faces.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    /// Number of distinct groups among the faces.
    pub fn group_count(&self) -> usize {
        self.group_sizes().len()
    }

    /// Looks up a node.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(&id)
    }

    /// Looks up a face.
    pub fn face(&self, id: FaceId) -> Option<&Face> {
        self.faces.get(&id)
    }

    /// Position of a node.
    pub fn position(&self, id: NodeId) -> GeodesicResult<Vec3> {
        self.nodes
            .get(&id)
            .map(|node| node.position)
            .ok_or(GeodesicError::UnknownNode(id))
    }

    /// Positions of a face's nodes in (center, prev, next) order.
    pub fn face_positions(&self, face: &Face) -> GeodesicResult<[Vec3; 3]> {
        let [c, p, n] = face.nodes;
        Ok([self.position(c)?, self.position(p)?, self.position(n)?])
    }

    /// Nodes in ascending handle order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes.iter().map(|(id, node)| (*id, node))
    }

    /// Faces in ascending handle order.
    pub fn faces(&self) -> impl Iterator<Item = (FaceId, &Face)> + '_ {
        self.faces.iter().map(|(id, face)| (*id, face))
    }

    /// Display color of a group, if one was assigned.
    pub fn color_of(&self, group: GroupId) -> Option<Color> {
        self.colors.get(&group).copied()
    }

    /// Builds the edge -> faces index for the current faces.
    pub fn adjacency(&self) -> AdjacencyIndex {
        AdjacencyIndex::build(self)
    }

    /// Number of faces touching each referenced node.
    pub fn node_degrees(&self) -> BTreeMap<NodeId, usize> {
        let mut degrees = BTreeMap::new();
        for face in self.faces.values() {
            for node in face.nodes {
                *degrees.entry(node).or_insert(0) += 1;
            }
        }
        degrees
    }

    /// Number of faces in each group.
    pub fn group_sizes(&self) -> BTreeMap<GroupId, usize> {
        let mut sizes = BTreeMap::new();
        for face in self.faces.values() {
            *sizes.entry(face.group).or_insert(0) += 1;
        }
        sizes
    }

    /// V - E + F over the nodes the faces reference.
    ///
    /// 2 for any closed triangulated sphere.
    pub fn euler_characteristic(&self) -> i64 {
        let vertices = self.node_degrees().len() as i64;
        let edges = self.adjacency().edge_count() as i64;
        let faces = self.faces.len() as i64;
        vertices - edges + faces
    }

    /// Returns true if every edge is shared by exactly two faces.
    pub fn is_closed_manifold(&self) -> bool {
        self.adjacency().is_closed_manifold()
    }
}
