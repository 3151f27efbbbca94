//! Converts a closed triangle mesh into hexagon and pentagon tiles.
//!
//! Each triangle (c, p, n) is cut at the thirds of its edges:
//!
//! ```text
//!                 c
//!               /   \
//!          cp_c ----- nc_c        corner fragment of c
//!           /  \     /  \
//!          /    \   /    \
//!      cp_p ---- ctr ---- nc_n    six fan triangles: the face's hexagon
//!        / \     / \     / \
//!       /   \   /   \   /   \
//!      p --- pn_p --- pn_n --- n
//! ```
//!
//! The inner hexagon becomes a tile of six triangles. The three corners
//! are fragments of the tile centered on that vertex, which collects one
//! fragment from every face around it: five at the icosahedron's twelve
//! original vertices, six everywhere else.
//!
//! Fragments are merged by the handle of the vertex they were cut from. The
//! third-point shared by two fragments of one tile is keyed by the directed
//! edge (vertex, neighbour), so both faces along that edge land on the same
//! node.

use std::collections::{BTreeMap, HashMap};

use tracing::{debug, warn};

use super::check_face_budget;
use crate::error::{GeodesicError, GeodesicResult};
use crate::polyhedron::{DedupPolicy, GroupId, NodeId, Polyhedron};
use crate::vec3::{centroid, thirds, Vec3};

/// Tile grown around one vertex of the input mesh.
#[derive(Debug, Clone, Copy)]
struct CornerTile {
    group: GroupId,
    hub: NodeId,
}

/// A third-point on the rim of a corner tile and how many fragments use it.
#[derive(Debug, Clone, Copy)]
struct RimPoint {
    node: NodeId,
    uses: usize,
}

/// Per-pass bookkeeping for the corner tiles.
struct CornerTiles<'a> {
    source: &'a Polyhedron,
    tiles: BTreeMap<NodeId, CornerTile>,
    rim: HashMap<(NodeId, NodeId), RimPoint>,
}

impl<'a> CornerTiles<'a> {
    fn new(source: &'a Polyhedron) -> Self {
        Self {
            source,
            tiles: BTreeMap::new(),
            rim: HashMap::new(),
        }
    }

    /// Tile of `vertex`, created on first use.
    fn tile(&mut self, out: &mut Polyhedron, vertex: NodeId) -> GeodesicResult<CornerTile> {
        if let Some(tile) = self.tiles.get(&vertex) {
            return Ok(*tile);
        }
        let group = out.new_group();
        let hub = out.add_node(self.source.position(vertex)?, group, DedupPolicy::Never);
        let tile = CornerTile { group, hub };
        self.tiles.insert(vertex, tile);
        Ok(tile)
    }

    /// Third-point near `vertex` on the edge toward `toward`.
    fn rim_point(
        &mut self,
        out: &mut Polyhedron,
        tile: CornerTile,
        vertex: NodeId,
        toward: NodeId,
    ) -> GeodesicResult<NodeId> {
        if let Some(point) = self.rim.get_mut(&(vertex, toward)) {
            point.uses += 1;
            return Ok(point.node);
        }
        let (near, _) = thirds(self.source.position(vertex)?, self.source.position(toward)?);
        let node = out.add_node(near, tile.group, DedupPolicy::Never);
        self.rim.insert((vertex, toward), RimPoint { node, uses: 1 });
        Ok(node)
    }

    /// Emits the fragment (vertex, near `first`, near `second`).
    fn add_fragment(
        &mut self,
        out: &mut Polyhedron,
        vertex: NodeId,
        first: NodeId,
        second: NodeId,
    ) -> GeodesicResult<()> {
        let tile = self.tile(out, vertex)?;
        let a = self.rim_point(out, tile, vertex, first)?;
        let b = self.rim_point(out, tile, vertex, second)?;
        out.add_face(tile.hub, a, b, tile.group)?;
        Ok(())
    }

    /// Every rim point must close the fan between exactly two fragments.
    fn check_closed(&self) -> GeodesicResult<()> {
        let open = self
            .rim
            .iter()
            .filter(|(_, point)| point.uses != 2)
            .min_by_key(|(edge, _)| **edge);
        if let Some(((vertex, toward), point)) = open {
            warn!(?vertex, ?toward, uses = point.uses, "hexify aborted");
            return Err(GeodesicError::topology(format!(
                "tile of {:?} does not close toward {:?}: {} fragments share the rim point",
                vertex, toward, point.uses
            )));
        }
        Ok(())
    }
}

/// Replaces every triangle with its inner hexagon (six fan triangles) and
/// three corner fragments merged into the tiles of its vertices.
///
/// The output holds `9 * F` faces for `F` input faces: `F` hexagon tiles
/// plus one tile per input vertex. Tiles do not share nodes with each
/// other, so every tile can carry its own flat color and elevation. New
/// groups are uncolored.
///
/// # Errors
///
/// - `TopologyMismatch` if the input is not a closed triangle mesh, so some
///   corner tile cannot be closed
/// - `TooManyFaces` if the output would exceed the face limit
///
/// # Example
///
/// ```rust
/// use hexsphere::{build_icosahedron, hexify};
///
/// let ico = build_icosahedron(1.0).unwrap();
/// let tiles = hexify(&ico).unwrap();
/// assert_eq!(tiles.face_count(), 180);
/// // 20 hexagons from the faces, 12 pentagons from the vertices
/// assert_eq!(tiles.group_count(), 32);
/// ```
pub fn hexify(poly: &Polyhedron) -> GeodesicResult<Polyhedron> {
    check_face_budget(poly.face_count().saturating_mul(9))?;
    if let Some((edge, faces)) = poly.adjacency().first_unpaired_edge() {
        let (a, b) = edge.nodes();
        warn!(?a, ?b, faces, "hexify aborted");
        return Err(GeodesicError::topology(format!(
            "edge {:?}-{:?} is shared by {} faces, expected 2",
            a, b, faces
        )));
    }

    let mut out = poly.successor();
    let mut corners = CornerTiles::new(poly);

    for (_, face) in poly.faces() {
        let [c, p, n] = face.nodes();
        add_hexagon(&mut out, poly.face_positions(face)?)?;

        corners.add_fragment(&mut out, c, p, n)?;
        corners.add_fragment(&mut out, p, n, c)?;
        corners.add_fragment(&mut out, n, c, p)?;
    }
    corners.check_closed()?;

    debug!(
        faces = out.face_count(),
        nodes = out.node_count(),
        groups = out.group_count(),
        corner_tiles = corners.tiles.len(),
        "hexified"
    );
    Ok(out)
}

/// Adds the hexagon inset in triangle (c, p, n) as one tile.
fn add_hexagon(out: &mut Polyhedron, [c, p, n]: [Vec3; 3]) -> GeodesicResult<GroupId> {
    let (cp_c, cp_p) = thirds(c, p);
    let (pn_p, pn_n) = thirds(p, n);
    let (nc_n, nc_c) = thirds(n, c);
    let ring = [cp_c, cp_p, pn_p, pn_n, nc_n, nc_c];

    let group = out.new_group();
    let center = out.add_node(centroid(&ring), group, DedupPolicy::Never);
    let rim = ring.map(|point| out.add_node(point, group, DedupPolicy::Never));
    for i in 0..rim.len() {
        out.add_face(center, rim[i], rim[(i + 1) % rim.len()], group)?;
    }
    Ok(group)
}
