//! Loop-style 1-to-4 subdivision that keeps neighbouring faces welded.
//!
//! Every edge of a closed mesh is visited twice, once from each face. The
//! midpoint node is created on the first visit and looked up on the second
//! through an edge-keyed cache that lives for one pass. Two coincident but
//! separate midpoints would render identically and still crack the mesh.

use std::collections::HashMap;

use tracing::{debug, warn};

use super::check_face_budget;
use crate::error::{GeodesicError, GeodesicResult};
use crate::polyhedron::{DedupPolicy, EdgeKey, GroupId, NodeId, Polyhedron};
use crate::vec3::midpoint;

/// Midpoint node of an edge and how many faces asked for it.
struct SharedMidpoint {
    node: NodeId,
    uses: usize,
}

/// Splits every face (c, p, n) into
/// (c, m_cp, m_cn), (p, m_pn, m_cp), (n, m_cn, m_pn) and (m_cp, m_pn, m_cn).
///
/// Existing nodes keep their handles and positions; midpoints are not
/// projected onto the sphere (see [`crate::normalize`]). Every new face gets
/// a fresh, uncolored group.
///
/// # Errors
///
/// - `TopologyMismatch` if an edge is not shared by exactly two faces, so its
///   midpoint cannot be resolved to one node for both sides
/// - `TooManyFaces` if the output would exceed the face limit
///
/// # Example
///
/// ```rust
/// use hexsphere::{build_icosahedron, tesselate};
///
/// let ico = build_icosahedron(1.0).unwrap();
/// let once = tesselate(&ico).unwrap();
/// assert_eq!(once.face_count(), 80);
/// assert_eq!(once.node_count(), 42);
/// ```
pub fn tesselate(poly: &Polyhedron) -> GeodesicResult<Polyhedron> {
    check_face_budget(poly.face_count().saturating_mul(4))?;

    let mut out = poly.successor_with_nodes();
    let mut midpoints: HashMap<EdgeKey, SharedMidpoint> = HashMap::new();

    for (_, face) in poly.faces() {
        let [c, p, n] = face.nodes();
        let groups: [GroupId; 4] = std::array::from_fn(|_| out.new_group());

        let m_cp = shared_midpoint(poly, &mut out, &mut midpoints, c, p, groups[3])?;
        let m_pn = shared_midpoint(poly, &mut out, &mut midpoints, p, n, groups[3])?;
        let m_cn = shared_midpoint(poly, &mut out, &mut midpoints, c, n, groups[3])?;

        out.add_face(c, m_cp, m_cn, groups[0])?;
        out.add_face(p, m_pn, m_cp, groups[1])?;
        out.add_face(n, m_cn, m_pn, groups[2])?;
        out.add_face(m_cp, m_pn, m_cn, groups[3])?;
    }

    let unpaired = midpoints
        .iter()
        .filter(|(_, shared)| shared.uses != 2)
        .min_by_key(|(edge, _)| **edge);
    if let Some((edge, shared)) = unpaired {
        let (a, b) = edge.nodes();
        warn!(?a, ?b, uses = shared.uses, "tesselate aborted");
        return Err(GeodesicError::topology(format!(
            "edge {:?}-{:?} is shared by {} faces, expected 2",
            a, b, shared.uses
        )));
    }

    debug!(
        faces = out.face_count(),
        nodes = out.node_count(),
        midpoints = midpoints.len(),
        "tesselated"
    );
    Ok(out)
}

/// Returns the midpoint node of edge `a`-`b`, creating it on first use.
fn shared_midpoint(
    source: &Polyhedron,
    out: &mut Polyhedron,
    cache: &mut HashMap<EdgeKey, SharedMidpoint>,
    a: NodeId,
    b: NodeId,
    group: GroupId,
) -> GeodesicResult<NodeId> {
    let key = EdgeKey::new(a, b);
    if let Some(shared) = cache.get_mut(&key) {
        shared.uses += 1;
        return Ok(shared.node);
    }

    let position = midpoint(source.position(a)?, source.position(b)?);
    let node = out.add_node(position, group, DedupPolicy::Never);
    cache.insert(key, SharedMidpoint { node, uses: 1 });
    Ok(node)
}
