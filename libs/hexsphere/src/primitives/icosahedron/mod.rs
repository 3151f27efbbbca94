//! Regular icosahedron built from three mutually orthogonal golden
//! rectangles.

use tracing::debug;

use crate::error::{check_scale, GeodesicResult};
use crate::polyhedron::{DedupPolicy, NodeId, Polyhedron};
use crate::vec3::Vec3;

/// Corners of the golden rectangles in the xy, yz and zx planes, before
/// scaling. Each has length `sqrt(1 + phi^2)`.
fn rectangle_corners() -> [Vec3; 12] {
    let t = (1.0 + 5.0_f64.sqrt()) / 2.0;
    [
        Vec3::new(-1.0, t, 0.0),
        Vec3::new(1.0, t, 0.0),
        Vec3::new(-1.0, -t, 0.0),
        Vec3::new(1.0, -t, 0.0),
        Vec3::new(0.0, -1.0, t),
        Vec3::new(0.0, 1.0, t),
        Vec3::new(0.0, -1.0, -t),
        Vec3::new(0.0, 1.0, -t),
        Vec3::new(t, 0.0, -1.0),
        Vec3::new(t, 0.0, 1.0),
        Vec3::new(-t, 0.0, -1.0),
        Vec3::new(-t, 0.0, 1.0),
    ]
}

/// Faces as (center, prev, next) indices into [`rectangle_corners`], wound
/// counter-clockwise seen from outside.
///
/// Five faces around vertex 0, the five below them, five around vertex 3,
/// and the five above those.
pub(crate) const FACES: [[usize; 3]; 20] = [
    [0, 11, 5],
    [0, 5, 1],
    [0, 1, 7],
    [0, 7, 10],
    [0, 10, 11],
    [1, 5, 9],
    [5, 11, 4],
    [11, 10, 2],
    [10, 7, 6],
    [7, 1, 8],
    [3, 9, 4],
    [3, 4, 2],
    [3, 2, 6],
    [3, 6, 8],
    [3, 8, 9],
    [4, 9, 5],
    [2, 4, 11],
    [6, 2, 10],
    [8, 6, 7],
    [9, 8, 1],
];

/// Builds a regular icosahedron with the given circumradius.
///
/// Node handles follow the vertex table (`NodeId(0)` is `(-1, phi, 0)`).
/// Every face gets its own group; each vertex is tagged with the group of
/// the first face that uses it. No colors are assigned.
///
/// # Errors
///
/// `InvalidScale` if `radius` is not finite and strictly positive.
///
/// # Example
///
/// ```rust
/// use hexsphere::build_icosahedron;
///
/// let ico = build_icosahedron(1.0).unwrap();
/// assert_eq!(ico.node_count(), 12);
/// assert_eq!(ico.face_count(), 20);
/// ```
pub fn build_icosahedron(radius: f64) -> GeodesicResult<Polyhedron> {
    let radius = check_scale(radius)?;
    let mut poly = Polyhedron::new();
    let groups: Vec<_> = FACES.iter().map(|_| poly.new_group()).collect();

    let mut ids: Vec<NodeId> = Vec::with_capacity(12);
    for (index, corner) in rectangle_corners().iter().enumerate() {
        let owner = FACES
            .iter()
            .position(|face| face.contains(&index))
            .map_or(groups[0], |i| groups[i]);
        ids.push(poly.add_node(corner.normalize() * radius, owner, DedupPolicy::Never));
    }

    for (face, group) in FACES.iter().zip(groups) {
        let [c, p, n] = *face;
        poly.add_face(ids[c], ids[p], ids[n], group)?;
    }

    debug!(nodes = poly.node_count(), faces = poly.face_count(), radius, "built icosahedron");
    Ok(poly)
}
