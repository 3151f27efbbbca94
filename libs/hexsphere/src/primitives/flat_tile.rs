//! A single flat hexagon in the xy plane, six triangles fanned around the
//! origin. Handy as a small render fixture; it is an open disk, so the
//! subdivision and tiling operators reject it.

use crate::error::GeodesicResult;
use crate::polyhedron::{DedupPolicy, Polyhedron};
use crate::vec3::Vec3;

/// Rim of the tile, clockwise from top-left.
const RIM: [[f64; 2]; 6] = [
    [-0.5, 1.0],
    [0.5, 1.0],
    [1.0, 0.0],
    [0.5, -1.0],
    [-0.5, -1.0],
    [-1.0, 0.0],
];

/// Builds the flat hexagon tile. All six faces share one group.
///
/// # Example
///
/// ```rust
/// use hexsphere::build_flat_tile;
///
/// let tile = build_flat_tile().unwrap();
/// assert_eq!(tile.face_count(), 6);
/// assert_eq!(tile.group_count(), 1);
/// ```
pub fn build_flat_tile() -> GeodesicResult<Polyhedron> {
    let mut poly = Polyhedron::new();
    let group = poly.new_group();
    let center = poly.add_node(Vec3::ZERO, group, DedupPolicy::Never);
    let rim: Vec<_> = RIM
        .iter()
        .map(|[x, y]| poly.add_node(Vec3::new(*x, *y, 0.0), group, DedupPolicy::Never))
        .collect();

    for i in 0..rim.len() {
        poly.add_face(center, rim[i], rim[(i + 1) % rim.len()], group)?;
    }
    Ok(poly)
}
