//! Render buffer export for GPU drawing.
//!
//! This module flattens a polyhedron into the `f32`/`u32` arrays a WebGL
//! renderer uploads as-is. Vertices are not shared between faces: every
//! face contributes its own three vertices so each tile can be flat shaded
//! in its group's color.

use config::constants::{DEFAULT_COLOR, ORIGIN_COLOR};
use serde::{Deserialize, Serialize};

use crate::color::Color;
use crate::error::GeodesicResult;
use crate::polyhedron::Polyhedron;
use crate::vec3::to_f32;

/// Which optional buffers to build.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportOptions {
    /// Build wireframe line indices.
    pub lines: bool,
    /// Build the side fan connecting every face to the origin.
    pub sides: bool,
}

impl Default for ExportOptions {
    fn default() -> Self {
        Self {
            lines: true,
            sides: false,
        }
    }
}

/// Flat arrays ready for upload.
///
/// # Examples
/// ```
/// use hexsphere::{build_icosahedron, construct_buffers, ExportOptions};
///
/// let ico = build_icosahedron(1.0).unwrap();
/// let buffers = construct_buffers(&ico, ExportOptions::default()).unwrap();
///
/// assert_eq!(buffers.vertex_count(), 20 * 3); // three per face, unshared
/// assert_eq!(buffers.triangle_count(), 20);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RenderBuffers {
    /// Vertex positions as flat array [x, y, z, x, y, z, ...].
    pub vertices: Vec<f32>,

    /// Triangle indices as flat array [i0, i1, i2, ...].
    pub indices: Vec<u32>,

    /// Per-vertex RGBA color as flat array [r, g, b, a, ...]. The three
    /// vertices of a face share their group's color.
    pub colors: Vec<f32>,

    /// Line pairs [a, b, a, b, ...] outlining every face.
    pub lines: Option<Vec<u32>>,

    /// Triangles joining the outer edge of every face to the origin vertex,
    /// stored after the face vertices. Draws tile walls once tiles are
    /// extruded.
    pub sides: Option<Vec<u32>>,
}

impl RenderBuffers {
    /// Returns the number of vertices, origin included when sides are built.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    /// Returns the number of face triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Returns the number of line segments, zero if lines were not built.
    pub fn line_count(&self) -> usize {
        self.lines.as_ref().map_or(0, |lines| lines.len() / 2)
    }
}

/// Flattens `poly` into render buffers.
///
/// Faces are written in ascending handle order and the face `k` owns
/// vertices `3k`, `3k + 1` and `3k + 2`. A group without a color is drawn
/// in `DEFAULT_COLOR`. Reads the polyhedron only, so repeated calls on the
/// same state return identical buffers.
///
/// # Errors
///
/// `UnknownNode` if a face refers to a node that is gone.
pub fn construct_buffers(
    poly: &Polyhedron,
    options: ExportOptions,
) -> GeodesicResult<RenderBuffers> {
    let corners = poly.face_count() * 3;
    let total = corners + usize::from(options.sides);

    let mut buffers = RenderBuffers {
        vertices: Vec::with_capacity(total * 3),
        indices: Vec::with_capacity(corners),
        colors: Vec::with_capacity(total * 4),
        lines: options.lines.then(|| Vec::with_capacity(corners * 2)),
        sides: options.sides.then(|| Vec::with_capacity(corners)),
    };
    let origin = corners as u32;

    for (k, (_, face)) in poly.faces().enumerate() {
        let base = (k * 3) as u32;
        let color: Color = poly.color_of(face.group).unwrap_or(DEFAULT_COLOR);

        for position in poly.face_positions(face)? {
            buffers.vertices.extend_from_slice(&to_f32(position));
            buffers.colors.extend_from_slice(&color);
        }
        buffers.indices.extend_from_slice(&[base, base + 1, base + 2]);

        if let Some(lines) = buffers.lines.as_mut() {
            lines.extend_from_slice(&[base, base + 1, base + 1, base + 2, base + 2, base]);
        }
        if let Some(sides) = buffers.sides.as_mut() {
            sides.extend_from_slice(&[origin, base + 1, base + 2]);
        }
    }

    if options.sides {
        buffers.vertices.extend_from_slice(&[0.0, 0.0, 0.0]);
        buffers.colors.extend_from_slice(&ORIGIN_COLOR);
    }
    Ok(buffers)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::paint_groups;
    use crate::ops::{hexify, normalize, tesselate};
    use crate::primitives::{build_flat_tile, build_icosahedron};
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_render_buffers_creation() {
        let buffers = RenderBuffers::default();
        assert_eq!(buffers.vertex_count(), 0);
        assert_eq!(buffers.triangle_count(), 0);
        assert_eq!(buffers.line_count(), 0);
    }

    #[test]
    fn test_icosahedron_export() {
        let ico = build_icosahedron(1.0).unwrap();
        let buffers = construct_buffers(&ico, ExportOptions::default()).unwrap();

        assert_eq!(buffers.vertices.len(), 20 * 3 * 3);
        assert_eq!(buffers.indices.len(), 60);
        assert_eq!(buffers.colors.len(), 60 * 4);
        assert_eq!(buffers.line_count(), 60);
        assert!(buffers.sides.is_none());
    }

    #[test]
    fn test_indices_are_sequential() {
        let ico = build_icosahedron(1.0).unwrap();
        let buffers = construct_buffers(&ico, ExportOptions::default()).unwrap();
        let expected: Vec<u32> = (0..60).collect();
        assert_eq!(buffers.indices, expected);
    }

    #[test]
    fn test_vertices_follow_face_order() {
        let tile = build_flat_tile().unwrap();
        let buffers = construct_buffers(&tile, ExportOptions::default()).unwrap();
        for (k, (_, face)) in tile.faces().enumerate() {
            let positions = tile.face_positions(face).unwrap();
            for (i, position) in positions.iter().enumerate() {
                let at = (k * 3 + i) * 3;
                assert_eq!(&buffers.vertices[at..at + 3], &to_f32(*position));
            }
        }
    }

    #[test]
    fn test_uncolored_groups_use_default_color() {
        let ico = build_icosahedron(1.0).unwrap();
        let buffers = construct_buffers(&ico, ExportOptions::default()).unwrap();
        for color in buffers.colors.chunks(4) {
            assert_eq!(color, &DEFAULT_COLOR);
        }
    }

    #[test]
    fn test_face_vertices_share_group_color() {
        let mut ico = build_icosahedron(1.0).unwrap();
        paint_groups(&mut ico, &mut StdRng::seed_from_u64(2));
        let buffers = construct_buffers(&ico, ExportOptions::default()).unwrap();
        for (k, (_, face)) in ico.faces().enumerate() {
            let expected = ico.color_of(face.group).unwrap();
            for i in 0..3 {
                let at = (k * 3 + i) * 4;
                assert_eq!(&buffers.colors[at..at + 4], &expected);
            }
        }
    }

    #[test]
    fn test_sides_fan_to_origin() {
        let tile = build_flat_tile().unwrap();
        let options = ExportOptions {
            lines: false,
            sides: true,
        };
        let buffers = construct_buffers(&tile, options).unwrap();

        assert!(buffers.lines.is_none());
        assert_eq!(buffers.vertex_count(), 6 * 3 + 1);
        assert_eq!(&buffers.vertices[18 * 3..], &[0.0, 0.0, 0.0]);
        assert_eq!(&buffers.colors[18 * 4..], &ORIGIN_COLOR);

        let sides = buffers.sides.unwrap();
        assert_eq!(sides.len(), 18);
        assert_eq!(&sides[..6], &[18, 1, 2, 18, 4, 5]);
    }

    #[test]
    fn test_lines_outline_each_face() {
        let tile = build_flat_tile().unwrap();
        let buffers = construct_buffers(&tile, ExportOptions::default()).unwrap();
        let lines = buffers.lines.unwrap();
        assert_eq!(&lines[..6], &[0, 1, 1, 2, 2, 0]);
        assert!(lines.iter().all(|i| *i < 18));
    }

    #[test]
    fn test_export_is_pure() {
        let mut poly = hexify(&tesselate(&build_icosahedron(1.0).unwrap()).unwrap()).unwrap();
        normalize(&mut poly, 1.0).unwrap();
        paint_groups(&mut poly, &mut StdRng::seed_from_u64(4));
        let options = ExportOptions {
            lines: true,
            sides: true,
        };
        let a = construct_buffers(&poly, options).unwrap();
        let b = construct_buffers(&poly, options).unwrap();
        let bits = |v: &[f32]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        assert_eq!(bits(&a.vertices), bits(&b.vertices));
        assert_eq!(bits(&a.colors), bits(&b.colors));
        assert_eq!(a.indices, b.indices);
        assert_eq!(a.lines, b.lines);
        assert_eq!(a.sides, b.sides);
    }

    #[test]
    fn test_empty_polyhedron_exports_empty_buffers() {
        let buffers = construct_buffers(&Polyhedron::new(), ExportOptions::default()).unwrap();
        assert_eq!(buffers.vertex_count(), 0);
        assert_eq!(buffers.lines, Some(Vec::new()));
    }
}
