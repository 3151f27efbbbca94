//! # Hexsphere
//!
//! Geodesic sphere construction for planet rendering.
//! Subdivides an icosahedron, merges the triangles into hexagon and
//! pentagon tiles, and flattens the result into GPU buffers.
//!
//! ## Architecture
//!
//! ```text
//! primitives (icosahedron) → ops (tesselate*, hexify, normalize, extrude)
//!                          → export (render buffers)
//! ```
//!
//! ## Modules
//!
//! - **polyhedron**: Node/face graph with stable handles and tile groups
//! - **ops**: Subdivision, tile merge and spatial transforms
//! - **export**: Flat-shaded vertex/index/color buffers
//! - **session**: Key-driven operator sequencing with a seeded random source
//! - **settings**: Runtime configuration, deserializable from JSON
//!
//! ## Usage
//!
//! ```rust
//! use hexsphere::build_hexsphere;
//!
//! let planet = build_hexsphere(1.0, 2).unwrap();
//! assert_eq!(planet.face_count(), 320 * 9);
//! ```

pub mod color;
pub mod error;
pub mod export;
pub mod ops;
pub mod polyhedron;
pub mod primitives;
pub mod session;
pub mod settings;
pub mod vec3;

pub use error::{GeodesicError, GeodesicResult};
pub use export::{construct_buffers, ExportOptions, RenderBuffers};
pub use ops::{extrude, hexify, normalize, tesselate, ExtrudePolicy};
pub use polyhedron::{DedupPolicy, Polyhedron};
pub use primitives::{build_flat_tile, build_icosahedron};
pub use session::{Action, Session};
pub use settings::GeodesicConfig;
pub use vec3::Vec3;

/// Builds a tiled sphere in one call.
///
/// Runs the full pipeline: icosahedron of `radius`, `depth` subdivision
/// passes, hexify, then normalize back onto `radius`. Tiles come out
/// uncolored; see [`color::paint_groups`].
///
/// # Errors
///
/// - `InvalidScale` for a bad radius
/// - `TooManyFaces` if `depth` is too deep for the face limit
///
/// # Example
///
/// ```rust
/// use hexsphere::build_hexsphere;
///
/// let planet = build_hexsphere(2.0, 1).unwrap();
/// for (_, node) in planet.nodes() {
///     assert!((node.position.length() - 2.0).abs() < 1e-12);
/// }
/// ```
pub fn build_hexsphere(radius: f64, depth: u32) -> GeodesicResult<Polyhedron> {
    let mut poly = build_icosahedron(radius)?;
    for _ in 0..depth {
        poly = tesselate(&poly)?;
    }
    let mut tiles = hexify(&poly)?;
    normalize(&mut tiles, radius)?;
    Ok(tiles)
}
