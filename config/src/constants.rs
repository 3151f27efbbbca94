//! # Configuration Constants
//!
//! Centralized constants for the geodesic planet pipeline.
//!
//! ## Categories
//!
//! - **Precision**: Floating-point comparison tolerances
//! - **Solid**: Base solid and transform defaults
//! - **Limits**: Maximum values for safety bounds
//! - **Color**: Fallback colors for export
//! - **Input**: Key bindings for operator triggers

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Epsilon for floating-point comparisons.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// fn approximately_equal(a: f64, b: f64) -> bool {
///     (a - b).abs() < EPSILON
/// }
///
/// assert!(approximately_equal(1.0, 1.0 + 1e-11));
/// ```
pub const EPSILON: f64 = 1e-10;

/// Distance below which two positions are treated as one point when a
/// caller explicitly asks for position-based node deduplication.
///
/// Only used by `DedupPolicy::ByPosition`; subdivision passes never merge
/// by position.
///
/// # Example
///
/// ```rust
/// use config::constants::{EPSILON, POSITION_MERGE_EPSILON};
///
/// assert!(POSITION_MERGE_EPSILON >= EPSILON);
/// ```
pub const POSITION_MERGE_EPSILON: f64 = 1e-8;

// =============================================================================
// SOLID CONSTANTS
// =============================================================================

/// Default circumradius of the base icosahedron and normalize target.
pub const DEFAULT_RADIUS: f64 = 1.0;

/// Elevation factors a tile can be extruded by when no explicit per-group
/// scale is supplied. One factor is drawn per tile group.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_EXTRUDE_SCALES;
///
/// assert!(DEFAULT_EXTRUDE_SCALES.iter().all(|s| *s > 0.0));
/// ```
pub const DEFAULT_EXTRUDE_SCALES: [f64; 3] = [0.9, 1.0, 1.1];

/// Seed for the random source that picks group colors and extrusion
/// factors. A fixed seed makes every session reproducible.
pub const DEFAULT_SEED: u64 = 0x5eed_0f_9a1a;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of faces an operator may produce.
///
/// Four subdivisions of the icosahedron give 5120 faces and a hexify pass
/// multiplies the count by nine, so this leaves room for depth 7 before
/// hexify.
///
/// # Example
///
/// ```rust
/// use config::constants::{faces_after_tesselation, MAX_FACES};
///
/// assert!(faces_after_tesselation(7) <= MAX_FACES);
/// ```
pub const MAX_FACES: usize = 5_000_000;

// =============================================================================
// COLOR CONSTANTS
// =============================================================================

/// Fallback color for a face whose group has no registered color (RGBA).
pub const DEFAULT_COLOR: [f32; 4] = [0.8, 0.8, 0.8, 1.0];

/// Color of the shared origin vertex of the side buffer.
pub const ORIGIN_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

// =============================================================================
// INPUT CONSTANTS
// =============================================================================

/// Key that rebuilds the base solid.
pub const KEY_RESET: char = 'R';

/// Key that subdivides every face into four.
pub const KEY_TESSELATE: char = 'T';

/// Key that converts the triangles into hexagon and pentagon tiles.
pub const KEY_HEXIFY: char = 'Y';

/// Key that projects every node onto the sphere.
pub const KEY_NORMALIZE: char = 'U';

/// Key that raises or sinks every tile.
pub const KEY_EXTRUDE: char = 'E';

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// Number of faces of the icosahedron after `depth` subdivision passes.
///
/// # Example
///
/// ```rust
/// use config::constants::faces_after_tesselation;
///
/// assert_eq!(faces_after_tesselation(0), 20);
/// assert_eq!(faces_after_tesselation(2), 320);
/// ```
pub fn faces_after_tesselation(depth: u32) -> usize {
    20usize.saturating_mul(4usize.saturating_pow(depth))
}

/// Checks if two f64 values are approximately equal within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(1.0, 1.0 + 1e-11));
/// assert!(!approx_equal(1.0, 1.1));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Checks if a f64 value is approximately zero within EPSILON.
///
/// # Example
///
/// ```rust
/// use config::constants::approx_zero;
///
/// assert!(approx_zero(1e-11));
/// assert!(!approx_zero(0.1));
/// ```
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
