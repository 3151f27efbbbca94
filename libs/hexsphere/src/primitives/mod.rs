//! # Primitives
//!
//! Base solids the operators start from.

pub mod flat_tile;
pub mod icosahedron;

pub use flat_tile::build_flat_tile;
pub use icosahedron::build_icosahedron;
