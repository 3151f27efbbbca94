//! # Config Crate
//!
//! Centralized configuration constants for the geodesic planet pipeline.
//! All magic numbers and tunable parameters are defined here so the mesh
//! operators, the session and the browser bindings agree on them.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{approx_zero, DEFAULT_RADIUS, EPSILON};
//!
//! let value: f64 = 1e-11;
//! assert!(approx_zero(value));
//! assert!(EPSILON < 1e-6);
//! assert_eq!(DEFAULT_RADIUS, 1.0);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Browser-Safe**: No platform-specific values
//! - **Well-Documented**: Every constant has clear documentation

pub mod constants;
