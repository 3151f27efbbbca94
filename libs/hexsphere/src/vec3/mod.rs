//! Thin wrapper around `glam::DVec3` shared across the mesh operators.
//!
//! Scalars are never coerced into vectors implicitly. Callers that want a
//! scalar applied to every component say so with [`splat`] or
//! [`add_scalar`]; everything else is plain vector arithmetic.

pub use glam::DVec3 as Vec3;

/// Broadcasts a scalar into all three components.
///
/// # Examples
/// ```
/// use hexsphere::vec3::{splat, Vec3};
/// assert_eq!(splat(2.0), Vec3::new(2.0, 2.0, 2.0));
/// ```
pub fn splat(value: f64) -> Vec3 {
    Vec3::splat(value)
}

/// Adds a scalar to every component.
///
/// # Examples
/// ```
/// use hexsphere::vec3::{add_scalar, Vec3};
/// assert_eq!(add_scalar(Vec3::new(1.0, 2.0, 3.0), 1.0), Vec3::new(2.0, 3.0, 4.0));
/// ```
pub fn add_scalar(v: Vec3, value: f64) -> Vec3 {
    v + splat(value)
}

/// Weighted average of two points: `(a * wa + b * wb) / (wa + wb)`.
///
/// # Examples
/// ```
/// use hexsphere::vec3::{weighted, Vec3};
/// let p = weighted(Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0), 2.0, 1.0);
/// assert_eq!(p, Vec3::new(1.0, 0.0, 0.0));
/// ```
pub fn weighted(a: Vec3, b: Vec3, wa: f64, wb: f64) -> Vec3 {
    (a * wa + b * wb) / (wa + wb)
}

/// The point halfway between `a` and `b`.
pub fn midpoint(a: Vec3, b: Vec3) -> Vec3 {
    weighted(a, b, 1.0, 1.0)
}

/// Two points that split the segment `a..b` into thirds.
///
/// The first is one third of the way from `a`, the second two thirds.
///
/// # Examples
/// ```
/// use hexsphere::vec3::{thirds, Vec3};
/// let (near_a, near_b) = thirds(Vec3::ZERO, Vec3::new(3.0, 0.0, 0.0));
/// assert_eq!(near_a.x, 1.0);
/// assert_eq!(near_b.x, 2.0);
/// ```
pub fn thirds(a: Vec3, b: Vec3) -> (Vec3, Vec3) {
    (weighted(a, b, 2.0, 1.0), weighted(a, b, 1.0, 2.0))
}

/// Arithmetic mean of a set of points. Returns the origin for an empty set.
pub fn centroid(points: &[Vec3]) -> Vec3 {
    if points.is_empty() {
        return Vec3::ZERO;
    }
    let sum = points.iter().fold(Vec3::ZERO, |acc, p| acc + *p);
    sum / points.len() as f64
}

/// Lossy conversion to the f32 layout used by GPU buffers.
#[inline]
pub fn to_f32(v: Vec3) -> [f32; 3] {
    [v.x as f32, v.y as f32, v.z as f32]
}

#[cfg(test)]
mod tests;
