//! Spatial transforms that move nodes without touching connectivity.
//!
//! Both operators compute every new position first and write them back
//! only when the whole pass succeeded.

use std::collections::BTreeMap;

use config::constants::{approx_equal, approx_zero, DEFAULT_EXTRUDE_SCALES};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{check_scale, GeodesicError, GeodesicResult};
use crate::polyhedron::{GroupId, NodeId, Polyhedron};
use crate::vec3::Vec3;

// =============================================================================
// NORMALIZE
// =============================================================================

/// Projects every node onto the sphere of `radius` around the origin.
///
/// Idempotent: a node already within `EPSILON` of the target radius keeps
/// its exact position, so a second call with the same radius changes
/// nothing.
///
/// # Errors
///
/// - `InvalidScale` if `radius` is not finite and strictly positive
/// - `DegenerateVector` for the first node (in handle order) sitting at
///   the origin; no node is moved in that case
///
/// # Example
///
/// ```rust
/// use hexsphere::{build_icosahedron, normalize, tesselate};
///
/// let mut poly = tesselate(&build_icosahedron(1.0).unwrap()).unwrap();
/// normalize(&mut poly, 2.0).unwrap();
/// for (_, node) in poly.nodes() {
///     assert!((node.position.length() - 2.0).abs() < 1e-12);
/// }
/// ```
pub fn normalize(poly: &mut Polyhedron, radius: f64) -> GeodesicResult<()> {
    let radius = check_scale(radius)?;

    let mut moved: Vec<(NodeId, Vec3)> = Vec::with_capacity(poly.node_count());
    for (id, node) in poly.nodes() {
        let length = node.position.length();
        if approx_zero(length) {
            warn!(node = ?id, "normalize aborted");
            return Err(GeodesicError::DegenerateVector { node: id });
        }
        if !approx_equal(length, radius) {
            moved.push((id, node.position * (radius / length)));
        }
    }

    let count = moved.len();
    for (id, position) in moved {
        poly.set_position(id, position)?;
    }
    debug!(nodes = poly.node_count(), moved = count, radius, "normalized");
    Ok(())
}

// =============================================================================
// EXTRUDE
// =============================================================================

/// How `extrude` picks the factor for each group.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExtrudePolicy {
    /// Draw one factor per group uniformly from the list. An empty list
    /// leaves every node in place.
    Choose(Vec<f64>),
    /// Caller-supplied factor per group; groups not listed use `default`.
    PerGroup {
        /// Factor by group.
        scales: BTreeMap<GroupId, f64>,
        /// Factor for unlisted groups.
        default: f64,
    },
    /// The same factor for every group.
    Uniform(f64),
}

impl Default for ExtrudePolicy {
    fn default() -> Self {
        Self::Choose(DEFAULT_EXTRUDE_SCALES.to_vec())
    }
}

impl ExtrudePolicy {
    fn factor<R: Rng + ?Sized>(&self, group: GroupId, rng: &mut R) -> f64 {
        match self {
            Self::Choose(scales) if scales.is_empty() => 1.0,
            Self::Choose(scales) => scales[rng.gen_range(0..scales.len())],
            Self::PerGroup { scales, default } => scales.get(&group).copied().unwrap_or(*default),
            Self::Uniform(scale) => *scale,
        }
    }
}

/// Scales every node away from the origin by a factor chosen once per
/// group, so a whole tile rises or sinks as a unit.
///
/// Groups are taken from the nodes. After `hexify` that is one group per
/// tile; before it, one per face that introduced the node, which gives a
/// coarser and less regular relief. Factors are drawn from `rng` the first
/// time a group is met while walking nodes in handle order, so a seeded
/// source always raises the same tiles.
///
/// Returns the factor applied to each group.
///
/// # Errors
///
/// `InvalidScale` if a chosen factor is not finite and strictly positive;
/// no node is moved in that case.
///
/// # Example
///
/// ```rust
/// use hexsphere::{build_icosahedron, extrude, ExtrudePolicy};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let mut poly = build_icosahedron(1.0).unwrap();
/// let mut rng = StdRng::seed_from_u64(3);
/// extrude(&mut poly, &ExtrudePolicy::Uniform(1.5), &mut rng).unwrap();
/// for (_, node) in poly.nodes() {
///     assert!((node.position.length() - 1.5).abs() < 1e-12);
/// }
/// ```
pub fn extrude<R: Rng + ?Sized>(
    poly: &mut Polyhedron,
    policy: &ExtrudePolicy,
    rng: &mut R,
) -> GeodesicResult<BTreeMap<GroupId, f64>> {
    let mut factors: BTreeMap<GroupId, f64> = BTreeMap::new();
    let mut moved: Vec<(NodeId, Vec3)> = Vec::with_capacity(poly.node_count());

    for (id, node) in poly.nodes() {
        let factor = match factors.get(&node.group) {
            Some(factor) => *factor,
            None => {
                let factor = check_scale(policy.factor(node.group, rng)).map_err(|err| {
                    warn!(group = ?node.group, "extrude aborted");
                    err
                })?;
                factors.insert(node.group, factor);
                factor
            }
        };
        moved.push((id, node.position * factor));
    }

    for (id, position) in moved {
        poly.set_position(id, position)?;
    }
    debug!(nodes = poly.node_count(), groups = factors.len(), "extruded");
    Ok(factors)
}
