//! # Session
//!
//! Owns the current polyhedron and the random source, and applies one
//! operator per trigger event. An operator that fails leaves the previous
//! polyhedron in place.

use config::constants::{KEY_EXTRUDE, KEY_HEXIFY, KEY_NORMALIZE, KEY_RESET, KEY_TESSELATE};
use rand::{rngs::StdRng, SeedableRng};
use tracing::{info, warn};

use crate::color::paint_groups;
use crate::error::GeodesicResult;
use crate::export::{construct_buffers, RenderBuffers};
use crate::ops::{extrude, hexify, normalize, tesselate};
use crate::polyhedron::Polyhedron;
use crate::primitives::build_icosahedron;
use crate::settings::GeodesicConfig;

/// A discrete trigger from the host's event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    /// Rebuild the base icosahedron and reseed the random source.
    Reset,
    /// Subdivide every face into four.
    Tesselate,
    /// Convert triangles into hexagon and pentagon tiles.
    Hexify,
    /// Project every node onto the configured radius.
    Normalize,
    /// Raise or sink every tile by a random factor.
    Extrude,
}

impl Action {
    /// All actions, in key-binding order.
    pub const ALL: [Action; 5] = [
        Action::Reset,
        Action::Tesselate,
        Action::Hexify,
        Action::Normalize,
        Action::Extrude,
    ];

    /// The action bound to `key`, ignoring case.
    ///
    /// # Example
    ///
    /// ```rust
    /// use hexsphere::Action;
    ///
    /// assert_eq!(Action::from_key('t'), Some(Action::Tesselate));
    /// assert_eq!(Action::from_key('Y'), Some(Action::Hexify));
    /// assert_eq!(Action::from_key('x'), None);
    /// ```
    pub fn from_key(key: char) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.key() == key.to_ascii_uppercase())
    }

    /// The key bound to this action.
    pub fn key(self) -> char {
        match self {
            Self::Reset => KEY_RESET,
            Self::Tesselate => KEY_TESSELATE,
            Self::Hexify => KEY_HEXIFY,
            Self::Normalize => KEY_NORMALIZE,
            Self::Extrude => KEY_EXTRUDE,
        }
    }

    /// Lowercase name, as used by hosts that dispatch by string.
    pub fn name(self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Tesselate => "tesselate",
            Self::Hexify => "hexify",
            Self::Normalize => "normalize",
            Self::Extrude => "extrude",
        }
    }

    /// The action with the given name, ignoring case.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|action| action.name().eq_ignore_ascii_case(name))
    }
}

/// The single owner of the planet being edited.
///
/// # Example
///
/// ```rust
/// use hexsphere::{Action, GeodesicConfig, Session};
///
/// let mut session = Session::new(GeodesicConfig::default()).unwrap();
/// session.apply(Action::Tesselate).unwrap();
/// session.apply(Action::Hexify).unwrap();
/// session.apply(Action::Normalize).unwrap();
///
/// assert_eq!(session.polyhedron().group_count(), 80 + 42);
/// assert!(session.buffers().unwrap().vertex_count() > 0);
/// ```
#[derive(Debug, Clone)]
pub struct Session {
    polyhedron: Polyhedron,
    rng: StdRng,
    config: GeodesicConfig,
}

impl Session {
    /// Starts a session on a freshly built, painted icosahedron.
    ///
    /// # Errors
    ///
    /// `InvalidScale` if the config holds a bad radius or extrusion factor.
    pub fn new(config: GeodesicConfig) -> GeodesicResult<Self> {
        config.validate()?;
        let mut rng = StdRng::seed_from_u64(config.seed);
        let polyhedron = base_solid(&config, &mut rng)?;
        info!(seed = config.seed, radius = config.radius, "session started");
        Ok(Self {
            polyhedron,
            rng,
            config,
        })
    }

    /// Runs `action` against the current polyhedron.
    ///
    /// Groups the operator creates are painted from the session's random
    /// source. On error the current polyhedron is kept unchanged.
    pub fn apply(&mut self, action: Action) -> GeodesicResult<()> {
        if let Err(err) = self.run(action) {
            warn!(action = action.name(), error = %err, "action failed");
            return Err(err);
        }
        paint_groups(&mut self.polyhedron, &mut self.rng);
        info!(
            action = action.name(),
            faces = self.polyhedron.face_count(),
            nodes = self.polyhedron.node_count(),
            groups = self.polyhedron.group_count(),
            "applied"
        );
        Ok(())
    }

    fn run(&mut self, action: Action) -> GeodesicResult<()> {
        match action {
            Action::Reset => {
                self.rng = StdRng::seed_from_u64(self.config.seed);
                self.polyhedron = base_solid(&self.config, &mut self.rng)?;
            }
            Action::Tesselate => self.polyhedron = tesselate(&self.polyhedron)?,
            Action::Hexify => self.polyhedron = hexify(&self.polyhedron)?,
            Action::Normalize => normalize(&mut self.polyhedron, self.config.radius)?,
            Action::Extrude => {
                let policy = self.config.extrude_policy();
                extrude(&mut self.polyhedron, &policy, &mut self.rng)?;
            }
        }
        Ok(())
    }

    /// Applies the action bound to `key`. Returns `Ok(false)` for an
    /// unbound key.
    pub fn press_key(&mut self, key: char) -> GeodesicResult<bool> {
        match Action::from_key(key) {
            Some(action) => self.apply(action).map(|()| true),
            None => Ok(false),
        }
    }

    /// The current polyhedron.
    pub fn polyhedron(&self) -> &Polyhedron {
        &self.polyhedron
    }

    /// The session settings.
    pub fn config(&self) -> &GeodesicConfig {
        &self.config
    }

    /// Exports the current polyhedron with the configured buffer options.
    pub fn buffers(&self) -> GeodesicResult<RenderBuffers> {
        construct_buffers(&self.polyhedron, self.config.export)
    }
}

fn base_solid(config: &GeodesicConfig, rng: &mut StdRng) -> GeodesicResult<Polyhedron> {
    let mut poly = build_icosahedron(config.radius)?;
    paint_groups(&mut poly, rng);
    Ok(poly)
}
