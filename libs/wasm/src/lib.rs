//! WASM-facing entry points for the hexsphere planet.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. The JavaScript side forwards key presses to a
//! [`PlanetSession`] and re-uploads the buffers after every accepted key.
//! Native tests use the `*_internal` helpers, which return Rust errors
//! instead of `JsValue`s.
//!
//! ```
//! let mut planet = hexsphere_wasm::PlanetSession::new_internal(None).unwrap();
//! assert!(planet.press_key_internal("t").unwrap());
//! assert_eq!(planet.face_count(), 80);
//! ```

use hexsphere::{Action, GeodesicConfig, Session};
use wasm_bindgen::prelude::*;

mod mesh_handle;

pub use mesh_handle::MeshHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "hexsphere-wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Parses an optional JSON config; `None` or an empty string gives the
/// defaults.
///
/// # Examples
/// ```
/// let config = hexsphere_wasm::parse_config(Some(r#"{"seed": 3}"#)).unwrap();
/// assert_eq!(config.seed, 3);
/// ```
pub fn parse_config(json: Option<&str>) -> Result<GeodesicConfig, String> {
    match json.map(str::trim) {
        None | Some("") => Ok(GeodesicConfig::default()),
        Some(json) => serde_json::from_str(json).map_err(|err| format!("Invalid config: {err}")),
    }
}

/// A planet being edited from JavaScript.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const planet = new PlanetSession('{"seed": 42, "export": {"sides": true}}');
/// // window.addEventListener("keydown", (e) => {
/// //   if (planet.press_key(e.key)) upload(planet.buffers());
/// // });
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct PlanetSession {
    session: Session,
}

#[wasm_bindgen]
impl PlanetSession {
    /// Starts a session from an optional JSON config.
    ///
    /// # Errors
    /// Returns a JavaScript error if the config does not parse or holds a
    /// bad radius or extrusion factor.
    #[wasm_bindgen(constructor)]
    pub fn new(config_json: Option<String>) -> Result<PlanetSession, JsValue> {
        Self::new_internal(config_json.as_deref()).map_err(|err| JsValue::from_str(&err))
    }

    /// Applies the action bound to `key`, a single-character
    /// `KeyboardEvent.key` value.
    ///
    /// Returns false for unbound keys and for named keys such as `Tab` or
    /// `Enter`. Failed actions keep the previous
    /// planet and surface the reason as a JavaScript error.
    pub fn press_key(&mut self, key: &str) -> Result<bool, JsValue> {
        self.press_key_internal(key)
            .map_err(|err| JsValue::from_str(&err))
    }

    /// Applies an action by name: `reset`, `tesselate`, `hexify`,
    /// `normalize` or `extrude`.
    pub fn apply(&mut self, action: &str) -> Result<(), JsValue> {
        self.apply_internal(action)
            .map_err(|err| JsValue::from_str(&err))
    }

    /// Exports the current planet.
    pub fn buffers(&self) -> Result<MeshHandle, JsValue> {
        self.buffers_internal()
            .map_err(|err| JsValue::from_str(&err))
    }

    /// Number of triangles in the current planet.
    #[wasm_bindgen(getter)]
    pub fn face_count(&self) -> usize {
        self.session.polyhedron().face_count()
    }

    /// Number of tiles (groups) in the current planet.
    #[wasm_bindgen(getter)]
    pub fn tile_count(&self) -> usize {
        self.session.polyhedron().group_count()
    }
}

impl PlanetSession {
    /// Host-side constructor.
    pub fn new_internal(config_json: Option<&str>) -> Result<Self, String> {
        let config = parse_config(config_json)?;
        let session = Session::new(config).map_err(|err| err.to_string())?;
        Ok(Self { session })
    }

    /// Host-side key handler.
    pub fn press_key_internal(&mut self, key: &str) -> Result<bool, String> {
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(key), None) => self.session.press_key(key).map_err(|err| err.to_string()),
            _ => Ok(false),
        }
    }

    /// Host-side action dispatch by name.
    pub fn apply_internal(&mut self, action: &str) -> Result<(), String> {
        let action = Action::from_name(action).ok_or_else(|| format!("Unknown action: {action}"))?;
        self.session.apply(action).map_err(|err| err.to_string())
    }

    /// Host-side export.
    pub fn buffers_internal(&self) -> Result<MeshHandle, String> {
        self.session
            .buffers()
            .map(MeshHandle::from_buffers)
            .map_err(|err| err.to_string())
    }

    /// The wrapped session.
    pub fn session(&self) -> &Session {
        &self.session
    }
}
