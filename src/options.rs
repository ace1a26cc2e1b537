//! Per-slide transition configuration with TOML preset support.
//!
//! Every knob a slide can override lives here: effect kind, grid shape,
//! per-tile timing, direction and reveal order, and cuboid appearance.
//! Options serialize to/from TOML so a deck of slides can carry its
//! transition presets as plain files.

use std::path::Path;
use std::time::Duration;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::direction::Direction;
use crate::effect::EffectKind;
use crate::error::TesseraError;
use crate::order::TileOrder;
use crate::util::easing::Easing;

/// Transition options for one slide hand-off. Uses `#[serde(default)]`
/// so a partial TOML file (e.g. only overriding `effect`) works.
#[derive(
    Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema,
)]
#[serde(default)]
pub struct TransitionOptions {
    /// Effect kind; `random` draws a compatible preset per pass.
    pub effect: EffectKind,
    /// Tile columns. 0 clamps to 1.
    pub columns: u32,
    /// Tile rows. 0 clamps to 1.
    pub rows: u32,
    /// Delay between consecutive tile starts, in milliseconds.
    pub interval_ms: u64,
    /// Per-tile transition duration, in milliseconds.
    pub duration_ms: u64,
    /// Per-tile timing curve.
    pub easing: Easing,
    /// Tile movement direction.
    pub direction: Direction,
    /// Tile reveal order.
    pub order: TileOrder,
    /// Give odd-index tiles the opposite direction.
    pub alternate: bool,
    /// Invert direction and order when navigating backward.
    pub auto_reverse: bool,
    /// Explicit 3D travel depth in pixels; overrides the per-effect
    /// keyframe tracks when set.
    pub depth: Option<f32>,
    /// CSS color tinting cuboid faces.
    pub shape_color: Option<String>,
    /// Darken the outgoing side as it turns away.
    pub shape_shading: bool,
    /// Cuboid thickness for flip, in pixels.
    pub shape_depth: f32,
}

impl Default for TransitionOptions {
    fn default() -> Self {
        Self {
            effect: EffectKind::default(),
            columns: 1,
            rows: 1,
            interval_ms: 100,
            duration_ms: 800,
            easing: Easing::default(),
            direction: Direction::default(),
            order: TileOrder::default(),
            alternate: false,
            auto_reverse: true,
            depth: None,
            shape_color: None,
            shape_shading: true,
            shape_depth: 0.0,
        }
    }
}

impl TransitionOptions {
    /// Delay between consecutive tile starts.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Per-tile transition duration.
    #[must_use]
    pub const fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }

    /// Generate JSON Schema describing the options surface.
    #[must_use]
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(TransitionOptions)
    }

    /// Load options from a TOML file. Missing fields use defaults.
    ///
    /// # Errors
    ///
    /// Returns [`TesseraError::Io`] when the file cannot be read and
    /// [`TesseraError::OptionsParse`] when it is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, TesseraError> {
        let content =
            std::fs::read_to_string(path).map_err(TesseraError::Io)?;
        toml::from_str(&content)
            .map_err(|e| TesseraError::OptionsParse(e.to_string()))
    }

    /// Save options to a TOML file (pretty-printed).
    ///
    /// # Errors
    ///
    /// Returns [`TesseraError::OptionsParse`] when serialization fails
    /// and [`TesseraError::Io`] when the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), TesseraError> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| TesseraError::OptionsParse(e.to_string()))?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(TesseraError::Io)?;
        }
        std::fs::write(path, content).map_err(TesseraError::Io)
    }
}
