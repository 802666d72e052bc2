use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::error::{Result, SceneError};
use crate::geometry::{Color, ControlPoint, PointLabel};
use crate::math::Point2;
use crate::tessellation::TessellationParams;

/// Toggles for the optional layers of a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
#[allow(clippy::struct_excessive_bools)]
pub struct RenderFlags {
    /// First- and second-level De Casteljau points.
    pub show_intermediate_points: bool,
    /// Segments joining the intermediate points of each level.
    pub show_intermediate_lines: bool,
    /// The control polygon A-B-C-D.
    pub show_primary_lines: bool,
    pub show_axis: bool,
    /// Print coordinates next to points instead of their labels.
    pub show_coordinates: bool,
    pub show_pointer_indicator: bool,
    pub show_curve_path: bool,
    /// The chain of Bernstein contribution vectors.
    pub show_bernstein: bool,
}

impl Default for RenderFlags {
    fn default() -> Self {
        Self {
            show_intermediate_points: false,
            show_intermediate_lines: false,
            show_primary_lines: false,
            show_axis: false,
            show_coordinates: false,
            show_pointer_indicator: false,
            show_curve_path: true,
            show_bernstein: false,
        }
    }
}

/// How the curve parameter advances from frame to frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum AnimationMode {
    /// `t` sweeps back and forth on its own. `speed` ranges over
    /// [`MIN_SPEED`](Self::MIN_SPEED)..=[`MAX_SPEED`](Self::MAX_SPEED).
    Auto { speed: f64 },
    /// `t` follows a slider position in `[0, 100]`.
    Manual { displacement: f64 },
}

impl AnimationMode {
    pub const MIN_SPEED: f64 = 0.25;
    pub const MAX_SPEED: f64 = 2.0;
    pub const MAX_DISPLACEMENT: f64 = 100.0;

    /// Checks the mode's parameter against its slider bounds.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidConfig`] for an out-of-range or
    /// non-finite speed or displacement.
    pub fn validate(&self) -> Result<()> {
        match *self {
            Self::Auto { speed } => {
                if !(Self::MIN_SPEED..=Self::MAX_SPEED).contains(&speed) {
                    return Err(SceneError::InvalidConfig(format!(
                        "animation speed {speed} outside [{}, {}]",
                        Self::MIN_SPEED,
                        Self::MAX_SPEED
                    ))
                    .into());
                }
            }
            Self::Manual { displacement } => {
                if !(0.0..=Self::MAX_DISPLACEMENT).contains(&displacement) {
                    return Err(SceneError::InvalidConfig(format!(
                        "manual displacement {displacement} outside [0, {}]",
                        Self::MAX_DISPLACEMENT
                    ))
                    .into());
                }
            }
        }
        Ok(())
    }
}

impl Default for AnimationMode {
    fn default() -> Self {
        Self::Auto { speed: 1.0 }
    }
}

/// Top-level scene configuration.
///
/// Every key is optional; `{}` is a valid file.
///
/// ```json
/// {
///   "flags": { "show_intermediate_points": true, "show_bernstein": true },
///   "animation": { "type": "auto", "speed": 1.25 },
///   "control_points": [[0, -100], [-100, 0], [0, 100], [100, 0]],
///   "colors": ["#ff0000", "#008000", "#0000ff", "#ffa500"],
///   "tessellation": { "tolerance": 0.25 }
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub flags: RenderFlags,
    pub animation: AnimationMode,
    /// Initial control point positions in curve order A, B, C, D.
    pub control_points: [Point2; 4],
    /// Display colors in curve order.
    pub colors: [Color; 4],
    pub tessellation: TessellationParams,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            flags: RenderFlags::default(),
            animation: AnimationMode::default(),
            control_points: [
                Point2::new(0.0, -100.0),
                Point2::new(-100.0, 0.0),
                Point2::new(0.0, 100.0),
                Point2::new(100.0, 0.0),
            ],
            colors: PointLabel::ALL.map(ControlPoint::default_color),
            tessellation: TessellationParams::default(),
        }
    }
}

impl SceneConfig {
    /// Parses and validates a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Parse`] for malformed JSON and
    /// [`SceneError::InvalidConfig`] for values that fail validation.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(SceneError::from)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads configuration from a JSON file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::Io`] if the file cannot be read, otherwise as
    /// [`from_json`](Self::from_json).
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| SceneError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let config = Self::from_json(&contents)?;
        info!("loaded scene config from {}", path.display());
        Ok(config)
    }

    /// Loads configuration from `path`, falling back to defaults when the
    /// file is missing or invalid.
    #[must_use]
    pub fn load_or_default(path: &Path) -> Self {
        match Self::load(path) {
            Ok(config) => config,
            Err(e) => {
                warn!("no usable scene config ({e}), using defaults");
                Self::default()
            }
        }
    }

    /// Validates every section.
    ///
    /// # Errors
    ///
    /// Returns the first validation error found.
    pub fn validate(&self) -> Result<()> {
        self.animation.validate()?;
        if self
            .control_points
            .iter()
            .any(|p| !p.x.is_finite() || !p.y.is_finite())
        {
            return Err(
                SceneError::InvalidConfig("control points must be finite".to_owned()).into(),
            );
        }
        self.tessellation.validate()
    }

    /// The configured control points with their labels and colors.
    #[must_use]
    pub fn labelled_points(&self) -> [ControlPoint; 4] {
        PointLabel::ALL.map(|label| {
            ControlPoint::new(
                label,
                self.control_points[label.index()],
                self.colors[label.index()],
            )
        })
    }
}
