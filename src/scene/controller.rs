use tracing::debug;

use crate::error::Result;
use crate::sampling::SampleRange;

use super::AnimationMode;

/// Produces one curve parameter per frame from an [`AnimationMode`].
///
/// In auto mode an integer frame counter walks `0 → max → 0 → …` one step
/// per frame, where `max = round(100 * (2.25 - speed))`, and
/// `t = counter / max`. Faster speeds therefore sweep the curve in fewer
/// frames, and every `t` lands on the grid of [`sample_range`](Self::sample_range).
/// Manual mode maps the slider position in `[0, 100]` straight to `t`.
///
/// Any change of mode (including a new speed) restarts the sweep from `t = 0`
/// moving forward. Modes outside their slider bounds are rejected.
#[derive(Debug, Clone)]
pub struct AnimationController {
    mode: AnimationMode,
    displacement: f64,
    forward: bool,
}

impl AnimationController {
    /// Creates a controller positioned at the start of a sweep.
    ///
    /// # Errors
    ///
    /// Returns [`SceneError::InvalidConfig`](crate::error::SceneError::InvalidConfig)
    /// if `mode` fails [`AnimationMode::validate`].
    pub fn new(mode: AnimationMode) -> Result<Self> {
        mode.validate()?;
        Ok(Self::restart(mode))
    }

    fn restart(mode: AnimationMode) -> Self {
        Self {
            mode,
            displacement: 0.0,
            forward: true,
        }
    }

    /// The mode the controller is currently animating.
    #[must_use]
    pub fn mode(&self) -> AnimationMode {
        self.mode
    }

    /// Frames in one half of an auto sweep at `speed`.
    #[must_use]
    pub fn auto_frames(speed: f64) -> f64 {
        (100.0 * (2.25 - speed)).round()
    }

    fn sync(&mut self, mode: AnimationMode) -> Result<()> {
        if mode != self.mode {
            mode.validate()?;
            debug!(?mode, previous = ?self.mode, "animation mode changed, restarting sweep");
            *self = Self::restart(mode);
        }
        Ok(())
    }

    /// Advances one frame and returns its curve parameter.
    ///
    /// # Errors
    ///
    /// Returns an error if `mode` is out of bounds. The controller keeps
    /// animating its previous mode.
    pub fn next_t(&mut self, mode: AnimationMode) -> Result<f64> {
        self.sync(mode)?;
        let t = match self.mode {
            AnimationMode::Manual { displacement } => displacement / AnimationMode::MAX_DISPLACEMENT,
            AnimationMode::Auto { speed } => {
                let max = Self::auto_frames(speed);
                if self.forward {
                    self.displacement += 1.0;
                    if self.displacement >= max {
                        self.displacement = max;
                        self.forward = false;
                    }
                } else {
                    self.displacement -= 1.0;
                    if self.displacement <= 0.0 {
                        self.displacement = 0.0;
                        self.forward = true;
                    }
                }
                self.displacement / max
            }
        };
        Ok(t)
    }

    /// The sampling range a decomposition plot should cache for `mode`: one
    /// sample per distinct `t` the controller can produce.
    ///
    /// # Errors
    ///
    /// Returns an error if `mode` is out of bounds.
    pub fn sample_range(mode: AnimationMode) -> Result<SampleRange> {
        mode.validate()?;
        let step = match mode {
            AnimationMode::Manual { .. } => 1.0 / AnimationMode::MAX_DISPLACEMENT,
            AnimationMode::Auto { speed } => 1.0 / Self::auto_frames(speed),
        };
        SampleRange::new(0.0, 1.0, step)
    }
}
