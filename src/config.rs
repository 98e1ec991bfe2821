use std::time::Duration;

use crate::animation::{LinearConfig, Motion, SpringConfig};
use crate::error::{Error, Result};
use crate::geometry::Color;

/// How the outline is stroked by the host.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub color: Color,
    pub anti_alias: bool,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            width: 4.0,
            color: Color::ACCENT,
            anti_alias: true,
        }
    }
}

/// Everything an [`ExpandingBorder`](crate::ExpandingBorder) needs besides its host.
#[derive(Clone, Debug, PartialEq)]
pub struct BorderConfig {
    pub motion: Motion,
    /// Per-axis distance at which a point counts as arrived
    pub tolerance: f32,
    /// Longest step fed to the integrator after a scheduling gap
    pub max_step: Duration,
    /// Delay between animation ticks
    pub tick_period: Duration,
    pub stroke: Stroke,
    /// Extra inset of the expanded outline beyond the stroke width
    pub outer_margin: f32,
}

impl BorderConfig {
    /// Spring motion with a 20 unit margin around the expanded outline.
    pub fn spring() -> Self {
        Self {
            motion: Motion::Spring(SpringConfig::DEFAULT),
            tolerance: 0.1,
            max_step: Duration::from_millis(50),
            tick_period: Duration::from_millis(15),
            stroke: Stroke::default(),
            outer_margin: 20.0,
        }
    }

    /// Clamped-linear motion; the expanded outline sits one stroke in.
    pub fn linear() -> Self {
        Self {
            motion: Motion::Linear(LinearConfig::DEFAULT),
            outer_margin: 0.0,
            ..Self::spring()
        }
    }

    pub fn motion(mut self, motion: impl Into<Motion>) -> Self {
        self.motion = motion.into();
        self
    }

    pub fn tolerance(mut self, tolerance: f32) -> Self {
        self.tolerance = tolerance;
        self
    }

    pub fn max_step(mut self, max_step: Duration) -> Self {
        self.max_step = max_step;
        self
    }

    pub fn tick_period(mut self, tick_period: Duration) -> Self {
        self.tick_period = tick_period;
        self
    }

    pub fn stroke(mut self, stroke: Stroke) -> Self {
        self.stroke = stroke;
        self
    }

    pub fn stroke_width(mut self, width: f32) -> Self {
        self.stroke.width = width;
        self
    }

    pub fn outer_margin(mut self, margin: f32) -> Self {
        self.outer_margin = margin;
        self
    }

    /// Distance of the expanded outline from the container edge.
    pub fn outer_inset(&self) -> f32 {
        self.stroke.width + self.outer_margin
    }

    /// Reject values that would stall or destabilise the animation.
    pub fn validate(&self) -> Result<()> {
        self.validate_timing()?;

        match self.motion {
            Motion::Spring(spring) => {
                if !positive(spring.stiffness) {
                    return Err(invalid("spring.stiffness", "must be positive and finite"));
                }
                if !(spring.viscosity > 0.0 && spring.viscosity < 1.0) {
                    return Err(invalid("spring.viscosity", "must be between 0 and 1"));
                }
                let max_step_ms = (self.max_step.as_secs_f64() * 1000.0) as f32;
                if !spring.is_stable_at(max_step_ms) {
                    return Err(Error::UnstableSpring {
                        stiffness: spring.stiffness,
                        viscosity: spring.viscosity,
                        max_step_ms,
                    });
                }
            }
            Motion::Linear(linear) => {
                if !positive(linear.speed) {
                    return Err(invalid("linear.speed", "must be positive and finite"));
                }
            }
        }

        Ok(())
    }

    /// Checks everything except the motion model.
    pub(crate) fn validate_timing(&self) -> Result<()> {
        if !positive(self.tolerance) {
            return Err(invalid("tolerance", "must be positive and finite"));
        }
        if self.max_step.is_zero() {
            return Err(invalid("max_step", "must be positive"));
        }
        if self.tick_period.is_zero() {
            return Err(invalid("tick_period", "must be positive"));
        }
        if !non_negative(self.stroke.width) {
            return Err(invalid("stroke.width", "must be finite and not negative"));
        }
        if !non_negative(self.outer_margin) {
            return Err(invalid("outer_margin", "must be finite and not negative"));
        }
        Ok(())
    }
}

impl Default for BorderConfig {
    fn default() -> Self {
        Self::spring()
    }
}

fn positive(value: f32) -> bool {
    value.is_finite() && value > 0.0
}

fn non_negative(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}

fn invalid(field: &'static str, reason: &'static str) -> Error {
    Error::InvalidConfig { field, reason }
}
