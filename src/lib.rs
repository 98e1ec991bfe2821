//! Press-driven expanding border outlines.
//!
//! A border is a closed rectangle of five animated points. Pressing sends the
//! points toward an outer rectangle, releasing sends them back to the padded
//! resting one, and every tick in between asks the host surface to redraw.
//! The vertex motion is pluggable: a damped spring or clamped constant speed
//! ship with the crate.
//!
//! The host supplies three things: a [`RenderSurface`] to measure and redraw,
//! the press/release [`Event`]s, and a [`Scheduler`] to fire ticks.
//! [`TickQueue`] and [`CalloopScheduler`] are ready-made schedulers.

pub mod animation;
pub mod border;
pub mod config;
pub mod driver;
pub mod error;
pub mod geometry;
pub mod registry;
pub mod scheduler;
pub mod shape;

pub use border::{Event, EventResponse, ExpandingBorder, RenderSurface};
pub use config::{BorderConfig, Stroke};
pub use error::{Error, Result};
pub use registry::{BorderId, BorderRegistry};
pub use scheduler::{BorderHost, CalloopScheduler, Scheduler, TickQueue, TimerHost};

pub mod prelude {
    pub use crate::animation::{LinearConfig, Motion, MotionStrategy, Point, SpringConfig};
    pub use crate::border::{Event, EventResponse, ExpandingBorder, RenderSurface};
    pub use crate::config::{BorderConfig, Stroke};
    pub use crate::driver::{DriverState, TickOutcome};
    pub use crate::geometry::{Color, Padding, Rect};
    pub use crate::registry::{BorderId, BorderRegistry};
    pub use crate::scheduler::{BorderHost, CalloopScheduler, Scheduler, TickQueue, TimerHost};
    pub use crate::shape::{Outline, Shape};
}
