//! Tick loop for one border.
//!
//! The animator is a two-state machine. A press or release moves it to
//! [`DriverState::Running`] by cancelling whatever tick was pending and posting
//! an immediate one. Each tick advances the shape, asks the host to redraw and
//! either posts the next tick or drops back to [`DriverState::Idle`].

use std::time::Instant;

use crate::animation::MotionStrategy;
use crate::border::RenderSurface;
use crate::config::BorderConfig;
use crate::registry::BorderId;
use crate::scheduler::Scheduler;
use crate::shape::Shape;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DriverState {
    /// No tick pending
    #[default]
    Idle,
    /// A tick is pending
    Running,
}

/// Result of a single tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickOutcome {
    /// Points still moving, next tick posted
    Continue,
    /// Every point arrived, nothing posted
    Finished,
    /// The border no longer exists; nothing touched
    Discarded,
}

/// Drives the ticks of one border.
///
/// Holds the border's [`BorderId`] rather than the border itself, so a tick
/// that outlives its border resolves to [`TickOutcome::Discarded`].
#[derive(Debug)]
pub struct Animator {
    border: BorderId,
    state: DriverState,
}

impl Animator {
    /// Create an idle animator posting ticks for `border`
    pub fn new(border: BorderId) -> Self {
        Self {
            border,
            state: DriverState::Idle,
        }
    }

    /// Id the ticks are posted under
    pub fn border(&self) -> BorderId {
        self.border
    }

    pub(crate) fn bind(&mut self, border: BorderId) {
        self.border = border;
    }

    /// Get the current state
    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Check if a tick is pending
    pub fn is_running(&self) -> bool {
        self.state == DriverState::Running
    }

    /// Restart ticking after the shape was retargeted.
    pub fn start(&mut self, scheduler: &mut dyn Scheduler) {
        scheduler.cancel(self.border);
        scheduler.post_now(self.border);
        self.state = DriverState::Running;
    }

    /// Advance every point once and decide whether to keep going.
    pub fn run(
        &mut self,
        shape: &mut Shape,
        config: &BorderConfig,
        strategy: &dyn MotionStrategy,
        surface: &mut dyn RenderSurface,
        scheduler: &mut dyn Scheduler,
        now: Instant,
    ) -> TickOutcome {
        shape.advance(now, config.max_step, strategy);
        surface.request_redraw();

        if shape.is_finished(config.tolerance) {
            log::debug!("border {:?}: animation finished", self.border);
            self.state = DriverState::Idle;
            TickOutcome::Finished
        } else {
            log::trace!(
                "border {:?}: next tick in {:?}",
                self.border,
                config.tick_period
            );
            scheduler.post_delayed(self.border, config.tick_period);
            self.state = DriverState::Running;
            TickOutcome::Continue
        }
    }
}
