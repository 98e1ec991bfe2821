//! The expanding border widget.
//!
//! An [`ExpandingBorder`] strokes a rectangle inside its host surface. A press
//! sends the outline toward the outer rectangle; a release sends it back to
//! the padded resting rectangle. Either can arrive mid-flight: the points keep
//! their current positions and simply head somewhere else.
//!
//! # Example
//!
//! ```ignore
//! let mut registry = BorderRegistry::new();
//! let id = registry.insert(ExpandingBorder::new(BorderConfig::spring(), surface)?);
//! registry.measure_all(Instant::now());
//!
//! registry.dispatch(id, &Event::PressStart, Instant::now(), &mut scheduler);
//! // the scheduler calls registry.tick(id, now, &mut scheduler) until it stops
//! ```

use std::time::Instant;

use crate::animation::MotionStrategy;
use crate::config::{BorderConfig, Stroke};
use crate::driver::{Animator, DriverState, TickOutcome};
use crate::error::Result;
use crate::geometry::{Padding, Rect};
use crate::registry::BorderId;
use crate::scheduler::Scheduler;
use crate::shape::{Outline, Shape};

/// The host drawing surface a border lives on.
pub trait RenderSurface {
    /// Ask for a repaint. Hosts are free to coalesce requests.
    fn request_redraw(&mut self);

    /// Full container bounds.
    fn bounds(&self) -> Rect;

    /// Padding between the container edge and its content.
    fn content_margins(&self) -> Padding;
}

/// Input delivered by the host.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    /// Pointer or finger went down on the border
    PressStart,
    /// Pointer or finger was lifted
    PressEnd,
    /// Pointer moved while over the border
    Move { x: f32, y: f32 },
    /// Gesture was taken over by someone else
    Cancel,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResponse {
    Ignored,
    Handled,
}

pub struct ExpandingBorder {
    config: BorderConfig,
    strategy: Box<dyn MotionStrategy>,
    surface: Box<dyn RenderSurface>,
    /// `None` until the first measure
    shape: Option<Shape>,
    animator: Animator,
    is_pressed: bool,
}

impl ExpandingBorder {
    /// Border animated by the motion model named in `config`.
    pub fn new(config: BorderConfig, surface: impl RenderSurface + 'static) -> Result<Self> {
        config.validate()?;
        let strategy = Box::new(config.motion);
        Ok(Self::build(config, strategy, Box::new(surface)))
    }

    /// Border animated by a custom strategy. `config.motion` is not used.
    pub fn with_strategy(
        config: BorderConfig,
        strategy: Box<dyn MotionStrategy>,
        surface: impl RenderSurface + 'static,
    ) -> Result<Self> {
        config.validate_timing()?;
        Ok(Self::build(config, strategy, Box::new(surface)))
    }

    fn build(
        config: BorderConfig,
        strategy: Box<dyn MotionStrategy>,
        surface: Box<dyn RenderSurface>,
    ) -> Self {
        Self {
            config,
            strategy,
            surface,
            shape: None,
            animator: Animator::new(BorderId::placeholder()),
            is_pressed: false,
        }
    }

    pub(crate) fn bind(&mut self, id: BorderId) {
        self.animator.bind(id);
    }

    /// Registry id, or [`BorderId::placeholder`] while unregistered.
    pub fn id(&self) -> BorderId {
        self.animator.border()
    }

    /// Get the configuration the border was built with
    pub fn config(&self) -> &BorderConfig {
        &self.config
    }

    /// How the host should stroke the outline
    pub fn stroke(&self) -> &Stroke {
        &self.config.stroke
    }

    /// Whether a tick is pending
    pub fn state(&self) -> DriverState {
        self.animator.state()
    }

    /// Check if the last handled event was a press
    pub fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    /// Animated points, or `None` before the first measure.
    pub fn shape(&self) -> Option<&Shape> {
        self.shape.as_ref()
    }

    /// Current outline to stroke, or `None` before the first measure.
    pub fn outline(&self) -> Option<Outline> {
        self.shape.as_ref().map(Shape::outline)
    }

    /// Lay the outline out at rest on the padded content rectangle.
    ///
    /// Any motion in flight is dropped. A tick still pending afterwards finds
    /// every point arrived and lets the animator go idle.
    pub fn measure(&mut self, now: Instant) {
        let bounds = self.surface.bounds();
        let margins = self.surface.content_margins();
        log::debug!(
            "border {:?}: measured {}x{} with margins {:?}",
            self.id(),
            bounds.width,
            bounds.height,
            margins
        );
        self.shape = Some(Shape::resting(bounds, margins, now));
    }

    /// Route a host event to [`press`](Self::press) or [`release`](Self::release).
    pub fn event(
        &mut self,
        event: &Event,
        now: Instant,
        scheduler: &mut dyn Scheduler,
    ) -> EventResponse {
        match event {
            Event::PressStart => self.press(now, scheduler),
            Event::PressEnd => self.release(now, scheduler),
            Event::Move { .. } | Event::Cancel => EventResponse::Ignored,
        }
    }

    /// Head for the expanded outline.
    ///
    /// Ignored until the border is registered and measured.
    pub fn press(&mut self, now: Instant, scheduler: &mut dyn Scheduler) -> EventResponse {
        let bounds = self.surface.bounds();
        let outer_inset = self.config.outer_inset();
        if self.id().is_placeholder() {
            log::debug!("press on unregistered border ignored");
            return EventResponse::Ignored;
        }
        let Some(shape) = self.shape.as_mut() else {
            log::debug!("border {:?}: press before measure ignored", self.animator.border());
            return EventResponse::Ignored;
        };

        log::debug!("border {:?}: expanding", self.animator.border());
        shape.expand(bounds, outer_inset, now, &*self.strategy);
        self.is_pressed = true;
        self.animator.start(scheduler);
        EventResponse::Handled
    }

    /// Head back to the resting outline.
    ///
    /// Ignored until the border is registered and measured.
    pub fn release(&mut self, now: Instant, scheduler: &mut dyn Scheduler) -> EventResponse {
        let bounds = self.surface.bounds();
        let margins = self.surface.content_margins();
        if self.id().is_placeholder() {
            log::debug!("release on unregistered border ignored");
            return EventResponse::Ignored;
        }
        let Some(shape) = self.shape.as_mut() else {
            log::debug!("border {:?}: release before measure ignored", self.animator.border());
            return EventResponse::Ignored;
        };

        log::debug!("border {:?}: contracting", self.animator.border());
        shape.contract(bounds, margins, now, &*self.strategy);
        self.is_pressed = false;
        self.animator.start(scheduler);
        EventResponse::Handled
    }

    /// One animation tick, normally invoked by the scheduler.
    ///
    /// A border outside any registry has no id to post under, so its ticks
    /// are [`TickOutcome::Discarded`].
    pub fn tick(&mut self, now: Instant, scheduler: &mut dyn Scheduler) -> TickOutcome {
        if self.id().is_placeholder() {
            return TickOutcome::Discarded;
        }
        let Some(shape) = self.shape.as_mut() else {
            return TickOutcome::Finished;
        };
        self.animator.run(
            shape,
            &self.config,
            &*self.strategy,
            &mut *self.surface,
            scheduler,
            now,
        )
    }
}

impl std::fmt::Debug for ExpandingBorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ExpandingBorder")
            .field("id", &self.id())
            .field("strategy", &self.strategy)
            .field("state", &self.state())
            .field("is_pressed", &self.is_pressed)
            .field("outline", &self.outline())
            .finish()
    }
}
