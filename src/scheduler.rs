//! Tick scheduling.
//!
//! The animator only ever asks for three things: run a tick now, run one
//! after a delay, or drop the pending one. [`Scheduler`] is that contract.
//!
//! Two back-ends ship with the crate:
//!
//! - [`TickQueue`] keeps deadlines on a virtual clock that the caller moves
//!   forward. Tests and headless hosts use it to step animations
//!   deterministically.
//! - [`CalloopScheduler`] registers real `calloop` timers, one per pending
//!   tick, and runs the tick from the event loop.

use std::collections::HashMap;
use std::time::{Duration, Instant};

use calloop::timer::{TimeoutAction, Timer};
use calloop::{LoopHandle, RegistrationToken};

use crate::error::Error;
use crate::registry::{BorderId, BorderRegistry};

/// Timer facility the animator posts its ticks to.
///
/// A border has at most one pending tick: the animator always cancels before
/// posting a replacement.
pub trait Scheduler {
    /// Run the tick for `border` as soon as possible.
    fn post_now(&mut self, border: BorderId);

    /// Run the tick for `border` once `delay` has passed.
    fn post_delayed(&mut self, border: BorderId, delay: Duration);

    /// Drop the pending tick for `border`, if there is one.
    fn cancel(&mut self, border: BorderId);
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct PendingTick {
    deadline: Instant,
    border: BorderId,
}

/// Virtual-time tick queue.
///
/// Deadlines are measured from the queue's own clock, which only moves when
/// [`TickQueue::take_due`] is called.
#[derive(Debug)]
pub struct TickQueue {
    now: Instant,
    pending: Vec<PendingTick>,
}

impl TickQueue {
    pub fn new(now: Instant) -> Self {
        Self {
            now,
            pending: Vec::new(),
        }
    }

    /// Current virtual time.
    pub fn now(&self) -> Instant {
        self.now
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn is_scheduled(&self, border: BorderId) -> bool {
        self.pending.iter().any(|tick| tick.border == border)
    }

    /// Earliest pending deadline.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|tick| tick.deadline).min()
    }

    /// Move the clock to `now` (never backwards) and hand back every tick
    /// due by then, earliest first.
    pub fn take_due(&mut self, now: Instant) -> Vec<BorderId> {
        self.now = self.now.max(now);
        let clock = self.now;

        let (mut due, pending): (Vec<_>, Vec<_>) = self
            .pending
            .drain(..)
            .partition(|tick| tick.deadline <= clock);
        self.pending = pending;

        due.sort_by_key(|tick| tick.deadline);
        due.into_iter().map(|tick| tick.border).collect()
    }

    /// Keep firing ticks, jumping the clock from deadline to deadline, until
    /// nothing is pending or `limit` ticks have run. Returns the tick count.
    pub fn run_until_idle(&mut self, registry: &mut BorderRegistry, limit: usize) -> usize {
        let mut ticks = 0;
        while let Some(deadline) = self.next_deadline() {
            for border in self.take_due(deadline) {
                registry.tick(border, deadline, self);
                ticks += 1;
            }
            if ticks >= limit {
                log::warn!("tick queue still busy after {} ticks", ticks);
                break;
            }
        }
        ticks
    }

    fn push(&mut self, border: BorderId, deadline: Instant) {
        self.pending.push(PendingTick { deadline, border });
    }
}

impl Scheduler for TickQueue {
    fn post_now(&mut self, border: BorderId) {
        self.push(border, self.now);
    }

    fn post_delayed(&mut self, border: BorderId, delay: Duration) {
        self.push(border, self.now + delay);
    }

    fn cancel(&mut self, border: BorderId) {
        self.pending.retain(|tick| tick.border != border);
    }
}

/// Event loop state that owns the borders ticked by a [`CalloopScheduler`].
pub trait TimerHost: Sized + 'static {
    fn split(&mut self) -> (&mut BorderRegistry, &mut CalloopScheduler<Self>);
}

/// Scheduler backed by `calloop` timers.
pub struct CalloopScheduler<D> {
    handle: LoopHandle<'static, D>,
    timers: HashMap<BorderId, RegistrationToken>,
}

impl<D: TimerHost> CalloopScheduler<D> {
    pub fn new(handle: LoopHandle<'static, D>) -> Self {
        Self {
            handle,
            timers: HashMap::new(),
        }
    }

    pub fn is_scheduled(&self, border: BorderId) -> bool {
        self.timers.contains_key(&border)
    }

    pub fn is_idle(&self) -> bool {
        self.timers.is_empty()
    }

    fn schedule(&mut self, border: BorderId, timer: Timer) {
        // One timer per border; a replacement drops the old one.
        self.cancel(border);

        let inserted = self
            .handle
            .insert_source(timer, move |_deadline, _, data: &mut D| {
                let (registry, scheduler) = data.split();
                scheduler.timers.remove(&border);
                registry.tick(border, Instant::now(), scheduler);
                TimeoutAction::Drop
            });

        match inserted {
            Ok(token) => {
                self.timers.insert(border, token);
            }
            Err(err) => {
                log::error!("border {:?}: {}", border, Error::from(err.error));
            }
        }
    }
}

impl<D: TimerHost> Scheduler for CalloopScheduler<D> {
    fn post_now(&mut self, border: BorderId) {
        self.schedule(border, Timer::immediate());
    }

    fn post_delayed(&mut self, border: BorderId, delay: Duration) {
        self.schedule(border, Timer::from_duration(delay));
    }

    fn cancel(&mut self, border: BorderId) {
        if let Some(token) = self.timers.remove(&border) {
            self.handle.remove(token);
        }
    }
}

/// Ready-made event loop state: a registry plus the scheduler ticking it.
pub struct BorderHost {
    pub registry: BorderRegistry,
    pub scheduler: CalloopScheduler<BorderHost>,
}

impl BorderHost {
    pub fn new(handle: LoopHandle<'static, BorderHost>) -> Self {
        Self {
            registry: BorderRegistry::new(),
            scheduler: CalloopScheduler::new(handle),
        }
    }
}

impl TimerHost for BorderHost {
    fn split(&mut self) -> (&mut BorderRegistry, &mut CalloopScheduler<Self>) {
        (&mut self.registry, &mut self.scheduler)
    }
}
