//! Arena-based storage for live borders.
//!
//! Borders are addressed by [`BorderId`], a generational index. Timers and
//! animators hold only the id, never the border, so dropping a border from
//! the registry is enough to make every tick still in flight a no-op.
//!
//! - **Generational Indices**: `BorderId` contains index + generation, so a
//!   stale id never reaches a border allocated later in the same slot.
//! - **Dense Storage**: borders live contiguously; removal is a swap-remove.
//! - **Sparse Map**: O(1) lookup from a stable `BorderId` to its dense slot.

use std::time::Instant;

use crate::border::{Event, EventResponse, ExpandingBorder};
use crate::driver::TickOutcome;
use crate::scheduler::Scheduler;

/// Revocable handle to a border in a [`BorderRegistry`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct BorderId {
    index: u32,
    generation: u32,
}

impl BorderId {
    fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Id of a border that has not been registered yet.
    /// Never resolves to a live border.
    pub fn placeholder() -> Self {
        Self {
            index: u32::MAX,
            generation: u32::MAX,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.index == u32::MAX && self.generation == u32::MAX
    }
}

struct SparseEntry {
    dense_index: usize,
    generation: u32,
}

struct Node {
    border: ExpandingBorder,
    /// Back-pointer for swap-remove fixup
    sparse_index: u32,
}

/// Owner of every live border.
pub struct BorderRegistry {
    dense: Vec<Node>,
    sparse: Vec<Option<SparseEntry>>,
    free_indices: Vec<u32>,
}

impl BorderRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            dense: Vec::new(),
            sparse: Vec::new(),
            free_indices: Vec::new(),
        }
    }

    /// Take ownership of a border and hand back its id.
    pub fn insert(&mut self, mut border: ExpandingBorder) -> BorderId {
        let (sparse_index, generation) = if let Some(idx) = self.free_indices.pop() {
            let old_gen = self.sparse[idx as usize]
                .as_ref()
                .map(|e| e.generation)
                .unwrap_or(0);
            (idx, old_gen.wrapping_add(1))
        } else {
            let idx = self.sparse.len() as u32;
            self.sparse.push(None);
            (idx, 0)
        };

        let id = BorderId::new(sparse_index, generation);
        border.bind(id);

        let dense_index = self.dense.len();
        self.dense.push(Node {
            border,
            sparse_index,
        });
        self.sparse[sparse_index as usize] = Some(SparseEntry {
            dense_index,
            generation,
        });

        log::debug!("registered border {:?}", id);
        id
    }

    /// Discard a border. Ticks still queued for it become no-ops.
    pub fn remove(&mut self, id: BorderId) -> Option<ExpandingBorder> {
        let dense_index = self.dense_index(id)?;
        let last_dense_index = self.dense.len() - 1;

        let removed = self.dense.swap_remove(dense_index);

        if dense_index != last_dense_index {
            let moved_sparse_idx = self.dense[dense_index].sparse_index;
            if let Some(ref mut entry) = self.sparse[moved_sparse_idx as usize] {
                entry.dense_index = dense_index;
            }
        }

        // Keep the generation around for the next allocation of this slot.
        if let Some(ref mut entry) = self.sparse[id.index as usize] {
            entry.dense_index = usize::MAX;
        }
        self.free_indices.push(id.index);

        log::debug!("removed border {:?}", id);
        let mut border = removed.border;
        border.bind(BorderId::placeholder());
        Some(border)
    }

    fn dense_index(&self, id: BorderId) -> Option<usize> {
        self.sparse
            .get(id.index as usize)
            .and_then(|e| e.as_ref())
            .filter(|e| e.generation == id.generation && e.dense_index != usize::MAX)
            .map(|e| e.dense_index)
    }

    /// Check if `id` still names a live border
    pub fn contains(&self, id: BorderId) -> bool {
        self.dense_index(id).is_some()
    }

    /// Get a border by id
    pub fn get(&self, id: BorderId) -> Option<&ExpandingBorder> {
        self.dense_index(id).map(|idx| &self.dense[idx].border)
    }

    /// Get a border mutably by id
    pub fn get_mut(&mut self, id: BorderId) -> Option<&mut ExpandingBorder> {
        self.dense_index(id).map(|idx| &mut self.dense[idx].border)
    }

    /// Run the tick for `id`, or do nothing if the border is gone.
    pub fn tick(
        &mut self,
        id: BorderId,
        now: Instant,
        scheduler: &mut dyn Scheduler,
    ) -> TickOutcome {
        match self.get_mut(id) {
            Some(border) => border.tick(now, scheduler),
            None => {
                log::trace!("tick for discarded border {:?}", id);
                TickOutcome::Discarded
            }
        }
    }

    /// Deliver an input event to `id`.
    pub fn dispatch(
        &mut self,
        id: BorderId,
        event: &Event,
        now: Instant,
        scheduler: &mut dyn Scheduler,
    ) -> EventResponse {
        match self.get_mut(id) {
            Some(border) => border.event(event, now, scheduler),
            None => EventResponse::Ignored,
        }
    }

    /// Re-measure every border against its surface.
    pub fn measure_all(&mut self, now: Instant) {
        for node in &mut self.dense {
            node.border.measure(now);
        }
    }

    /// Number of live borders
    pub fn len(&self) -> usize {
        self.dense.len()
    }

    pub fn is_empty(&self) -> bool {
        self.dense.is_empty()
    }
}

impl Default for BorderRegistry {
    fn default() -> Self {
        Self::new()
    }
}
