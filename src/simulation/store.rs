//! Growable body store with explicit capacity bookkeeping.
//!
//! `BodyStore` owns every body slot plus id allocation. Capacity follows
//! the classic amortized scheme: double when an insert hits the limit,
//! halve on sanitize once occupancy drops under a quarter, floored at
//! [`DEFAULT_CAPACITY`]. The backing buffer never holds fewer slots than
//! the policy capacity, so inserts below the limit cannot reallocate.

use std::collections::TryReserveError;

use thiserror::Error;

use crate::simulation::states::{Body, BodyId, NVec2};

/// Slot count a fresh store starts with, and the shrink floor.
pub const DEFAULT_CAPACITY: usize = 8;

/// Errors surfaced by store mutations.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Capacity growth could not obtain memory. The insert was rejected,
    /// no id was consumed and the store keeps its previous capacity.
    #[error("failed to grow body store beyond {cap} slots: {source}")]
    Grow {
        cap: usize,
        source: TryReserveError,
    },
}

#[derive(Debug)]
pub struct BodyStore {
    bodies: Vec<Body>,
    cap: usize, // policy capacity; the Vec may round its own up
    next_id: u32,
}

impl BodyStore {
    pub fn new() -> Self {
        Self {
            bodies: Vec::with_capacity(DEFAULT_CAPACITY),
            cap: DEFAULT_CAPACITY,
            next_id: 1,
        }
    }

    /// Append a new live body and return its freshly allocated id.
    ///
    /// A full store doubles its capacity first; the reservation is
    /// fallible and a failed growth leaves the store untouched.
    pub fn insert(
        &mut self,
        mass: f64,
        radius: f64,
        position: NVec2,
        velocity: NVec2,
        color: u32,
    ) -> Result<BodyId, StoreError> {
        if self.bodies.len() == self.cap {
            let grown = self.cap * 2;
            self.bodies
                .try_reserve_exact(grown - self.bodies.len())
                .map_err(|source| StoreError::Grow {
                    cap: self.cap,
                    source,
                })?;
            self.cap = grown;
        }

        let id = BodyId(self.next_id);
        self.next_id += 1;
        self.bodies.push(Body {
            id,
            alive: true,
            mass,
            radius,
            position,
            velocity,
            color,
        });
        Ok(id)
    }

    /// Linear scan by id. Absence is not an error; dead slots that have
    /// not been compacted yet are still found.
    pub fn find(&self, id: BodyId) -> Option<&Body> {
        self.bodies.iter().find(|b| b.id == id)
    }

    /// Mark the matching body dead. Returns `false` when the id is
    /// unknown so the caller can report the miss.
    pub fn mark_dead(&mut self, id: BodyId) -> bool {
        match self.bodies.iter_mut().find(|b| b.id == id) {
            Some(body) => {
                body.alive = false;
                true
            }
            None => false,
        }
    }

    /// Compact dead slots out, preserving the relative order of the
    /// survivors, then let capacity decay: one halving per pass when the
    /// live count is below a quarter of capacity, never under the default.
    pub fn sanitize(&mut self) {
        self.bodies.retain(|b| b.alive);
        if self.bodies.len() < self.cap / 4 && self.cap / 2 >= DEFAULT_CAPACITY {
            self.cap /= 2;
            self.bodies.shrink_to(self.cap);
        }
    }

    /// Drop every body and reset capacity to the default. The id counter
    /// keeps running; cleared ids are never handed out again.
    pub fn clear_all(&mut self) {
        self.bodies.clear();
        self.bodies.shrink_to(DEFAULT_CAPACITY);
        self.cap = DEFAULT_CAPACITY;
    }

    /// First live body whose circle contains `point`.
    pub fn body_at(&self, point: NVec2) -> Option<BodyId> {
        self.bodies
            .iter()
            .filter(|b| b.alive)
            .find(|b| b.contains(point))
            .map(|b| b.id)
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    pub fn live_count(&self) -> usize {
        self.bodies.iter().filter(|b| b.alive).count()
    }

    pub fn capacity(&self) -> usize {
        self.cap
    }

    pub fn slots(&self) -> &[Body] {
        &self.bodies
    }

    pub(crate) fn slots_mut(&mut self) -> &mut [Body] {
        &mut self.bodies
    }
}

impl Default for BodyStore {
    fn default() -> Self {
        Self::new()
    }
}
