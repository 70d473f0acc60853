//! The canonical, ordered coordinate list.
//!
//! The store is the single source of truth the rest of the system reacts to.
//! Derived structures keyed by position (the marker list, the selection) are
//! invalid after any removal — position is not a stable identity. The
//! `generation` counter exists so a derived recompute can detect that the
//! store changed under it and discard stale results.

use crate::types::Coordinate;

/// Ordered append-only-by-default sequence with positional delete.
#[derive(Debug, Clone, Default)]
pub struct CoordinateStore {
    coordinates: Vec<Coordinate>,
    generation: u64,
}

impl CoordinateStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `coordinates` (initial seeding).
    #[must_use]
    pub fn seeded(coordinates: Vec<Coordinate>) -> Self {
        Self {
            coordinates,
            generation: 0,
        }
    }

    /// Appends an already-validated coordinate. Never rejects.
    pub fn push(&mut self, coordinate: Coordinate) {
        self.coordinates.push(coordinate);
        self.generation += 1;
    }

    /// Removes the coordinate at `index`, shifting subsequent positions down
    /// by one. Out-of-range indices are a silent no-op and do not bump the
    /// generation.
    pub fn remove_at(&mut self, index: usize) {
        if index < self.coordinates.len() {
            self.coordinates.remove(index);
            self.generation += 1;
        }
    }

    #[must_use]
    pub fn coordinates(&self) -> &[Coordinate] {
        &self.coordinates
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.coordinates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    /// Monotonically increasing mutation counter. Bumped on every successful
    /// push or removal.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}
