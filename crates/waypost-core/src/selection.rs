//! Which marker is currently open for detail display.
//!
//! Selection is derived, never authoritative: it holds a copy of the marker
//! taken at click time, so it does not automatically track re-enrichment of
//! the same position. Callers re-derive it via [`Selection::resync`] after a
//! pipeline recompute when live data is required.

use crate::types::{MarkerInfo, SelectedMarker};

/// Transient UI selection state over a derived marker list.
#[derive(Debug, Clone, Default)]
pub struct Selection {
    current: Option<SelectedMarker>,
}

impl Selection {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects the marker at `index`, copying it out of `markers`.
    ///
    /// Out-of-range indices leave the selection untouched and return `None`.
    pub fn select(&mut self, markers: &[MarkerInfo], index: usize) -> Option<&SelectedMarker> {
        if let Some(marker) = markers.get(index) {
            self.current = Some(SelectedMarker {
                index,
                marker: marker.clone(),
            });
        } else {
            return None;
        }
        self.current.as_ref()
    }

    pub fn deselect(&mut self) {
        self.current = None;
    }

    #[must_use]
    pub fn current(&self) -> Option<&SelectedMarker> {
        self.current.as_ref()
    }

    /// Re-derives the held copy from a fresh marker list after a recompute.
    ///
    /// Clears the selection when the selected index no longer exists.
    pub fn resync(&mut self, markers: &[MarkerInfo]) {
        if let Some(selected) = &mut self.current {
            match markers.get(selected.index) {
                Some(marker) => selected.marker = marker.clone(),
                None => self.current = None,
            }
        }
    }
}
