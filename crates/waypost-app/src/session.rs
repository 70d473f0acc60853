//! The application session: store, derived markers, and selection.
//!
//! The store is the single source of truth; the marker list is a disposable
//! cache regenerated by a full pipeline run after every mutation. A view
//! layer drives this type: form submits call [`MapSession::add`], the table
//! and popup delete paths both call [`MapSession::remove`] /
//! [`MapSession::delete_selected`], and marker clicks call
//! [`MapSession::select`].
//!
//! Recomputes are generation-stamped: [`MapSession::snapshot`] captures the
//! inputs and the store generation, and [`MapSession::apply`] installs the
//! results only if the store has not changed since. A slow batch from before
//! a rapid edit is discarded instead of overwriting the newer one
//! (last-triggered wins, never last-to-resolve).

use waypost_core::{
    validate, Bounds, Coordinate, CoordinateStore, MarkerInfo, SelectedMarker, Selection,
    ValidationError,
};
use waypost_geocode::MarkerEnricher;

/// The coordinate inputs for one enrichment run, stamped with the store
/// generation they were captured at.
#[derive(Debug, Clone)]
pub struct RefreshBatch {
    pub generation: u64,
    pub coordinates: Vec<Coordinate>,
}

/// Owns the canonical coordinate list, the derived marker list, and the
/// current selection.
#[derive(Debug, Default)]
pub struct MapSession {
    store: CoordinateStore,
    markers: Vec<MarkerInfo>,
    selection: Selection,
    bounds: Bounds,
}

impl MapSession {
    #[must_use]
    pub fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            ..Self::default()
        }
    }

    /// Creates a session seeded with `coordinates`. The marker list starts
    /// empty; run a refresh to populate it.
    #[must_use]
    pub fn seeded(coordinates: Vec<Coordinate>, bounds: Bounds) -> Self {
        Self {
            store: CoordinateStore::seeded(coordinates),
            markers: Vec::new(),
            selection: Selection::new(),
            bounds,
        }
    }

    /// Validates the raw form inputs and appends the coordinate on success.
    ///
    /// # Errors
    ///
    /// Returns the [`ValidationError`] for user-facing messaging; nothing is
    /// added to the store in that case.
    pub fn add(&mut self, raw_lat: &str, raw_lng: &str) -> Result<Coordinate, ValidationError> {
        let coordinate = validate(raw_lat, raw_lng, &self.bounds)?;
        self.store.push(coordinate);
        Ok(coordinate)
    }

    /// Removes the coordinate at `index` (no-op when out of range).
    ///
    /// Both the table row delete and the popup delete route through here so
    /// the two views stay consistent. Any successful removal invalidates
    /// position-keyed state, so the selection is cleared.
    pub fn remove(&mut self, index: usize) {
        let before = self.store.generation();
        self.store.remove_at(index);
        if self.store.generation() != before {
            self.selection.deselect();
        }
    }

    /// Popup delete: removes the selected marker's coordinate and clears the
    /// selection. No-op when nothing is selected.
    pub fn delete_selected(&mut self) {
        let Some(index) = self.selection.current().map(|s| s.index) else {
            return;
        };
        self.remove(index);
    }

    /// Selects the marker at `index` for detail display, copying it out of
    /// the current marker list.
    pub fn select(&mut self, index: usize) -> Option<&SelectedMarker> {
        self.selection.select(&self.markers, index)
    }

    pub fn deselect(&mut self) {
        self.selection.deselect();
    }

    #[must_use]
    pub fn selected(&self) -> Option<&SelectedMarker> {
        self.selection.current()
    }

    #[must_use]
    pub fn coordinates(&self) -> &[Coordinate] {
        self.store.coordinates()
    }

    /// The derived marker list as of the last applied refresh.
    #[must_use]
    pub fn markers(&self) -> &[MarkerInfo] {
        &self.markers
    }

    /// Captures the inputs for one full enrichment recompute.
    #[must_use]
    pub fn snapshot(&self) -> RefreshBatch {
        RefreshBatch {
            generation: self.store.generation(),
            coordinates: self.store.coordinates().to_vec(),
        }
    }

    /// Installs the markers produced for the batch taken at `generation`.
    ///
    /// Returns `false` and discards the batch when the store has mutated
    /// since the snapshot — a newer batch is (or will be) in flight for the
    /// current contents. On a successful apply the selection is re-derived
    /// from the fresh marker list.
    pub fn apply(&mut self, generation: u64, markers: Vec<MarkerInfo>) -> bool {
        if generation != self.store.generation() {
            tracing::debug!(
                batch_generation = generation,
                store_generation = self.store.generation(),
                "discarding stale enrichment batch"
            );
            return false;
        }
        debug_assert_eq!(markers.len(), self.store.len());
        self.markers = markers;
        self.selection.resync(&self.markers);
        true
    }

    /// Convenience: snapshot, run the full pipeline, apply.
    ///
    /// Returns `true` when the batch was applied. Note that holding `&mut
    /// self` across the await serialises refreshes on one session; the
    /// snapshot/apply pair exists for callers that interleave mutations with
    /// in-flight batches.
    pub async fn refresh(&mut self, enricher: &MarkerEnricher) -> bool {
        let batch = self.snapshot();
        let markers = enricher.enrich_all(&batch.coordinates).await;
        self.apply(batch.generation, markers)
    }
}

#[cfg(test)]
mod tests {
    use waypost_core::LocationInfo;

    use super::*;

    fn session_abc() -> MapSession {
        MapSession::seeded(
            vec![
                Coordinate::new(40.0, -75.0), // A
                Coordinate::new(41.0, -76.0), // B
                Coordinate::new(42.0, -77.0), // C
            ],
            Bounds::CONTIGUOUS_US,
        )
    }

    fn markers_for(coordinates: &[Coordinate]) -> Vec<MarkerInfo> {
        coordinates
            .iter()
            .map(|&c| {
                MarkerInfo::new(
                    c,
                    Some(LocationInfo {
                        city: format!("city-{}", c.latitude),
                        ..LocationInfo::default()
                    }),
                )
            })
            .collect()
    }

    #[test]
    fn add_validates_before_admitting() {
        let mut session = MapSession::new(Bounds::CONTIGUOUS_US);
        assert!(session.add("40.7306", "-73.9352").is_ok());
        assert_eq!(session.coordinates().len(), 1);

        let err = session.add("abc", "-73.9352").unwrap_err();
        assert!(matches!(err, ValidationError::NotANumber { .. }));
        assert_eq!(session.coordinates().len(), 1, "store must be unchanged");

        let err = session.add("50.0", "-73.9352").unwrap_err();
        assert!(matches!(err, ValidationError::OutOfBounds { .. }));
        assert_eq!(session.coordinates().len(), 1);
    }

    #[test]
    fn apply_installs_markers_for_the_current_generation() {
        let mut session = session_abc();
        let batch = session.snapshot();
        assert!(session.apply(batch.generation, markers_for(&batch.coordinates)));
        assert_eq!(session.markers().len(), 3);
    }

    #[test]
    fn stale_batch_is_discarded_after_a_mutation() {
        let mut session = session_abc();
        let old_batch = session.snapshot();
        let old_markers = markers_for(&old_batch.coordinates);

        // The store mutates while the old batch is "in flight".
        session.remove(1);
        let new_batch = session.snapshot();
        let new_markers = markers_for(&new_batch.coordinates);
        assert!(session.apply(new_batch.generation, new_markers));
        assert_eq!(session.markers().len(), 2);

        // The slow old batch resolves last and must be thrown away.
        assert!(!session.apply(old_batch.generation, old_markers));
        assert_eq!(session.markers().len(), 2, "stale batch must not overwrite");
    }

    #[test]
    fn removal_clears_the_selection() {
        let mut session = session_abc();
        let batch = session.snapshot();
        session.apply(batch.generation, markers_for(&batch.coordinates));

        session.select(1);
        assert!(session.selected().is_some());

        session.remove(1);
        assert!(session.selected().is_none());
    }

    #[test]
    fn out_of_range_removal_keeps_the_selection() {
        let mut session = session_abc();
        let batch = session.snapshot();
        session.apply(batch.generation, markers_for(&batch.coordinates));

        session.select(0);
        session.remove(99);
        assert!(session.selected().is_some());
    }

    #[test]
    fn delete_selected_removes_the_underlying_coordinate() {
        let mut session = session_abc();
        let batch = session.snapshot();
        session.apply(batch.generation, markers_for(&batch.coordinates));

        session.select(1);
        session.delete_selected();

        assert!(session.selected().is_none());
        assert_eq!(session.coordinates().len(), 2);
        // B is gone; the former C shifted into position 1.
        assert!((session.coordinates()[1].latitude - 42.0).abs() < f64::EPSILON);
    }

    #[test]
    fn apply_resyncs_the_selected_copy() {
        let mut session = session_abc();
        let batch = session.snapshot();
        session.apply(batch.generation, markers_for(&batch.coordinates));
        session.select(0);

        // A re-run of the same generation's inputs with richer details.
        let mut richer = markers_for(&batch.coordinates);
        richer[0].location.as_mut().unwrap().city = "Philadelphia".to_owned();
        session.apply(batch.generation, richer);

        let held = session.selected().unwrap();
        assert_eq!(held.marker.location.as_ref().unwrap().city, "Philadelphia");
    }

    #[test]
    fn select_out_of_range_is_a_noop() {
        let mut session = session_abc();
        assert!(session.select(7).is_none());
        assert!(session.selected().is_none());
    }
}
