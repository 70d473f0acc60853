//! Application session for the waypost coordinate tracker.
//!
//! Ties the canonical [`waypost_core::CoordinateStore`] to the enrichment
//! pipeline in `waypost-geocode` and to the selection state, with
//! generation-stamped recompute so overlapping enrichment batches can never
//! clobber each other — only the most recently requested batch is applied.

mod session;

pub use session::{MapSession, RefreshBatch};
