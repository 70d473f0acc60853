//! Domain types and state for the waypost coordinate tracker.
//!
//! This crate is the authoritative layer: the [`CoordinateStore`] owns the
//! canonical coordinate list, [`validate`] gates what may enter it, and
//! [`Selection`] tracks which derived marker is open for detail display.
//! Enrichment (reverse geocoding) lives in `waypost-geocode`; session
//! orchestration lives in `waypost-app`.

pub mod app_config;
pub mod config;
pub mod selection;
pub mod store;
pub mod types;
pub mod validate;

pub use app_config::AppConfig;
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use selection::Selection;
pub use store::CoordinateStore;
pub use types::{sample_coordinates, Coordinate, LocationInfo, MarkerInfo, SelectedMarker};
pub use validate::{validate, Bounds, ValidationError};
