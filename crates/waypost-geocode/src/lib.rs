//! Reverse geocoding and the marker enrichment pipeline.
//!
//! [`GeocodeClient`] wraps the external geocoding HTTP service with typed
//! response deserialization; [`enrich_all`] fans out one lookup per stored
//! coordinate and reconciles the results into an order-stable marker list,
//! tolerating individual failures. [`MarkerEnricher`] binds the two together
//! with the retry policy from the application config.

mod client;
mod error;
mod extract;
mod pipeline;
mod retry;
mod types;

pub use client::GeocodeClient;
pub use error::GeocodeError;
pub use pipeline::{enrich_all, MarkerEnricher};
pub use types::{AddressComponent, GeocodeResponse, GeocodeResult};
