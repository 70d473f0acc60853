//! The marker enrichment pipeline.
//!
//! Given the current coordinate sequence, produce a marker sequence of
//! identical length and matching order, where each element carries the result
//! of an independent reverse-geocoding lookup for that position. Lookups run
//! concurrently; a failed or unmatched lookup leaves its own marker without
//! place details and never disturbs its siblings.
//!
//! Every store change triggers a full recompute of the whole list — there is
//! no incremental re-enrichment of only the changed positions. Acceptable at
//! this scale; stale overlapping recomputes are handled one level up by the
//! session's generation check.

use std::future::Future;

use futures::stream::{self, StreamExt};
use waypost_core::{AppConfig, Coordinate, LocationInfo, MarkerInfo};

use crate::client::GeocodeClient;
use crate::error::GeocodeError;
use crate::retry::retry_with_backoff;

/// Fans out one `lookup` call per coordinate, at most `max_concurrent` in
/// flight, and collects the results in input order.
///
/// Output order strictly matches input order by position regardless of the
/// order in which individual calls resolve. A lookup error is logged and
/// contained to its own position (`location: None`); this function itself
/// never fails. Successful lookups are stamped with the completion wall-clock
/// time.
pub async fn enrich_all<F, Fut>(
    coordinates: &[Coordinate],
    max_concurrent: usize,
    lookup: F,
) -> Vec<MarkerInfo>
where
    F: Fn(Coordinate) -> Fut,
    Fut: Future<Output = Result<Option<LocationInfo>, GeocodeError>>,
{
    let lookup = &lookup;
    stream::iter(coordinates.iter().copied().enumerate())
        .map(|(position, coordinate)| async move {
            let location = match lookup(coordinate).await {
                Ok(Some(mut info)) => {
                    info.timestamp = Some(completion_timestamp());
                    Some(info)
                }
                Ok(None) => {
                    tracing::debug!(position, "no geocoding match for coordinate");
                    None
                }
                Err(err) => {
                    tracing::warn!(
                        position,
                        error = %err,
                        "enrichment lookup failed, marker will carry no place details"
                    );
                    None
                }
            };
            MarkerInfo::new(coordinate, location)
        })
        // `buffered` (unlike `buffer_unordered`) yields results in input order.
        .buffered(max_concurrent.max(1))
        .collect()
        .await
}

fn completion_timestamp() -> String {
    chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}

/// Production binding of the pipeline to the [`GeocodeClient`] and the
/// retry policy from [`AppConfig`].
pub struct MarkerEnricher {
    client: GeocodeClient,
    max_concurrent: usize,
    max_retries: u32,
    backoff_base_ms: u64,
}

impl MarkerEnricher {
    #[must_use]
    pub fn new(client: GeocodeClient, config: &AppConfig) -> Self {
        Self {
            client,
            max_concurrent: config.max_concurrent_lookups,
            max_retries: config.max_retries,
            backoff_base_ms: config.retry_backoff_base_ms,
        }
    }

    /// Runs one full enrichment batch over `coordinates`, retrying transient
    /// failures per lookup before giving up on that position.
    pub async fn enrich_all(&self, coordinates: &[Coordinate]) -> Vec<MarkerInfo> {
        enrich_all(coordinates, self.max_concurrent, |coordinate| {
            retry_with_backoff(self.max_retries, self.backoff_base_ms, move || {
                self.client.reverse_geocode(coordinate)
            })
        })
        .await
    }
}
