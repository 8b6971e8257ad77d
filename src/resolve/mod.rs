//! Location resolution: free-text queries to validated candidates
//!
//! One resolver abstraction covers every backend variant: the in-memory
//! gazetteer, the JSON-backed gazetteer, and the live geocoding provider
//! all implement [`CandidateSource`]. The [`Resolver`] wraps a source with
//! a lookup timeout, last-query-wins sequencing, and a final coordinate
//! validation gate, so the viewport layer never sees invalid data.

pub mod gazetteer;
#[cfg(feature = "geocoding")]
pub mod nominatim;

use crate::core::geo::{LatLng, LatLngBounds};
use crate::{Error, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// Default bound on a single candidate lookup
pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(8);

/// A resolved, validated location ready for map display
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candidate {
    /// Human-readable label for the location
    pub label: String,
    /// The location's point coordinate
    pub position: LatLng,
    /// Optional extent, present when the provider knows the feature's size
    pub bounds: Option<LatLngBounds>,
}

impl Candidate {
    /// Creates a point candidate without an extent
    pub fn point(label: impl Into<String>, position: LatLng) -> Self {
        Self {
            label: label.into(),
            position,
            bounds: None,
        }
    }

    /// Attaches a bounding box to the candidate
    pub fn with_bounds(mut self, bounds: LatLngBounds) -> Self {
        self.bounds = Some(bounds);
        self
    }

    /// Validates the position and, when present, the bounds
    pub fn is_valid(&self) -> bool {
        self.position.is_valid() && self.bounds.as_ref().map_or(true, LatLngBounds::is_valid)
    }
}

/// Outcome of a [`Resolver::resolve`] call
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// The query resolved to a candidate
    Found(Candidate),
    /// The source answered cleanly but had no match
    NotFound,
    /// A newer resolve call was issued before this one finished; the
    /// result must be discarded by the caller
    Superseded,
}

/// Trait representing anything that can turn a query into a candidate.
///
/// `Ok(None)` means the source answered and found nothing; `Err` means the
/// lookup itself failed. Callers must keep the two apart.
#[async_trait]
pub trait CandidateSource: Send + Sync {
    /// Resolve a free-text query to at most one candidate
    async fn locate(&self, query: &str) -> Result<Option<Candidate>>;
}

/// Resolves queries through a [`CandidateSource`], adding timeout handling
/// and last-query-wins sequencing on top.
pub struct Resolver {
    source: Arc<dyn CandidateSource>,
    seq: AtomicU64,
    timeout: Duration,
}

impl Resolver {
    /// Create a resolver over the given source with the default timeout
    pub fn new(source: Arc<dyn CandidateSource>) -> Self {
        Self {
            source,
            seq: AtomicU64::new(0),
            timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    /// Bound each lookup by `timeout` instead of the default
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Resolve a query against the source.
    ///
    /// Each call takes a ticket from a monotonically increasing sequence.
    /// When the source answers, a result whose ticket is no longer the
    /// latest — success or failure — is reported as
    /// [`Resolution::Superseded`] so a stale response can never move the
    /// map after a newer query.
    pub async fn resolve(&self, query: &str) -> Result<Resolution> {
        let ticket = self.seq.fetch_add(1, Ordering::SeqCst) + 1;
        log::debug!("resolve #{ticket}: {query:?}");

        let outcome = tokio::time::timeout(self.timeout, self.source.locate(query)).await;

        if self.seq.load(Ordering::SeqCst) != ticket {
            log::debug!("resolve #{ticket}: superseded, discarding result");
            return Ok(Resolution::Superseded);
        }

        let candidate = match outcome {
            Err(_) => {
                log::warn!("resolve #{ticket}: timed out after {:?}", self.timeout);
                return Err(Error::Timeout(self.timeout));
            }
            Ok(Err(err)) => return Err(err),
            Ok(Ok(None)) => return Ok(Resolution::NotFound),
            Ok(Ok(Some(candidate))) => candidate,
        };

        if !candidate.is_valid() {
            log::warn!("resolve #{ticket}: rejected candidate {:?}", candidate.label);
            return Err(Error::InvalidCoordinates(format!(
                "candidate {:?} at ({}, {}) failed range validation",
                candidate.label, candidate.position.lat, candidate.position.lng
            )));
        }

        Ok(Resolution::Found(candidate))
    }
}
