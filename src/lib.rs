//! # Mapfly
//!
//! A headless "search a place, fly the map there" engine for interactive maps.
//!
//! Mapfly resolves free-text place queries into validated geographic
//! candidates — from an in-memory gazetteer, a JSON-backed gazetteer, or a
//! live Nominatim-style geocoding provider — and drives an animated map
//! viewport (center+zoom or fit-to-extent) with a single marker overlay.
//! Tile rendering is left to the embedding application, which reads the
//! viewport and marker state owned by this crate.

pub mod animation;
pub mod core;
pub mod prelude;
pub mod resolve;
pub mod session;
pub mod view;

// Re-export public API
pub use crate::core::{
    config::{GoToOptions, MapViewOptions},
    geo::{LatLng, LatLngBounds, Point},
    viewport::Viewport,
};

pub use crate::resolve::{
    gazetteer::{Gazetteer, GazetteerEntry},
    Candidate, CandidateSource, Resolution, Resolver,
};

#[cfg(feature = "geocoding")]
pub use crate::resolve::nominatim::{GeocoderOptions, NominatimGeocoder};

pub use crate::view::{controller::MapView, marker::Marker};

pub use crate::session::{SearchOutcome, SearchSession};

pub use crate::animation::{Transition, TransitionManager, TransitionType};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, Error>;

/// Common error types
///
/// Every variant belongs to the "search failed" family visible to callers;
/// a query that resolves cleanly to zero results is *not* an error (see
/// [`Resolution::NotFound`]).
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[cfg(feature = "geocoding")]
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("geocoding provider returned HTTP {status}")]
    Provider { status: u16 },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("lookup timed out after {0:?}")]
    Timeout(std::time::Duration),

    #[error("invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("gazetteer error: {0}")]
    Gazetteer(String),
}
