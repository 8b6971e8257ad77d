//! Prelude module for common mapfly types and traits
//!
//! Re-exports the most commonly used types for easy importing with
//! `use mapfly::prelude::*;`

pub use crate::animation::{EasingFunction, Transition, TransitionManager, TransitionType};

pub use crate::core::{
    config::{GoToOptions, MapViewOptions},
    geo::{LatLng, LatLngBounds, Point},
    viewport::Viewport,
};

pub use crate::resolve::{
    gazetteer::{Gazetteer, GazetteerEntry},
    Candidate, CandidateSource, Resolution, Resolver, DEFAULT_LOOKUP_TIMEOUT,
};

#[cfg(feature = "geocoding")]
pub use crate::resolve::nominatim::{GeocoderOptions, NominatimGeocoder};

pub use crate::session::{SearchOutcome, SearchSession};

pub use crate::view::{
    controller::MapView,
    marker::{Marker, MarkerOverlay},
};

pub use crate::{Error, Result};

pub use std::{sync::Arc, time::Duration};
