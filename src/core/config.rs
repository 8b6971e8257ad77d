//! Options structs for map sessions and view transitions
//!
//! Defaults: a view opened over Cairo at zoom 6, a 1000 ms fly at zoom 10
//! when a list entry is selected, and a shorter 500 ms fly at zoom 12 for
//! raw geocoder hits.

use crate::core::geo::{LatLng, Point};

/// Initial state and limits for a [`crate::view::controller::MapView`]
#[derive(Debug, Clone, PartialEq)]
pub struct MapViewOptions {
    /// Initial center of the view
    pub center: LatLng,
    /// Initial zoom level
    pub zoom: f64,
    /// Container size in pixels
    pub size: Point,
    pub min_zoom: f64,
    pub max_zoom: f64,
}

impl Default for MapViewOptions {
    fn default() -> Self {
        Self {
            center: LatLng::new(30.0444, 31.2357), // Cairo
            zoom: 6.0,
            size: Point::new(1024.0, 768.0),
            min_zoom: 0.0,
            max_zoom: 18.0,
        }
    }
}

impl MapViewOptions {
    /// A view opened over the whole world
    pub fn world() -> Self {
        Self {
            center: LatLng::new(0.0, 0.0),
            zoom: 2.0,
            ..Self::default()
        }
    }
}

/// Controls how the view flies to a selected candidate
#[derive(Debug, Clone, PartialEq)]
pub struct GoToOptions {
    /// Duration of the viewport transition in milliseconds
    pub animation_duration_ms: u64,
    /// Zoom level used when the candidate has no bounding box
    pub default_zoom: f64,
    /// Symmetric padding in map pixels when fitting a bounding box
    pub fit_padding: f64,
}

impl Default for GoToOptions {
    fn default() -> Self {
        Self {
            animation_duration_ms: 1000,
            default_zoom: 10.0,
            fit_padding: 40.0,
        }
    }
}

impl GoToOptions {
    /// The faster, closer fly used for raw geocoder results
    pub fn geocoded() -> Self {
        Self {
            animation_duration_ms: 500,
            default_zoom: 12.0,
            fit_padding: 40.0,
        }
    }
}
