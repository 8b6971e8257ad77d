//! The viewport controller: one live map session per mounted view
//!
//! A [`MapView`] owns the viewport state, the transition engine, and the
//! marker overlay. The embedding application constructs it once per mounted
//! view, drives it with `update` from its frame loop, and calls `detach` on
//! teardown; there is no shared init-once flag anywhere.

use crate::animation::{EasingFunction, Transition, TransitionManager, TransitionType};
use crate::core::{
    config::{GoToOptions, MapViewOptions},
    geo::Point,
    viewport::Viewport,
};
use crate::resolve::Candidate;
use crate::view::marker::{Marker, MarkerOverlay};
use crossbeam_channel::Receiver;

/// Drives an animated map viewport and its selection marker
pub struct MapView {
    viewport: Viewport,
    transitions: TransitionManager,
    markers: MarkerOverlay,
    resize_events: Option<Receiver<Point>>,
    detached: bool,
}

impl MapView {
    /// Create a view at the configured default center and zoom
    pub fn new(options: MapViewOptions) -> Self {
        let mut viewport = Viewport::new(options.center, options.zoom, options.size);
        viewport.set_zoom_limits(options.min_zoom, options.max_zoom);

        Self {
            viewport,
            transitions: TransitionManager::new(),
            markers: MarkerOverlay::new(),
            resize_events: None,
            detached: false,
        }
    }

    /// Subscribe to container-resize notifications for the lifetime of the
    /// view. Pending sizes are drained on each `update`; `detach` releases
    /// the subscription.
    pub fn watch_resize(&mut self, events: Receiver<Point>) {
        self.resize_events = Some(events);
    }

    /// Fly the view to a resolved candidate.
    ///
    /// A candidate with a bounding box gets a fit transition with symmetric
    /// padding; a point candidate gets a center+zoom transition at the
    /// configured default zoom. A new `go_to` supersedes any transition in
    /// flight, restarting the animation from the current state.
    pub fn go_to(&mut self, candidate: &Candidate, options: &GoToOptions) {
        if self.detached {
            log::warn!("go_to on a detached map view, ignoring");
            return;
        }

        let transition_type = match candidate.bounds.clone() {
            Some(bounds) => TransitionType::FitBounds {
                bounds,
                padding: options.fit_padding,
            },
            None => TransitionType::SetView {
                center: candidate.position,
                zoom: options.default_zoom,
            },
        };

        log::debug!("flying to {:?}", candidate.label);
        let transition = Transition::new(
            transition_type,
            self.viewport.clone(),
            options.animation_duration_ms as f64,
        )
        .with_easing(EasingFunction::EaseInOutQuad);

        self.transitions.start_transition(transition);
    }

    /// Replace the selection marker with one at the candidate's position
    pub fn place_marker(&mut self, candidate: &Candidate) {
        if self.detached {
            log::warn!("place_marker on a detached map view, ignoring");
            return;
        }
        self.markers.place(candidate);
    }

    /// Apply new container dimensions to the viewport
    pub fn resize(&mut self, size: Point) {
        self.viewport.set_size(size);
    }

    /// Advance the view by `dt_ms` milliseconds: drain pending resize
    /// notifications, then step the active transition.
    ///
    /// Returns true if the view changed and needs a redraw.
    pub fn update(&mut self, dt_ms: f64) -> bool {
        if self.detached {
            return false;
        }

        let mut changed = false;

        if let Some(ref events) = self.resize_events {
            for size in events.try_iter() {
                self.viewport.set_size(size);
                changed = true;
            }
        }

        if let Some(viewport) = self.transitions.update(dt_ms) {
            self.viewport = viewport;
            changed = true;
        }

        changed
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn marker(&self) -> Option<&Marker> {
        self.markers.marker()
    }

    pub fn is_animating(&self) -> bool {
        self.transitions.is_animating()
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }

    /// Tear the session down: stop any transition and release the resize
    /// subscription. Further calls are no-ops.
    pub fn detach(&mut self) {
        if self.detached {
            return;
        }

        self.transitions.stop_current();
        self.resize_events = None;
        self.detached = true;
        log::debug!("map view detached");
    }
}

impl Drop for MapView {
    fn drop(&mut self) {
        self.detach();
    }
}
