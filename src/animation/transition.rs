use crate::animation::easing::{EasingFunction, Interpolation};
use crate::core::{
    geo::{LatLng, LatLngBounds},
    viewport::Viewport,
};
use instant::Instant;

/// Types of viewport transitions
#[derive(Debug, Clone, PartialEq)]
pub enum TransitionType {
    /// Combined pan and zoom to a point target
    SetView { center: LatLng, zoom: f64 },
    /// Frame a bounding box with symmetric pixel padding
    FitBounds { bounds: LatLngBounds, padding: f64 },
}

/// State of a transition
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TransitionState {
    NotStarted,
    Running,
    Completed,
    Cancelled,
}

/// A viewport transition animation
///
/// The target viewport is computed once at construction time; `update`
/// interpolates center and zoom from the start state toward it.
pub struct Transition {
    transition_type: TransitionType,
    /// Duration in milliseconds
    duration_ms: f64,
    easing: EasingFunction,
    state: TransitionState,
    start_time: Option<Instant>,
    elapsed_ms: f64,
    start_viewport: Viewport,
    target_viewport: Viewport,
    current_viewport: Viewport,
}

impl Transition {
    /// Create a new transition starting from the given viewport state
    pub fn new(transition_type: TransitionType, current_viewport: Viewport, duration_ms: f64) -> Self {
        let target_viewport = Self::calculate_target(&transition_type, &current_viewport);

        Self {
            transition_type,
            duration_ms: duration_ms.max(0.0),
            easing: EasingFunction::EaseInOutQuad,
            state: TransitionState::NotStarted,
            start_time: None,
            elapsed_ms: 0.0,
            start_viewport: current_viewport.clone(),
            target_viewport,
            current_viewport,
        }
    }

    /// Calculate the target viewport based on transition type
    fn calculate_target(transition_type: &TransitionType, current: &Viewport) -> Viewport {
        let mut target = current.clone();

        match transition_type {
            TransitionType::SetView { center, zoom } => {
                target.set_center(*center);
                target.set_zoom(*zoom);
            }
            TransitionType::FitBounds { bounds, padding } => {
                target.fit_bounds(bounds, Some(*padding));
            }
        }

        target
    }

    /// Set the easing function
    pub fn with_easing(mut self, easing: EasingFunction) -> Self {
        self.easing = easing;
        self
    }

    /// Start the transition
    pub fn start(&mut self) {
        if self.state == TransitionState::NotStarted {
            self.start_time = Some(Instant::now());
            self.state = TransitionState::Running;
            self.elapsed_ms = 0.0;
        }
    }

    /// Stop the transition, leaving the viewport at its current state
    pub fn stop(&mut self) {
        self.state = TransitionState::Cancelled;
    }

    /// Advance the transition by `dt_ms` milliseconds.
    ///
    /// Returns true if the current viewport changed.
    pub fn update(&mut self, dt_ms: f64) -> bool {
        match self.state {
            TransitionState::NotStarted => {
                self.start();
                false
            }
            TransitionState::Running => {
                self.elapsed_ms += dt_ms.max(0.0);
                let progress = self.progress();
                let eased = self.easing.apply(progress);

                self.current_viewport.center = Interpolation::lat_lng(
                    &self.start_viewport.center,
                    &self.target_viewport.center,
                    eased,
                );
                self.current_viewport.zoom = Interpolation::linear(
                    self.start_viewport.zoom,
                    self.target_viewport.zoom,
                    eased,
                );

                if progress >= 1.0 {
                    self.complete();
                }

                true
            }
            _ => false,
        }
    }

    fn complete(&mut self) {
        self.state = TransitionState::Completed;
        self.current_viewport = self.target_viewport.clone();
    }

    /// Check if the transition is finished
    pub fn is_finished(&self) -> bool {
        matches!(
            self.state,
            TransitionState::Completed | TransitionState::Cancelled
        )
    }

    /// Get the current progress (0.0 to 1.0)
    pub fn progress(&self) -> f64 {
        if self.duration_ms <= 0.0 {
            1.0
        } else {
            (self.elapsed_ms / self.duration_ms).clamp(0.0, 1.0)
        }
    }

    /// The interpolated viewport at the current progress
    pub fn current_viewport(&self) -> &Viewport {
        &self.current_viewport
    }

    /// When the transition started running, if it has
    pub fn started_at(&self) -> Option<Instant> {
        self.start_time
    }

    /// The viewport this transition is heading toward
    pub fn target_viewport(&self) -> &Viewport {
        &self.target_viewport
    }

    pub fn transition_type(&self) -> &TransitionType {
        &self.transition_type
    }
}

/// Manager for viewport transitions
///
/// At most one transition is in flight; starting a new one interrupts the
/// current one, and the new transition begins from the interrupted state so
/// the view never jumps.
#[derive(Default)]
pub struct TransitionManager {
    current: Option<Transition>,
}

impl TransitionManager {
    pub fn new() -> Self {
        Self { current: None }
    }

    /// Start a new transition, superseding any running one
    pub fn start_transition(&mut self, transition: Transition) {
        if let Some(ref mut running) = self.current {
            running.stop();
        }

        let mut transition = transition;
        transition.start();
        self.current = Some(transition);
    }

    /// Advance the active transition; returns the updated viewport if it moved
    pub fn update(&mut self, dt_ms: f64) -> Option<Viewport> {
        let transition = self.current.as_mut()?;

        let moved = transition.update(dt_ms);
        let viewport = moved.then(|| transition.current_viewport().clone());

        if transition.is_finished() {
            self.current = None;
        }

        viewport
    }

    /// Stop the active transition without completing it
    pub fn stop_current(&mut self) {
        if let Some(ref mut transition) = self.current {
            transition.stop();
        }
        self.current = None;
    }

    pub fn is_animating(&self) -> bool {
        self.current.is_some()
    }

    /// The transition currently in flight, if any
    pub fn current(&self) -> Option<&Transition> {
        self.current.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::{LatLng, Point};

    fn test_viewport() -> Viewport {
        Viewport::new(LatLng::new(0.0, 0.0), 4.0, Point::new(800.0, 600.0))
    }

    #[test]
    fn test_set_view_reaches_target_exactly() {
        let target = LatLng::new(30.0444, 31.2357);
        let mut transition = Transition::new(
            TransitionType::SetView {
                center: target,
                zoom: 10.0,
            },
            test_viewport(),
            1000.0,
        );

        transition.update(0.0); // starts
        transition.update(400.0);
        assert!(!transition.is_finished());

        transition.update(700.0);
        assert!(transition.is_finished());
        assert_eq!(transition.current_viewport().center, target);
        assert_eq!(transition.current_viewport().zoom, 10.0);
    }

    #[test]
    fn test_zero_duration_completes_on_first_update() {
        let mut transition = Transition::new(
            TransitionType::SetView {
                center: LatLng::new(10.0, 10.0),
                zoom: 8.0,
            },
            test_viewport(),
            0.0,
        );

        transition.update(0.0);
        transition.update(0.0);
        assert!(transition.is_finished());
        assert_eq!(transition.current_viewport().zoom, 8.0);
    }

    #[test]
    fn test_fit_bounds_target_centers_extent() {
        let bounds = LatLngBounds::from_coords(29.5, 30.9, 31.9, 32.6);
        let transition = Transition::new(
            TransitionType::FitBounds {
                bounds: bounds.clone(),
                padding: 40.0,
            },
            test_viewport(),
            500.0,
        );

        let target = transition.target_viewport();
        let center = bounds.center();
        assert!((target.center.lat - center.lat).abs() < 1e-9);
        assert!((target.center.lng - center.lng).abs() < 1e-9);
    }

    #[test]
    fn test_new_transition_supersedes_running_one() {
        let mut manager = TransitionManager::new();

        manager.start_transition(Transition::new(
            TransitionType::SetView {
                center: LatLng::new(50.0, 50.0),
                zoom: 12.0,
            },
            test_viewport(),
            1000.0,
        ));

        let midway = manager.update(500.0).expect("transition should move");
        assert!(manager.is_animating());

        // Supersede: the replacement starts from the interrupted state.
        manager.start_transition(Transition::new(
            TransitionType::SetView {
                center: LatLng::new(-20.0, -20.0),
                zoom: 6.0,
            },
            midway.clone(),
            1000.0,
        ));

        let first_frame = manager.update(0.0).expect("replacement should report state");
        assert_eq!(first_frame.center, midway.center);

        let done = manager.update(2000.0).expect("replacement should finish");
        assert_eq!(done.center, LatLng::new(-20.0, -20.0));
        assert!(!manager.is_animating());
    }
}
