pub mod easing;
pub mod transition;

// Re-export commonly used types for convenience
pub use easing::{EasingFunction, Interpolation};
pub use transition::{Transition, TransitionManager, TransitionState, TransitionType};
