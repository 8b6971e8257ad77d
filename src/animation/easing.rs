use crate::core::geo::LatLng;

/// Easing functions for viewport animations
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EasingFunction {
    Linear,
    EaseInQuad,
    EaseOutQuad,
    EaseInOutQuad,
    EaseOutCubic,
}

impl EasingFunction {
    /// Apply the easing function to a normalized time value (0.0 to 1.0)
    pub fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingFunction::Linear => t,
            EasingFunction::EaseInQuad => t * t,
            EasingFunction::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            EasingFunction::EaseInOutQuad => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
                }
            }
            EasingFunction::EaseOutCubic => 1.0 - (1.0 - t).powi(3),
        }
    }
}

/// Interpolation helpers for animatable values
pub struct Interpolation;

impl Interpolation {
    pub fn linear(start: f64, end: f64, t: f64) -> f64 {
        start + (end - start) * t
    }

    pub fn lat_lng(start: &LatLng, end: &LatLng, t: f64) -> LatLng {
        LatLng::new(
            Self::linear(start.lat, end.lat, t),
            Self::linear(start.lng, end.lng, t),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easing_endpoints() {
        let functions = [
            EasingFunction::Linear,
            EasingFunction::EaseInQuad,
            EasingFunction::EaseOutQuad,
            EasingFunction::EaseInOutQuad,
            EasingFunction::EaseOutCubic,
        ];

        for easing in functions {
            assert_eq!(easing.apply(0.0), 0.0, "{:?} at t=0", easing);
            assert!((easing.apply(1.0) - 1.0).abs() < 1e-12, "{:?} at t=1", easing);
        }
    }

    #[test]
    fn test_easing_clamps_out_of_range() {
        assert_eq!(EasingFunction::Linear.apply(-0.5), 0.0);
        assert_eq!(EasingFunction::Linear.apply(1.5), 1.0);
    }

    #[test]
    fn test_lat_lng_interpolation() {
        let start = LatLng::new(0.0, 0.0);
        let end = LatLng::new(10.0, 20.0);

        let mid = Interpolation::lat_lng(&start, &end, 0.5);
        assert_eq!(mid.lat, 5.0);
        assert_eq!(mid.lng, 10.0);
    }
}
