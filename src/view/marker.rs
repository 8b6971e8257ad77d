use crate::core::geo::LatLng;
use crate::resolve::Candidate;

/// A point marker shown on the map
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub position: LatLng,
    pub label: String,
}

impl Marker {
    pub fn new(position: LatLng, label: impl Into<String>) -> Self {
        Self {
            position,
            label: label.into(),
        }
    }
}

/// Overlay holding the current selection marker.
///
/// At most one marker exists at any time; placing a candidate clears the
/// previous marker and adds exactly one at the candidate's point.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerOverlay {
    marker: Option<Marker>,
}

impl MarkerOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace any existing marker with one at the candidate's position
    pub fn place(&mut self, candidate: &Candidate) {
        self.clear();
        self.marker = Some(Marker::new(candidate.position, candidate.label.clone()));
    }

    /// Remove the marker, if any
    pub fn clear(&mut self) {
        self.marker = None;
    }

    pub fn marker(&self) -> Option<&Marker> {
        self.marker.as_ref()
    }

    /// Number of markers present, 0 or 1 by construction
    pub fn len(&self) -> usize {
        usize::from(self.marker.is_some())
    }

    pub fn is_empty(&self) -> bool {
        self.marker.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cairo() -> Candidate {
        Candidate::point("Cairo", LatLng::new(30.0444, 31.2357))
    }

    #[test]
    fn test_place_replaces_previous_marker() {
        let mut overlay = MarkerOverlay::new();

        overlay.place(&cairo());
        overlay.place(&Candidate::point("Luxor", LatLng::new(25.6872, 32.6396)));

        assert_eq!(overlay.len(), 1);
        assert_eq!(overlay.marker().unwrap().label, "Luxor");
    }

    #[test]
    fn test_place_same_candidate_is_idempotent() {
        let mut overlay = MarkerOverlay::new();

        overlay.place(&cairo());
        let first = overlay.clone();
        overlay.place(&cairo());

        assert_eq!(overlay, first);
        assert_eq!(overlay.len(), 1);
        assert_eq!(
            overlay.marker().unwrap().position,
            LatLng::new(30.0444, 31.2357)
        );
    }

    #[test]
    fn test_clear_empties_the_overlay() {
        let mut overlay = MarkerOverlay::new();
        overlay.place(&cairo());
        overlay.clear();

        assert!(overlay.is_empty());
        assert_eq!(overlay.len(), 0);
    }
}
