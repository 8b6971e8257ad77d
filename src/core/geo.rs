use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Web Mercator projection constants
pub(crate) const EARTH_RADIUS: f64 = 6378137.0;
pub(crate) const MAX_LATITUDE: f64 = 85.0511287798;

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are finite and within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat.is_finite()
            && self.lng.is_finite()
            && self.lat >= -90.0
            && self.lat <= 90.0
            && self.lng >= -180.0
            && self.lng <= 180.0
    }

    /// Wraps longitude to [-180, 180] range
    pub fn wrap_lng(lng: f64) -> f64 {
        let wrapped = lng % 360.0;
        if wrapped > 180.0 {
            wrapped - 360.0
        } else if wrapped < -180.0 {
            wrapped + 360.0
        } else {
            wrapped
        }
    }

    /// Clamps latitude to the range displayable in Web Mercator
    pub fn clamp_lat(lat: f64) -> f64 {
        lat.clamp(-MAX_LATITUDE, MAX_LATITUDE)
    }

    /// Converts to Web Mercator projection (EPSG:3857)
    pub fn to_mercator(&self) -> Point {
        let x = self.lng.to_radians() * EARTH_RADIUS;
        let y = ((PI / 4.0 + self.lat.to_radians() / 2.0).tan().ln()) * EARTH_RADIUS;
        Point::new(x, y)
    }

    /// Creates LatLng from Web Mercator coordinates
    pub fn from_mercator(point: Point) -> Self {
        let lng = (point.x / EARTH_RADIUS).to_degrees();
        let lat = (2.0 * (point.y / EARTH_RADIUS).exp().atan() - PI / 2.0).to_degrees();
        Self::new(lat, lng)
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a point in screen or projected coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn add(&self, other: &Point) -> Point {
        Point::new(self.x + other.x, self.y + other.y)
    }

    pub fn subtract(&self, other: &Point) -> Point {
        Point::new(self.x - other.x, self.y - other.y)
    }

    pub fn multiply(&self, scalar: f64) -> Point {
        Point::new(self.x * scalar, self.y * scalar)
    }

    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

impl Default for Point {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

/// Represents a bounding box of geographical coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self::new(LatLng::new(south, west), LatLng::new(north, east))
    }

    /// Validates that both corners are valid and correctly ordered
    pub fn is_valid(&self) -> bool {
        self.south_west.is_valid()
            && self.north_east.is_valid()
            && self.south_west.lat <= self.north_east.lat
            && self.south_west.lng <= self.north_east.lng
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Extends the bounds to include a point
    pub fn extend(&mut self, point: &LatLng) {
        self.south_west.lat = self.south_west.lat.min(point.lat);
        self.south_west.lng = self.south_west.lng.min(point.lng);
        self.north_east.lat = self.north_east.lat.max(point.lat);
        self.north_east.lng = self.north_east.lng.max(point.lng);
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// Gets the span of the bounds
    pub fn span(&self) -> LatLng {
        LatLng::new(
            self.north_east.lat - self.south_west.lat,
            self.north_east.lng - self.south_west.lng,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_creation() {
        let coord = LatLng::new(30.0444, 31.2357);
        assert_eq!(coord.lat, 30.0444);
        assert_eq!(coord.lng, 31.2357);
        assert!(coord.is_valid());
    }

    #[test]
    fn test_lat_lng_validity() {
        assert!(!LatLng::new(91.0, 0.0).is_valid());
        assert!(!LatLng::new(0.0, 181.0).is_valid());
        assert!(!LatLng::new(f64::NAN, 0.0).is_valid());
        assert!(!LatLng::new(0.0, f64::INFINITY).is_valid());
        assert!(LatLng::new(-90.0, -180.0).is_valid());
        assert!(LatLng::new(90.0, 180.0).is_valid());
    }

    #[test]
    fn test_mercator_round_trip() {
        let cairo = LatLng::new(30.0444, 31.2357);
        let back = LatLng::from_mercator(cairo.to_mercator());

        assert!((back.lat - cairo.lat).abs() < 1e-9);
        assert!((back.lng - cairo.lng).abs() < 1e-9);
    }

    #[test]
    fn test_wrap_lng() {
        assert_eq!(LatLng::wrap_lng(190.0), -170.0);
        assert_eq!(LatLng::wrap_lng(-190.0), 170.0);
        assert_eq!(LatLng::wrap_lng(45.0), 45.0);
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = LatLngBounds::from_coords(29.5, 30.9, 31.9, 32.6);
        let inside = LatLng::new(30.5, 31.5);
        let outside = LatLng::new(33.0, 31.5);

        assert!(bounds.is_valid());
        assert!(bounds.contains(&inside));
        assert!(!bounds.contains(&outside));
    }

    #[test]
    fn test_bounds_center() {
        let bounds = LatLngBounds::from_coords(29.5, 30.9, 31.9, 32.6);
        let center = bounds.center();

        assert!((center.lat - 30.7).abs() < 1e-9);
        assert!((center.lng - 31.75).abs() < 1e-9);
    }

    #[test]
    fn test_bounds_ordering() {
        let inverted = LatLngBounds::from_coords(31.9, 32.6, 29.5, 30.9);
        assert!(!inverted.is_valid());
    }
}
