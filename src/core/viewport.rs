use crate::core::geo::{LatLng, LatLngBounds, Point, EARTH_RADIUS, MAX_LATITUDE};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// Size of one world tile in pixels at every zoom level
const TILE_SIZE: f64 = 256.0;

/// Manages the current view of the map: center, zoom, and screen dimensions
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// The center of the map view in geographical coordinates
    pub center: LatLng,
    /// The current zoom level
    pub zoom: f64,
    /// The size of the viewport in pixels
    pub size: Point,
    /// The minimum allowed zoom level
    pub min_zoom: f64,
    /// The maximum allowed zoom level
    pub max_zoom: f64,
}

impl Viewport {
    /// Creates a new viewport
    pub fn new(center: LatLng, zoom: f64, size: Point) -> Self {
        Self {
            center,
            zoom: zoom.clamp(0.0, 18.0),
            size,
            min_zoom: 0.0,
            max_zoom: 18.0,
        }
    }

    /// Sets the center of the viewport, clamped to the displayable world
    pub fn set_center(&mut self, center: LatLng) {
        self.center = LatLng::new(
            center.lat.clamp(-MAX_LATITUDE, MAX_LATITUDE),
            center.lng.clamp(-180.0, 180.0),
        );
    }

    /// Sets the zoom level, clamping to valid range
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(self.min_zoom, self.max_zoom);
    }

    /// Sets the viewport size in pixels
    pub fn set_size(&mut self, size: Point) {
        self.size = size;
    }

    /// Sets the zoom limits
    pub fn set_zoom_limits(&mut self, min_zoom: f64, max_zoom: f64) {
        self.min_zoom = min_zoom;
        self.max_zoom = max_zoom;
        self.zoom = self.zoom.clamp(min_zoom, max_zoom);
    }

    /// Gets the scale factor for the current zoom level
    pub fn scale(&self) -> f64 {
        2_f64.powf(self.zoom)
    }

    /// Projects a LatLng to world pixel coordinates at the given zoom level
    /// using the standard Web Mercator projection (EPSG:3857)
    pub fn project(&self, lat_lng: &LatLng, zoom: Option<f64>) -> Point {
        let z = zoom.unwrap_or(self.zoom);
        let scale = TILE_SIZE * 2_f64.powf(z);
        let world = 2.0 * PI * EARTH_RADIUS;

        let mercator = lat_lng.to_mercator();
        let x = (mercator.x + PI * EARTH_RADIUS) / world * scale;
        let y = (-mercator.y + PI * EARTH_RADIUS) / world * scale;

        Point::new(x, y)
    }

    /// Unprojects world pixel coordinates back to LatLng at the given zoom level
    pub fn unproject(&self, pixel: &Point, zoom: Option<f64>) -> LatLng {
        let z = zoom.unwrap_or(self.zoom);
        let scale = TILE_SIZE * 2_f64.powf(z);
        let world = 2.0 * PI * EARTH_RADIUS;

        let x = pixel.x / scale * world - PI * EARTH_RADIUS;
        let y = PI * EARTH_RADIUS - pixel.y / scale * world;

        LatLng::from_mercator(Point::new(x, y))
    }

    /// Gets the current viewport bounds in geographical coordinates
    pub fn bounds(&self) -> LatLngBounds {
        let center_pixel = self.project(&self.center, None);
        let half = self.size.multiply(0.5);

        let nw = self.unproject(&center_pixel.subtract(&half), None);
        let se = self.unproject(&center_pixel.add(&half), None);

        LatLngBounds::new(LatLng::new(se.lat, nw.lng), LatLng::new(nw.lat, se.lng))
    }

    /// Fits the viewport to contain the given bounds with symmetric pixel
    /// padding on all sides
    pub fn fit_bounds(&mut self, bounds: &LatLngBounds, padding: Option<f64>) {
        let padding = padding.unwrap_or(40.0);

        self.set_center(bounds.center());

        let usable = Point::new(
            (self.size.x - 2.0 * padding).max(0.0),
            (self.size.y - 2.0 * padding).max(0.0),
        );

        // Scan integer zoom levels for the largest one where the projected
        // bounds still fit inside the padded viewport.
        let mut best_zoom = self.min_zoom;

        for test_zoom in (self.min_zoom.ceil() as i32)..=(self.max_zoom.floor() as i32) {
            let zoom = test_zoom as f64;

            let nw = self.project(
                &LatLng::new(bounds.north_east.lat, bounds.south_west.lng),
                Some(zoom),
            );
            let se = self.project(
                &LatLng::new(bounds.south_west.lat, bounds.north_east.lng),
                Some(zoom),
            );

            let bounds_width = (se.x - nw.x).abs();
            let bounds_height = (se.y - nw.y).abs();

            if bounds_width <= usable.x && bounds_height <= usable.y {
                best_zoom = zoom;
            } else {
                break;
            }
        }

        self.set_zoom(best_zoom);
    }

    /// Gets the resolution in meters per pixel at the current zoom level
    pub fn resolution(&self) -> f64 {
        let earth_circumference = 2.0 * PI * EARTH_RADIUS;
        earth_circumference / (TILE_SIZE * self.scale())
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(LatLng::new(0.0, 0.0), 0.0, Point::new(800.0, 600.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_viewport_creation() {
        let viewport = Viewport::new(
            LatLng::new(30.0444, 31.2357),
            10.0,
            Point::new(800.0, 600.0),
        );

        assert_eq!(viewport.zoom, 10.0);
        assert_eq!(viewport.center.lat, 30.0444);
        assert_eq!(viewport.size.x, 800.0);
    }

    #[test]
    fn test_project_round_trip() {
        let viewport = Viewport::new(LatLng::new(30.0, 31.0), 8.0, Point::new(512.0, 512.0));

        let pixel = viewport.project(&viewport.center, None);
        let back = viewport.unproject(&pixel, None);

        assert!((back.lat - 30.0).abs() < 1e-9);
        assert!((back.lng - 31.0).abs() < 1e-9);
    }

    #[test]
    fn test_zoom_limits() {
        let mut viewport = Viewport::default();
        viewport.set_zoom_limits(2.0, 15.0);

        viewport.set_zoom(1.0); // Below minimum
        assert_eq!(viewport.zoom, 2.0);

        viewport.set_zoom(20.0); // Above maximum
        assert_eq!(viewport.zoom, 15.0);
    }

    #[test]
    fn test_center_clamped_to_world() {
        let mut viewport = Viewport::default();
        viewport.set_center(LatLng::new(89.0, 200.0));

        assert!(viewport.center.lat <= MAX_LATITUDE);
        assert_eq!(viewport.center.lng, 180.0);
    }

    #[test]
    fn test_fit_bounds_centers_and_contains() {
        let mut viewport = Viewport::new(LatLng::new(0.0, 0.0), 2.0, Point::new(800.0, 600.0));
        let target = LatLngBounds::from_coords(29.5, 30.9, 31.9, 32.6);

        viewport.fit_bounds(&target, Some(40.0));

        let center = target.center();
        assert!((viewport.center.lat - center.lat).abs() < 1e-9);
        assert!((viewport.center.lng - center.lng).abs() < 1e-9);

        let visible = viewport.bounds();
        assert!(visible.contains(&target.south_west));
        assert!(visible.contains(&target.north_east));
    }

    #[test]
    fn test_fit_bounds_zooms_in_on_small_extent() {
        let mut viewport = Viewport::new(LatLng::new(0.0, 0.0), 2.0, Point::new(800.0, 600.0));
        let small = LatLngBounds::from_coords(30.0, 31.0, 30.1, 31.1);

        viewport.fit_bounds(&small, None);

        assert!(viewport.zoom > 8.0);
    }
}
