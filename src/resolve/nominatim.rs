//! Live geocoding against Nominatim-style search endpoints
//!
//! A single HTTP GET per lookup with `format=json` and `limit=1`; the
//! provider answers with a JSON array of places whose `lat`/`lon` fields
//! are numeric strings and whose optional `boundingbox` lists four bounds
//! in south, north, west, east order. Parsing and range validation happen
//! before a candidate is released, so a malformed payload surfaces as an
//! error rather than a bogus map jump.

use crate::core::geo::{LatLng, LatLngBounds};
use crate::resolve::{Candidate, CandidateSource};
use crate::{Error, Result};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;

/// Public Nominatim search endpoint used when no endpoint is configured
pub const DEFAULT_ENDPOINT: &str = "https://nominatim.openstreetmap.org/search";

/// Shared HTTP client with a custom User-Agent so that public geocoding
/// servers don't reject the request. Building the client once avoids the
/// cost of TLS and connection pool setup for every lookup.
pub(crate) static HTTP_CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .user_agent("mapfly/0.1 (+https://github.com/example/mapfly)")
        .build()
        .expect("failed to build reqwest client")
});

/// Configuration for a [`NominatimGeocoder`]
#[derive(Debug, Clone, PartialEq)]
pub struct GeocoderOptions {
    /// Search endpoint URL
    pub endpoint: String,
    /// Optional ISO country-code filter, e.g. `"eg"` to bias results to Egypt
    pub country_bias: Option<String>,
}

impl Default for GeocoderOptions {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            country_bias: None,
        }
    }
}

/// Geocoding backend that queries a Nominatim-style provider
#[derive(Debug, Clone, Default)]
pub struct NominatimGeocoder {
    options: GeocoderOptions,
}

impl NominatimGeocoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(options: GeocoderOptions) -> Self {
        Self { options }
    }

    /// Restrict results to the given ISO country code
    pub fn with_country_bias(mut self, country_code: impl Into<String>) -> Self {
        self.options.country_bias = Some(country_code.into());
        self
    }
}

#[async_trait]
impl CandidateSource for NominatimGeocoder {
    async fn locate(&self, query: &str) -> Result<Option<Candidate>> {
        let mut request = HTTP_CLIENT.get(&self.options.endpoint).query(&[
            ("format", "json"),
            ("q", query),
            ("limit", "1"),
            ("addressdetails", "1"),
        ]);
        if let Some(ref country) = self.options.country_bias {
            request = request.query(&[("countrycodes", country.as_str())]);
        }

        log::debug!("geocode request for {query:?}");
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("geocoder returned HTTP {status} for {query:?}");
            return Err(Error::Provider {
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await?;
        parse_search_response(&body)
    }
}

/// One place record as the provider serializes it
#[derive(Debug, Deserialize)]
struct NominatimPlace {
    lat: String,
    lon: String,
    display_name: String,
    #[serde(default)]
    boundingbox: Option<Vec<String>>,
}

/// Parses a provider response body into at most one validated candidate.
/// An empty result array is a clean "no results", not an error.
fn parse_search_response(body: &[u8]) -> Result<Option<Candidate>> {
    let places: Vec<NominatimPlace> = serde_json::from_slice(body)?;

    let Some(place) = places.into_iter().next() else {
        return Ok(None);
    };

    candidate_from_place(place).map(Some)
}

fn candidate_from_place(place: NominatimPlace) -> Result<Candidate> {
    let lat = parse_coord(&place.lat, "lat")?;
    let lon = parse_coord(&place.lon, "lon")?;

    let position = LatLng::new(lat, lon);
    if !position.is_valid() {
        return Err(Error::InvalidCoordinates(format!(
            "({lat}, {lon}) is out of range"
        )));
    }

    let mut candidate = Candidate::point(place.display_name, position);
    if let Some(ref raw) = place.boundingbox {
        candidate = candidate.with_bounds(parse_bounding_box(raw)?);
    }

    Ok(candidate)
}

/// Provider bounding boxes list south, north, west, east
fn parse_bounding_box(raw: &[String]) -> Result<LatLngBounds> {
    if raw.len() != 4 {
        return Err(Error::InvalidCoordinates(format!(
            "boundingbox has {} bounds, expected 4",
            raw.len()
        )));
    }

    let south = parse_coord(&raw[0], "south")?;
    let north = parse_coord(&raw[1], "north")?;
    let west = parse_coord(&raw[2], "west")?;
    let east = parse_coord(&raw[3], "east")?;

    let bounds = LatLngBounds::from_coords(south, west, north, east);
    if !bounds.is_valid() {
        return Err(Error::InvalidCoordinates(format!(
            "boundingbox [{south}, {north}, {west}, {east}] is out of range"
        )));
    }

    Ok(bounds)
}

fn parse_coord(raw: &str, what: &str) -> Result<f64> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| Error::InvalidCoordinates(format!("{what} is not numeric: {raw:?}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_point_result() {
        let body = br#"[{"lat": "30.0443879", "lon": "31.2357257", "display_name": "Cairo, Egypt"}]"#;

        let candidate = parse_search_response(body).unwrap().unwrap();
        assert_eq!(candidate.label, "Cairo, Egypt");
        assert_eq!(candidate.position, LatLng::new(30.0443879, 31.2357257));
        assert!(candidate.bounds.is_none());
    }

    #[test]
    fn test_parse_bounding_box_order() {
        let body = br#"[{
            "lat": "30.7",
            "lon": "31.75",
            "display_name": "Somewhere",
            "boundingbox": ["29.5", "31.9", "30.9", "32.6"]
        }]"#;

        let candidate = parse_search_response(body).unwrap().unwrap();
        let bounds = candidate.bounds.unwrap();

        assert_eq!(bounds.south_west, LatLng::new(29.5, 30.9));
        assert_eq!(bounds.north_east, LatLng::new(31.9, 32.6));
    }

    #[test]
    fn test_empty_result_array_is_not_found() {
        assert_eq!(parse_search_response(b"[]").unwrap(), None);
    }

    #[test]
    fn test_non_numeric_coordinate_is_rejected() {
        let body = br#"[{"lat": "abc", "lon": "31.2", "display_name": "broken"}]"#;
        assert!(matches!(
            parse_search_response(body),
            Err(Error::InvalidCoordinates(_))
        ));
    }

    #[test]
    fn test_out_of_range_coordinate_is_rejected() {
        let body = br#"[{"lat": "95.0", "lon": "31.2", "display_name": "broken"}]"#;
        assert!(matches!(
            parse_search_response(body),
            Err(Error::InvalidCoordinates(_))
        ));
    }

    #[test]
    fn test_short_bounding_box_is_rejected() {
        let body = br#"[{
            "lat": "30.0",
            "lon": "31.0",
            "display_name": "broken",
            "boundingbox": ["29.5", "31.9", "30.9"]
        }]"#;
        assert!(matches!(
            parse_search_response(body),
            Err(Error::InvalidCoordinates(_))
        ));
    }

    #[test]
    fn test_malformed_payload_is_serialization_error() {
        assert!(matches!(
            parse_search_response(b"not json"),
            Err(Error::Serialization(_))
        ));
    }
}
