//! Static place-name lookup tables
//!
//! A gazetteer is loaded once — from code, or from a JSON document shaped
//! like `[{"name": "Cairo", "lon": 31.2357, "lat": 30.0444}, ..]` — and is
//! immutable for the session. Suggestion filtering is a pure, synchronous
//! substring match; no network is involved.

use crate::core::geo::LatLng;
use crate::resolve::{Candidate, CandidateSource};
use crate::{Error, Result};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// A single named place with its coordinate
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GazetteerEntry {
    pub name: String,
    #[serde(rename = "lon")]
    pub lng: f64,
    pub lat: f64,
}

impl GazetteerEntry {
    pub fn new(name: impl Into<String>, lng: f64, lat: f64) -> Self {
        Self {
            name: name.into(),
            lng,
            lat,
        }
    }

    pub fn position(&self) -> LatLng {
        LatLng::new(self.lat, self.lng)
    }

    /// A point candidate carrying this entry's exact stored coordinates
    pub fn to_candidate(&self) -> Candidate {
        Candidate::point(self.name.clone(), self.position())
    }
}

/// Egyptian governorates shipped with the crate, in gazetteer order
const EGYPT_GOVERNORATES: &[(&str, f64, f64)] = &[
    ("Cairo", 31.2357, 30.0444),
    ("Giza", 31.1313, 30.0131),
    ("Alexandria", 29.9187, 31.2001),
    ("Aswan", 32.8998, 24.0889),
    ("Luxor", 32.6396, 25.6872),
    ("Minya", 30.7323, 28.1099),
    ("Sohag", 31.6948, 26.5560),
    ("Qena", 32.7267, 26.1551),
    ("Asyut", 31.1820, 27.1801),
    ("Port Said", 32.3000, 31.2653),
    ("Ismailia", 32.2715, 30.5965),
    ("Damietta", 31.8144, 31.4165),
    ("Suez", 32.5498, 29.9668),
    ("Matruh", 27.2453, 31.3525),
    ("North Sinai", 33.8000, 30.3000),
    ("South Sinai", 34.2167, 28.5000),
];

static EGYPT: Lazy<Gazetteer> = Lazy::new(|| {
    Gazetteer::new(
        EGYPT_GOVERNORATES
            .iter()
            .map(|&(name, lng, lat)| GazetteerEntry::new(name, lng, lat))
            .collect(),
    )
});

/// Immutable lookup table of place names to coordinates
#[derive(Debug, Clone, PartialEq)]
pub struct Gazetteer {
    entries: Vec<GazetteerEntry>,
}

impl Gazetteer {
    /// Creates a gazetteer from a list of entries
    pub fn new(entries: Vec<GazetteerEntry>) -> Self {
        Self { entries }
    }

    /// Loads a gazetteer from a JSON array of `{name, lon, lat}` records,
    /// rejecting entries with out-of-range coordinates
    pub fn from_json_slice(bytes: &[u8]) -> Result<Self> {
        let entries: Vec<GazetteerEntry> = serde_json::from_slice(bytes)?;

        for entry in &entries {
            if !entry.position().is_valid() {
                return Err(Error::Gazetteer(format!(
                    "entry {:?} has invalid coordinates ({}, {})",
                    entry.name, entry.lat, entry.lng
                )));
            }
        }

        Ok(Self::new(entries))
    }

    /// The built-in Egyptian governorate gazetteer
    pub fn egypt() -> Self {
        EGYPT.clone()
    }

    pub fn entries(&self) -> &[GazetteerEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Case-insensitive substring suggestions, in gazetteer order.
    ///
    /// An empty query yields an empty list, never the full gazetteer.
    pub fn suggest(&self, query: &str) -> Vec<Candidate> {
        let needle = query.to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }

        self.entries
            .iter()
            .filter(|entry| entry.name.to_lowercase().contains(&needle))
            .map(GazetteerEntry::to_candidate)
            .collect()
    }

    /// Exact (case-insensitive) name lookup, used when a suggestion is selected
    pub fn find(&self, name: &str) -> Option<&GazetteerEntry> {
        let needle = name.to_lowercase();
        self.entries
            .iter()
            .find(|entry| entry.name.to_lowercase() == needle)
    }
}

#[async_trait]
impl CandidateSource for Gazetteer {
    async fn locate(&self, query: &str) -> Result<Option<Candidate>> {
        Ok(self.find(query.trim()).map(GazetteerEntry::to_candidate))
    }
}
