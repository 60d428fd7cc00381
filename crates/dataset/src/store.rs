//! Hotel records and the location-keyed store.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::hotels;

/// A single hotel record. Immutable once the store is built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hotel {
    /// Unique within its location.
    pub name: String,
    /// Guest rating, 0–5.
    pub rating: f64,
    /// Abstract currency unit per night.
    pub price_per_night: u32,
    pub amenities: Vec<String>,
    pub availability: bool,
}

impl Hotel {
    pub fn new(
        name: impl Into<String>,
        rating: f64,
        price_per_night: u32,
        amenities: &[&str],
        availability: bool,
    ) -> Self {
        Self {
            name: name.into(),
            rating,
            price_per_night,
            amenities: amenities.iter().map(|a| a.to_string()).collect(),
            availability,
        }
    }
}

/// Normalize a raw location string into a store key.
///
/// Keys are lowercase with spaces replaced by underscores, so "New York"
/// and "new_york" address the same entry.
pub fn normalize_location(raw: &str) -> String {
    raw.to_lowercase().replace(' ', "_")
}

/// Read-only hotel lookup keyed by normalized location.
///
/// The key set is fixed and enumerable; iteration order is stable.
#[derive(Debug, Clone, Default)]
pub struct HotelStore {
    locations: BTreeMap<String, Vec<Hotel>>,
}

impl HotelStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in sample dataset.
    pub fn sample() -> Self {
        hotels::sample()
    }

    /// Add hotels under a raw location name (normalized on insert).
    pub fn with_location(mut self, location: &str, hotels: Vec<Hotel>) -> Self {
        self.locations.insert(normalize_location(location), hotels);
        self
    }

    /// Look up hotels by normalized location key.
    pub fn hotels_for(&self, key: &str) -> Option<&[Hotel]> {
        self.locations.get(key).map(Vec::as_slice)
    }

    /// All registered location keys, in stable order.
    pub fn location_keys(&self) -> impl Iterator<Item = &str> {
        self.locations.keys().map(String::as_str)
    }

    /// Number of distinct locations.
    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }
}
