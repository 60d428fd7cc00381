//! The hotel booking tools.
//!
//! Each tool is a pure function over the store snapshot returning a JSON
//! payload. Domain-level failures (unknown location, hotel miss) are
//! returned inside the payload under an `"error"` key so the model can
//! compose a helpful answer from them.

use dataset::{Hotel, HotelStore, normalize_location};
use serde_json::{Value, json};

pub const DEFAULT_TAX_RATE: f64 = 0.12;

/// Search for available hotels in a location, optionally capped by price.
pub fn search_hotels(store: &HotelStore, location: &str, max_price: Option<i64>) -> Value {
    let key = normalize_location(location);
    let Some(hotels) = store.hotels_for(&key) else {
        let known: Vec<&str> = store.location_keys().collect();
        return json!({
            "error": format!(
                "No hotels found for location: {location}. Available locations: {}",
                known.join(", ")
            )
        });
    };

    let available: Vec<&Hotel> = hotels
        .iter()
        .filter(|hotel| hotel.availability)
        .filter(|hotel| max_price.is_none_or(|cap| i64::from(hotel.price_per_night) <= cap))
        .collect();

    json!({
        "location": location,
        "total_available": available.len(),
        "hotels": available,
    })
}

/// Detailed information about one hotel, matched case-insensitively.
pub fn get_hotel_details(store: &HotelStore, location: &str, hotel_name: &str) -> Value {
    let key = normalize_location(location);
    let Some(hotels) = store.hotels_for(&key) else {
        return json!({ "error": format!("Location '{location}' not found") });
    };

    let wanted = hotel_name.to_lowercase();
    match hotels.iter().find(|hotel| hotel.name.to_lowercase() == wanted) {
        Some(hotel) => json!({
            "location": location,
            "hotel_details": hotel,
            "estimated_weekly_cost": hotel.price_per_night * 7,
            "estimated_monthly_cost": hotel.price_per_night * 30,
        }),
        None => json!({ "error": format!("Hotel '{hotel_name}' not found in {location}") }),
    }
}

/// Total booking cost including taxes.
///
/// Negative or zero inputs propagate arithmetically; nothing here panics.
pub fn calculate_booking_cost(price_per_night: i64, nights: i64, tax_rate: f64) -> Value {
    let subtotal = price_per_night * nights;
    let tax = round2(subtotal as f64 * tax_rate);
    let total_cost = round2(subtotal as f64 + tax);

    json!({
        "price_per_night": price_per_night,
        "nights": nights,
        "subtotal": subtotal,
        "tax": tax,
        "total_cost": total_cost,
    })
}

/// All registered booking locations.
pub fn get_available_locations(store: &HotelStore) -> Value {
    let keys: Vec<&str> = store.location_keys().collect();
    json!({
        "available_locations": keys,
        "total_locations": keys.len(),
    })
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
