//! Built-in sample data.

use crate::store::{Hotel, HotelStore};

pub(crate) fn sample() -> HotelStore {
    HotelStore::new()
        .with_location(
            "new_york",
            vec![
                Hotel::new(
                    "The Plaza Hotel",
                    4.5,
                    450,
                    &["WiFi", "Pool", "Spa", "Gym", "Restaurant"],
                    true,
                ),
                Hotel::new(
                    "The Standard High Line",
                    4.2,
                    320,
                    &["WiFi", "Bar", "Gym", "Pet-friendly"],
                    true,
                ),
                Hotel::new(
                    "Pod Hotel Brooklyn",
                    4.0,
                    180,
                    &["WiFi", "Restaurant", "Rooftop Bar"],
                    false,
                ),
            ],
        )
        .with_location(
            "paris",
            vec![
                Hotel::new(
                    "Hotel Plaza Athenee",
                    4.8,
                    680,
                    &["WiFi", "Spa", "Restaurant", "Concierge", "Bar"],
                    true,
                ),
                Hotel::new(
                    "Le Marais Hotel",
                    4.1,
                    280,
                    &["WiFi", "Restaurant", "Historic Building"],
                    true,
                ),
                Hotel::new(
                    "Hotel des Grands Boulevards",
                    4.3,
                    350,
                    &["WiFi", "Restaurant", "Bar", "Garden"],
                    true,
                ),
            ],
        )
        .with_location(
            "tokyo",
            vec![
                Hotel::new(
                    "The Ritz-Carlton Tokyo",
                    4.7,
                    520,
                    &["WiFi", "Spa", "Pool", "Multiple Restaurants", "City View"],
                    true,
                ),
                Hotel::new(
                    "Shibuya Excel Hotel Tokyu",
                    4.2,
                    290,
                    &["WiFi", "Restaurant", "City Center", "Shopping Access"],
                    true,
                ),
                Hotel::new(
                    "Capsule Hotel Shinjuku 510",
                    3.8,
                    80,
                    &["WiFi", "Shared Bath", "Lockers"],
                    false,
                ),
            ],
        )
        .with_location(
            "london",
            vec![
                Hotel::new(
                    "The Savoy",
                    4.6,
                    590,
                    &[
                        "WiFi",
                        "Spa",
                        "Multiple Restaurants",
                        "Theatre District",
                        "River View",
                    ],
                    true,
                ),
                Hotel::new(
                    "Premier Inn London City",
                    4.0,
                    120,
                    &["WiFi", "Restaurant", "24/7 Reception"],
                    true,
                ),
                Hotel::new(
                    "The Zetter Townhouse",
                    4.4,
                    380,
                    &["WiFi", "Bar", "Boutique Style", "Historic"],
                    true,
                ),
            ],
        )
        .with_location(
            "dubai",
            vec![
                Hotel::new(
                    "Burj Al Arab Jumeirah",
                    4.9,
                    1200,
                    &[
                        "WiFi",
                        "Multiple Pools",
                        "Spa",
                        "Private Beach",
                        "Butler Service",
                    ],
                    true,
                ),
                Hotel::new(
                    "Atlantis The Palm",
                    4.5,
                    480,
                    &[
                        "WiFi",
                        "Water Park",
                        "Aquarium",
                        "Multiple Restaurants",
                        "Beach",
                    ],
                    true,
                ),
                Hotel::new(
                    "Rove Downtown Dubai",
                    4.1,
                    150,
                    &["WiFi", "Pool", "Gym", "Restaurant", "City Center"],
                    false,
                ),
            ],
        )
}
