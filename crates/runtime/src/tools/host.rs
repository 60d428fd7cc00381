//! Tool host trait and the hotel tool registry.

use super::{ToolError, hotel};
use crate::model::{ToolCall, ToolSpec};
use dataset::HotelStore;
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use std::future::Future;
use std::sync::Arc;

/// Trait for tool execution hosts.
///
/// Implementations provide tool specifications and execute tool calls.
/// This is the boundary between the model loop and tool side effects.
pub trait ToolHost: Send + Sync {
    /// Get available tool specifications.
    fn specs(&self) -> &[ToolSpec];

    /// Execute a tool call.
    fn execute(&self, call: &ToolCall) -> impl Future<Output = Result<Value, ToolError>> + Send;
}

/// The closed set of hotel booking tools.
///
/// The tool set is fixed at compile time, so dispatch goes through a
/// tagged enum rather than an open registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ToolKind {
    SearchHotels,
    GetHotelDetails,
    CalculateBookingCost,
    GetAvailableLocations,
}

impl ToolKind {
    /// Resolve a tool name, case-insensitively.
    fn resolve(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "search_hotels" => Some(Self::SearchHotels),
            "get_hotel_details" => Some(Self::GetHotelDetails),
            "calculate_booking_cost" => Some(Self::CalculateBookingCost),
            "get_available_locations" => Some(Self::GetAvailableLocations),
            _ => None,
        }
    }
}

#[derive(Debug, Deserialize)]
struct SearchArgs {
    location: String,
    #[serde(default)]
    max_price: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct DetailsArgs {
    location: String,
    hotel_name: String,
}

#[derive(Debug, Deserialize)]
struct CostArgs {
    price_per_night: i64,
    nights: i64,
    #[serde(default = "default_tax_rate")]
    tax_rate: f64,
}

fn default_tax_rate() -> f64 {
    hotel::DEFAULT_TAX_RATE
}

/// Tool host backed by the in-memory hotel store.
pub struct HotelToolHost {
    store: Arc<HotelStore>,
    specs: Vec<ToolSpec>,
}

impl HotelToolHost {
    pub fn new(store: Arc<HotelStore>) -> Self {
        Self {
            store,
            specs: tool_specs(),
        }
    }
}

impl ToolHost for HotelToolHost {
    fn specs(&self) -> &[ToolSpec] {
        &self.specs
    }

    async fn execute(&self, call: &ToolCall) -> Result<Value, ToolError> {
        let kind =
            ToolKind::resolve(&call.name).ok_or_else(|| ToolError::NotFound(call.name.clone()))?;

        match kind {
            ToolKind::SearchHotels => {
                let args: SearchArgs = decode(&call.name, &call.input)?;
                Ok(hotel::search_hotels(
                    &self.store,
                    &args.location,
                    args.max_price,
                ))
            }
            ToolKind::GetHotelDetails => {
                let args: DetailsArgs = decode(&call.name, &call.input)?;
                Ok(hotel::get_hotel_details(
                    &self.store,
                    &args.location,
                    &args.hotel_name,
                ))
            }
            ToolKind::CalculateBookingCost => {
                let args: CostArgs = decode(&call.name, &call.input)?;
                Ok(hotel::calculate_booking_cost(
                    args.price_per_night,
                    args.nights,
                    args.tax_rate,
                ))
            }
            ToolKind::GetAvailableLocations => Ok(hotel::get_available_locations(&self.store)),
        }
    }
}

fn decode<T: DeserializeOwned>(tool: &str, input: &Value) -> Result<T, ToolError> {
    serde_json::from_value(input.clone())
        .map_err(|e| ToolError::InvalidInput(format!("{tool}: {e}")))
}

fn tool_specs() -> Vec<ToolSpec> {
    vec![
        ToolSpec {
            name: "search_hotels".into(),
            description: "Search for available hotels in a specific location, \
                          optionally filtered by maximum price per night."
                .into(),
            schema: json!({
                "type": "object",
                "properties": {
                    "location": {
                        "type": "string",
                        "description": "The city/location to search for hotels \
                                        (e.g., 'new_york', 'paris', 'tokyo', 'london', 'dubai')"
                    },
                    "max_price": {
                        "type": "integer",
                        "description": "Optional maximum price per night filter"
                    }
                },
                "required": ["location"]
            }),
        },
        ToolSpec {
            name: "get_hotel_details".into(),
            description: "Get detailed information about a specific hotel, including \
                          estimated weekly and monthly costs."
                .into(),
            schema: json!({
                "type": "object",
                "properties": {
                    "location": {
                        "type": "string",
                        "description": "The city/location of the hotel"
                    },
                    "hotel_name": {
                        "type": "string",
                        "description": "The name of the hotel"
                    }
                },
                "required": ["location", "hotel_name"]
            }),
        },
        ToolSpec {
            name: "calculate_booking_cost".into(),
            description: "Calculate the total cost of a hotel booking including taxes.".into(),
            schema: json!({
                "type": "object",
                "properties": {
                    "price_per_night": {
                        "type": "integer",
                        "description": "Price per night"
                    },
                    "nights": {
                        "type": "integer",
                        "description": "Number of nights"
                    },
                    "tax_rate": {
                        "type": "number",
                        "description": "Tax rate (default 12%)"
                    }
                },
                "required": ["price_per_night", "nights"]
            }),
        },
        ToolSpec {
            name: "get_available_locations".into(),
            description: "Get all available booking locations.".into(),
            schema: json!({
                "type": "object",
                "properties": {}
            }),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host() -> HotelToolHost {
        HotelToolHost::new(Arc::new(HotelStore::sample()))
    }

    fn call(name: &str, input: Value) -> ToolCall {
        ToolCall {
            id: "call_1".into(),
            name: name.into(),
            input,
        }
    }

    #[tokio::test]
    async fn resolution_is_case_insensitive() {
        let host = host();
        let result = host
            .execute(&call("Search_Hotels", json!({"location": "tokyo"})))
            .await
            .unwrap();

        assert_eq!(result["total_available"], 2);
    }

    #[tokio::test]
    async fn unknown_tool_is_not_found() {
        let host = host();
        let err = host
            .execute(&call("book_flight", json!({})))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "unknown tool: book_flight");
    }

    #[tokio::test]
    async fn malformed_arguments_are_invalid_input() {
        let host = host();
        let err = host
            .execute(&call("search_hotels", json!({"max_price": 300})))
            .await
            .unwrap_err();

        match err {
            ToolError::InvalidInput(detail) => assert!(detail.starts_with("search_hotels:")),
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn cost_tool_defaults_tax_rate() {
        let host = host();
        let result = host
            .execute(&call(
                "calculate_booking_cost",
                json!({"price_per_night": 200, "nights": 5}),
            ))
            .await
            .unwrap();

        assert_eq!(result["tax"], 120.0);
        assert_eq!(result["total_cost"], 1120.0);
    }

    #[tokio::test]
    async fn locations_tool_ignores_arguments() {
        let host = host();
        let result = host
            .execute(&call("get_available_locations", json!({})))
            .await
            .unwrap();

        assert_eq!(result["total_locations"], 5);
    }

    #[test]
    fn specs_cover_the_registry() {
        let host = host();
        let names: Vec<&str> = host.specs().iter().map(|s| s.name.as_str()).collect();

        assert_eq!(
            names,
            [
                "search_hotels",
                "get_hotel_details",
                "calculate_booking_cost",
                "get_available_locations"
            ]
        );
        for spec in host.specs() {
            assert!(ToolKind::resolve(&spec.name).is_some());
        }
    }
}
