//! Tool execution against the hotel dataset.

pub mod errors;
mod host;
pub mod hotel;

pub use errors::ToolError;
pub use host::{HotelToolHost, ToolHost};
