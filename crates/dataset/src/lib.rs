//! In-memory hotel dataset.
//!
//! The dataset is a closed, static mapping from location keys to hotel
//! records, built once at process start and never mutated. Lookups go
//! through [`HotelStore`]; raw location strings are normalized with
//! [`normalize_location`] before they touch the store.

mod hotels;
mod store;

pub use store::{Hotel, HotelStore, normalize_location};
