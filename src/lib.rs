//! Logistics Carrier Locator Library.
//! Ranks known carriers by great-circle distance from a user location.

#[macro_use]
extern crate log;

pub mod config;
pub mod error;

/// Data types.
pub mod types {
    pub mod carrier;
    pub mod location;
    pub mod locator;
    pub mod ranking;
}

/// Helpers: distance, loading and output shaping.
pub mod utils {
    pub mod carrier_table;
    pub mod generator;
    pub mod geojson;
    pub mod haversine;
}

/// Ranking algorithms.
pub mod algorithms {
    pub mod nearest;
}

pub use algorithms::*;
pub use types::*;
pub use utils::*;

pub use error::{CoordinateError, InvalidInputError, LoadError, LocatorError};
pub use locator::engine::CarrierLocator;
pub use nearest::{rank_nearest, rank_nearest_raw, RequestedCount};
