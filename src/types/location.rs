//! Struct definitions and implementations for [`Coordinate`].
//!
//! A `Coordinate` can only be built through validation, so holding one
//! means the latitude and longitude are present, finite and in range.

use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::error::CoordinateError;

/// A [`Coordinate`] represents the geographic position of a user or a
/// carrier. Typically, this type is used in tandem with the
/// [`Locatable`](`super::carrier::Locatable`) trait.
///
/// `f64` is used because carrier tables commonly carry six or more
/// decimals, which is sub-meter precision.
#[derive(Debug, PartialEq, Hash, Eq, Copy, Clone, Serialize)]
pub struct Coordinate {
    /// The latitude of the location, in degrees.
    latitude: OrderedFloat<f64>,

    /// The longitude of the location, in degrees.
    longitude: OrderedFloat<f64>,
}

impl Coordinate {
    /// Validates a latitude/longitude pair.
    ///
    /// # Arguments
    /// * `latitude` - Degrees, within [-90, 90].
    /// * `longitude` - Degrees, within [-180, 180].
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, CoordinateError> {
        if !latitude.is_finite() || !longitude.is_finite() {
            return Err(CoordinateError::NotFinite);
        }
        if !(-90.0..=90.0).contains(&latitude) {
            return Err(CoordinateError::LatitudeOutOfRange);
        }
        if !(-180.0..=180.0).contains(&longitude) {
            return Err(CoordinateError::LongitudeOutOfRange);
        }
        Ok(Coordinate {
            latitude: OrderedFloat(latitude),
            longitude: OrderedFloat(longitude),
        })
    }

    /// Same as [`Coordinate::new`] for values that may be absent, such
    /// as cells of a data file.
    pub fn from_parts(
        latitude: Option<f64>,
        longitude: Option<f64>,
    ) -> Result<Self, CoordinateError> {
        match (latitude, longitude) {
            (Some(latitude), Some(longitude)) => Coordinate::new(latitude, longitude),
            _ => Err(CoordinateError::Missing),
        }
    }

    /// Latitude in degrees.
    pub fn latitude(&self) -> f64 {
        self.latitude.into_inner()
    }

    /// Longitude in degrees.
    pub fn longitude(&self) -> f64 {
        self.longitude.into_inner()
    }
}

/// Deserialization goes through [`Coordinate::new`] so that a
/// deserialized coordinate is as trustworthy as a constructed one.
impl<'de> Deserialize<'de> for Coordinate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            latitude: f64,
            longitude: f64,
        }

        let raw = Raw::deserialize(deserializer)?;
        Coordinate::new(raw.latitude, raw.longitude).map_err(serde::de::Error::custom)
    }
}

impl TryFrom<(f64, f64)> for Coordinate {
    type Error = CoordinateError;

    fn try_from(pair: (f64, f64)) -> Result<Self, Self::Error> {
        Coordinate::new(pair.0, pair.1)
    }
}
