//! Error types shared by the ranker, the carrier table loader and the
//! [`CarrierLocator`](crate::locator::engine::CarrierLocator).

use thiserror::Error;

/// Why a coordinate failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CoordinateError {
    /// Latitude or longitude was not provided.
    #[error("coordinate is missing a latitude or longitude value")]
    Missing,

    /// A value was NaN or infinite.
    #[error("coordinate contains a non-finite value")]
    NotFinite,

    /// Latitude outside of [-90, 90].
    #[error("latitude is outside of [-90, 90]")]
    LatitudeOutOfRange,

    /// Longitude outside of [-180, 180].
    #[error("longitude is outside of [-180, 180]")]
    LongitudeOutOfRange,
}

/// The caller handed the ranker something it cannot rank against.
///
/// This is a caller bug and is never retried.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidInputError {
    /// The user location failed validation.
    #[error("invalid user location: {0}")]
    InvalidCoordinate(#[from] CoordinateError),

    /// The requested number of carriers was zero or negative.
    #[error("requested carrier count must be positive, got {0}")]
    NonPositiveCount(i64),
}

/// Failures while reading a carrier table.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The data file could not be opened or read.
    #[error("failed to read carrier data: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not well-formed delimited text.
    #[error("malformed carrier data: {0}")]
    Csv(#[from] csv::Error),

    /// A column the ranker needs is absent from the header row.
    #[error("carrier data is missing required column `{0}`")]
    MissingColumn(&'static str),
}

/// Top-level error for the locator engine and the command line.
#[derive(Debug, Error)]
pub enum LocatorError {
    /// See [`LoadError`].
    #[error(transparent)]
    Load(#[from] LoadError),

    /// See [`InvalidInputError`].
    #[error(transparent)]
    InvalidInput(#[from] InvalidInputError),

    /// A result could not be written as JSON.
    #[error("failed to serialize output: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl From<CoordinateError> for LocatorError {
    fn from(err: CoordinateError) -> Self {
        LocatorError::InvalidInput(err.into())
    }
}

#[cfg(test)]
mod error_tests {
    use super::*;

    #[test]
    fn test_coordinate_error_is_invalid_input() {
        let err = LocatorError::from(CoordinateError::LatitudeOutOfRange);
        assert!(matches!(
            err,
            LocatorError::InvalidInput(InvalidInputError::InvalidCoordinate(
                CoordinateError::LatitudeOutOfRange
            ))
        ));
        assert_eq!(
            err.to_string(),
            "invalid user location: latitude is outside of [-90, 90]"
        );
    }

    #[test]
    fn test_serialize_error_is_kept() {
        let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err = LocatorError::from(json_err);
        assert!(matches!(err, LocatorError::Serialize(_)));
        assert!(err.to_string().starts_with("failed to serialize output"));
    }
}
