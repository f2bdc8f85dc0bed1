//! Definition of the [`Ranking`] returned by a proximity query.
use serde::Serialize;

use crate::{error::CoordinateError, location::Coordinate};

/// A carrier paired with its distance from the user.
#[derive(Debug, Serialize)]
pub struct RankedCarrier<'a, T> {
    /// The ranked record, borrowed from the caller's table.
    pub carrier: &'a T,

    /// The carrier's validated position.
    pub coordinate: Coordinate,

    /// Great-circle distance from the user, in kilometers.
    pub distance_km: f64,

    /// Position of the record in the input table.
    pub index: usize,
}

/// A record left out of the ranking because its position is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkippedRecord {
    /// Position of the record in the input table.
    pub index: usize,

    /// See [`Locatable::label`](super::carrier::Locatable::label).
    pub label: String,

    /// Why the coordinate was rejected.
    #[serde(serialize_with = "serialize_reason")]
    pub reason: CoordinateError,
}

fn serialize_reason<S>(reason: &CoordinateError, serializer: S) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    serializer.collect_str(reason)
}

/// The closest carriers, ascending by distance, ties in input order.
///
/// Built fresh for every query and never cached.
#[derive(Debug, Serialize)]
pub struct Ranking<'a, T> {
    /// At most `n` entries, distances non-decreasing.
    pub entries: Vec<RankedCarrier<'a, T>>,

    /// Every record that could not be ranked, in input order.
    pub skipped: Vec<SkippedRecord>,
}

impl<'a, T> Ranking<'a, T> {
    /// Number of carriers with unusable location data.
    pub fn skipped_count(&self) -> usize {
        self.skipped.len()
    }

    /// Number of ranked carriers.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if no carrier could be ranked.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The ranked carriers without their distances.
    pub fn carriers(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.entries.iter().map(|entry| entry.carrier)
    }
}
