//! Ranks carriers by proximity to a user location.
//!
//! A single pass computes the haversine distance from the user to every
//! carrier with a usable coordinate and keeps the `n` closest in a
//! bounded max-heap. Heap keys are `(distance, index)` pairs, so equal
//! distances resolve to the carrier seen first.

use std::{cmp::Ordering, collections::BinaryHeap};

use ordered_float::OrderedFloat;

use crate::{
    error::InvalidInputError,
    haversine,
    location::Coordinate,
    ranking::{RankedCarrier, Ranking, SkippedRecord},
    types::carrier::Locatable,
};

/// A validated, strictly positive number of carriers to return.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct RequestedCount(usize);

impl RequestedCount {
    /// Returns the count as a `usize`.
    pub fn get(self) -> usize {
        self.0
    }
}

impl TryFrom<i64> for RequestedCount {
    type Error = InvalidInputError;

    fn try_from(n: i64) -> Result<Self, Self::Error> {
        match usize::try_from(n) {
            Ok(count) if count > 0 => Ok(RequestedCount(count)),
            _ => Err(InvalidInputError::NonPositiveCount(n)),
        }
    }
}

impl TryFrom<usize> for RequestedCount {
    type Error = InvalidInputError;

    fn try_from(n: usize) -> Result<Self, Self::Error> {
        if n == 0 {
            return Err(InvalidInputError::NonPositiveCount(0));
        }
        Ok(RequestedCount(n))
    }
}

/// A heap entry. Ordered by `(distance, index)` only; indices are
/// unique, so two candidates never compare equal.
#[derive(Debug)]
struct Candidate {
    distance: OrderedFloat<f64>,
    index: usize,
    coordinate: Coordinate,
}

impl Candidate {
    fn key(&self) -> (OrderedFloat<f64>, usize) {
        (self.distance, self.index)
    }
}

impl PartialEq for Candidate {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Candidate {}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

/// Find the `n` carriers closest to `user`.
///
/// # Arguments
/// * `user` - The location to measure from.
/// * `carriers` - The carrier table. Never mutated.
/// * `n` - How many carriers to return. Must be positive.
///
/// # Returns
/// A [`Ranking`] with `min(n, valid carriers)` entries, ascending by
/// distance. Carriers with an unusable coordinate are left out and
/// listed in [`Ranking::skipped`].
///
/// # Errors
/// [`InvalidInputError::NonPositiveCount`] if `n` is zero.
///
/// # Time Complexity
/// *O*(*len* log *n*).
pub fn rank_nearest<'a, T: Locatable>(
    user: &Coordinate,
    carriers: &'a [T],
    n: usize,
) -> Result<Ranking<'a, T>, InvalidInputError> {
    let n = RequestedCount::try_from(n)?.get();

    let mut skipped = Vec::new();
    let mut closest: BinaryHeap<Candidate> = BinaryHeap::with_capacity(n.min(carriers.len()) + 1);

    for (index, carrier) in carriers.iter().enumerate() {
        let coordinate = match carrier.coordinate() {
            Ok(coordinate) => coordinate,
            Err(reason) => {
                skipped.push(SkippedRecord {
                    index,
                    label: carrier.label(),
                    reason,
                });
                continue;
            }
        };

        let candidate = Candidate {
            distance: OrderedFloat(haversine::distance(user, &coordinate)),
            index,
            coordinate,
        };
        if closest.len() < n {
            closest.push(candidate);
        } else if let Some(mut farthest) = closest.peek_mut() {
            if candidate < *farthest {
                *farthest = candidate;
            }
        }
    }

    let entries = closest
        .into_sorted_vec()
        .into_iter()
        .map(|candidate| RankedCarrier {
            carrier: &carriers[candidate.index],
            coordinate: candidate.coordinate,
            distance_km: candidate.distance.into_inner(),
            index: candidate.index,
        })
        .collect();

    Ok(Ranking { entries, skipped })
}

/// Same as [`rank_nearest`] for a user location that has not been
/// validated yet.
///
/// # Errors
/// [`InvalidInputError::InvalidCoordinate`] if the location is out of
/// range or not finite, otherwise as [`rank_nearest`].
pub fn rank_nearest_raw<T: Locatable>(
    latitude: f64,
    longitude: f64,
    carriers: &[T],
    n: usize,
) -> Result<Ranking<'_, T>, InvalidInputError> {
    let user = Coordinate::new(latitude, longitude)?;
    rank_nearest(&user, carriers, n)
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------
