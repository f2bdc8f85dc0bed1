//! Converts a [`Ranking`] into a GeoJSON `FeatureCollection`.
//!
//! GeoJSON positions are `[longitude, latitude]`. The first feature is
//! the user, followed by one feature per ranked carrier in rank order.

use serde_json::{json, Value};

use crate::{carrier::CarrierRecord, location::Coordinate, ranking::Ranking};

/// Builds the map data for a ranking around `user`.
///
/// Carriers are ranked from 1. Each carrier feature carries `name`,
/// `state`, `address` and `distance_km` properties for popups.
pub fn ranking_to_feature_collection(
    user: &Coordinate,
    ranking: &Ranking<'_, CarrierRecord>,
) -> Value {
    let mut features = vec![point_feature(
        user,
        json!({
            "kind": "user",
            "name": "Your Location",
        }),
    )];

    for (rank, entry) in ranking.entries.iter().enumerate() {
        let carrier = entry.carrier;
        features.push(point_feature(
            &entry.coordinate,
            json!({
                "kind": "carrier",
                "rank": rank + 1,
                "name": carrier.name,
                "state": carrier.state,
                "address": carrier.address,
                "distance_km": entry.distance_km,
            }),
        ));
    }

    json!({
        "type": "FeatureCollection",
        "features": features,
    })
}

fn point_feature(coordinate: &Coordinate, properties: Value) -> Value {
    json!({
        "type": "Feature",
        "geometry": {
            "type": "Point",
            "coordinates": [coordinate.longitude(), coordinate.latitude()],
        },
        "properties": properties,
    })
}
