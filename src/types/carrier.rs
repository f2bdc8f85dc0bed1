//! Struct definitions and implementations for objects that can be
//! ranked by distance.
//!
//! The most generic form is anything implementing [`Locatable`]. In
//! practice, a ranked object is a [`CarrierRecord`] loaded from the
//! geocoded carrier table, but a warehouse or a depot could be ranked
//! the same way.
//!
//! The ranker takes a slice of any `Locatable`, so callers keep their
//! own record types and avoid copying into ours.

use serde::{Deserialize, Serialize};

use super::location::Coordinate;
use crate::error::CoordinateError;

/// Anything with a position that can be ranked by
/// [`rank_nearest`](crate::nearest::rank_nearest).
pub trait Locatable {
    /// Returns the validated position, or the reason it is unusable.
    fn coordinate(&self) -> Result<Coordinate, CoordinateError>;

    /// Human readable name, used when reporting a skipped record.
    fn label(&self) -> String;
}

//------------------------------------------------------------------
// Structs and Implementations
//------------------------------------------------------------------

/// One row of the carrier table.
///
/// The raw latitude/longitude cells are kept as they were read.
/// Validation happens at query time so that one broken row never
/// prevents the rest of the table from loading.
///
/// Serialized field names follow the table's columns (`carrier_name`,
/// `lat`, `long`).
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CarrierRecord {
    /// Company name.
    #[serde(rename = "carrier_name")]
    pub name: String,

    /// State the carrier is registered in.
    pub state: String,

    /// Free-text location, e.g. a city or an area.
    pub location: String,

    /// Street address.
    pub address: String,

    /// Address as fed to the geocoder, when the table has one.
    pub full_address: Option<String>,

    /// Raw latitude cell. `None` if the cell was empty or unparsable.
    #[serde(rename = "lat")]
    pub latitude: Option<f64>,

    /// Raw longitude cell. `None` if the cell was empty or unparsable.
    #[serde(rename = "long")]
    pub longitude: Option<f64>,
}

impl CarrierRecord {
    /// Creates a carrier at a known position with empty descriptive
    /// fields other than the name.
    pub fn at(name: &str, latitude: f64, longitude: f64) -> CarrierRecord {
        CarrierRecord {
            name: name.to_string(),
            latitude: Some(latitude),
            longitude: Some(longitude),
            ..Default::default()
        }
    }

    /// Text used to embed the carrier for semantic retrieval: name,
    /// state, location, address and full address separated by spaces.
    pub fn document_text(&self) -> String {
        format!(
            "{} {} {} {} {}",
            self.name,
            self.state,
            self.location,
            self.address,
            self.full_address.as_deref().unwrap_or_default()
        )
    }
}

impl Locatable for CarrierRecord {
    fn coordinate(&self) -> Result<Coordinate, CoordinateError> {
        Coordinate::from_parts(self.latitude, self.longitude)
    }

    fn label(&self) -> String {
        self.name.clone()
    }
}

/// A carrier prepared for an external embedding indexer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RetrievalDocument<'a> {
    /// Row position in the table, as a string id.
    pub id: String,

    /// See [`CarrierRecord::document_text`].
    pub document: String,

    /// The full record, stored alongside the vector.
    pub metadata: &'a CarrierRecord,
}

/// Builds one [`RetrievalDocument`] per carrier, in table order.
pub fn retrieval_documents(carriers: &[CarrierRecord]) -> Vec<RetrievalDocument<'_>> {
    carriers
        .iter()
        .enumerate()
        .map(|(index, carrier)| RetrievalDocument {
            id: index.to_string(),
            document: carrier.document_text(),
            metadata: carrier,
        })
        .collect()
}

//------------------------------------------------------------------
// Unit Tests
//------------------------------------------------------------------

#[cfg(test)]
mod carrier_type_tests {
    use super::*;

    #[test]
    fn test_coordinate_from_record() {
        let carrier = CarrierRecord::at("Ikeja Haulage", 6.6018, 3.3515);
        let coordinate = carrier.coordinate().unwrap();
        assert_eq!(coordinate.latitude(), 6.6018);
        assert_eq!(carrier.label(), "Ikeja Haulage");
    }

    #[test]
    fn test_unusable_coordinate_from_record() {
        let mut carrier = CarrierRecord::at("Kano Freight", 12.0022, 8.5920);
        carrier.longitude = None;
        assert_eq!(carrier.coordinate(), Err(CoordinateError::Missing));

        // Swapped columns push the latitude out of range.
        let swapped = CarrierRecord::at("Swapped", 3.3792, 106.5244);
        assert!(swapped.coordinate().is_ok());
        let swapped = CarrierRecord::at("Swapped", 106.5244, 3.3792);
        assert_eq!(
            swapped.coordinate(),
            Err(CoordinateError::LatitudeOutOfRange)
        );
    }

    #[test]
    fn test_document_text() {
        let carrier = CarrierRecord {
            name: "GIG Logistics".to_string(),
            state: "Lagos".to_string(),
            location: "Ikeja".to_string(),
            address: "1 Allen Avenue".to_string(),
            full_address: Some("1 Allen Avenue, Ikeja, Lagos".to_string()),
            latitude: Some(6.6018),
            longitude: Some(3.3515),
        };
        assert_eq!(
            carrier.document_text(),
            "GIG Logistics Lagos Ikeja 1 Allen Avenue 1 Allen Avenue, Ikeja, Lagos"
        );
    }

    #[test]
    fn test_retrieval_documents() {
        let carriers = vec![
            CarrierRecord::at("A", 1.0, 1.0),
            CarrierRecord::at("B", 2.0, 2.0),
        ];
        let documents = retrieval_documents(&carriers);
        assert_eq!(documents.len(), 2);
        assert_eq!(documents[1].id, "1");
        assert_eq!(documents[1].metadata.name, "B");

        let json = serde_json::to_value(&documents[0]).unwrap();
        let metadata = json["metadata"].as_object().unwrap();
        let mut keys: Vec<&str> = metadata.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "address",
                "carrier_name",
                "full_address",
                "lat",
                "location",
                "long",
                "state"
            ]
        );
        assert_eq!(metadata["carrier_name"], "A");
        assert_eq!(metadata["lat"], 1.0);
        assert_eq!(metadata["long"], 1.0);
    }

    /// A record in the table's own column shape deserializes.
    #[test]
    fn test_deserialize_table_shape() {
        let carrier: CarrierRecord = serde_json::from_str(
            r#"{"carrier_name": "GIG Logistics", "state": "Lagos", "location": "Ikeja",
                "address": "1 Allen Avenue", "full_address": null,
                "lat": 6.6018, "long": 3.3515}"#,
        )
        .unwrap();
        assert_eq!(carrier.name, "GIG Logistics");
        assert_eq!(carrier.latitude, Some(6.6018));
        assert_eq!(carrier.longitude, Some(3.3515));
    }
}
