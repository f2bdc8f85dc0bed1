//! Loads the geocoded carrier table from delimited text.
//!
//! The table has a header row. `carrier_name`, `lat` and `long` are
//! required; `state`, `location`, `address` and `full_address` are
//! optional. Cells that are not valid UTF-8 are decoded as ISO-8859-1.
//! A coordinate cell that is empty or does not parse as a number is
//! loaded as `None` and reported as skipped when ranking.

use std::{fs::File, io::Read, path::Path};

use csv::{ByteRecord, ReaderBuilder};

use crate::{carrier::CarrierRecord, error::LoadError};

const NAME_COLUMNS: &[&str] = &["carrier_name", "name"];
const LATITUDE_COLUMNS: &[&str] = &["lat", "latitude"];
const LONGITUDE_COLUMNS: &[&str] = &["long", "lng", "longitude"];

/// Carrier records loaded once per session.
#[derive(Debug, Clone, Default)]
pub struct CarrierTable {
    records: Vec<CarrierRecord>,
}

/// Positions of the known columns in the header row.
struct Columns {
    name: usize,
    state: Option<usize>,
    location: Option<usize>,
    address: Option<usize>,
    full_address: Option<usize>,
    latitude: usize,
    longitude: usize,
}

impl CarrierTable {
    /// Reads a carrier table from a file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<CarrierTable, LoadError> {
        let path = path.as_ref();
        info!("Loading carrier table from {}", path.display());
        let file = File::open(path)?;
        CarrierTable::from_reader(file)
    }

    /// Reads a carrier table from any byte source.
    pub fn from_reader(reader: impl Read) -> Result<CarrierTable, LoadError> {
        let mut reader = ReaderBuilder::new().flexible(true).from_reader(reader);
        let headers: Vec<String> = reader
            .byte_headers()?
            .iter()
            .map(|cell| decode(cell).trim_start_matches('\u{feff}').trim().to_lowercase())
            .collect();
        let columns = Columns::locate(&headers)?;
        debug!("carrier table headers: {:?}", headers);

        let mut records = Vec::new();
        let mut row = ByteRecord::new();
        while reader.read_byte_record(&mut row)? {
            records.push(columns.record(&row));
        }
        info!("Loaded {} carriers", records.len());
        Ok(CarrierTable { records })
    }

    /// All records, in file order.
    pub fn records(&self) -> &[CarrierRecord] {
        &self.records
    }

    /// Consumes the table, returning its records.
    pub fn into_records(self) -> Vec<CarrierRecord> {
        self.records
    }

    /// Number of rows loaded.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl From<Vec<CarrierRecord>> for CarrierTable {
    fn from(records: Vec<CarrierRecord>) -> Self {
        CarrierTable { records }
    }
}

//---------------------------------------------------------------
// Private functions
//---------------------------------------------------------------

impl Columns {
    fn locate(headers: &[String]) -> Result<Columns, LoadError> {
        Ok(Columns {
            name: find_column(headers, NAME_COLUMNS)
                .ok_or(LoadError::MissingColumn("carrier_name"))?,
            state: find_column(headers, &["state"]),
            location: find_column(headers, &["location"]),
            address: find_column(headers, &["address"]),
            full_address: find_column(headers, &["full_address"]),
            latitude: find_column(headers, LATITUDE_COLUMNS)
                .ok_or(LoadError::MissingColumn("lat"))?,
            longitude: find_column(headers, LONGITUDE_COLUMNS)
                .ok_or(LoadError::MissingColumn("long"))?,
        })
    }

    fn record(&self, row: &ByteRecord) -> CarrierRecord {
        let text = |column: Option<usize>| {
            column
                .and_then(|i| row.get(i))
                .map(|cell| decode(cell).trim().to_string())
                .unwrap_or_default()
        };
        let full_address = text(self.full_address);

        CarrierRecord {
            name: text(Some(self.name)),
            state: text(self.state),
            location: text(self.location),
            address: text(self.address),
            full_address: (!full_address.is_empty()).then_some(full_address),
            latitude: parse_degrees(row.get(self.latitude)),
            longitude: parse_degrees(row.get(self.longitude)),
        }
    }
}

fn find_column(headers: &[String], names: &[&str]) -> Option<usize> {
    headers.iter().position(|h| names.contains(&h.as_str()))
}

/// UTF-8 when possible, otherwise ISO-8859-1 (every byte maps to the
/// code point of the same value).
fn decode(cell: &[u8]) -> String {
    match std::str::from_utf8(cell) {
        Ok(text) => text.to_string(),
        Err(_) => cell.iter().map(|&b| char::from(b)).collect(),
    }
}

fn parse_degrees(cell: Option<&[u8]>) -> Option<f64> {
    let text = decode(cell?);
    let text = text.trim();
    if text.is_empty() {
        return None;
    }
    text.parse().ok()
}
