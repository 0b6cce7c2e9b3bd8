//! Row and record types for the per-state facility datasets.

use serde::{Deserialize, Serialize};

/// One row of a state dataset file, as stored on disk.
///
/// Fields default to empty strings so short rows deserialize instead of
/// failing the whole file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FacilityRow {
    #[serde(rename = "District", default)]
    pub district: String,
    #[serde(rename = "Block", default)]
    pub block: String,
    #[serde(rename = "Habitation Name", default)]
    pub habitation_name: String,
    #[serde(rename = "Facility Name", default)]
    pub facility_name: String,
    #[serde(rename = "Address", default)]
    pub address: String,
    #[serde(rename = "Facility Category", default)]
    pub category: String,
    #[serde(rename = "Facility Subcategory", default)]
    pub subcategory: String,
    // The dataset header spells it "Lattitude".
    #[serde(rename = "Lattitude", default)]
    pub latitude: String,
    #[serde(rename = "Longitude", default)]
    pub longitude: String,
}

impl FacilityRow {
    /// Convert a raw row to the facility record surfaced to clients.
    ///
    /// Coordinates are parsed to numeric; malformed values become `None`
    /// (serialized as `null`) rather than failing the request.
    pub fn to_record(&self) -> FacilityRecord {
        FacilityRecord {
            facility_name: self.facility_name.clone(),
            address: self.address.clone(),
            category: self.category.clone(),
            subcategory: self.subcategory.clone(),
            latitude: parse_coordinate(&self.latitude),
            longitude: parse_coordinate(&self.longitude),
        }
    }
}

/// Parse a coordinate from its raw textual form.
fn parse_coordinate(raw: &str) -> Option<f64> {
    raw.trim().parse().ok()
}

/// Facility record returned by `POST /villageinfo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityRecord {
    pub facility_name: String,
    pub address: String,
    pub category: String,
    pub subcategory: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Dropdown entry for a village.
///
/// Coordinates are passed through in whatever textual form the dataset
/// stores, not parsed to numeric.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VillagePoint {
    pub name: String,
    pub latitude: String,
    pub longitude: String,
}
