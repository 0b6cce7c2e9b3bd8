//! Data Transfer Objects for the HTTP API.
//!
//! Request fields are `Option` so a missing field reaches the handler's
//! validation (and its 400 with a JSON body) instead of being rejected by
//! the extractor.

use serde::{Deserialize, Serialize};

pub use crate::dataset::records::{FacilityRecord, VillagePoint};
pub use crate::suggest::prompt::FacilitySummary;
use crate::suggest::prompt::LocationContext;

/// Extract a required field: present and non-empty after trimming.
fn required(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Request body for `POST /villageinfo`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VillageInfoRequest {
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub block: Option<String>,
    #[serde(default)]
    pub village: Option<String>,
}

impl VillageInfoRequest {
    /// All four fields, if each is present and non-empty.
    pub fn fields(&self) -> Option<(&str, &str, &str, &str)> {
        Some((
            required(&self.state)?,
            required(&self.district)?,
            required(&self.block)?,
            required(&self.village)?,
        ))
    }
}

/// Response body for `POST /villageinfo`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VillageInfoResponse {
    pub habitation_name: String,
    pub district: String,
    pub block: String,
    pub facilities: Vec<FacilityRecord>,
}

/// Request body shared by all `/gemini*` endpoints.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SuggestionRequest {
    #[serde(default)]
    pub village: Option<String>,
    #[serde(default)]
    pub block: Option<String>,
    #[serde(default)]
    pub district: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub facilities: Vec<FacilitySummary>,
}

impl SuggestionRequest {
    /// Validated location context, if all four fields are present.
    pub fn location(&self) -> Option<LocationContext> {
        Some(LocationContext {
            village: required(&self.village)?.to_string(),
            block: required(&self.block)?.to_string(),
            district: required(&self.district)?.to_string(),
            state: required(&self.state)?.to_string(),
        })
    }
}

/// Response for `POST /gemini`: free text, verbatim from the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestionsResponse {
    pub suggestions: String,
}

/// Response for `POST /gemini/structured`: parsed JSON array of
/// `{title, points[]}` objects.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StructuredSuggestionsResponse {
    pub suggestions: serde_json::Value,
}

/// Response for `POST /gemini-score`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoresResponse {
    pub scores: serde_json::Value,
}

/// Response for `POST /gemini-progress`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressResponse {
    pub progress: serde_json::Value,
}
