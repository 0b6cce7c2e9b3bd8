//! HTTP handlers for the REST API.
//!
//! Each handler validates its input, delegates to the dataset store or the
//! generative-suggestion component, and maps domain failures onto HTTP
//! status codes.

use axum::{
    extract::{Path, State},
    Json,
};

use super::dto::{
    ProgressResponse, ScoresResponse, StructuredSuggestionsResponse, SuggestionRequest,
    SuggestionsResponse, VillageInfoRequest, VillageInfoResponse, VillagePoint,
};
use super::error::AppError;
use super::state::AppState;
use crate::suggest::prompt;
use crate::suggest::{parse, LocationContext};

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

fn missing_location() -> AppError {
    AppError::InvalidRequest("Missing location data".to_string())
}

// =============================================================================
// Liveness
// =============================================================================

/// GET /
///
/// Plain-text liveness probe.
pub async fn liveness() -> &'static str {
    "Village Info API is running"
}

// =============================================================================
// Village Lookup
// =============================================================================

/// POST /villageinfo
///
/// Facility records for one village, matched case-insensitively on the
/// trimmed district/block/village triple.
pub async fn village_info(
    State(state): State<AppState>,
    Json(request): Json<VillageInfoRequest>,
) -> HandlerResult<VillageInfoResponse> {
    // Validate before touching the filesystem.
    let Some((state_name, district, block, village)) = request.fields() else {
        return Err(AppError::InvalidRequest(
            "State, district, block, and village are required in body".to_string(),
        ));
    };

    if !state.datasets.state_exists(state_name) {
        return Err(AppError::NotFound("State data not found".to_string()));
    }

    let matches = state
        .datasets
        .find_village(state_name, district, block, village)
        .map_err(|e| AppError::internal("village_info", e, "Error reading state data"))?;

    let Some(first) = matches.first() else {
        return Err(AppError::NotFound(
            "Village not found with given district and block".to_string(),
        ));
    };

    Ok(Json(VillageInfoResponse {
        habitation_name: village.to_string(),
        district: first.district.clone(),
        block: first.block.clone(),
        facilities: matches.iter().map(|row| row.to_record()).collect(),
    }))
}

// =============================================================================
// Dropdown Enumeration
// =============================================================================

/// GET /api/states
///
/// Available state dataset identifiers, sorted.
pub async fn list_states(State(state): State<AppState>) -> HandlerResult<Vec<String>> {
    let states = state
        .datasets
        .list_states()
        .map_err(|e| AppError::internal("list_states", e, "Error fetching states"))?;
    Ok(Json(states))
}

/// GET /api/districts/{state}
///
/// Distinct district names for a state, order of first appearance.
pub async fn list_districts(
    State(state): State<AppState>,
    Path(state_name): Path<String>,
) -> HandlerResult<Vec<String>> {
    let districts = state
        .datasets
        .districts(&state_name)
        .map_err(|e| AppError::internal("list_districts", e, "Error fetching districts"))?;
    Ok(Json(districts))
}

/// GET /api/blocks/{state}/{district}
///
/// Distinct block names under a district.
pub async fn list_blocks(
    State(state): State<AppState>,
    Path((state_name, district)): Path<(String, String)>,
) -> HandlerResult<Vec<String>> {
    let blocks = state
        .datasets
        .blocks(&state_name, &district)
        .map_err(|e| AppError::internal("list_blocks", e, "Error fetching blocks"))?;
    Ok(Json(blocks))
}

/// GET /api/villages/{state}/{district}/{block}
///
/// Villages under a district and block, coordinates as raw dataset text.
pub async fn list_villages(
    State(state): State<AppState>,
    Path((state_name, district, block)): Path<(String, String, String)>,
) -> HandlerResult<Vec<VillagePoint>> {
    let villages = state
        .datasets
        .villages(&state_name, &district, &block)
        .map_err(|e| AppError::internal("list_villages", e, "Error fetching villages"))?;
    Ok(Json(villages))
}

// =============================================================================
// Generative Suggestions
// =============================================================================

async fn generate(
    state: &AppState,
    operation: &'static str,
    prompt: String,
    failure_message: &str,
) -> Result<String, AppError> {
    state
        .generative
        .generate(&prompt)
        .await
        .map_err(|e| AppError::upstream(operation, e, failure_message))
}

fn validated_location(request: &SuggestionRequest) -> Result<LocationContext, AppError> {
    request.location().ok_or_else(missing_location)
}

/// POST /gemini
///
/// Free-text development suggestions, returned verbatim from the model.
pub async fn suggestions(
    State(state): State<AppState>,
    Json(request): Json<SuggestionRequest>,
) -> HandlerResult<SuggestionsResponse> {
    let location = validated_location(&request)?;
    let prompt = prompt::development_suggestions(&location, &request.facilities);

    let text = generate(
        &state,
        "suggestions",
        prompt,
        "Failed to fetch suggestions from Gemini.",
    )
    .await?;

    Ok(Json(SuggestionsResponse { suggestions: text }))
}

/// POST /gemini/structured
///
/// Development suggestions as a parsed JSON array of `{title, points[]}`.
pub async fn structured_suggestions(
    State(state): State<AppState>,
    Json(request): Json<SuggestionRequest>,
) -> HandlerResult<StructuredSuggestionsResponse> {
    let location = validated_location(&request)?;
    let prompt = prompt::structured_suggestions(&location, &request.facilities);

    let text = generate(
        &state,
        "structured_suggestions",
        prompt,
        "Failed to fetch suggestions from Gemini.",
    )
    .await?;

    let suggestions = parse::parse_json_reply(&text).map_err(|e| {
        AppError::upstream(
            "structured_suggestions",
            e,
            "Failed to fetch suggestions from Gemini.",
        )
    })?;

    Ok(Json(StructuredSuggestionsResponse { suggestions }))
}

/// POST /gemini-score
///
/// Per-sector development scores, fence-stripped and parsed as JSON.
pub async fn sector_scores(
    State(state): State<AppState>,
    Json(request): Json<SuggestionRequest>,
) -> HandlerResult<ScoresResponse> {
    let location = validated_location(&request)?;
    let prompt = prompt::sector_scores(&location, &request.facilities);

    let text = generate(
        &state,
        "sector_scores",
        prompt,
        "Failed to fetch scores from Gemini.",
    )
    .await?;

    let scores = parse::parse_fenced_json_reply(&text)
        .map_err(|e| AppError::upstream("sector_scores", e, "Failed to fetch scores from Gemini."))?;

    Ok(Json(ScoresResponse { scores }))
}

/// POST /gemini-progress
///
/// Simulated 2019-2023 progress trends, fence-stripped and parsed as JSON.
pub async fn progress_trends(
    State(state): State<AppState>,
    Json(request): Json<SuggestionRequest>,
) -> HandlerResult<ProgressResponse> {
    let location = validated_location(&request)?;
    let prompt = prompt::progress_trends(&location, &request.facilities);

    let text = generate(
        &state,
        "progress_trends",
        prompt,
        "Failed to fetch progress data from Gemini.",
    )
    .await?;

    let progress = parse::parse_fenced_json_reply(&text).map_err(|e| {
        AppError::upstream(
            "progress_trends",
            e,
            "Failed to fetch progress data from Gemini.",
        )
    })?;

    Ok(Json(ProgressResponse { progress }))
}
