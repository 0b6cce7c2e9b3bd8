//! Prompt templates for the suggestion endpoints.
//!
//! Each endpoint interpolates the validated location fields and a bulleted
//! facility summary into one fixed template. The structured templates ask
//! the model for bare JSON with no markdown or commentary.

use serde::{Deserialize, Serialize};

/// Placeholder used when the caller supplies no facilities.
pub const NO_FACILITIES: &str = "No facilities listed.";

/// Facility context supplied by the caller of a suggestion endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilitySummary {
    pub facility_name: String,
    pub category: String,
    pub subcategory: String,
}

/// Validated location fields common to all suggestion prompts.
#[derive(Debug, Clone)]
pub struct LocationContext {
    pub village: String,
    pub block: String,
    pub district: String,
    pub state: String,
}

/// Render the bulleted facility list embedded in every prompt.
fn facility_list(facilities: &[FacilitySummary]) -> String {
    if facilities.is_empty() {
        return NO_FACILITIES.to_string();
    }
    facilities
        .iter()
        .map(|f| {
            format!(
                "- {} ({} - {})",
                f.facility_name,
                f.category.trim(),
                f.subcategory
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Free-text development suggestions (`POST /gemini`).
pub fn development_suggestions(loc: &LocationContext, facilities: &[FacilitySummary]) -> String {
    format!(
        "You are an expert in rural development. Suggest realistic and impactful development \
         ideas for the village '{}', located in block '{}', district '{}', state '{}', India.\n\n\
         Available facilities in the village:\n{}\n\n\
         Based on this, what areas (education, healthcare, agriculture, transportation, etc.) \
         need attention and what should be developed or improved? Present your answer in bullet \
         points.",
        loc.village,
        loc.block,
        loc.district,
        loc.state,
        facility_list(facilities)
    )
}

/// Sectioned development suggestions (`POST /gemini/structured`).
///
/// Asks for a JSON array of `{title, points[]}` objects.
pub fn structured_suggestions(loc: &LocationContext, facilities: &[FacilitySummary]) -> String {
    format!(
        "You are an expert in rural development. Suggest realistic and impactful development \
         ideas for the village '{}', located in block '{}', district '{}', state '{}', India.\n\n\
         Available facilities in the village:\n{}\n\n\
         Respond with ONLY a JSON array, no markdown and no commentary. Each element must be an \
         object with a \"title\" string naming the development area and a \"points\" array of \
         short suggestion strings.",
        loc.village,
        loc.block,
        loc.district,
        loc.state,
        facility_list(facilities)
    )
}

/// Per-sector development scores (`POST /gemini-score`).
pub fn sector_scores(loc: &LocationContext, facilities: &[FacilitySummary]) -> String {
    format!(
        "You are an expert in rural development. Assess the current development status of the \
         village '{}', located in block '{}', district '{}', state '{}', India.\n\n\
         Available facilities in the village:\n{}\n\n\
         Score the sectors education, healthcare, water supply and electricity. Respond with \
         ONLY a JSON object, no markdown and no commentary, keyed \"education\", \"healthcare\", \
         \"waterSupply\" and \"electricity\", where each value is an object with a numeric \
         \"score\" from 0 to 100 and a one-sentence \"reason\".",
        loc.village,
        loc.block,
        loc.district,
        loc.state,
        facility_list(facilities)
    )
}

/// Simulated five-year progress trends (`POST /gemini-progress`).
pub fn progress_trends(loc: &LocationContext, facilities: &[FacilitySummary]) -> String {
    format!(
        "You are an expert in rural development. Simulate plausible development progress for \
         the village '{}', located in block '{}', district '{}', state '{}', India.\n\n\
         Available facilities in the village:\n{}\n\n\
         Respond with ONLY a JSON array, no markdown and no commentary, with one element per \
         year from 2019 to 2023. Each element must be an object with a numeric \"year\" and \
         numeric scores from 0 to 100 for \"education\", \"healthcare\", \"waterSupply\" and \
         \"electricity\".",
        loc.village,
        loc.block,
        loc.district,
        loc.state,
        facility_list(facilities)
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loc() -> LocationContext {
        LocationContext {
            village: "Wagholi".to_string(),
            block: "Haveli".to_string(),
            district: "Pune".to_string(),
            state: "Maharashtra".to_string(),
        }
    }

    fn facilities() -> Vec<FacilitySummary> {
        vec![
            FacilitySummary {
                facility_name: "Primary School".to_string(),
                category: "Education ".to_string(),
                subcategory: "School".to_string(),
            },
            FacilitySummary {
                facility_name: "Health Sub Centre".to_string(),
                category: "Health".to_string(),
                subcategory: "Sub Centre".to_string(),
            },
        ]
    }

    #[test]
    fn test_facility_list_bullets_and_trims_category() {
        let prompt = development_suggestions(&loc(), &facilities());
        assert!(prompt.contains("- Primary School (Education - School)"));
        assert!(prompt.contains("- Health Sub Centre (Health - Sub Centre)"));
    }

    #[test]
    fn test_facility_list_placeholder_when_empty() {
        let prompt = development_suggestions(&loc(), &[]);
        assert!(prompt.contains(NO_FACILITIES));
    }

    #[test]
    fn test_prompts_embed_location() {
        for prompt in [
            development_suggestions(&loc(), &[]),
            structured_suggestions(&loc(), &[]),
            sector_scores(&loc(), &[]),
            progress_trends(&loc(), &[]),
        ] {
            assert!(prompt.contains("'Wagholi'"));
            assert!(prompt.contains("'Haveli'"));
            assert!(prompt.contains("'Pune'"));
            assert!(prompt.contains("'Maharashtra'"));
        }
    }

    #[test]
    fn test_structured_prompt_names_fields() {
        let prompt = structured_suggestions(&loc(), &[]);
        assert!(prompt.contains("\"title\""));
        assert!(prompt.contains("\"points\""));
    }

    #[test]
    fn test_score_prompt_names_sectors() {
        let prompt = sector_scores(&loc(), &[]);
        for sector in ["\"education\"", "\"healthcare\"", "\"waterSupply\"", "\"electricity\""] {
            assert!(prompt.contains(sector));
        }
    }

    #[test]
    fn test_progress_prompt_covers_year_range() {
        let prompt = progress_trends(&loc(), &[]);
        assert!(prompt.contains("2019"));
        assert!(prompt.contains("2023"));
    }
}
