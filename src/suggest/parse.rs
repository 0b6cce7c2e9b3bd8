//! Post-processing of model replies.

use serde_json::Value;

use super::error::{SuggestError, SuggestResult};

/// Strip one surrounding Markdown code fence, if present.
///
/// Handles ``` and ```json openings, with or without a trailing newline
/// before the closing fence. Unfenced text comes back trimmed, unchanged.
pub fn strip_code_fences(raw: &str) -> &str {
    let trimmed = raw.trim();
    let Some(rest) = trimmed.strip_prefix("```") else {
        return trimmed;
    };
    // Drop the rest of the opening fence line (optional language tag).
    let rest = match rest.find('\n') {
        Some(i) => &rest[i + 1..],
        None => rest,
    };
    match rest.strip_suffix("```") {
        Some(inner) => inner.trim(),
        None => trimmed,
    }
}

/// Parse a reply the prompt asked to be raw JSON.
pub fn parse_json_reply(raw: &str) -> SuggestResult<Value> {
    serde_json::from_str(raw.trim())
        .map_err(|e| SuggestError::MalformedReply(format!("invalid JSON from model: {}", e)))
}

/// Fence-strip, then parse as JSON.
///
/// Contract of the score and progress endpoints: a reply wrapped in
/// ```json fences still parses.
pub fn parse_fenced_json_reply(raw: &str) -> SuggestResult<Value> {
    parse_json_reply(strip_code_fences(raw))
}
