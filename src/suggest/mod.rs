//! Generative-suggestion component.
//!
//! Builds one prompt per request from validated location fields and a
//! facility summary, issues a single round trip to the Gemini
//! `generateContent` API, and optionally post-processes the reply
//! (code-fence stripping, JSON parsing). No retry, no timeout override,
//! no rate limiting; any API or parse failure is terminal for the request.

pub mod client;
pub mod error;
pub mod parse;
pub mod prompt;

pub use client::{GeminiClient, GenerativeClient};
pub use error::{SuggestError, SuggestResult};
pub use prompt::{FacilitySummary, LocationContext};
