//! Gemini REST client and the trait seam the handlers depend on.

use async_trait::async_trait;

use super::error::{SuggestError, SuggestResult};

const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Text-generation backend behind the suggestion endpoints.
///
/// Handlers hold an `Arc<dyn GenerativeClient>`, so tests can substitute
/// a stub for the real Gemini client.
#[async_trait]
pub trait GenerativeClient: Send + Sync {
    /// One prompt in, the model's raw text out.
    async fn generate(&self, prompt: &str) -> SuggestResult<String>;
}

/// Client for the Gemini `generateContent` REST endpoint.
pub struct GeminiClient {
    client: reqwest::Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Create a client for the given model.
    ///
    /// The API key may be absent; calls then fail with
    /// [`SuggestError::MissingApiKey`] instead of preventing startup.
    pub fn new(api_key: Option<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
            model: model.into(),
            api_key,
        }
    }

    /// Point the client at a different API host.
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent",
            self.base_url.trim_end_matches('/'),
            self.model
        )
    }
}

#[async_trait]
impl GenerativeClient for GeminiClient {
    async fn generate(&self, prompt: &str) -> SuggestResult<String> {
        let api_key = self.api_key.as_deref().ok_or(SuggestError::MissingApiKey)?;

        let body = serde_json::json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });

        let response = self
            .client
            .post(self.endpoint())
            .header("x-goog-api-key", api_key)
            .json(&body)
            .send()
            .await?
            .error_for_status()?;

        let json: serde_json::Value = response.json().await?;

        // The generated text sits at candidates[0].content.parts[0].text.
        let text = json["candidates"]
            .get(0)
            .and_then(|c| c["content"]["parts"].get(0))
            .and_then(|p| p["text"].as_str())
            .unwrap_or("");

        if text.trim().is_empty() {
            return Err(SuggestError::MalformedReply(
                "no text in model response".to_string(),
            ));
        }
        Ok(text.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_includes_model_and_trims_slash() {
        let client = GeminiClient::new(Some("k".to_string()), "gemini-1.5-flash")
            .with_base_url("http://localhost:9999/");
        assert_eq!(
            client.endpoint(),
            "http://localhost:9999/v1beta/models/gemini-1.5-flash:generateContent"
        );
    }

    #[tokio::test]
    async fn test_generate_without_key_fails() {
        let client = GeminiClient::new(None, "gemini-1.5-flash");
        let err = client.generate("hello").await.unwrap_err();
        assert!(matches!(err, SuggestError::MissingApiKey));
    }
}
