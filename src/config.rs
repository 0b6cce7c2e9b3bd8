//! Server configuration and environment variable handling.

use std::env;
use std::path::PathBuf;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Directory holding one `{State}.csv` file per state
    pub dataset_dir: PathBuf,
    /// Gemini API key; suggestion endpoints fail without it
    pub gemini_api_key: Option<String>,
    /// Gemini model used for all generation requests
    pub gemini_model: String,
}

impl AppConfig {
    /// Create a new application configuration from environment variables.
    ///
    /// # Environment Variables
    /// - `HOST` (optional, default: 0.0.0.0): Server host
    /// - `PORT` (optional, default: 3000): Server port
    /// - `VILLAGE_DATASET_DIR` (optional, default: ./village_dataset):
    ///   Directory of per-state dataset files
    /// - `GEMINI_API_KEY` (optional): API key for the generative endpoints;
    ///   data endpoints work without it, the `/gemini*` routes do not
    /// - `GEMINI_MODEL` (optional, default: gemini-1.5-flash): Model name
    ///
    /// # Errors
    /// Returns an error if `PORT` is set but not a valid port number.
    pub fn from_env() -> Result<Self, String> {
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| "PORT must be a valid port number".to_string())?;
        let dataset_dir = env::var("VILLAGE_DATASET_DIR")
            .unwrap_or_else(|_| "./village_dataset".to_string())
            .into();
        let gemini_api_key = env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());
        let gemini_model =
            env::var("GEMINI_MODEL").unwrap_or_else(|_| "gemini-1.5-flash".to_string());

        Ok(Self {
            host,
            port,
            dataset_dir,
            gemini_api_key,
            gemini_model,
        })
    }
}
