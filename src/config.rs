use std::env;

use anyhow::{Context, Result};

pub const DEFAULT_MODEL: &str = "gemini-1.5-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";

/// Process-wide configuration, resolved once at startup and injected into the
/// handlers instead of being re-read from the environment on every request.
#[derive(Debug, Clone)]
pub struct Config {
    /// Gemini API key. Absence is surfaced per request as a 500, not at startup.
    pub gemini_api_key: Option<String>,
    pub gemini_model: String,
    pub gemini_base_url: String,
    /// Identity-provider endpoint that session tokens are verified against.
    pub identity_verify_url: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let gemini_api_key = env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());

        let gemini_model = env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        let gemini_base_url =
            env::var("GEMINI_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());

        let identity_verify_url =
            env::var("IDENTITY_VERIFY_URL").context("IDENTITY_VERIFY_URL must be set")?;

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse::<u16>()
            .context("PORT must be a valid port number")?;

        Ok(Self {
            gemini_api_key,
            gemini_model,
            gemini_base_url,
            identity_verify_url,
            host,
            port,
        })
    }
}
