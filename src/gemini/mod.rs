use log::{debug, error, info};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::config::DEFAULT_BASE_URL;
use crate::error::ApiError;

pub const TEMPERATURE: f32 = 0.7;
pub const MAX_OUTPUT_TOKENS: u32 = 800;
pub const FALLBACK_RESPONSE: &str =
    "I'm sorry, I couldn't generate a response. Please try again.";

// A wrapper for the Gemini generateContent API
pub struct GeminiClient {
    client: Client,
    base_url: String,
}

#[derive(Serialize)]
struct GenerateRequest<'a> {
    contents: Vec<Content<'a>>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Serialize)]
struct Content<'a> {
    parts: Vec<Part<'a>>,
}

#[derive(Serialize)]
struct Part<'a> {
    text: &'a str,
}

#[derive(Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: Option<CandidateContent>,
}

#[derive(Deserialize)]
struct CandidateContent {
    #[serde(default)]
    parts: Vec<TextPart>,
}

#[derive(Deserialize)]
struct TextPart {
    text: Option<String>,
}

impl GeminiClient {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different host (used by tests).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Send a single-turn generation request and return the reply text.
    ///
    /// Non-2xx statuses are classified into the API error taxonomy; the raw
    /// upstream body is logged for diagnostics but never returned. A 2xx
    /// response with no usable candidate text yields a fixed fallback reply
    /// rather than an error.
    pub async fn generate(
        &self,
        api_key: &str,
        model: &str,
        prompt: &str,
    ) -> Result<String, ApiError> {
        let url = format!(
            "{}/v1/models/{}:generateContent?key={}",
            self.base_url, model, api_key
        );

        let payload = GenerateRequest {
            contents: vec![Content {
                parts: vec![Part { text: prompt }],
            }],
            generation_config: GenerationConfig {
                temperature: TEMPERATURE,
                max_output_tokens: MAX_OUTPUT_TOKENS,
            },
        };

        debug!("Prompt: {}", prompt);
        info!("Making request to Gemini API with model: {}", model);

        let response = self
            .client
            .post(&url)
            .json(&payload)
            .send()
            .await
            .map_err(|e| {
                error!("Gemini API request failed: {}", e);
                ApiError::internal()
            })?;

        let status = response.status();
        info!("Gemini API response status: {}", status);

        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            error!("Gemini API error response ({}): {}", status, error_body);

            return Err(match status.as_u16() {
                400 => ApiError::BadRequest("Bad request to AI service".to_string()),
                401 => ApiError::Unauthorized("API key unauthorized".to_string()),
                code => ApiError::Upstream(code),
            });
        }

        let body: GenerateResponse = response.json().await.map_err(|e| {
            error!("Failed to parse Gemini API response: {}", e);
            ApiError::internal()
        })?;

        let text = body
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .and_then(|content| content.parts.into_iter().next())
            .and_then(|part| part.text)
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| FALLBACK_RESPONSE.to_string());

        info!("Response length: {} characters", text.len());
        Ok(text)
    }
}

impl Default for GeminiClient {
    fn default() -> Self {
        Self::new()
    }
}
