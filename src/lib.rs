pub mod auth;
pub mod config;
pub mod error;
pub mod gemini;
pub mod memory;
pub mod prompt;
pub mod web;

use std::sync::Arc;

use auth::SessionVerifier;
use config::Config;
use gemini::GeminiClient;

// App state structure
pub struct AppState {
    pub config: Config,
    pub gemini: GeminiClient,
    pub verifier: Arc<dyn SessionVerifier>,
}
