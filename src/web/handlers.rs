use actix_web::{web, HttpRequest, HttpResponse, Responder};
use log::{error, info};
use serde_json::{json, Value};
use uuid::Uuid;

use crate::auth;
use crate::error::ApiError;
use crate::prompt;
use crate::web::models::{ChatMessage, ChatResponse};
use crate::AppState;

// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

// Chat API endpoint
pub async fn chat(
    data: web::Data<AppState>,
    req: HttpRequest,
    payload: web::Bytes,
) -> Result<HttpResponse, ApiError> {
    let request_id = Uuid::new_v4();

    // Verify the session before anything else; no upstream call is made for
    // unauthenticated requests.
    let token = auth::bearer_token(&req).ok_or_else(ApiError::unauthorized)?;
    let user_id = data
        .verifier
        .verify(token)
        .await
        .ok_or_else(ApiError::unauthorized)?;

    let body: Value = serde_json::from_slice(&payload).map_err(|e| {
        error!("[{}] Unreadable chat request body: {}", request_id, e);
        ApiError::internal()
    })?;

    let raw_messages = body
        .get("messages")
        .and_then(Value::as_array)
        .ok_or_else(|| ApiError::BadRequest("Messages are required".to_string()))?;
    let memory_context = body.get("memoryContext").and_then(Value::as_str);

    let api_key = data.config.gemini_api_key.as_deref().ok_or_else(|| {
        error!("[{}] GEMINI_API_KEY is not configured", request_id);
        ApiError::Internal("API key not configured".to_string())
    })?;

    let messages: Vec<ChatMessage> = raw_messages.iter().map(ChatMessage::from_value).collect();
    let (current, history) = messages.split_last().ok_or_else(|| {
        error!("[{}] Chat request with empty messages array", request_id);
        ApiError::internal()
    })?;

    info!(
        "[{}] Chat request from user {}: {} prior turns, memory context: {}",
        request_id,
        user_id,
        history.len(),
        memory_context.map_or(0, str::len)
    );

    let full_prompt = prompt::build_prompt(history, &current.content, memory_context);

    let response = data
        .gemini
        .generate(api_key, &data.config.gemini_model, &full_prompt)
        .await?;

    Ok(HttpResponse::Ok().json(ChatResponse { response }))
}
