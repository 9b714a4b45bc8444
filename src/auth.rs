//! Session verification. Token issuance and sign-in flows belong to the
//! external identity provider; this module only decides whether an opaque
//! bearer token corresponds to a live session.

use actix_web::http::header;
use actix_web::HttpRequest;
use async_trait::async_trait;
use log::{debug, error};
use reqwest::Client;
use serde::Deserialize;
use serde_json::json;

/// Collaborator that resolves an opaque session token to a user id.
#[async_trait]
pub trait SessionVerifier: Send + Sync {
    /// Returns the user id for a valid session, or `None` when the token is
    /// unknown, expired, or the verification service rejects it.
    async fn verify(&self, token: &str) -> Option<String>;
}

/// Production verifier that asks the configured identity provider.
pub struct IdentityService {
    client: Client,
    verify_url: String,
}

#[derive(Deserialize)]
struct VerifyResponse {
    #[serde(rename = "userId")]
    user_id: String,
}

impl IdentityService {
    pub fn new(verify_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            verify_url: verify_url.into(),
        }
    }
}

#[async_trait]
impl SessionVerifier for IdentityService {
    async fn verify(&self, token: &str) -> Option<String> {
        let response = self
            .client
            .post(&self.verify_url)
            .json(&json!({ "token": token }))
            .send()
            .await
            .map_err(|e| error!("Identity service unreachable: {}", e))
            .ok()?;

        if !response.status().is_success() {
            debug!("Identity service rejected session: {}", response.status());
            return None;
        }

        response
            .json::<VerifyResponse>()
            .await
            .map_err(|e| error!("Malformed identity service response: {}", e))
            .ok()
            .map(|v| v.user_id)
    }
}

/// Extract the bearer token from the `Authorization` header, if any.
pub fn bearer_token(req: &HttpRequest) -> Option<&str> {
    req.headers()
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .filter(|token| !token.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn bearer_token_parses_authorization_header() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer sess_abc123"))
            .to_http_request();
        assert_eq!(bearer_token(&req), Some("sess_abc123"));
    }

    #[test]
    fn bearer_token_rejects_missing_header() {
        let req = TestRequest::default().to_http_request();
        assert_eq!(bearer_token(&req), None);
    }

    #[test]
    fn bearer_token_rejects_other_schemes() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Basic dXNlcjpwdw=="))
            .to_http_request();
        assert_eq!(bearer_token(&req), None);
    }

    #[test]
    fn bearer_token_rejects_empty_token() {
        let req = TestRequest::default()
            .insert_header((header::AUTHORIZATION, "Bearer "))
            .to_http_request();
        assert_eq!(bearer_token(&req), None);
    }
}
