//! OAuth2 client-credentials token acquisition.
//!
//! Same split as the resource operations: `build_token_request` produces the
//! request, `parse_token_response` consumes the response. Storing the token is
//! the caller's job.

use std::fmt;

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::AuthResponse;

const GRANT_BODY: &str = "grant_type=client_credentials";

/// Client ID and secret issued by the platform.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    pub fn is_complete(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty()
    }

    /// `Authorization` header value for HTTP Basic auth.
    fn basic_auth(&self) -> String {
        let raw = format!("{}:{}", self.client_id, self.client_secret);
        format!("Basic {}", STANDARD.encode(raw))
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

/// Build the token request against `{host}/oauth/token`.
///
/// Fails with `MissingCredentials` when either half of the credentials is
/// empty, so no request is ever produced for them.
pub fn build_token_request(host: &str, credentials: &Credentials) -> Result<HttpRequest, ApiError> {
    if !credentials.is_complete() {
        return Err(ApiError::MissingCredentials);
    }
    Ok(HttpRequest {
        method: HttpMethod::Post,
        path: format!("{}/oauth/token", host.trim_end_matches('/')),
        headers: vec![
            (
                "content-type".to_string(),
                "application/x-www-form-urlencoded".to_string(),
            ),
            ("authorization".to_string(), credentials.basic_auth()),
        ],
        body: Some(GRANT_BODY.to_string()),
    })
}

pub fn parse_token_response(response: HttpResponse) -> Result<AuthResponse, ApiError> {
    if response.status != 200 {
        return Err(ApiError::Http {
            status: response.status,
            body: response.body,
        });
    }
    let auth: AuthResponse =
        serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))?;
    if auth.access_token.is_empty() {
        return Err(ApiError::Deserialization(
            "token response carries an empty access_token".to_string(),
        ));
    }
    Ok(auth)
}
