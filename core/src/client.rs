//! Stateless HTTP request builder and response parser for the Mangopay API.
//!
//! # Design
//! `MangopayClient` holds the API host and the client ID that scopes every
//! path; it carries no token and no mutable state. Each operation is split
//! into a `build_*` method that produces an `HttpRequest` and a `parse_*`
//! method that consumes an `HttpResponse`. `Session` wires the two halves to
//! a transport and the bearer token.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{CreateHook, Hook, PlatformClient, UpdateHook};

/// Page size requested when listing hooks. Only the first page is read.
pub const HOOKS_PER_PAGE: u32 = 100;

/// Request builder and response parser scoped to one platform client.
#[derive(Debug, Clone)]
pub struct MangopayClient {
    host: String,
    client_id: String,
}

impl MangopayClient {
    pub fn new(host: &str, client_id: &str) -> Self {
        Self {
            host: host.trim_end_matches('/').to_string(),
            client_id: client_id.to_string(),
        }
    }

    pub fn host(&self) -> &str {
        &self.host
    }

    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    fn url(&self, suffix: &str) -> String {
        format!("{}/{}/{suffix}", self.host, self.client_id)
    }

    /// The id is a single path segment, percent-encoded.
    fn hook_url(&self, id: &str) -> String {
        self.url(&format!("hooks/{}", urlencoding::encode(id)))
    }

    pub fn build_get_platform_client(&self) -> HttpRequest {
        get(self.url("clients"))
    }

    pub fn build_list_hooks(&self) -> HttpRequest {
        get(format!("{}?per_page={HOOKS_PER_PAGE}", self.url("hooks")))
    }

    pub fn build_get_hook(&self, id: &str) -> HttpRequest {
        get(self.hook_url(id))
    }

    pub fn build_create_hook(&self, input: &CreateHook) -> Result<HttpRequest, ApiError> {
        with_json(HttpMethod::Post, self.url("hooks"), input)
    }

    pub fn build_update_hook(&self, id: &str, input: &UpdateHook) -> Result<HttpRequest, ApiError> {
        with_json(HttpMethod::Put, self.hook_url(id), input)
    }

    pub fn parse_get_platform_client(&self, response: HttpResponse) -> Result<PlatformClient, ApiError> {
        parse_json(response)
    }

    pub fn parse_list_hooks(&self, response: HttpResponse) -> Result<Vec<Hook>, ApiError> {
        parse_json(response)
    }

    pub fn parse_get_hook(&self, response: HttpResponse) -> Result<Hook, ApiError> {
        parse_json(response)
    }

    pub fn parse_create_hook(&self, response: HttpResponse) -> Result<Hook, ApiError> {
        parse_json(response)
    }

    pub fn parse_update_hook(&self, response: HttpResponse) -> Result<Hook, ApiError> {
        parse_json(response)
    }
}

fn get(path: String) -> HttpRequest {
    HttpRequest {
        method: HttpMethod::Get,
        path,
        headers: Vec::new(),
        body: None,
    }
}

fn with_json<T: Serialize>(method: HttpMethod, path: String, input: &T) -> Result<HttpRequest, ApiError> {
    let body = serde_json::to_string(input).map_err(|e| ApiError::Serialization(e.to_string()))?;
    Ok(HttpRequest {
        method,
        path,
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: Some(body),
    })
}

/// Every Mangopay endpoint used here answers 200 on success, creation included.
fn check_status(response: &HttpResponse) -> Result<(), ApiError> {
    if response.status == 200 {
        return Ok(());
    }
    Err(ApiError::Http {
        status: response.status,
        body: response.body.clone(),
    })
}

fn parse_json<T: DeserializeOwned>(response: HttpResponse) -> Result<T, ApiError> {
    check_status(&response)?;
    serde_json::from_str(&response.body).map_err(|e| ApiError::Deserialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::HookStatus;

    const HOOK_JSON: &str = r#"{"Id":"h1","CreationDate":1700000000,"Tag":null,"Url":"https://example.com/notify","Status":"ENABLED","Validity":"VALID","EventType":"PAYIN_NORMAL_SUCCEEDED"}"#;

    fn client() -> MangopayClient {
        MangopayClient::new("http://localhost:3000/v2.01", "acme")
    }

    fn ok(body: &str) -> HttpResponse {
        HttpResponse {
            status: 200,
            body: body.to_string(),
        }
    }

    #[test]
    fn build_get_platform_client_produces_correct_request() {
        let req = client().build_get_platform_client();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/v2.01/acme/clients");
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn build_list_hooks_requests_one_full_page() {
        let req = client().build_list_hooks();
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/v2.01/acme/hooks?per_page=100");
    }

    #[test]
    fn build_get_hook_produces_correct_request() {
        let req = client().build_get_hook("h1");
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(req.path, "http://localhost:3000/v2.01/acme/hooks/h1");
        assert!(req.body.is_none());
    }

    #[test]
    fn build_create_hook_produces_correct_request() {
        let input = CreateHook {
            url: "https://example.com/notify".to_string(),
            event_type: "PAYIN_NORMAL_SUCCEEDED".to_string(),
            tag: None,
        };
        let req = client().build_create_hook(&input).unwrap();
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.path, "http://localhost:3000/v2.01/acme/hooks");
        assert_eq!(
            req.headers,
            vec![("content-type".to_string(), "application/json".to_string())]
        );
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["Url"], "https://example.com/notify");
        assert_eq!(body["EventType"], "PAYIN_NORMAL_SUCCEEDED");
        assert!(body.get("Tag").is_none());
    }

    #[test]
    fn build_update_hook_produces_correct_request() {
        let input = UpdateHook {
            url: Some("https://example.com/v2".to_string()),
            status: Some(HookStatus::Disabled),
            tag: None,
        };
        let req = client().build_update_hook("h1", &input).unwrap();
        assert_eq!(req.method, HttpMethod::Put);
        assert_eq!(req.path, "http://localhost:3000/v2.01/acme/hooks/h1");
        let body: serde_json::Value = serde_json::from_str(req.body.as_deref().unwrap()).unwrap();
        assert_eq!(body["Url"], "https://example.com/v2");
        assert_eq!(body["Status"], "DISABLED");
        assert!(body.get("Tag").is_none());
    }

    #[test]
    fn hook_id_is_encoded_as_one_segment() {
        let c = client();
        let req = c.build_get_hook("a/b?c#d");
        assert_eq!(req.path, "http://localhost:3000/v2.01/acme/hooks/a%2Fb%3Fc%23d");
        let req = c.build_update_hook("../clients", &UpdateHook::default()).unwrap();
        assert_eq!(req.path, "http://localhost:3000/v2.01/acme/hooks/..%2Fclients");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let client = MangopayClient::new("http://localhost:3000/v2.01/", "acme");
        assert_eq!(client.build_get_platform_client().path, "http://localhost:3000/v2.01/acme/clients");
    }

    #[test]
    fn parse_list_hooks_success() {
        let hooks = client().parse_list_hooks(ok(&format!("[{HOOK_JSON}]"))).unwrap();
        assert_eq!(hooks.len(), 1);
        assert_eq!(hooks[0].id, "h1");
        assert_eq!(hooks[0].tag, None);
    }

    #[test]
    fn parse_list_hooks_empty_payload_is_not_an_error() {
        let hooks = client().parse_list_hooks(ok("[]")).unwrap();
        assert!(hooks.is_empty());
    }

    #[test]
    fn parse_get_hook_success() {
        let hook = client().parse_get_hook(ok(HOOK_JSON)).unwrap();
        assert_eq!(hook.url, "https://example.com/notify");
        assert_eq!(hook.status, HookStatus::Enabled);
    }

    #[test]
    fn parse_get_hook_not_found_is_a_plain_http_error() {
        let response = HttpResponse {
            status: 404,
            body: r#"{"Message":"The ressource does not exist"}"#.to_string(),
        };
        let err = client().parse_get_hook(response).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 404, .. }));
        assert!(err.to_string().contains("The ressource does not exist"));
    }

    #[test]
    fn parse_create_hook_wrong_status() {
        let response = HttpResponse {
            status: 500,
            body: "internal error".to_string(),
        };
        let err = client().parse_create_hook(response).unwrap_err();
        assert!(matches!(err, ApiError::Http { status: 500, .. }));
        assert_eq!(err.to_string(), "status: 500, body: internal error");
    }

    #[test]
    fn parse_create_hook_treats_201_as_unexpected() {
        let response = HttpResponse {
            status: 201,
            body: HOOK_JSON.to_string(),
        };
        let err = client().parse_create_hook(response).unwrap_err();
        assert_eq!(err.status(), Some(201));
    }

    #[test]
    fn parse_update_hook_success() {
        let body = HOOK_JSON.replace("ENABLED", "DISABLED");
        let hook = client().parse_update_hook(ok(&body)).unwrap();
        assert_eq!(hook.status, HookStatus::Disabled);
    }

    #[test]
    fn parse_platform_client_bad_json() {
        let err = client().parse_get_platform_client(ok("not json")).unwrap_err();
        assert!(matches!(err, ApiError::Deserialization(_)));
    }
}
