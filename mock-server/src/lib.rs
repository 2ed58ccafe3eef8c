//! In-memory fake of the Mangopay REST API.
//!
//! Serves the token endpoint, the platform client profile and the hooks
//! collection under `/v2.01`, for one configured platform client. Behaviour
//! follows the real API where the client depends on it: every success is a
//! 200, errors carry a `{"Message", "Type"}` JSON body, one hook per event
//! type, and an `INVALID` hook can no longer be modified.

use std::{
    collections::HashMap,
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use axum::{
    extract::{Path, Query, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Form, Json, Router,
};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

pub const DEFAULT_PER_PAGE: usize = 10;
pub const MAX_PER_PAGE: usize = 100;

/// Credentials and token the fake accepts.
#[derive(Clone, Debug)]
pub struct MockConfig {
    pub client_id: String,
    pub client_secret: String,
    pub access_token: String,
}

impl Default for MockConfig {
    fn default() -> Self {
        Self {
            client_id: "acme".to_string(),
            client_secret: "s3cret".to_string(),
            access_token: "mock-access-token".to_string(),
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Hook {
    pub id: String,
    pub creation_date: i64,
    pub tag: Option<String>,
    pub url: String,
    pub status: String,
    pub validity: String,
    pub event_type: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateHook {
    pub url: String,
    pub event_type: String,
    #[serde(default)]
    pub tag: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateHook {
    pub url: Option<String>,
    pub status: Option<String>,
    pub tag: Option<String>,
}

#[derive(Deserialize)]
pub struct TokenForm {
    pub grant_type: String,
}

#[derive(Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub expires_in: i64,
}

#[derive(Deserialize)]
pub struct Pagination {
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

pub struct Store {
    pub config: MockConfig,
    pub hooks: HashMap<String, Hook>,
}

pub type Db = Arc<RwLock<Store>>;

pub fn new_db(config: MockConfig) -> Db {
    Arc::new(RwLock::new(Store {
        config,
        hooks: HashMap::new(),
    }))
}

pub fn app() -> Router {
    router(new_db(MockConfig::default()))
}

pub fn router(db: Db) -> Router {
    Router::new()
        .route("/v2.01/oauth/token", post(issue_token))
        .route("/v2.01/{client_id}/clients", get(get_platform_client))
        .route("/v2.01/{client_id}/hooks", get(list_hooks).post(create_hook))
        .route("/v2.01/{client_id}/hooks/{id}", get(get_hook).put(update_hook))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

pub async fn run_with(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, router(db)).await
}

/// Error body in the shape the real API uses.
#[derive(Debug)]
pub struct ApiFailure {
    status: StatusCode,
    kind: &'static str,
    message: String,
}

impl ApiFailure {
    fn new(status: StatusCode, kind: &'static str, message: impl Into<String>) -> Self {
        Self {
            status,
            kind,
            message: message.into(),
        }
    }

    fn not_found() -> Self {
        Self::new(
            StatusCode::NOT_FOUND,
            "ressource_not_found",
            "The ressource does not exist",
        )
    }

    fn param(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, "param_error", message)
    }
}

impl IntoResponse for ApiFailure {
    fn into_response(self) -> Response {
        let body = json!({ "Message": self.message, "Type": self.kind });
        (self.status, Json(body)).into_response()
    }
}

async fn issue_token(
    State(db): State<Db>,
    headers: HeaderMap,
    Form(form): Form<TokenForm>,
) -> Result<Json<TokenResponse>, ApiFailure> {
    let store = db.read().await;
    let expected = format!("{}:{}", store.config.client_id, store.config.client_secret);
    let presented = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Basic "))
        .and_then(|b64| STANDARD.decode(b64).ok())
        .and_then(|raw| String::from_utf8(raw).ok());

    if presented.as_deref() != Some(expected.as_str()) {
        tracing::warn!("token request with invalid client credentials");
        return Err(ApiFailure::new(
            StatusCode::UNAUTHORIZED,
            "invalid_client",
            "Authentication failed",
        ));
    }
    if form.grant_type != "client_credentials" {
        return Err(ApiFailure::new(
            StatusCode::BAD_REQUEST,
            "unsupported_grant_type",
            format!("unsupported grant_type: {}", form.grant_type),
        ));
    }

    Ok(Json(TokenResponse {
        access_token: store.config.access_token.clone(),
        token_type: "Bearer".to_string(),
        expires_in: 3600,
    }))
}

/// Bearer token must match and the path must name the configured client.
fn authorize(store: &Store, headers: &HeaderMap, client_id: &str) -> Result<(), ApiFailure> {
    let expected = format!("Bearer {}", store.config.access_token);
    let presented = headers.get(header::AUTHORIZATION).and_then(|v| v.to_str().ok());
    if presented != Some(expected.as_str()) {
        return Err(ApiFailure::new(
            StatusCode::UNAUTHORIZED,
            "unauthorized",
            "Invalid or missing bearer token",
        ));
    }
    if client_id != store.config.client_id {
        return Err(ApiFailure::new(
            StatusCode::FORBIDDEN,
            "forbidden_ressource",
            format!("Token is not valid for client {client_id}"),
        ));
    }
    Ok(())
}

async fn get_platform_client(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(client_id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiFailure> {
    let store = db.read().await;
    authorize(&store, &headers, &client_id)?;
    Ok(Json(json!({
        "PlatformType": "MARKETPLACE",
        "ClientId": client_id,
        "Name": "Acme Marketplace",
        "RegisteredName": "Acme SAS",
        "TechEmails": ["tech@acme.test"],
        "AdminEmails": ["admin@acme.test"],
        "BillingEmails": [],
        "FraudEmails": null,
        "HeadquartersAddress": {
            "AddressLine1": "1 rue de la Paix",
            "AddressLine2": null,
            "City": "Paris",
            "Region": "Ile-de-France",
            "PostalCode": "75002",
            "Country": "FR"
        },
        "HeadquartersPhoneNumber": "+33100000000",
        "TaxNumber": "FR00123456789",
        "PlatformCategorization": {
            "BusinessType": "MARKETPLACE",
            "Sector": "RENTALS"
        },
        "PlatformURL": "https://acme.test",
        "PlatformDescription": "Rentals between neighbours",
        "CompanyReference": null,
        "PrimaryThemeColour": "#000000",
        "PrimaryButtonColour": "#FF0000",
        "Logo": null,
        "CompanyNumber": "123456789",
        "MCC": "7299"
    })))
}

async fn list_hooks(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(client_id): Path<String>,
    Query(page): Query<Pagination>,
) -> Result<Json<Vec<Hook>>, ApiFailure> {
    let store = db.read().await;
    authorize(&store, &headers, &client_id)?;

    let per_page = page.per_page.unwrap_or(DEFAULT_PER_PAGE).clamp(1, MAX_PER_PAGE);
    let page_no = page.page.unwrap_or(1).max(1);

    let mut hooks: Vec<Hook> = store.hooks.values().cloned().collect();
    hooks.sort_by(|a, b| (a.creation_date, &a.id).cmp(&(b.creation_date, &b.id)));
    let hooks = hooks
        .into_iter()
        .skip((page_no - 1) * per_page)
        .take(per_page)
        .collect();
    Ok(Json(hooks))
}

async fn get_hook(
    State(db): State<Db>,
    headers: HeaderMap,
    Path((client_id, id)): Path<(String, String)>,
) -> Result<Json<Hook>, ApiFailure> {
    let store = db.read().await;
    authorize(&store, &headers, &client_id)?;
    store.hooks.get(&id).cloned().map(Json).ok_or_else(ApiFailure::not_found)
}

async fn create_hook(
    State(db): State<Db>,
    headers: HeaderMap,
    Path(client_id): Path<String>,
    Json(input): Json<CreateHook>,
) -> Result<Json<Hook>, ApiFailure> {
    let mut store = db.write().await;
    authorize(&store, &headers, &client_id)?;

    validate_url(&input.url)?;
    if input.event_type.is_empty() {
        return Err(ApiFailure::param("EventType is required"));
    }
    if store.hooks.values().any(|h| h.event_type == input.event_type) {
        return Err(ApiFailure::param(format!(
            "A hook has already been registered for this EventType: {}",
            input.event_type
        )));
    }

    let hook = Hook {
        id: Uuid::new_v4().simple().to_string(),
        creation_date: now_unix(),
        tag: input.tag,
        url: input.url,
        status: "ENABLED".to_string(),
        validity: "VALID".to_string(),
        event_type: input.event_type,
    };
    tracing::info!(hook_id = %hook.id, event_type = %hook.event_type, "hook registered");
    store.hooks.insert(hook.id.clone(), hook.clone());
    Ok(Json(hook))
}

async fn update_hook(
    State(db): State<Db>,
    headers: HeaderMap,
    Path((client_id, id)): Path<(String, String)>,
    Json(input): Json<UpdateHook>,
) -> Result<Json<Hook>, ApiFailure> {
    let mut store = db.write().await;
    authorize(&store, &headers, &client_id)?;

    let hook = store.hooks.get_mut(&id).ok_or_else(ApiFailure::not_found)?;
    if hook.validity == "INVALID" {
        return Err(ApiFailure::param("An invalid hook can no longer be modified"));
    }
    if let Some(url) = input.url {
        validate_url(&url)?;
        hook.url = url;
    }
    if let Some(status) = input.status {
        if status != "ENABLED" && status != "DISABLED" {
            return Err(ApiFailure::param(format!("Unknown Status: {status}")));
        }
        hook.status = status;
    }
    // An empty tag clears it.
    if let Some(tag) = input.tag {
        hook.tag = Some(tag).filter(|t| !t.is_empty());
    }
    Ok(Json(hook.clone()))
}

fn validate_url(url: &str) -> Result<(), ApiFailure> {
    if url.starts_with("http://") || url.starts_with("https://") {
        Ok(())
    } else {
        Err(ApiFailure::param(format!("Url must be an http or https URL: {url}")))
    }
}

fn now_unix() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or_default()
}
