//! Authenticated session against the Mangopay API.
//!
//! # Design
//! A `Session` acquires its bearer token once, in `connect`, and keeps it for
//! its whole lifetime: the token is never refreshed and `expires_in` is only
//! logged. All operations take `&self`, so a session can be shared read-only.
//! Each operation is one synchronous round-trip: build, authenticate, execute,
//! parse. Errors propagate unchanged and nothing is retried.

use std::fmt;

use crate::auth::{self, Credentials};
use crate::client::MangopayClient;
use crate::config::{Environment, SessionConfig};
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::{Transport, UreqTransport};
use crate::types::{CreateHook, Hook, PlatformClient, UpdateHook};

pub struct Session<T = UreqTransport> {
    client: MangopayClient,
    transport: T,
    credentials: Credentials,
    environment: Environment,
    token: String,
}

impl Session<UreqTransport> {
    /// Connect over the default `ureq` transport.
    pub fn new(config: SessionConfig) -> Result<Self, ApiError> {
        Self::connect(config, UreqTransport::new())
    }
}

impl<T: Transport> Session<T> {
    /// Fetch a token with the configured credentials and open the session.
    ///
    /// Empty credentials fail before the transport is touched.
    pub fn connect(config: SessionConfig, transport: T) -> Result<Self, ApiError> {
        let host = config.host();
        let request = auth::build_token_request(&host, &config.credentials)?;
        let response = transport.execute(&request)?;
        let grant = auth::parse_token_response(response)?;

        tracing::info!(
            environment = %config.environment,
            client_id = %config.credentials.client_id,
            token_type = %grant.token_type,
            expires_in = grant.expires_in,
            "acquired access token"
        );

        Ok(Self::with_token(config, transport, grant.access_token))
    }

    /// Open a session around a token obtained elsewhere.
    pub fn with_token(config: SessionConfig, transport: T, token: impl Into<String>) -> Self {
        let client = MangopayClient::new(&config.host(), &config.credentials.client_id);
        Self {
            client,
            transport,
            credentials: config.credentials,
            environment: config.environment,
            token: token.into(),
        }
    }

    pub fn client(&self) -> &MangopayClient {
        &self.client
    }

    pub fn host(&self) -> &str {
        self.client.host()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn client_id(&self) -> &str {
        &self.credentials.client_id
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    /// Execute `request` with bearer auth.
    ///
    /// `token` overrides the session token for this call. A request that
    /// already carries an `Authorization` header is sent as-is.
    pub fn execute(&self, mut request: HttpRequest, token: Option<&str>) -> Result<HttpResponse, ApiError> {
        if !request.has_header("authorization") {
            let token = token.unwrap_or(self.token.as_str());
            request
                .headers
                .push(("authorization".to_string(), format!("Bearer {token}")));
        }
        self.transport.execute(&request)
    }

    pub fn get_platform_client(&self) -> Result<PlatformClient, ApiError> {
        let response = self.execute(self.client.build_get_platform_client(), None)?;
        self.client.parse_get_platform_client(response)
    }

    pub fn list_hooks(&self) -> Result<Vec<Hook>, ApiError> {
        let response = self.execute(self.client.build_list_hooks(), None)?;
        self.client.parse_list_hooks(response)
    }

    pub fn get_hook(&self, id: &str) -> Result<Hook, ApiError> {
        let response = self.execute(self.client.build_get_hook(id), None)?;
        self.client.parse_get_hook(response)
    }

    pub fn create_hook(&self, input: &CreateHook) -> Result<Hook, ApiError> {
        let request = self.client.build_create_hook(input)?;
        let response = self.execute(request, None)?;
        let hook = self.client.parse_create_hook(response)?;
        tracing::info!(hook_id = %hook.id, event_type = %hook.event_type, "created hook");
        Ok(hook)
    }

    pub fn update_hook(&self, id: &str, input: &UpdateHook) -> Result<Hook, ApiError> {
        let request = self.client.build_update_hook(id, input)?;
        let response = self.execute(request, None)?;
        let hook = self.client.parse_update_hook(response)?;
        tracing::info!(hook_id = %hook.id, status = %hook.status, "updated hook");
        Ok(hook)
    }
}

impl<T> fmt::Debug for Session<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Session")
            .field("host", &self.client.host())
            .field("credentials", &self.credentials)
            .field("environment", &self.environment)
            .field("token", &"<redacted>")
            .finish_non_exhaustive()
    }
}
