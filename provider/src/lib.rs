//! Declarative-configuration adapter for the Mangopay API.
//!
//! # Overview
//! Maps provider configuration, data sources and the hook resource onto a
//! `mangopay_core::Session`. Every failure is reported as `Diagnostics`.
//!
//! # Design
//! `MangopayProvider::configure` resolves configuration (attribute values win
//! over `MANGOPAY_*` environment variables) and connects once; the resulting
//! session is borrowed by every data source and resource.

pub mod config;
pub mod data_sources;
pub mod diagnostics;
pub mod resources;
pub mod schema;
pub mod types;

use mangopay_core::{Session, SessionConfig, Transport, UreqTransport};
use tracing::{debug, info};

pub use config::{ProviderConfig, StringValue};
pub use data_sources::{ClientsDataSource, HooksDataSource};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use resources::HookResource;

pub const TYPE_NAME: &str = "mangopay";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    pub type_name: &'static str,
    pub version: String,
}

#[derive(Debug, Clone)]
pub struct MangopayProvider {
    version: String,
}

impl MangopayProvider {
    pub fn new(version: impl Into<String>) -> Self {
        Self { version: version.into() }
    }

    pub fn metadata(&self) -> Metadata {
        Metadata {
            type_name: TYPE_NAME,
            version: self.version.clone(),
        }
    }

    pub fn data_sources(&self) -> [&'static str; 2] {
        [data_sources::CLIENTS_TYPE_NAME, data_sources::HOOKS_TYPE_NAME]
    }

    pub fn resources(&self) -> [&'static str; 1] {
        [resources::HOOK_TYPE_NAME]
    }

    /// Resolve `config` and connect over the default transport.
    pub fn configure(&self, config: &ProviderConfig) -> Result<Session, Diagnostics> {
        self.configure_with(config, UreqTransport::new())
    }

    pub fn configure_with<T: Transport>(
        &self,
        config: &ProviderConfig,
        transport: T,
    ) -> Result<Session<T>, Diagnostics> {
        let resolved = config.resolve()?;
        self.connect(resolved, transport)
    }

    /// Connect with an already resolved configuration.
    pub fn connect<T: Transport>(&self, config: SessionConfig, transport: T) -> Result<Session<T>, Diagnostics> {
        debug!(environment = %config.environment, host = %config.host(), "creating Mangopay client");
        let session = Session::connect(config, transport).map_err(|err| {
            Diagnostics::error(
                "Unable to Create Mangopay API Client",
                format!(
                    "An unexpected error occurred when creating the Mangopay API client. If the error is not \
                     clear, please contact the provider developers.\n\nMangopay Client Error: {err}"
                ),
            )
        })?;
        info!(client_id = %session.client_id(), "configured Mangopay client");
        Ok(session)
    }
}

#[cfg(test)]
mod tests {
    use mangopay_core::{ApiError, Credentials, Environment, HttpRequest, HttpResponse};

    use super::*;

    struct Refused;

    impl Transport for Refused {
        fn execute(&self, _: &HttpRequest) -> Result<HttpResponse, ApiError> {
            Err(ApiError::Transport("connection refused".to_string()))
        }
    }

    #[test]
    fn metadata_and_registrations() {
        let provider = MangopayProvider::new("0.1.0");
        assert_eq!(provider.metadata().type_name, "mangopay");
        assert_eq!(provider.metadata().version, "0.1.0");
        assert_eq!(provider.data_sources(), ["mangopay_clients", "mangopay_hooks"]);
        assert_eq!(provider.resources(), ["mangopay_hook"]);
    }

    #[test]
    fn connect_failure_wraps_client_error() {
        let config = SessionConfig::new(Credentials::new("acme", "s3cret"), Environment::Sandbox);
        let diags = MangopayProvider::new("test").connect(config, Refused).unwrap_err();
        let diag = diags.iter().next().unwrap();
        assert_eq!(diag.summary, "Unable to Create Mangopay API Client");
        assert!(diag.detail.ends_with("Mangopay Client Error: transport error: connection refused"), "{}", diag.detail);
    }
}
