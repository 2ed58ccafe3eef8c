//! Session configuration: credentials, target environment, optional host
//! override.

use std::fmt;
use std::str::FromStr;

use crate::auth::Credentials;
use crate::error::ApiError;

pub const SANDBOX_HOST: &str = "https://api.sandbox.mangopay.com/v2.01";
pub const PRODUCTION_HOST: &str = "https://api.mangopay.com/v2.01";

/// Mangopay deployment the credentials belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Sandbox,
    Production,
}

impl Environment {
    pub fn host(self) -> &'static str {
        match self {
            Environment::Sandbox => SANDBOX_HOST,
            Environment::Production => PRODUCTION_HOST,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Environment::Sandbox => "sandbox",
            Environment::Production => "production",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sandbox" => Ok(Environment::Sandbox),
            "production" => Ok(Environment::Production),
            _ => Err(ApiError::InvalidEnvironment(s.to_string())),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub credentials: Credentials,
    pub environment: Environment,
    /// Replaces the environment's host, e.g. a local mock server.
    pub host: Option<String>,
}

impl SessionConfig {
    pub fn new(credentials: Credentials, environment: Environment) -> Self {
        Self {
            credentials,
            environment,
            host: None,
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Base URL every request is built against, without a trailing slash.
    pub fn host(&self) -> String {
        self.host
            .as_deref()
            .unwrap_or(self.environment.host())
            .trim_end_matches('/')
            .to_string()
    }
}
