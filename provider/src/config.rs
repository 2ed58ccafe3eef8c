//! Provider configuration and its resolution against the environment.
//!
//! # Design
//! Each attribute is null, unknown (not computed yet by the host), or known.
//! A known value wins over the matching environment variable; a null value
//! falls back to it. Resolution reports every problem at once, one attribute
//! diagnostic per offending attribute, and only then gives up.

use mangopay_core::{Credentials, Environment, SessionConfig};
use serde::Deserialize;

use crate::diagnostics::Diagnostics;

pub const ENV_CLIENT_ID: &str = "MANGOPAY_CLIENT_ID";
pub const ENV_CLIENT_SECRET: &str = "MANGOPAY_CLIENT_SECRET";
pub const ENV_ENVIRONMENT: &str = "MANGOPAY_ENVIRONMENT";
pub const ENV_API_URL: &str = "MANGOPAY_API_URL";

/// A configuration string as the host hands it over.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "Option<String>")]
pub enum StringValue {
    #[default]
    Null,
    Unknown,
    Known(String),
}

impl From<Option<String>> for StringValue {
    fn from(value: Option<String>) -> Self {
        value.map_or(StringValue::Null, StringValue::Known)
    }
}

impl From<&str> for StringValue {
    fn from(value: &str) -> Self {
        StringValue::Known(value.to_string())
    }
}

impl StringValue {
    pub fn is_unknown(&self) -> bool {
        matches!(self, StringValue::Unknown)
    }
}

/// Provider block as written in configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    pub client_id: StringValue,
    pub client_secret: StringValue,
    pub environment: StringValue,
    pub api_url: StringValue,
}

struct Attr {
    name: &'static str,
    env: &'static str,
    label: &'static str,
}

const CLIENT_ID: Attr = Attr {
    name: "client_id",
    env: ENV_CLIENT_ID,
    label: "Client ID",
};
const CLIENT_SECRET: Attr = Attr {
    name: "client_secret",
    env: ENV_CLIENT_SECRET,
    label: "Client Secret",
};
const ENVIRONMENT: Attr = Attr {
    name: "environment",
    env: ENV_ENVIRONMENT,
    label: "Environment",
};
const API_URL: Attr = Attr {
    name: "api_url",
    env: ENV_API_URL,
    label: "API URL",
};

impl ProviderConfig {
    /// Resolve against the process environment.
    pub fn resolve(&self) -> Result<SessionConfig, Diagnostics> {
        self.resolve_with(|key| std::env::var(key).ok())
    }

    /// Resolve with `lookup` standing in for the environment.
    pub fn resolve_with<F>(&self, lookup: F) -> Result<SessionConfig, Diagnostics>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut diags = Diagnostics::new();
        for (value, attr) in [
            (&self.client_id, &CLIENT_ID),
            (&self.client_secret, &CLIENT_SECRET),
            (&self.environment, &ENVIRONMENT),
            (&self.api_url, &API_URL),
        ] {
            if value.is_unknown() {
                diags.add_attribute_error(
                    attr.name,
                    format!("Unknown Mangopay API {}", attr.label),
                    format!(
                        "The provider cannot create the Mangopay API client as there is an unknown configuration \
                         value for the Mangopay API {}. Either target apply the source of the value first, set the \
                         value statically in the configuration, or use the {} environment variable.",
                        attr.label, attr.env
                    ),
                );
            }
        }
        if diags.has_error() {
            return Err(diags);
        }

        let client_id = pick(&self.client_id, &CLIENT_ID, &lookup);
        let client_secret = pick(&self.client_secret, &CLIENT_SECRET, &lookup);
        let environment = pick(&self.environment, &ENVIRONMENT, &lookup);
        let api_url = pick(&self.api_url, &API_URL, &lookup);

        for (value, attr) in [
            (&client_id, &CLIENT_ID),
            (&client_secret, &CLIENT_SECRET),
            (&environment, &ENVIRONMENT),
        ] {
            if value.is_empty() {
                diags.add_attribute_error(
                    attr.name,
                    format!("Missing Mangopay API {}", attr.label),
                    format!(
                        "The provider cannot create the Mangopay API client as there is a missing or empty value \
                         for the Mangopay API {}. Set the {} value in the configuration, or use the {} environment \
                         variable. If either is already set, ensure the value is not empty.",
                        attr.label, attr.name, attr.env
                    ),
                );
            }
        }

        let parsed_environment = if environment.is_empty() {
            None
        } else {
            match environment.parse::<Environment>() {
                Ok(env) => Some(env),
                Err(err) => {
                    diags.add_attribute_error(
                        ENVIRONMENT.name,
                        "Invalid Mangopay API Environment",
                        format!("{err}. Use \"sandbox\" or \"production\"."),
                    );
                    None
                }
            }
        };

        let Some(environment) = parsed_environment.filter(|_| !diags.has_error()) else {
            return Err(diags);
        };

        let mut config = SessionConfig::new(Credentials::new(client_id, client_secret), environment);
        if !api_url.is_empty() {
            config = config.with_host(api_url);
        }
        Ok(config)
    }
}

/// Configured value if known, else the environment variable, else empty.
fn pick<F>(value: &StringValue, attr: &Attr, lookup: &F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    match value {
        StringValue::Known(v) => v.clone(),
        _ => lookup(attr.env).unwrap_or_default(),
    }
}
