//! Domain DTOs for the Mangopay API.
//!
//! # Design
//! Entity bodies mirror the remote schema with PascalCase JSON keys. The
//! platform profile is read-only and tolerant: the API sends `null` for unset
//! strings and lists, which decode to empty values. Hook tags keep the
//! absent/present distinction so a hook survives a JSON round-trip unchanged.
//! The mock server defines its own copies of these types; integration tests
//! catch schema drift.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize};

/// Profile of the platform (tenant) that owns the API credentials.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PlatformClient {
    #[serde(default, deserialize_with = "null_as_default")]
    pub platform_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub client_id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub registered_name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tech_emails: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub admin_emails: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub billing_emails: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub fraud_emails: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headquarters_address: Address,
    #[serde(default, deserialize_with = "null_as_default")]
    pub headquarters_phone_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub tax_number: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub platform_categorization: PlatformCategorization,
    #[serde(rename = "PlatformURL", default, deserialize_with = "null_as_default")]
    pub platform_url: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub platform_description: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company_reference: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub primary_theme_colour: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub primary_button_colour: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub logo: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub company_number: String,
    #[serde(rename = "MCC", default, deserialize_with = "null_as_default")]
    pub mcc: String,
}

/// Postal address of the platform headquarters.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Address {
    #[serde(default, deserialize_with = "null_as_default")]
    pub address_line1: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub address_line2: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub city: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub region: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub postal_code: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub country: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PlatformCategorization {
    #[serde(default, deserialize_with = "null_as_default")]
    pub business_type: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub sector: String,
}

/// Whether a hook is currently delivering notifications.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum HookStatus {
    Enabled,
    Disabled,
}

impl HookStatus {
    pub fn as_str(self) -> &'static str {
        match self {
            HookStatus::Enabled => "ENABLED",
            HookStatus::Disabled => "DISABLED",
        }
    }
}

impl fmt::Display for HookStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for HookStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ENABLED" => Ok(HookStatus::Enabled),
            "DISABLED" => Ok(HookStatus::Disabled),
            other => Err(format!("unknown hook status: {other}")),
        }
    }
}

/// Once a hook is `INVALID` the API refuses further modification.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "UPPERCASE")]
pub enum HookValidity {
    Valid,
    Invalid,
}

impl HookValidity {
    pub fn as_str(self) -> &'static str {
        match self {
            HookValidity::Valid => "VALID",
            HookValidity::Invalid => "INVALID",
        }
    }
}

impl fmt::Display for HookValidity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A webhook registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct Hook {
    pub id: String,
    /// Unix timestamp, seconds.
    pub creation_date: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    pub url: String,
    pub status: HookStatus,
    pub validity: HookValidity,
    pub event_type: String,
}

/// Request payload for registering a hook.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CreateHook {
    pub url: String,
    pub event_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Request payload for modifying a hook. Only the fields present in the JSON
/// are applied; the event type of a hook cannot change.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct UpdateHook {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<HookStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
}

/// Token endpoint response. `expires_in` is informational only.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub access_token: String,
    #[serde(default)]
    pub token_type: String,
    #[serde(default)]
    pub expires_in: i64,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}
