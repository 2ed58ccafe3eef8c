//! Synchronous API client core for the Mangopay platform.
//!
//! # Overview
//! Reads the platform client profile and manages webhooks ("hooks") through
//! Mangopay's REST API, authenticated with an OAuth2 client-credentials token.
//!
//! # Design
//! - `MangopayClient` builds `HttpRequest` values and parses `HttpResponse`
//!   values without touching the network (host-does-IO pattern).
//! - `Transport` performs the round-trip; `UreqTransport` is the blocking
//!   default with a fixed 10 s timeout.
//! - `Session` fetches one token at construction and attaches it as a bearer
//!   token to every request. It never refreshes it.
//! - Errors are never retried or reclassified beyond `ApiError`.

pub mod auth;
pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod session;
pub mod transport;
pub mod types;

pub use auth::Credentials;
pub use client::MangopayClient;
pub use config::{Environment, SessionConfig};
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use session::Session;
pub use transport::{Transport, UreqTransport};
pub use types::{
    Address, AuthResponse, CreateHook, Hook, HookStatus, HookValidity, PlatformCategorization, PlatformClient,
    UpdateHook,
};
