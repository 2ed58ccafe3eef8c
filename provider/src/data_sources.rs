//! Read-only data sources.

use mangopay_core::{Session, Transport};
use tracing::debug;

use crate::diagnostics::Diagnostics;
use crate::types::{ClientsDataSourceModel, HookModel, HooksDataSourceModel};

pub const CLIENTS_TYPE_NAME: &str = "mangopay_clients";
pub const HOOKS_TYPE_NAME: &str = "mangopay_hooks";

/// Profile of the platform client owning the configured credentials.
pub struct ClientsDataSource<'a, T> {
    session: &'a Session<T>,
}

impl<'a, T: Transport> ClientsDataSource<'a, T> {
    pub fn new(session: &'a Session<T>) -> Self {
        Self { session }
    }

    pub fn read(&self) -> Result<ClientsDataSourceModel, Diagnostics> {
        let profile = self
            .session
            .get_platform_client()
            .map_err(|err| Diagnostics::error("Unable to Read Mangopay Clients", err.to_string()))?;
        debug!(client_id = %profile.client_id, "read platform client");
        Ok(ClientsDataSourceModel::from(&profile))
    }
}

/// Every hook of the platform, limited to the first page.
pub struct HooksDataSource<'a, T> {
    session: &'a Session<T>,
}

impl<'a, T: Transport> HooksDataSource<'a, T> {
    pub fn new(session: &'a Session<T>) -> Self {
        Self { session }
    }

    pub fn read(&self) -> Result<HooksDataSourceModel, Diagnostics> {
        let hooks = self
            .session
            .list_hooks()
            .map_err(|err| Diagnostics::error("Unable to Read Mangopay Hook", err.to_string()))?;
        debug!(count = hooks.len(), "read hooks");
        Ok(HooksDataSourceModel {
            hooks: hooks.iter().map(HookModel::from).collect(),
        })
    }
}
