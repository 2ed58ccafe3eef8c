//! The `mangopay_hook` resource.
//!
//! # Design
//! The API has no delete endpoint, so delete only drops the hook from state
//! and leaves it registered remotely. `status` is computed: create always
//! yields an enabled hook, and update sends back whatever status the state
//! holds. The API ignores an absent `Tag` on update, so a removed tag is sent
//! as an empty string, which clears it.

use chrono::Utc;
use mangopay_core::{CreateHook, HookStatus, Session, Transport, UpdateHook};
use tracing::{info, trace, warn};

use crate::diagnostics::Diagnostics;
use crate::types::HookResourceModel;

pub const HOOK_TYPE_NAME: &str = "mangopay_hook";

/// `last_updated` layout, e.g. `Monday, 02-Jan-06 15:04:05 UTC`.
pub const LAST_UPDATED_FORMAT: &str = "%A, %d-%b-%y %H:%M:%S UTC";

pub struct HookResource<'a, T> {
    session: &'a Session<T>,
}

impl<'a, T: Transport> HookResource<'a, T> {
    pub fn new(session: &'a Session<T>) -> Self {
        Self { session }
    }

    pub fn create(&self, plan: &HookResourceModel) -> Result<HookResourceModel, Diagnostics> {
        trace!("creating a hook resource");
        let input = CreateHook {
            url: plan.url.clone(),
            event_type: plan.event_type.clone(),
            tag: plan.tag.clone(),
        };
        let hook = self.session.create_hook(&input).map_err(|err| {
            Diagnostics::error(
                "Error creating hook",
                format!("Could not create hook, unexpected error: {err}"),
            )
        })?;

        let mut state = plan.clone();
        state.refresh(&hook);
        state.last_updated = Some(now());
        Ok(state)
    }

    pub fn read(&self, state: &HookResourceModel) -> Result<HookResourceModel, Diagnostics> {
        let id = require_id(state)?;
        let hook = self.session.get_hook(id).map_err(|err| {
            Diagnostics::error(
                "Error Reading Mangopay Hook",
                format!("Could not read Mangopay hook with ID {id}: {err}"),
            )
        })?;

        let mut refreshed = state.clone();
        refreshed.refresh(&hook);
        Ok(refreshed)
    }

    pub fn update(&self, plan: &HookResourceModel) -> Result<HookResourceModel, Diagnostics> {
        let id = require_id(plan)?;
        trace!(id, "updating a hook resource");

        let status = match plan.status.as_deref() {
            None => None,
            Some(raw) => match raw.parse::<HookStatus>() {
                Ok(status) => Some(status),
                Err(err) => {
                    let mut diags = Diagnostics::new();
                    diags.add_attribute_error("status", "Invalid Hook Status", format!("{err}. Use ENABLED or DISABLED."));
                    return Err(diags);
                }
            },
        };
        let input = UpdateHook {
            url: Some(plan.url.clone()),
            status,
            tag: Some(plan.tag.clone().unwrap_or_default()),
        };
        let hook = self.session.update_hook(id, &input).map_err(|err| {
            Diagnostics::error(
                "Error updating hook",
                format!("Could not update hook, unexpected error: {err}"),
            )
        })?;

        let mut state = plan.clone();
        state.refresh(&hook);
        state.last_updated = Some(now());
        Ok(state)
    }

    /// Forget the hook. The remote registration stays in place.
    pub fn delete(&self, state: &HookResourceModel) -> Result<(), Diagnostics> {
        match state.id.as_deref() {
            Some(id) => warn!(id, "hook removed from state only; the API cannot delete hooks"),
            None => info!("deleting a hook that was never created"),
        }
        Ok(())
    }

    /// State seeded from an imported identifier; a later read fills the rest.
    pub fn import_state(&self, id: &str) -> Result<HookResourceModel, Diagnostics> {
        let id = id.trim();
        if id.is_empty() {
            return Err(Diagnostics::error(
                "Invalid Import ID",
                "Expected the Mangopay hook ID, got an empty string.",
            ));
        }
        Ok(HookResourceModel {
            id: Some(id.to_string()),
            ..Default::default()
        })
    }
}

fn require_id(model: &HookResourceModel) -> Result<&str, Diagnostics> {
    match model.id.as_deref() {
        Some(id) if !id.is_empty() => Ok(id),
        _ => {
            let mut diags = Diagnostics::new();
            diags.add_attribute_error("id", "Missing Hook ID", "The hook has no ID in state.");
            Err(diags)
        }
    }
}

fn now() -> String {
    Utc::now().format(LAST_UPDATED_FORMAT).to_string()
}
