//! State models exchanged with the declarative tool.
//!
//! Keys are snake_case attribute names; `schema` describes the same shapes.

use mangopay_core::{Address, Hook, PlatformCategorization, PlatformClient};
use serde::{Deserialize, Serialize};

/// One hook as exposed by the hooks data source.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HookModel {
    pub id: String,
    pub url: String,
    pub status: String,
    pub validity: String,
    pub event_type: String,
    pub tag: Option<String>,
    pub creation_date: i64,
}

impl From<&Hook> for HookModel {
    fn from(hook: &Hook) -> Self {
        Self {
            id: hook.id.clone(),
            url: hook.url.clone(),
            status: hook.status.to_string(),
            validity: hook.validity.to_string(),
            event_type: hook.event_type.clone(),
            tag: hook.tag.clone().filter(|t| !t.is_empty()),
            creation_date: hook.creation_date,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HooksDataSourceModel {
    pub hooks: Vec<HookModel>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressModel {
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub region: String,
    pub postal_code: String,
    pub country: String,
}

impl From<&Address> for AddressModel {
    fn from(a: &Address) -> Self {
        Self {
            address_line1: a.address_line1.clone(),
            address_line2: a.address_line2.clone(),
            city: a.city.clone(),
            region: a.region.clone(),
            postal_code: a.postal_code.clone(),
            country: a.country.clone(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorizationModel {
    pub business_type: String,
    pub sector: String,
}

impl From<&PlatformCategorization> for CategorizationModel {
    fn from(c: &PlatformCategorization) -> Self {
        Self {
            business_type: c.business_type.clone(),
            sector: c.sector.clone(),
        }
    }
}

/// State of the clients data source: the platform profile, flattened.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientsDataSourceModel {
    pub platform_type: String,
    pub client_id: String,
    pub name: String,
    pub registered_name: String,
    pub tech_emails: Vec<String>,
    pub admin_emails: Vec<String>,
    pub billing_emails: Vec<String>,
    pub fraud_emails: Vec<String>,
    pub headquarters_address: AddressModel,
    pub headquarters_phone_number: String,
    pub tax_number: String,
    pub platform_categorization: CategorizationModel,
    pub platform_url: String,
    pub platform_description: String,
    pub company_reference: String,
    pub primary_theme_colour: String,
    pub primary_button_colour: String,
    pub logo: String,
    pub company_number: String,
    pub mcc: String,
}

impl From<&PlatformClient> for ClientsDataSourceModel {
    fn from(p: &PlatformClient) -> Self {
        Self {
            platform_type: p.platform_type.clone(),
            client_id: p.client_id.clone(),
            name: p.name.clone(),
            registered_name: p.registered_name.clone(),
            tech_emails: p.tech_emails.clone(),
            admin_emails: p.admin_emails.clone(),
            billing_emails: p.billing_emails.clone(),
            fraud_emails: p.fraud_emails.clone(),
            headquarters_address: (&p.headquarters_address).into(),
            headquarters_phone_number: p.headquarters_phone_number.clone(),
            tax_number: p.tax_number.clone(),
            platform_categorization: (&p.platform_categorization).into(),
            platform_url: p.platform_url.clone(),
            platform_description: p.platform_description.clone(),
            company_reference: p.company_reference.clone(),
            primary_theme_colour: p.primary_theme_colour.clone(),
            primary_button_colour: p.primary_button_colour.clone(),
            logo: p.logo.clone(),
            company_number: p.company_number.clone(),
            mcc: p.mcc.clone(),
        }
    }
}

/// Plan or state of the hook resource. `None` means null or not yet known.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HookResourceModel {
    pub id: Option<String>,
    pub url: String,
    pub status: Option<String>,
    pub validity: Option<String>,
    pub event_type: String,
    pub tag: Option<String>,
    pub creation_date: Option<i64>,
    pub last_updated: Option<String>,
}

impl HookResourceModel {
    /// Copy every remote attribute of `hook` into the model.
    pub fn refresh(&mut self, hook: &Hook) {
        self.id = Some(hook.id.clone());
        self.url = hook.url.clone();
        self.status = Some(hook.status.to_string());
        self.validity = Some(hook.validity.to_string());
        self.event_type = hook.event_type.clone();
        self.tag = hook.tag.clone().filter(|t| !t.is_empty());
        self.creation_date = Some(hook.creation_date);
    }
}
