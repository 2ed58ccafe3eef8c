//! Attribute schemas of the provider, its data sources and its resource.
//!
//! Attribute names are the snake_case keys of the state models in `types`;
//! tests keep the two in sync.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKind {
    String,
    Int64,
    StringList,
    /// Nested single object.
    Object,
    /// List of nested objects.
    ObjectList,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Required,
    Optional,
    Computed,
}

#[derive(Debug, Clone)]
pub struct Attribute {
    pub name: &'static str,
    pub kind: AttributeKind,
    pub mode: Mode,
    pub sensitive: bool,
    /// Keep the prior state value while a plan has it unknown.
    pub use_state_for_unknown: bool,
    pub description: &'static str,
    pub nested: Vec<Attribute>,
}

impl Attribute {
    fn new(name: &'static str, kind: AttributeKind, mode: Mode, description: &'static str) -> Self {
        Self {
            name,
            kind,
            mode,
            sensitive: false,
            use_state_for_unknown: false,
            description,
            nested: Vec::new(),
        }
    }

    fn required(name: &'static str, description: &'static str) -> Self {
        Self::new(name, AttributeKind::String, Mode::Required, description)
    }

    fn optional(name: &'static str, description: &'static str) -> Self {
        Self::new(name, AttributeKind::String, Mode::Optional, description)
    }

    fn computed(name: &'static str, description: &'static str) -> Self {
        Self::new(name, AttributeKind::String, Mode::Computed, description)
    }

    fn kind(mut self, kind: AttributeKind) -> Self {
        self.kind = kind;
        self
    }

    fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }

    fn use_state_for_unknown(mut self) -> Self {
        self.use_state_for_unknown = true;
        self
    }

    fn nested(mut self, nested: Vec<Attribute>) -> Self {
        self.nested = nested;
        self
    }
}

#[derive(Debug, Clone)]
pub struct Schema {
    pub description: &'static str,
    pub attributes: Vec<Attribute>,
}

impl Schema {
    pub fn attribute(&self, name: &str) -> Option<&Attribute> {
        self.attributes.iter().find(|a| a.name == name)
    }

    pub fn names(&self) -> Vec<&'static str> {
        self.attributes.iter().map(|a| a.name).collect()
    }
}

pub fn provider() -> Schema {
    Schema {
        description: "Manage Mangopay webhooks and read the platform client profile.",
        attributes: vec![
            Attribute::required("client_id", "Client ID for the Mangopay API. Falls back to MANGOPAY_CLIENT_ID."),
            Attribute::required(
                "client_secret",
                "Client secret (API key) for the Mangopay API. Falls back to MANGOPAY_CLIENT_SECRET.",
            )
            .sensitive(),
            Attribute::optional(
                "environment",
                "Mangopay environment to use: sandbox or production. Falls back to MANGOPAY_ENVIRONMENT.",
            ),
            Attribute::optional(
                "api_url",
                "Overrides the API base URL of the environment. Falls back to MANGOPAY_API_URL.",
            ),
        ],
    }
}

fn hook_attributes(mode: Mode) -> Vec<Attribute> {
    let attr = |name, description| Attribute::new(name, AttributeKind::String, mode, description);
    vec![
        attr("id", "Unique identifier of the hook"),
        attr("url", "The URL (http or https) to which the notification is sent."),
        attr("status", "Whether the hook is enabled or not."),
        attr(
            "validity",
            "Whether the hook is valid or not. Once the hook is set to INVALID it can no longer be modified.",
        ),
        attr("event_type", "The type of the event"),
        attr("tag", "A custom tag for that hook"),
        attr("creation_date", "The date when the hook was created").kind(AttributeKind::Int64),
    ]
}

pub fn hook_resource() -> Schema {
    Schema {
        description: "Mangopay webhook. Deleting it only removes it from state; the API cannot delete hooks.",
        attributes: vec![
            Attribute::computed("id", "Unique identifier of the hook").use_state_for_unknown(),
            Attribute::required("url", "The URL (http or https) to which the notification is sent."),
            Attribute::computed("status", "Whether the hook is enabled or not."),
            Attribute::computed(
                "validity",
                "Whether the hook is valid or not. Once the hook is set to INVALID it can no longer be modified.",
            ),
            Attribute::required("event_type", "The type of the event"),
            Attribute::optional("tag", "A custom tag for that hook"),
            Attribute::computed("creation_date", "The date when the hook was created")
                .kind(AttributeKind::Int64)
                .use_state_for_unknown(),
            Attribute::computed("last_updated", "Timestamp of the last update of the hook made by this provider."),
        ],
    }
}

pub fn hooks_data_source() -> Schema {
    Schema {
        description: "All hooks registered for the platform client (first page of 100).",
        attributes: vec![Attribute::computed("hooks", "List of hooks")
            .kind(AttributeKind::ObjectList)
            .nested(hook_attributes(Mode::Computed))],
    }
}

pub fn clients_data_source() -> Schema {
    let c = Attribute::computed;
    Schema {
        description: "Profile of the platform client owning the credentials.",
        attributes: vec![
            c("platform_type", "Type of platform"),
            c("client_id", "Identifier of the platform client"),
            c("name", "Trading name of the platform"),
            c("registered_name", "Registered legal name of the platform"),
            c("tech_emails", "Emails receiving technical notifications").kind(AttributeKind::StringList),
            c("admin_emails", "Emails receiving administrative notifications").kind(AttributeKind::StringList),
            c("billing_emails", "Emails receiving billing notifications").kind(AttributeKind::StringList),
            c("fraud_emails", "Emails receiving fraud notifications").kind(AttributeKind::StringList),
            c("headquarters_address", "Address of the company headquarters")
                .kind(AttributeKind::Object)
                .nested(vec![
                    c("address_line1", "First address line"),
                    c("address_line2", "Second address line"),
                    c("city", "City"),
                    c("region", "Region"),
                    c("postal_code", "Postal code"),
                    c("country", "ISO 3166-1 alpha-2 country code"),
                ]),
            c("headquarters_phone_number", "Phone number of the headquarters"),
            c("tax_number", "Tax (VAT) number"),
            c("platform_categorization", "Business type and sector of the platform")
                .kind(AttributeKind::Object)
                .nested(vec![c("business_type", "Business type"), c("sector", "Sector")]),
            c("platform_url", "Website of the platform"),
            c("platform_description", "Description of the platform"),
            c("company_reference", "Unique reference of the company"),
            c("primary_theme_colour", "Primary theme colour"),
            c("primary_button_colour", "Primary button colour"),
            c("logo", "URL of the logo"),
            c("company_number", "Registration number of the company"),
            c("mcc", "Merchant category code"),
        ],
    }
}
