use serde::{Deserialize, Serialize};

const DEFAULT_FORM_ENDPOINT: &str = "https://docs.google.com/forms/d/e/1FAIpQLSeAVDv3Z-0Yon14J1dQPcp3JUjRiiDzWhjsaieg1qbNbdW-Kw/formResponse";
const DEFAULT_WHATSAPP_NUMBER: &str = "919876543210";

/// The Google Form that collects leads.
///
/// Field identifiers are dictated by the form itself (`entry.<id>`), they are
/// not derived from our field names.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct GoogleFormConfig {
    pub endpoint: String,
    pub name_field: String,
    pub email_field: String,
    pub phone_field: String,
    pub interest_field: String,
}

impl Default for GoogleFormConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_FORM_ENDPOINT.to_string(),
            name_field: "entry.203752787".to_string(),
            email_field: "entry.1269060423".to_string(),
            phone_field: "entry.1933473105".to_string(),
            interest_field: "entry.1414328682".to_string(),
        }
    }
}

/// WhatsApp follow-up shown on the success view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MessagingConfig {
    pub enabled: bool,
    /// International number without `+` or spaces, as `wa.me` expects.
    pub whatsapp_number: String,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            whatsapp_number: DEFAULT_WHATSAPP_NUMBER.to_string(),
        }
    }
}

/// Top-level config file structure matching `contact.toml`.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct ContactConfig {
    #[serde(default)]
    pub google_form: GoogleFormConfig,
    #[serde(default)]
    pub messaging: MessagingConfig,
}
