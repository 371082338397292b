use shared_types::ContactConfig;
use std::sync::OnceLock;

static CONFIG: OnceLock<ContactConfig> = OnceLock::new();

/// `contact.toml` at the workspace root. Embedded because the web build has
/// no filesystem to read it from at runtime.
const EMBEDDED_CONFIG: &str = include_str!("../../../contact.toml");

/// Parse config contents, falling back to built-in defaults on error.
pub fn parse_contact_config(contents: &str) -> ContactConfig {
    toml::from_str(contents).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "Failed to parse contact.toml, using defaults");
        ContactConfig::default()
    })
}

/// Parse the embedded `contact.toml` and store it in the global `OnceLock`.
/// Safe to call multiple times, only the first call has effect.
pub fn load_contact_config() -> &'static ContactConfig {
    CONFIG.get_or_init(|| {
        let config = parse_contact_config(EMBEDDED_CONFIG);
        tracing::debug!(
            endpoint = %config.google_form.endpoint,
            messaging = config.messaging.enabled,
            "Contact config loaded"
        );
        config
    })
}

/// Get the loaded config, loading it on first use.
pub fn contact_config() -> &'static ContactConfig {
    load_contact_config()
}
