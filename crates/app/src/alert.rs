use dioxus::prelude::*;

/// JavaScript that raises a blocking `alert()` with `message`.
///
/// The message goes through JSON encoding so quotes and newlines cannot
/// break out of the string literal.
fn alert_script(message: &str) -> String {
    let literal = serde_json::to_string(message).unwrap_or_else(|_| "\"\"".to_string());
    format!("alert({literal});")
}

/// Show a blocking alert to the visitor and log it for diagnostics.
pub fn show(message: &str) {
    tracing::error!(alert = message, "Contact form submission failed");
    document::eval(&alert_script(message));
}
