use dioxus::prelude::*;

mod alert;
mod routes;
use routes::Route;

const SITE_BASE: Asset = asset!("/assets/site-base.css");

fn main() {
    lead_client::config::load_contact_config();
    dioxus::launch(App);
}

/// Detect the client platform from compile-time feature flags.
pub fn client_platform() -> &'static str {
    if cfg!(feature = "web") {
        "web"
    } else if cfg!(feature = "desktop") {
        "desktop"
    } else if cfg!(feature = "mobile") {
        "mobile"
    } else {
        "unknown"
    }
}

#[component]
fn App() -> Element {
    use_hook(|| {
        tracing::debug!(platform = client_platform(), "Site starting");
    });

    rsx! {
        document::Link { rel: "stylesheet", href: SITE_BASE }
        SuspenseBoundary {
            fallback: |_| rsx! {
                div { class: "panel contact-loading", "Loading form..." }
            },
            Router::<Route> {}
        }
    }
}
