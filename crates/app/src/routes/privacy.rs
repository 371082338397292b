use dioxus::prelude::*;
use shared_types::ContactQuery;

use crate::routes::Route;

/// Privacy policy linked from the consultation form.
#[component]
pub fn Privacy() -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./privacy.css") }

        div { class: "legal-page",
            div { class: "legal-container",
                div { class: "legal-header",
                    h1 { class: "legal-title", "Privacy Policy" }
                }

                div { class: "legal-section",
                    h2 { "1. What We Collect" }
                    p { "When you request a consultation we collect:" }
                    ul {
                        li { "Your full name" }
                        li { "Your email address" }
                        li { "Your phone number" }
                        li { "The purpose of your inquiry" }
                    }
                }

                div { class: "legal-section",
                    h2 { "2. How We Use It" }
                    p { "We use these details only to get back to you about your inquiry, whether that is student counselling, a university partnership or hiring through us." }
                }

                div { class: "legal-section",
                    h2 { "3. Where It Goes" }
                    p { "Submissions are recorded in a Google Form that only our team can access. We do not sell or share your details with third parties for their marketing." }
                }

                div { class: "legal-section",
                    h2 { "4. WhatsApp" }
                    p { "If you choose to message us on WhatsApp after submitting the form, that conversation is subject to WhatsApp's own terms and privacy policy." }
                }

                div { class: "legal-section",
                    h2 { "5. Your Rights" }
                    p { "You can ask us to correct or delete the details you sent at any time by replying to any message from us." }
                }

                Link { to: Route::Contact { query: ContactQuery::default() },
                    class: "legal-back-link",
                    "Back to the consultation form"
                }
            }
        }
    }
}
