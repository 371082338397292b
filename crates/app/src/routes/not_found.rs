use dioxus::prelude::*;
use shared_types::ContactQuery;
use shared_ui::{Panel, PanelTitle};

use crate::routes::Route;

/// Where a lost visitor is most likely headed.
fn shortcuts() -> [(&'static str, Route); 4] {
    [
        ("I'm a student", contact_for("student")),
        ("I represent a university", contact_for("partner")),
        ("I'm hiring", contact_for("recruiter")),
        ("Privacy policy", Route::Privacy {}),
    ]
}

fn contact_for(kind: &str) -> Route {
    Route::Contact {
        query: ContactQuery::new(kind),
    }
}

/// Catch-all for unknown paths.
#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = format!("/{}", route.join("/"));

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./not_found.css") }

        div { class: "site-page",
            Panel { class: "lost-panel",
                PanelTitle { "We couldn't find that page" }
                p { class: "lost-path",
                    "Nothing lives at "
                    code { "{path}" }
                    ". Tell us who you are and we'll take it from there."
                }
                nav { class: "lost-shortcuts",
                    for (label, to) in shortcuts() {
                        Link { key: "{label}", to, class: "lost-shortcut", "{label}" }
                    }
                }
            }
        }
    }
}
