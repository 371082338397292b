use dioxus::prelude::*;

/// A labelled native select.
///
/// Options are plain strings: each is both the value and the visible text,
/// and the one equal to `value` is marked selected.
#[component]
pub fn SelectField(
    /// Used as both `id` and `name` of the select.
    name: String,
    label: String,
    /// Currently selected option.
    #[props(default)]
    value: String,
    options: Vec<String>,
    /// Called with the change event when the visitor picks another option.
    #[props(default)]
    onchange: Option<EventHandler<Event<FormData>>>,
    #[props(default = false)]
    disabled: bool,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "select-field",
            label { class: "select-field-label", r#for: "{name}", "{label}" }
            select {
                id: "{name}",
                name: "{name}",
                class: "select-field-input",
                value: value.clone(),
                disabled: disabled,
                onchange: move |evt| {
                    if let Some(handler) = &onchange {
                        handler.call(evt);
                    }
                },
                for choice in options.iter() {
                    option {
                        key: "{choice}",
                        value: "{choice}",
                        selected: *choice == value,
                        "{choice}"
                    }
                }
            }
        }
    }
}
