use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{LdCircleCheck, LdSend};
use dioxus_free_icons::Icon;
use lead_client::{run_submit, LeadClient, SubmitTarget};
use shared_types::{
    ContactFormState, ContactQuery, FieldEdit, Interest, LeadForm, LeadSubmission, SubmitError,
    ALL_INTERESTS,
};
use shared_ui::{ActionButton, ButtonKind, ButtonVariant, Panel, PanelTitle, SelectField, TextField};

use crate::alert;

/// Id external automation hooks use to find the submit control.
pub const SUBMIT_BUTTON_ID: &str = "form-consultation-submit";

/// The form's signal, borrowed one step at a time while a lead is in flight.
struct FormSignal(Signal<ContactFormState>);

impl SubmitTarget for FormSignal {
    fn begin(&mut self) -> Option<LeadSubmission> {
        self.0.write().begin_submit()
    }

    fn finish(&mut self, outcome: Result<(), SubmitError>) -> Option<&'static str> {
        self.0.write().finish_submit(outcome)
    }
}

/// Contact page. `?type=student|partner|recruiter` pre-selects the interest.
#[component]
pub fn Contact(query: ContactQuery) -> Element {
    rsx! {
        div { class: "site-page",
            ContactForm { query }
        }
    }
}

/// Lead-capture form and its success view.
///
/// Posts to the configured Google Form. The reply is opaque, so the form
/// switches to the success view whenever the request itself goes through.
#[component]
pub fn ContactForm(query: ContactQuery) -> Element {
    let config = lead_client::config::contact_config();
    let mut state = use_signal(|| ContactFormState::with_query(&query));
    let client = use_hook(LeadClient::from_config);

    // Re-apply the pre-fill when the query changes under a mounted form.
    use_effect(use_reactive((&query,), move |(query,)| {
        state.write().apply_query(&query);
    }));

    let handle_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let client = client.clone();
        async move {
            let mut target = FormSignal(state);
            if let Some(message) = run_submit(&mut target, &client).await {
                alert::show(message);
            }
        }
    };

    let current = state();

    if current.shows_success() {
        return rsx! {
            SuccessView {
                follow_up: current.follow_up_link(&config.messaging),
                on_send_another: move |_| state.write().send_another(),
            }
        };
    }

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./contact.css") }

        Panel {
            PanelTitle { "Book Your Free Consultation" }
            form { class: "contact-form", onsubmit: handle_submit,
                LeadFields {
                    form: current.form().clone(),
                    disabled: current.inputs_disabled(),
                    on_edit: move |edit: FieldEdit| state.write().edit(edit),
                }
                p { class: "contact-footnote",
                    "By submitting this form, you agree to our "
                    a { href: "/privacy-policy", "privacy policy" }
                    ". Your information is safe with us."
                }
            }
        }
    }
}

/// The four inputs and the submit button.
#[component]
pub fn LeadFields(form: LeadForm, disabled: bool, on_edit: EventHandler<FieldEdit>) -> Element {
    let options: Vec<String> = ALL_INTERESTS.iter().map(|i| i.label().to_string()).collect();

    rsx! {
        TextField {
            name: "name",
            label: "Full Name",
            placeholder: "Enter your full name",
            required: true,
            disabled,
            value: form.name.clone(),
            on_input: move |e: FormEvent| on_edit.call(FieldEdit::Name(e.value())),
        }
        TextField {
            name: "email",
            label: "Email Address",
            input_type: "email",
            placeholder: "you@example.com",
            required: true,
            disabled,
            value: form.email.clone(),
            on_input: move |e: FormEvent| on_edit.call(FieldEdit::Email(e.value())),
        }
        TextField {
            name: "phone",
            label: "Phone Number",
            input_type: "tel",
            placeholder: "+91 98765 43210",
            required: true,
            disabled,
            value: form.phone.clone(),
            on_input: move |e: FormEvent| on_edit.call(FieldEdit::Phone(e.value())),
        }
        SelectField {
            name: "interest",
            label: "Purpose of Inquiry",
            value: form.interest.label().to_string(),
            options,
            disabled,
            onchange: move |e: Event<FormData>| {
                if let Some(interest) = Interest::from_label(&e.value()) {
                    on_edit.call(FieldEdit::Interest(interest));
                }
            },
        }
        ActionButton {
            id: SUBMIT_BUTTON_ID,
            kind: ButtonKind::Submit,
            variant: ButtonVariant::Primary,
            disabled,
            if disabled {
                "Submitting..."
            } else {
                "Submit Request"
                Icon::<LdSend> { icon: LdSend, width: 20, height: 20 }
            }
        }
    }
}

/// Confirmation shown after a submission went through.
#[component]
pub fn SuccessView(follow_up: Option<String>, on_send_another: EventHandler<()>) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./contact.css") }

        Panel { class: "contact-success",
            div { class: "contact-success-icon",
                Icon::<LdCircleCheck> { icon: LdCircleCheck, width: 32, height: 32 }
            }
            PanelTitle { "Thank You!" }
            p { class: "contact-success-message", "We’ll contact you shortly." }
            if let Some(link) = follow_up {
                a {
                    class: "contact-whatsapp",
                    href: "{link}",
                    target: "_blank",
                    rel: "noopener noreferrer",
                    "Chat on WhatsApp"
                }
            }
            ActionButton {
                variant: ButtonVariant::Outline,
                onclick: move |_| on_send_another.call(()),
                "Send Another Message"
            }
        }
    }
}
