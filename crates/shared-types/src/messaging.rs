use crate::{ContactFormState, Interest, MessagingConfig};

const FALLBACK_MESSAGE: &str = "Hi Veda Scholars, I just submitted an enquiry on your website.";

/// Pre-filled WhatsApp text for the interest the visitor submitted.
pub fn whatsapp_message(interest: Option<Interest>) -> &'static str {
    match interest {
        Some(Interest::GeneralInquiry) => {
            "Hi Veda Scholars, I'd like to know more about your services."
        }
        Some(Interest::StudentCounselling) => {
            "Hi Veda Scholars, I'm interested in student counselling."
        }
        Some(Interest::UniversityPartnership) => {
            "Hi Veda Scholars, I'd like to discuss a university partnership."
        }
        Some(Interest::EmployerPartnership) => {
            "Hi Veda Scholars, I'd like to discuss hiring through Veda Scholars."
        }
        None => FALLBACK_MESSAGE,
    }
}

/// `wa.me` deep link with the message percent-encoded into `text`.
pub fn whatsapp_link(number: &str, interest: Option<Interest>) -> String {
    format!(
        "https://wa.me/{}?text={}",
        number,
        urlencoding::encode(whatsapp_message(interest))
    )
}

impl ContactFormState {
    /// Follow-up link for the success view, `None` when messaging is off
    /// or the form has not been sent.
    pub fn follow_up_link(&self, messaging: &MessagingConfig) -> Option<String> {
        if !messaging.enabled || !self.shows_success() {
            return None;
        }
        Some(whatsapp_link(&messaging.whatsapp_number, self.submitted_interest()))
    }
}
