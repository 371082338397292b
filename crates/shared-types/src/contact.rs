use serde::{Deserialize, Serialize};

use crate::{ContactQuery, GoogleFormConfig, SubmitError};

/// What the visitor wants to talk about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Interest {
    #[default]
    #[serde(rename = "General Inquiry")]
    GeneralInquiry,
    #[serde(rename = "Student Counselling")]
    StudentCounselling,
    #[serde(rename = "University Partnership")]
    UniversityPartnership,
    #[serde(rename = "Employer Partnership")]
    EmployerPartnership,
}

/// All interests in the order the select lists them.
pub const ALL_INTERESTS: &[Interest] = &[
    Interest::GeneralInquiry,
    Interest::StudentCounselling,
    Interest::UniversityPartnership,
    Interest::EmployerPartnership,
];

impl Interest {
    /// Label shown in the select and sent to the form endpoint.
    pub fn label(&self) -> &'static str {
        match self {
            Interest::GeneralInquiry => "General Inquiry",
            Interest::StudentCounselling => "Student Counselling",
            Interest::UniversityPartnership => "University Partnership",
            Interest::EmployerPartnership => "Employer Partnership",
        }
    }

    /// Parse a select value back into an interest.
    pub fn from_label(label: &str) -> Option<Self> {
        ALL_INTERESTS.iter().copied().find(|i| i.label() == label)
    }

    /// Map the `type` query parameter used by marketing links.
    pub fn from_query_type(kind: &str) -> Option<Self> {
        match kind {
            "student" => Some(Interest::StudentCounselling),
            "partner" => Some(Interest::UniversityPartnership),
            "recruiter" => Some(Interest::EmployerPartnership),
            _ => None,
        }
    }
}

/// The four values the visitor fills in.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LeadForm {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub interest: Interest,
}

/// A frozen copy of the form, ready to be posted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeadSubmission {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub interest: Interest,
}

impl LeadSubmission {
    /// Form-encoded pairs keyed by the endpoint's own field identifiers.
    pub fn form_fields<'a>(&'a self, form: &'a GoogleFormConfig) -> [(&'a str, &'a str); 4] {
        [
            (form.name_field.as_str(), self.name.as_str()),
            (form.email_field.as_str(), self.email.as_str()),
            (form.phone_field.as_str(), self.phone.as_str()),
            (form.interest_field.as_str(), self.interest.label()),
        ]
    }

    /// `application/x-www-form-urlencoded` body for clients that take a raw
    /// string instead of key/value pairs.
    pub fn form_body(&self, form: &GoogleFormConfig) -> String {
        self.form_fields(form)
            .iter()
            .map(|(key, value)| format!("{}={}", urlencoding::encode(key), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

impl From<&LeadForm> for LeadSubmission {
    fn from(form: &LeadForm) -> Self {
        Self {
            name: form.name.clone(),
            email: form.email.clone(),
            phone: form.phone.clone(),
            interest: form.interest,
        }
    }
}

/// One edit made by the visitor in the form view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Name(String),
    Email(String),
    Phone(String),
    Interest(Interest),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
}

/// State machine behind the contact form.
///
/// `Idle -> Submitting -> Succeeded | Idle`, and `Succeeded -> Idle` through
/// "send another". A failed submission goes back to `Idle` with the visitor's
/// input intact; a successful one clears the form.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ContactFormState {
    form: LeadForm,
    status: SubmissionStatus,
    submitted_interest: Option<Interest>,
}

impl ContactFormState {
    /// Fresh state with the query pre-fill already applied.
    pub fn with_query(query: &ContactQuery) -> Self {
        let mut state = Self::default();
        state.apply_query(query);
        state
    }

    /// Pre-select the interest from the `type` parameter.
    ///
    /// Unknown or missing values leave the current selection alone, and the
    /// other fields are never touched.
    pub fn apply_query(&mut self, query: &ContactQuery) {
        if let Some(interest) = query.interest() {
            self.form.interest = interest;
        }
    }

    pub fn form(&self) -> &LeadForm {
        &self.form
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn submitted_interest(&self) -> Option<Interest> {
        self.submitted_interest
    }

    /// Inputs and the submit control are locked while a request is in flight.
    pub fn inputs_disabled(&self) -> bool {
        self.status == SubmissionStatus::Submitting
    }

    /// Whether the success view replaces the form.
    pub fn shows_success(&self) -> bool {
        self.status == SubmissionStatus::Succeeded
    }

    pub fn set_name(&mut self, value: impl Into<String>) {
        if !self.inputs_disabled() {
            self.form.name = value.into();
        }
    }

    pub fn set_email(&mut self, value: impl Into<String>) {
        if !self.inputs_disabled() {
            self.form.email = value.into();
        }
    }

    pub fn set_phone(&mut self, value: impl Into<String>) {
        if !self.inputs_disabled() {
            self.form.phone = value.into();
        }
    }

    pub fn set_interest(&mut self, interest: Interest) {
        if !self.inputs_disabled() {
            self.form.interest = interest;
        }
    }

    pub fn edit(&mut self, edit: FieldEdit) {
        match edit {
            FieldEdit::Name(value) => self.set_name(value),
            FieldEdit::Email(value) => self.set_email(value),
            FieldEdit::Phone(value) => self.set_phone(value),
            FieldEdit::Interest(interest) => self.set_interest(interest),
        }
    }

    /// Start a submission and hand back the payload to post.
    ///
    /// Returns `None` unless the form is idle, so a second request cannot be
    /// started while one is in flight.
    pub fn begin_submit(&mut self) -> Option<LeadSubmission> {
        if self.status != SubmissionStatus::Idle {
            return None;
        }
        self.status = SubmissionStatus::Submitting;
        self.submitted_interest = Some(self.form.interest);
        Some(LeadSubmission::from(&self.form))
    }

    /// Settle the in-flight submission.
    ///
    /// Returns the alert to show the visitor when the request failed.
    /// Outcomes arriving outside `Submitting` are ignored.
    pub fn finish_submit(&mut self, outcome: Result<(), SubmitError>) -> Option<&'static str> {
        if self.status != SubmissionStatus::Submitting {
            return None;
        }
        match outcome {
            Ok(()) => {
                self.status = SubmissionStatus::Succeeded;
                self.form = LeadForm::default();
                None
            }
            Err(e) => {
                self.status = SubmissionStatus::Idle;
                Some(e.user_message())
            }
        }
    }

    /// "Send another message": back to the empty form, no request issued.
    pub fn send_another(&mut self) {
        if self.status == SubmissionStatus::Succeeded {
            self.status = SubmissionStatus::Idle;
        }
    }
}
