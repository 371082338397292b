use shared_types::{ContactFormState, LeadSubmission, SubmitError};

use crate::LeadClient;

/// Holder of the contact form state during a submission.
///
/// The form component keeps its state in a signal and borrows it only around
/// each step, never across the request.
pub trait SubmitTarget {
    fn begin(&mut self) -> Option<LeadSubmission>;
    fn finish(&mut self, outcome: Result<(), SubmitError>) -> Option<&'static str>;
}

impl SubmitTarget for ContactFormState {
    fn begin(&mut self) -> Option<LeadSubmission> {
        self.begin_submit()
    }

    fn finish(&mut self, outcome: Result<(), SubmitError>) -> Option<&'static str> {
        self.finish_submit(outcome)
    }
}

/// Submit the form once: lock it, post the lead, settle the outcome.
///
/// Returns the alert text when the request failed. Nothing is posted unless
/// the form was idle.
pub async fn run_submit(target: &mut impl SubmitTarget, client: &LeadClient) -> Option<&'static str> {
    let lead = target.begin()?;
    let outcome = client.submit(&lead).await;
    target.finish(outcome)
}
