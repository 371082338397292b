use axum::http::StatusCode;
use lead_client::{run_submit, LeadClient};
use pretty_assertions::assert_eq;
use shared_types::{
    ContactFormState, ContactQuery, FieldEdit, GoogleFormConfig, Interest, LeadForm,
    MessagingConfig, SubmissionStatus, SUBMIT_FAILED_ALERT,
};

use crate::common::{fake_form, unreachable_endpoint};

fn fill_asha(state: &mut ContactFormState) {
    state.edit(FieldEdit::Name("Asha".into()));
    state.edit(FieldEdit::Email("asha@x.com".into()));
    state.edit(FieldEdit::Phone("9999999999".into()));
}

#[tokio::test]
async fn student_link_to_whatsapp_follow_up() {
    let form = fake_form(StatusCode::OK).await;
    let mut state = ContactFormState::with_query(&ContactQuery::from("type=student"));
    assert_eq!(state.form().interest, Interest::StudentCounselling);

    fill_asha(&mut state);
    let alert = run_submit(&mut state, &form.client()).await;

    assert_eq!(alert, None);
    assert_eq!(state.status(), SubmissionStatus::Succeeded);
    assert_eq!(state.form(), &LeadForm::default());

    let body = &form.received()[0];
    assert_eq!(body["entry.1414328682"], "Student Counselling");

    let link = state
        .follow_up_link(&MessagingConfig::default())
        .expect("messaging is enabled by default");
    assert!(link.contains(
        "Hi%20Veda%20Scholars%2C%20I%27m%20interested%20in%20student%20counselling."
    ));
}

#[tokio::test]
async fn network_failure_keeps_what_the_visitor_typed() {
    let client = LeadClient::new(GoogleFormConfig {
        endpoint: unreachable_endpoint().await,
        ..GoogleFormConfig::default()
    });
    let mut state = ContactFormState::with_query(&ContactQuery::from("type=recruiter"));
    fill_asha(&mut state);

    let alert = run_submit(&mut state, &client).await;

    assert_eq!(alert, Some(SUBMIT_FAILED_ALERT));
    assert_eq!(state.status(), SubmissionStatus::Idle);
    assert!(!state.inputs_disabled());
    assert_eq!(state.form().name, "Asha");
    assert_eq!(state.form().email, "asha@x.com");
    assert_eq!(state.form().phone, "9999999999");
    assert_eq!(state.form().interest, Interest::EmployerPartnership);
}

#[tokio::test]
async fn send_another_does_not_post_again() {
    let form = fake_form(StatusCode::OK).await;
    let mut state = ContactFormState::default();
    fill_asha(&mut state);
    run_submit(&mut state, &form.client()).await;
    assert_eq!(form.received().len(), 1);

    state.send_another();

    assert_eq!(state.status(), SubmissionStatus::Idle);
    assert_eq!(form.received().len(), 1);
}

#[tokio::test]
async fn second_lead_after_reset_is_posted_separately() {
    let form = fake_form(StatusCode::OK).await;
    let client = form.client();
    let mut state = ContactFormState::default();

    fill_asha(&mut state);
    run_submit(&mut state, &client).await;
    state.send_another();

    state.edit(FieldEdit::Name("Ravi".into()));
    state.edit(FieldEdit::Email("ravi@x.com".into()));
    state.edit(FieldEdit::Phone("8888888888".into()));
    state.edit(FieldEdit::Interest(Interest::UniversityPartnership));
    run_submit(&mut state, &client).await;

    let received = form.received();
    assert_eq!(received.len(), 2);
    assert_eq!(received[1]["entry.203752787"], "Ravi");
    assert_eq!(
        state.submitted_interest(),
        Some(Interest::UniversityPartnership)
    );
}

#[tokio::test]
async fn submit_while_in_flight_sends_nothing() {
    let form = fake_form(StatusCode::OK).await;
    let mut state = ContactFormState::default();
    fill_asha(&mut state);
    state.begin_submit().expect("idle form starts a submission");

    let alert = run_submit(&mut state, &form.client()).await;

    assert_eq!(alert, None);
    assert!(state.inputs_disabled());
    assert!(form.received().is_empty());
}
