use axum::http::StatusCode;
use lead_client::LeadClient;
use pretty_assertions::assert_eq;
use shared_types::{GoogleFormConfig, Interest, LeadSubmission, SubmitErrorKind};

use crate::common::{fake_form, unreachable_endpoint};

fn asha(interest: Interest) -> LeadSubmission {
    LeadSubmission {
        name: "Asha".into(),
        email: "asha@x.com".into(),
        phone: "9999999999".into(),
        interest,
    }
}

#[tokio::test]
async fn posts_four_fields_under_form_identifiers() {
    let form = fake_form(StatusCode::OK).await;

    form.client()
        .submit(&asha(Interest::UniversityPartnership))
        .await
        .expect("submission should succeed");

    let received = form.received();
    assert_eq!(received.len(), 1);
    let body = &received[0];
    assert_eq!(body.len(), 4);
    assert_eq!(body["entry.203752787"], "Asha");
    assert_eq!(body["entry.1269060423"], "asha@x.com");
    assert_eq!(body["entry.1933473105"], "9999999999");
    assert_eq!(body["entry.1414328682"], "University Partnership");
}

#[tokio::test]
async fn configured_identifiers_replace_defaults() {
    let form = fake_form(StatusCode::OK).await;
    let client = LeadClient::new(GoogleFormConfig {
        endpoint: form.endpoint.clone(),
        name_field: "entry.1".into(),
        email_field: "entry.2".into(),
        phone_field: "entry.3".into(),
        interest_field: "entry.4".into(),
    });

    client.submit(&asha(Interest::GeneralInquiry)).await.unwrap();

    let body = &form.received()[0];
    assert_eq!(body["entry.1"], "Asha");
    assert_eq!(body["entry.4"], "General Inquiry");
    assert!(!body.contains_key("entry.203752787"));
}

#[tokio::test]
async fn special_characters_survive_form_encoding() {
    let form = fake_form(StatusCode::OK).await;
    let lead = LeadSubmission {
        name: "Anaïs O'Neil & Co".into(),
        email: "anais+leads@x.com".into(),
        phone: "+91 98765 43210".into(),
        interest: Interest::EmployerPartnership,
    };

    form.client().submit(&lead).await.unwrap();

    let body = &form.received()[0];
    assert_eq!(body["entry.203752787"], "Anaïs O'Neil & Co");
    assert_eq!(body["entry.1269060423"], "anais+leads@x.com");
    assert_eq!(body["entry.1933473105"], "+91 98765 43210");
}

#[tokio::test]
async fn rejected_submission_is_indistinguishable_from_success() {
    let form = fake_form(StatusCode::BAD_REQUEST).await;
    let outcome = form.client().submit(&asha(Interest::StudentCounselling)).await;
    assert_eq!(outcome, Ok(()));
}

#[tokio::test]
async fn server_error_is_indistinguishable_from_success() {
    let form = fake_form(StatusCode::INTERNAL_SERVER_ERROR).await;
    let outcome = form.client().submit(&asha(Interest::StudentCounselling)).await;
    assert_eq!(outcome, Ok(()));
}

#[tokio::test]
async fn connection_failure_is_a_network_error() {
    let client = LeadClient::new(GoogleFormConfig {
        endpoint: unreachable_endpoint().await,
        ..GoogleFormConfig::default()
    });

    let err = client
        .submit(&asha(Interest::GeneralInquiry))
        .await
        .unwrap_err();
    assert_eq!(err.kind, SubmitErrorKind::Network);
    assert!(!err.message.is_empty());
}
