use axum::{
    extract::State,
    http::StatusCode,
    routing::post,
    Form, Router,
};
use lead_client::LeadClient;
use shared_types::GoogleFormConfig;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};

type Received = Arc<Mutex<Vec<HashMap<String, String>>>>;

#[derive(Clone)]
struct FakeFormState {
    received: Received,
    status: StatusCode,
}

/// A stand-in for the Google Form running on a random local port.
pub struct FakeForm {
    pub endpoint: String,
    received: Received,
}

impl FakeForm {
    /// Every form body posted so far, in arrival order.
    pub fn received(&self) -> Vec<HashMap<String, String>> {
        self.received.lock().expect("fake form lock poisoned").clone()
    }

    /// Client pointed at this endpoint with the default field identifiers.
    pub fn client(&self) -> LeadClient {
        LeadClient::new(GoogleFormConfig {
            endpoint: self.endpoint.clone(),
            ..GoogleFormConfig::default()
        })
    }
}

async fn record(
    State(state): State<FakeFormState>,
    Form(fields): Form<HashMap<String, String>>,
) -> StatusCode {
    state
        .received
        .lock()
        .expect("fake form lock poisoned")
        .push(fields);
    state.status
}

/// Start a fake form endpoint that answers every POST with `status`.
/// Bodies that are not form-encoded are rejected by the extractor and
/// never recorded.
pub async fn fake_form(status: StatusCode) -> FakeForm {
    let received: Received = Arc::new(Mutex::new(Vec::new()));
    let state = FakeFormState {
        received: received.clone(),
        status,
    };
    let app = Router::new()
        .route("/formResponse", post(record))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind fake form endpoint");
    let addr = listener.local_addr().expect("Failed to read local addr");
    tokio::spawn(async move {
        let _ = axum::serve(listener, app).await;
    });

    FakeForm {
        endpoint: format!("http://{addr}/formResponse"),
        received,
    }
}

/// An endpoint on a port nobody listens on, so the request fails to connect.
pub async fn unreachable_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind throwaway listener");
    let addr = listener.local_addr().expect("Failed to read local addr");
    drop(listener);
    format!("http://{addr}/formResponse")
}
