use shared_types::{GoogleFormConfig, LeadSubmission, SubmitError};

/// Posts leads to the Google Form that collects them.
///
/// The form answers cross-origin requests with an opaque response, so the
/// browser build sends in `no-cors` mode and nothing about the reply can be
/// read. Native builds drop the reply unread to keep the same contract:
/// a request that reaches the network is a success. A rejected or malformed
/// submission looks exactly like an accepted one.
///
/// The browser path goes through `gloo-net`, which hands the opaque
/// `Response` back untouched (status 0, empty url). Native builds use
/// `reqwest`.
#[derive(Debug, Clone)]
pub struct LeadClient {
    #[cfg(not(target_arch = "wasm32"))]
    http: reqwest::Client,
    form: GoogleFormConfig,
}

impl LeadClient {
    pub fn new(form: GoogleFormConfig) -> Self {
        Self {
            #[cfg(not(target_arch = "wasm32"))]
            http: reqwest::Client::new(),
            form,
        }
    }

    /// Client for the configured form.
    pub fn from_config() -> Self {
        Self::new(crate::config::contact_config().google_form.clone())
    }

    pub fn endpoint(&self) -> &str {
        &self.form.endpoint
    }

    /// Send one lead. Only a transport failure is reported as an error.
    #[tracing::instrument(skip_all, fields(interest = lead.interest.label()))]
    pub async fn submit(&self, lead: &LeadSubmission) -> Result<(), SubmitError> {
        match self.send(lead).await {
            Ok(()) => {
                tracing::info!("Lead form submitted");
                Ok(())
            }
            Err(message) => {
                tracing::error!(error = %message, "Lead form request failed");
                Err(SubmitError::network(message))
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    async fn send(&self, lead: &LeadSubmission) -> Result<(), String> {
        self.http
            .post(&self.form.endpoint)
            .form(&lead.form_fields(&self.form)[..])
            .send()
            .await
            .map(drop)
            .map_err(|e| e.to_string())
    }

    #[cfg(target_arch = "wasm32")]
    async fn send(&self, lead: &LeadSubmission) -> Result<(), String> {
        use gloo_net::http::Request;
        use web_sys::RequestMode;

        // Only CORS-safelisted headers survive `no-cors`; the form-urlencoded
        // content type is one of them.
        Request::post(&self.form.endpoint)
            .mode(RequestMode::NoCors)
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(lead.form_body(&self.form))
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map(drop)
            .map_err(|e| e.to_string())
    }
}

impl Default for LeadClient {
    fn default() -> Self {
        Self::from_config()
    }
}
