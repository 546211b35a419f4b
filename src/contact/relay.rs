use crate::{
    contact::form::{ContactForm, ContactPayload},
    foundation::error::FolioResult,
};

/// Name of the managed function that delivers contact emails.
pub const SEND_CONTACT_EMAIL: &str = "send-contact-email";

/// External function host.
pub trait ContactFunction {
    /// Invoke function `name` with `payload`. Any failure (transport, status or a
    /// function-reported error) is a [`crate::FolioError::Relay`].
    fn invoke(&self, name: &str, payload: &ContactPayload) -> FolioResult<()>;
}

/// Forwards contact form submissions to [`SEND_CONTACT_EMAIL`]. No retries.
#[derive(Debug)]
pub struct ContactRelay<F> {
    function: F,
}

impl<F: ContactFunction> ContactRelay<F> {
    /// Relay through `function`.
    pub fn new(function: F) -> Self {
        Self { function }
    }

    /// Underlying function host.
    pub fn function(&self) -> &F {
        &self.function
    }

    /// Submit `form` and wait for the outcome.
    ///
    /// Errors from the form itself (blank fields, submission in flight) are returned without
    /// calling out. Relay failures are recorded on the form and also returned.
    pub fn submit(&self, form: &mut ContactForm) -> FolioResult<()> {
        let payload = form.begin_submit()?;
        let outcome = self.function.invoke(SEND_CONTACT_EMAIL, &payload);
        form.complete(&outcome);
        outcome
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub use http::HttpFunctionClient;

#[cfg(not(target_arch = "wasm32"))]
mod http {
    use std::time::Duration;

    use url::Url;

    use super::ContactFunction;
    use crate::{
        config::ContactConfig,
        contact::form::ContactPayload,
        foundation::error::{FolioError, FolioResult},
    };

    /// Blocking HTTP client for `{endpoint}/functions/v1/{name}`.
    #[derive(Debug)]
    pub struct HttpFunctionClient {
        client: reqwest::blocking::Client,
        base: Url,
        api_key: Option<String>,
    }

    impl HttpFunctionClient {
        /// Build a client from the contact configuration. Requires an endpoint.
        pub fn from_config(cfg: &ContactConfig) -> FolioResult<Self> {
            let endpoint = cfg.endpoint.as_deref().ok_or_else(|| {
                FolioError::validation("contact.endpoint is not configured (set FOLIO_FUNCTIONS_URL)")
            })?;
            let mut base = Url::parse(endpoint).map_err(|e| {
                FolioError::validation(format!("invalid endpoint '{endpoint}': {e}"))
            })?;
            if !base.path().ends_with('/') {
                let path = format!("{}/", base.path());
                base.set_path(&path);
            }
            let client = reqwest::blocking::Client::builder()
                .user_agent(concat!("folio/", env!("CARGO_PKG_VERSION")))
                .timeout(Duration::from_secs(15))
                .build()
                .map_err(|e| FolioError::relay(format!("client error: {e}")))?;
            Ok(Self {
                client,
                base,
                api_key: cfg.api_key.clone(),
            })
        }

        /// URL that invoking `name` posts to.
        pub fn function_url(&self, name: &str) -> FolioResult<Url> {
            self.base
                .join(&format!("functions/v1/{name}"))
                .map_err(|e| FolioError::validation(format!("function url for '{name}': {e}")))
        }
    }

    impl ContactFunction for HttpFunctionClient {
        fn invoke(&self, name: &str, payload: &ContactPayload) -> FolioResult<()> {
            let url = self.function_url(name)?;
            let mut req = self.client.post(url.as_str()).json(payload);
            if let Some(key) = &self.api_key {
                req = req.bearer_auth(key).header("apikey", key);
            }
            tracing::debug!(%url, "invoking function");
            let resp = req
                .send()
                .map_err(|e| FolioError::relay(format!("request to '{name}' failed: {e}")))?;
            let status = resp.status();
            let body = resp
                .text()
                .map_err(|e| FolioError::relay(format!("read response of '{name}': {e}")))?;
            if !status.is_success() {
                return Err(FolioError::relay(format!(
                    "'{name}' returned {status}: {}",
                    body.trim()
                )));
            }
            function_error(&body).map_or(Ok(()), |msg| {
                Err(FolioError::relay(format!("'{name}' reported: {msg}")))
            })
        }
    }

    /// Error reported in a successful response body as `{"error": ...}`.
    pub(super) fn function_error(body: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        match value.get("error")? {
            serde_json::Value::Null => None,
            serde_json::Value::String(s) => Some(s.clone()),
            serde_json::Value::Object(o) => Some(match o.get("message").and_then(|m| m.as_str()) {
                Some(m) => m.to_owned(),
                None => serde_json::Value::Object(o.clone()).to_string(),
            }),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/contact/relay.rs"]
mod tests;
