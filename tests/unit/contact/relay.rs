use super::*;
use crate::{config::ContactConfig, foundation::error::FolioError};
use std::cell::RefCell;

#[derive(Default)]
struct Recorder {
    calls: RefCell<Vec<(String, ContactPayload)>>,
    fail: bool,
}

impl ContactFunction for Recorder {
    fn invoke(&self, name: &str, payload: &ContactPayload) -> FolioResult<()> {
        self.calls
            .borrow_mut()
            .push((name.to_owned(), payload.clone()));
        if self.fail {
            Err(FolioError::relay("function reported an error"))
        } else {
            Ok(())
        }
    }
}

fn filled() -> ContactForm {
    let mut form = ContactForm::new(&ContactConfig::default());
    form.name = "Ada".to_owned();
    form.email = "ada@example.com".to_owned();
    form.message = "Hi".to_owned();
    form
}

#[test]
fn submit_invokes_named_function_with_payload() {
    let relay = ContactRelay::new(Recorder::default());
    let mut form = filled();
    relay.submit(&mut form).unwrap();

    let calls = relay.function().calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, SEND_CONTACT_EMAIL);
    assert_eq!(calls[0].1.email, "ada@example.com");
    assert!(form.is_submit_enabled());
    assert!(form.name.is_empty());
}

#[test]
fn failure_is_terminal_and_preserves_input() {
    let relay = ContactRelay::new(Recorder {
        fail: true,
        ..Recorder::default()
    });
    let mut form = filled();
    let err = relay.submit(&mut form).unwrap_err();
    assert!(matches!(err, FolioError::Relay(_)));
    assert_eq!(relay.function().calls.borrow().len(), 1);
    assert_eq!(form.name, "Ada");
    assert!(form.is_submit_enabled());
}

#[test]
fn blank_form_never_calls_out() {
    let relay = ContactRelay::new(Recorder::default());
    let mut form = ContactForm::new(&ContactConfig::default());
    assert!(relay.submit(&mut form).is_err());
    assert!(relay.function().calls.borrow().is_empty());
    assert!(form.notice().is_none());
}

#[test]
fn payload_serializes_as_three_strings() {
    let payload = ContactPayload {
        name: "a".to_owned(),
        email: "b".to_owned(),
        message: "c".to_owned(),
    };
    assert_eq!(
        serde_json::to_value(&payload).unwrap(),
        serde_json::json!({ "name": "a", "email": "b", "message": "c" })
    );
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn http_client_builds_function_urls() {
    let cfg = ContactConfig {
        endpoint: Some("https://proj.example.co".to_owned()),
        ..ContactConfig::default()
    };
    let client = HttpFunctionClient::from_config(&cfg).unwrap();
    assert_eq!(
        client.function_url(SEND_CONTACT_EMAIL).unwrap().as_str(),
        "https://proj.example.co/functions/v1/send-contact-email"
    );

    let missing = HttpFunctionClient::from_config(&ContactConfig::default()).unwrap_err();
    assert!(matches!(missing, FolioError::Validation(_)));
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn function_errors_are_read_from_the_body() {
    assert_eq!(http::function_error(r#"{"ok":true}"#), None);
    assert_eq!(http::function_error(r#"{"error":null}"#), None);
    assert_eq!(
        http::function_error(r#"{"error":"quota"}"#).as_deref(),
        Some("quota")
    );
    assert_eq!(
        http::function_error(r#"{"error":{"message":"bad"}}"#).as_deref(),
        Some("bad")
    );
    assert_eq!(http::function_error("not json"), None);
}
