use super::*;

fn filled() -> ContactForm {
    let mut form = ContactForm::new(&ContactConfig::default());
    form.name = "Ada".to_owned();
    form.email = "ada@example.com".to_owned();
    form.message = "Hello".to_owned();
    form
}

#[test]
fn blank_fields_block_submission() {
    let mut form = ContactForm::new(&ContactConfig::default());
    form.email = "x@example.com".to_owned();
    assert_eq!(form.missing_fields(), vec![Field::Name, Field::Message]);
    let err = form.begin_submit().unwrap_err();
    assert!(err.to_string().contains("name, message"), "{err}");
    assert!(form.is_submit_enabled());
}

#[test]
fn whitespace_only_fields_count_as_filled() {
    let mut form = filled();
    form.name = " ".to_owned();
    form.message = "\n\t".to_owned();
    assert!(form.missing_fields().is_empty());
    let payload = form.begin_submit().unwrap();
    assert_eq!(payload.name, " ");
}

#[test]
fn submit_is_disabled_until_outcome_arrives() {
    let mut form = filled();
    let payload = form.begin_submit().unwrap();
    assert_eq!(payload.name, "Ada");
    assert!(!form.is_submit_enabled());
    assert!(form.begin_submit().is_err());

    form.complete(&Ok(()));
    assert!(form.is_submit_enabled());
}

#[test]
fn success_clears_fields_and_shows_notice() {
    let mut form = filled();
    form.begin_submit().unwrap();
    form.complete(&Ok(()));
    assert!(form.name.is_empty() && form.email.is_empty() && form.message.is_empty());
    assert_eq!(form.notice().unwrap().kind, NoticeKind::Success);
}

#[test]
fn failure_keeps_fields_and_re_enables_submit() {
    let mut form = filled();
    form.begin_submit().unwrap();
    form.complete(&Err(FolioError::relay("timeout")));
    assert!(form.is_submit_enabled());
    assert_eq!(form.name, "Ada");
    assert_eq!(form.message, "Hello");
    assert_eq!(form.notice().unwrap().kind, NoticeKind::Failure);
    assert!(form.begin_submit().is_ok());
}

#[test]
fn notice_expires() {
    let mut form = filled();
    form.begin_submit().unwrap();
    form.complete(&Ok(()));
    form.tick(4.0);
    assert!(form.notice().is_some());
    form.tick(1.5);
    assert!(form.notice().is_none());
}
