use crate::{
    config::ContactConfig,
    foundation::error::{FolioError, FolioResult},
};

/// Body sent to the contact function.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct ContactPayload {
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Message body.
    pub message: String,
}

/// Form input.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Field {
    /// Name input.
    Name,
    /// Email input.
    Email,
    /// Message textarea.
    Message,
}

impl Field {
    /// Input name attribute.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Message => "message",
        }
    }
}

/// Tone of a [`Notice`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    /// Message delivered.
    Success,
    /// Delivery failed.
    Failure,
}

/// Transient acknowledgment shown after a submission.
#[derive(Clone, Debug, PartialEq)]
pub struct Notice {
    /// Tone.
    pub kind: NoticeKind,
    /// Headline.
    pub title: &'static str,
    /// Body text.
    pub description: &'static str,
}

impl Notice {
    fn success() -> Self {
        Self {
            kind: NoticeKind::Success,
            title: "Message sent!",
            description: "Thanks for reaching out. I'll get back to you soon.",
        }
    }

    fn failure() -> Self {
        Self {
            kind: NoticeKind::Failure,
            title: "Something went wrong",
            description: "Your message could not be sent. Please try again.",
        }
    }
}

/// Contact form state.
///
/// A submission is split into [`ContactForm::begin_submit`] and [`ContactForm::complete`] so
/// the submit control stays disabled for as long as the call is in flight, whichever way the
/// host awaits it.
#[derive(Clone, Debug)]
pub struct ContactForm {
    /// Sender name.
    pub name: String,
    /// Sender email.
    pub email: String,
    /// Message body.
    pub message: String,
    submitting: bool,
    notice: Option<(Notice, f64)>,
    notice_seconds: f64,
}

impl ContactForm {
    /// Empty form.
    pub fn new(cfg: &ContactConfig) -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            message: String::new(),
            submitting: false,
            notice: None,
            notice_seconds: cfg.notice_seconds,
        }
    }

    /// Required fields that are empty. Whitespace counts as filled, as with an HTML `required`
    /// input.
    pub fn missing_fields(&self) -> Vec<Field> {
        [
            (Field::Name, &self.name),
            (Field::Email, &self.email),
            (Field::Message, &self.message),
        ]
        .into_iter()
        .filter(|(_, v)| v.is_empty())
        .map(|(f, _)| f)
        .collect()
    }

    /// Return `true` while no submission is in flight.
    pub fn is_submit_enabled(&self) -> bool {
        !self.submitting
    }

    /// Return `true` while a submission is in flight.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Start a submission and return the payload to send.
    ///
    /// Fails without changing state when a submission is already in flight or a required field
    /// is empty.
    pub fn begin_submit(&mut self) -> FolioResult<ContactPayload> {
        if self.submitting {
            return Err(FolioError::validation("a submission is already in flight"));
        }
        let missing = self.missing_fields();
        if !missing.is_empty() {
            let names: Vec<&str> = missing.iter().map(|f| f.as_str()).collect();
            return Err(FolioError::validation(format!(
                "required fields are empty: {}",
                names.join(", ")
            )));
        }
        self.submitting = true;
        Ok(ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            message: self.message.clone(),
        })
    }

    /// Finish the in-flight submission.
    ///
    /// Success clears the fields; failure keeps them so the user can retry. Either way the
    /// submit control is enabled again and a notice is shown.
    pub fn complete(&mut self, outcome: &FolioResult<()>) {
        if !self.submitting {
            tracing::warn!("contact submission completed while none was in flight");
        }
        self.submitting = false;
        let notice = match outcome {
            Ok(()) => {
                self.name.clear();
                self.email.clear();
                self.message.clear();
                Notice::success()
            }
            Err(e) => {
                tracing::error!(error = %e, "contact submission failed");
                Notice::failure()
            }
        };
        self.notice = Some((notice, self.notice_seconds));
    }

    /// Notice currently shown.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref().map(|(n, _)| n)
    }

    /// Dismiss the notice early.
    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Age the notice by `dt` seconds, dropping it once expired.
    pub fn tick(&mut self, dt: f64) {
        if let Some((_, remaining)) = &mut self.notice {
            *remaining -= dt.max(0.0);
            if *remaining <= 0.0 {
                self.notice = None;
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/contact/form.rs"]
mod tests;
