//! Contact form submission flow.
//!
//! The flow is written against two seams so it can run outside a browser:
//! [`FormHost`] is the form on the page (fields, submit button, notices) and
//! [`ContactTransport`] performs the single outbound request.

use std::future::Future;

use log::{error, info, warn};
use serde::Serialize;
use thiserror::Error;

pub const SUBMIT_PENDING_LABEL: &str = "Sending...";

/// Raw values read from the form, honeypot included.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContactFields {
    pub name: String,
    pub email: String,
    pub company: String,
    pub package: String,
    pub message: String,
    /// Hidden `website` field. Humans never fill it.
    pub website: String,
}

impl ContactFields {
    pub fn honeypot_tripped(&self) -> bool {
        !self.website.is_empty()
    }

    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.name.clone(),
            email: self.email.clone(),
            company: self.company.clone(),
            package: self.package.clone(),
            message: self.message.clone(),
        }
    }
}

/// JSON body posted to the form endpoint.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub company: String,
    pub package: String,
    pub message: String,
}

#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("request failed: {0}")]
    Transport(#[from] gloo_net::Error),
    #[error("form endpoint answered with status {0}")]
    Status(u16),
}

pub trait ContactTransport {
    /// Issues one POST of `payload`. Ok means the endpoint answered with a success status.
    fn post(&self, payload: &ContactPayload) -> impl Future<Output = Result<(), SubmitError>>;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Sent,
    Failed { fallback_email: String },
}

impl Notice {
    pub fn message(&self) -> String {
        match self {
            Notice::Sent => "Thank you! Your message has been sent successfully. I'll respond within 24 hours.".to_string(),
            Notice::Failed { fallback_email } => format!(
                "Sorry, there was an error sending your message. Please email {fallback_email} directly."
            ),
        }
    }
}

/// The page side of a submission.
pub trait FormHost {
    fn fields(&self) -> ContactFields;
    fn set_pending(&self, pending: bool);
    fn reset(&self);
    fn scroll_to_top(&self);
    fn notify(&self, notice: Notice);
    fn fallback_email(&self) -> String;
}

#[derive(Debug)]
pub enum SubmitOutcome {
    SpamDropped,
    Sent,
    Failed(SubmitError),
}

/// Submit button label and enabled state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubmitControl {
    label: String,
    pending: bool,
}

impl SubmitControl {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            pending: false,
        }
    }

    pub fn set_pending(&mut self, pending: bool) {
        self.pending = pending;
    }

    pub fn is_disabled(&self) -> bool {
        self.pending
    }

    pub fn label(&self) -> &str {
        if self.pending {
            SUBMIT_PENDING_LABEL
        } else {
            &self.label
        }
    }
}

/// Runs one submission. The host is never left pending, whatever the outcome.
pub async fn submit_contact<H, T>(host: &H, transport: &T) -> SubmitOutcome
where
    H: FormHost,
    T: ContactTransport,
{
    let fields = host.fields();
    if fields.honeypot_tripped() {
        warn!("Spam detected, dropping contact submission");
        return SubmitOutcome::SpamDropped;
    }

    host.set_pending(true);
    let outcome = match transport.post(&fields.payload()).await {
        Ok(()) => {
            info!("Contact form sent");
            host.notify(Notice::Sent);
            host.reset();
            host.scroll_to_top();
            SubmitOutcome::Sent
        }
        Err(err) => {
            error!("Contact form submission failed: {err}");
            host.notify(Notice::Failed {
                fallback_email: host.fallback_email(),
            });
            SubmitOutcome::Failed(err)
        }
    };
    host.set_pending(false);
    outcome
}

/// The latest package chosen from a card.
///
/// Each pick carries a fresh serial, so choosing the same package again is
/// still a change and gets written into the form after a reset or a manual edit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PackagePick {
    serial: u32,
    package: Option<String>,
}

impl PackagePick {
    pub fn then(&self, package: impl Into<String>) -> Self {
        Self {
            serial: self.serial.wrapping_add(1),
            package: Some(package.into()),
        }
    }

    pub fn package(&self) -> Option<&str> {
        self.package.as_deref()
    }
}

/// Maps a package card title to the contact form's package option.
pub fn package_from_title(title: &str) -> &'static str {
    let title = title.to_lowercase();
    if title.contains("essential") {
        "essential"
    } else if title.contains("partnership") {
        "executive"
    } else {
        "enterprise"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::{Cell, RefCell};

    struct FakeHost {
        fields: RefCell<ContactFields>,
        control: RefCell<SubmitControl>,
        pending_seen: Cell<bool>,
        notices: RefCell<Vec<Notice>>,
        scrolled_to_top: Cell<bool>,
    }

    impl FakeHost {
        fn new(fields: ContactFields) -> Self {
            Self {
                fields: RefCell::new(fields),
                control: RefCell::new(SubmitControl::new("Send Message")),
                pending_seen: Cell::new(false),
                notices: RefCell::new(Vec::new()),
                scrolled_to_top: Cell::new(false),
            }
        }
    }

    impl FormHost for FakeHost {
        fn fields(&self) -> ContactFields {
            self.fields.borrow().clone()
        }

        fn set_pending(&self, pending: bool) {
            if pending {
                self.pending_seen.set(true);
            }
            self.control.borrow_mut().set_pending(pending);
        }

        fn reset(&self) {
            *self.fields.borrow_mut() = ContactFields::default();
        }

        fn scroll_to_top(&self) {
            self.scrolled_to_top.set(true);
        }

        fn notify(&self, notice: Notice) {
            self.notices.borrow_mut().push(notice);
        }

        fn fallback_email(&self) -> String {
            "hello@example.com".to_string()
        }
    }

    struct FakeTransport<'a> {
        status: u16,
        calls: RefCell<Vec<ContactPayload>>,
        label_during_call: RefCell<Option<String>>,
        watched: Option<&'a RefCell<SubmitControl>>,
    }

    impl<'a> FakeTransport<'a> {
        fn answering(status: u16) -> Self {
            Self {
                status,
                calls: RefCell::new(Vec::new()),
                label_during_call: RefCell::new(None),
                watched: None,
            }
        }

        fn watching(status: u16, control: &'a RefCell<SubmitControl>) -> Self {
            Self {
                watched: Some(control),
                ..Self::answering(status)
            }
        }
    }

    impl ContactTransport for FakeTransport<'_> {
        async fn post(&self, payload: &ContactPayload) -> Result<(), SubmitError> {
            self.calls.borrow_mut().push(payload.clone());
            if let Some(control) = self.watched {
                *self.label_during_call.borrow_mut() = Some(control.borrow().label().to_string());
            }
            if (200..300).contains(&self.status) {
                Ok(())
            } else {
                Err(SubmitError::Status(self.status))
            }
        }
    }

    fn filled() -> ContactFields {
        ContactFields {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            company: "Analytical Engines".to_string(),
            package: "executive".to_string(),
            message: "Need help with my calendar".to_string(),
            website: String::new(),
        }
    }

    #[test]
    fn honeypot_blocks_the_request() {
        let host = FakeHost::new(ContactFields {
            website: "http://spam.example".to_string(),
            ..filled()
        });
        let transport = FakeTransport::answering(200);
        let outcome = block_on(submit_contact(&host, &transport));
        assert!(matches!(outcome, SubmitOutcome::SpamDropped));
        assert!(transport.calls.borrow().is_empty());
        assert!(!host.pending_seen.get());
        assert!(host.notices.borrow().is_empty());
    }

    #[test]
    fn success_clears_fields_and_notifies() {
        let host = FakeHost::new(filled());
        let transport = FakeTransport::watching(200, &host.control);
        let outcome = block_on(submit_contact(&host, &transport));
        assert!(matches!(outcome, SubmitOutcome::Sent));
        assert_eq!(transport.calls.borrow().len(), 1);
        assert_eq!(transport.calls.borrow()[0], filled().payload());
        assert_eq!(
            transport.label_during_call.borrow().as_deref(),
            Some(SUBMIT_PENDING_LABEL)
        );
        assert_eq!(host.fields(), ContactFields::default());
        assert_eq!(*host.notices.borrow(), vec![Notice::Sent]);
        assert!(host.scrolled_to_top.get());
        assert!(!host.control.borrow().is_disabled());
    }

    #[test]
    fn failure_restores_the_button() {
        let host = FakeHost::new(filled());
        let transport = FakeTransport::answering(500);
        let outcome = block_on(submit_contact(&host, &transport));
        assert!(matches!(outcome, SubmitOutcome::Failed(SubmitError::Status(500))));
        assert_eq!(transport.calls.borrow().len(), 1);
        assert!(host.pending_seen.get());
        let control = host.control.borrow();
        assert!(!control.is_disabled());
        assert_eq!(control.label(), "Send Message");
        assert_eq!(host.fields(), filled());
        let notices = host.notices.borrow();
        assert_eq!(notices.len(), 1);
        assert!(notices[0].message().contains("hello@example.com"));
    }

    #[test]
    fn payload_has_exactly_five_fields() {
        let json = serde_json::to_value(filled().payload()).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 5);
        assert!(object.get("website").is_none());
        assert_eq!(object["package"], "executive");
    }

    #[test]
    fn status_errors_name_the_status() {
        assert_eq!(
            SubmitError::Status(404).to_string(),
            "form endpoint answered with status 404"
        );
    }

    #[test]
    fn repeated_picks_of_one_package_are_distinct() {
        let none = PackagePick::default();
        assert_eq!(none.package(), None);
        let first = none.then(package_from_title("Essential Support"));
        let again = first.then(package_from_title("Essential Support"));
        assert_eq!(first.package(), Some("essential"));
        assert_eq!(again.package(), Some("essential"));
        assert_ne!(first, again);
    }

    #[test]
    fn package_titles_map_to_options() {
        assert_eq!(package_from_title("Essential Support"), "essential");
        assert_eq!(package_from_title("Executive Partnership"), "executive");
        assert_eq!(package_from_title("Enterprise Suite"), "enterprise");
    }
}
