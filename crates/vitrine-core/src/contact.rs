//! Contact form logic.
//!
//! Field definitions, whole-form validation, and the submission path. The
//! transport is a trait seam so the simulated delivery used today can be
//! swapped for a real endpoint without touching the form; the outcome
//! already distinguishes success, rejection, and timeout.

use std::time::Duration;

use futures::future::BoxFuture;

use crate::error::SendError;
use crate::validate::{validate_field, FieldError, FieldKind};

/// Latency of the simulated delivery.
pub const SIMULATED_LATENCY_MS: u64 = 2000;
/// Upper bound on any delivery attempt before it is reported as timed out.
pub const SUBMIT_TIMEOUT_MS: u64 = 10_000;

/// The contact form's fields, in display order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ContactField {
    Name,
    Email,
    Phone,
    Subject,
    Message,
}

impl ContactField {
    pub fn all() -> &'static [ContactField] {
        &[
            ContactField::Name,
            ContactField::Email,
            ContactField::Phone,
            ContactField::Subject,
            ContactField::Message,
        ]
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            ContactField::Email => FieldKind::Email,
            ContactField::Phone => FieldKind::Tel,
            _ => FieldKind::Text,
        }
    }

    /// Phone is the only optional field.
    pub fn required(&self) -> bool {
        !matches!(self, ContactField::Phone)
    }

    pub fn label(&self) -> &'static str {
        match self {
            ContactField::Name => "Name",
            ContactField::Email => "Email",
            ContactField::Phone => "Phone",
            ContactField::Subject => "Subject",
            ContactField::Message => "Message",
        }
    }
}

/// One contact message as entered in the form.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    /// The raw value currently held for `field`.
    pub fn field(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Phone => &self.phone,
            ContactField::Subject => &self.subject,
            ContactField::Message => &self.message,
        }
    }

    /// Validate every field; all failures are reported, in display order.
    pub fn validate(&self) -> Result<(), Vec<(ContactField, FieldError)>> {
        let mut failures = Vec::new();
        for &field in ContactField::all() {
            if let Err(err) = validate_field(self.field(field), field.required(), field.kind()) {
                failures.push((field, err));
            }
        }
        if failures.is_empty() {
            Ok(())
        } else {
            Err(failures)
        }
    }
}

/// Result of a submission attempt.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum SubmitOutcome {
    /// The transport accepted the message.
    Accepted,
    /// The transport refused or failed to deliver it.
    Rejected(String),
    /// No answer within the submission timeout.
    TimedOut,
}

/// Delivery seam for contact messages.
pub trait MessageTransport: Send + Sync {
    fn deliver<'a>(&'a self, message: &'a ContactMessage) -> BoxFuture<'a, Result<(), SendError>>;
}

/// Transport standing in for a real endpoint: resolves Ok after a fixed
/// latency. There is no failure path here; rejections come from real
/// transports.
#[derive(Clone, Copy, Debug)]
pub struct SimulatedTransport {
    pub latency: Duration,
}

impl Default for SimulatedTransport {
    fn default() -> Self {
        Self {
            latency: Duration::from_millis(SIMULATED_LATENCY_MS),
        }
    }
}

impl MessageTransport for SimulatedTransport {
    fn deliver<'a>(&'a self, message: &'a ContactMessage) -> BoxFuture<'a, Result<(), SendError>> {
        Box::pin(async move {
            tokio::time::sleep(self.latency).await;
            tracing::info!(from = %message.email, subject = %message.subject, "simulated delivery complete");
            Ok(())
        })
    }
}

/// Deliver `message` through `transport`, bounding the attempt by
/// `timeout`.
pub async fn submit(
    transport: &dyn MessageTransport,
    message: &ContactMessage,
    timeout: Duration,
) -> SubmitOutcome {
    match tokio::time::timeout(timeout, transport.deliver(message)).await {
        Ok(Ok(())) => SubmitOutcome::Accepted,
        Ok(Err(err)) => SubmitOutcome::Rejected(err.to_string()),
        Err(_) => SubmitOutcome::TimedOut,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_message() -> ContactMessage {
        ContactMessage {
            name: "Omar Nasser".to_string(),
            email: "omar@example.com".to_string(),
            phone: "+1 555-123-4567".to_string(),
            subject: "Brand identity".to_string(),
            message: "I would like a quote.".to_string(),
        }
    }

    #[test]
    fn valid_message_passes() {
        assert_eq!(valid_message().validate(), Ok(()));
    }

    #[test]
    fn empty_optional_phone_passes() {
        let mut msg = valid_message();
        msg.phone.clear();
        assert_eq!(msg.validate(), Ok(()));
    }

    #[test]
    fn all_failures_are_collected_in_order() {
        let msg = ContactMessage {
            email: "not-an-email".to_string(),
            phone: "abc".to_string(),
            ..Default::default()
        };
        let failures = msg.validate().unwrap_err();
        let fields: Vec<ContactField> = failures.iter().map(|(f, _)| *f).collect();
        assert_eq!(
            fields,
            vec![
                ContactField::Name,
                ContactField::Email,
                ContactField::Phone,
                ContactField::Subject,
                ContactField::Message,
            ]
        );
        assert_eq!(failures[0].1, FieldError::Required);
        assert_eq!(failures[1].1, FieldError::InvalidEmail);
        assert_eq!(failures[2].1, FieldError::InvalidPhone);
    }

    #[test]
    fn field_metadata() {
        assert_eq!(ContactField::Email.kind(), FieldKind::Email);
        assert_eq!(ContactField::Phone.kind(), FieldKind::Tel);
        assert!(!ContactField::Phone.required());
        assert!(ContactField::Message.required());
        assert_eq!(ContactField::Subject.label(), "Subject");
    }

    #[tokio::test(start_paused = true)]
    async fn simulated_submission_accepts_after_latency() {
        let transport = SimulatedTransport::default();
        let started = tokio::time::Instant::now();
        let outcome = submit(
            &transport,
            &valid_message(),
            Duration::from_millis(SUBMIT_TIMEOUT_MS),
        )
        .await;
        assert_eq!(outcome, SubmitOutcome::Accepted);
        assert_eq!(
            started.elapsed(),
            Duration::from_millis(SIMULATED_LATENCY_MS)
        );
    }

    #[tokio::test(start_paused = true)]
    async fn slow_transport_times_out() {
        let transport = SimulatedTransport {
            latency: Duration::from_secs(60),
        };
        let outcome = submit(&transport, &valid_message(), Duration::from_secs(5)).await;
        assert_eq!(outcome, SubmitOutcome::TimedOut);
    }

    struct FailingTransport;

    impl MessageTransport for FailingTransport {
        fn deliver<'a>(
            &'a self,
            _message: &'a ContactMessage,
        ) -> BoxFuture<'a, Result<(), SendError>> {
            Box::pin(async { Err(SendError::Unavailable("no endpoint".to_string())) })
        }
    }

    #[tokio::test]
    async fn failing_transport_is_rejected() {
        let outcome = submit(&FailingTransport, &valid_message(), Duration::from_secs(1)).await;
        match outcome {
            SubmitOutcome::Rejected(reason) => assert!(reason.contains("no endpoint")),
            other => panic!("expected rejection, got {other:?}"),
        }
    }
}
