//! Request/response contract for form submission.
//!
//! A form is validated first; an invalid form never reaches the transport.
//! Valid forms are sent with a per-attempt timeout, and transient failures
//! (timeouts, network errors) are retried with linear backoff. Rejections
//! from the receiving end are final.
//!
//! No backend exists yet. [`SimulatedTransport`] waits a fixed delay and
//! accepts everything, which is what the live site does today.
//!
//! # Example
//!
//! ```rust
//! use std::time::Duration;
//! use vermixor::forms::{ContactForm, FormRules};
//! use vermixor::submit::{submit, RetryPolicy, SimulatedTransport, SubmitOutcome, Timer};
//!
//! struct Immediate;
//! impl Timer for Immediate {
//!     fn sleep(&self, _: Duration) -> impl std::future::Future<Output = ()> {
//!         std::future::ready(())
//!     }
//! }
//!
//! let form = ContactForm {
//!     name: "Aisha".into(),
//!     email: "aisha@example.com".into(),
//!     message: "New storefront, please.".into(),
//!     ..Default::default()
//! };
//! let transport = SimulatedTransport::new(Immediate, Duration::from_millis(1500));
//! let outcome = futures::executor::block_on(submit(
//!     &form,
//!     &FormRules::default(),
//!     &transport,
//!     &Immediate,
//!     &RetryPolicy::default(),
//! ));
//! assert!(matches!(outcome, SubmitOutcome::Accepted(_)));
//! ```

use std::future::Future;
use std::pin::pin;
use std::time::Duration;

use futures::future::{Either, select};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::forms::{Form, FormKind, FormRules, Submission, ValidationErrors};

/// Acknowledgement from the receiving end.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Receipt {
    /// Ticket or message id, when the backend hands one out
    pub reference: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransportError {
    #[error("request timed out after {}ms", .0.as_millis())]
    Timeout(Duration),
    #[error("network error: {0}")]
    Network(String),
    #[error("submission rejected: {0}")]
    Rejected(String),
}

impl TransportError {
    /// Worth another attempt.
    pub fn is_transient(&self) -> bool {
        matches!(self, TransportError::Timeout(_) | TransportError::Network(_))
    }
}

/// Delivers a submission somewhere.
pub trait Transport {
    fn send(&self, submission: &Submission) -> impl Future<Output = Result<Receipt, TransportError>>;
}

/// Source of delays. The browser implementation is backed by `setTimeout`;
/// tests resolve immediately.
pub trait Timer {
    fn sleep(&self, duration: Duration) -> impl Future<Output = ()>;
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total tries including the first, at least 1
    pub max_attempts: u32,
    /// Deadline for a single attempt
    pub timeout: Duration,
    /// Base delay; attempt `n` waits `n * backoff` before retrying
    pub backoff: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            timeout: Duration::from_secs(10),
            backoff: Duration::from_millis(500),
        }
    }
}

impl RetryPolicy {
    pub fn backoff_for(&self, attempt: u32) -> Duration {
        self.backoff * attempt
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    Accepted(Receipt),
    Invalid(ValidationErrors),
    Failed(TransportError),
}

impl SubmitOutcome {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }

    /// Toast to show for this outcome.
    pub fn notice(&self, kind: FormKind) -> Notice {
        match (self, kind) {
            (SubmitOutcome::Accepted(_), FormKind::Contact) => Notice::success(
                "Message sent successfully!",
                "We'll get back to you within 24 hours with a detailed response.",
            ),
            (SubmitOutcome::Accepted(_), FormKind::Review) => Notice::success(
                "Review submitted successfully!",
                "Your review is pending moderation and will appear shortly.",
            ),
            (SubmitOutcome::Invalid(errors), _) if errors.is_consent_only() => Notice::destructive(
                "Consent required",
                "Please consent to publishing your review.",
            ),
            (SubmitOutcome::Invalid(errors), _) => {
                Notice::destructive("Please check the form", &errors.to_string())
            }
            (SubmitOutcome::Failed(_), FormKind::Contact) => Notice::destructive(
                "Error sending message",
                "Please try again or contact us directly.",
            ),
            (SubmitOutcome::Failed(_), FormKind::Review) => {
                Notice::destructive("Error submitting review", "Please try again later.")
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NoticeKind {
    Success,
    Destructive,
}

/// A toast notification.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub kind: NoticeKind,
}

impl Notice {
    pub fn success(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            kind: NoticeKind::Success,
        }
    }

    pub fn destructive(title: &str, description: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            kind: NoticeKind::Destructive,
        }
    }
}

/// Validate `form` and, if valid, deliver it through `transport`.
pub async fn submit<F, T, C>(
    form: &F,
    rules: &FormRules,
    transport: &T,
    timer: &C,
    policy: &RetryPolicy,
) -> SubmitOutcome
where
    F: Form,
    T: Transport,
    C: Timer,
{
    if let Err(errors) = form.validate(rules) {
        tracing::debug!(kind = ?form.kind(), "form invalid: {errors}");
        return SubmitOutcome::Invalid(errors);
    }

    let submission = form.to_submission();
    let attempts = policy.max_attempts.max(1);
    let mut attempt = 1;
    loop {
        match send_once(transport, timer, &submission, policy.timeout).await {
            Ok(receipt) => {
                tracing::info!(kind = ?submission.kind(), attempt, "submission accepted");
                return SubmitOutcome::Accepted(receipt);
            }
            Err(err) if err.is_transient() && attempt < attempts => {
                tracing::warn!(attempt, "submission attempt failed, retrying: {err}");
                timer.sleep(policy.backoff_for(attempt)).await;
                attempt += 1;
            }
            Err(err) => {
                tracing::warn!(attempt, "submission failed: {err}");
                return SubmitOutcome::Failed(err);
            }
        }
    }
}

async fn send_once<T, C>(
    transport: &T,
    timer: &C,
    submission: &Submission,
    timeout: Duration,
) -> Result<Receipt, TransportError>
where
    T: Transport,
    C: Timer,
{
    let send = pin!(transport.send(submission));
    let deadline = pin!(timer.sleep(timeout));
    match select(send, deadline).await {
        Either::Left((result, _)) => result,
        Either::Right(((), _)) => Err(TransportError::Timeout(timeout)),
    }
}

/// Stand-in transport: waits `delay`, then accepts.
#[derive(Clone, Debug)]
pub struct SimulatedTransport<C> {
    timer: C,
    delay: Duration,
}

impl<C: Timer> SimulatedTransport<C> {
    pub fn new(timer: C, delay: Duration) -> Self {
        Self { timer, delay }
    }
}

impl<C: Timer> Transport for SimulatedTransport<C> {
    async fn send(&self, submission: &Submission) -> Result<Receipt, TransportError> {
        tracing::debug!(kind = ?submission.kind(), "simulating delivery");
        self.timer.sleep(self.delay).await;
        Ok(Receipt::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::{ContactForm, ReviewForm};
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;
    use std::cell::{Cell, RefCell};

    /// Resolves every sleep at once and records what was asked for.
    #[derive(Default)]
    struct InstantTimer {
        requested: RefCell<Vec<Duration>>,
    }

    impl Timer for InstantTimer {
        fn sleep(&self, duration: Duration) -> impl Future<Output = ()> {
            self.requested.borrow_mut().push(duration);
            std::future::ready(())
        }
    }

    /// Fails the first `failures` sends with `error`, then accepts.
    struct ScriptedTransport {
        failures: u32,
        error: TransportError,
        calls: Cell<u32>,
    }

    impl ScriptedTransport {
        fn new(failures: u32, error: TransportError) -> Self {
            Self {
                failures,
                error,
                calls: Cell::new(0),
            }
        }
    }

    impl Transport for ScriptedTransport {
        async fn send(&self, _submission: &Submission) -> Result<Receipt, TransportError> {
            let call = self.calls.get() + 1;
            self.calls.set(call);
            if call <= self.failures {
                Err(self.error.clone())
            } else {
                Ok(Receipt {
                    reference: Some(format!("ticket-{call}")),
                })
            }
        }
    }

    /// Never answers.
    #[derive(Default)]
    struct SilentTransport {
        calls: Cell<u32>,
    }

    impl Transport for SilentTransport {
        async fn send(&self, _submission: &Submission) -> Result<Receipt, TransportError> {
            self.calls.set(self.calls.get() + 1);
            futures::future::pending().await
        }
    }

    fn contact() -> ContactForm {
        ContactForm {
            name: "Bilal Ahmed".into(),
            email: "bilal@example.com".into(),
            message: "Looking for a booking app for our clinics.".into(),
            ..Default::default()
        }
    }

    fn run<T: Transport>(form: &impl Form, transport: &T, timer: &InstantTimer) -> SubmitOutcome {
        block_on(submit(
            form,
            &FormRules::default(),
            transport,
            timer,
            &RetryPolicy::default(),
        ))
    }

    #[test]
    fn complete_contact_form_is_accepted_with_success_notice() {
        let timer = InstantTimer::default();
        let transport = SimulatedTransport::new(InstantTimer::default(), Duration::from_millis(1500));
        let outcome = run(&contact(), &transport, &timer);

        assert!(outcome.is_accepted());
        let notice = outcome.notice(FormKind::Contact);
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.title, "Message sent successfully!");
    }

    #[test]
    fn simulated_transport_waits_its_delay() {
        let delay_timer = InstantTimer::default();
        let transport = SimulatedTransport::new(delay_timer, Duration::from_millis(1500));
        let _ = run(&contact(), &transport, &InstantTimer::default());
        assert_eq!(
            transport.timer.requested.borrow().as_slice(),
            &[Duration::from_millis(1500)]
        );
    }

    #[test]
    fn empty_required_field_never_reaches_transport() {
        let transport = ScriptedTransport::new(0, TransportError::Network("unused".into()));
        let form = ContactForm {
            message: String::new(),
            ..contact()
        };
        let outcome = run(&form, &transport, &InstantTimer::default());

        assert!(matches!(outcome, SubmitOutcome::Invalid(_)));
        assert_eq!(transport.calls.get(), 0);
        assert_eq!(outcome.notice(FormKind::Contact).kind, NoticeKind::Destructive);
    }

    #[test]
    fn missing_consent_gets_consent_notice() {
        let form = ReviewForm {
            name: "Hina".into(),
            email: "hina@example.com".into(),
            company: "Lumen".into(),
            role: "PM".into(),
            review: "Great communication and a very polished result.".into(),
            consent: false,
            ..Default::default()
        };
        let transport = ScriptedTransport::new(0, TransportError::Network("unused".into()));
        let outcome = run(&form, &transport, &InstantTimer::default());
        assert_eq!(outcome.notice(FormKind::Review).title, "Consent required");
        assert_eq!(transport.calls.get(), 0);
    }

    #[test]
    fn transient_failures_are_retried_with_backoff() {
        let timer = InstantTimer::default();
        let transport = ScriptedTransport::new(2, TransportError::Network("offline".into()));
        let outcome = run(&contact(), &transport, &timer);

        assert_eq!(
            outcome,
            SubmitOutcome::Accepted(Receipt {
                reference: Some("ticket-3".into())
            })
        );
        assert_eq!(transport.calls.get(), 3);
        // Each attempt arms a timeout, plus one backoff between attempts.
        let requested = timer.requested.borrow();
        assert!(requested.contains(&Duration::from_millis(500)));
        assert!(requested.contains(&Duration::from_millis(1000)));
    }

    #[test]
    fn retries_stop_at_max_attempts() {
        let transport = ScriptedTransport::new(10, TransportError::Network("offline".into()));
        let outcome = run(&contact(), &transport, &InstantTimer::default());
        assert_eq!(
            outcome,
            SubmitOutcome::Failed(TransportError::Network("offline".into()))
        );
        assert_eq!(transport.calls.get(), 3);
        assert_eq!(
            outcome.notice(FormKind::Contact).title,
            "Error sending message"
        );
    }

    #[test]
    fn rejection_is_not_retried() {
        let transport = ScriptedTransport::new(1, TransportError::Rejected("spam".into()));
        let outcome = run(&contact(), &transport, &InstantTimer::default());
        assert!(matches!(outcome, SubmitOutcome::Failed(TransportError::Rejected(_))));
        assert_eq!(transport.calls.get(), 1);
    }

    #[test]
    fn silent_transport_times_out_on_every_attempt() {
        let transport = SilentTransport::default();
        let outcome = run(&contact(), &transport, &InstantTimer::default());
        assert_eq!(
            outcome,
            SubmitOutcome::Failed(TransportError::Timeout(Duration::from_secs(10)))
        );
        assert_eq!(transport.calls.get(), 3);
    }

    #[test]
    fn zero_attempts_still_tries_once() {
        let transport = ScriptedTransport::new(0, TransportError::Network("unused".into()));
        let policy = RetryPolicy {
            max_attempts: 0,
            ..Default::default()
        };
        let outcome = block_on(submit(
            &contact(),
            &FormRules::default(),
            &transport,
            &InstantTimer::default(),
            &policy,
        ));
        assert!(outcome.is_accepted());
        assert_eq!(transport.calls.get(), 1);
    }
}
