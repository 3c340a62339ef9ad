//! Newsletter signup form state.
//!
//! Submission is two-phase so the in-flight state is observable:
//! [`FormState::begin_submit`] validates and marks the form as submitting,
//! [`FormState::finish_submit`] applies the collaborator's answer.
//! [`FormState::submit`] runs both phases against a synchronous
//! [`Subscriber`].
//!
//! Delivery is not this crate's concern. The form only knows the
//! [`Subscriber`] contract; [`AcceptAll`] is the stub used when no real
//! collaborator is wired in.

use regex::Regex;
use std::sync::LazyLock;
use thiserror::Error;
use tracing::{error, info};

pub const INVALID_EMAIL: &str = "Please enter a valid email address";
pub const SUBSCRIBE_FAILED: &str = "Something went wrong. Please try again.";

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));

/// Non-whitespace local part, `@`, and a domain containing a dot.
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[derive(Error, Debug)]
pub enum SubscribeError {
    #[error("subscription rejected: {0}")]
    Rejected(String),
    #[error("subscription service unavailable: {0}")]
    Unavailable(String),
}

/// The external subscription backend.
pub trait Subscriber {
    fn subscribe(&mut self, email: &str) -> Result<(), SubscribeError>;
}

/// Stub collaborator: accepts every address and records nothing.
#[derive(Debug, Default)]
pub struct AcceptAll;

impl Subscriber for AcceptAll {
    fn subscribe(&mut self, email: &str) -> Result<(), SubscribeError> {
        info!(email, "newsletter subscription accepted by stub");
        Ok(())
    }
}

/// Why a submit attempt did not reach the collaborator.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    #[error("a subscription is already in flight")]
    InFlight,
    #[error("email is empty")]
    Empty,
    #[error("{}", INVALID_EMAIL)]
    InvalidEmail,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormState {
    pub email: String,
    pub is_submitting: bool,
    pub error: Option<String>,
}

impl FormState {
    /// The user edited the field. Clears any shown error.
    pub fn input(&mut self, value: &str) {
        self.email = value.to_string();
        self.error = None;
    }

    /// Whether the submit control is enabled.
    pub fn can_submit(&self) -> bool {
        !self.is_submitting && !self.email.trim().is_empty()
    }

    /// Validate and enter the submitting state. Returns the trimmed address
    /// to hand to the collaborator.
    ///
    /// A blocked submit (in flight, or empty field) changes nothing. An
    /// invalid address sets the validation error.
    pub fn begin_submit(&mut self) -> Result<String, FormError> {
        if self.is_submitting {
            return Err(FormError::InFlight);
        }
        let email = self.email.trim();
        if email.is_empty() {
            return Err(FormError::Empty);
        }
        if !is_valid_email(email) {
            self.error = Some(INVALID_EMAIL.to_string());
            return Err(FormError::InvalidEmail);
        }
        let email = email.to_string();
        self.is_submitting = true;
        self.error = None;
        Ok(email)
    }

    /// Apply the collaborator's outcome. Success resets the form; failure
    /// keeps the typed address and shows a generic error.
    pub fn finish_submit(&mut self, result: Result<(), SubscribeError>) {
        match result {
            Ok(()) => *self = FormState::default(),
            Err(e) => {
                error!(error = %e, "newsletter subscription failed");
                self.is_submitting = false;
                self.error = Some(SUBSCRIBE_FAILED.to_string());
            }
        }
    }

    pub fn submit(&mut self, subscriber: &mut dyn Subscriber) -> Result<(), FormError> {
        let email = self.begin_submit()?;
        let result = subscriber.subscribe(&email);
        self.finish_submit(result);
        Ok(())
    }
}
