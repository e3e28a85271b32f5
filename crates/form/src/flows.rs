//! Login and signup submission flows.
//!
//! Submissions are evaluated locally. Acceptance produces a success
//! notification plus a delayed follow-up action; rejection produces an
//! error notification and nothing else. The integration layer owns the
//! notification surface and the scheduler, so evaluation here is pure.

use crate::validate::{validate_email, validate_password};
use vantage_traits::Severity;

/// Delay before the app redirect after a successful login, in ms.
pub const REDIRECT_DELAY_MS: u64 = 2000;
/// Delay before switching back to the login tab after signup, in ms.
pub const TAB_SWITCH_DELAY_MS: u64 = 1500;

/// Deferred action scheduled after an accepted submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FollowUp {
    /// Leave for the application proper.
    Redirect { url: String, delay_ms: u64 },
    /// Freshly signed up; hand over to the login form.
    SwitchToLogin { delay_ms: u64 },
}

/// Result of evaluating one submission.
#[derive(Debug, Clone, PartialEq)]
pub struct SubmitOutcome {
    pub accepted: bool,
    pub message: &'static str,
    pub severity: Severity,
    pub follow_up: Option<FollowUp>,
}

impl SubmitOutcome {
    fn rejected(message: &'static str) -> Self {
        Self {
            accepted: false,
            message,
            severity: Severity::Error,
            follow_up: None,
        }
    }
}

/// Raw field values from the login form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginSubmission {
    pub email: String,
    pub password: String,
}

impl LoginSubmission {
    pub fn evaluate(&self, redirect_url: &str) -> SubmitOutcome {
        if validate_email(&self.email) && validate_password(&self.password) {
            log::info!("login accepted for {}", self.email);
            SubmitOutcome {
                accepted: true,
                message: "Login successful! Redirecting...",
                severity: Severity::Success,
                follow_up: Some(FollowUp::Redirect {
                    url: redirect_url.to_string(),
                    delay_ms: REDIRECT_DELAY_MS,
                }),
            }
        } else {
            SubmitOutcome::rejected("Please enter valid credentials")
        }
    }
}

/// Raw field values from the signup form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupSubmission {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupSubmission {
    pub fn evaluate(&self) -> SubmitOutcome {
        if !self.name.trim().is_empty()
            && validate_email(&self.email)
            && validate_password(&self.password)
        {
            log::info!("signup accepted for {}", self.email);
            SubmitOutcome {
                accepted: true,
                message: "Account created successfully!",
                severity: Severity::Success,
                follow_up: Some(FollowUp::SwitchToLogin {
                    delay_ms: TAB_SWITCH_DELAY_MS,
                }),
            }
        } else {
            SubmitOutcome::rejected("Please fill in all fields correctly")
        }
    }
}
