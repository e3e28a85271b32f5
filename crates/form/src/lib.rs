//! Form collaborators: validation, password strength, auth tabs, and
//! submission flows.
//!
//! Everything here is local simulation. Nothing is sent anywhere; a
//! valid submission produces a success notification and a scheduled
//! follow-up (redirect or tab switch) that the integration layer
//! executes.

pub mod flows;
pub mod strength;
pub mod tabs;
pub mod validate;

pub use flows::{
    FollowUp, LoginSubmission, SignupSubmission, SubmitOutcome, REDIRECT_DELAY_MS,
    TAB_SWITCH_DELAY_MS,
};
pub use strength::{password_strength, StrengthLabel, StrengthReport};
pub use tabs::{AuthTab, AuthTabs};
pub use validate::{validate_email, validate_password, MIN_PASSWORD_LEN};
