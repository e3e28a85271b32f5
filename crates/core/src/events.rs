//! Host events and internal commands.

use vantage_form::{AuthTab, LoginSubmission, SignupSubmission};
use vantage_types::RegionId;

/// One input event from the host page.
///
/// The host translates its native events into these and feeds them to
/// [`crate::PageController::handle_event`] one at a time. Each event is
/// processed in a single synchronous pass.
#[derive(Debug, Clone, PartialEq)]
pub enum HostEvent {
    /// Page finished loading; runs the one-time entry effects.
    Load,
    /// The viewport scrolled to a new offset.
    Scroll { offset: f32 },
    /// The viewport height changed.
    Resize { height: f32 },
    /// A click, with the clicked region (if any) and pointer position
    /// in document coordinates.
    Click {
        target: Option<RegionId>,
        x: f32,
        y: f32,
    },
    /// The pointer moved, in document coordinates.
    PointerMove { x: f32, y: f32 },
    /// The pointer left the page.
    PointerLeave,
    /// The password field changed; drives the strength indicator.
    PasswordInput { value: String },
    /// The login form was submitted.
    LoginSubmit(LoginSubmission),
    /// The signup form was submitted.
    SignupSubmit(SignupSubmission),
    /// Animation clock tick with a monotonic timestamp.
    Tick { now_ms: u64 },
}

/// Deferred controller action, produced by subscription callbacks and
/// scheduled tasks, drained after each pass.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum PageCommand {
    /// The stats section scrolled in; start the counter animations.
    StartCounters,
    /// Leave the page for the given URL.
    Navigate(String),
    /// Switch the auth form to the given tab.
    ActivateTab(AuthTab),
}
