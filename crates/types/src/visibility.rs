use serde::{Deserialize, Serialize};

/// A region's visibility classification. Every region starts `Hidden`
/// and only changes inside a recomputation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisibilityState {
    #[default]
    Hidden,
    Visible,
}

impl VisibilityState {
    pub fn is_visible(self) -> bool {
        self == VisibilityState::Visible
    }
}

/// Whether a subscription re-fires after the region leaves and
/// re-enters the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TriggerPolicy {
    /// Fire at most once, then drop out of the watched set.
    Once,
    /// Fire on every crossing, in both directions.
    Repeatable,
}
