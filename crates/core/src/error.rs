//! Error types for page assembly.

use thiserror::Error;
use vantage_observer::ObserverError;

/// The main error enum for building and configuring a page.
///
/// There are no runtime errors past assembly: the engine degrades
/// gracefully (a mutation against a missing element is a no-op, an
/// unmeasurable region is retried) rather than failing the host page.
#[derive(Error, Debug)]
pub enum PageError {
    #[error("Configuration error: {0}")]
    Config(String),
    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Subscription error: {0}")]
    Observer(#[from] ObserverError),
}
