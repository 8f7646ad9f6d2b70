//! Engine error types.

use thiserror::Error;
use turbo_catalog::ParseError;

/// Errors surfaced by the page engine.
///
/// Variant lookups that find nothing are not errors; they return `None`.
#[derive(Error, Debug)]
pub enum EngineError {
    /// The catalog could not be loaded.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Configuration rejected before the engine started.
    #[error("Invalid engine configuration: {0}")]
    InvalidConfig(String),

    /// The screen task is no longer running.
    #[error("Screen has been disposed")]
    ScreenClosed,
}
