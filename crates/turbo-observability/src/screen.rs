//! Screen identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_SCREEN: AtomicU64 = AtomicU64::new(1);

/// Identifies one active page engine, for log correlation.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ScreenId(pub String);

impl ScreenId {
    /// Generate a new process-unique screen ID.
    pub fn generate() -> Self {
        let seq = NEXT_SCREEN.fetch_add(1, Ordering::Relaxed);
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        Self(format!("{:x}-{:x}", nanos, seq))
    }

    /// Create from an existing ID string.
    pub fn from_string(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
