//! Engine configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::EngineError;
use crate::tabs::TabSet;

/// Default auto-advance period for the image carousel.
pub const DEFAULT_CAROUSEL_INTERVAL_MS: u64 = 3_000;

/// Engine settings, loaded from the `[engine]` table of the CLI config.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Carousel auto-advance period in milliseconds.
    #[serde(default = "default_carousel_interval_ms")]
    pub carousel_interval_ms: u64,

    /// Which tabs the page offers.
    #[serde(default)]
    pub tabs: TabSet,

    /// Static rows for the specifications and reviews tabs.
    #[serde(default)]
    pub content: TabContentSource,
}

fn default_carousel_interval_ms() -> u64 {
    DEFAULT_CAROUSEL_INTERVAL_MS
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            carousel_interval_ms: DEFAULT_CAROUSEL_INTERVAL_MS,
            tabs: TabSet::default(),
            content: TabContentSource::default(),
        }
    }
}

impl EngineConfig {
    /// Carousel period as a `Duration`.
    pub fn carousel_interval(&self) -> Duration {
        Duration::from_millis(self.carousel_interval_ms)
    }

    /// Set the carousel period.
    pub fn with_carousel_interval(mut self, interval: Duration) -> Self {
        self.carousel_interval_ms = interval.as_millis() as u64;
        self
    }

    /// Set the tab set.
    pub fn with_tabs(mut self, tabs: TabSet) -> Self {
        self.tabs = tabs;
        self
    }

    /// Reject settings the engine cannot run with.
    pub fn validate(&self) -> Result<(), EngineError> {
        if self.carousel_interval_ms == 0 {
            return Err(EngineError::InvalidConfig(
                "carousel_interval_ms must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

/// A title/value pair on the specifications tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpecEntry {
    pub title: String,
    pub value: String,
}

impl SpecEntry {
    pub fn new(title: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            value: value.into(),
        }
    }
}

/// Fixed content for the tabs the catalog does not describe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabContentSource {
    #[serde(default = "default_spec_rows")]
    pub spec_rows: Vec<SpecEntry>,
    #[serde(default = "default_reviews")]
    pub reviews: Vec<String>,
}

impl Default for TabContentSource {
    fn default() -> Self {
        Self {
            spec_rows: default_spec_rows(),
            reviews: default_reviews(),
        }
    }
}

fn default_spec_rows() -> Vec<SpecEntry> {
    vec![
        SpecEntry::new("المقاس", "قياسي"),
        SpecEntry::new("اللون", "أسود، بني"),
        SpecEntry::new("المواد", "جلد طبيعي، ألومنيوم"),
        SpecEntry::new("السعة", "8 بطاقات"),
        SpecEntry::new("الوزن", "50 جرام"),
    ]
}

fn default_reviews() -> Vec<String> {
    vec![
        "تصميم رائع وعملي جداً. أستخدمها منذ شهر ولا توجد أي مشاكل.".to_string(),
        "المحفظة خفيفة وسهلة الحمل، أعجبني جداً النظام الأوتوماتيكي لإخراج البطاقات."
            .to_string(),
        "جودة عالية مقابل السعر. أنصح بها لكل من يبحث عن محفظة عملية.".to_string(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.carousel_interval(), Duration::from_secs(3));
        assert_eq!(config.tabs, TabSet::Standard);
        assert_eq!(config.content.spec_rows.len(), 5);
        assert_eq!(config.content.reviews.len(), 3);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: EngineConfig =
            serde_json::from_str(r#"{"carousel_interval_ms": 500, "tabs": "extended"}"#).unwrap();
        assert_eq!(config.carousel_interval_ms, 500);
        assert_eq!(config.tabs, TabSet::Extended);
        assert_eq!(config.content, TabContentSource::default());
    }

    #[test]
    fn test_zero_interval_rejected() {
        let config = EngineConfig::default().with_carousel_interval(Duration::ZERO);
        assert!(matches!(
            config.validate(),
            Err(EngineError::InvalidConfig(_))
        ));
    }
}
