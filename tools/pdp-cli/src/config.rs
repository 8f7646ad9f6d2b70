//! CLI configuration.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use turbo_observability::{LogFormat, LogLevel};
use turbo_pdp::EngineConfig;

/// File names searched for, in order, from the working directory upwards.
pub const CONFIG_FILE_NAMES: [&str; 3] = ["pdp.toml", ".pdp.toml", "pdp.json"];

/// CLI configuration file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PdpConfig {
    /// Catalog location.
    #[serde(default)]
    pub catalog: CatalogConfig,

    /// Page engine settings.
    #[serde(default)]
    pub engine: EngineConfig,

    /// Log output settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl PdpConfig {
    /// Load config from a file.
    pub fn load(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;

        if path.ends_with(".json") {
            serde_json::from_str(&content)
                .with_context(|| format!("Failed to parse JSON config: {}", path))
        } else {
            toml::from_str(&content)
                .with_context(|| format!("Failed to parse TOML config: {}", path))
        }
    }

    /// Save config to a file.
    pub fn save(&self, path: &str) -> Result<()> {
        let content = if path.ends_with(".json") {
            serde_json::to_string_pretty(self)?
        } else {
            toml::to_string_pretty(self)?
        };

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path))
    }

    /// Problems that make the config unusable, then ones worth a warning.
    pub fn check(&self) -> (Vec<String>, Vec<String>) {
        let mut errors = Vec::new();
        let mut warnings = Vec::new();

        if let Err(e) = self.engine.validate() {
            errors.push(e.to_string());
        }
        if LogLevel::parse(&self.logging.level).is_none() {
            errors.push(format!("logging.level '{}' is not a level", self.logging.level));
        }
        if LogFormat::parse(&self.logging.format).is_none() {
            errors.push(format!(
                "logging.format '{}' must be json or human",
                self.logging.format
            ));
        }

        if self.catalog.path.is_none() {
            warnings.push("catalog.path is unset; commands need an explicit path".to_string());
        }
        if self.engine.carousel_interval_ms < 500 {
            warnings.push(format!(
                "engine.carousel_interval_ms {} is very short",
                self.engine.carousel_interval_ms
            ));
        }
        if self.engine.content.spec_rows.is_empty() {
            warnings.push("engine.content.spec_rows is empty".to_string());
        }

        (errors, warnings)
    }
}

/// Where the catalog response lives.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Catalog JSON path, relative to the working directory.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
}

/// Log output settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Minimum level (trace, debug, info, warn, error).
    #[serde(default = "default_level")]
    pub level: String,

    /// Entry format (json or human).
    #[serde(default = "default_format")]
    pub format: String,
}

fn default_level() -> String {
    "warn".to_string()
}

fn default_format() -> String {
    "human".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            format: default_format(),
        }
    }
}

/// Generate a default pdp.toml config file.
pub fn generate_default_config(catalog_path: &str) -> String {
    format!(
        r#"# Product page engine configuration

[catalog]
path = "{catalog_path}"

[engine]
carousel_interval_ms = 3000
# "standard" shows description, specifications and reviews;
# "extended" adds the catalog attributes tab.
tabs = "standard"

[logging]
level = "warn"
format = "human"
"#
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use turbo_pdp::TabSet;

    #[test]
    fn test_generated_config_parses() {
        let config: PdpConfig = toml::from_str(&generate_default_config("response.json")).unwrap();
        assert_eq!(config.catalog.path.as_deref(), Some("response.json"));
        assert_eq!(config.engine.carousel_interval_ms, 3000);
        assert_eq!(config.engine.tabs, TabSet::Standard);
        assert_eq!(config.engine.content.reviews.len(), 3);
        assert_eq!(config.logging.level, "warn");

        let (errors, warnings) = config.check();
        assert!(errors.is_empty());
        assert!(warnings.is_empty());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: PdpConfig = toml::from_str("").unwrap();
        assert!(config.catalog.path.is_none());
        assert_eq!(config.engine, EngineConfig::default());
        assert_eq!(config.logging.format, "human");
    }

    #[test]
    fn test_check_reports_errors() {
        let mut config = PdpConfig::default();
        config.engine.carousel_interval_ms = 0;
        config.logging.level = "loud".to_string();

        let (errors, warnings) = config.check();
        assert_eq!(errors.len(), 2);
        assert!(warnings.iter().any(|w| w.contains("catalog.path")));
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = std::env::temp_dir().join(format!("pdp-config-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();

        let mut config = PdpConfig::default();
        config.catalog.path = Some("catalog.json".to_string());
        config.engine.tabs = TabSet::Extended;

        for name in ["pdp.toml", "pdp.json"] {
            let path = dir.join(name);
            let path = path.to_str().unwrap();
            config.save(path).unwrap();
            let loaded = PdpConfig::load(path).unwrap();
            assert_eq!(loaded.engine, config.engine);
            assert_eq!(loaded.catalog.path, config.catalog.path);
        }

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
