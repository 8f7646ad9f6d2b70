//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context as _, Result};
use turbo_observability::{LogFormat, LogLevel, ScreenId, StructuredLogger};

use crate::config::{PdpConfig, CONFIG_FILE_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: PdpConfig,
    /// File the configuration came from, if any.
    pub config_file: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_file) = if let Some(path) = config_path {
            (PdpConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            match Self::find_config(&cwd) {
                Some(path) => {
                    let config = PdpConfig::load(&path.to_string_lossy())?;
                    (config, Some(path))
                }
                None => (PdpConfig::default(), None),
            }
        };

        Ok(Self {
            config,
            config_file,
            output,
            cwd,
        })
    }

    /// Find the nearest config file in the directory tree.
    fn find_config(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_FILE_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    return Some(config_path);
                }
            }

            if !current.pop() {
                return None;
            }
        }
    }

    /// Resolve the catalog path from an argument or the config.
    pub fn catalog_path(&self, arg: Option<&str>) -> Result<PathBuf> {
        match arg.or(self.config.catalog.path.as_deref()) {
            Some(path) => Ok(self.resolve_path(path)),
            None => bail!("No catalog given. Pass a path or set catalog.path in pdp.toml."),
        }
    }

    /// Logger for a new screen, configured from the `[logging]` table.
    pub fn logger(&self) -> StructuredLogger {
        let level = if self.output.is_verbose() {
            LogLevel::Debug
        } else {
            LogLevel::parse(&self.config.logging.level).unwrap_or(LogLevel::Warn)
        };
        let format = LogFormat::parse(&self.config.logging.format).unwrap_or(LogFormat::Human);

        StructuredLogger::new(ScreenId::generate())
            .with_component("page")
            .with_min_level(level)
            .with_format(format)
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
