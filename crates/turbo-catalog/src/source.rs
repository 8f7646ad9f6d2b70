//! Catalog sources.
//!
//! The core only ever sees bytes; a source is whatever hands them over.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::ParseError;

/// Something that can produce the raw catalog bytes.
pub trait CatalogSource {
    /// Name used in error messages.
    fn name(&self) -> String;

    /// Read the whole document.
    fn read(&self) -> Result<Vec<u8>, ParseError>;
}

/// Catalog bundled as a file on disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl CatalogSource for FileSource {
    fn name(&self) -> String {
        self.path.display().to_string()
    }

    fn read(&self) -> Result<Vec<u8>, ParseError> {
        std::fs::read(&self.path).map_err(|e| match e.kind() {
            ErrorKind::NotFound => ParseError::not_found(self.name()),
            _ => ParseError::Io(format!("{}: {}", self.name(), e)),
        })
    }
}

/// Catalog already held in memory. `None` models an absent bundle resource.
#[derive(Debug, Clone)]
pub struct BytesSource {
    name: String,
    bytes: Option<Vec<u8>>,
}

impl BytesSource {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            bytes: Some(bytes.into()),
        }
    }

    pub fn missing(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            bytes: None,
        }
    }
}

impl CatalogSource for BytesSource {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn read(&self) -> Result<Vec<u8>, ParseError> {
        self.bytes
            .clone()
            .ok_or_else(|| ParseError::not_found(&self.name))
    }
}
