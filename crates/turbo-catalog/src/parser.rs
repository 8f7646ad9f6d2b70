//! Catalog parser.

use crate::error::ParseError;
use crate::model::CatalogDocument;
use crate::source::CatalogSource;

/// Decode raw bytes into a catalog document.
///
/// All-or-nothing: on error no partial document is returned.
pub fn parse(bytes: &[u8]) -> Result<CatalogDocument, ParseError> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Read a source and parse it.
pub fn load(source: &dyn CatalogSource) -> Result<CatalogDocument, ParseError> {
    let bytes = source.read()?;
    parse(&bytes)
}

/// Serialize a document back to its wire form.
pub fn to_bytes(document: &CatalogDocument) -> Result<Vec<u8>, ParseError> {
    Ok(serde_json::to_vec(document)?)
}
