//! Catalog document model and parser for the product detail page engine.
//!
//! This crate provides:
//!
//! - **Model**: `CatalogDocument` and the nested product, option, variant and price types
//! - **Parser**: all-or-nothing decoding of raw catalog bytes
//! - **Sources**: file and in-memory loaders that report a missing source as `NotFound`
//! - **Swatches**: hex colour decoding for option values
//!
//! # Example
//!
//! ```rust,ignore
//! use turbo_catalog::prelude::*;
//!
//! let document = load(&FileSource::new("response.json"))?;
//! if let Some(product) = document.first_product() {
//!     println!("{} ({} images)", product.name, product.media_gallery.len());
//! }
//! ```

pub mod error;
pub mod model;
pub mod parser;
pub mod source;
pub mod swatch;

pub use error::ParseError;
pub use model::*;
pub use parser::{load, parse, to_bytes};
pub use source::{BytesSource, CatalogSource, FileSource};
pub use swatch::{Rgba, Swatch};

/// Prelude for convenient imports.
pub mod prelude {
    pub use crate::error::ParseError;
    pub use crate::model::{
        AttributeRow, CatalogDocument, ConfigurableOption, OptionValue, ProductRecord,
        StockStatus, VariantAttribute, VariantRecord,
    };
    pub use crate::parser::{load, parse};
    pub use crate::source::{BytesSource, CatalogSource, FileSource};
    pub use crate::swatch::{Rgba, Swatch};
}
