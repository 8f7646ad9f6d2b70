//! Catalog document model.
//!
//! Typed mirror of the `{ data: { products: { items: [...] } } }` wire schema.
//! Field names are normalized; serde renames map them to the snake_case wire
//! keys and aliases accept the camelCase spellings some exports use.

mod option;
mod price;
mod product;

pub use option::{
    is_color_code, ConfigurableOption, OptionValue, VariantAttribute, VariantProduct,
    VariantRecord, COLOR_CODE,
};
pub use price::{Discount, Price, PriceDetail, PriceRange};
pub use product::{
    AttributeRow, Category, HtmlBlob, Label, MediaImage, ProductFeatures, ProductRecord, ReviewList,
    ShipTo, StockStatus, VendorInfo,
};

use serde::{Deserialize, Deserializer, Serialize};

/// Root of a parsed catalog. Immutable once parsed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogDocument {
    pub data: CatalogData,
}

/// The `data` envelope.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogData {
    pub products: ProductList,
}

/// The single product list held by a document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductList {
    pub items: Vec<ProductRecord>,
}

impl CatalogDocument {
    /// Wrap a product list in the wire envelope.
    pub fn new(items: Vec<ProductRecord>) -> Self {
        Self {
            data: CatalogData {
                products: ProductList { items },
            },
        }
    }

    /// All products, in document order.
    pub fn products(&self) -> &[ProductRecord] {
        &self.data.products.items
    }

    /// The product the page engine operates on.
    pub fn first_product(&self) -> Option<&ProductRecord> {
        self.data.products.items.first()
    }

    /// Check if the document holds no products.
    pub fn is_empty(&self) -> bool {
        self.data.products.items.is_empty()
    }
}

/// Accept `null` where a list is optional on the wire.
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
