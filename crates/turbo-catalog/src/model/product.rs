//! Product record types.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::option::{ConfigurableOption, VariantRecord};
use super::price::PriceRange;
use super::null_as_empty;

/// Stock status of a product or variant.
///
/// Unknown statuses are passed through untouched.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StockStatus {
    InStock,
    OutOfStock,
    Other(String),
}

impl StockStatus {
    pub fn as_str(&self) -> &str {
        match self {
            StockStatus::InStock => "IN_STOCK",
            StockStatus::OutOfStock => "OUT_OF_STOCK",
            StockStatus::Other(s) => s,
        }
    }

    /// Check if the item can be purchased.
    pub fn is_in_stock(&self) -> bool {
        *self == StockStatus::InStock
    }
}

impl From<String> for StockStatus {
    fn from(s: String) -> Self {
        match s.as_str() {
            "IN_STOCK" => StockStatus::InStock,
            "OUT_OF_STOCK" => StockStatus::OutOfStock,
            _ => StockStatus::Other(s),
        }
    }
}

impl From<StockStatus> for String {
    fn from(status: StockStatus) -> Self {
        match status {
            StockStatus::Other(s) => s,
            other => other.as_str().to_string(),
        }
    }
}

impl fmt::Display for StockStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A product in the catalog document.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProductRecord {
    pub id: i64,
    pub name: String,
    pub sku: String,
    #[serde(rename = "stock_status", alias = "stockStatus")]
    pub stock_status: StockStatus,
    /// Shipping estimate shown next to the stock badge.
    #[serde(rename = "ship_to", alias = "shipTo")]
    pub shipping: ShipTo,
    /// Raw HTML description.
    pub description: HtmlBlob,
    /// Gallery images in display order. Required, but may be empty.
    #[serde(rename = "media_gallery", alias = "mediaGallery")]
    pub media_gallery: Vec<MediaImage>,
    #[serde(rename = "configurable_options", alias = "configurableOptions")]
    pub configurable_options: Vec<ConfigurableOption>,
    pub variants: Vec<VariantRecord>,
    pub attributes: Vec<AttributeRow>,
    #[serde(rename = "price_range", alias = "priceRange")]
    pub price_range: PriceRange,

    #[serde(default, alias = "salableQty")]
    pub salable_qty: Option<i64>,
    #[serde(default, alias = "typeId")]
    pub type_id: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub labels: Vec<Label>,
    #[serde(default, alias = "smallImage")]
    pub small_image: Option<MediaImage>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub categories: Vec<Category>,
    #[serde(default, alias = "ratingSummary")]
    pub rating_summary: Option<f64>,
    #[serde(default, alias = "reviewCount")]
    pub review_count: Option<i64>,
    #[serde(default)]
    pub reviews: Option<ReviewList>,
    #[serde(default, rename = "vendorInfo", alias = "vendor_info")]
    pub vendor_info: Option<VendorInfo>,
    #[serde(default, alias = "productFeatures")]
    pub product_features: Option<ProductFeatures>,
}

impl ProductRecord {
    /// Gallery image URLs in display order.
    pub fn image_urls(&self) -> Vec<String> {
        self.media_gallery.iter().map(|m| m.url.clone()).collect()
    }

    /// Check if the product can be purchased.
    pub fn is_in_stock(&self) -> bool {
        self.stock_status.is_in_stock()
    }
}

/// Shipping estimate block.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ShipTo {
    #[serde(default)]
    pub prefix: String,
    #[serde(default)]
    pub icon: String,
    /// Human-readable delivery window, already localized.
    pub period: String,
}

/// Wrapper around the HTML description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct HtmlBlob {
    pub html: String,
}

/// A single gallery image.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MediaImage {
    pub url: String,
}

impl MediaImage {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Raw label/code/value attribute triple.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AttributeRow {
    pub label: String,
    pub code: String,
    pub value: String,
}

/// Promotional badge.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Label {
    #[serde(default)]
    pub title: String,
    #[serde(default, alias = "labelText")]
    pub label_text: String,
    #[serde(default, alias = "labelImage")]
    pub label_image: Option<String>,
    #[serde(default, alias = "backgroundImage")]
    pub background_image: Option<String>,
    #[serde(default, alias = "customStyle")]
    pub custom_style: Option<String>,
}

/// Category reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// Customer reviews container. The export leaves item shape open.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct ReviewList {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub items: Vec<serde_json::Value>,
}

/// Seller information.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct VendorInfo {
    #[serde(default, alias = "vendorId")]
    pub vendor_id: i64,
    #[serde(default, alias = "productsCount")]
    pub products_count: String,
    #[serde(default, alias = "joinedDate")]
    pub joined_date: String,
    #[serde(default, alias = "vendorRegionName")]
    pub vendor_region_name: String,
    #[serde(default, alias = "vendorCountry")]
    pub vendor_country: String,
    #[serde(default, alias = "storeName")]
    pub store_name: Option<String>,
    #[serde(default, alias = "logoUrl")]
    pub logo_url: String,
}

/// Merchandising flags.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ProductFeatures {
    #[serde(default, alias = "isPurchased")]
    pub is_purchased: i64,
    #[serde(default, alias = "isTrendy")]
    pub is_trendy: i64,
    #[serde(default, alias = "isFomo")]
    pub is_fomo: i64,
    #[serde(default, alias = "fomoMsg")]
    pub fomo_msg: String,
    #[serde(default, alias = "isProductPerformance")]
    pub is_product_performance: i64,
    #[serde(default, alias = "productPerformanceMsg")]
    pub product_performance_msg: String,
}

impl ProductFeatures {
    /// Urgency message, if the product is flagged for one.
    pub fn fomo_message(&self) -> Option<&str> {
        (self.is_fomo != 0 && !self.fomo_msg.is_empty()).then_some(self.fomo_msg.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stock_status_passthrough() {
        assert_eq!(StockStatus::from("IN_STOCK".to_string()), StockStatus::InStock);
        assert_eq!(
            StockStatus::from("OUT_OF_STOCK".to_string()),
            StockStatus::OutOfStock
        );

        let preorder = StockStatus::from("PRE_ORDER".to_string());
        assert_eq!(preorder, StockStatus::Other("PRE_ORDER".to_string()));
        assert_eq!(preorder.as_str(), "PRE_ORDER");
        assert!(!preorder.is_in_stock());
    }

    #[test]
    fn test_stock_status_serializes_as_wire_string() {
        let json = serde_json::to_string(&StockStatus::OutOfStock).unwrap();
        assert_eq!(json, "\"OUT_OF_STOCK\"");
    }

    #[test]
    fn test_fomo_message() {
        let mut features = ProductFeatures::default();
        assert_eq!(features.fomo_message(), None);

        features.is_fomo = 1;
        features.fomo_msg = "Only 2 left".to_string();
        assert_eq!(features.fomo_message(), Some("Only 2 left"));
    }
}
