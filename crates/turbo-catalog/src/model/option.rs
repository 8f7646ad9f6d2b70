//! Configurable options and variants.

use serde::{Deserialize, Serialize};

use super::null_as_empty;
use super::price::PriceRange;
use super::product::{MediaImage, StockStatus};
use crate::swatch::Swatch;

/// Attribute code that marks the colour axis.
pub const COLOR_CODE: &str = "color";

/// Check whether an attribute code names the colour axis.
pub fn is_color_code(code: &str) -> bool {
    code.eq_ignore_ascii_case(COLOR_CODE)
}

/// A named axis of variation (e.g. colour) with its selectable values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ConfigurableOption {
    #[serde(default)]
    pub id: i64,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub position: i64,
    #[serde(rename = "attribute_code", alias = "attributeCode")]
    pub code: String,
    pub values: Vec<OptionValue>,
    #[serde(default, alias = "productId")]
    pub product_id: Option<i64>,
}

impl ConfigurableOption {
    /// Check if this option drives colour selection.
    pub fn is_color(&self) -> bool {
        is_color_code(&self.code)
    }

    /// Find a value by its cross-reference index.
    pub fn value(&self, index: i64) -> Option<&OptionValue> {
        self.values.iter().find(|v| v.index == index)
    }
}

/// One selectable value of a configurable option.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OptionValue {
    /// Identity used to cross-reference variants.
    #[serde(rename = "value_index", alias = "valueIndex")]
    pub index: i64,
    pub label: String,
    #[serde(rename = "swatch_data", alias = "swatchData")]
    pub swatch: Swatch,
}

/// A concrete product instantiation tied to option values.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VariantRecord {
    pub product: VariantProduct,
    pub attributes: Vec<VariantAttribute>,
}

impl VariantRecord {
    /// Check if any attribute selects the given colour value.
    pub fn has_color(&self, value_index: i64) -> bool {
        self.attributes
            .iter()
            .any(|a| is_color_code(&a.code) && a.index == value_index)
    }

    /// The variant's colour value index, if it declares one.
    pub fn color_index(&self) -> Option<i64> {
        self.attributes
            .iter()
            .find(|a| is_color_code(&a.code))
            .map(|a| a.index)
    }
}

/// ProductRecord-shaped payload carried by a variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VariantProduct {
    pub id: i64,
    pub name: String,
    pub sku: String,
    #[serde(rename = "stock_status", alias = "stockStatus")]
    pub stock_status: StockStatus,
    #[serde(rename = "price_range", alias = "priceRange")]
    pub price_range: PriceRange,
    /// Variant-specific gallery. Absent or null means "use the base gallery".
    #[serde(
        default,
        rename = "media_gallery",
        alias = "mediaGallery",
        deserialize_with = "null_as_empty"
    )]
    pub media_gallery: Vec<MediaImage>,
    #[serde(default, alias = "salableQty")]
    pub salable_qty: Option<i64>,
    #[serde(default)]
    pub approval: Option<i64>,
    #[serde(default)]
    pub weight: Option<f64>,
}

impl VariantProduct {
    /// Gallery image URLs in display order.
    pub fn image_urls(&self) -> Vec<String> {
        self.media_gallery.iter().map(|m| m.url.clone()).collect()
    }
}

/// Option value a variant is bound to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VariantAttribute {
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub label: String,
    pub code: String,
    #[serde(rename = "value_index", alias = "valueIndex")]
    pub index: i64,
}

impl VariantAttribute {
    pub fn new(code: impl Into<String>, index: i64) -> Self {
        Self {
            uid: String::new(),
            label: String::new(),
            code: code.into(),
            index,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_color_code_is_case_insensitive() {
        assert!(is_color_code("color"));
        assert!(is_color_code("Color"));
        assert!(is_color_code("COLOR"));
        assert!(!is_color_code("colour"));
        assert!(!is_color_code("size"));
    }

    #[test]
    fn test_variant_attribute_aliases() {
        let snake: VariantAttribute =
            serde_json::from_str(r#"{"code":"color","value_index":7}"#).unwrap();
        let camel: VariantAttribute =
            serde_json::from_str(r#"{"code":"color","valueIndex":7}"#).unwrap();
        assert_eq!(snake, camel);
        assert_eq!(snake.index, 7);
    }

    #[test]
    fn test_variant_color_lookup() {
        let attrs = vec![VariantAttribute::new("size", 3), VariantAttribute::new("Color", 9)];
        let variant_json = serde_json::json!({
            "product": {
                "id": 1, "name": "n", "sku": "s", "stock_status": "IN_STOCK",
                "price_range": {
                    "maximum_price": {
                        "regular_price": {"currency": "SAR", "value": 1.0},
                        "final_price": {"currency": "SAR", "value": 1.0}
                    },
                    "minimum_price": {
                        "regular_price": {"currency": "SAR", "value": 1.0},
                        "final_price": {"currency": "SAR", "value": 1.0}
                    }
                },
                "media_gallery": null
            },
            "attributes": attrs
        });
        let variant: VariantRecord = serde_json::from_value(variant_json).unwrap();

        assert!(variant.product.media_gallery.is_empty());
        assert!(variant.has_color(9));
        assert!(!variant.has_color(3));
        assert_eq!(variant.color_index(), Some(9));
    }
}
