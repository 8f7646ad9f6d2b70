//! Price range types.

use serde::{Deserialize, Serialize};

/// A monetary amount as exported by the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Price {
    pub currency: String,
    pub value: f64,
}

impl Price {
    pub fn new(currency: impl Into<String>, value: f64) -> Self {
        Self {
            currency: currency.into(),
            value,
        }
    }

    /// Format price with currency.
    pub fn display(&self) -> String {
        match self.currency.as_str() {
            "USD" => format!("${:.2}", self.value),
            _ => format!("{:.2} {}", self.value, self.currency),
        }
    }
}

/// Discount applied to a price.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Discount {
    #[serde(default, alias = "amountOff")]
    pub amount_off: f64,
    #[serde(default, alias = "percentOff")]
    pub percent_off: f64,
}

/// Regular/final price pair for one end of the range.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceDetail {
    #[serde(alias = "regularPrice")]
    pub regular_price: Price,
    #[serde(default, alias = "regularPriceBase")]
    pub regular_price_base: Option<Price>,
    #[serde(alias = "finalPrice")]
    pub final_price: Price,
    #[serde(default, alias = "finalPriceBase")]
    pub final_price_base: Option<Price>,
    #[serde(default)]
    pub discount: Discount,
    #[serde(default, alias = "discountBase")]
    pub discount_base: Option<Discount>,
}

impl PriceDetail {
    /// Check if the final price is below the regular price.
    pub fn is_on_sale(&self) -> bool {
        self.final_price.value < self.regular_price.value
    }
}

/// Minimum and maximum prices across a product's variants.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PriceRange {
    #[serde(alias = "maximumPrice")]
    pub maximum_price: PriceDetail,
    #[serde(alias = "minimumPrice")]
    pub minimum_price: PriceDetail,
}

impl PriceRange {
    /// Price shown on the page: the final minimum price.
    pub fn display_price(&self) -> &Price {
        &self.minimum_price.final_price
    }
}
