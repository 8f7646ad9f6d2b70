//! Variant resolution for color selections.

use turbo_catalog::{ConfigurableOption, ProductRecord, VariantRecord};

/// The product's color option, if it has one.
///
/// Matching on the option code is case-insensitive.
pub fn color_option(product: &ProductRecord) -> Option<&ConfigurableOption> {
    product.configurable_options.iter().find(|o| o.is_color())
}

/// Position of the first variant carrying `value_index` for the color option.
///
/// Variants are scanned in document order and the first hit wins, even when
/// later variants also match.
pub fn resolve_variant_position(product: &ProductRecord, value_index: i64) -> Option<usize> {
    product
        .variants
        .iter()
        .position(|variant| variant.has_color(value_index))
}

/// First variant carrying `value_index` for the color option.
pub fn resolve_variant(product: &ProductRecord, value_index: i64) -> Option<&VariantRecord> {
    resolve_variant_position(product, value_index).map(|position| &product.variants[position])
}
