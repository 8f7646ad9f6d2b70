//! Catalog validation command.

use std::time::Instant;

use anyhow::{Context as _, Result};
use serde::Serialize;
use turbo_catalog::{load, FileSource, ProductRecord};
use turbo_pdp::{color_option, format_description};

use super::ValidateArgs;
use crate::context::Context;

/// Summary of one product in the catalog.
#[derive(Debug, Serialize)]
struct ProductSummary {
    id: i64,
    sku: String,
    name: String,
    stock_status: String,
    images: usize,
    colors: Vec<String>,
    variants: usize,
    variants_without_gallery: usize,
    description_rows: usize,
    attributes: usize,
}

impl ProductSummary {
    fn from_product(product: &ProductRecord) -> Self {
        Self {
            id: product.id,
            sku: product.sku.clone(),
            name: product.name.clone(),
            stock_status: product.stock_status.to_string(),
            images: product.media_gallery.len(),
            colors: color_option(product)
                .map(|o| o.values.iter().map(|v| v.label.clone()).collect())
                .unwrap_or_default(),
            variants: product.variants.len(),
            variants_without_gallery: product
                .variants
                .iter()
                .filter(|v| v.product.media_gallery.is_empty())
                .count(),
            description_rows: format_description(&product.description.html).len(),
            attributes: product.attributes.len(),
        }
    }
}

#[derive(Debug, Serialize)]
struct ValidationReport {
    path: String,
    products: usize,
    parse_ms: u128,
    summaries: Vec<ProductSummary>,
}

/// Run the validate command.
pub async fn run(args: ValidateArgs, ctx: &Context) -> Result<()> {
    let path = ctx.catalog_path(args.path.as_deref())?;
    ctx.output.debug(&format!("Reading {}", path.display()));

    let spinner = ctx.output.spinner("Parsing catalog...");
    let started = Instant::now();
    let loaded = load(&FileSource::new(path.clone()));
    let parse_ms = started.elapsed().as_millis();
    spinner.finish_and_clear();

    let document =
        loaded.with_context(|| format!("Catalog {} is not usable", path.display()))?;

    let take = if args.all { document.products().len() } else { 1 };
    let report = ValidationReport {
        path: path.display().to_string(),
        products: document.products().len(),
        parse_ms,
        summaries: document
            .products()
            .iter()
            .take(take)
            .map(ProductSummary::from_product)
            .collect(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&report);
        return Ok(());
    }

    ctx.output.success(&format!(
        "{} parsed: {} product(s) in {}ms",
        path.display(),
        report.products,
        report.parse_ms
    ));

    if report.summaries.is_empty() {
        ctx.output.warn("Catalog has no products; the page would show no data");
        return Ok(());
    }

    for summary in &report.summaries {
        ctx.output.header(&format!("{} ({})", summary.name, summary.sku));
        ctx.output.kv("id", &summary.id.to_string());
        ctx.output.kv("stock", &summary.stock_status);
        ctx.output.kv("images", &summary.images.to_string());
        ctx.output.kv("colors", &summary.colors.join(", "));
        ctx.output.kv(
            "variants",
            &format!(
                "{} ({} use the base gallery)",
                summary.variants, summary.variants_without_gallery
            ),
        );
        ctx.output
            .kv("description rows", &summary.description_rows.to_string());
        ctx.output.kv("attributes", &summary.attributes.to_string());

        if summary.images == 0 {
            ctx.output.warn("No gallery images; the carousel will stay idle");
        }
    }

    Ok(())
}
