//! Render the page view state.

use anyhow::{Context as _, Result};
use turbo_catalog::FileSource;
use turbo_pdp::{ManualTimer, ProductPage, TabContent, TabSet, Tint, ViewSnapshot};

use super::ShowArgs;
use crate::context::Context;
use crate::output::{stock_badge, tint_marker};

/// Run the show command.
pub async fn run(args: ShowArgs, ctx: &Context) -> Result<()> {
    let path = ctx.catalog_path(args.path.as_deref())?;

    let mut engine = ctx.config.engine.clone();
    if args.extended {
        engine.tabs = TabSet::Extended;
    }
    let tabs = engine.tabs;

    let mut page = ProductPage::new(engine, ManualTimer::new()).with_logger(ctx.logger());
    page.load_from(&FileSource::new(path.clone()))
        .with_context(|| format!("Failed to load {}", path.display()))?;

    if let Some(value_index) = args.color {
        if page.select_color(value_index).is_none() {
            ctx.output
                .debug(&format!("No variant for color {value_index}; showing base product"));
        }
    }
    if let Some(position) = args.color_at {
        page.select_color_at(position);
    }
    page.select_tab(args.tab);
    if let Some(index) = args.page {
        page.select_page(index);
    }
    for _ in 0..args.ticks {
        if let Some(token) = page.carousel().timer().fire() {
            page.handle_tick(token);
        }
    }

    let snapshot = page.snapshot();
    page.dispose();

    if ctx.output.is_json() {
        ctx.output.json(&snapshot);
        return Ok(());
    }

    render(&snapshot, tabs, ctx);
    Ok(())
}

fn render(snapshot: &ViewSnapshot, tabs: TabSet, ctx: &Context) {
    let Some(header) = &snapshot.header else {
        ctx.output.warn("No product data");
        return;
    };

    ctx.output.header(&header.name);
    ctx.output.kv("sku", &header.sku);
    ctx.output
        .kv("stock", &stock_badge(&header.stock_status, header.in_stock));
    ctx.output.kv("price", &header.price);
    ctx.output.kv("shipping", &header.shipping_period);
    if let Some(message) = &snapshot.fomo_message {
        ctx.output.kv("note", message);
    }

    ctx.output.header(&format!(
        "Images ({}/{})",
        snapshot.carousel.current_page + usize::from(!snapshot.images.is_empty()),
        snapshot.images.len()
    ));
    for (i, url) in snapshot.images.iter().enumerate() {
        let marker = if i == snapshot.carousel.current_page { "▶" } else { " " };
        ctx.output.list_item(&format!("{marker} {url}"));
    }

    if !snapshot.color_options.is_empty() {
        ctx.output
            .header(snapshot.color_label.as_deref().unwrap_or("Colors"));
        for swatch in &snapshot.color_options {
            let marker = if swatch.selected { "●" } else { "○" };
            ctx.output.list_item(&format!(
                "{marker} {} [{}] {}",
                swatch.label, swatch.value_index, swatch.hex
            ));
        }
    }

    let title = tabs
        .resolve(snapshot.tab.selected_index())
        .map(|tab| tab.title())
        .unwrap_or("Unavailable tab");
    ctx.output.header(title);
    match &snapshot.tab_content {
        TabContent::Description(blocks) => {
            for block in blocks {
                ctx.output.tinted_row(block.tint, &block.text);
            }
        }
        TabContent::Specs(rows) => {
            for row in rows {
                ctx.output
                    .tinted_row(row.tint, &format!("{}: {}", row.title, row.value));
            }
        }
        TabContent::Reviews(rows) => {
            for row in rows {
                ctx.output.tinted_row(row.tint, &row.text);
            }
        }
        TabContent::Attributes(rows) => {
            for row in rows {
                ctx.output
                    .tinted_row(row.tint, &format!("{}: {}", row.label, row.value));
            }
        }
        TabContent::Empty => ctx.output.info("Nothing to show"),
    }

    ctx.output.debug(&format!(
        "tab={} reviews_panel_visible={} legend: {} highlight {} plain",
        snapshot.tab.selected_index(),
        snapshot.tab.reviews_panel_visible(),
        tint_marker(Tint::Highlight),
        tint_marker(Tint::Plain),
    ));
}
