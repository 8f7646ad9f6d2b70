//! Live carousel run.

use std::time::Duration;

use anyhow::{Context as _, Result};
use chrono::Local;
use serde::Serialize;
use tokio::time::{interval, sleep, MissedTickBehavior};
use turbo_pdp::{spawn_screen, Intent};

use super::CarouselArgs;
use crate::context::Context;

/// One observed page change.
#[derive(Debug, Serialize)]
struct PageChange {
    at: String,
    page: usize,
    page_count: usize,
    image: Option<String>,
}

/// Run the carousel command.
pub async fn run(args: CarouselArgs, ctx: &Context) -> Result<()> {
    let path = ctx.catalog_path(args.path.as_deref())?;
    let bytes = tokio::fs::read(&path)
        .await
        .with_context(|| format!("Failed to read {}", path.display()))?;

    let mut engine = ctx.config.engine.clone();
    if let Some(ms) = args.interval_ms {
        engine.carousel_interval_ms = ms;
    }
    let period = engine.carousel_interval();

    let screen = spawn_screen(engine, ctx.logger())?;
    let mut updates = screen.subscribe();
    screen
        .load_catalog(bytes)
        .await
        .with_context(|| format!("Failed to load {}", path.display()))?;
    if let Some(value_index) = args.color {
        screen.apply(Intent::SelectColor(value_index)).await?;
    }

    let first = updates.borrow_and_update().clone();
    if first.images.is_empty() {
        ctx.output.warn("Product has no images; nothing to rotate");
        screen.dispose().await?;
        return Ok(());
    }

    ctx.output.info(&format!(
        "{} image(s), advancing every {}ms for {}s (screen {})",
        first.images.len(),
        period.as_millis(),
        args.seconds,
        screen.screen_id()
    ));

    let progress = ctx.output.progress(args.seconds, "running");
    let mut seconds = interval(Duration::from_secs(1));
    seconds.set_missed_tick_behavior(MissedTickBehavior::Skip);
    seconds.tick().await;

    let deadline = sleep(Duration::from_secs(args.seconds));
    tokio::pin!(deadline);

    let mut changes = Vec::new();
    let mut last_page = None;
    loop {
        tokio::select! {
            _ = &mut deadline => break,
            _ = seconds.tick() => progress.inc(1),
            changed = updates.changed() => {
                if changed.is_err() {
                    break;
                }
                let snapshot = updates.borrow_and_update().clone();
                let page = snapshot.carousel.current_page;
                if last_page == Some(page) {
                    continue;
                }
                last_page = Some(page);

                let change = PageChange {
                    at: Local::now().format("%H:%M:%S%.3f").to_string(),
                    page,
                    page_count: snapshot.carousel.page_count,
                    image: snapshot.current_image().map(str::to_string),
                };
                if !ctx.output.is_json() {
                    progress.println(format!(
                        "  {} page {}/{} {}",
                        change.at,
                        change.page + 1,
                        change.page_count,
                        change.image.as_deref().unwrap_or("")
                    ));
                }
                changes.push(change);
            }
        }
    }

    progress.finish_and_clear();
    screen.dispose().await?;

    if ctx.output.is_json() {
        ctx.output.json(&changes);
    } else {
        ctx.output
            .success(&format!("Observed {} page change(s)", changes.len()));
    }

    Ok(())
}
