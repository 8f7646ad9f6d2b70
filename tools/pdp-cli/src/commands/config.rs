//! Configuration management commands.

use std::fs;

use anyhow::{bail, Result};
use dialoguer::Confirm;

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CatalogConfig, PdpConfig};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Init {
            catalog,
            format,
            force,
        } => init_config(&catalog, &format, force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Current Configuration");

    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    match &ctx.config_file {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }

    ctx.output.info("");
    ctx.output.info("[catalog]");
    ctx.output.kv(
        "path",
        ctx.config.catalog.path.as_deref().unwrap_or("(unset)"),
    );

    let engine = &ctx.config.engine;
    ctx.output.info("");
    ctx.output.info("[engine]");
    ctx.output
        .kv("carousel_interval_ms", &engine.carousel_interval_ms.to_string());
    ctx.output.kv(
        "tabs",
        &engine
            .tabs
            .tabs()
            .iter()
            .map(|t| t.title())
            .collect::<Vec<_>>()
            .join(", "),
    );
    ctx.output
        .kv("spec_rows", &engine.content.spec_rows.len().to_string());
    ctx.output
        .kv("reviews", &engine.content.reviews.len().to_string());

    ctx.output.info("");
    ctx.output.info("[logging]");
    ctx.output.kv("level", &ctx.config.logging.level);
    ctx.output.kv("format", &ctx.config.logging.format);

    Ok(())
}

async fn init_config(catalog: &str, format: &str, force: bool, ctx: &Context) -> Result<()> {
    let file_name = match format {
        "toml" => "pdp.toml",
        "json" => "pdp.json",
        other => bail!("Unknown config format '{}'. Use toml or json.", other),
    };
    let config_path = ctx.cwd.join(file_name);

    if config_path.exists() && !force {
        if ctx.output.is_json() {
            bail!(
                "Config file already exists: {}. Use --force to overwrite.",
                config_path.display()
            );
        }
        let overwrite = Confirm::new()
            .with_prompt(format!("{} exists. Overwrite?", config_path.display()))
            .default(false)
            .interact()?;
        if !overwrite {
            ctx.output.warn("Left existing config untouched");
            return Ok(());
        }
    }

    if format == "json" {
        let config = PdpConfig {
            catalog: CatalogConfig {
                path: Some(catalog.to_string()),
            },
            ..PdpConfig::default()
        };
        config.save(&config_path.to_string_lossy())?;
    } else {
        fs::write(&config_path, generate_default_config(catalog))?;
    }

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let (errors, warnings) = ctx.config.check();

    if errors.is_empty() && warnings.is_empty() {
        ctx.output.success("Configuration is valid");
        return Ok(());
    }

    for error in &errors {
        ctx.output.error(&format!("Error: {}", error));
    }

    for warning in &warnings {
        ctx.output.warn(&format!("Warning: {}", warning));
    }

    if !errors.is_empty() {
        bail!("Configuration has {} error(s)", errors.len());
    }

    ctx.output.success("Configuration is valid (with warnings)");

    Ok(())
}
