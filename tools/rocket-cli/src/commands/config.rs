//! Config command.

use anyhow::{bail, Context as _, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig};
use crate::context::{Context, CONFIG_NAMES};

pub fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show(ctx),
        ConfigCommand::Init { force } => init(force, ctx),
        ConfigCommand::Validate => validate(ctx),
    }
}

fn show(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("File", &path.display().to_string()),
        None => ctx.output.kv("File", "(defaults)"),
    }
    ctx.output.kv("API", &ctx.config.api.base_url);
    match ctx.config.api.timeout_secs {
        Some(secs) => ctx.output.kv("Timeout", &format!("{}s", secs)),
        None => ctx.output.kv("Timeout", "none"),
    }
    ctx.output.kv(
        "Storage",
        &ctx.resolve_path(&ctx.config.storage.dir).display().to_string(),
    );
    ctx.output.kv("Cart key", &ctx.config.storage.key);
    Ok(())
}

fn init(force: bool, ctx: &Context) -> Result<()> {
    let path = ctx.cwd.join(CONFIG_NAMES[0]);
    if path.exists() && !force {
        bail!(
            "{} already exists. Use --force to overwrite.",
            path.display()
        );
    }

    std::fs::write(&path, generate_default_config())
        .with_context(|| format!("Failed to write {}", path.display()))?;
    ctx.output
        .success(&format!("Created {}", path.display()));
    Ok(())
}

fn validate(ctx: &Context) -> Result<()> {
    let Some(path) = &ctx.config_path else {
        bail!("No config file found. Run `rocket config init` to create one.");
    };
    let path_str = path.to_str().context("Config path is not valid UTF-8")?;
    let config = CliConfig::load(path_str)?;

    if !config.api.base_url.starts_with("http://") && !config.api.base_url.starts_with("https://") {
        bail!("api.base_url must be an http(s) URL: {}", config.api.base_url);
    }
    if config.storage.key.trim().is_empty() {
        bail!("storage.key must not be empty");
    }
    if config.api.timeout_secs == Some(0) {
        bail!("api.timeout_secs must be greater than zero");
    }

    ctx.output
        .success(&format!("{} is valid", path.display()));
    Ok(())
}
