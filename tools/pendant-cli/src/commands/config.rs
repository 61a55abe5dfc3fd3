//! Configuration management commands.

use std::fs;
use std::path::PathBuf;

use anyhow::{bail, Result};
use pendant_builder::money::Currency;
use pendant_builder::options::{ChainSize, PendantKind};

use super::{ConfigArgs, ConfigCommand};
use crate::config::{generate_default_config, CliConfig, CONFIG_NAMES};
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx).await,
        ConfigCommand::Get { key } => get_config(&key, ctx).await,
        ConfigCommand::Set { key, value } => set_config(&key, &value, ctx).await,
        ConfigCommand::Init { force } => init_config(force, ctx).await,
        ConfigCommand::Validate => validate_config(ctx).await,
    }
}

async fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match ctx.config_path {
        Some(ref path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(defaults)"),
    }
    ctx.output.kv(
        "catalog",
        ctx.config.builder.catalog.as_deref().unwrap_or("(built-in)"),
    );

    let pricing = &ctx.config.builder.pricing;
    ctx.output.info("");
    ctx.output.info("[pricing]");
    ctx.output.kv("currency", pricing.currency.code());
    ctx.output.kv("included_colors", &pricing.included_colors.to_string());
    ctx.output.kv("diamond_rate", &pricing.diamond_rate.to_string());
    ctx.output.kv("default_chain_size", pricing.default_chain_size.as_str());

    let checkout = &ctx.config.builder.checkout;
    ctx.output.info("");
    ctx.output.info("[checkout]");
    ctx.output.kv("quantity", &checkout.quantity.to_string());
    ctx.output.kv("success_url", &checkout.success_url);
    ctx.output.kv("cancel_url", &checkout.cancel_url);

    if !checkout.images.is_empty() {
        ctx.output.info("");
        ctx.output.info("[checkout.images]");
        for (kind, url) in &checkout.images {
            ctx.output.kv(kind.as_str(), url);
        }
    }

    ctx.output.info("");
    ctx.output.info("[replay]");
    ctx.output.kv("output_dir", &ctx.config.replay.output_dir);

    Ok(())
}

async fn get_config(key: &str, ctx: &Context) -> Result<()> {
    let value = get_config_value(&ctx.config, key)?;

    if ctx.output.is_json() {
        ctx.output
            .json(&serde_json::json!({ "key": key, "value": value }));
    } else {
        println!("{}", value);
    }

    Ok(())
}

async fn set_config(key: &str, value: &str, ctx: &Context) -> Result<()> {
    let config_path = match ctx.config_path {
        Some(ref path) => path.to_string_lossy().to_string(),
        None => find_config_file(&ctx.cwd)?,
    };

    let mut config = CliConfig::load(&config_path)?;
    set_config_value(&mut config, key, value)?;
    config.builder.validate()?;
    config.save(&config_path)?;

    ctx.output.success(&format!("Set {} = {}", key, value));

    Ok(())
}

async fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, generate_default_config())?;

    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}

async fn validate_config(ctx: &Context) -> Result<()> {
    ctx.output.header("Validating configuration");

    let mut errors: Vec<String> = Vec::new();
    let mut warnings: Vec<String> = Vec::new();

    if let Err(e) = ctx.config.builder.validate() {
        errors.push(e.to_string());
    }

    match ctx.catalog() {
        Ok(catalog) => {
            for kind in PendantKind::ALL {
                if catalog.pendant_materials(&kind).is_empty() {
                    warnings.push(format!("catalog has no prices for {}", kind));
                }
            }
            let default_size = &ctx.config.builder.pricing.default_chain_size;
            if catalog
                .chain_materials()
                .all(|m| catalog.chain_price(m, default_size).is_none())
            {
                warnings.push(format!(
                    "no chain is priced at the default length {}",
                    default_size.display_name()
                ));
            }
        }
        Err(e) => errors.push(format!("{:#}", e)),
    }

    let checkout = &ctx.config.builder.checkout;
    for (name, url) in [
        ("checkout.success_url", &checkout.success_url),
        ("checkout.cancel_url", &checkout.cancel_url),
    ] {
        if !url.starts_with("https://") {
            warnings.push(format!("{} should be an https URL", name));
        }
    }
    for kind in PendantKind::ALL {
        if checkout.image_for(&kind).is_none() {
            warnings.push(format!("checkout.images has no image for {}", kind));
        }
    }

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

fn get_config_value(config: &CliConfig, key: &str) -> Result<String> {
    let parts: Vec<&str> = key.split('.').collect();
    let pricing = &config.builder.pricing;
    let checkout = &config.builder.checkout;

    match parts.as_slice() {
        ["catalog"] => Ok(config
            .builder
            .catalog
            .as_ref()
            .map(|c| format!("\"{}\"", c))
            .unwrap_or_else(|| "null".to_string())),
        ["pricing", "currency"] => Ok(format!("\"{}\"", pricing.currency.code())),
        ["pricing", "included_colors"] => Ok(pricing.included_colors.to_string()),
        ["pricing", "diamond_rate"] => Ok(pricing.diamond_rate.to_string()),
        ["pricing", "default_chain_size"] => Ok(format!("\"{}\"", pricing.default_chain_size)),
        ["checkout", "quantity"] => Ok(checkout.quantity.to_string()),
        ["checkout", "success_url"] => Ok(format!("\"{}\"", checkout.success_url)),
        ["checkout", "cancel_url"] => Ok(format!("\"{}\"", checkout.cancel_url)),
        ["checkout", "images", kind] => Ok(checkout
            .image_for(&PendantKind::parse(kind))
            .map(|url| format!("\"{}\"", url))
            .unwrap_or_else(|| "null".to_string())),
        ["replay", "output_dir"] => Ok(format!("\"{}\"", config.replay.output_dir)),
        _ => bail!("Unknown config key: {}", key),
    }
}

fn set_config_value(config: &mut CliConfig, key: &str, value: &str) -> Result<()> {
    let parts: Vec<&str> = key.split('.').collect();
    let builder = &mut config.builder;

    match parts.as_slice() {
        ["catalog"] => builder.catalog = Some(value.to_string()),
        ["pricing", "currency"] => {
            builder.pricing.currency = match Currency::from_code(value) {
                Some(currency) => currency,
                None => bail!("Unsupported currency: {}", value),
            }
        }
        ["pricing", "included_colors"] => builder.pricing.included_colors = value.parse()?,
        ["pricing", "diamond_rate"] => builder.pricing.diamond_rate = value.parse()?,
        ["pricing", "default_chain_size"] => {
            builder.pricing.default_chain_size = ChainSize::parse(value)
        }
        ["checkout", "quantity"] => builder.checkout.quantity = value.parse()?,
        ["checkout", "success_url"] => builder.checkout.success_url = value.to_string(),
        ["checkout", "cancel_url"] => builder.checkout.cancel_url = value.to_string(),
        ["checkout", "images", kind] => {
            builder
                .checkout
                .images
                .insert(PendantKind::parse(kind), value.to_string());
        }
        ["replay", "output_dir"] => config.replay.output_dir = value.to_string(),
        _ => bail!("Unknown or read-only config key: {}", key),
    }

    Ok(())
}

fn find_config_file(cwd: &std::path::Path) -> Result<String> {
    for name in &CONFIG_NAMES {
        let path: PathBuf = cwd.join(name);
        if path.exists() {
            return Ok(path.to_string_lossy().to_string());
        }
    }
    bail!("No config file found. Run `pendant config init` to create one.")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_config_values() {
        let config = CliConfig::default();
        assert_eq!(get_config_value(&config, "pricing.diamond_rate").unwrap(), "25");
        assert_eq!(
            get_config_value(&config, "pricing.default_chain_size").unwrap(),
            "\"16\""
        );
        assert_eq!(get_config_value(&config, "catalog").unwrap(), "null");
        assert!(get_config_value(&config, "checkout.images.3d_enamel")
            .unwrap()
            .ends_with("_1.avif\""));
        assert!(get_config_value(&config, "pricing.tax").is_err());
    }

    #[test]
    fn test_set_config_values() {
        let mut config = CliConfig::default();
        set_config_value(&mut config, "pricing.currency", "eur").unwrap();
        set_config_value(&mut config, "pricing.default_chain_size", "20").unwrap();
        set_config_value(&mut config, "checkout.quantity", "3").unwrap();
        set_config_value(&mut config, "catalog", "prices.toml").unwrap();

        assert_eq!(config.builder.pricing.currency, Currency::EUR);
        assert_eq!(config.builder.pricing.default_chain_size, ChainSize::In20);
        assert_eq!(config.builder.checkout.quantity, 3);
        assert_eq!(config.builder.catalog.as_deref(), Some("prices.toml"));

        assert!(set_config_value(&mut config, "pricing.currency", "XYZ").is_err());
        assert!(set_config_value(&mut config, "checkout.quantity", "many").is_err());
        assert!(set_config_value(&mut config, "workload.name", "x").is_err());
    }
}
