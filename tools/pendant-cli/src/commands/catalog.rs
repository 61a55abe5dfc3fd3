//! Show the active pricing catalog.

use anyhow::{bail, Result};
use pendant_builder::money::Money;
use pendant_builder::options::PendantKind;

use super::CatalogArgs;
use crate::context::Context;

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = ctx.catalog()?;
    let currency = ctx.config.builder.pricing.currency;
    let units = |amount: i64| Money::from_units(amount, currency).display_compact();

    let kinds: Vec<&PendantKind> = match args.kind.as_deref() {
        Some(token) => {
            let kind = PendantKind::parse(token);
            match catalog.kinds().find(|k| **k == kind) {
                Some(found) => vec![found],
                None => bail!("No prices for pendant kind '{}'", token),
            }
        }
        None => catalog.kinds().collect(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&catalog);
        return Ok(());
    }

    for kind in kinds {
        ctx.output.header(&kind.display_name());
        ctx.output.table_row(&["MATERIAL", "BASE", "EXTRA COLOR"], &[26, 8, 11]);
        for material in catalog.pendant_materials(kind) {
            if let Some(price) = catalog.pendant_price(kind, material) {
                let extra = if price.extra_color > 0 {
                    units(price.extra_color)
                } else {
                    "-".to_string()
                };
                let name = material.display_name();
                let base = units(price.base);
                ctx.output
                    .table_row(&[name.as_str(), base.as_str(), extra.as_str()], &[26, 8, 11]);
            }
        }
    }

    if args.kind.is_none() {
        ctx.output.header("Chains");
        for material in catalog.chain_materials() {
            let prices: Vec<String> = catalog
                .chain_sizes(material)
                .into_iter()
                .filter_map(|size| {
                    catalog
                        .chain_price(material, size)
                        .map(|p| format!("{} {}", size.display_name(), units(p)))
                })
                .collect();
            ctx.output.kv(&material.display_name(), &prices.join(", "));
        }
    }

    let rules = &ctx.config.builder.pricing;
    ctx.output.info("");
    ctx.output.kv("Included colors", &rules.included_colors.to_string());
    ctx.output.kv("Diamond", &units(rules.diamond_rate));

    Ok(())
}
