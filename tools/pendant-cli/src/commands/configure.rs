//! Interactive builder.

use std::fs;

use anyhow::{Context as _, Result};
use dialoguer::{Confirm, Input, Select};
use pendant_builder::money::Money;
use pendant_builder::options::{ChainSize, ChainType, Field, Material, PendantKind};
use pendant_builder::pricing::color_pricing_label;
use pendant_builder::selection::Change;
use pendant_builder::submit::Outbox;
use pendant_builder::wizard::{BuilderSession, Step};
use pendant_builder::BuilderError;

use super::ConfigureArgs;
use crate::context::Context;
use crate::output::total_badge;

const BACK: &str = "← Back";

/// What to do after a step's prompts.
enum Nav {
    Next,
    Back,
    Stay,
    Submit,
    Cancel,
}

/// Run the configure command.
pub async fn run(args: ConfigureArgs, ctx: &Context) -> Result<()> {
    let mut session = ctx.session()?;
    let total_steps = Step::LAST.number() as usize;

    ctx.output.header("Pendant builder");

    loop {
        let step = session.step();
        ctx.output.info("");
        ctx.output
            .step(step.number() as usize, total_steps, step.display_name());

        let nav = match step {
            Step::PendantType => {
                let options = kind_options(&session);
                choose(&mut session, Field::PendantType, options)?
            }
            Step::PendantMaterial => {
                let options = material_options(&session, ctx);
                choose(&mut session, Field::PendantMaterial, options)?
            }
            Step::ChainType => {
                let options = vec![
                    ("Cross engraved chain".to_string(), ChainType::Present.to_string()),
                    ("No chain".to_string(), ChainType::None.to_string()),
                ];
                choose(&mut session, Field::ChainType, options)?
            }
            Step::ChainSize => {
                let options = size_options(&session, ctx);
                choose(&mut session, Field::ChainSize, options)?
            }
            Step::ChainMaterial => {
                let options = chain_material_options(&session, ctx);
                choose(&mut session, Field::ChainMaterial, options)?
            }
            Step::AddOns => add_ons(&mut session, ctx)?,
            Step::Summary => review(&mut session, ctx)?,
        };

        match nav {
            Nav::Next => match session.next() {
                Ok(_) => ctx.output.kv("Running total", &total_badge(session.price().total)),
                Err(e @ BuilderError::IncompleteSelection { .. }) => ctx.output.warn(&e.to_string()),
                Err(e) => return Err(e.into()),
            },
            Nav::Back => {
                session.previous()?;
            }
            Nav::Stay => {}
            Nav::Submit => break,
            Nav::Cancel => {
                ctx.output.warn("Order cancelled");
                return Ok(());
            }
        }
    }

    let mut outbox = Outbox::new();
    let payload = session.submit(&mut outbox)?;

    match args.output {
        Some(ref output) => {
            let path = ctx.resolve_path(output);
            fs::write(&path, serde_json::to_string_pretty(&payload)?)
                .with_context(|| format!("Failed to write order: {}", path.display()))?;
            ctx.output.success(&format!("Order written to {}", path.display()));
        }
        None => {
            ctx.output.success("Order submitted");
            ctx.output.json(&payload);
        }
    }

    Ok(())
}

/// Prompt for one of `options` (label, token) and apply the choice.
fn choose(
    session: &mut BuilderSession,
    field: Field,
    options: Vec<(String, String)>,
) -> Result<Nav> {
    let current = current_token(session, field);
    let mut items: Vec<&str> = options.iter().map(|(label, _)| label.as_str()).collect();
    if session.step() != Step::FIRST {
        items.push(BACK);
    }

    let default = current
        .and_then(|token| options.iter().position(|(_, t)| *t == token))
        .unwrap_or(0);

    let picked = Select::new()
        .with_prompt(format!("Select a {}", field.display_name()))
        .items(&items)
        .default(default)
        .interact()?;

    match options.get(picked) {
        Some((_, token)) => {
            session.apply_selection(field, token)?;
            Ok(Nav::Next)
        }
        None => Ok(Nav::Back),
    }
}

fn current_token(session: &BuilderSession, field: Field) -> Option<String> {
    let s = session.selection();
    match field {
        Field::PendantType => s.pendant_kind.as_ref().map(ToString::to_string),
        Field::PendantMaterial => s.pendant_material.as_ref().map(ToString::to_string),
        Field::ChainType => s.chain_type.as_ref().map(ToString::to_string),
        Field::ChainSize => s.chain_size.value().map(ToString::to_string),
        Field::ChainMaterial => s.chain_material.value().map(ToString::to_string),
        Field::Colors | Field::Diamonds | Field::Engraving => None,
    }
}

fn kind_options(session: &BuilderSession) -> Vec<(String, String)> {
    let kinds: Vec<PendantKind> = session.catalog().kinds().cloned().collect();
    let kinds = if kinds.is_empty() {
        PendantKind::ALL.to_vec()
    } else {
        kinds
    };
    kinds
        .into_iter()
        .map(|k| (k.display_name(), k.to_string()))
        .collect()
}

fn material_options(session: &BuilderSession, ctx: &Context) -> Vec<(String, String)> {
    let currency = ctx.config.builder.pricing.currency;
    let catalog = session.catalog();
    let Some(kind) = session.selection().pendant_kind.as_ref() else {
        return Material::ALL
            .into_iter()
            .map(|m| (m.display_name(), m.to_string()))
            .collect();
    };

    let mut materials: Vec<Material> =
        catalog.pendant_materials(kind).into_iter().cloned().collect();
    if materials.is_empty() {
        materials = Material::ALL.to_vec();
    }
    materials
        .into_iter()
        .map(|m| {
            let label = match catalog.pendant_price(kind, &m) {
                Some(price) => format!(
                    "{} ({})",
                    m.display_name(),
                    Money::from_units(price.base, currency).display_compact()
                ),
                None => m.display_name(),
            };
            (label, m.to_string())
        })
        .collect()
}

fn size_options(session: &BuilderSession, ctx: &Context) -> Vec<(String, String)> {
    let currency = ctx.config.builder.pricing.currency;
    let catalog = session.catalog();
    let material = session.selection().chain_material.value();

    let mut sizes: Vec<ChainSize> = material
        .map(|m| catalog.chain_sizes(m).into_iter().cloned().collect())
        .unwrap_or_default();
    if sizes.is_empty() {
        sizes = ChainSize::ALL.to_vec();
    }
    sizes
        .into_iter()
        .map(|size| {
            let price = material.and_then(|m| catalog.chain_price(m, &size));
            let label = match price {
                Some(p) => format!(
                    "{} ({})",
                    size.display_name(),
                    Money::from_units(p, currency).display_compact()
                ),
                None => size.display_name(),
            };
            (label, size.to_string())
        })
        .collect()
}

fn chain_material_options(session: &BuilderSession, ctx: &Context) -> Vec<(String, String)> {
    let currency = ctx.config.builder.pricing.currency;
    let catalog = session.catalog();
    let size = session.selection().chain_size.value();

    let mut materials: Vec<Material> = catalog.chain_materials().cloned().collect();
    if materials.is_empty() {
        materials = Material::ALL.to_vec();
    }
    materials
        .into_iter()
        .map(|m| {
            let label = match size.and_then(|s| catalog.chain_price(&m, s)) {
                Some(p) => format!(
                    "{} ({})",
                    m.display_name(),
                    Money::from_units(p, currency).display_compact()
                ),
                None => m.display_name(),
            };
            (label, m.to_string())
        })
        .collect()
}

fn add_ons(session: &mut BuilderSession, ctx: &Context) -> Result<Nav> {
    let rules = ctx.config.builder.pricing.clone();
    let add_ons = session.selection().add_ons.clone();

    if session.selection().supports_color() {
        if let Some(label) =
            color_pricing_label(session.selection(), session.catalog(), &rules)
        {
            ctx.output.kv("Colors", &label);
        }
        let colors: u32 = Input::new()
            .with_prompt("Number of colors")
            .default(add_ons.colors)
            .interact_text()?;
        session.apply_change(Change::Colors(colors))?;
    } else {
        ctx.output.kv("Colors", "unavailable");
    }

    ctx.output.kv(
        "Diamonds",
        &format!(
            "{} each",
            Money::from_units(rules.diamond_rate, rules.currency).display_compact()
        ),
    );
    let diamonds: u32 = Input::new()
        .with_prompt("Number of diamonds")
        .default(add_ons.diamonds)
        .interact_text()?;
    session.apply_change(Change::Diamonds(diamonds))?;

    let engraving: String = Input::new()
        .with_prompt("Engraving text (optional)")
        .default(add_ons.engraving)
        .allow_empty(true)
        .interact_text()?;
    session.apply_change(Change::Engraving(engraving))?;

    ctx.output.kv("Running total", &total_badge(session.price().total));

    let picked = Select::new()
        .items(&["Continue", BACK])
        .default(0)
        .interact()?;
    Ok(if picked == 0 { Nav::Next } else { Nav::Back })
}

fn review(session: &mut BuilderSession, ctx: &Context) -> Result<Nav> {
    let snapshot = session.snapshot();
    for line in snapshot.summary.unwrap_or_default() {
        ctx.output.kv(line.label, &line.value);
    }
    ctx.output.info("");
    ctx.output.price(&snapshot.price);

    let picked = Select::new()
        .items(&["Place order", BACK, "Cancel"])
        .default(0)
        .interact()?;

    match picked {
        0 => {
            let confirmed = Confirm::new()
                .with_prompt("I have reviewed my pendant and confirm the details are correct")
                .default(false)
                .interact()?;
            session.set_confirmed(confirmed)?;
            if confirmed {
                Ok(Nav::Submit)
            } else {
                ctx.output.warn("Please confirm the order before placing it");
                Ok(Nav::Stay)
            }
        }
        1 => Ok(Nav::Back),
        _ => Ok(Nav::Cancel),
    }
}
