//! Price a selection without walking the steps.

use anyhow::{bail, Context as _, Result};
use pendant_builder::order::describe;
use pendant_builder::wizard::Step;
use serde_json::json;

use super::QuoteArgs;
use crate::context::Context;

/// Run the quote command.
pub async fn run(args: QuoteArgs, ctx: &Context) -> Result<()> {
    let mut session = ctx.session()?;

    for assignment in &args.selections {
        let (field, value) = parse_assignment(assignment)?;
        session
            .apply_named(field, value)
            .with_context(|| format!("Failed to apply '{}'", assignment))?;
        ctx.output.debug(&format!("{} = {}", field, value));
    }

    let price = session.price();
    let payload = args.payload.then(|| session.order_payload());

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "selection": session.selection(),
            "price": price,
            "title": describe(session.selection()),
            "payload": payload,
        }));
        return Ok(());
    }

    ctx.output.header("Quote");
    ctx.output.info(&describe(session.selection()));
    ctx.output.price(&price);

    for step in Step::ALL {
        if let Err(e) = session.check_step(step) {
            ctx.output.warn(&e.to_string());
        }
    }

    if let Some(payload) = payload {
        ctx.output.header("Checkout payload");
        ctx.output.json(&payload);
    }

    Ok(())
}

/// Split `FIELD=VALUE`; the value may itself contain `=`.
pub(crate) fn parse_assignment(assignment: &str) -> Result<(&str, &str)> {
    match assignment.split_once('=') {
        Some((field, value)) if !field.trim().is_empty() => Ok((field.trim(), value)),
        _ => bail!("Expected FIELD=VALUE, got '{}'", assignment),
    }
}
