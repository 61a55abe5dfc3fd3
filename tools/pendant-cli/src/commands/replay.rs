//! Scripted builder sessions.

use std::fs;
use std::path::Path;

use anyhow::{Context as _, Result};
use chrono::{DateTime, Utc};
use pendant_builder::order::OrderPayload;
use pendant_builder::submit::Outbox;
use pendant_builder::wizard::Command;
use serde::{Deserialize, Serialize};
use serde_json::json;

use super::ReplayArgs;
use crate::context::Context;
use crate::output::{total_badge, validity_badge};

/// A list of builder commands to run against a fresh session.
///
/// ```toml
/// name = "silver pendant, no chain"
///
/// [[commands]]
/// action = "select"
/// field = "pendant-type"
/// value = "3d_enamel"
///
/// [[commands]]
/// action = "next"
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub commands: Vec<Command>,
}

impl ReplayScript {
    /// Load a script file, JSON or TOML by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script: {}", path.display()))?;
        let is_json = path.extension().is_some_and(|ext| ext == "json");
        Self::parse(&content, is_json)
            .with_context(|| format!("Failed to parse script: {}", path.display()))
    }

    /// Parse script text. JSON scripts may also be a bare command array.
    pub fn parse(content: &str, json: bool) -> Result<Self> {
        if !json {
            return Ok(toml::from_str(content)?);
        }
        let value: serde_json::Value = serde_json::from_str(content)?;
        if value.is_array() {
            Ok(Self {
                name: None,
                commands: serde_json::from_value(value)?,
            })
        } else {
            Ok(serde_json::from_value(value)?)
        }
    }
}

/// Submitted order as written to disk.
#[derive(Debug, Serialize)]
struct OrderRecord<'a> {
    submitted_at: DateTime<Utc>,
    script: &'a str,
    order: &'a OrderPayload,
}

/// Run the replay command.
pub async fn run(args: ReplayArgs, ctx: &Context) -> Result<()> {
    let script = ReplayScript::load(&ctx.resolve_path(&args.script))?;
    let mut session = ctx.session()?;
    let mut outbox = Outbox::new();

    let total = script.commands.len();
    let mut failures = 0usize;
    let mut transcript = Vec::with_capacity(total);

    ctx.output.header(&format!(
        "Replaying {}",
        script.name.as_deref().unwrap_or(&args.script)
    ));

    for (i, command) in script.commands.iter().enumerate() {
        ctx.output.step(i + 1, total, &describe_command(command));

        match session.execute(command, &mut outbox) {
            Ok(snapshot) => {
                ctx.output.kv(
                    "Step",
                    &format!(
                        "{} ({}/{})",
                        snapshot.step.display_name(),
                        snapshot.step_number,
                        snapshot.total_steps
                    ),
                );
                ctx.output.kv("Total", &total_badge(snapshot.price.total));
                if ctx.output.is_verbose() {
                    for status in &snapshot.steps {
                        ctx.output
                            .kv(status.step.display_name(), &validity_badge(status.valid));
                    }
                }
                transcript.push(json!({ "command": command, "snapshot": snapshot }));
            }
            Err(e) if args.strict => {
                return Err(e).with_context(|| {
                    format!("Command {} ({}) failed", i + 1, command.name())
                });
            }
            Err(e) => {
                failures += 1;
                ctx.output.warn(&e.to_string());
                transcript.push(json!({ "command": command, "error": e.to_string() }));
            }
        }
    }

    let payload = outbox.take_last();
    let written = match payload {
        Some(ref order) => Some(write_order(order, &args, ctx)?),
        None => {
            ctx.output.info("No order submitted");
            None
        }
    };

    if ctx.output.is_json() {
        ctx.output.json(&json!({
            "commands": transcript,
            "failures": failures,
            "payload": payload,
            "written_to": written,
        }));
    } else if failures > 0 {
        ctx.output.warn(&format!("{} of {} command(s) failed", failures, total));
    }

    Ok(())
}

fn write_order(order: &OrderPayload, args: &ReplayArgs, ctx: &Context) -> Result<String> {
    let now = Utc::now();
    let path = match args.output {
        Some(ref output) => ctx.resolve_path(output),
        None => {
            let dir = ctx.resolve_path(&ctx.config.replay.output_dir);
            fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create {}", dir.display()))?;
            dir.join(order_file_name(now))
        }
    };

    let record = OrderRecord {
        submitted_at: now,
        script: &args.script,
        order,
    };
    fs::write(&path, serde_json::to_string_pretty(&record)?)
        .with_context(|| format!("Failed to write order: {}", path.display()))?;

    ctx.output.success(&format!("Order written to {}", path.display()));
    ctx.output.kv("Title", &order.product.title);
    Ok(path.display().to_string())
}

/// Default file name for an order submitted at `at`.
fn order_file_name(at: DateTime<Utc>) -> String {
    at.format("order-%Y%m%d-%H%M%S.json").to_string()
}

fn describe_command(command: &Command) -> String {
    match command {
        Command::Select { field, value } => format!("select {} = {}", field, value),
        Command::Confirm { confirmed: false } => "confirm (untick)".to_string(),
        other => other.name().to_string(),
    }
}
