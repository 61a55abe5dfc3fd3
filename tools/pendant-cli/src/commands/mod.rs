//! CLI command implementations.

pub mod catalog;
pub mod config;
pub mod configure;
pub mod quote;
pub mod replay;

use clap::{Args, Subcommand};

/// Arguments for the configure command.
#[derive(Args)]
pub struct ConfigureArgs {
    /// Write the submitted order to this file instead of stdout.
    #[arg(short, long)]
    pub output: Option<String>,
}

/// Arguments for the quote command.
#[derive(Args)]
pub struct QuoteArgs {
    /// Selection as FIELD=VALUE, repeatable (e.g. --set pendant-type=3d_enamel).
    #[arg(short, long = "set", value_name = "FIELD=VALUE")]
    pub selections: Vec<String>,

    /// Also print the checkout payload.
    #[arg(long)]
    pub payload: bool,
}

/// Arguments for the replay command.
#[derive(Args)]
pub struct ReplayArgs {
    /// Script of builder commands (TOML or JSON).
    pub script: String,

    /// File to write the submitted order to.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Stop at the first failing command.
    #[arg(long)]
    pub strict: bool,
}

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only show prices for this pendant kind.
    #[arg(short, long)]
    pub kind: Option<String>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration.
    Show,
    /// Get a config value.
    Get {
        /// Config key (dot-separated).
        key: String,
    },
    /// Set a config value.
    Set {
        /// Config key (dot-separated).
        key: String,
        /// Value to set.
        value: String,
    },
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
    /// Validate the config file and catalog.
    Validate,
}
