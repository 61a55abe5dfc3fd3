//! CLI execution context.

use std::path::{Path, PathBuf};

use anyhow::{Context as _, Result};
use pendant_builder::catalog::PricingCatalog;
use pendant_builder::wizard::BuilderSession;
use tracing::debug;

use crate::config::{load_catalog, CliConfig, CONFIG_NAMES};
use crate::output::Output;

/// Execution context for CLI commands.
pub struct Context {
    /// CLI configuration.
    pub config: CliConfig,
    /// File the configuration was loaded from, if any.
    pub config_path: Option<PathBuf>,
    /// Output handler.
    pub output: Output,
    /// Working directory.
    pub cwd: PathBuf,
}

impl Context {
    /// Load context from config file.
    pub fn load(config_path: Option<&str>, output: Output) -> Result<Self> {
        let cwd = std::env::current_dir().context("Failed to get current directory")?;

        let (config, config_path) = if let Some(path) = config_path {
            (CliConfig::load(path)?, Some(PathBuf::from(path)))
        } else {
            // Try to find config in current directory or parent directories
            match Self::find_config(&cwd) {
                Some((config, path)) => (config, Some(path)),
                None => (CliConfig::default(), None),
            }
        };

        if let Some(ref path) = config_path {
            debug!(path = %path.display(), "loaded configuration");
        }

        Ok(Self {
            config,
            config_path,
            output,
            cwd,
        })
    }

    /// Find config file in directory tree.
    fn find_config(start: &Path) -> Option<(CliConfig, PathBuf)> {
        let mut current = start.to_path_buf();
        loop {
            for name in &CONFIG_NAMES {
                let config_path = current.join(name);
                if config_path.exists() {
                    if let Ok(config) = CliConfig::load(config_path.to_str()?) {
                        return Some((config, config_path));
                    }
                }
            }

            if !current.pop() {
                break;
            }
        }

        None
    }

    /// The active pricing catalog: the configured file, or the built-in tables.
    ///
    /// A relative catalog path is resolved against the config file's directory.
    pub fn catalog(&self) -> Result<PricingCatalog> {
        let Some(ref path) = self.config.builder.catalog else {
            return Ok(PricingCatalog::standard());
        };

        let base = self
            .config_path
            .as_deref()
            .and_then(Path::parent)
            .unwrap_or(&self.cwd);
        let resolved = if Path::new(path).is_absolute() {
            PathBuf::from(path)
        } else {
            base.join(path)
        };

        debug!(path = %resolved.display(), "loading catalog");
        load_catalog(&resolved)
    }

    /// Start a builder session over the active catalog and configuration.
    pub fn session(&self) -> Result<BuilderSession> {
        let catalog = self.catalog()?;
        BuilderSession::new(catalog, self.config.builder.clone())
            .context("Failed to start builder session")
    }

    /// Resolve a path relative to the working directory.
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        if PathBuf::from(path).is_absolute() {
            PathBuf::from(path)
        } else {
            self.cwd.join(path)
        }
    }
}
