//! # Configuration Module
//!
//! Loads the generator settings from an optional TOML file and environment
//! variables.
//!
//! ## Sources
//!
//! Settings are resolved in this order, later sources winning:
//!
//! 1. Built-in defaults
//! 2. `docgen.toml` in the working directory, or the file given with `--config`
//! 3. `DOCGEN_*` environment variables
//!
//! Command-line flags take precedence over all of them.
//!
//! ## Environment Variables
//!
//! | Variable | Default |
//! |----------|---------|
//! | `DOCGEN_TEMPLATE_PROVIDER` | `FileSystem` (or `Online`) |
//! | `DOCGEN_TEMPLATES_BASE_LOCATION` | `templates` |
//! | `DOCGEN_DEFAULT_TEMPLATE` | `default.yaml.j2` |
//! | `DOCGEN_DEFAULT_OUTPUT_LOCATION` | `.` |
//! | `DOCGEN_UNIQUE_OUTPUT_FILENAME` | `false` |
//! | `DOCGEN_DEFAULT_OPS` | `235` |
//!
//! A non-numeric `DOCGEN_DEFAULT_OPS` falls back to `235`; a numeric value
//! that is not a valid operations mask is rejected.
//!
//! ## Example
//!
//! ```toml
//! template_provider = "Online"
//! templates_base_location = "https://example.com/templates/"
//! default_ops = 9
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::{Path, PathBuf};

use crate::model::{ModelOptions, OperationSet};
use crate::template::{TemplateLoader, TemplateProvider};

/// Name of the configuration file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "docgen.toml";

/// Generator settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocgenConfig {
    /// Where templates are retrieved from
    pub template_provider: TemplateProvider,
    /// Directory (FileSystem) or base URL (Online) of the templates
    pub templates_base_location: String,
    /// Template used when `--template` is not given
    pub default_template: String,
    /// Output directory used when `--output` is not given
    pub default_output_location: PathBuf,
    /// Add a unique suffix to output file names
    pub unique_output_file_name: bool,
    /// Operations bitmask for resources without an `[ops]` modifier
    pub default_ops: u32,
}

impl Default for DocgenConfig {
    fn default() -> Self {
        DocgenConfig {
            template_provider: TemplateProvider::FileSystem,
            templates_base_location: "templates".to_string(),
            default_template: "default.yaml.j2".to_string(),
            default_output_location: PathBuf::from("."),
            unique_output_file_name: false,
            default_ops: OperationSet::LEGACY_DEFAULT,
        }
    }
}

impl DocgenConfig {
    /// Load the configuration from file and environment.
    ///
    /// With `explicit_path` the file must exist; otherwise `docgen.toml` in
    /// the working directory is used when present.
    ///
    /// # Errors
    ///
    /// Returns an error if a config file cannot be read or parsed, if an
    /// environment variable holds an invalid value, or if the default
    /// operations mask is invalid.
    pub fn load(explicit_path: Option<&Path>) -> anyhow::Result<Self> {
        let base = match explicit_path {
            Some(path) => Self::from_file(path)?.with_context(|| {
                format!("Config file not found: {}", path.display())
            })?,
            None => Self::from_file(Path::new(CONFIG_FILE_NAME))?.unwrap_or_default(),
        };
        let config = base.with_overrides(|key| env::var(key).ok())?;
        config.model_options()?;
        tracing::debug!(?config, "loaded configuration");
        Ok(config)
    }

    /// Read a TOML config file.
    ///
    /// Returns `Ok(None)` if the file does not exist.
    pub fn from_file(path: &Path) -> anyhow::Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: DocgenConfig = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(Some(config))
    }

    /// Apply `DOCGEN_*` overrides, looking each variable up with `lookup`.
    pub fn with_overrides<F>(mut self, lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(provider) = lookup("DOCGEN_TEMPLATE_PROVIDER") {
            self.template_provider = provider
                .parse()
                .context("Invalid DOCGEN_TEMPLATE_PROVIDER")?;
        }
        if let Some(location) = lookup("DOCGEN_TEMPLATES_BASE_LOCATION") {
            self.templates_base_location = location;
        }
        if let Some(template) = lookup("DOCGEN_DEFAULT_TEMPLATE") {
            self.default_template = template;
        }
        if let Some(output) = lookup("DOCGEN_DEFAULT_OUTPUT_LOCATION") {
            self.default_output_location = PathBuf::from(output);
        }
        if let Some(unique) = lookup("DOCGEN_UNIQUE_OUTPUT_FILENAME") {
            self.unique_output_file_name = unique.trim() == "true";
        }
        if let Some(ops) = lookup("DOCGEN_DEFAULT_OPS") {
            self.default_ops = parse_default_ops(&ops);
        }
        Ok(self)
    }

    /// Compiler options derived from this configuration.
    ///
    /// # Errors
    ///
    /// Returns an error when `default_ops` is not a valid operations mask.
    pub fn model_options(&self) -> anyhow::Result<ModelOptions> {
        ModelOptions::new(self.default_ops).context("Invalid default operations in configuration")
    }

    /// Template loader for the configured provider and location.
    pub fn template_loader(&self) -> TemplateLoader {
        TemplateLoader::new(self.template_provider, self.templates_base_location.clone())
    }
}

/// Numeric values that do not fit a mask map to 0 so validation rejects them;
/// anything non-numeric falls back to [`OperationSet::LEGACY_DEFAULT`].
fn parse_default_ops(raw: &str) -> u32 {
    let trimmed = raw.trim();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        tracing::warn!(
            value = %raw,
            fallback = OperationSet::LEGACY_DEFAULT,
            "DOCGEN_DEFAULT_OPS is not numeric, using fallback"
        );
        return OperationSet::LEGACY_DEFAULT;
    }
    if negative {
        return 0;
    }
    digits.parse::<u32>().unwrap_or(0)
}
