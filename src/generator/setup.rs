use anyhow::Context;
use askama::Template;
use std::fs;
use std::path::Path;

use crate::config::DocgenConfig;

/// Template data for the draft `docgen.toml` written by `setup`
#[derive(Template)]
#[template(path = "docgen.toml.txt", escape = "none")]
pub struct SetupConfigTemplate {
    pub template_provider: String,
    pub templates_base_location: String,
    pub default_template: String,
    pub default_output_location: String,
    pub unique_output_file_name: bool,
    pub default_ops: u32,
}

impl From<&DocgenConfig> for SetupConfigTemplate {
    fn from(config: &DocgenConfig) -> Self {
        SetupConfigTemplate {
            template_provider: config.template_provider.to_string(),
            templates_base_location: config.templates_base_location.clone(),
            default_template: config.default_template.clone(),
            default_output_location: config.default_output_location.display().to_string(),
            unique_output_file_name: config.unique_output_file_name,
            default_ops: config.default_ops,
        }
    }
}

/// Write a draft configuration file with the default settings.
///
/// Returns `Ok(false)` without touching the file when it already exists and
/// `force` is not set.
///
/// # Errors
///
/// Returns an error if rendering or writing fails.
pub fn write_setup_config(path: &Path, force: bool) -> anyhow::Result<bool> {
    if path.exists() && !force {
        println!("⚠️  Skipping existing config file: {path:?} (use --force to overwrite)");
        return Ok(false);
    }
    let rendered = SetupConfigTemplate::from(&DocgenConfig::default()).render()?;
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory for {}", path.display()))?;
    }
    fs::write(path, rendered)
        .with_context(|| format!("Failed to write config: {}", path.display()))?;
    println!("✅ Wrote draft config → {path:?}");
    Ok(true)
}
