//! # Generator Module
//!
//! Drives a full document generation: compile the resource DSL, retrieve the
//! template, render it and write the result.
//!
//! ## Flow
//!
//! ```text
//! name + version + resources ─► model::Api::build
//!                                     │
//! config / --template ─► TemplateLoader::load ─► template::render
//!                                                     │
//!                             output dir ◄─ write_document
//! ```
//!
//! ## Output
//!
//! The document is written to `<output>/<urlFriendlyName>-<version>.yaml`.
//! With the unique flag a ULID is appended
//! (`billing-api-v1-01J9Z3....yaml`) so earlier documents are kept.
//!
//! ## Setup
//!
//! [`write_setup_config`] renders a draft `docgen.toml` listing every setting
//! with its default value, from a template compiled into the binary.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use openapi_docgen::config::DocgenConfig;
//! use openapi_docgen::generator::{generate_document, GenerateOptions};
//!
//! let config = DocgenConfig::load(None)?;
//! let options = GenerateOptions::new("Billing", "v1", "invoice, customer/payment[9]");
//! let path = generate_document(&options, &config)?;
//! ```

mod output;
mod setup;
#[cfg(test)]
mod tests;

pub use output::{output_file_name, write_document};
pub use setup::{write_setup_config, SetupConfigTemplate};

use anyhow::Context;
use std::path::PathBuf;

use crate::config::DocgenConfig;
use crate::model::Api;
use crate::template::render;

/// What to generate, as given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateOptions {
    /// API name, e.g. `Billing`
    pub name: String,
    /// API version, e.g. `v1`
    pub version: String,
    /// Resource DSL, e.g. `invoice[96]::billing, location/address`
    pub resources: String,
    /// Template name; the configured default when `None`
    pub template: Option<String>,
    /// Output directory; the configured default when `None`
    pub output: Option<PathBuf>,
    /// Force a unique output file name (the configured flag also applies)
    pub unique: bool,
}

impl GenerateOptions {
    pub fn new(
        name: impl Into<String>,
        version: impl Into<String>,
        resources: impl Into<String>,
    ) -> Self {
        GenerateOptions {
            name: name.into(),
            version: version.into(),
            resources: resources.into(),
            template: None,
            output: None,
            unique: false,
        }
    }
}

/// Compile the API described by `name`, `version` and `resources` using the
/// default operations of `config`.
///
/// # Errors
///
/// Returns an error if the configured default operations are invalid or the
/// DSL does not compile.
pub fn compile_api(
    name: &str,
    version: &str,
    resources: &str,
    config: &DocgenConfig,
) -> anyhow::Result<Api> {
    let options = config.model_options()?;
    let api = Api::build(name, version, resources, &options)
        .with_context(|| format!("Cannot build API {name} ({version})"))?;
    tracing::debug!(
        api = api.name(),
        resources = api.resources().len(),
        tags = api.tags().len(),
        has_async_ops = api.has_async_ops(),
        "compiled API model"
    );
    Ok(api)
}

/// Generate the document described by `options` and return its path.
///
/// # Errors
///
/// Returns an error if the API does not compile, the template cannot be
/// retrieved or rendered, or the output cannot be written.
pub fn generate_document(options: &GenerateOptions, config: &DocgenConfig) -> anyhow::Result<PathBuf> {
    let api = compile_api(&options.name, &options.version, &options.resources, config)?;

    let template_name = options
        .template
        .as_deref()
        .unwrap_or(&config.default_template);
    let loader = config.template_loader();
    let source = loader.load(template_name)?;
    println!(
        "✅ Retrieved template {template_name} ({} provider)",
        loader.provider()
    );

    let document = render(&source, &api)?;

    let output_dir = options
        .output
        .clone()
        .unwrap_or_else(|| config.default_output_location.clone());
    let unique = options.unique || config.unique_output_file_name;
    let path = write_document(&output_dir, &output_file_name(&api, unique), &document)?;
    println!("✅ Generated OpenAPI document → {path:?}");
    Ok(path)
}
