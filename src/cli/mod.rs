//! # CLI Module
//!
//! Command-line interface of the `openapi-docgen` binary.
//!
//! ## Commands
//!
//! ### `generate`
//!
//! Compile the resources and render them into an OpenAPI document:
//!
//! ```bash
//! openapi-docgen generate "Billing API" -a v2 -r "invoice[96]::billing, customer/payment"
//! ```
//!
//! Options:
//! - `-r, --resources <DSL>` - Comma-separated resource tokens
//! - `-a, --api-version <VERSION>` - API version (default: v1)
//! - `-o, --output <DIR>` - Output directory
//! - `-t, --template <NAME>` - Template to render
//! - `-u, --unique` - Append a unique suffix to the file name
//!
//! ### `inspect`
//!
//! Print the compiled model as JSON or YAML, which is the context templates
//! receive:
//!
//! ```bash
//! openapi-docgen inspect Geo -r "location/address" --format yaml
//! ```
//!
//! ### `setup`
//!
//! Write a draft `docgen.toml`:
//!
//! ```bash
//! openapi-docgen setup --path docgen.toml --force
//! ```
//!
//! ## Global Options
//!
//! - `-v, --verbose` - Trace how every token was interpreted
//! - `-c, --config <FILE>` - Configuration file to load
//!
//! ## Exit Codes
//!
//! - `0` - Success
//! - `1` - Invalid input, configuration, template or I/O failure

mod commands;
#[cfg(test)]
mod tests;

pub use commands::{run_cli, Cli, Commands, InspectFormat};
