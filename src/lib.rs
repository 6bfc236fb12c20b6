//! # openapi-docgen
//!
//! **openapi-docgen** turns a one-line description of an API's resources into
//! a draft [OpenAPI](https://spec.openapis.org/oas/v3.0.3) document.
//!
//! ## Overview
//!
//! A resource list such as
//!
//! ```text
//! invoice[96]::billing, location/address, customer/payment[9]
//! ```
//!
//! is compiled into a normalized [`model::Api`]: singular and plural names,
//! nested paths with `{…Id}` placeholders, the operations each resource
//! supports, parents that were referenced but never declared, and the tags
//! grouping them. The model is then rendered through a Jinja-style template
//! into a YAML document.
//!
//! ## Architecture
//!
//! - **[`model`]** - Resource DSL grammar, operations bitmask, id parameters,
//!   missing-parent synthesis and tag aggregation
//! - **[`template`]** - Template retrieval (file system or HTTP) and rendering
//! - **[`generator`]** - End-to-end generation and output file handling
//! - **[`config`]** - `docgen.toml` and `DOCGEN_*` settings
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - The `openapi-docgen` command line
//!
//! ### Generation Flow
//!
//! ```mermaid
//! sequenceDiagram
//!     participant User
//!     participant CLI as CLI<br/>(openapi-docgen)
//!     participant Config as config::DocgenConfig
//!     participant Model as model::Api
//!     participant Loader as template::TemplateLoader
//!     participant Render as template::render
//!     participant FS as File System
//!
//!     User->>CLI: openapi-docgen generate Billing -r "invoice, customer/payment"
//!     CLI->>Config: load(docgen.toml + DOCGEN_*)
//!     CLI->>Model: build(name, version, resources)
//!     Model->>Model: Parse tokens, synthesize parents,<br/>aggregate tags
//!     Model-->>CLI: Api
//!     CLI->>Loader: load(template)
//!     Loader-->>CLI: template source
//!     CLI->>Render: render(source, &Api)
//!     Render-->>CLI: YAML document
//!     CLI->>FS: write billing-v1.yaml
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use openapi_docgen::model::{Api, ModelOptions};
//!
//! let api = Api::build("Geo", "v1", "location/address", &ModelOptions::default())?;
//! // `location` was never declared, so it is added in front of `address`
//! assert_eq!(api.resources()[0].name(), "location");
//! assert_eq!(
//!     api.resources()[1].resource_path(),
//!     Some("/locations/{locationId}/addresses/{addressId}")
//! );
//! # Ok::<(), openapi_docgen::model::ModelError>(())
//! ```

pub mod cli;
pub mod config;
pub mod generator;
pub mod logging;
pub mod model;
pub mod template;
