//! # Resource Model
//!
//! Compiles the resource DSL into the [`Api`] value that templates render.
//!
//! ```text
//! "location/address[96]::geo, invoice"
//!     │ split on ','
//!     ▼
//! ResourceToken ──► Resource (parent chain, ops, id parameter, paths)
//!     │
//!     ▼
//! missing-parent synthesis ──► tag aggregation ──► Api
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use openapi_docgen::model::{Api, ModelOptions};
//!
//! let api = Api::build("Billing API", "v1", "invoice[96]::billing", &ModelOptions::default())?;
//! assert_eq!(api.name(), "Billing");
//! assert_eq!(api.resources()[0].tag(), "billing");
//! # Ok::<(), openapi_docgen::model::ModelError>(())
//! ```

mod api;
mod error;
pub mod grammar;
pub mod inflect;
mod operations;
mod parameter;
mod resource;
mod tag;

pub use api::{synthesize_missing_parents, Api};
pub use error::ModelError;
pub use operations::OperationSet;
pub use parameter::IdParameter;
pub use resource::Resource;
pub use tag::{aggregate_tags, Tag, SYSTEM_TAG};

/// Settings the compiler needs from configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModelOptions {
    default_ops: OperationSet,
}

impl ModelOptions {
    /// Options using `default_ops` for tokens without an `[ops]` modifier.
    ///
    /// # Errors
    ///
    /// The same errors as [`OperationSet::decode`].
    pub fn new(default_ops: u32) -> Result<Self, ModelError> {
        Ok(ModelOptions {
            default_ops: OperationSet::decode(default_ops)?,
        })
    }

    pub fn default_ops(&self) -> OperationSet {
        self.default_ops
    }
}

impl Default for ModelOptions {
    fn default() -> Self {
        ModelOptions {
            default_ops: OperationSet::legacy_default(),
        }
    }
}
