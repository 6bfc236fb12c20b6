//! # Template Module
//!
//! Retrieves document templates and renders them against a compiled
//! [`Api`](crate::model::Api).
//!
//! ## Providers
//!
//! - **FileSystem** - the template name is joined to a base directory and read
//!   from disk
//! - **Online** - the template name is resolved against a base URL and
//!   downloaded (8 second timeout, no retries)
//!
//! ## Rendering
//!
//! Templates use the MiniJinja (Jinja2) syntax. The API is the root context,
//! so a template can write `{{ name }}`, `{% for resource in resources %}` or
//! `{{ resource.idParameter.key }}`. On top of the built-in filters a `pascal`
//! filter turns `line-items` into `LineItems`.
//!
//! ```rust,ignore
//! use openapi_docgen::template::{render, TemplateLoader, TemplateProvider};
//!
//! let loader = TemplateLoader::new(TemplateProvider::FileSystem, "templates");
//! let source = loader.load("default.yaml.j2")?;
//! let document = render(&source, &api)?;
//! ```

mod loader;
mod render;

pub use loader::{TemplateLoader, TemplateProvider, ONLINE_TIMEOUT};
pub use render::render;
