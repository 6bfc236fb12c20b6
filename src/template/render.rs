use anyhow::Context;
use minijinja::{Environment, Value};
use std::collections::HashSet;

use crate::model::inflect::{pluralize, to_camel_case, to_pascal_case};
use crate::model::Api;

/// Render template `source` with `api` as the root context.
///
/// # Errors
///
/// Returns an error when the template does not compile or fails to render.
pub fn render(source: &str, api: &Api) -> anyhow::Result<String> {
    let env = environment();
    let template = env
        .template_from_str(source)
        .context("Failed to compile template")?;
    let rendered = template
        .render(api)
        .with_context(|| format!("Failed to render template for API {}", api.name()))?;
    tracing::debug!(bytes = rendered.len(), "rendered template");
    Ok(rendered)
}

fn environment<'source>() -> Environment<'source> {
    let mut env = Environment::new();
    env.set_trim_blocks(true);
    env.set_lstrip_blocks(true);
    env.set_keep_trailing_newline(true);
    env.add_filter("pascal", |value: String| to_pascal_case(&value));
    env.add_filter("camel", |value: String| to_camel_case(&value));
    env.add_filter("plural", |value: String| pluralize(&value));
    env.add_filter("distinct_by", distinct_by);
    env
}

/// Keep the first item for every distinct value of `attr`.
fn distinct_by(items: Vec<Value>, attr: &str) -> Result<Vec<Value>, minijinja::Error> {
    let mut seen = HashSet::new();
    let mut distinct = Vec::with_capacity(items.len());
    for item in items {
        if seen.insert(item.get_attr(attr)?.to_string()) {
            distinct.push(item);
        }
    }
    Ok(distinct)
}
