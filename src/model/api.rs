use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;
use std::collections::HashSet;

use super::inflect::slugify;
use super::tag::aggregate_tags;
use super::{ModelError, ModelOptions, Resource, Tag};

static API_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-zA-Z0-9\- ]*$").expect("API name regex should be valid"));

static TRAILING_API_WORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\s+api$").expect("trailing API regex should be valid"));

/// The compiled API: the root value handed to the template renderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Api {
    name: String,
    version: String,
    url_friendly_name: String,
    resources: Vec<Resource>,
    tags: Vec<Tag>,
    has_async_ops: bool,
}

impl Api {
    /// Compile an API from its name, version and resource DSL.
    ///
    /// `resources` is a comma-separated list of tokens such as
    /// `"invoice[96]::billing, location/address"`; an empty string yields an
    /// API without resources.
    ///
    /// # Errors
    ///
    /// Fails on the first invalid name, token or operations modifier. No
    /// partial API is returned.
    pub fn build(
        name: &str,
        version: &str,
        resources: &str,
        options: &ModelOptions,
    ) -> Result<Self, ModelError> {
        tracing::trace!(api = name, version, "parsing input for API");

        if !API_NAME.is_match(name) {
            return Err(ModelError::invalid_name(
                name,
                "please use letters, numbers, spaces or hyphens (-) only",
            ));
        }

        let resources = parse_resources(resources, options)?;
        let tags = aggregate_tags(&resources);
        let has_async_ops = resources.iter().any(|r| r.ops().create_async());

        Ok(Api {
            name: TRAILING_API_WORD.replace(name, "").into_owned(),
            version: version.to_string(),
            url_friendly_name: slugify(name),
            resources,
            tags,
            has_async_ops,
        })
    }

    /// Display name with any trailing `API` word removed
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Slug of the name as given, e.g. `billing-api`
    pub fn url_friendly_name(&self) -> &str {
        &self.url_friendly_name
    }

    /// Synthesized parents first, then the declared resources in input order
    pub fn resources(&self) -> &[Resource] {
        &self.resources
    }

    pub fn tags(&self) -> &[Tag] {
        &self.tags
    }

    /// True when at least one resource offers an asynchronous create
    pub fn has_async_ops(&self) -> bool {
        self.has_async_ops
    }
}

/// Parse every comma-separated token, then add the missing parents.
fn parse_resources(input: &str, options: &ModelOptions) -> Result<Vec<Resource>, ModelError> {
    tracing::trace!("parsing resources");
    if input.trim().is_empty() {
        return Ok(Vec::new());
    }

    let resources = input
        .split(',')
        .map(|token| {
            let resource = Resource::parse(token.trim(), options)?;
            tracing::trace!(
                resource = resource.name(),
                ops = %resource.ops(),
                "found resource"
            );
            Ok(resource)
        })
        .collect::<Result<Vec<_>, ModelError>>()?;

    Ok(synthesize_missing_parents(resources))
}

/// Prepend a synthetic parent for every ancestor that is referenced but not
/// declared on its own.
///
/// Each missing ancestor is synthesized once, root-most first, with list and
/// read operations and the tag of the first child referencing it.
pub fn synthesize_missing_parents(resources: Vec<Resource>) -> Vec<Resource> {
    let declared: HashSet<&str> = resources.iter().map(Resource::name).collect();
    let mut seen: HashSet<String> = HashSet::new();
    let mut synthesized: Vec<Resource> = Vec::new();

    for resource in &resources {
        let mut chain: Vec<&Resource> = Vec::new();
        let mut ancestor = resource.parent();
        while let Some(parent) = ancestor {
            chain.push(parent);
            ancestor = parent.parent();
        }

        // root-most first; a name repeated in one chain keeps its outermost node
        for parent in chain.into_iter().rev() {
            if declared.contains(parent.name()) || !seen.insert(parent.name().to_string()) {
                continue;
            }
            tracing::trace!(
                parent = parent.name(),
                child = resource.name(),
                "discovered missing parent"
            );
            synthesized.push(parent.synthetic_parent(resource.tag()));
        }
    }

    if synthesized.is_empty() {
        return resources;
    }

    tracing::trace!(
        count = synthesized.len(),
        parents = %synthesized.iter().map(Resource::name).collect::<Vec<_>>().join(", "),
        "added missing parent resources with ops list, read"
    );
    synthesized.extend(resources);
    synthesized
}
