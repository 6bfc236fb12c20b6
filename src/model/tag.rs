use serde::Serialize;
use std::cmp::Ordering;

use super::Resource;

/// Name of the reserved tag for operational endpoints.
pub const SYSTEM_TAG: &str = "system";

/// A grouping label and the collections that use it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub name: String,
    pub used_in_collection: Vec<String>,
}

impl Tag {
    pub fn new(name: impl Into<String>, used_in_collection: Vec<String>) -> Self {
        Tag {
            name: name.into(),
            used_in_collection,
        }
    }

    /// The reserved `system` tag, covering health checks, monitoring and caching.
    pub fn system() -> Self {
        Tag::new(
            SYSTEM_TAG,
            vec![
                "health checks".to_string(),
                "monitoring".to_string(),
                "caching".to_string(),
            ],
        )
    }

    pub fn matches(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }
}

/// Collect the unique tags of `resources`.
///
/// Tags are matched ignoring case; the first spelling seen wins. Each tag
/// lists the collections using it in resource order. The result always holds
/// the `system` tag and is stably sorted by name, ignoring case.
pub fn aggregate_tags(resources: &[Resource]) -> Vec<Tag> {
    let mut tags = vec![Tag::system()];

    for resource in resources {
        match tags.iter_mut().find(|tag| tag.matches(resource.tag())) {
            Some(existing) => existing
                .used_in_collection
                .push(resource.collection().to_string()),
            None => tags.insert(
                0,
                Tag::new(resource.tag(), vec![resource.collection().to_string()]),
            ),
        }
    }

    tags.sort_by(|a, b| compare_ignore_case(&a.name, &b.name));

    tracing::trace!(
        count = tags.len(),
        tags = %tags.iter().map(|t| t.name.as_str()).collect::<Vec<_>>().join(", "),
        "found unique tags"
    );
    tags
}

fn compare_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}
