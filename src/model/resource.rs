use serde::Serialize;

use super::grammar::ResourceToken;
use super::inflect::{normalize, pluralize, singularize};
use super::parameter::{nested_key, IdParameter};
use super::{ModelError, ModelOptions, OperationSet};

/// A fully resolved API resource.
///
/// A resource exclusively owns its ancestor chain through [`Resource::parent`].
/// Values are only produced by [`Resource::parse`] (or by the missing-parent
/// synthesis) and are never modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    name: String,
    collection: String,
    parent: Option<Box<Resource>>,
    tag: String,
    id_parameter: IdParameter,
    ops: OperationSet,
    collection_path: Option<String>,
    resource_path: Option<String>,
    /// Placeholder keys of the ancestor segments in this resource's paths, root-most first.
    parent_keys: Vec<String>,
    /// Ancestor names and the name joined with `-`, e.g. `customer-address`
    qualified_name: String,
}

impl Resource {
    /// Build a resource (and its ancestors) from one DSL token such as
    /// `location/address[96]::mytag`.
    ///
    /// Ancestors named in the token get the default operations of `options`
    /// and no explicit tag.
    pub fn parse(token: &str, options: &ModelOptions) -> Result<Self, ModelError> {
        let parsed = ResourceToken::parse(token)?;

        let mut parent: Option<Resource> = None;
        for segment in parsed.ancestors() {
            let name = normalized_name(segment, token)?;
            parent = Some(Resource::assemble(name, parent, options.default_ops(), None));
        }

        let name = normalized_name(parsed.resource(), token)?;
        let ops = OperationSet::resolve(parsed.ops.as_deref(), options.default_ops())?;
        Ok(Resource::assemble(name, parent, ops, parsed.tag))
    }

    /// Put a resource together from an already normalized singular name.
    fn assemble(
        name: String,
        parent: Option<Resource>,
        ops: OperationSet,
        explicit_tag: Option<String>,
    ) -> Self {
        let collection = pluralize(&name);
        let tag = explicit_tag
            .or_else(|| parent.as_ref().map(|p| p.tag.clone()))
            .unwrap_or_else(|| name.clone());
        let id_parameter = IdParameter::new(&name, parent.is_some());

        let (prefix, parent_keys) = match &parent {
            Some(p) => {
                let mut keys = p.parent_keys.clone();
                keys.push(nested_key(&p.name));
                (p.nested_item_path(), keys)
            }
            None => (String::new(), Vec::new()),
        };
        let collection_base = format!("{prefix}/{collection}");
        let qualified_name = match &parent {
            Some(p) => format!("{}-{name}", p.qualified_name),
            None => name.clone(),
        };

        Resource {
            collection_path: ops
                .has_collection_ops()
                .then(|| collection_base.clone()),
            resource_path: ops
                .has_resource_ops()
                .then(|| format!("{collection_base}/{{{}}}", id_parameter.key)),
            name,
            collection,
            parent: parent.map(Box::new),
            tag,
            id_parameter,
            ops,
            parent_keys,
            qualified_name,
        }
    }

    /// Minimal stand-in for this resource when it is only referenced as a
    /// parent: list and read only, tagged like the child that referenced it.
    pub(crate) fn synthetic_parent(&self, tag: &str) -> Self {
        Resource::assemble(
            self.name.clone(),
            self.parent.as_deref().cloned(),
            OperationSet::synthetic_parent(),
            Some(tag.to_string()),
        )
    }

    /// Item path of this resource as seen from a child: ancestor segments
    /// always use `{<name>Id}` placeholders so nested keys never collide.
    fn nested_item_path(&self) -> String {
        let prefix = self
            .parent
            .as_ref()
            .map(|p| p.nested_item_path())
            .unwrap_or_default();
        format!("{prefix}/{}/{{{}}}", self.collection, nested_key(&self.name))
    }

    /// Normalized singular name, e.g. `address`
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Plural collection name, e.g. `addresses`
    pub fn collection(&self) -> &str {
        &self.collection
    }

    pub fn parent(&self) -> Option<&Resource> {
        self.parent.as_deref()
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn id_parameter(&self) -> &IdParameter {
        &self.id_parameter
    }

    pub fn ops(&self) -> &OperationSet {
        &self.ops
    }

    /// Collection endpoint, present only with collection operations
    pub fn collection_path(&self) -> Option<&str> {
        self.collection_path.as_deref()
    }

    /// Item endpoint, present only with item operations
    pub fn resource_path(&self) -> Option<&str> {
        self.resource_path.as_deref()
    }

    pub fn parent_keys(&self) -> &[String] {
        &self.parent_keys
    }

    /// Name qualified by its ancestors, e.g. `customer-address`
    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Number of ancestors above this resource.
    pub fn depth(&self) -> usize {
        self.parent_keys.len()
    }
}

fn normalized_name(segment: &str, token: &str) -> Result<String, ModelError> {
    let name = singularize(&normalize(segment));
    if name.is_empty() {
        return Err(ModelError::invalid_name(
            segment,
            format!("resource name in ({token}) is empty after removing disallowed characters"),
        ));
    }
    Ok(name)
}
