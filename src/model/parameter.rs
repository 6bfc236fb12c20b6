use serde::Serialize;

use super::inflect::{to_camel_case, to_pascal_case};

/// Path parameter identifying a single item of a resource.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IdParameter {
    /// Reference label, e.g. `AddressIdParam`
    pub name: String,
    /// Route parameter key: `id` for top-level resources, `addressId` for nested ones
    pub key: String,
}

impl IdParameter {
    pub fn new(singular_name: &str, has_parent: bool) -> Self {
        IdParameter {
            name: format!("{}IdParam", to_pascal_case(singular_name)),
            key: if has_parent {
                nested_key(singular_name)
            } else {
                "id".to_string()
            },
        }
    }
}

/// Key used for `singular_name` wherever it appears as an ancestor segment
/// of a nested path: `location` → `locationId`.
pub(crate) fn nested_key(singular_name: &str) -> String {
    format!("{}Id", to_camel_case(singular_name))
}
