//! Operation set decoding.
//!
//! A resource exposes a subset of eight HTTP-style capabilities, selected by
//! an operations bitmask:
//!
//! | Bit | Capability | HTTP |
//! |----:|------------|------|
//! | 1   | list         | `GET` collection |
//! | 2   | create       | `POST` collection |
//! | 4   | create-async | `POST` collection, answered asynchronously |
//! | 8   | read         | `GET` item |
//! | 16  | exists       | `HEAD` item |
//! | 32  | replace      | `PUT` item |
//! | 64  | update       | `PATCH` item |
//! | 128 | delete       | `DELETE` item |
//!
//! `create` and `create-async` are mutually exclusive.

use serde::Serialize;
use std::fmt;

use super::ModelError;

/// Named capabilities of one resource plus the two derived flags.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationSet {
    list: bool,
    create: bool,
    create_async: bool,
    read: bool,
    exists: bool,
    replace: bool,
    update: bool,
    delete: bool,
    has_collection_ops: bool,
    has_resource_ops: bool,
}

impl OperationSet {
    pub const LIST: u32 = 1;
    pub const CREATE: u32 = 2;
    pub const CREATE_ASYNC: u32 = 4;
    pub const READ: u32 = 8;
    pub const EXISTS: u32 = 16;
    pub const REPLACE: u32 = 32;
    pub const UPDATE: u32 = 64;
    pub const DELETE: u32 = 128;

    /// Fallback default when nothing is configured: list, create, read,
    /// replace, update and delete.
    pub const LEGACY_DEFAULT: u32 = 235;

    /// Modifier given to synthesized parents: list and read only.
    pub const SYNTHETIC_PARENT: u32 = Self::LIST | Self::READ;

    const NAMES: [(u32, &'static str); 8] = [
        (Self::LIST, "list"),
        (Self::CREATE, "create"),
        (Self::CREATE_ASYNC, "create(async)"),
        (Self::READ, "read"),
        (Self::EXISTS, "exists"),
        (Self::REPLACE, "replace"),
        (Self::UPDATE, "update"),
        (Self::DELETE, "delete"),
    ];

    /// Decode an operations bitmask.
    ///
    /// # Errors
    ///
    /// - [`ModelError::OperationsRange`] when `modifier` is outside `[1, 255]`
    /// - [`ModelError::ConflictingCreateSemantics`] when bits 2 and 4 are both set
    pub fn decode(modifier: u32) -> Result<Self, ModelError> {
        if !(1..=255).contains(&modifier) {
            return Err(ModelError::OperationsRange {
                value: modifier.to_string(),
            });
        }

        if modifier & (Self::CREATE | Self::CREATE_ASYNC) == Self::CREATE | Self::CREATE_ASYNC {
            return Err(ModelError::ConflictingCreateSemantics { value: modifier });
        }
        Ok(Self::from_bits(modifier))
    }

    /// Flags of an already validated mask.
    fn from_bits(modifier: u32) -> Self {
        let has_any = |bits: u32| modifier & bits != 0;
        OperationSet {
            list: has_any(Self::LIST),
            create: has_any(Self::CREATE),
            create_async: has_any(Self::CREATE_ASYNC),
            read: has_any(Self::READ),
            exists: has_any(Self::EXISTS),
            replace: has_any(Self::REPLACE),
            update: has_any(Self::UPDATE),
            delete: has_any(Self::DELETE),
            has_collection_ops: has_any(Self::LIST | Self::CREATE | Self::CREATE_ASYNC),
            has_resource_ops: has_any(
                Self::READ | Self::EXISTS | Self::REPLACE | Self::UPDATE | Self::DELETE,
            ),
        }
    }

    /// The set behind [`Self::LEGACY_DEFAULT`].
    pub fn legacy_default() -> Self {
        Self::from_bits(Self::LEGACY_DEFAULT)
    }

    /// The list + read set given to synthesized parents.
    pub fn synthetic_parent() -> Self {
        Self::from_bits(Self::SYNTHETIC_PARENT)
    }

    /// Decode a modifier written as digits, e.g. the `96` in `invoice[96]`.
    ///
    /// Digits that do not fit an integer are reported as a range error, the
    /// same as any other out-of-range value.
    pub fn parse_modifier(raw: &str) -> Result<Self, ModelError> {
        let trimmed = raw.trim();
        let value = trimmed
            .parse::<u32>()
            .map_err(|_| ModelError::OperationsRange {
                value: trimmed.to_string(),
            })?;
        Self::decode(value)
    }

    /// Decode `modifier` when present, otherwise return `default`.
    pub fn resolve(modifier: Option<&str>, default: OperationSet) -> Result<Self, ModelError> {
        match modifier {
            Some(raw) => Self::parse_modifier(raw),
            None => Ok(default),
        }
    }

    /// Re-encode the capabilities as a bitmask.
    pub fn bits(&self) -> u32 {
        self.flags()
            .iter()
            .zip(Self::NAMES.iter())
            .filter(|(on, _)| **on)
            .map(|(_, (bit, _))| *bit)
            .sum()
    }

    /// Names of the active capabilities in fixed order.
    pub fn names(&self) -> Vec<&'static str> {
        self.flags()
            .iter()
            .zip(Self::NAMES.iter())
            .filter(|(on, _)| **on)
            .map(|(_, (_, name))| *name)
            .collect()
    }

    fn flags(&self) -> [bool; 8] {
        [
            self.list,
            self.create,
            self.create_async,
            self.read,
            self.exists,
            self.replace,
            self.update,
            self.delete,
        ]
    }

    pub fn list(&self) -> bool {
        self.list
    }

    pub fn create(&self) -> bool {
        self.create
    }

    pub fn create_async(&self) -> bool {
        self.create_async
    }

    pub fn read(&self) -> bool {
        self.read
    }

    pub fn exists(&self) -> bool {
        self.exists
    }

    pub fn replace(&self) -> bool {
        self.replace
    }

    pub fn update(&self) -> bool {
        self.update
    }

    pub fn delete(&self) -> bool {
        self.delete
    }

    /// Any of list, create or create-async.
    pub fn has_collection_ops(&self) -> bool {
        self.has_collection_ops
    }

    /// Any of read, exists, replace, update or delete.
    pub fn has_resource_ops(&self) -> bool {
        self.has_resource_ops
    }
}

impl fmt::Display for OperationSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.names().join(", "))
    }
}
