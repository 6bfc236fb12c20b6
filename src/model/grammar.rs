//! Resource token grammar.
//!
//! ```text
//! input    := "" | token ("," token)*
//! token    := ws (segment ws "/" ws)* segment ops? tagspec? ws
//! segment  := [A-Za-z0-9- ]+
//! ops      := "[" digit+ "]"
//! tagspec  := "::" [A-Za-z0-9-]+
//! ```
//!
//! The last segment names the resource, the ones before it name its
//! ancestors, root-most first. A token holds at most [`MAX_SEGMENTS`]
//! segments.

use once_cell::sync::Lazy;
use regex::Regex;

use super::ModelError;

/// Resource plus at most two ancestors.
pub const MAX_SEGMENTS: usize = 3;

static TOKEN_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(?P<segments>[A-Za-z0-9\- ]+(?:\s*/\s*[A-Za-z0-9\- ]+)*)(?:\[(?P<ops>[0-9]+)\])?(?:::(?P<tag>[A-Za-z0-9\-]+))?$",
    )
    .expect("resource token regex should be valid")
});

/// One comma-separated DSL fragment split into its parts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceToken {
    /// Raw segments, root-most ancestor first, the resource itself last
    pub segments: Vec<String>,
    /// Digits between the brackets, if any
    pub ops: Option<String>,
    /// Explicit tag after `::`, if any
    pub tag: Option<String>,
}

impl ResourceToken {
    /// Split `token` according to the grammar.
    ///
    /// # Errors
    ///
    /// [`ModelError::GrammarMismatch`] when the token does not match, or when
    /// it holds more than [`MAX_SEGMENTS`] segments.
    pub fn parse(token: &str) -> Result<Self, ModelError> {
        let trimmed = token.trim();
        let captures = TOKEN_REGEX.captures(trimmed).ok_or_else(|| {
            ModelError::grammar(
                token,
                "expected [parent/]name[[ops]][::tag] using letters, numbers, hyphens or spaces",
            )
        })?;

        let segments: Vec<String> = captures
            .name("segments")
            .map(|m| m.as_str())
            .unwrap_or_default()
            .split('/')
            .map(|s| s.trim().to_string())
            .collect();

        if segments.len() > MAX_SEGMENTS {
            return Err(ModelError::grammar(
                token,
                format!(
                    "nesting is limited to {} levels, found {}",
                    MAX_SEGMENTS,
                    segments.len()
                ),
            ));
        }

        Ok(ResourceToken {
            segments,
            ops: captures.name("ops").map(|m| m.as_str().to_string()),
            tag: captures.name("tag").map(|m| m.as_str().to_string()),
        })
    }

    /// The resource segment (always present).
    pub fn resource(&self) -> &str {
        self.segments.last().map(String::as_str).unwrap_or_default()
    }

    /// Ancestor segments, root-most first.
    pub fn ancestors(&self) -> &[String] {
        &self.segments[..self.segments.len().saturating_sub(1)]
    }
}
