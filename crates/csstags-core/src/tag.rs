//! The emitted tag record.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::kinds::TagKind;

/// One discovered symbol: a selector, class or id name.
///
/// Immutable once emitted; ownership passes to the tag sink.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
pub struct Tag {
    pub name: String,
    pub kind: TagKind,
    /// 1-based line on which the declaration was terminated.
    pub line: u32,
}

impl Tag {
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TagKind, line: u32) -> Self {
        Self {
            name: name.into(),
            kind,
            line,
        }
    }
}
