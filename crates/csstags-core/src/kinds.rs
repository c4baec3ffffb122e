//! Tag kinds and their static metadata.
//!
//! Every emitted tag carries a [`TagKind`]. The [`KINDS`] table is the
//! immutable registry exposed to hosts (`csstags kinds`), mirroring the
//! classic ctags kind list: one letter, a singular name, a plural description,
//! and whether the kind is enabled by default.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

/// The kind of a stylesheet tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TagKind {
    Class,
    Selector,
    Id,
}

impl TagKind {
    /// Single-letter code used in ctags output and kind filters.
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Class => 'c',
            Self::Selector => 's',
            Self::Id => 'i',
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Selector => "selector",
            Self::Id => "id",
        }
    }

    /// Look up a kind by its single-letter code.
    #[must_use]
    pub const fn from_letter(letter: char) -> Option<Self> {
        match letter {
            'c' => Some(Self::Class),
            's' => Some(Self::Selector),
            'i' => Some(Self::Id),
            _ => None,
        }
    }

    /// Static metadata for this kind.
    #[must_use]
    pub fn definition(self) -> &'static KindDefinition {
        match self {
            Self::Class => &KINDS[0],
            Self::Selector => &KINDS[1],
            Self::Id => &KINDS[2],
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TagKind {
    type Err = CoreError;

    /// Accepts either the letter (`c`) or the name (`class`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        if let (Some(letter), None) = (chars.next(), chars.next())
            && let Some(kind) = Self::from_letter(letter)
        {
            return Ok(kind);
        }

        KINDS
            .iter()
            .find(|def| def.name == s)
            .map(|def| def.kind)
            .ok_or_else(|| CoreError::UnknownKind(s.to_string()))
    }
}

/// Static description of one tag kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct KindDefinition {
    pub kind: TagKind,
    pub letter: char,
    pub name: &'static str,
    pub description: &'static str,
    pub enabled: bool,
}

/// Registry of every tag kind, in declaration order.
pub static KINDS: [KindDefinition; 3] = [
    KindDefinition {
        kind: TagKind::Class,
        letter: 'c',
        name: "class",
        description: "classes",
        enabled: true,
    },
    KindDefinition {
        kind: TagKind::Selector,
        letter: 's',
        name: "selector",
        description: "selectors",
        enabled: true,
    },
    KindDefinition {
        kind: TagKind::Id,
        letter: 'i',
        name: "id",
        description: "identities",
        enabled: true,
    },
];
