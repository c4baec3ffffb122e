//! Parser state and the per-character transition table.
//!
//! ```text
//! neutral ──/*──▶ in_comment ──*/──▶ neutral
//! neutral ──@media──▶ in_media ──{──▶ neutral
//! neutral ──@import / @namespace──▶ in_import / in_namespace ──;──▶ neutral
//! neutral ──@page / @font-face──▶ in_page / in_font_face ─┐
//! neutral ──declaration {──▶ in_definition ───────────────┤──}──▶ neutral
//!                            in_*_string ◀──' or "────────┘
//!                            in_*_string ──closing quote──▶ in_definition
//! ```
//!
//! A closing quote always lands in `in_definition`, even when the string was
//! opened inside `@page` or `@font-face`. The three body states share one
//! transition table, so the difference is never observable in the tags.

use std::fmt;

use csstags_core::TagKind;

/// The only context carried from one line to the next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ParserState {
    #[default]
    Neutral,
    InComment,
    InSingleString,
    InDoubleString,
    InDefinition,
    InMedia,
    InImport,
    InNamespace,
    InPage,
    InFontFace,
    AtEnd,
}

/// What the scanner should do with the character under the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// Consume the character, state unchanged.
    Stay,
    /// Consume the character and switch state.
    Enter(ParserState),
    /// Hand the cursor to the declaration extractor.
    Declaration(TagKind),
    /// Consume the `@` and read the at-rule keyword.
    AtRule,
}

impl ParserState {
    /// Transition for character `c`, given the raw character before it.
    #[must_use]
    pub fn step(self, c: char, prev: char) -> Step {
        match self {
            Self::Neutral => match c {
                '.' => Step::Declaration(TagKind::Class),
                '#' => Step::Declaration(TagKind::Id),
                '@' => Step::AtRule,
                '*' if prev == '/' => Step::Enter(Self::InComment),
                c if c.is_alphanumeric() => Step::Declaration(TagKind::Selector),
                _ => Step::Stay,
            },
            Self::InComment => match c {
                '/' if prev == '*' => Step::Enter(Self::Neutral),
                _ => Step::Stay,
            },
            Self::InSingleString => match c {
                '\'' if prev != '\\' => Step::Enter(Self::InDefinition),
                _ => Step::Stay,
            },
            Self::InDoubleString => match c {
                '"' if prev != '\\' => Step::Enter(Self::InDefinition),
                _ => Step::Stay,
            },
            Self::InMedia => match c {
                '{' => Step::Enter(Self::Neutral),
                _ => Step::Stay,
            },
            Self::InImport | Self::InNamespace => match c {
                ';' => Step::Enter(Self::Neutral),
                _ => Step::Stay,
            },
            Self::InPage | Self::InFontFace | Self::InDefinition => match c {
                '}' => Step::Enter(Self::Neutral),
                '\'' => Step::Enter(Self::InSingleString),
                '"' => Step::Enter(Self::InDoubleString),
                _ => Step::Stay,
            },
            Self::AtEnd => Step::Stay,
        }
    }

    /// Map the identifier following `@` to the state it opens.
    ///
    /// Returns `None` for at-rules that are not tracked.
    #[must_use]
    pub fn from_at_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "media" => Some(Self::InMedia),
            "import" => Some(Self::InImport),
            "namespace" => Some(Self::InNamespace),
            "page" => Some(Self::InPage),
            "font-face" => Some(Self::InFontFace),
            _ => None,
        }
    }

    /// States whose `}` closes the block and whose quotes open strings.
    #[must_use]
    pub const fn is_body(self) -> bool {
        matches!(self, Self::InPage | Self::InFontFace | Self::InDefinition)
    }

    #[must_use]
    pub const fn is_at_end(self) -> bool {
        matches!(self, Self::AtEnd)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Neutral => "neutral",
            Self::InComment => "in_comment",
            Self::InSingleString => "in_single_string",
            Self::InDoubleString => "in_double_string",
            Self::InDefinition => "in_definition",
            Self::InMedia => "in_media",
            Self::InImport => "in_import",
            Self::InNamespace => "in_namespace",
            Self::InPage => "in_page",
            Self::InFontFace => "in_font_face",
            Self::AtEnd => "at_end",
        }
    }
}

impl fmt::Display for ParserState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
