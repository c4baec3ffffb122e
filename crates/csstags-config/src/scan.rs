//! Scan configuration: which kinds, which files.

use csstags_core::TagKind;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Kind letters enabled by default (class, selector, id).
fn default_kinds() -> String {
    "csi".to_string()
}

fn default_extensions() -> Vec<String> {
    vec!["css".to_string()]
}

const fn default_respect_ignore() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScanConfig {
    /// Enabled kind letters, e.g. `"ci"` for classes and ids only.
    #[serde(default = "default_kinds")]
    pub kinds: String,

    /// File extensions (without the dot) scanned when walking directories.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,

    /// Globs excluded from directory walks.
    #[serde(default)]
    pub exclude: Vec<String>,

    /// Honor `.gitignore` and friends while walking.
    #[serde(default = "default_respect_ignore")]
    pub respect_ignore: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            kinds: default_kinds(),
            extensions: default_extensions(),
            exclude: Vec::new(),
            respect_ignore: default_respect_ignore(),
        }
    }
}

impl ScanConfig {
    /// Resolve `kinds` into tag kinds, in the order given, without duplicates.
    ///
    /// # Errors
    /// Returns [`ConfigError::InvalidValue`] for letters that name no kind.
    pub fn enabled_kinds(&self) -> Result<Vec<TagKind>, ConfigError> {
        parse_kind_letters(&self.kinds)
    }

    /// Whether a file extension is configured for scanning.
    #[must_use]
    pub fn handles_extension(&self, ext: &str) -> bool {
        self.extensions
            .iter()
            .any(|known| known.trim_start_matches('.').eq_ignore_ascii_case(ext))
    }
}

/// Parse a string of kind letters such as `"cs"`.
///
/// # Errors
/// Returns [`ConfigError::InvalidValue`] for letters that name no kind.
pub fn parse_kind_letters(letters: &str) -> Result<Vec<TagKind>, ConfigError> {
    let mut kinds = Vec::new();
    for letter in letters.chars().filter(|c| !c.is_whitespace()) {
        let kind = TagKind::from_letter(letter).ok_or_else(|| ConfigError::InvalidValue {
            field: "scan.kinds".to_string(),
            reason: format!("unknown kind letter '{letter}' (expected c, s or i)"),
        })?;
        if !kinds.contains(&kind) {
            kinds.push(kind);
        }
    }
    Ok(kinds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_are_correct() {
        let config = ScanConfig::default();
        assert_eq!(config.kinds, "csi");
        assert_eq!(config.extensions, vec!["css"]);
        assert!(config.exclude.is_empty());
        assert!(config.respect_ignore);
    }

    #[test]
    fn default_kinds_enable_everything() {
        let kinds = ScanConfig::default().enabled_kinds().expect("valid kinds");
        assert_eq!(kinds, vec![TagKind::Class, TagKind::Selector, TagKind::Id]);
    }

    #[test]
    fn kind_letters_deduplicate() {
        assert_eq!(
            parse_kind_letters("i c i").expect("valid kinds"),
            vec![TagKind::Id, TagKind::Class]
        );
        assert!(parse_kind_letters("").expect("empty is valid").is_empty());
    }

    #[test]
    fn unknown_kind_letter_is_rejected() {
        let err = parse_kind_letters("cx").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid configuration value for 'scan.kinds': unknown kind letter 'x' (expected c, s or i)"
        );
    }

    #[test]
    fn extensions_match_with_or_without_dot() {
        let config = ScanConfig {
            extensions: vec![".css".to_string(), "PCSS".to_string()],
            ..ScanConfig::default()
        };
        assert!(config.handles_extension("css"));
        assert!(config.handles_extension("pcss"));
        assert!(!config.handles_extension("scss"));
    }
}
