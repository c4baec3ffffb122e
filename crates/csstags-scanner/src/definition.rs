//! Static parser registration: name, kinds, and file extensions.

use std::path::Path;

use csstags_core::{KINDS, KindDefinition};

/// Everything a host needs to register the stylesheet tagger.
#[derive(Debug)]
pub struct ParserDefinition {
    pub name: &'static str,
    pub kinds: &'static [KindDefinition],
    pub extensions: &'static [&'static str],
}

/// The stylesheet tagger. Applies to the whole stylesheet family, `.css` only.
pub static STYLESHEET: ParserDefinition = ParserDefinition {
    name: "SCSS",
    kinds: &KINDS,
    extensions: &["css"],
};

impl ParserDefinition {
    /// Whether `ext` (without the dot) is one of this parser's extensions.
    #[must_use]
    pub fn handles_extension(&self, ext: &str) -> bool {
        self.extensions
            .iter()
            .any(|known| known.eq_ignore_ascii_case(ext))
    }

    #[must_use]
    pub fn handles_path(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| self.handles_extension(ext))
    }
}
