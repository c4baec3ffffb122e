//! Stylesheet discovery.
//!
//! Directories are walked with the `ignore` crate. By default `.gitignore`,
//! `.ignore`, hidden-file rules and a custom `.csstagsignore` apply; with
//! `respect_ignore` off every file is visited. Exclude globs apply in both
//! modes. Only files whose extension is configured are returned.

use std::path::{Path, PathBuf};

use anyhow::Context;
use csstags_config::ScanConfig;
use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;

/// Build a file walker over `root`.
///
/// # Errors
/// Fails when an exclude glob does not parse.
pub fn build_walker(
    root: &Path,
    respect_ignore: bool,
    exclude: &[String],
) -> anyhow::Result<ignore::Walk> {
    let mut builder = WalkBuilder::new(root);

    if respect_ignore {
        builder.add_custom_ignore_filename(".csstagsignore");
    } else {
        builder.standard_filters(false);
        builder.hidden(false);
    }

    if !exclude.is_empty() {
        let mut overrides = OverrideBuilder::new(root);
        for glob in exclude {
            overrides
                .add(&format!("!{glob}"))
                .with_context(|| format!("invalid exclude glob '{glob}'"))?;
        }
        builder.overrides(overrides.build().context("failed to build exclude globs")?);
    }

    Ok(builder.build())
}

/// Stylesheet files under `root`, sorted by path.
///
/// A `root` that is itself a file is returned as is, whatever its extension.
///
/// # Errors
/// Fails when an exclude glob does not parse.
pub fn stylesheet_files(
    root: &Path,
    scan: &ScanConfig,
    respect_ignore: bool,
    exclude: &[String],
) -> anyhow::Result<Vec<PathBuf>> {
    if root.is_file() {
        return Ok(vec![root.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in build_walker(root, respect_ignore, exclude)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(error) => {
                tracing::warn!(%error, "skipping unreadable walk entry");
                continue;
            }
        };
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            continue;
        }
        let path = entry.into_path();
        if path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| scan.handles_extension(ext))
        {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}
