use std::fs;
use std::io::{self, Read};
use std::path::Path;

use anyhow::Context;
use csstags_config::{CsstagsConfig, parse_kind_letters};
use csstags_core::{Tag, TagKind};
use csstags_scanner::{KindFilter, StrSource};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ScanArgs;
use crate::output::{self, FileTag};
use crate::walk;

/// Path argument that reads the stylesheet from stdin.
const STDIN_PATH: &str = "-";

/// Handle `csstags scan`.
pub fn handle(args: &ScanArgs, config: &CsstagsConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let kinds = match &args.kinds {
        Some(letters) => parse_kind_letters(letters)?,
        None => config.scan.enabled_kinds()?,
    };

    let mut tags = collect_tags(args, config, &kinds, &mut io::stdin().lock())?;
    if args.sort || config.output.sort {
        output::sort_tags(&mut tags);
    }

    output::output_tags(&tags, flags.resolve_format(config.output.format))
}

/// Scan every path in `args`, in argument order. `-` reads from `stdin`.
fn collect_tags<R: Read>(
    args: &ScanArgs,
    config: &CsstagsConfig,
    kinds: &[TagKind],
    stdin: &mut R,
) -> anyhow::Result<Vec<FileTag>> {
    let mut exclude = config.scan.exclude.clone();
    exclude.extend(args.exclude.iter().cloned());
    let respect_ignore = config.scan.respect_ignore && !args.no_ignore;

    let mut tags = Vec::new();
    for path in &args.paths {
        if path.as_os_str() == STDIN_PATH {
            let found = scan_stdin(stdin, kinds).context("failed to scan stdin")?;
            tags.extend(found.into_iter().map(|tag| FileTag::new(STDIN_PATH, tag)));
            continue;
        }

        if !path.exists() {
            tracing::warn!(path = %path.display(), "skipping missing path");
            continue;
        }

        for file in walk::stylesheet_files(path, &config.scan, respect_ignore, &exclude)? {
            let shown = display_path(&file);
            match scan_file(&file, kinds) {
                Ok(found) => tags.extend(found.into_iter().map(|tag| FileTag::new(&shown, tag))),
                Err(error) => tracing::warn!(path = %shown, "skipping file: {error:#}"),
            }
        }
    }

    Ok(tags)
}

/// Scan one file. Invalid UTF-8 is replaced rather than rejected.
fn scan_file(path: &Path, kinds: &[TagKind]) -> anyhow::Result<Vec<Tag>> {
    let bytes = fs::read(path).with_context(|| format!("failed to read {}", path.display()))?;
    scan_bytes(&path.display().to_string(), &bytes, kinds)
}

/// Scan all of `reader`, decoded the same way as files.
fn scan_stdin<R: Read>(reader: &mut R, kinds: &[TagKind]) -> anyhow::Result<Vec<Tag>> {
    let mut bytes = Vec::new();
    reader.read_to_end(&mut bytes)?;
    scan_bytes(STDIN_PATH, &bytes, kinds)
}

fn scan_bytes(label: &str, bytes: &[u8], kinds: &[TagKind]) -> anyhow::Result<Vec<Tag>> {
    let text = String::from_utf8_lossy(bytes);

    let mut tags = Vec::new();
    let summary = csstags_scanner::run(
        StrSource::new(&text),
        KindFilter::new(&mut tags, kinds.iter().copied()),
    )?;
    tracing::debug!(
        path = label,
        lines = summary.lines,
        kept = tags.len(),
        final_state = %summary.final_state,
        "scanned file"
    );
    Ok(tags)
}

/// Walked paths under `.` are shown without the `./` prefix.
fn display_path(path: &Path) -> String {
    path.strip_prefix(".")
        .unwrap_or(path)
        .display()
        .to_string()
}
