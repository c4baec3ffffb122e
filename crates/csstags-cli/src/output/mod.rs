use csstags_core::{Tag, TagKind};
use serde::Serialize;

use crate::cli::OutputFormat;

/// A tag together with the file it was found in.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct FileTag {
    pub path: String,
    pub name: String,
    pub kind: TagKind,
    pub line: u32,
}

impl FileTag {
    pub fn new(path: &str, tag: Tag) -> Self {
        Self {
            path: path.to_string(),
            name: tag.name,
            kind: tag.kind,
            line: tag.line,
        }
    }
}

/// Sort by name, then path and line, as a tags file expects.
pub fn sort_tags(tags: &mut [FileTag]) {
    tags.sort_by(|a, b| {
        a.name
            .cmp(&b.name)
            .then_with(|| a.path.cmp(&b.path))
            .then_with(|| a.line.cmp(&b.line))
    });
}

/// Render tags in the requested format. Empty output renders as an empty string
/// except for `json`, which renders `[]`.
pub fn render_tags(tags: &[FileTag], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Ctags => Ok(tags
            .iter()
            .map(ctags_line)
            .collect::<Vec<_>>()
            .join("\n")),
        OutputFormat::Json => Ok(serde_json::to_string_pretty(tags)?),
        OutputFormat::Jsonl => render_lines(tags),
    }
}

/// Print tags to stdout in the requested format.
pub fn output_tags(tags: &[FileTag], format: OutputFormat) -> anyhow::Result<()> {
    print_rendered(&render_tags(tags, format)?);
    Ok(())
}

fn ctags_line(tag: &FileTag) -> String {
    format!(
        "{}\t{}\t{};\"\t{}",
        tag.name,
        tag.path,
        tag.line,
        tag.kind.letter()
    )
}

/// One row of the kind listing.
#[derive(Clone, Debug, Eq, PartialEq, Serialize)]
pub struct KindRow {
    pub letter: char,
    pub name: &'static str,
    pub description: &'static str,
    pub enabled: bool,
}

/// Render the kind listing, one kind per row.
pub fn render_kinds(rows: &[KindRow], format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Ctags => {
            let mut lines = vec![String::from("#LETTER\tNAME\tENABLED\tDESCRIPTION")];
            lines.extend(rows.iter().map(|row| {
                let enabled = if row.enabled { "on" } else { "off" };
                format!(
                    "{}\t{}\t{enabled}\t{}",
                    row.letter, row.name, row.description
                )
            }));
            Ok(lines.join("\n"))
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(rows)?),
        OutputFormat::Jsonl => render_lines(rows),
    }
}

/// Print the kind listing to stdout.
pub fn output_kinds(rows: &[KindRow], format: OutputFormat) -> anyhow::Result<()> {
    print_rendered(&render_kinds(rows, format)?);
    Ok(())
}

fn render_lines<T: Serialize>(items: &[T]) -> anyhow::Result<String> {
    let lines = items
        .iter()
        .map(serde_json::to_string)
        .collect::<Result<Vec<_>, _>>()?;
    Ok(lines.join("\n"))
}

fn print_rendered(rendered: &str) {
    if !rendered.is_empty() {
        println!("{rendered}");
    }
}
