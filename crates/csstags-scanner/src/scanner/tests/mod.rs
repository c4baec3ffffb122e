use csstags_core::{Tag, TagKind};
use pretty_assertions::assert_eq;

use super::*;
use crate::source::StrSource;

mod at_rules;

/// Run a full scan over `source`, returning the tags and the summary.
fn scan(source: &str) -> (Vec<Tag>, ScanSummary) {
    let mut tags = Vec::new();
    let summary = Scanner::new(StrSource::new(source), &mut tags)
        .run()
        .expect("in-memory scan should not fail");
    (tags, summary)
}

fn tags_of(source: &str) -> Vec<Tag> {
    scan(source).0
}

fn names(tags: &[Tag]) -> Vec<(&str, TagKind)> {
    tags.iter().map(|t| (t.name.as_str(), t.kind)).collect()
}

/// A scanner whose source is already exhausted, for driving `advance` by hand.
fn detached() -> Scanner<StrSource<'static>, Vec<Tag>> {
    Scanner::new(StrSource::new(""), Vec::new())
}

#[test]
fn empty_input_emits_nothing() {
    let (tags, summary) = scan("");
    assert!(tags.is_empty());
    assert_eq!(summary.lines, 0);
    assert_eq!(summary.final_state, ParserState::Neutral);
}
