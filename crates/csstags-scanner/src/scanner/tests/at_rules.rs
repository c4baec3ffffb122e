use csstags_core::TagKind::{Class, Id, Selector};
use pretty_assertions::assert_eq;

use super::*;

#[test]
fn media_condition_emits_nothing() {
    let source = "@media screen and (max-width: 600px) {\n  .mobile { display: block; }\n}";
    let (tags, summary) = scan(source);
    assert_eq!(tags, vec![Tag::new("mobile", Class, 2)]);
    assert_eq!(summary.final_state, ParserState::Neutral);
}

#[test]
fn media_condition_spans_lines() {
    let mut scanner = detached();
    let state = scanner
        .advance("@media screen and", ParserState::Neutral)
        .expect("advance");
    assert_eq!(state, ParserState::InMedia);

    let state = scanner
        .advance("(min-width: 900px) {", state)
        .expect("advance");
    assert_eq!(state, ParserState::Neutral);

    let state = scanner.advance(".wide {}", state).expect("advance");
    assert_eq!(state, ParserState::Neutral);
    assert_eq!(scanner.into_sink(), vec![Tag::new("wide", Class, 3)]);
}

#[test]
fn media_keyword_alone_on_a_line() {
    let tags = tags_of("@media\nscreen {\n.m {}\n}");
    assert_eq!(tags, vec![Tag::new("m", Class, 3)]);
}

#[test]
fn import_skips_to_semicolon() {
    let tags = tags_of("@import url(\"theme.css\") screen;\n.x {");
    assert_eq!(tags, vec![Tag::new("x", Class, 2)]);
}

#[test]
fn import_spans_lines_until_semicolon() {
    let source = "@import url(a.css)\n  print, .nottag\n;\n#after {";
    let (tags, summary) = scan(source);
    assert_eq!(names(&tags), vec![("after ", Id)]);
    assert_eq!(summary.final_state, ParserState::InDefinition);
}

#[test]
fn namespace_skips_to_semicolon() {
    let tags = tags_of("@namespace svg url(http://www.w3.org/2000/svg);\n#canvas{}");
    assert_eq!(names(&tags), vec![("canvas", Id)]);
}

#[test]
fn font_face_body_emits_nothing() {
    let source = "@font-face {\n  font-family: 'Body Text';\n  src: url(body.woff2);\n}\n.body {";
    let tags = tags_of(source);
    assert_eq!(tags, vec![Tag::new("body", Class, 5)]);
}

#[test]
fn page_body_emits_nothing() {
    let tags = tags_of("@page :first { margin: 1in; }\n.print {");
    assert_eq!(tags, vec![Tag::new("print", Class, 2)]);
}

#[test]
fn unknown_at_rule_leaves_state_neutral() {
    let mut scanner = detached();
    let state = scanner
        .advance("@unknown", ParserState::Neutral)
        .expect("advance");
    assert_eq!(state, ParserState::Neutral);
    let state = scanner.advance(".after {", state).expect("advance");
    assert_eq!(state, ParserState::InDefinition);
    assert_eq!(names(&scanner.into_sink()), vec![("after", Class)]);
}

#[test]
fn unknown_at_rule_arguments_return_to_neutral_dispatch() {
    let tags = tags_of("@keyframes spin {");
    assert!(tags.iter().all(|t| !t.name.contains("keyframes")));
    assert_eq!(names(&tags), vec![("spin ", Selector)]);
}

#[test]
fn at_keyword_must_be_followed_by_whitespace() {
    let (tags, summary) = scan("@media{ .a {} }");
    assert_eq!(names(&tags), vec![("a", Class)]);
    assert_eq!(summary.final_state, ParserState::Neutral);
}
