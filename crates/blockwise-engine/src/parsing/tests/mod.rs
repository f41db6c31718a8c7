//! End-to-end block parsing scenarios.
//!
//! Every parse here also runs the structural invariant checks.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::parsing::{
    ParseOptions, ParsedDoc,
    blocks::{BlockKind, BlockNode},
    parse_lines, parse_str,
    snapshot::{invariants, normalize},
};

pub(super) fn parse(src: &str) -> ParsedDoc {
    let doc = parse_str(src).unwrap();
    invariants(&doc.root, doc.line_count);
    doc
}

pub(super) fn outline(src: &str) -> String {
    normalize(&parse(src).root).to_string()
}

/// Top-level blocks as (kind, raw lines).
pub(super) fn blocks(src: &str) -> Vec<(BlockKind, Vec<String>)> {
    parse(src)
        .root
        .children
        .into_iter()
        .map(|n| (n.kind, n.raw_lines))
        .collect()
}

pub(super) fn lines(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| (*s).to_string()).collect()
}

pub(super) fn range(node: &BlockNode) -> (usize, usize) {
    (node.start_line, node.end_line)
}

#[test]
fn heading_then_paragraph() {
    assert_eq!(
        outline("# Title\n\nSome text"),
        "Document [1-3]\n  Heading(1) [1-1]\n    | Title\n  Paragraph [3-3]\n    | Some text\n"
    );
}

#[test]
fn setext_heading_is_not_a_thematic_break() {
    let doc = parse("Title\n=====");
    assert_eq!(doc.root.children.len(), 1);
    let heading = &doc.root.children[0];
    assert_eq!(heading.kind, BlockKind::SetextHeading { level: 1 });
    assert_eq!(heading.content(), "Title");
    assert_eq!(range(heading), (1, 2));
}

#[test]
fn setext_heading_takes_the_whole_paragraph() {
    assert_eq!(
        blocks("one\ntwo\n---"),
        vec![(BlockKind::SetextHeading { level: 2 }, lines(&["one", "two"]))]
    );
}

#[test]
fn star_rule_under_paragraph_is_a_break() {
    assert_eq!(
        blocks("text\n***"),
        vec![
            (BlockKind::Paragraph, lines(&["text"])),
            (BlockKind::ThematicBreak, vec![]),
        ]
    );
}

#[test]
fn empty_input_is_an_empty_document() {
    let doc = parse("");
    assert_eq!(doc.line_count, 0);
    assert_eq!(doc.root.kind, BlockKind::Document);
    assert!(doc.root.children.is_empty());
    assert_eq!(range(&doc.root), (1, 1));
}

#[test]
fn blank_only_input_has_no_blocks() {
    let doc = parse("\n  \n\t\n");
    assert_eq!(doc.line_count, 3);
    assert!(doc.root.children.is_empty());
}

#[rstest]
#[case("# foo ##", 1, "foo")]
#[case("###### six", 6, "six")]
#[case("## ", 2, "")]
#[case("#\tTabbed #", 1, "Tabbed")]
#[case("   ### indented", 3, "indented")]
fn atx_headings(#[case] src: &str, #[case] level: u8, #[case] content: &str) {
    assert_eq!(
        blocks(src),
        vec![(BlockKind::Heading { level }, lines(&[content]))]
    );
}

#[test]
fn very_long_heading_stays_a_heading() {
    let src = format!("# {}", "a ".repeat(200_000));
    let doc = parse(&src);
    assert_eq!(doc.root.children.len(), 1);
    let heading = &doc.root.children[0];
    assert_eq!(heading.kind, BlockKind::Heading { level: 1 });
    assert_eq!(heading.content().len(), 399_999);
}

#[rstest]
#[case("#5 bolt")]
#[case("####### seven")]
#[case("#hashtag")]
fn not_headings(#[case] src: &str) {
    assert_eq!(blocks(src), vec![(BlockKind::Paragraph, lines(&[src]))]);
}

#[test]
fn heading_interrupts_paragraph() {
    let doc = parse("text\n## h\nmore");
    let ranges: Vec<(usize, usize)> = doc.root.children.iter().map(range).collect();
    assert_eq!(ranges, vec![(1, 1), (2, 2), (3, 3)]);
}

#[test]
fn paragraph_lines_drop_leading_whitespace() {
    assert_eq!(
        blocks("  first\n   second"),
        vec![(BlockKind::Paragraph, lines(&["first", "second"]))]
    );
}

#[rstest]
#[case("***")]
#[case(" - - -")]
#[case("_\t_ _")]
fn thematic_breaks(#[case] src: &str) {
    assert_eq!(blocks(src), vec![(BlockKind::ThematicBreak, vec![])]);
}

#[test]
fn crlf_and_nul_are_normalized() {
    assert_eq!(
        blocks("a\0b\r\nc\r\n"),
        vec![(BlockKind::Paragraph, lines(&["a\u{FFFD}b", "c"]))]
    );
}

#[test]
fn parse_lines_numbers_from_one() {
    let doc = parse_lines(["# h", "", "text"], ParseOptions::default()).unwrap();
    invariants(&doc.root, doc.line_count);
    assert_eq!(doc.line_count, 3);
    assert_eq!(range(&doc.root.children[1]), (3, 3));
}

#[test]
fn walk_visits_every_node() {
    let doc = parse("> - a\n>   b\n\n---");
    let kinds: Vec<&BlockKind> = doc.root.walk().map(|n| &n.kind).collect();
    assert_eq!(kinds.len(), 6);
    assert_eq!(kinds[0], &BlockKind::Document);
    assert_eq!(kinds[5], &BlockKind::ThematicBreak);
}
