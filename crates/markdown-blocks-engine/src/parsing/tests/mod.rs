//! Tests for the block lexer driven through `parse`/`parse_with`.


use pretty_assertions::assert_eq;
use rstest::rstest;

use crate::blocks::{BlockKind, ListFormat};
use crate::parsing::{ParseOptions, UnterminatedFence, parse, parse_with};
use crate::tests::{bold, plain, texts};

fn parse_checked(md: &str) -> Vec<crate::blocks::Block> {
    let blocks = parse(md);
    invariants::check(&blocks);
    blocks
}

fn kinds(md: &str) -> Vec<&'static str> {
    parse_checked(md).iter().map(|b| b.kind.name()).collect()
}

#[test]
fn empty_document_has_no_blocks() {
    assert!(parse("").is_empty());
    assert!(parse("\n\n   \n").is_empty());
}

#[test]
fn heading_hello_world() {
    let blocks = parse_checked("# Hello World");
    assert_eq!(blocks.len(), 1);
    assert_eq!(
        blocks[0].kind,
        BlockKind::Heading {
            level: 1,
            rich_text: vec![plain("Hello World")],
        }
    );
}

#[rstest]
#[case("###### six", 6)]
#[case("  ## indented", 2)]
fn heading_levels(#[case] md: &str, #[case] level: u8) {
    let blocks = parse_checked(md);
    assert!(matches!(blocks[0].kind, BlockKind::Heading { level: l, .. } if l == level));
}

#[rstest]
#[case("#nospace")]
#[case("####### seven")]
fn heading_lookalikes_are_paragraphs(#[case] md: &str) {
    assert_eq!(kinds(md), vec!["paragraph"]);
}

#[test]
fn heading_text_is_tokenized() {
    let blocks = parse_checked("## A **b**");
    assert_eq!(blocks[0].rich_text().unwrap(), &[plain("A "), bold("b")]);
}

#[rstest]
#[case("---")]
#[case("***")]
#[case("  -----  ")]
fn rules(#[case] md: &str) {
    assert_eq!(kinds(md), vec!["horizontal_rule"]);
}

#[test]
fn mixed_rule_chars_are_not_a_rule() {
    assert_eq!(kinds("-*-"), vec!["paragraph"]);
}

#[test]
fn fenced_code_with_language() {
    let blocks = parse_checked("```typescript\nconst x = 1;\n```");
    assert_eq!(
        blocks[0].kind,
        BlockKind::Code {
            raw_text: "const x = 1;".into(),
            language: Some("typescript".into()),
        }
    );
    assert_eq!(blocks.len(), 1);
}

#[test]
fn fenced_code_keeps_inner_markup_literal() {
    let blocks = parse_checked("~~~\n# not a heading\n- not a list\n~~~\nafter");
    assert_eq!(
        blocks[0].kind,
        BlockKind::Code {
            raw_text: "# not a heading\n- not a list".into(),
            language: None,
        }
    );
    assert_eq!(texts(&blocks[1]), vec!["after"]);
}

#[test]
fn tilde_fence_is_not_closed_by_backticks() {
    let blocks = parse_checked("~~~\na\n```\nb\n~~~");
    assert_eq!(
        blocks[0].kind,
        BlockKind::Code {
            raw_text: "a\n```\nb".into(),
            language: None,
        }
    );
}

#[test]
fn unterminated_fence_consumes_to_end_by_default() {
    let blocks = parse_checked("```\nline one\n\n# still code");
    assert_eq!(blocks.len(), 1);
    assert_eq!(
        blocks[0].kind,
        BlockKind::Code {
            raw_text: "line one\n\n# still code".into(),
            language: None,
        }
    );
}

#[test]
fn unterminated_fence_can_reparse() {
    let options = ParseOptions {
        unterminated_fence: UnterminatedFence::Reparse,
    };
    let blocks = parse_with("```rust\n# heading", &options);
    assert_eq!(blocks.len(), 2);
    assert_eq!(blocks[0].kind.name(), "paragraph");
    assert_eq!(blocks[0].plain_text(), "```rust");
    assert!(matches!(blocks[1].kind, BlockKind::Heading { level: 1, .. }));
}

#[test]
fn indented_code_run() {
    let blocks = parse_checked("    let a = 1;\n\tlet b = 2;\nnext");
    assert_eq!(
        blocks[0].kind,
        BlockKind::Code {
            raw_text: "    let a = 1;\n\tlet b = 2;".into(),
            language: None,
        }
    );
    assert_eq!(kinds("    a\nnext")[1], "paragraph");
}

#[test]
fn task_items_checked_then_unchecked() {
    let blocks = parse_checked("- [x] done\n- [ ] not done");
    let formats: Vec<_> = blocks
        .iter()
        .map(|b| match &b.kind {
            BlockKind::ListItem { format, .. } => *format,
            other => panic!("expected list item, got {other:?}"),
        })
        .collect();
    assert_eq!(
        formats,
        vec![
            ListFormat::Task { checked: true },
            ListFormat::Task { checked: false }
        ]
    );
    assert_eq!(texts(&blocks[0]), vec!["done"]);
    assert_eq!(texts(&blocks[1]), vec!["not done"]);
}

#[test]
fn nested_and_ordered_list_items() {
    let blocks = parse_checked("1. one\n  - inner\n    3. deep");
    let summary: Vec<_> = blocks
        .iter()
        .map(|b| match &b.kind {
            BlockKind::ListItem { level, format, .. } => (*level, *format),
            other => panic!("expected list item, got {other:?}"),
        })
        .collect();
    assert_eq!(
        summary,
        vec![
            (0, ListFormat::Ordered { numbering: 1 }),
            (1, ListFormat::Unordered),
            (2, ListFormat::Ordered { numbering: 3 }),
        ]
    );
}

#[test]
fn emphasis_line_is_a_paragraph_not_a_list() {
    let blocks = parse_checked("*emphasis* here");
    assert_eq!(kinds("*emphasis* here"), vec!["paragraph"]);
    assert_eq!(texts(&blocks[0]), vec!["emphasis", " here"]);
}

#[test]
fn bare_list_marker_is_an_empty_item() {
    let blocks = parse_checked("-");
    assert_eq!(
        blocks[0].kind,
        BlockKind::ListItem {
            level: 0,
            format: ListFormat::Unordered,
            rich_text: vec![],
        }
    );
}

#[test]
fn blockquote_lazy_continuation_merges() {
    let blocks = parse_checked("> first\n> second");
    assert_eq!(blocks.len(), 1);
    assert_eq!(texts(&blocks[0]), vec!["first", " second"]);
}

#[test]
fn blockquote_bare_marker_splits_blocks() {
    let blocks = parse_checked("> first\n>\n> second");
    assert_eq!(blocks.len(), 2);
    assert_eq!(texts(&blocks[0]), vec!["first"]);
    assert_eq!(texts(&blocks[1]), vec!["second"]);
}

#[test]
fn blockquote_level_change_starts_new_block() {
    let blocks = parse_checked("> outer\n>> inner\n> > also inner");
    let levels: Vec<_> = blocks
        .iter()
        .map(|b| match b.kind {
            BlockKind::Blockquote { level, .. } => level,
            _ => 0,
        })
        .collect();
    assert_eq!(levels, vec![1, 2]);
    assert_eq!(texts(&blocks[1]), vec!["inner", " also inner"]);
}

#[test]
fn blockquote_run_ends_at_non_quote_line() {
    assert_eq!(kinds("> q\ntext"), vec!["blockquote", "paragraph"]);
}

#[test]
fn only_bare_quote_markers_emit_nothing() {
    assert!(parse_checked(">\n>>").is_empty());
}

#[test]
fn one_paragraph_per_line() {
    let blocks = parse_checked("one\ntwo\n\nthree");
    assert_eq!(blocks.len(), 3);
    assert_eq!(texts(&blocks[2]), vec!["three"]);
}

#[test]
fn crlf_leaves_carriage_return_in_text() {
    let blocks = parse_checked("a\r\nb");
    assert_eq!(texts(&blocks[0]), vec!["a\r"]);
}

#[test]
fn ids_are_distinct_and_fresh_per_parse() {
    let md = "# a\n- b\n- c\n> d\n---\ne";
    let first = parse_checked(md);
    let second = parse_checked(md);
    assert_eq!(first.len(), 6);
    assert!(first.iter().zip(&second).all(|(a, b)| a.id != b.id));
}

#[test]
fn precedence_heading_beats_list_and_quote() {
    assert_eq!(
        kinds("# h\n> q\n```\nc\n```\n    i\n- l\np"),
        vec!["heading", "blockquote", "code", "code", "list_item", "paragraph"]
    );
}

#[test]
fn dash_rule_beats_list_membership() {
    assert_eq!(kinds("- - -"), vec!["list_item"]);
    assert_eq!(kinds("---"), vec!["horizontal_rule"]);
}
