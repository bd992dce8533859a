//! Whole-document parsing tests.
//!
//! Each case feeds complete text through `parse_str` and compares against
//! the expected document or error.


use crate::models::{Block, Document, Heading, Item, Priority};
use crate::parsing::{parse, parse_reader, parse_str};
use pretty_assertions::assert_eq;
use rstest::rstest;

fn doc(blocks: Vec<Block>) -> Document {
    Document::from_blocks(blocks)
}

fn block(text: &str, level: usize, items: Vec<Item>) -> Block {
    Block::new(Heading::new(text, level), items)
}

fn one_with(checked: bool, priority: Priority) -> Document {
    doc(vec![block(
        "one",
        1,
        vec![Item::new("two", checked, priority)],
    )])
}

#[rstest]
#[case("")]
#[case(" ")]
#[case("\n")]
#[case("\n ")]
#[case("\n\n")]
fn blank_text_is_empty_document(#[case] input: &str) {
    assert_eq!(parse_str(input).unwrap(), Document::new());
}

#[rstest]
#[case("# one")]
#[case("\n# one")]
#[case("#   one")]
#[case("# one\n\n")]
#[case("\n\n# one\n\n")]
fn single_heading(#[case] input: &str) {
    assert_eq!(parse_str(input).unwrap(), doc(vec![block("one", 1, vec![])]));
}

#[rstest]
#[case("# one\n# two\n", 1, 1)]
#[case("\n\n#   one\n# two\n\n", 1, 1)]
#[case("# one\n## two\n", 1, 2)]
#[case("## one\n# two\n", 2, 1)]
#[case("## one\n## two\n", 2, 2)]
fn two_headings_keep_levels(#[case] input: &str, #[case] first: usize, #[case] second: usize) {
    assert_eq!(
        parse_str(input).unwrap(),
        doc(vec![block("one", first, vec![]), block("two", second, vec![])])
    );
}

#[rstest]
#[case("# one\n- two")]
#[case("# one\n* two")]
#[case("# one\n*   two\n")]
#[case("# one\n- []two")]
#[case("# one\n- [] two")]
#[case("# one\n- [ ] two")]
#[case("# one\n-  [ ]  two")]
#[case("# one\n- ()two")]
#[case("# one\n- () two")]
#[case("# one\n- ( ) two")]
#[case("# one\n-  ( )  two")]
#[case("# one\n- []()two")]
#[case("# one\n- [] ()two")]
#[case("# one\n- []() two")]
#[case("# one\n- [] () two")]
#[case("# one\n- [ ] ( ) two")]
#[case("# one\n- [  ] (  ) two")]
#[case("# one\n-  [  ]  (  )  two")]
fn empty_or_missing_brackets_are_equivalent(#[case] input: &str) {
    assert_eq!(parse_str(input).unwrap(), one_with(false, Priority::None));
}

#[rstest]
#[case("# one\n- [x] two")]
#[case("# one\n- [X] two")]
#[case("# one\n- [ x ]two")]
fn checked_token_is_case_insensitive(#[case] input: &str) {
    assert_eq!(parse_str(input).unwrap(), one_with(true, Priority::None));
}

#[rstest]
#[case("# one\n- (a) two", Priority::High)]
#[case("# one\n- (A) two", Priority::High)]
#[case("# one\n- ( a )two", Priority::High)]
#[case("# one\n- (b) two", Priority::Medium)]
#[case("# one\n- (B) two", Priority::Medium)]
#[case("# one\n- (c) two", Priority::Low)]
#[case("# one\n- (C) two", Priority::Low)]
fn priority_token_is_case_insensitive(#[case] input: &str, #[case] priority: Priority) {
    assert_eq!(parse_str(input).unwrap(), one_with(false, priority));
}

#[test]
fn item_text_is_verbatim() {
    let parsed = parse_str("# Some Heading \n- Mixed Case  text ").unwrap();
    assert_eq!(
        parsed,
        doc(vec![block(
            "Some Heading ",
            1,
            vec![Item::new("Mixed Case  text ", false, Priority::None)]
        )])
    );
}

#[test]
fn windows_line_endings_are_stripped() {
    assert_eq!(
        parse_str("# one\r\n- [x] two\r\n").unwrap(),
        one_with(true, Priority::None)
    );
}

#[test]
fn lines_with_terminators_parse_like_text() {
    let lines = vec!["# one\n", "\n", "- (a) two\n"];
    assert_eq!(parse(lines).unwrap(), one_with(false, Priority::High));
}

#[test]
fn lines_are_consumed_lazily() {
    let lines = (0..3).map(|i| match i {
        0 => "# one".to_string(),
        1 => String::new(),
        _ => "- two".to_string(),
    });
    assert_eq!(parse(lines).unwrap(), one_with(false, Priority::None));
}

#[test]
fn reader_input_parses() {
    let text = "# one\n\n- [x] (c) two\n\n";
    assert_eq!(
        parse_reader(text.as_bytes()).unwrap(),
        one_with(true, Priority::Low)
    );
}

#[test]
fn from_str_delegates_to_parser() {
    let parsed: Document = "# one\n- two".parse().unwrap();
    assert_eq!(parsed, one_with(false, Priority::None));
}

#[test]
fn blocks_and_items_keep_document_order() {
    let text = "## one\n\n# two\n\n- item two-one\n- [x] item two-two\n- (a) item two-three\n\n## three\n\n- [x] (b) item three-one\n";
    assert_eq!(
        parse_str(text).unwrap(),
        doc(vec![
            block("one", 2, vec![]),
            block(
                "two",
                1,
                vec![
                    Item::new("item two-one", false, Priority::None),
                    Item::new("item two-two", true, Priority::None),
                    Item::new("item two-three", false, Priority::High),
                ]
            ),
            block(
                "three",
                2,
                vec![Item::new("item three-one", true, Priority::Medium)]
            ),
        ])
    );
}
