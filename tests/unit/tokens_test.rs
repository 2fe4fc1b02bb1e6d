// tests/unit/tokens_test.rs
use std::io::Cursor;

use prime_range::input::{DISCARD_LIMIT, TokenReader};

fn reader(input: &str) -> TokenReader<Cursor<Vec<u8>>> {
    TokenReader::new(Cursor::new(input.as_bytes().to_vec()))
}

fn next(tokens: &mut TokenReader<Cursor<Vec<u8>>>) -> Option<String> {
    tokens.next_token().expect("in-memory read")
}

#[test]
fn splits_on_any_whitespace_across_lines() {
    let mut tokens = reader("  10\t20\n\n  30  \n40");
    assert_eq!(next(&mut tokens).as_deref(), Some("10"));
    assert_eq!(next(&mut tokens).as_deref(), Some("20"));
    assert_eq!(next(&mut tokens).as_deref(), Some("30"));
    assert_eq!(next(&mut tokens).as_deref(), Some("40"));
    assert_eq!(next(&mut tokens), None);
}

#[test]
fn empty_input_has_no_tokens() {
    assert_eq!(next(&mut reader("")), None);
    assert_eq!(next(&mut reader(" \n \n")), None);
}

#[test]
fn discard_drops_failed_token_and_rest_of_line() {
    let mut tokens = reader("abc 5 6\n7 8\n");
    assert_eq!(next(&mut tokens).as_deref(), Some("abc"));
    tokens.discard_line();
    assert_eq!(next(&mut tokens).as_deref(), Some("7"));
    assert_eq!(next(&mut tokens).as_deref(), Some("8"));
}

#[test]
fn discard_on_last_line_without_newline() {
    let mut tokens = reader("x y");
    assert_eq!(next(&mut tokens).as_deref(), Some("x"));
    tokens.discard_line();
    assert_eq!(next(&mut tokens), None);
}

#[test]
fn discard_is_bounded() {
    let long = "z".repeat(DISCARD_LIMIT + 5);
    let mut tokens = reader(&format!("{long}\n1\n"));
    assert_eq!(next(&mut tokens).map(|t| t.len()), Some(DISCARD_LIMIT + 5));
    tokens.discard_line();
    // The tail past the limit is still pending on the same line.
    assert_eq!(next(&mut tokens).as_deref(), Some("zzzzz"));
    assert_eq!(next(&mut tokens).as_deref(), Some("1"));
}

#[test]
fn invalid_utf8_becomes_an_unparsable_token() {
    let mut tokens = TokenReader::new(Cursor::new(vec![0xff, 0xfe, b' ', b'4', b'\n']));
    let first = next(&mut tokens).expect("token");
    assert!(first.parse::<i32>().is_err());
    assert_eq!(next(&mut tokens).as_deref(), Some("4"));
}
