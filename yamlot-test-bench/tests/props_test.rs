//! Property tests for the scanner over generated block sequences and
//! arbitrary text.

use proptest::prelude::*;
use yamlot_common::{Token, TokenKind};
use yamlot_core::{Scanner, Signal};

/// Every token up to and including the first terminal one.
fn drain(input: &str) -> Vec<Token> {
    let mut scanner = Scanner::from_input(input);
    let mut tokens = vec![];
    loop {
        let (token, _) = scanner.next_token();
        let done = token.kind.is_terminal();
        tokens.push(token);
        if done {
            return tokens;
        }
    }
}

/// A line of a block sequence: an indented dash and a word.
fn seq_line() -> impl Strategy<Value = String> {
    (0usize..4, "[a-z]{1,8}").prop_map(|(level, word)| format!("{}- {word}", "  ".repeat(level)))
}

/// Block sequence whose levels only ever deepen by one step.
fn well_nested_seq() -> impl Strategy<Value = String> {
    prop::collection::vec((any::<bool>(), "[a-z]{1,8}"), 1..20).prop_map(|lines| {
        let mut level = 0usize;
        let mut out = String::new();
        for (deeper, word) in lines {
            if deeper {
                level += 1;
            } else {
                level = level.saturating_sub(1);
            }
            out.push_str(&"  ".repeat(level));
            out.push_str("- ");
            out.push_str(&word);
            out.push('\n');
        }
        out
    })
}

proptest! {
    #[test]
    fn newlines_only(n in 0usize..64) {
        let tokens = drain(&"\n".repeat(n));
        prop_assert_eq!(tokens.len(), n + 1);
        prop_assert!(tokens[..n].iter().all(|t| t.kind == TokenKind::NewLine));
        prop_assert_eq!(tokens[n].kind, TokenKind::EndOfInput);
    }

    #[test]
    fn never_panics(input in "\\PC{0,64}") {
        let tokens = drain(&input);
        prop_assert!(tokens.last().is_some_and(|t| t.kind.is_terminal()));
    }

    #[test]
    fn end_of_input_is_sticky(input in "[-. a\n]{0,32}") {
        let mut scanner = Scanner::from_input(&input);
        let end = loop {
            let (token, signal) = scanner.next_token();
            if !signal.is_ok() {
                break token;
            }
        };
        for _ in 0..3 {
            let (token, signal) = scanner.next_token();
            prop_assert!(matches!(signal, Signal::EndOfInput));
            prop_assert_eq!(token.kind, TokenKind::EndOfInput);
            prop_assert!(token.mark >= end.mark);
        }
    }

    #[test]
    fn lines_never_go_back(input in "[-. a#\t\n]{0,48}") {
        let tokens = drain(&input);
        for pair in tokens.windows(2) {
            prop_assert!(pair[0].line() <= pair[1].line());
        }
    }

    #[test]
    fn newline_count_matches_input(input in "[-. ab\n]{0,48}") {
        let tokens = drain(&input);
        if tokens.last().is_some_and(|t| t.kind == TokenKind::EndOfInput) {
            let newlines = tokens.iter().filter(|t| t.kind == TokenKind::NewLine).count();
            prop_assert_eq!(newlines, input.matches('\n').count());
        }
    }

    #[test]
    fn well_nested_indents_balance(input in well_nested_seq()) {
        let tokens = drain(&input);
        prop_assert_eq!(tokens.last().map(|t| t.kind), Some(TokenKind::EndOfInput));

        let mut depth = 0i64;
        for token in &tokens {
            match token.kind {
                TokenKind::Indent => depth += 1,
                TokenKind::Dedent => depth -= 1,
                _ => {}
            }
            prop_assert!(depth >= 0);
        }
        prop_assert_eq!(depth, 0);
    }

    #[test]
    fn dash_lines_yield_dash_and_word(lines in prop::collection::vec(seq_line(), 1..10)) {
        let input = lines.join("\n");
        let tokens: Vec<_> = Scanner::from_input(&input)
            .take_while(Result::is_ok)
            .flatten()
            .collect();
        let dashes = tokens.iter().filter(|t| t.kind == TokenKind::Dash).count();
        let words = tokens.iter().filter(|t| t.kind == TokenKind::PlainScalar).count();
        prop_assert_eq!(dashes, words);
    }
}
