pub mod consts;

use pretty_assertions::assert_eq;
use std::sync::Once;
use tracing_subscriber::EnvFilter;
use yamlot_common::{Token, TokenKind};
use yamlot_core::{Scanner, Signal, StrSource};

static TRACING: Once = Once::new();

/// Debug output is switched on by a `DEBUG` variable starting with `t`, e.g. `DEBUG=true`.
pub fn is_debug_enabled() -> bool {
    std::env::var("DEBUG").is_ok_and(|v| v.to_lowercase().starts_with('t'))
}

/// Installs a stderr subscriber once per test binary when debugging is enabled.
pub fn init_tracing() {
    if !is_debug_enabled() {
        return;
    }
    TRACING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
            )
            .with_test_writer()
            .try_init();
    });
}

pub fn scanner(input: &str) -> Scanner<StrSource<'_>> {
    init_tracing();
    Scanner::new(StrSource::new(input), is_debug_enabled())
}

/// Scans the whole input, terminal token included.
///
/// # Panics
///
/// Panics if the scanner reports an error.
pub fn scan_all(input: &str) -> Vec<Token> {
    let mut scanner = scanner(input);
    let mut tokens = vec![];
    loop {
        let (token, signal) = scanner.next_token();
        match signal {
            Signal::Ok => tokens.push(token),
            Signal::EndOfInput => {
                tokens.push(token);
                return tokens;
            }
            Signal::Error(err) => panic!("unexpected error for {input:?}: {err}"),
        }
    }
}

pub fn format_tokens(tokens: &[Token]) -> Vec<String> {
    tokens.iter().map(Token::to_string).collect()
}

///
/// Assert that for given input, the scanner produces the expected tokens,
/// written in their rendered form (`DASH`, `PLAIN-SCALAR(apple)`, `EOF`, ...).
///
/// # Panics
///
///    Panics when the rendered token streams differ. Positions are not compared.
pub fn assert_eq_tokens(input: &str, expected: &[&str]) {
    let actual = format_tokens(&scan_all(input));
    assert_eq!(actual, expected, "input: {input:?}");
}

///
/// Like [`assert_eq_tokens`], also comparing each token's line and column.
///
/// # Panics
///
///    Panics when kinds, values or positions differ.
pub fn assert_eq_tokens_at(input: &str, expected: &[(&str, u32, u32)]) {
    let actual: Vec<(String, u32, u32)> = scan_all(input)
        .iter()
        .map(|t| (t.to_string(), t.line(), t.col()))
        .collect();
    let expected: Vec<(String, u32, u32)> = expected
        .iter()
        .map(|&(render, line, col)| (render.to_string(), line, col))
        .collect();
    assert_eq!(actual, expected, "input: {input:?}");
}

/// Kinds produced for `input` up to and including the first terminal token.
pub fn scan_kinds(input: &str) -> Vec<TokenKind> {
    let mut scanner = scanner(input);
    let mut kinds = vec![];
    loop {
        let (token, _) = scanner.next_token();
        kinds.push(token.kind);
        if token.kind.is_terminal() {
            return kinds;
        }
    }
}
