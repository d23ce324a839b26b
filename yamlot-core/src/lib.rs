pub use tokenizer::{Scanner, Signal, State};
pub use tokenizer::{BufferedSource, Source, StrSource};
pub use yamlot_common::{Marker, Token, TokenKind, YamlError, YamlResult};

pub mod tokenizer;

/// Scans the whole input and returns every token before the end of input.
///
/// # Errors
///
/// Returns the first error the scanner reports, e.g. a malformed dedent.
pub fn tokenize(input: &str) -> YamlResult<Vec<Token>> {
    Scanner::from_input(input).collect()
}
