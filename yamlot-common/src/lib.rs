pub mod error;

pub use error::{YamlError, YamlResult};

use std::fmt::{Display, Formatter};

#[derive(Default, Debug, Clone, Copy, Eq, PartialEq, Ord, PartialOrd)]
pub struct Marker {
    /// Line of mark. One indexed.
    pub line: u32,
    /// Column of mark. One indexed, zero right after a line break.
    pub col: u32,
    /// index in bytes of the input string.
    pub pos: usize,
}

impl Marker {
    pub fn new(line: u32, col: u32, pos: usize) -> Self {
        Marker { line, col, pos }
    }
}

impl Display for Marker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "line {} column {}", self.line, self.col)
    }
}

#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
pub enum TokenKind {
    EndOfInput,
    Error,
    /// Block sequence entry `-`
    Dash,
    PlainScalar,
    NewLine,
    /// Document start marker `---`
    DocStart,
    /// Document end marker `...`
    DocEnd,
    Indent,
    Dedent,
}

impl TokenKind {
    /// Whether the kind ends a tokenization pass.
    #[must_use]
    pub fn is_terminal(self) -> bool {
        matches!(self, TokenKind::EndOfInput | TokenKind::Error)
    }

    /// Literal text carried by marker kinds.
    #[must_use]
    pub fn literal(self) -> Option<&'static str> {
        match self {
            TokenKind::Dash => Some("-"),
            TokenKind::DocStart => Some("---"),
            TokenKind::DocEnd => Some("..."),
            _ => None,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            TokenKind::EndOfInput => "EOF",
            TokenKind::Error => "ERROR",
            TokenKind::Dash => "DASH",
            TokenKind::PlainScalar => "PLAIN-SCALAR",
            TokenKind::NewLine => "NEWLINE",
            TokenKind::DocStart => "DOC-START",
            TokenKind::DocEnd => "DOC-END",
            TokenKind::Indent => "INDENT",
            TokenKind::Dedent => "DEDENT",
        };
        f.write_str(name)
    }
}

/// A single scanned token.
///
/// `value` is present for plain scalars (their text) and for the marker
/// kinds (their literal). Structural and terminal tokens carry no value.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Token {
    pub kind: TokenKind,
    pub value: Option<String>,
    pub mark: Marker,
}

impl Token {
    /// Creates a token without a value, or with the literal for marker kinds.
    pub fn new(kind: TokenKind, mark: Marker) -> Self {
        Token {
            kind,
            value: kind.literal().map(String::from),
            mark,
        }
    }

    pub fn plain_scalar(value: impl Into<String>, mark: Marker) -> Self {
        Token {
            kind: TokenKind::PlainScalar,
            value: Some(value.into()),
            mark,
        }
    }

    #[must_use]
    pub fn line(&self) -> u32 {
        self.mark.line
    }

    #[must_use]
    pub fn col(&self) -> u32 {
        self.mark.col
    }

    #[must_use]
    pub fn value(&self) -> &str {
        self.value.as_deref().unwrap_or("")
    }

    /// Loose comparison used by token stream assertions.
    ///
    /// Two tokens match when their kinds are equal and, for plain scalars,
    /// their values are equal. Positions are ignored.
    #[must_use]
    pub fn matches(&self, other: &Token) -> bool {
        if self.kind != other.kind {
            return false;
        }
        match self.kind {
            TokenKind::PlainScalar => self.value() == other.value(),
            _ => true,
        }
    }
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::PlainScalar => write!(f, "{}({})", self.kind, self.value()),
            kind => write!(f, "{kind}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn marker_literals() {
        let mark = Marker::new(1, 1, 0);
        assert_eq!(Token::new(TokenKind::Dash, mark).value(), "-");
        assert_eq!(Token::new(TokenKind::DocStart, mark).value(), "---");
        assert_eq!(Token::new(TokenKind::DocEnd, mark).value(), "...");
        assert_eq!(Token::new(TokenKind::NewLine, mark).value, None);
        assert_eq!(Token::new(TokenKind::Indent, mark).value, None);
    }

    #[test]
    fn render() {
        let mark = Marker::default();
        assert_eq!(Token::new(TokenKind::Dash, mark).to_string(), "DASH");
        assert_eq!(Token::new(TokenKind::EndOfInput, mark).to_string(), "EOF");
        assert_eq!(
            Token::plain_scalar("apple", mark).to_string(),
            "PLAIN-SCALAR(apple)"
        );
        assert_eq!(Token::plain_scalar("", mark).to_string(), "PLAIN-SCALAR()");
    }

    #[test]
    fn matches_ignores_position() {
        let a = Token::plain_scalar("x", Marker::new(1, 3, 2));
        let b = Token::plain_scalar("x", Marker::new(7, 1, 40));
        let c = Token::plain_scalar("y", Marker::new(1, 3, 2));
        assert!(a.matches(&b));
        assert!(!a.matches(&c));
        assert_ne!(a, b);

        let dash = Token::new(TokenKind::Dash, Marker::new(1, 1, 0));
        let other_dash = Token::new(TokenKind::Dash, Marker::new(2, 5, 9));
        assert!(dash.matches(&other_dash));
        assert!(!dash.matches(&a));
    }

    #[test]
    fn terminal_kinds() {
        assert!(TokenKind::EndOfInput.is_terminal());
        assert!(TokenKind::Error.is_terminal());
        assert!(!TokenKind::Dedent.is_terminal());
    }
}
