use std::io::{self, Read};
use yamlot_common::{Marker, TokenKind, YamlError};
use yamlot_core::{tokenize, BufferedSource, Scanner, Signal};

/// Yields `data`, then fails every further read.
struct FailingRead<'a> {
    data: &'a [u8],
}

impl Read for FailingRead<'_> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.data.is_empty() {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed"));
        }
        let n = self.data.len().min(buf.len());
        buf[..n].copy_from_slice(&self.data[..n]);
        self.data = &self.data[n..];
        Ok(n)
    }
}

#[test]
fn read_failure_reported_once() {
    let mut scanner = Scanner::from_reader(FailingRead { data: b"- a\n" });
    let mut kinds = vec![];
    let err = loop {
        match scanner.next_token() {
            (token, Signal::Ok) => kinds.push(token.kind),
            (token, Signal::Error(err)) => {
                assert_eq!(token.kind, TokenKind::Error);
                break err;
            }
            (_, Signal::EndOfInput) => panic!("read error was swallowed"),
        }
    };
    assert_eq!(
        kinds,
        [TokenKind::Dash, TokenKind::PlainScalar, TokenKind::NewLine]
    );
    assert!(matches!(err, YamlError::Io(ref e) if e.kind() == io::ErrorKind::BrokenPipe));
    assert!(err.is_io());

    for _ in 0..3 {
        let (token, signal) = scanner.next_token();
        assert_eq!(token.kind, TokenKind::EndOfInput);
        assert!(matches!(signal, Signal::EndOfInput));
    }
}

#[test]
fn invalid_utf8() {
    let src = BufferedSource::from_bstr(b"- ok\n- \xff\n");
    let results: Vec<_> = Scanner::new(src, false).collect();
    let (ok, err): (Vec<_>, Vec<_>) = results.into_iter().partition(Result::is_ok);
    assert_eq!(ok.len(), 4);
    assert_eq!(err.len(), 1);
    assert!(matches!(
        err[0],
        Err(YamlError::InvalidUtf8 { pos: 7 })
    ));
}

#[test]
fn iterator_stops_after_error() {
    let mut tokens = Scanner::new(BufferedSource::from_bstr(b"\xc3"), false);
    assert!(matches!(
        tokens.next(),
        Some(Err(YamlError::InvalidUtf8 { pos: 0 }))
    ));
    assert!(tokens.next().is_none());
    assert!(tokens.next().is_none());
}

#[test]
fn eof_repeats_at_same_position() {
    let mut scanner = Scanner::from_input("- a");
    let last = loop {
        let (token, signal) = scanner.next_token();
        if matches!(signal, Signal::EndOfInput) {
            break token;
        }
    };
    assert_eq!(last.mark, Marker::new(1, 3, 3));
    assert_eq!(scanner.mark(), last.mark);
    for _ in 0..3 {
        let (token, signal) = scanner.next_token();
        assert_eq!(token, last);
        assert!(matches!(signal, Signal::EndOfInput));
    }
}

#[test]
fn tokenize_collects_or_fails() {
    let tokens = tokenize("--- a\n- b\n").unwrap();
    let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
    assert_eq!(
        kinds,
        [
            TokenKind::DocStart,
            TokenKind::PlainScalar,
            TokenKind::NewLine,
            TokenKind::Dash,
            TokenKind::PlainScalar,
            TokenKind::NewLine,
        ]
    );

    let err = tokenize("- a\n    - b\n  - c\n").unwrap_err();
    assert!(matches!(err, YamlError::InvalidDedent { width: 2, .. }));
}
