use crate::tokenizer::char_utils::is_blank;
use crate::tokenizer::{
    BufferedSource, IndentStack, NoTrace, Reader, Source, StrSource, TokenQueue, TraceEvent,
    TraceSink, TracingSink,
};
use std::io::{self, Read};
use tracing::debug;
use yamlot_common::{Marker, Token, TokenKind, YamlError, YamlResult};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum State {
    /// Start of a line, or between tokens on it.
    #[default]
    Blank,
    OneDash,
    TwoDashes,
    ThreeDashes,
    OneDot,
    TwoDots,
    ThreeDots,
    /// A `Dash` was emitted, the rest of the line is its scalar.
    AfterDash,
    /// A document marker was emitted, the rest of the line is a scalar.
    Scalar,
}

/// Outcome paired with every token returned by [`Scanner::next_token`].
#[derive(Debug)]
pub enum Signal {
    Ok,
    EndOfInput,
    Error(YamlError),
}

impl Signal {
    #[must_use]
    pub fn is_ok(&self) -> bool {
        matches!(self, Signal::Ok)
    }
}

enum Step {
    Continue,
    Emit(Token),
}

pub struct Scanner<S> {
    reader: Reader<S>,
    state: State,
    indents: IndentStack,
    tokens: TokenQueue,
    trace: Box<dyn TraceSink>,
    /// Where the marker currently being recognized started.
    start: Marker,
    /// Spaces seen before the first content character of the line.
    line_spaces: u32,
    line_started: bool,
    /// Width of the current line, settled by the first token emitted for it.
    pending_indent: Option<(u32, Marker)>,
    finished: bool,
}

impl<S: Source> Scanner<S> {
    /// Creates a scanner. With `debug` set every step is traced through `tracing`.
    pub fn new(src: S, debug: bool) -> Scanner<S> {
        if debug {
            Self::with_boxed_sink(src, Box::new(TracingSink))
        } else {
            Self::with_boxed_sink(src, Box::new(NoTrace))
        }
    }

    pub fn with_trace_sink<T: TraceSink + 'static>(src: S, sink: T) -> Scanner<S> {
        Self::with_boxed_sink(src, Box::new(sink))
    }

    fn with_boxed_sink(src: S, trace: Box<dyn TraceSink>) -> Scanner<S> {
        Scanner {
            reader: Reader::new(src),
            state: State::Blank,
            indents: IndentStack::new(),
            tokens: TokenQueue::new(),
            trace,
            start: Marker::default(),
            line_spaces: 0,
            line_started: false,
            pending_indent: None,
            finished: false,
        }
    }

    #[must_use]
    pub fn state(&self) -> State {
        self.state
    }

    /// Number of indentation levels currently open above the base one.
    #[must_use]
    pub fn indent_depth(&self) -> usize {
        self.indents.depth()
    }

    /// Position of the last consumed character, where a terminal token is placed.
    #[must_use]
    pub fn mark(&self) -> Marker {
        self.reader.mark()
    }

    /// Returns the next token.
    ///
    /// Once `EndOfInput` or an error has been returned, every further call
    /// returns `EndOfInput` at the same position.
    pub fn next_token(&mut self) -> (Token, Signal) {
        if let Some(token) = self.tokens.pop_front() {
            return Self::with_signal(token);
        }
        if self.finished {
            return (
                Token::new(TokenKind::EndOfInput, self.mark()),
                Signal::EndOfInput,
            );
        }

        match self.scan() {
            Ok(token) => Self::with_signal(token),
            Err(err) => {
                debug!(%err, state = ?self.state, "scanner stopped");
                self.finished = true;
                self.tokens.clear();
                (
                    Token::new(TokenKind::Error, self.mark()),
                    Signal::Error(err),
                )
            }
        }
    }

    fn with_signal(token: Token) -> (Token, Signal) {
        let signal = match token.kind {
            TokenKind::EndOfInput => Signal::EndOfInput,
            _ => Signal::Ok,
        };
        (token, signal)
    }

    fn scan(&mut self) -> YamlResult<Token> {
        loop {
            let state = self.state;
            let at = self.reader.next_mark();
            let Some(chr) = self.reader.read()? else {
                let token = self.finish()?;
                self.record(state, None, Some(token.kind));
                return Ok(token);
            };

            match self.step(chr, at)? {
                Step::Continue => self.record(state, Some(chr), None),
                Step::Emit(token) => {
                    self.record(state, Some(chr), Some(token.kind));
                    self.enqueue(token)?;
                    return self.dequeue();
                }
            }
        }
    }

    fn record(&mut self, state: State, ch: Option<char>, emitted: Option<TokenKind>) {
        self.trace.record(&TraceEvent {
            state,
            ch,
            next: self.state,
            emitted,
        });
    }

    fn step(&mut self, chr: char, at: Marker) -> YamlResult<Step> {
        match self.state {
            State::Blank => self.step_blank(chr, at),
            State::OneDash => match chr {
                ' ' => self.emit_marker(TokenKind::Dash, State::AfterDash),
                '\t' => {
                    self.reader.unread()?;
                    self.emit_marker(TokenKind::Dash, State::AfterDash)
                }
                '\n' => self.resolve_at_newline(),
                '-' => self.advance(State::TwoDashes),
                _ => self.fallback("-", chr),
            },
            State::TwoDashes => match chr {
                ' ' => {
                    self.state = State::Blank;
                    Ok(Step::Emit(Token::plain_scalar("--", self.start)))
                }
                '\n' => self.resolve_at_newline(),
                '-' if self.start.col == 1 => self.advance(State::ThreeDashes),
                _ => self.fallback("--", chr),
            },
            State::ThreeDashes => match chr {
                ' ' => self.emit_marker(TokenKind::DocStart, State::Scalar),
                '\n' => self.resolve_at_newline(),
                _ => self.fallback("---", chr),
            },
            State::OneDot => match chr {
                '\n' => self.resolve_at_newline(),
                '.' => self.advance(State::TwoDots),
                _ => self.fallback(".", chr),
            },
            State::TwoDots => match chr {
                '\n' => self.resolve_at_newline(),
                '.' => self.advance(State::ThreeDots),
                _ => self.fallback("..", chr),
            },
            State::ThreeDots => match chr {
                ' ' => self.emit_marker(TokenKind::DocEnd, State::Scalar),
                '\n' => self.resolve_at_newline(),
                _ => self.fallback("...", chr),
            },
            State::AfterDash | State::Scalar => self.rest_of_line(chr, at),
        }
    }

    fn step_blank(&mut self, chr: char, at: Marker) -> YamlResult<Step> {
        match chr {
            '\n' => {
                let token = Token::new(TokenKind::NewLine, at);
                self.start_line();
                Ok(Step::Emit(token))
            }
            ' ' if !self.line_started => {
                self.line_spaces += 1;
                Ok(Step::Continue)
            }
            c if is_blank(c) => Ok(Step::Continue),
            _ => {
                let first_on_line = self.begin_content(at);
                self.start = at;
                match chr {
                    '-' if first_on_line => self.advance(State::OneDash),
                    '.' if at.col == 1 => self.advance(State::OneDot),
                    _ => {
                        let mut raw = String::from(chr);
                        self.reader.read_scalar_run(&mut raw)?;
                        Ok(Step::Emit(Token::plain_scalar(raw.trim(), at)))
                    }
                }
            }
        }
    }

    /// Collects the remainder of the line verbatim, starting with `chr`.
    fn rest_of_line(&mut self, chr: char, at: Marker) -> YamlResult<Step> {
        self.state = State::Blank;
        if chr == '\n' {
            self.reader.unread()?;
            return Ok(Step::Emit(Token::plain_scalar("", at)));
        }
        let mut raw = String::from(chr);
        self.reader.read_scalar_run(&mut raw)?;
        Ok(Step::Emit(Token::plain_scalar(raw, at)))
    }

    fn advance(&mut self, state: State) -> YamlResult<Step> {
        self.state = state;
        Ok(Step::Continue)
    }

    fn emit_marker(&mut self, kind: TokenKind, next: State) -> YamlResult<Step> {
        self.state = next;
        Ok(Step::Emit(Token::new(kind, self.start)))
    }

    /// A newline cut a marker short; it is given back for `Blank` to emit.
    fn resolve_at_newline(&mut self) -> YamlResult<Step> {
        self.reader.unread()?;
        let token = self.resolve_partial();
        self.state = State::Blank;
        match token {
            Some(token) => Ok(Step::Emit(token)),
            None => Ok(Step::Continue),
        }
    }

    /// Token for a partially recognized marker, if the current state holds one.
    fn resolve_partial(&self) -> Option<Token> {
        let token = match self.state {
            State::OneDash => Token::new(TokenKind::Dash, self.start),
            State::TwoDashes => Token::plain_scalar("--", self.start),
            State::ThreeDashes => Token::new(TokenKind::DocStart, self.start),
            State::OneDot => Token::plain_scalar(".", self.start),
            State::TwoDots => Token::plain_scalar("..", self.start),
            State::ThreeDots => Token::new(TokenKind::DocEnd, self.start),
            State::Blank | State::AfterDash | State::Scalar => return None,
        };
        Some(token)
    }

    /// The marker did not resolve: everything from its first character up to
    /// the end of the run is one plain scalar.
    fn fallback(&mut self, prefix: &str, chr: char) -> YamlResult<Step> {
        let mut raw = String::with_capacity(prefix.len() + 8);
        raw.push_str(prefix);
        raw.push(chr);
        self.reader.read_scalar_run(&mut raw)?;
        self.state = State::Blank;
        Ok(Step::Emit(Token::plain_scalar(raw.trim(), self.start)))
    }

    fn start_line(&mut self) {
        self.reader.new_line();
        self.state = State::Blank;
        self.line_spaces = 0;
        self.line_started = false;
    }

    /// Marks the first content character of a line, returns whether `at` is it.
    fn begin_content(&mut self, at: Marker) -> bool {
        if self.line_started {
            return false;
        }
        self.line_started = true;
        self.pending_indent = Some((self.line_spaces, at));
        true
    }

    fn enqueue(&mut self, token: Token) -> YamlResult<()> {
        if let Some((width, mark)) = self.pending_indent.take() {
            self.settle_indent(width, mark, token.kind == TokenKind::Dash)?;
        }
        self.tokens.push_back(token);
        Ok(())
    }

    fn dequeue(&mut self) -> YamlResult<Token> {
        self.tokens.pop_front().ok_or(YamlError::EmptyTokenQueue)
    }

    /// Compares a line's width with the open levels and queues the
    /// `Dedent`s and `Indent` it implies. Only a `Dash` opens a level.
    fn settle_indent(&mut self, width: u32, mark: Marker, opens_level: bool) -> YamlResult<()> {
        let mut popped = None;
        while self.indents.top() > width {
            popped = Some(self.indents.pop()?);
            self.tokens.push_back(Token::new(TokenKind::Dedent, mark));
        }

        if !opens_level || self.indents.top() == width {
            return Ok(());
        }
        if let Some(upper) = popped {
            return Err(YamlError::InvalidDedent {
                mark,
                width,
                lower: self.indents.top(),
                upper,
            });
        }
        self.indents.push(width)?;
        self.tokens.push_back(Token::new(TokenKind::Indent, mark));
        Ok(())
    }

    /// Queues whatever end of input implies: a pending marker, a `Dedent`
    /// per open level and the terminal token. Returns the first of them.
    fn finish(&mut self) -> YamlResult<Token> {
        if let Some(token) = self.resolve_partial() {
            self.enqueue(token)?;
        }
        self.state = State::Blank;
        self.finished = true;

        let end = self.mark();
        while self.indents.depth() > 0 {
            self.indents.pop()?;
            self.tokens.push_back(Token::new(TokenKind::Dedent, end));
        }
        self.tokens.push_back(Token::new(TokenKind::EndOfInput, end));
        self.dequeue()
    }
}

impl<'input> Scanner<StrSource<'input>> {
    pub fn from_input(input: &'input str) -> Self {
        Scanner::new(StrSource::new(input), false)
    }
}

impl<R: Read> Scanner<BufferedSource<io::BufReader<R>>> {
    pub fn from_reader(read: R) -> Self {
        Scanner::new(BufferedSource::from_read(read), false)
    }
}

impl<S: Source> Iterator for Scanner<S> {
    type Item = YamlResult<Token>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next_token() {
            (token, Signal::Ok) => Some(Ok(token)),
            (_, Signal::EndOfInput) => None,
            (_, Signal::Error(err)) => Some(Err(err)),
        }
    }
}
