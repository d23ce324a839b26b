use crate::tokenizer::char_utils::ends_scalar;
use crate::tokenizer::Source;
use yamlot_common::{Marker, YamlError, YamlResult};

/// Position tracking wrapper over a [`Source`].
///
/// Keeps one slot of lookahead shared by [`Reader::peek`] and
/// [`Reader::unread`], so at most one character can be pushed back and only
/// right after it was read.
pub struct Reader<S> {
    src: S,
    line: u32,
    col: u32,
    pos: usize,
    lookahead: Option<char>,
    last: Option<char>,
}

impl<S: Source> Reader<S> {
    pub fn new(src: S) -> Self {
        Reader {
            src,
            line: 1,
            col: 0,
            pos: 0,
            lookahead: None,
            last: None,
        }
    }

    /// Position of the most recently consumed character.
    ///
    /// The column is 0 at the start of a line, before anything on it was read.
    #[must_use]
    pub fn mark(&self) -> Marker {
        Marker::new(self.line, self.col, self.pos)
    }

    /// Position the next character will have once read.
    #[must_use]
    pub fn next_mark(&self) -> Marker {
        Marker::new(self.line, self.col + 1, self.pos)
    }

    pub fn read(&mut self) -> YamlResult<Option<char>> {
        let chr = match self.lookahead.take() {
            Some(c) => Some(c),
            None => self.src.next_char()?,
        };
        if let Some(c) = chr {
            self.col += 1;
            self.pos += c.len_utf8();
        }
        self.last = chr;
        Ok(chr)
    }

    /// Pushes the most recently read character back.
    ///
    /// # Errors
    ///
    /// Fails when nothing was read since the last unread, or when a peeked
    /// character already occupies the lookahead slot.
    pub fn unread(&mut self) -> YamlResult<()> {
        let Some(c) = self.last else {
            return Err(YamlError::UnreadWithoutRead);
        };
        if self.lookahead.is_some() {
            return Err(YamlError::UnreadOverPeek);
        }
        self.last = None;
        self.lookahead = Some(c);
        self.col -= 1;
        self.pos -= c.len_utf8();
        Ok(())
    }

    pub fn peek(&mut self) -> YamlResult<Option<char>> {
        if self.lookahead.is_none() {
            self.lookahead = self.src.next_char()?;
        }
        Ok(self.lookahead)
    }

    /// Moves the position to the start of the next line.
    ///
    /// The newline that ended the previous line can no longer be unread.
    pub fn new_line(&mut self) {
        self.line += 1;
        self.col = 0;
        self.last = None;
    }

    /// Appends characters to `out` until the next one is a newline, `#` or
    /// end of input. The terminating character is left unread.
    pub fn read_scalar_run(&mut self, out: &mut String) -> YamlResult<()> {
        loop {
            match self.peek()? {
                None => return Ok(()),
                Some(c) if ends_scalar(c) => return Ok(()),
                Some(_) => {}
            }
            if let Some(c) = self.read()? {
                out.push(c);
            }

            if let Some(run) = self.src.take_run_until2(b'\n', b'#') {
                if let Some(c) = run.chars().next_back() {
                    self.col += run.chars().count() as u32;
                    self.pos += run.len();
                    self.last = Some(c);
                    out.push_str(run);
                }
            }
        }
    }
}
