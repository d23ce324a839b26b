use crate::tokenizer::char_utils::utf8_char_width;
use crate::tokenizer::Source;
use std::io::{self, BufRead, ErrorKind, Read};
use yamlot_common::{YamlError, YamlResult};

/// Streaming [`Source`] decoding UTF-8 from any [`BufRead`].
///
/// Input is consumed one byte at a time out of the reader's buffer, so a
/// blocking reader blocks the scanner too.
pub struct BufferedSource<B> {
    input: B,
    pos: usize,
}

impl<B: BufRead> BufferedSource<B> {
    pub fn new(input: B) -> Self {
        Self { input, pos: 0 }
    }

    fn read_byte(&mut self) -> YamlResult<Option<u8>> {
        loop {
            let byte = match self.input.fill_buf() {
                Ok(buf) => buf.first().copied(),
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };
            if byte.is_some() {
                self.input.consume(1);
                self.pos += 1;
            }
            return Ok(byte);
        }
    }
}

impl<R: Read> BufferedSource<io::BufReader<R>> {
    pub fn from_read(read: R) -> Self {
        Self::new(io::BufReader::new(read))
    }
}

impl<'a> BufferedSource<&'a [u8]> {
    pub fn from_bstr(input: &'a [u8]) -> Self {
        Self::new(input)
    }
}

impl<B: BufRead> Source for BufferedSource<B> {
    fn next_char(&mut self) -> YamlResult<Option<char>> {
        let start = self.pos;
        let Some(lead) = self.read_byte()? else {
            return Ok(None);
        };
        let width = utf8_char_width(lead);
        if width == 0 {
            return Err(YamlError::InvalidUtf8 { pos: start });
        }

        let mut bytes = [lead, 0, 0, 0];
        for slot in bytes.iter_mut().take(width).skip(1) {
            *slot = self
                .read_byte()?
                .ok_or(YamlError::InvalidUtf8 { pos: start })?;
        }

        core::str::from_utf8(&bytes[..width])
            .ok()
            .and_then(|s| s.chars().next())
            .map(Some)
            .ok_or(YamlError::InvalidUtf8 { pos: start })
    }
}
