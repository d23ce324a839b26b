use memchr::memchr2;
use yamlot_common::YamlResult;

///
/// A forward-only source of characters.
///
/// Implementors only need to hand out characters one by one. Sources that
/// keep their whole input in memory can additionally override
/// [`Source::take_run_until2`] so scalar collection skips over long runs
/// without going through the character loop.
pub trait Source {
    /// Consumes the next character, returning `None` at end of input.
    fn next_char(&mut self) -> YamlResult<Option<char>>;

    /// Consumes the longest run of characters containing neither `needle1`
    /// nor `needle2` and returns it.
    ///
    /// Both needles must be ASCII. Returns `None` when the source has no fast
    /// path, in which case nothing is consumed.
    fn take_run_until2(&mut self, needle1: u8, needle2: u8) -> Option<&str> {
        let _ = (needle1, needle2);
        None
    }
}

pub struct StrSource<'input> {
    input: &'input str,
    pos: usize,
}

impl<'input> StrSource<'input> {
    pub fn new(input: &'input str) -> StrSource<'input> {
        StrSource { input, pos: 0 }
    }

    /// Remaining, not yet consumed input.
    #[must_use]
    pub fn rest(&self) -> &'input str {
        &self.input[self.pos..]
    }
}

impl Source for StrSource<'_> {
    fn next_char(&mut self) -> YamlResult<Option<char>> {
        let chr = self.rest().chars().next();
        if let Some(c) = chr {
            self.pos += c.len_utf8();
        }
        Ok(chr)
    }

    fn take_run_until2(&mut self, needle1: u8, needle2: u8) -> Option<&str> {
        debug_assert!(needle1.is_ascii() && needle2.is_ascii());
        let rest = self.rest();
        // ASCII needles never split a multibyte sequence
        let len = memchr2(needle1, needle2, rest.as_bytes()).unwrap_or(rest.len());
        self.pos += len;
        Some(&rest[..len])
    }
}
