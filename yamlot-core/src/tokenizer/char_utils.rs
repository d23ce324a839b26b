#[inline]
pub(crate) fn is_blank(c: char) -> bool {
    c == ' ' || c == '\t'
}

/// Characters that end a plain scalar run.
#[inline]
pub(crate) fn ends_scalar(c: char) -> bool {
    c == '\n' || c == '#'
}

/// Length of the UTF-8 sequence introduced by `lead`, or 0 if `lead` cannot start one.
#[inline]
#[must_use]
pub(crate) fn utf8_char_width(lead: u8) -> usize {
    match lead {
        0x00..=0x7F => 1,
        0xC2..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF4 => 4,
        _ => 0,
    }
}
