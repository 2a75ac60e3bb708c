//! Bounds-checked cursor over borrowed expression text.
//!
//! The cursor owns the mutable read offset; everything else in the crate is
//! layered on top of it. Offsets are byte indices into the original input so
//! they can be handed directly to the expression editor for caret placement.
//! "One character" always means one Unicode scalar value: [`Cursor::advance_char`]
//! moves past a full UTF-8 sequence, never into the middle of one.
//!
//! # Position contract
//!
//! [`Cursor::set_pos`] performs no bounds validation beyond a debug assertion.
//! It exists so a caller can snapshot the offset, attempt a production, and
//! roll back after a failed alternative. Positions handed to it must have been
//! obtained from [`Cursor::pos`], which guarantees they sit on a character
//! boundary within `0..=input.len()`.

use memchr::memchr;
use memchr::memmem;

/// Cursor over borrowed input with a mutable byte offset.
#[derive(Clone, Debug)]
pub struct Cursor<'a> {
    /// The full expression text. Never mutated.
    input: &'a str,
    /// Current read position (byte index into `input`).
    pos: usize,
}

impl<'a> Cursor<'a> {
    /// Create a new cursor at position 0.
    pub fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    /// The full input text.
    #[inline]
    pub fn input(&self) -> &'a str {
        self.input
    }

    /// Current byte offset into the input.
    #[inline]
    pub fn pos(&self) -> usize {
        self.pos
    }

    /// Set the offset directly.
    ///
    /// Used by callers to retry an alternative production from a saved
    /// position. The offset must come from a prior [`Cursor::pos`] call.
    #[inline]
    pub fn set_pos(&mut self, pos: usize) {
        debug_assert!(
            pos <= self.input.len(),
            "cursor position {pos} out of bounds (max {})",
            self.input.len()
        );
        self.pos = pos;
    }

    /// Returns `true` once the offset has reached the end of the input.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.pos >= self.input.len()
    }

    /// The unread tail of the input.
    #[inline]
    pub fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    /// The character at the current offset, or `None` at end of input.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.rest().chars().next()
    }

    /// The character one position ahead of current, or `None` if fewer than
    /// two characters remain.
    #[inline]
    pub fn peek_next(&self) -> Option<char> {
        let mut chars = self.rest().chars();
        chars.next()?;
        chars.next()
    }

    /// Advance past the character at the current offset.
    ///
    /// Must not be called at end of input.
    #[inline]
    pub fn advance_char(&mut self) {
        if let Some(c) = self.current() {
            self.pos += c.len_utf8();
        }
    }

    /// Advance the offset by `n` bytes.
    ///
    /// The resulting offset must sit on a character boundary; callers only
    /// pass lengths of text already verified to start at the current offset.
    #[inline]
    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    /// Advance while `pred` holds for the current character.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while let Some(c) = self.current() {
            if !pred(c) {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    /// Returns `true` if the unread input starts with `text` (byte-exact,
    /// case-sensitive). False when insufficient input remains.
    #[inline]
    pub fn starts_with(&self, text: &str) -> bool {
        self.rest().as_bytes().starts_with(text.as_bytes())
    }

    /// Find `byte` in the unread input using SIMD-accelerated search.
    ///
    /// Returns the offset relative to the current position, or `None` if the
    /// byte does not occur before the end of input. Only ASCII delimiters are
    /// searched for, so a hit always lies on a character boundary.
    #[inline]
    pub fn find_byte(&self, byte: u8) -> Option<usize> {
        debug_assert!(byte.is_ascii(), "delimiter search requires an ASCII byte");
        memchr(byte, self.rest().as_bytes())
    }

    /// Find the substring `needle` in the unread input.
    ///
    /// Returns the offset relative to the current position, or `None`.
    #[inline]
    pub fn find_str(&self, needle: &str) -> Option<usize> {
        memmem::find(self.rest().as_bytes(), needle.as_bytes())
    }

    /// Extract an input substring.
    ///
    /// `start..end` must lie within the input on character boundaries; both
    /// ends come from prior offset reads, so this holds by construction.
    #[inline]
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        debug_assert!(
            end <= self.input.len(),
            "slice end {end} exceeds input length {}",
            self.input.len()
        );
        &self.input[start..end]
    }

    /// Extract an input substring from `start` to the current offset.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'a str {
        self.slice(start, self.pos)
    }
}
