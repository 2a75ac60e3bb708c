//! Backtracking numeral-literal matcher.
//!
//! [`Scanner::parse_number`] is a longest-accepting-prefix matcher over the
//! numeral grammar: a decimal literal with optional sign, optional
//! fractional part and optional exponent, or the literals `Infinity` and
//! `-Infinity`. The matcher walks a small DFA, remembering the end of the
//! last accepting state. When a character breaks the sequence it commits to
//! that remembered prefix, leaving the unmatched tail (e.g. a dangling `E`)
//! for subsequent tokenization. All backtracking happens inside the single
//! call; the offset only moves on success.

use tracing::trace;

use super::Scanner;
use crate::error::ScanError;
use crate::ScanResult;

/// States of the numeral DFA.
///
/// `IntDigits`, `DotNoFrac`, `FracDigits` and `ExpDigits` are accepting;
/// stopping in any other state yields either a backtrack to the last
/// accepting prefix (from the exponent states) or a zero-length match
/// failure.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum State {
    Start,
    /// A leading `+` or `-` was consumed; a lone sign never accepts.
    Sign,
    /// A dot with no integer digits before it; a digit must follow.
    DotPending,
    IntDigits,
    /// Integer digits then a dot, no fractional digit yet. Accepting: the
    /// committed prefix includes the dot.
    DotNoFrac,
    FracDigits,
    /// An `E`/`e` was consumed; not accepting until an exponent digit shows.
    ExpMark,
    /// An exponent sign was consumed after the marker.
    ExpSign,
    ExpDigits,
}

impl State {
    fn is_accepting(self) -> bool {
        matches!(
            self,
            State::IntDigits | State::DotNoFrac | State::FracDigits | State::ExpDigits
        )
    }
}

const INFINITY: &str = "Infinity";

impl<'a> Scanner<'a> {
    /// Match the longest numeral prefix starting at the current offset.
    ///
    /// On success the offset advances past the matched prefix, which is
    /// returned as a span of the input. If the matcher never reaches an
    /// accepting state (a lone sign, a lone dot, a bare exponent marker),
    /// it fails with nothing consumed.
    ///
    /// One asymmetry is intentional: when the character after an exponent
    /// marker is itself another exponent marker (`3EE`), the whole call
    /// fails instead of backtracking to `3`, unlike every other
    /// disqualifying character in that position. This mirrors the observed
    /// behavior of the original matcher and is kept as-is.
    pub fn parse_number(&mut self) -> ScanResult<&'a str> {
        let bytes = self.cursor.input().as_bytes();
        let start = self.cursor.pos();
        let mut i = start;
        let mut state = State::Start;
        let mut accepted: Option<usize> = None;

        loop {
            let b = bytes.get(i).copied();
            match state {
                State::Start => match b {
                    Some(b'0'..=b'9') => state = State::IntDigits,
                    Some(b'.') => state = State::DotPending,
                    Some(b'+' | b'-') => state = State::Sign,
                    Some(b'I') => return self.infinity_literal(start, i),
                    // A bare exponent marker rejects with a zero-length
                    // match, as does anything else that cannot start a
                    // numeral.
                    _ => return Err(ScanError::expected_number(start)),
                },
                State::Sign => match b {
                    Some(b'0'..=b'9') => state = State::IntDigits,
                    Some(b'.') => state = State::DotPending,
                    Some(b'I') => return self.infinity_literal(start, i),
                    // Lone sign, doubled sign, or sign directly before an
                    // exponent marker.
                    _ => return Err(ScanError::expected_number(start)),
                },
                State::DotPending => match b {
                    Some(b'0'..=b'9') => state = State::FracDigits,
                    // A lone `.` never accepts.
                    _ => return Err(ScanError::expected_number(start)),
                },
                State::IntDigits => match b {
                    Some(b'0'..=b'9') => {}
                    Some(b'.') => state = State::DotNoFrac,
                    Some(b'E' | b'e') => state = State::ExpMark,
                    _ => break,
                },
                State::DotNoFrac => match b {
                    Some(b'0'..=b'9') => state = State::FracDigits,
                    Some(b'E' | b'e') => state = State::ExpMark,
                    _ => break,
                },
                State::FracDigits => match b {
                    Some(b'0'..=b'9') => {}
                    Some(b'E' | b'e') => state = State::ExpMark,
                    _ => break,
                },
                State::ExpMark => match b {
                    Some(b'0'..=b'9') => state = State::ExpDigits,
                    Some(b'+' | b'-') => state = State::ExpSign,
                    // Doubled exponent marker: hard failure, no backtrack.
                    Some(b'E' | b'e') => return Err(ScanError::malformed_exponent(i)),
                    // Anything else: discard the marker, commit to the
                    // prefix before it.
                    _ => break,
                },
                State::ExpSign => match b {
                    Some(b'0'..=b'9') => state = State::ExpDigits,
                    // Discard the marker and the sign.
                    _ => break,
                },
                State::ExpDigits => match b {
                    Some(b'0'..=b'9') => {}
                    _ => break,
                },
            }
            i += 1;
            if state.is_accepting() {
                accepted = Some(i);
            }
        }

        // Breaking out of the loop is only possible once an accepting state
        // has been reached; the non-accepting prefix states return early.
        match accepted {
            Some(end) => {
                self.cursor.set_pos(end);
                let text = self.cursor.slice(start, end);
                trace!(pos = start, text, "numeric literal");
                Ok(text)
            }
            None => Err(ScanError::expected_number(start)),
        }
    }

    /// Match the `Infinity` literal at `lit_start`, after an optional sign
    /// consumed at `start`.
    ///
    /// The literal must match exactly or the whole call fails with nothing
    /// consumed; there is no partial fallback.
    fn infinity_literal(&mut self, start: usize, lit_start: usize) -> ScanResult<&'a str> {
        let rest = &self.cursor.input()[lit_start..];
        if rest.as_bytes().starts_with(INFINITY.as_bytes()) {
            let end = lit_start + INFINITY.len();
            self.cursor.set_pos(end);
            let text = self.cursor.slice(start, end);
            trace!(pos = start, text, "numeric literal");
            Ok(text)
        } else {
            let found: String = rest.chars().take(INFINITY.chars().count()).collect();
            Err(ScanError::expected_text(lit_start, INFINITY, found))
        }
    }
}
