//! The character-cursor scanner for rule expressions.
//!
//! One [`Scanner`] is created per expression text and discarded after the
//! expression is tokenized or a failure aborts tokenization. The consuming
//! parser sequences these primitives into an expression tree; the expression
//! editor reads [`Scanner::position`] for caret-accurate diagnostics.
//!
//! Every operation either fully succeeds with the documented advancement or
//! fails with the offset unchanged, so the caller can always retry an
//! alternative production from a saved position. The peeking operations
//! (`peek_char`, `peek_next`, `peek_text`, `expect`, `expect_ws`,
//! `is_flow_variable_ref`, `is_column_ref`) never move the offset at all.

use tracing::trace;

use crate::cursor::Cursor;
use crate::error::ScanError;
use crate::operator::Operator;
use crate::reference::{FlowVarRef, FlowVarType, TableProperty};
use crate::ScanResult;

mod number;

/// Stateful scanner over a single rule expression.
///
/// Mutable and unshared: exactly one logical owner advances it at a time.
#[derive(Clone, Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner at the start of `input`.
    pub fn new(input: &'a str) -> Self {
        Self {
            cursor: Cursor::new(input),
        }
    }

    /// The full expression text.
    pub fn input(&self) -> &'a str {
        self.cursor.input()
    }

    /// The unread tail of the expression text.
    pub fn remaining(&self) -> &'a str {
        self.cursor.rest()
    }

    // ─── Cursor core ─────────────────────────────────────────────────────

    /// Returns `true` once the offset has reached the end of the input.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.cursor.is_end()
    }

    /// Current byte offset into the input.
    #[inline]
    pub fn position(&self) -> usize {
        self.cursor.pos()
    }

    /// Set the offset directly, without bounds validation.
    ///
    /// Trusted-caller mutator: used to retry an alternative production from
    /// a position previously returned by [`Scanner::position`].
    #[inline]
    pub fn set_position(&mut self, pos: usize) {
        self.cursor.set_pos(pos);
    }

    // ─── Basic primitives ────────────────────────────────────────────────

    /// Advance past consecutive whitespace characters. Never fails.
    pub fn skip_ws(&mut self) {
        self.cursor.eat_while(char::is_whitespace);
    }

    /// The character at the current offset, without advancing.
    ///
    /// Fails at end of input.
    pub fn peek_char(&self) -> ScanResult<char> {
        self.cursor
            .current()
            .ok_or_else(|| ScanError::unexpected_end(self.position()))
    }

    /// The character one position ahead of current, without advancing.
    ///
    /// Fails when fewer than two characters remain.
    pub fn peek_next(&self) -> ScanResult<char> {
        self.cursor
            .peek_next()
            .ok_or_else(|| ScanError::unexpected_end(self.position()))
    }

    /// Consume and return the character at the current offset.
    ///
    /// Fails at end of input.
    pub fn consume(&mut self) -> ScanResult<char> {
        let c = self.peek_char()?;
        self.cursor.advance_char();
        Ok(c)
    }

    /// Assert that the current character is `expected`.
    ///
    /// A non-consuming assertion, distinct from consumption: the offset does
    /// not move on success or failure. Propagates `peek_char`'s end-of-input
    /// failure; reports expected-versus-found on mismatch.
    pub fn expect(&self, expected: char) -> ScanResult<()> {
        let found = self.peek_char()?;
        if found == expected {
            Ok(())
        } else {
            Err(ScanError::expected_char(self.position(), expected, found))
        }
    }

    /// Assert that the current character is whitespace. Non-consuming.
    pub fn expect_ws(&self) -> ScanResult<()> {
        let found = self.peek_char()?;
        if found.is_whitespace() {
            Ok(())
        } else {
            Err(ScanError::expected_whitespace(self.position(), found))
        }
    }

    // ─── Text primitives ─────────────────────────────────────────────────

    /// Returns `true` if the unread input starts with `text` (byte-exact,
    /// case-sensitive). Never fails, never advances; false when insufficient
    /// input remains.
    pub fn peek_text(&self, text: &str) -> bool {
        self.cursor.starts_with(text)
    }

    /// Consume `text` exactly, returning the matched span of the input.
    ///
    /// On mismatch nothing is consumed.
    pub fn consume_text(&mut self, text: &str) -> ScanResult<&'a str> {
        let start = self.position();
        if self.peek_text(text) {
            self.cursor.advance_n(text.len());
            Ok(self.cursor.slice_from(start))
        } else {
            let found: String = self
                .cursor
                .rest()
                .chars()
                .take(text.chars().count())
                .collect();
            Err(ScanError::expected_text(start, text, found))
        }
    }

    /// Read a quoted string literal, returning the span between the quotes.
    ///
    /// The current character must be `"`. Characters are copied verbatim up
    /// to the next `"`: a preceding backslash is copied literally and does
    /// not escape the following quote, so the first quote character found
    /// always terminates the scan. Known limitation, kept as-is.
    pub fn read_string(&mut self) -> ScanResult<&'a str> {
        self.expect('"')?;
        let start = self.position();
        let body_start = start + 1;
        self.cursor.advance_n(1);
        match self.cursor.find_byte(b'"') {
            Some(rel) => {
                let body = self.cursor.slice(body_start, body_start + rel);
                self.cursor.advance_n(rel + 1);
                Ok(body)
            }
            None => {
                self.cursor.set_pos(start);
                Err(ScanError::unterminated_string(start))
            }
        }
    }

    // ─── Reference readers ───────────────────────────────────────────────

    /// Returns `true` if a flow variable reference (`$${`) starts here.
    /// Non-consuming.
    pub fn is_flow_variable_ref(&self) -> bool {
        self.peek_text("$${")
    }

    /// Returns `true` if a column reference starts here: a `$` whose
    /// following character exists and is not `$`. A trailing lone `$`
    /// returns `false` rather than failing. Non-consuming.
    pub fn is_column_ref(&self) -> bool {
        self.cursor.current() == Some('$') && self.cursor.peek_next().is_some_and(|c| c != '$')
    }

    /// Read a table property reference: `$$NAME$$`.
    ///
    /// Consumes the `$$` prefix, a run of letters, and the trailing `$$`,
    /// validating the name against the closed property set. Trailing input
    /// is left untouched. On failure nothing is consumed.
    pub fn read_table_property(&mut self) -> ScanResult<TableProperty> {
        let start = self.position();
        let result = self.table_property_inner();
        if result.is_err() {
            self.cursor.set_pos(start);
        }
        result
    }

    fn table_property_inner(&mut self) -> ScanResult<TableProperty> {
        self.consume_text("$$")?;
        let name_start = self.position();
        self.cursor.eat_while(char::is_alphabetic);
        let name = self.cursor.slice_from(name_start);
        let prop = TableProperty::from_name(name)
            .ok_or_else(|| ScanError::unknown_table_property(name_start, name))?;
        self.consume_text("$$")?;
        trace!(pos = name_start, property = %prop, "table property reference");
        Ok(prop)
    }

    /// Read a flow variable reference: `$${<type><name>}$$`.
    ///
    /// Consumes the `$${` prefix and exactly one type discriminator
    /// character (validated against the closed type set), then copies the
    /// name verbatim up to the three-character `}$$` terminator and consumes
    /// it. Interior whitespace is preserved; the discriminator and
    /// terminator are excluded from the returned name. On failure nothing is
    /// consumed.
    pub fn read_flow_variable(&mut self) -> ScanResult<FlowVarRef<'a>> {
        let start = self.position();
        let result = self.flow_variable_inner(start);
        if result.is_err() {
            self.cursor.set_pos(start);
        }
        result
    }

    fn flow_variable_inner(&mut self, start: usize) -> ScanResult<FlowVarRef<'a>> {
        self.consume_text("$${")?;
        let tag_pos = self.position();
        let tag = self.consume()?;
        let ty = FlowVarType::from_tag(tag)
            .ok_or_else(|| ScanError::unknown_flow_var_type(tag_pos, tag))?;
        let name_start = self.position();
        let rel = self
            .cursor
            .find_str("}$$")
            .ok_or_else(|| ScanError::unterminated_flow_var(start))?;
        let name = self.cursor.slice(name_start, name_start + rel);
        self.cursor.advance_n(rel + 3);
        trace!(pos = start, ty = %ty, name, "flow variable reference");
        Ok(FlowVarRef { ty, name })
    }

    /// Read a column reference: `$<name>$`.
    ///
    /// The current character must be `$` (fails otherwise, including at end
    /// of input). Copies characters verbatim up to the next `$` and consumes
    /// it; the name may contain arbitrary characters, including braces,
    /// digits and spaces, and may be empty.
    ///
    /// Sigil-agnostic: callers that have already consumed one sigil
    /// character reuse this to recover raw text for diagnostics from
    /// malformed `$$`-reference input.
    pub fn read_column_ref(&mut self) -> ScanResult<&'a str> {
        self.expect('$')?;
        let start = self.position();
        let body_start = start + 1;
        self.cursor.advance_n(1);
        match self.cursor.find_byte(b'$') {
            Some(rel) => {
                let body = self.cursor.slice(body_start, body_start + rel);
                self.cursor.advance_n(rel + 1);
                Ok(body)
            }
            None => {
                self.cursor.set_pos(start);
                Err(ScanError::unterminated_column_ref(start))
            }
        }
    }

    // ─── Operator matcher ────────────────────────────────────────────────

    /// Match one member of the closed operator set by canonical text.
    ///
    /// Candidates are tried longest-first so `<` never shadows `<=`. On a
    /// match the offset advances past the matched text; otherwise nothing is
    /// consumed.
    pub fn parse_operator(&mut self) -> ScanResult<Operator> {
        let start = self.position();
        for op in Operator::MATCH_ORDER {
            if self.peek_text(op.text()) {
                self.cursor.advance_n(op.text().len());
                trace!(pos = start, op = %op, "operator");
                return Ok(op);
            }
        }
        Err(ScanError::unknown_operator(start))
    }
}
