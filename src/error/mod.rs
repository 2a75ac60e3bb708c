//! Scan failure type for the expression scanner.
//!
//! There is a single failure family: a scan error at a byte offset, carrying
//! a kind that describes what was expected versus what was found. The offset
//! points into the original expression text so the editor can place a caret
//! on the exact character that broke the scan.
//!
//! Failures are never retried or recovered here. The scanner performs no
//! backtracking across primitive boundaries; recovery belongs to the caller,
//! typically via `Scanner::set_position`. No fatal/recoverable distinction is
//! made at this layer.

use thiserror::Error;

/// A scan failure at a byte offset in the expression text.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{kind} at offset {pos}")]
pub struct ScanError {
    /// Byte offset of the failure in the original input.
    pub pos: usize,
    /// What went wrong.
    pub kind: ScanErrorKind,
}

/// What kind of scan failure occurred.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ScanErrorKind {
    /// The input ended where at least one more character was required.
    #[error("unexpected end of input")]
    UnexpectedEnd,

    /// A specific character was required but something else was found.
    #[error("expected `{expected}`, found `{found}`")]
    ExpectedChar { expected: char, found: char },

    /// A whitespace character was required but something else was found.
    #[error("expected whitespace, found `{found}`")]
    ExpectedWhitespace { found: char },

    /// An exact text was required but something else was found.
    #[error("expected `{expected}`, found `{found}`")]
    ExpectedText { expected: String, found: String },

    /// A string literal was opened but no closing `"` exists.
    #[error("string literal is missing its closing `\"`")]
    UnterminatedString,

    /// A column reference was opened but no closing `$` exists.
    #[error("column reference is missing its closing `$`")]
    UnterminatedColumnRef,

    /// A flow variable reference was opened but its `}$$` terminator is
    /// missing.
    #[error("flow variable reference is missing its `}}$$` terminator")]
    UnterminatedFlowVar,

    /// The identifier between `$$` sigils is not a recognized table property.
    #[error("unknown table property `{name}`")]
    UnknownTableProperty { name: String },

    /// The flow variable type discriminator is not a recognized type.
    #[error("unknown flow variable type `{tag}`")]
    UnknownFlowVarType { tag: char },

    /// The input does not start with any accepted numeral prefix.
    #[error("expected a numeric literal")]
    ExpectedNumber,

    /// A second exponent marker followed an exponent marker, e.g. `3EE`.
    #[error("malformed exponent in numeric literal")]
    MalformedExponent,

    /// No member of the operator set matches the input.
    #[error("not a recognized operator")]
    UnknownOperator,
}

impl ScanError {
    /// Create an unexpected-end-of-input error.
    #[cold]
    pub fn unexpected_end(pos: usize) -> Self {
        Self {
            pos,
            kind: ScanErrorKind::UnexpectedEnd,
        }
    }

    /// Create an expected-character mismatch error.
    #[cold]
    pub fn expected_char(pos: usize, expected: char, found: char) -> Self {
        Self {
            pos,
            kind: ScanErrorKind::ExpectedChar { expected, found },
        }
    }

    /// Create an expected-whitespace mismatch error.
    #[cold]
    pub fn expected_whitespace(pos: usize, found: char) -> Self {
        Self {
            pos,
            kind: ScanErrorKind::ExpectedWhitespace { found },
        }
    }

    /// Create an expected-text mismatch error.
    #[cold]
    pub fn expected_text(pos: usize, expected: impl Into<String>, found: impl Into<String>) -> Self {
        Self {
            pos,
            kind: ScanErrorKind::ExpectedText {
                expected: expected.into(),
                found: found.into(),
            },
        }
    }

    /// Create an unterminated string literal error.
    #[cold]
    pub fn unterminated_string(pos: usize) -> Self {
        Self {
            pos,
            kind: ScanErrorKind::UnterminatedString,
        }
    }

    /// Create an unterminated column reference error.
    #[cold]
    pub fn unterminated_column_ref(pos: usize) -> Self {
        Self {
            pos,
            kind: ScanErrorKind::UnterminatedColumnRef,
        }
    }

    /// Create an unterminated flow variable error.
    #[cold]
    pub fn unterminated_flow_var(pos: usize) -> Self {
        Self {
            pos,
            kind: ScanErrorKind::UnterminatedFlowVar,
        }
    }

    /// Create an unknown table property error.
    #[cold]
    pub fn unknown_table_property(pos: usize, name: impl Into<String>) -> Self {
        Self {
            pos,
            kind: ScanErrorKind::UnknownTableProperty { name: name.into() },
        }
    }

    /// Create an unknown flow variable type error.
    #[cold]
    pub fn unknown_flow_var_type(pos: usize, tag: char) -> Self {
        Self {
            pos,
            kind: ScanErrorKind::UnknownFlowVarType { tag },
        }
    }

    /// Create an expected-numeric-literal error.
    #[cold]
    pub fn expected_number(pos: usize) -> Self {
        Self {
            pos,
            kind: ScanErrorKind::ExpectedNumber,
        }
    }

    /// Create a malformed-exponent error.
    #[cold]
    pub fn malformed_exponent(pos: usize) -> Self {
        Self {
            pos,
            kind: ScanErrorKind::MalformedExponent,
        }
    }

    /// Create a not-a-recognized-operator error.
    #[cold]
    pub fn unknown_operator(pos: usize) -> Self {
        Self {
            pos,
            kind: ScanErrorKind::UnknownOperator,
        }
    }
}
