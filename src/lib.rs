//! Lexical primitives for the rule expression language.
//!
//! A rule expression is a single line of text edited interactively, so every
//! primitive here reports byte-accurate positions for caret placement in the
//! expression editor. The [`Scanner`] owns a mutable read offset over borrowed
//! input and exposes a small set of synchronous scanning operations:
//!
//! - character primitives (`peek_char`, `consume`, `expect`, `skip_ws`),
//! - exact-text and quoted-string reads (`peek_text`, `consume_text`,
//!   `read_string`),
//! - the three reference syntaxes (`$column$`, `$$ROWINDEX$$`,
//!   `$${S name}$$`),
//! - a backtracking numeral matcher (`parse_number`),
//! - a closed-set operator matcher (`parse_operator`).
//!
//! # Design
//!
//! The scanner performs no backtracking across primitive boundaries: every
//! operation either succeeds with the documented advancement or fails with the
//! offset unchanged. Alternative productions are retried by the caller (the
//! recursive-descent rule parser) via [`Scanner::set_position`]. Matched spans
//! are zero-copy slices of the input.

pub mod cursor;
mod error;
pub mod operator;
pub mod reference;
pub mod scanner;

pub use cursor::Cursor;
pub use error::{ScanError, ScanErrorKind};
pub use operator::Operator;
pub use reference::{FlowVarRef, FlowVarType, TableProperty};
pub use scanner::Scanner;

/// Result alias for scanning operations.
pub type ScanResult<T> = Result<T, ScanError>;
