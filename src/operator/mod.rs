//! The closed set of rule expression operators.
//!
//! Each operator has exactly one canonical textual representation. The set is
//! fixed at process scope; the scanner recognizes members by exact text and
//! the parser assigns their semantics (out of scope here).

use std::fmt;

/// An operator symbol or keyword of the rule expression language.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Operator {
    /// `=`
    Eq,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `LIKE` — wildcard pattern match.
    Like,
    /// `MATCHES` — regular expression match.
    Matches,
    /// `IN` — set membership.
    In,
    /// `MISSING` — missing value check.
    Missing,
    /// `NOT`
    Not,
    /// `AND`
    And,
    /// `OR`
    Or,
    /// `XOR`
    Xor,
}

impl Operator {
    /// All operators in declaration order.
    pub const ALL: [Operator; 13] = [
        Operator::Eq,
        Operator::Lt,
        Operator::Le,
        Operator::Gt,
        Operator::Ge,
        Operator::Like,
        Operator::Matches,
        Operator::In,
        Operator::Missing,
        Operator::Not,
        Operator::And,
        Operator::Or,
        Operator::Xor,
    ];

    /// All operators in the order the scanner must try them.
    ///
    /// Longest canonical text first, so that an operator whose text is a
    /// prefix of another (`<` of `<=`, `>` of `>=`) never shadows the longer
    /// match.
    pub const MATCH_ORDER: [Operator; 13] = [
        Operator::Missing,
        Operator::Matches,
        Operator::Like,
        Operator::And,
        Operator::Not,
        Operator::Xor,
        Operator::In,
        Operator::Or,
        Operator::Le,
        Operator::Ge,
        Operator::Eq,
        Operator::Lt,
        Operator::Gt,
    ];

    /// The canonical textual representation.
    pub fn text(self) -> &'static str {
        match self {
            Operator::Eq => "=",
            Operator::Lt => "<",
            Operator::Le => "<=",
            Operator::Gt => ">",
            Operator::Ge => ">=",
            Operator::Like => "LIKE",
            Operator::Matches => "MATCHES",
            Operator::In => "IN",
            Operator::Missing => "MISSING",
            Operator::Not => "NOT",
            Operator::And => "AND",
            Operator::Or => "OR",
            Operator::Xor => "XOR",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

#[cfg(test)]
mod tests;
