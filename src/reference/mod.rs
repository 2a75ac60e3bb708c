//! Closed enumerations behind the reference syntaxes.
//!
//! Reference kinds are distinguished by sigil: `$name$` is a column
//! reference, `$$NAME$$` a table property reference, and `$${T name}$$` a
//! flow variable reference with a one-character type discriminator `T`.
//! Table property names and type discriminators are closed sets validated at
//! recognition time, never free-form strings.

use std::fmt;

/// A reserved table property denoting positional or metadata properties of
/// the current row.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum TableProperty {
    /// `ROWINDEX` — zero-based index of the current row.
    RowIndex,
    /// `ROWCOUNT` — total number of rows in the table.
    RowCount,
    /// `ROWID` — the current row's key.
    RowId,
}

impl TableProperty {
    /// All table properties.
    pub const ALL: [TableProperty; 3] = [
        TableProperty::RowIndex,
        TableProperty::RowCount,
        TableProperty::RowId,
    ];

    /// The canonical name as written between the `$$` sigils.
    pub fn name(self) -> &'static str {
        match self {
            TableProperty::RowIndex => "ROWINDEX",
            TableProperty::RowCount => "ROWCOUNT",
            TableProperty::RowId => "ROWID",
        }
    }

    /// Look up a property by its canonical name (case-sensitive).
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.name() == name)
    }
}

impl fmt::Display for TableProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The declared type of a flow variable, written as a one-character
/// discriminator right after the `$${` sigil.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum FlowVarType {
    /// `S` — string.
    String,
    /// `D` — double.
    Double,
    /// `I` — integer.
    Integer,
}

impl FlowVarType {
    /// All flow variable types.
    pub const ALL: [FlowVarType; 3] = [
        FlowVarType::String,
        FlowVarType::Double,
        FlowVarType::Integer,
    ];

    /// The one-character discriminator.
    pub fn tag(self) -> char {
        match self {
            FlowVarType::String => 'S',
            FlowVarType::Double => 'D',
            FlowVarType::Integer => 'I',
        }
    }

    /// Look up a type by its discriminator character.
    pub fn from_tag(tag: char) -> Option<Self> {
        Self::ALL.into_iter().find(|t| t.tag() == tag)
    }
}

impl fmt::Display for FlowVarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// A recognized flow variable reference: declared type plus the verbatim
/// name span between the discriminator and the `}$$` terminator.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FlowVarRef<'a> {
    /// The declared type.
    pub ty: FlowVarType,
    /// The name exactly as written, interior whitespace preserved.
    pub name: &'a str,
}

#[cfg(test)]
mod tests;
