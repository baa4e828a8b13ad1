/// Name of the remote function every table read is sent to
pub const RFC_READ_TABLE: &str = "RFC_READ_TABLE";

/// Maximum width of a single `OPTIONS` line (in characters)
pub const OPTION_LINE_WIDTH: usize = 72;

/// ABAP type tag of a field in the `FIELDS` table of the response
///
/// Only `N` and `P` change how a field is decoded. Every other tag
/// (`C`, `D`, `T`, `X`, ...) is read as plain text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// `N`: numeric text, decoded as a base-10 integer
    Numeric,
    /// `P`: packed decimal, rendered as text and decoded as a float
    Packed,
    /// Any other tag: the characters are returned untouched
    Text,
}

impl FieldType {
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "N" => Self::Numeric,
            "P" => Self::Packed,
            _ => Self::Text,
        }
    }
}
