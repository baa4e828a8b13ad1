/// Export tables of an `RFC_READ_TABLE` call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub struct RfcResponse {
    /// Layout of each column in the `DATA` lines
    pub fields: Vec<FieldDescriptor>,
    pub data: Vec<DataLine>,
}

/// One row of the `FIELDS` export table
///
/// `OFFSET` and `LENGTH` arrive as decimal strings and count characters.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub struct FieldDescriptor {
    pub fieldname: String,
    #[cfg_attr(feature = "serde", serde(rename = "TYPE"))]
    pub type_tag: String,
    pub offset: String,
    pub length: String,
}

impl FieldDescriptor {
    pub fn new(
        fieldname: impl Into<String>,
        type_tag: impl Into<String>,
        offset: usize,
        length: usize,
    ) -> Self {
        Self {
            fieldname: fieldname.into(),
            type_tag: type_tag.into(),
            offset: offset.to_string(),
            length: length.to_string(),
        }
    }
}

/// One row of the `DATA` export table: a fixed-width line with no delimiters
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub struct DataLine {
    pub wa: String,
}

impl DataLine {
    pub fn new(wa: impl Into<String>) -> Self {
        Self { wa: wa.into() }
    }
}

impl From<&str> for DataLine {
    fn from(wa: &str) -> Self {
        Self::new(wa)
    }
}
