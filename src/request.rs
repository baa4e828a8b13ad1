use std::collections::BTreeMap;
use std::fmt;

use crate::decoder::RowTransform;

/// A declarative `RFC_READ_TABLE` read
///
/// ```rs
/// let request = TableReadRequest::new("MARA")
///     .fields(["MATNR", "MTART"])
///     .filter("MTART = 'FERT'")
///     .limit(100)
///     .rename(0, "material");
/// ```
#[derive(Default)]
pub struct TableReadRequest {
    /// Table to read
    pub table: String,

    /// Fields to read, in request order. Empty reads every field.
    pub fields: Vec<String>,

    /// `WHERE` clause in Open SQL syntax
    pub filter: Option<String>,

    /// Number of rows to skip
    pub skip: u32,

    /// Maximum number of rows, 0 for no limit
    pub limit: u32,

    /// Output key per position of the response's `FIELDS` table
    pub field_names: BTreeMap<usize, String>,

    /// Applied to every decoded record before it is returned
    pub row_transform: Option<Box<dyn RowTransform + Send + Sync>>,
}

impl TableReadRequest {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            ..Default::default()
        }
    }

    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }

    pub fn skip(mut self, skip: u32) -> Self {
        self.skip = skip;
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Store the field at `position` of the response layout under `name`
    pub fn rename(mut self, position: usize, name: impl Into<String>) -> Self {
        self.field_names.insert(position, name.into());
        self
    }

    pub fn row_transform<T>(mut self, transform: T) -> Self
    where
        T: RowTransform + Send + Sync + 'static,
    {
        self.row_transform = Some(Box::new(transform));
        self
    }
}

impl fmt::Debug for TableReadRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TableReadRequest")
            .field("table", &self.table)
            .field("fields", &self.fields)
            .field("filter", &self.filter)
            .field("skip", &self.skip)
            .field("limit", &self.limit)
            .field("field_names", &self.field_names)
            .field("row_transform", &self.row_transform.is_some())
            .finish()
    }
}
