use std::collections::BTreeMap;

use auto_impl::auto_impl;

use crate::error::Result;
use crate::protocol::field::{FieldLayout, compile_layouts};
use crate::protocol::response::{DataLine, FieldDescriptor, RfcResponse};
use crate::row::Record;

/// Post-processing applied to each decoded record
///
/// Implemented for every `Fn(Record) -> Record`.
#[auto_impl(Fn)]
pub trait RowTransform {
    fn transform(&self, record: Record) -> Record;
}

/// Decodes the fixed-width `DATA` lines of one response
///
/// The `FIELDS` table is compiled once into [`FieldLayout`]s, which are then
/// applied to every line in order.
#[derive(Debug, Clone)]
pub struct RowDecoder {
    layouts: Vec<FieldLayout>,
}

impl RowDecoder {
    /// `field_names` maps a position in `descriptors` to its output key
    pub fn new(
        descriptors: &[FieldDescriptor],
        field_names: &BTreeMap<usize, String>,
    ) -> Result<Self> {
        Ok(Self {
            layouts: compile_layouts(descriptors, field_names)?,
        })
    }

    pub fn layouts(&self) -> &[FieldLayout] {
        &self.layouts
    }

    /// Decode one line. Keys follow the order of the `FIELDS` table.
    pub fn decode_line(&self, line: &str) -> Record {
        let mut record = Record::with_capacity(self.layouts.len());
        for layout in &self.layouts {
            layout.decode_into(line, &mut record);
        }
        record
    }

    /// Decode every line, applying `transform` to each record when given
    pub fn decode_lines(
        &self,
        lines: &[DataLine],
        transform: Option<&dyn RowTransform>,
    ) -> Vec<Record> {
        lines
            .iter()
            .map(|line| {
                let record = self.decode_line(&line.wa);
                match transform {
                    Some(t) => t.transform(record),
                    None => record,
                }
            })
            .collect()
    }
}

/// Decode a complete response
pub fn decode_response(
    response: &RfcResponse,
    field_names: &BTreeMap<usize, String>,
    transform: Option<&dyn RowTransform>,
) -> Result<Vec<Record>> {
    let decoder = RowDecoder::new(&response.fields, field_names)?;
    let rows = decoder.decode_lines(&response.data, transform);
    tracing::debug!(
        fields = decoder.layouts().len(),
        rows = rows.len(),
        "decoded RFC_READ_TABLE response"
    );
    Ok(rows)
}
