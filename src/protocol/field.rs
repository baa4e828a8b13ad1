use std::collections::{BTreeMap, HashMap};

use crate::constant::FieldType;
use crate::error::{Error, Result};
use crate::protocol::response::FieldDescriptor;
use crate::row::Record;
use crate::value::{Value, char_range};

/// Decoding plan for one column of the `DATA` lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldLayout {
    /// Output key in the decoded [`Record`]
    pub key: String,
    /// First character of the field
    pub start: usize,
    /// One past the last character of the field
    pub end: usize,
    pub field_type: FieldType,
    /// Index of `key` in a decoded record
    slot: usize,
}

impl FieldLayout {
    /// Compile a descriptor into a layout
    ///
    /// `rename` replaces the descriptor's `FIELDNAME` as output key when it is non-empty.
    pub fn new(descriptor: &FieldDescriptor, rename: Option<&str>) -> Result<Self> {
        let start = parse_position(&descriptor.fieldname, "OFFSET", &descriptor.offset)?;
        let length = parse_position(&descriptor.fieldname, "LENGTH", &descriptor.length)?;
        if length == 0 {
            return Err(Error::MalformedResponse(format!(
                "field {} has zero LENGTH",
                descriptor.fieldname
            )));
        }
        let end = start.checked_add(length).ok_or_else(|| {
            Error::MalformedResponse(format!(
                "field {} ends past the addressable range",
                descriptor.fieldname
            ))
        })?;

        let key = match rename {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => descriptor.fieldname.clone(),
        };

        Ok(Self {
            key,
            start,
            end,
            field_type: FieldType::from_tag(&descriptor.type_tag),
            slot: 0,
        })
    }

    /// Decode this field from `line` into its slot of `record`
    ///
    /// Layouts must come from one [`compile_layouts`] call and be applied in
    /// order, starting from an empty record.
    pub(crate) fn decode_into(&self, line: &str, record: &mut Record) {
        let raw = char_range(line, self.start, self.end);
        record.put_at(self.slot, &self.key, Value::decode(self.field_type, raw));
    }
}

/// Compile every descriptor, renaming by position through `field_names`
///
/// Layouts sharing an output key share one record slot: the key stays at
/// its first position and the last field written wins.
pub fn compile_layouts(
    descriptors: &[FieldDescriptor],
    field_names: &BTreeMap<usize, String>,
) -> Result<Vec<FieldLayout>> {
    let mut slots: HashMap<String, usize> = HashMap::with_capacity(descriptors.len());
    descriptors
        .iter()
        .enumerate()
        .map(|(idx, descriptor)| {
            let mut layout =
                FieldLayout::new(descriptor, field_names.get(&idx).map(String::as_str))?;
            let next = slots.len();
            layout.slot = *slots.entry(layout.key.clone()).or_insert(next);
            Ok(layout)
        })
        .collect()
}

fn parse_position(fieldname: &str, what: &str, text: &str) -> Result<usize> {
    text.trim().parse().map_err(|e| {
        Error::MalformedResponse(format!("field {fieldname} has invalid {what} {text:?}: {e}"))
    })
}
