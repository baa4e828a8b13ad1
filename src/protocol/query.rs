use crate::constant::OPTION_LINE_WIDTH;
use crate::request::TableReadRequest;

/// Import parameters of an `RFC_READ_TABLE` call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub struct QueryParameters {
    pub query_table: String,
    pub rowskips: u32,
    /// 0 means no limit
    pub rowcount: u32,
    /// `WHERE` clause, split into lines of at most 72 characters
    pub options: Vec<String>,
    /// Requested fields; empty selects every field of the table
    pub fields: Vec<QueryField>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "SCREAMING_SNAKE_CASE"))]
pub struct QueryField {
    pub fieldname: String,
}

impl QueryField {
    pub fn new(fieldname: impl Into<String>) -> Self {
        Self {
            fieldname: fieldname.into(),
        }
    }
}

impl From<&TableReadRequest> for QueryParameters {
    fn from(request: &TableReadRequest) -> Self {
        build_query(request)
    }
}

/// Build the import parameters for `request`
pub fn build_query(request: &TableReadRequest) -> QueryParameters {
    QueryParameters {
        query_table: request.table.clone(),
        rowskips: request.skip,
        rowcount: request.limit,
        options: request
            .filter
            .as_deref()
            .map(split_options)
            .unwrap_or_default(),
        fields: request.fields.iter().map(QueryField::new).collect(),
    }
}

/// Split a `WHERE` clause into `OPTIONS` lines of [`OPTION_LINE_WIDTH`] characters
///
/// The last line carries the remainder. An empty clause produces no lines.
pub fn split_options(filter: &str) -> Vec<String> {
    let chars: Vec<char> = filter.chars().collect();
    chars
        .chunks(OPTION_LINE_WIDTH)
        .map(|chunk| chunk.iter().collect())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_empty() {
        assert!(split_options("").is_empty());
    }

    #[test]
    fn split_short() {
        assert_eq!(split_options("MANDT = '100'"), vec!["MANDT = '100'"]);
    }

    #[test]
    fn split_exact_multiple() {
        let filter = "A".repeat(144);
        let lines = split_options(&filter);
        assert_eq!(lines.len(), 2);
        assert!(lines.iter().all(|line| line.chars().count() == 72));
    }

    #[test]
    fn split_reassembles() {
        for len in [1_usize, 71, 72, 73, 150, 216, 217] {
            let filter: String = ('a'..='z').cycle().take(len).collect();
            let lines = split_options(&filter);
            assert_eq!(lines.len(), len.div_ceil(72), "len={len}");
            assert_eq!(lines.concat(), filter);
            let (last, full) = lines.split_last().unwrap();
            assert!(full.iter().all(|line| line.len() == 72));
            assert!(!last.is_empty() && last.len() <= 72);
        }
    }

    #[test]
    fn split_never_breaks_a_char() {
        let filter = "\u{00e4}".repeat(73);
        let lines = split_options(&filter);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].chars().count(), 72);
        assert_eq!(lines[1], "\u{00e4}");
    }

    #[test]
    fn build_defaults() {
        let query = build_query(&TableReadRequest::new("MARA"));
        assert_eq!(
            query,
            QueryParameters {
                query_table: "MARA".to_string(),
                rowskips: 0,
                rowcount: 0,
                options: vec![],
                fields: vec![],
            }
        );
    }

    #[test]
    fn build_copies_request() {
        let request = TableReadRequest::new("T001")
            .fields(["BUKRS", "BUTXT"])
            .filter("BUKRS = '1000'")
            .skip(3)
            .limit(50);
        let query = QueryParameters::from(&request);
        assert_eq!(query.query_table, "T001");
        assert_eq!(query.rowskips, 3);
        assert_eq!(query.rowcount, 50);
        assert_eq!(query.options, vec!["BUKRS = '1000'"]);
        assert_eq!(
            query.fields,
            vec![QueryField::new("BUKRS"), QueryField::new("BUTXT")]
        );
    }

    #[test]
    fn build_empty_filter_has_no_options() {
        let query = build_query(&TableReadRequest::new("T001").filter(""));
        assert!(query.options.is_empty());
    }
}
