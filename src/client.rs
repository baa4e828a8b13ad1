use std::future::Future;

use crate::constant::RFC_READ_TABLE;
use crate::decoder::{RowTransform, decode_response};
use crate::error::Error;
use crate::protocol::query::{QueryParameters, build_query};
use crate::protocol::response::RfcResponse;
use crate::request::TableReadRequest;
use crate::row::Record;

/// The capability to execute a remote function
///
/// Connection handling, authentication, timeouts and retries all belong to
/// the implementor. Errors are handed back to the caller of [`read_table`]
/// untouched, so `Error` only needs to absorb the crate's own [`Error`].
pub trait RemoteCall {
    type Error: From<Error>;

    fn call(
        &self,
        function: &str,
        query: &QueryParameters,
    ) -> impl Future<Output = Result<RfcResponse, Self::Error>> + Send;
}

impl<C: RemoteCall + ?Sized> RemoteCall for &C {
    type Error = C::Error;

    fn call(
        &self,
        function: &str,
        query: &QueryParameters,
    ) -> impl Future<Output = Result<RfcResponse, Self::Error>> + Send {
        (**self).call(function, query)
    }
}

/// Client type for dry runs: `read_table::<DryRun>(None, &request)`
///
/// It has no values, so it can never be called.
#[derive(Debug, Clone, Copy)]
pub enum DryRun {}

impl RemoteCall for DryRun {
    type Error = Error;

    async fn call(&self, _function: &str, _query: &QueryParameters) -> Result<RfcResponse, Error> {
        match *self {}
    }
}

/// Result of [`read_table`]
#[derive(Debug, Clone, PartialEq)]
pub enum ReadTableOutput {
    /// No client was given: the parameters that would have been sent
    Query(QueryParameters),
    /// Decoded rows, one per `DATA` line
    Rows(Vec<Record>),
}

impl ReadTableOutput {
    pub fn query(&self) -> Option<&QueryParameters> {
        match self {
            ReadTableOutput::Query(q) => Some(q),
            ReadTableOutput::Rows(_) => None,
        }
    }

    pub fn into_rows(self) -> Option<Vec<Record>> {
        match self {
            ReadTableOutput::Rows(rows) => Some(rows),
            ReadTableOutput::Query(_) => None,
        }
    }
}

/// Read a table through `RFC_READ_TABLE`
///
/// Without a `client` nothing is sent and the query parameters are returned.
/// Otherwise the response is decoded into one [`Record`] per line. Failures
/// of the client are returned as they are, without retry.
#[tracing::instrument(skip_all, fields(table = %request.table))]
pub async fn read_table<C: RemoteCall>(
    client: Option<&C>,
    request: &TableReadRequest,
) -> Result<ReadTableOutput, C::Error> {
    let query = build_query(request);
    tracing::debug!(
        options = query.options.len(),
        fields = query.fields.len(),
        rowskips = query.rowskips,
        rowcount = query.rowcount,
        "built RFC_READ_TABLE query"
    );

    let Some(client) = client else {
        return Ok(ReadTableOutput::Query(query));
    };

    let response = client.call(RFC_READ_TABLE, &query).await?;
    let transform = request
        .row_transform
        .as_deref()
        .map(|t| t as &dyn RowTransform);
    let rows = decode_response(&response, &request.field_names, transform)?;
    Ok(ReadTableOutput::Rows(rows))
}

/// Build the query parameters without calling anything
pub fn dry_run(request: &TableReadRequest) -> QueryParameters {
    build_query(request)
}
