//! Builds `RFC_READ_TABLE` calls and decodes the fixed-width rows they return.
//!
//! The remote call itself is supplied by the caller through [`RemoteCall`].

pub mod client;
pub mod constant;
pub mod datetime;
pub mod decoder;
pub mod error;
pub mod protocol;
mod request;
pub mod row;
pub mod value;

pub use client::{DryRun, ReadTableOutput, RemoteCall, dry_run, read_table};
pub use datetime::date_time_union;
pub use decoder::{RowDecoder, RowTransform};
pub use request::TableReadRequest;
pub use row::Record;
pub use value::Value;
