pub mod field;
pub mod query;
pub mod response;

pub use field::FieldLayout;
pub use query::{QueryField, QueryParameters};
pub use response::{DataLine, FieldDescriptor, RfcResponse};
