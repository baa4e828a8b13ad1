use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// The `FIELDS` table of a response describes an impossible layout
    #[error("Malformed RFC_READ_TABLE response: {0}")]
    MalformedResponse(String),

    #[error("Invalid date/time: {0}")]
    InvalidDateTime(String),
}

pub type Result<T> = std::result::Result<T, Error>;
