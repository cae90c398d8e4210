use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocchatError {
    /// A known record type arrived without the fields it needs.
    #[error("malformed stream record: {0}")]
    MalformedRecord(String),
}

pub type Result<T> = std::result::Result<T, DocchatError>;
