pub mod registry;

pub use registry::*;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DatabaseError {
    #[error("Cannot read registry {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("Registry {path} is not a valid hospital record array: {source}")]
    Malformed {
        path: String,
        source: serde_json::Error,
    },

    #[error("Cannot write registry {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },

    #[error("Cannot serialize registry {path}: {source}")]
    Serialize {
        path: String,
        source: serde_json::Error,
    },

    #[error("Record {record} is missing required field '{field}'")]
    MissingField { record: String, field: String },
}
