use samscope_api::ClassId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TableError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Class declared twice: {0}")]
    DuplicateClass(ClassId),
}

pub type Result<T> = std::result::Result<T, TableError>;
