use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SortKeysError {
    /// The top-level value is neither a plain object nor an array.
    #[error("Expected a plain object or array, got {found}")]
    InvalidInput { found: String },
}
