use thiserror::Error;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Record validation failures raised at build time.
///
/// An invalid record is excluded from the node set and collected in the
/// build report; it never aborts the batch.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("record '{0}' is missing an identifier")]
    MissingIdentifier(String),

    #[error("record '{0}' is missing a category")]
    MissingCategory(String),

    #[error("record '{0}' duplicates an existing identifier")]
    DuplicateIdentifier(String),
}
