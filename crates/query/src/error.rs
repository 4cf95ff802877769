use thiserror::Error;

pub type Result<T> = std::result::Result<T, QueryError>;

/// Rejected query parameters.
///
/// Fatal to the single query call only; the node snapshot is never touched.
/// The caller must supply a corrected state and query again.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    #[error("page size must be at least 1")]
    InvalidPageSize,

    #[error("page number must be at least 1")]
    InvalidPage,
}
