//! Error types

use thiserror::Error;

/// Errors raised while assembling a grid.
///
/// These are construction mistakes by the caller; rendering itself never
/// fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GridError {
    #[error("duplicate column key '{0}'")]
    DuplicateColumn(String),
    #[error("page numbers start at 1")]
    InvalidPage,
    #[error("page size must be greater than zero")]
    InvalidLimit,
}
