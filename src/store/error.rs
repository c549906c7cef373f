//! Errors surfaced by datastore operations.

use thiserror::Error;

/// Error returned by base stores and forwarded unchanged by scoped views.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested key does not exist.
    #[error("datastore: key not found")]
    NotFound,

    /// The store has been closed.
    #[error("datastore: closed")]
    Closed,

    /// Failure inside a concrete backend.
    #[error("datastore backend: {0}")]
    Backend(#[source] Box<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps an arbitrary backend error.
    pub fn backend<E>(err: E) -> Self
    where
        E: Into<Box<dyn std::error::Error + Send + Sync>>,
    {
        Error::Backend(err.into())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Error::NotFound)
    }
}

pub type Result<T, E = Error> = core::result::Result<T, E>;
