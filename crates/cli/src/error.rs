//! CLI error types.

use thiserror::Error;

/// CLI errors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// The model backend could not be constructed, typically because the
    /// credential is missing from the environment.
    #[error(transparent)]
    Model(#[from] runtime::ModelError),

    /// An I/O error occurred while serving.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
