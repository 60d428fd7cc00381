use thiserror::Error;

/// Errors from model provider calls.
///
/// `MissingCredential` is raised once at adapter construction; the
/// remaining variants surface per-call transport and provider faults.
/// None of them are retried.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("credential missing: {0}")]
    MissingCredential(String),
    #[error("network: {0}")]
    Network(String),
    #[error("provider api: {0}")]
    Api(String),
    #[error("invalid provider response: {0}")]
    InvalidResponse(String),
}
