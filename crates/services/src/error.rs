//! Shared error types for the services crate.

use thiserror::Error;

/// Errors emitted by `ApiClient`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ApiError {
    #[error("api is not configured")]
    Disabled,
    #[error("invalid api url: {0}")]
    InvalidUrl(String),
    #[error("api request failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors reported by a navigation host while presenting a screen.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum NavigationError {
    #[error("no screen available to present from: {0}")]
    Unavailable(String),
    #[error("presentation rejected: {0}")]
    Rejected(String),
}

/// Errors emitted by `StudyFlow`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StudyFlowError {
    #[error(transparent)]
    Navigation(#[from] NavigationError),
}
