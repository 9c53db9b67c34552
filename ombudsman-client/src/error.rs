//! Client error types.
//!
//! Returned by [`crate::ApiClient`], [`crate::MessageSource`] implementations and
//! [`crate::Dashboard`].

use ombudsman_core::OmbudsmanError;
use thiserror::Error;

/// Errors that can occur when talking to the ombudsman API.
#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Invalid API base URL: {0}")]
    InvalidUrl(String),
    #[error("No admin token configured")]
    MissingToken,
    #[error("Unauthorized: admin token missing, invalid or expired")]
    Unauthorized,
    #[error("Login failed: {0}")]
    Login(String),
    #[error("Not found: {0}")]
    NotFound(String),
    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error(transparent)]
    Core(#[from] OmbudsmanError),
}

pub type Result<T> = std::result::Result<T, ClientError>;
