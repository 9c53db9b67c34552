//! Client crate: remote API access and the admin dashboard session.
//!
//! ## Modules
//!
//! - [`error`] – Client error types
//! - [`source`] – [`MessageSource`] trait (fetch all / fetch one / update)
//! - [`api_client`] – [`ApiClient`], reqwest implementation plus login and public submit
//! - [`dashboard`] – [`Dashboard`], source + pagination engine
//! - [`token`] – token masking for logs

pub mod api_client;
pub mod dashboard;
pub mod error;
mod models;
pub mod source;
pub mod token;

#[cfg(test)]
mod api_client_test;

pub use api_client::{ApiClient, DEFAULT_API_URL};
pub use dashboard::Dashboard;
pub use error::{ClientError, Result};
pub use source::MessageSource;
pub use token::mask_token;
