//! Wire models used only by the HTTP client.

mod api_error;
mod login;

pub(crate) use api_error::{message_text, ApiErrorBody};
pub(crate) use login::{LoginRequest, LoginResponse};
