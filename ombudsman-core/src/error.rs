use thiserror::Error;

#[derive(Error, Debug)]
pub enum OmbudsmanError {
    #[error("Message content is required")]
    EmptyContent,

    #[error("Unknown message type: {0}")]
    UnknownType(String),

    #[error("Unknown message status: {0}")]
    UnknownStatus(String),
}

pub type Result<T> = std::result::Result<T, OmbudsmanError>;
