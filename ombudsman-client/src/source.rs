use async_trait::async_trait;
use ombudsman_core::{Message, MessageUpdate};

use crate::error::Result;

/// Remote owner of the message collection.
///
/// `fetch_all` returns the complete, unfiltered collection; paging and filtering happen
/// client-side.
#[async_trait]
pub trait MessageSource: Send + Sync {
    async fn fetch_all(&self) -> Result<Vec<Message>>;
    async fn fetch_one(&self, id: &str) -> Result<Message>;
    async fn update(&self, id: &str, update: &MessageUpdate) -> Result<()>;
}
