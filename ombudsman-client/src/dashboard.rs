//! Admin dashboard session: a message source plus the client-side pagination engine.
//!
//! The source is asked for the full collection; the engine owns filters and the page
//! cursor. After a successful remote update the collection is fetched again, and the
//! engine clamps the cursor if the collection shrank.

use ombudsman_core::{Message, MessageStats, MessageUpdate};
use pagination::{PaginationFilterEngine, PaginationOptions};
use tracing::{info, warn};

use crate::error::Result;
use crate::source::MessageSource;

pub struct Dashboard<S: MessageSource> {
    source: S,
    engine: PaginationFilterEngine<Message>,
}

impl<S: MessageSource> Dashboard<S> {
    pub fn new(source: S) -> Self {
        Self::with_options(source, PaginationOptions::default())
    }

    pub fn with_options(source: S, options: PaginationOptions) -> Self {
        Self {
            source,
            engine: PaginationFilterEngine::with_options(Vec::new(), options),
        }
    }

    /// Fetches the full collection and hands it to the engine.
    ///
    /// On error the previously loaded collection is kept.
    pub async fn refresh(&mut self) -> Result<usize> {
        let messages = self.source.fetch_all().await?;
        let count = messages.len();
        self.engine.set_records(messages);
        info!(
            count,
            total_pages = self.engine.total_pages(),
            current_page = self.engine.current_page(),
            "Dashboard refreshed"
        );
        Ok(count)
    }

    /// Sends an admin update, then reloads the collection.
    ///
    /// An error means the update was not applied. Once the source accepted it, a failed
    /// reload is only logged and the update is applied to the loaded copy instead.
    pub async fn update_message(&mut self, id: &str, update: &MessageUpdate) -> Result<()> {
        self.source.update(id, update).await?;

        if let Err(e) = self.refresh().await {
            warn!(id = %id, error = %e, "Update applied but reload failed, patching loaded copy");
            let patched = self
                .engine
                .records()
                .iter()
                .map(|message| {
                    if message.id == id {
                        update.apply(message)
                    } else {
                        message.clone()
                    }
                })
                .collect();
            self.engine.set_records(patched);
        }
        Ok(())
    }

    /// Fresh copy of one message from the source.
    pub async fn details(&self, id: &str) -> Result<Message> {
        self.source.fetch_one(id).await
    }

    /// Counters over the unfiltered collection.
    pub fn stats(&self) -> MessageStats {
        MessageStats::from_messages(self.engine.records())
    }

    pub fn engine(&self) -> &PaginationFilterEngine<Message> {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut PaginationFilterEngine<Message> {
        &mut self.engine
    }

    pub fn source(&self) -> &S {
        &self.source
    }
}
