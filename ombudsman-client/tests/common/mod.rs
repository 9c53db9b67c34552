//! Shared test utilities for ombudsman-client integration tests.
//!
//! Provides MockMessageSource, an in-memory [`MessageSource`] that applies updates the way
//! the API does and counts calls, plus message builders.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{TimeZone, Utc};
use ombudsman_client::{ClientError, MessageSource, Result};
use ombudsman_core::{Message, MessageStatus, MessageType, MessageUpdate};
use tokio::sync::RwLock;

/// In-memory message source. `fail_fetch` makes every `fetch_all` return a 500.
#[derive(Clone, Default)]
pub struct MockMessageSource {
    messages: Arc<RwLock<Vec<Message>>>,
    fetch_calls: Arc<AtomicUsize>,
    update_calls: Arc<AtomicUsize>,
    fail_fetch: Arc<RwLock<bool>>,
}

#[allow(dead_code)]
impl MockMessageSource {
    pub fn new(messages: Vec<Message>) -> Self {
        Self {
            messages: Arc::new(RwLock::new(messages)),
            ..Self::default()
        }
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }

    pub fn update_calls(&self) -> usize {
        self.update_calls.load(Ordering::SeqCst)
    }

    /// Replaces the server-side collection, e.g. to simulate deletions by another admin.
    pub async fn replace(&self, messages: Vec<Message>) {
        *self.messages.write().await = messages;
    }

    pub async fn set_fail_fetch(&self, fail: bool) {
        *self.fail_fetch.write().await = fail;
    }
}

#[async_trait]
impl MessageSource for MockMessageSource {
    async fn fetch_all(&self) -> Result<Vec<Message>> {
        self.fetch_calls.fetch_add(1, Ordering::SeqCst);
        if *self.fail_fetch.read().await {
            return Err(ClientError::Api {
                status: 500,
                message: "unavailable".to_string(),
            });
        }
        Ok(self.messages.read().await.clone())
    }

    async fn fetch_one(&self, id: &str) -> Result<Message> {
        self.messages
            .read()
            .await
            .iter()
            .find(|m| m.id == id)
            .cloned()
            .ok_or_else(|| ClientError::NotFound(format!("/admin/messages/{}", id)))
    }

    async fn update(&self, id: &str, update: &MessageUpdate) -> Result<()> {
        self.update_calls.fetch_add(1, Ordering::SeqCst);
        let mut messages = self.messages.write().await;
        let slot = messages
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or_else(|| ClientError::NotFound(format!("/admin/messages/{}", id)))?;
        *slot = update.apply(slot);
        Ok(())
    }
}

/// Message `m-{n}` created `n` minutes after a fixed instant.
pub fn create_test_message(n: usize, message_type: MessageType, status: MessageStatus) -> Message {
    Message {
        id: format!("m-{}", n),
        name: (n % 2 == 0).then(|| format!("Sender {}", n)),
        email: None,
        message_type,
        content: format!("Message number {}", n),
        status,
        created_at: Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
            + chrono::Duration::minutes(n as i64),
        admin_response: None,
    }
}

/// `count` messages cycling through every type and status.
#[allow(dead_code)]
pub fn create_test_messages(count: usize) -> Vec<Message> {
    (1..=count)
        .map(|n| {
            create_test_message(
                n,
                MessageType::ALL[n % MessageType::ALL.len()],
                MessageStatus::ALL[n % MessageStatus::ALL.len()],
            )
        })
        .collect()
}
