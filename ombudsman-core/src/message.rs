//! Message record, public-form payload and admin update.
//!
//! Records are values: an admin edit produces a new [`Message`] through
//! [`MessageUpdate::apply`] or the `with_*` helpers and never mutates shared state.

use chrono::{DateTime, Utc};
use pagination::Record;
use serde::{Deserialize, Serialize};

use crate::error::{OmbudsmanError, Result};
use crate::types::{parse_filter, MessageStatus, MessageType};

/// A submitted message as returned by the admin API.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "type", default)]
    pub message_type: MessageType,
    pub content: String,
    #[serde(default)]
    pub status: MessageStatus,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_response: Option<String>,
}

impl Message {
    /// Copy of this message with a new status.
    pub fn with_status(self, status: MessageStatus) -> Self {
        Self { status, ..self }
    }

    /// Copy of this message with a new admin response.
    pub fn with_admin_response(self, admin_response: impl Into<String>) -> Self {
        Self {
            admin_response: Some(admin_response.into()),
            ..self
        }
    }

    /// Sender name, or "Anonymous" when the form was sent without one.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("Anonymous")
    }
}

/// Filter slots offered by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MessageFilterKey {
    Type,
    Status,
}

/// Selected value for one filter slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageFilter {
    Type(MessageType),
    Status(MessageStatus),
}

impl MessageFilter {
    /// Slot this value belongs to.
    pub fn key(&self) -> MessageFilterKey {
        match self {
            MessageFilter::Type(_) => MessageFilterKey::Type,
            MessageFilter::Status(_) => MessageFilterKey::Status,
        }
    }

    /// Parses a raw selection for `key`; `all` and empty input clear the slot.
    pub fn parse(key: MessageFilterKey, raw: &str) -> Result<Option<Self>> {
        Ok(match key {
            MessageFilterKey::Type => parse_filter::<MessageType>(raw)?.map(MessageFilter::Type),
            MessageFilterKey::Status => {
                parse_filter::<MessageStatus>(raw)?.map(MessageFilter::Status)
            }
        })
    }
}

impl Record for Message {
    type Id = String;
    type FilterKey = MessageFilterKey;
    type FilterValue = MessageFilter;

    fn id(&self) -> &String {
        &self.id
    }

    fn matches(&self, _key: &MessageFilterKey, value: &MessageFilter) -> bool {
        match value {
            MessageFilter::Type(t) => self.message_type == *t,
            MessageFilter::Status(status) => self.status == *status,
        }
    }
}

/// Partial update sent by an administrator (`PATCH /admin/messages/{id}`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MessageStatus>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin_response: Option<String>,
}

impl MessageUpdate {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(mut self, status: MessageStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn admin_response(mut self, response: impl Into<String>) -> Self {
        self.admin_response = Some(response.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none() && self.admin_response.is_none()
    }

    /// Returns a new message with the set fields replaced.
    pub fn apply(&self, message: &Message) -> Message {
        let mut updated = message.clone();
        if let Some(status) = self.status {
            updated = updated.with_status(status);
        }
        if let Some(ref response) = self.admin_response {
            updated = updated.with_admin_response(response.clone());
        }
        updated
    }
}

/// Payload of the public feedback form (`POST /messages`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(rename = "type")]
    pub message_type: MessageType,
    pub content: String,
}

impl NewMessage {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            name: None,
            email: None,
            message_type: MessageType::Other,
            content: content.into(),
        }
    }

    /// Blank names are sent as absent.
    pub fn with_name(mut self, name: Option<String>) -> Self {
        self.name = non_blank(name);
        self
    }

    /// Blank emails are sent as absent.
    pub fn with_email(mut self, email: Option<String>) -> Self {
        self.email = non_blank(email);
        self
    }

    pub fn with_type(mut self, message_type: MessageType) -> Self {
        self.message_type = message_type;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.content.trim().is_empty() {
            return Err(OmbudsmanError::EmptyContent);
        }
        Ok(())
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}
