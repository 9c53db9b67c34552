//! Closed vocabularies used by the desk: message type and triage status.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::OmbudsmanError;

/// Kind of feedback chosen on the public form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum MessageType {
    Suggestion,
    Complaint,
    Compliment,
    Report,
    #[default]
    Other,
}

impl MessageType {
    pub const ALL: [MessageType; 5] = [
        MessageType::Suggestion,
        MessageType::Complaint,
        MessageType::Compliment,
        MessageType::Report,
        MessageType::Other,
    ];

    /// Wire name, as sent to and received from the API.
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageType::Suggestion => "suggestion",
            MessageType::Complaint => "complaint",
            MessageType::Compliment => "compliment",
            MessageType::Report => "report",
            MessageType::Other => "other",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MessageType::Suggestion => "Suggestion",
            MessageType::Complaint => "Complaint",
            MessageType::Compliment => "Compliment",
            MessageType::Report => "Report",
            MessageType::Other => "Other",
        }
    }
}

impl fmt::Display for MessageType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageType {
    type Err = OmbudsmanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        MessageType::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| OmbudsmanError::UnknownType(s.to_string()))
    }
}

/// Unknown types coming from the API are shown as `Other`.
impl From<String> for MessageType {
    fn from(s: String) -> Self {
        s.parse().unwrap_or_default()
    }
}

/// Triage state set by an administrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum MessageStatus {
    #[default]
    Received,
    Analyzing,
    Responded,
    Archived,
}

impl MessageStatus {
    pub const ALL: [MessageStatus; 4] = [
        MessageStatus::Received,
        MessageStatus::Analyzing,
        MessageStatus::Responded,
        MessageStatus::Archived,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MessageStatus::Received => "received",
            MessageStatus::Analyzing => "analyzing",
            MessageStatus::Responded => "responded",
            MessageStatus::Archived => "archived",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MessageStatus::Received => "Received",
            MessageStatus::Analyzing => "Under analysis",
            MessageStatus::Responded => "Responded",
            MessageStatus::Archived => "Archived",
        }
    }
}

impl fmt::Display for MessageStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MessageStatus {
    type Err = OmbudsmanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        MessageStatus::ALL
            .into_iter()
            .find(|status| status.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| OmbudsmanError::UnknownStatus(s.to_string()))
    }
}

/// Unknown statuses coming from the API are treated as freshly received.
impl From<String> for MessageStatus {
    fn from(s: String) -> Self {
        s.parse().unwrap_or_default()
    }
}

/// Parses a filter selection. Empty input and `all` mean "no constraint".
pub fn parse_filter<T: FromStr>(raw: &str) -> Result<Option<T>, T::Err> {
    let raw = raw.trim();
    if raw.is_empty() || raw.eq_ignore_ascii_case("all") {
        return Ok(None);
    }
    raw.parse().map(Some)
}
