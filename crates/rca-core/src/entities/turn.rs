use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{ResultCategory, Role};

/// Upper bound for [`ResultItem::confidence`].
pub const MAX_CONFIDENCE: u8 = 100;

/// One message in a conversation.
///
/// Turns are created by the conversation store and never modified afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ChatTurn {
    pub id: String,
    pub role: Role,
    pub text: String,
    pub created_at: DateTime<Utc>,
    /// Result cards. Always empty for user turns.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub attachments: Vec<ResultItem>,
}

impl ChatTurn {
    #[must_use]
    pub fn user(id: impl Into<String>, text: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            role: Role::User,
            text: text.into(),
            created_at,
            attachments: Vec::new(),
        }
    }

    #[must_use]
    pub fn assistant(
        id: impl Into<String>,
        text: impl Into<String>,
        attachments: Vec<ResultItem>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id: id.into(),
            role: Role::Assistant,
            text: text.into(),
            created_at,
            attachments,
        }
    }

    /// Titles of the attached cards, in order.
    #[must_use]
    pub fn attachment_titles(&self) -> Vec<&str> {
        self.attachments.iter().map(|item| item.title.as_str()).collect()
    }
}

/// A structured card (incident, SLO, metric, insight) attached to an assistant turn.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ResultItem {
    /// Unique within the owning turn only.
    pub id: String,
    pub category: ResultCategory,
    pub title: String,
    pub description: String,
    /// Display-only heuristic score in `0..=100`.
    #[schemars(range(max = 100))]
    pub confidence: u8,
    /// Free-form display string such as "5 minutes ago".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub occurred_at: Option<String>,
}

impl ResultItem {
    /// Build a card. Confidence above 100 is clamped.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        category: ResultCategory,
        title: impl Into<String>,
        description: impl Into<String>,
        confidence: u8,
    ) -> Self {
        Self {
            id: id.into(),
            category,
            title: title.into(),
            description: description.into(),
            confidence: confidence.min(MAX_CONFIDENCE),
            occurred_at: None,
        }
    }

    #[must_use]
    pub fn occurred_at(mut self, when: impl Into<String>) -> Self {
        self.occurred_at = Some(when.into());
        self
    }
}
