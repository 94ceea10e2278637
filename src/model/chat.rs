//! Chat message: stored row, create payload, and patch.
//!
//! `task` names the conversation topic a message belongs to; the list
//! endpoint's `filterByName` parameter matches against it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Clone, Debug, Serialize, FromRow)]
pub struct ChatMessage {
    pub id: Uuid,
    pub task: Option<String>,
    pub message: Option<String>,
    pub date: Option<DateTime<Utc>>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewChatMessage {
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

/// Enumerated patch; a present field overwrites, absent fields are untouched.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct ChatPatch {
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

impl ChatMessage {
    pub fn apply(&mut self, patch: ChatPatch) {
        if patch.task.is_some() {
            self.task = patch.task;
        }
        if patch.message.is_some() {
            self.message = patch.message;
        }
        if patch.date.is_some() {
            self.date = patch.date;
        }
    }
}
