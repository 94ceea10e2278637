//! Todo item: stored row, create payload, and patch.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A stored todo item. Every schema field is nullable; only the identifier is
/// guaranteed, assigned by the server at creation and immutable after.
#[derive(Clone, Debug, Serialize, FromRow)]
pub struct Todo {
    pub id: Uuid,
    pub task: Option<String>,
    pub completed: Option<bool>,
    pub date: Option<DateTime<Utc>>,
    pub finished: Option<DateTime<Utc>>,
}

/// Create payload. All fields optional: creating from a partial or empty body
/// is legal. Unknown fields (including any caller-supplied identifier) are
/// ignored.
#[derive(Clone, Debug, Deserialize)]
pub struct NewTodo {
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finished: Option<DateTime<Utc>>,
}

/// Update patch: enumerated optional fields. A present field overwrites the
/// stored value; an absent (or JSON null) field leaves it unchanged. There is
/// no identifier field, so a caller-supplied id is discarded.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct TodoPatch {
    #[serde(default)]
    pub task: Option<String>,
    #[serde(default)]
    pub completed: Option<bool>,
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
    #[serde(default)]
    pub finished: Option<DateTime<Utc>>,
}

impl Todo {
    /// Shallow merge: copy the patch's present fields onto the row.
    pub fn apply(&mut self, patch: TodoPatch) {
        if patch.task.is_some() {
            self.task = patch.task;
        }
        if patch.completed.is_some() {
            self.completed = patch.completed;
        }
        if patch.date.is_some() {
            self.date = patch.date;
        }
        if patch.finished.is_some() {
            self.finished = patch.finished;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stored() -> Todo {
        Todo {
            id: Uuid::new_v4(),
            task: Some("buy milk".into()),
            completed: Some(false),
            date: Some("2026-08-01T09:00:00Z".parse().unwrap()),
            finished: None,
        }
    }

    #[test]
    fn apply_overwrites_only_present_fields() {
        let mut todo = stored();
        let before_date = todo.date;
        todo.apply(TodoPatch {
            completed: Some(true),
            ..Default::default()
        });
        assert_eq!(todo.completed, Some(true));
        assert_eq!(todo.task.as_deref(), Some("buy milk"));
        assert_eq!(todo.date, before_date);
        assert_eq!(todo.finished, None);
    }

    #[test]
    fn patch_from_empty_body_changes_nothing() {
        let mut todo = stored();
        let original = todo.clone();
        let patch: TodoPatch = serde_json::from_str("{}").unwrap();
        todo.apply(patch);
        assert_eq!(todo.task, original.task);
        assert_eq!(todo.completed, original.completed);
        assert_eq!(todo.date, original.date);
        assert_eq!(todo.finished, original.finished);
    }

    #[test]
    fn patch_discards_identifier_field() {
        let patch: TodoPatch =
            serde_json::from_value(serde_json::json!({
                "id": "1e3c2b34-58cf-4b2c-9c7a-0a1c6d9f1a00",
                "task": "walk dog"
            }))
            .unwrap();
        assert_eq!(patch.task.as_deref(), Some("walk dog"));
    }

    #[test]
    fn patch_null_field_is_treated_as_absent() {
        let mut todo = stored();
        let patch: TodoPatch =
            serde_json::from_value(serde_json::json!({ "task": null, "completed": true }))
                .unwrap();
        todo.apply(patch);
        assert_eq!(todo.task.as_deref(), Some("buy milk"));
        assert_eq!(todo.completed, Some(true));
    }

    #[test]
    fn create_payload_accepts_empty_body() {
        let new: NewTodo = serde_json::from_str("{}").unwrap();
        assert!(new.task.is_none());
        assert!(new.completed.is_none());
        assert!(new.date.is_none());
        assert!(new.finished.is_none());
    }
}
