use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: String,
    pub due_at: DateTime<Utc>,
    pub link: TaskLink,
    pub kind: TaskKind,
    pub assignee_id: String,
    pub status: TaskStatus,
    pub created_at: DateTime<Utc>,
}

/// Tagged reference to the entity a task belongs to. The discriminant is
/// explicit; nothing infers the target kind from free text.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id")]
pub enum TaskLink {
    Lead(String),
    Deal(String),
    Property(String),
}

impl TaskLink {
    pub fn id(&self) -> &str {
        match self {
            TaskLink::Lead(id) | TaskLink::Deal(id) | TaskLink::Property(id) => id,
        }
    }
}

/// Stored calendar category. The source application guessed this from
/// title substrings; here it is data, set when the task is created.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum TaskKind {
    Visit,
    Meeting,
    FollowUp,
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum TaskStatus {
    Open,
    Done,
}
