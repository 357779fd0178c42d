#![forbid(unsafe_code)]

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Status {
    Todo,
    InProgress,
    Done,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Todo => "TODO",
            Self::InProgress => "IN_PROGRESS",
            Self::Done => "DONE",
        })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// 0-based list position; reassigned when earlier tasks are deleted.
    pub id: usize,
    pub description: String,
    pub status: Status,
    pub created_at: NaiveDateTime,
    /// Set by description updates only; status changes leave it untouched.
    #[serde(default)]
    pub updated_at: Option<NaiveDateTime>,
}

impl Task {
    #[must_use]
    pub fn new(id: usize, description: String) -> Self {
        Self {
            id,
            description,
            status: Status::Todo,
            created_at: now(),
            updated_at: None,
        }
    }

    /// One line of `list` output; users see 1-based ordinals.
    #[must_use]
    pub fn view_line(&self) -> String {
        format!(
            "Task: {}, Description: {}, Status: {}",
            self.id + 1,
            self.description,
            self.status
        )
    }
}

pub(crate) fn now() -> NaiveDateTime {
    chrono::Local::now().naive_local()
}
