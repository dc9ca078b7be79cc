//! A single to-do item

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One task as stored in tasklist.json
///
/// Tasks are only created by [`TaskList::add`](super::TaskList::add), which
/// assigns the id. Fields are private so the id cannot change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    id: u64,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    complete: bool,
    date_added: DateTime<Utc>,
}

impl Task {
    pub(super) fn new(id: u64, title: String, description: String) -> Self {
        Self {
            id,
            title,
            description,
            complete: false,
            date_added: Utc::now(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn is_complete(&self) -> bool {
        self.complete
    }

    pub fn date_added(&self) -> DateTime<Utc> {
        self.date_added
    }

    pub(super) fn set_complete(&mut self, value: bool) {
        self.complete = value;
    }
}
