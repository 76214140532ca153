//! Persisted progress snapshot for one topic

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Completion state of a single topic.
///
/// Serialized with camelCase field names and an RFC 3339 `lastVisited`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProgressRecord {
    /// Topic this record belongs to
    pub topic_id: String,

    /// How far through the topic the reader has scrolled (0-100)
    pub scroll_percent: f64,

    /// Correct answers in the most recent completed quiz
    pub quiz_score: u32,

    /// Has the topic been completed?
    pub completed: bool,

    /// When the topic was last interacted with
    pub last_visited: DateTime<Utc>,
}

impl ProgressRecord {
    /// A fresh record for a topic that has never been visited
    pub fn new(topic_id: impl Into<String>) -> Self {
        Self {
            topic_id: topic_id.into(),
            scroll_percent: 0.0,
            quiz_score: 0,
            completed: false,
            last_visited: Utc::now(),
        }
    }

    /// Update the last-visited timestamp to now
    pub fn touch(&mut self) {
        self.last_visited = Utc::now();
    }

    /// Has the reader started this topic at all?
    pub fn is_started(&self) -> bool {
        self.completed || self.scroll_percent > 0.0 || self.quiz_score > 0
    }
}
