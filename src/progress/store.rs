//! Progress persistence on top of a key-value store

use anyhow::{Context, Result};

use super::record::ProgressRecord;
use crate::storage::KeyValueStore;

const RECORD_PREFIX: &str = "topic-progress-";

/// Key holding the JSON record for a topic
pub fn record_key(topic_id: &str) -> String {
    format!("{RECORD_PREFIX}{topic_id}")
}

/// Key holding the bare scroll percentage for a topic
pub fn percent_key(topic_id: &str) -> String {
    format!("topic_{topic_id}_progress")
}

/// Reads and writes [`ProgressRecord`]s, one per topic
#[derive(Debug)]
pub struct ProgressStore<S> {
    store: S,
}

impl<S: KeyValueStore> ProgressStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying key-value store
    pub fn inner(&self) -> &S {
        &self.store
    }

    /// Write the full record for `topic_id`, replacing whatever was there.
    ///
    /// The scroll percentage is mirrored under the scalar key as well.
    pub fn save(&mut self, topic_id: &str, record: &ProgressRecord) -> Result<()> {
        let json = serde_json::to_string(record)
            .with_context(|| format!("Failed to serialize progress for {topic_id}"))?;

        self.store.set(&record_key(topic_id), json)?;
        self.store.set(&percent_key(topic_id), record.scroll_percent.to_string())?;

        if record.completed {
            tracing::info!("Saved completed topic {}", topic_id);
        } else {
            tracing::debug!("Saved progress for {} at {:.0}%", topic_id, record.scroll_percent);
        }
        Ok(())
    }

    /// Load the record for `topic_id`.
    ///
    /// Missing and undecodable entries both come back as `None`.
    pub fn load(&self, topic_id: &str) -> Option<ProgressRecord> {
        let raw = self.store.get(&record_key(topic_id))?;

        match serde_json::from_str(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::debug!("Discarding corrupt progress for {}: {}", topic_id, e);
                None
            }
        }
    }

    /// Load the scalar scroll percentage for `topic_id`
    pub fn load_scroll_percent(&self, topic_id: &str) -> Option<f64> {
        let raw = self.store.get(&percent_key(topic_id))?;
        raw.trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .map(|p| p.clamp(0.0, 100.0))
    }

    /// Every decodable record, sorted by topic id
    pub fn records(&self) -> Vec<ProgressRecord> {
        self.store
            .keys()
            .iter()
            .filter_map(|key| key.strip_prefix(RECORD_PREFIX))
            .filter_map(|topic_id| self.load(topic_id))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;
    use pretty_assertions::assert_eq;

    fn store() -> ProgressStore<MemoryStore> {
        ProgressStore::new(MemoryStore::new())
    }

    #[test]
    fn save_then_load_round_trips() {
        let mut progress = store();
        let record = ProgressRecord {
            scroll_percent: 42.0,
            quiz_score: 2,
            completed: false,
            ..ProgressRecord::new("t1")
        };

        progress.save("t1", &record).unwrap();

        assert_eq!(progress.load("t1"), Some(record));
        assert_eq!(progress.load("t2"), None);
    }

    #[test]
    fn save_overwrites_whole_record() {
        let mut progress = store();
        let first = ProgressRecord { quiz_score: 5, completed: true, ..ProgressRecord::new("t1") };
        progress.save("t1", &first).unwrap();

        let second = ProgressRecord { scroll_percent: 10.0, ..ProgressRecord::new("t1") };
        progress.save("t1", &second).unwrap();

        let loaded = progress.load("t1").unwrap();
        assert_eq!(loaded.quiz_score, 0);
        assert!(!loaded.completed);
    }

    #[test]
    fn corrupt_entry_is_absent() {
        let mut kv = MemoryStore::new();
        kv.set(&record_key("t1"), "{not json".into()).unwrap();
        kv.set(&record_key("t2"), r#"{"topicId":"t2"}"#.into()).unwrap();

        let progress = ProgressStore::new(kv);
        assert!(progress.load("t1").is_none());
        assert!(progress.load("t2").is_none());
        assert!(progress.records().is_empty());
    }

    #[test]
    fn scroll_percent_is_mirrored() {
        let mut progress = store();
        let record = ProgressRecord { scroll_percent: 37.5, ..ProgressRecord::new("dns") };
        progress.save("dns", &record).unwrap();

        assert_eq!(progress.inner().get("topic_dns_progress").as_deref(), Some("37.5"));
        assert_eq!(progress.load_scroll_percent("dns"), Some(37.5));
        assert_eq!(progress.load_scroll_percent("http"), None);
    }

    #[test]
    fn records_lists_all_topics() {
        let mut progress = store();
        progress.save("http", &ProgressRecord::new("http")).unwrap();
        progress.save("dns", &ProgressRecord::new("dns")).unwrap();

        let ids: Vec<_> = progress.records().into_iter().map(|r| r.topic_id).collect();
        assert_eq!(ids, vec!["dns".to_string(), "http".to_string()]);
    }
}
