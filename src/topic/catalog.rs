//! The set of available topics

use std::path::Path;

use anyhow::{Context, Result};

use super::TopicError;
use super::model::TopicDefinition;

/// Topics compiled into the binary, in course order
const BUILTIN_TOPICS: &[(&str, &str)] = &[
    ("dns.json", include_str!("../../topics/dns.json")),
    ("http.json", include_str!("../../topics/http.json")),
    ("ajax.json", include_str!("../../topics/ajax.json")),
    ("frameworks.json", include_str!("../../topics/frameworks.json")),
];

/// Ordered collection of topics with unique ids
#[derive(Debug, Clone, Default)]
pub struct TopicCatalog {
    topics: Vec<TopicDefinition>,
}

impl TopicCatalog {
    /// The topics that ship with the binary
    pub fn builtin() -> Result<Self, TopicError> {
        let mut catalog = Self::default();
        for (name, json) in BUILTIN_TOPICS {
            let topic = TopicDefinition::from_json(json).map_err(|e| TopicError::Builtin {
                file: name.to_string(),
                source: Box::new(e),
            })?;
            catalog.insert(topic);
        }
        Ok(catalog)
    }

    /// Load every `*.json` topic in `dir`, returning how many were added.
    ///
    /// A topic with the same id as an existing one replaces it in place.
    /// Files that fail to parse are skipped with a warning.
    pub fn load_dir(&mut self, dir: &Path) -> Result<usize> {
        if !dir.exists() {
            return Ok(0);
        }

        let mut paths: Vec<_> = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read topics directory {:?}", dir))?
            .filter_map(|entry| entry.ok().map(|e| e.path()))
            .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
            .collect();
        paths.sort();

        let mut loaded = 0;
        for path in paths {
            let contents = std::fs::read_to_string(&path)
                .with_context(|| format!("Failed to read topic {:?}", path))?;
            match TopicDefinition::from_json(&contents) {
                Ok(topic) => {
                    tracing::debug!("Loaded topic {} from {:?}", topic.id, path);
                    self.insert(topic);
                    loaded += 1;
                }
                Err(e) => tracing::warn!("Skipping topic file {:?}: {}", path, e),
            }
        }
        Ok(loaded)
    }

    /// Add a topic, replacing any existing topic with the same id
    pub fn insert(&mut self, topic: TopicDefinition) {
        if let Some(existing) = self.topics.iter_mut().find(|t| t.id == topic.id) {
            *existing = topic;
        } else {
            self.topics.push(topic);
        }
    }

    pub fn get(&self, id: &str) -> Option<&TopicDefinition> {
        self.topics.iter().find(|t| t.id == id)
    }

    pub fn topics(&self) -> &[TopicDefinition] {
        &self.topics
    }

    pub fn len(&self) -> usize {
        self.topics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.topics.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_topics_parse() {
        let catalog = TopicCatalog::builtin().unwrap();
        assert_eq!(catalog.len(), BUILTIN_TOPICS.len());
        for topic in catalog.topics() {
            assert!(!topic.sections.is_empty(), "{} has no sections", topic.id);
            assert!(topic.has_quiz(), "{} has no quiz", topic.id);
        }
    }

    #[test]
    fn frameworks_topic_hosts_recommender() {
        let catalog = TopicCatalog::builtin().unwrap();
        assert!(catalog.get("frameworks").unwrap().recommender);
        assert!(!catalog.get("dns").unwrap().recommender);
    }

    #[test]
    fn load_dir_adds_and_replaces() {
        let dir = tempfile::tempdir().unwrap();
        let topic = r##"{
            "id": "dns",
            "title": "Custom DNS",
            "toc": [{"name": "Only", "anchors": ["#a"]}],
            "sections": [{"id": "a", "title": "A", "body": "text"}]
        }"##;
        std::fs::write(dir.path().join("dns.json"), topic).unwrap();
        std::fs::write(dir.path().join("broken.json"), "{").unwrap();
        std::fs::write(dir.path().join("notes.txt"), "ignored").unwrap();

        let mut catalog = TopicCatalog::builtin().unwrap();
        let before = catalog.len();
        let loaded = catalog.load_dir(dir.path()).unwrap();

        assert_eq!(loaded, 1);
        assert_eq!(catalog.len(), before);
        assert_eq!(catalog.get("dns").unwrap().title, "Custom DNS");
        assert_eq!(catalog.topics()[0].id, "dns");
    }

    #[test]
    fn missing_dir_loads_nothing() {
        let mut catalog = TopicCatalog::default();
        assert_eq!(catalog.load_dir(Path::new("/nonexistent/topics")).unwrap(), 0);
    }
}
