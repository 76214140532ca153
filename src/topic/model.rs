//! Topic content model
//!
//! A topic is plain data: its navigation groups, the text of each section and
//! the quiz questions. Nothing topic-specific lives in code.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::TopicError;
use crate::quiz::QuizQuestion;
use crate::toc::TocGroup;

/// A section of topic text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicSection {
    /// Anchor target, referenced from the ToC as `#id`
    pub id: String,
    pub title: String,
    /// Paragraphs separated by blank lines
    pub body: String,
}

impl TopicSection {
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { id: id.into(), title: title.into(), body: body.into() }
    }

    /// Body split into paragraphs
    pub fn paragraphs(&self) -> impl Iterator<Item = &str> {
        self.body.split("\n\n").map(str::trim).filter(|p| !p.is_empty())
    }
}

/// A complete topic page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopicDefinition {
    /// Stable identifier used for progress keys
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    pub toc: Vec<TocGroup>,
    pub sections: Vec<TopicSection>,
    #[serde(default)]
    pub quiz: Vec<QuizQuestion>,
    /// Does this topic host the framework recommender?
    #[serde(default)]
    pub recommender: bool,
}

impl TopicDefinition {
    /// Parse and validate a topic from JSON
    pub fn from_json(json: &str) -> Result<Self, TopicError> {
        let topic: Self = serde_json::from_str(json)?;
        topic.validate()?;
        Ok(topic)
    }

    /// Check ids are non-empty and unique, and that every ToC anchor
    /// points at a section
    pub fn validate(&self) -> Result<(), TopicError> {
        if self.id.trim().is_empty() {
            return Err(TopicError::MissingId);
        }

        let mut ids = HashSet::new();
        for section in &self.sections {
            if !ids.insert(section.id.as_str()) {
                return Err(TopicError::DuplicateSection {
                    topic: self.id.clone(),
                    section: section.id.clone(),
                });
            }
        }

        for group in &self.toc {
            if let Some(missing) = group.section_ids().find(|id| !ids.contains(id)) {
                return Err(TopicError::DanglingAnchor {
                    topic: self.id.clone(),
                    group: group.name.clone(),
                    anchor: missing.to_string(),
                });
            }
        }

        Ok(())
    }

    pub fn section(&self, id: &str) -> Option<&TopicSection> {
        self.sections.iter().find(|s| s.id == id)
    }

    pub fn has_quiz(&self) -> bool {
        !self.quiz.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOPIC: &str = r##"{
        "id": "sample",
        "title": "Sample",
        "toc": [{"name": "Intro", "anchors": ["#s1", "#s2"]}],
        "sections": [
            {"id": "s1", "title": "One", "body": "First.\n\nSecond."},
            {"id": "s2", "title": "Two", "body": "Only"}
        ]
    }"##;

    #[test]
    fn parses_minimal_topic() {
        let topic = TopicDefinition::from_json(TOPIC).unwrap();
        assert_eq!(topic.id, "sample");
        assert!(!topic.has_quiz());
        assert!(!topic.recommender);
        assert_eq!(topic.section("s1").unwrap().paragraphs().count(), 2);
    }

    #[test]
    fn dangling_anchor_is_rejected() {
        let json = TOPIC.replace("#s2\"]", "#s9\"]");
        let err = TopicDefinition::from_json(&json).unwrap_err();
        assert!(matches!(err, TopicError::DanglingAnchor { anchor, .. } if anchor == "s9"));
    }

    #[test]
    fn duplicate_section_is_rejected() {
        let json = TOPIC.replace("\"id\": \"s2\"", "\"id\": \"s1\"").replace("#s2", "#s1");
        let err = TopicDefinition::from_json(&json).unwrap_err();
        assert!(matches!(err, TopicError::DuplicateSection { .. }));
    }

    #[test]
    fn invalid_quiz_question_fails_parse() {
        let json = TOPIC.replace(
            "\"sections\"",
            r#""quiz": [{"prompt": "?", "options": ["a"], "correct_index": 2}], "sections""#,
        );
        assert!(matches!(TopicDefinition::from_json(&json), Err(TopicError::Parse(_))));
    }
}
