//! Topics: content definitions, the catalog and per-topic page state

pub mod catalog;
pub mod model;
pub mod page;

use thiserror::Error;

pub use catalog::TopicCatalog;
pub use model::{TopicDefinition, TopicSection};
pub use page::{ScrollUpdate, ScrollView, TopicPage};

/// Errors raised while loading topic content
#[derive(Debug, Error)]
pub enum TopicError {
    /// JSON did not match the topic schema
    #[error("Failed to parse topic: {0}")]
    Parse(#[from] serde_json::Error),

    /// Topic has an empty id
    #[error("Topic is missing an id")]
    MissingId,

    /// Two sections share an id
    #[error("Topic {topic} has more than one section with id {section:?}")]
    DuplicateSection { topic: String, section: String },

    /// ToC anchor that does not match any section
    #[error("Topic {topic}: group {group:?} links to missing section {anchor:?}")]
    DanglingAnchor { topic: String, group: String, anchor: String },

    /// A topic compiled into the binary failed to load
    #[error("Built-in topic {file} is invalid: {source}")]
    Builtin {
        file: String,
        #[source]
        source: Box<TopicError>,
    },
}
