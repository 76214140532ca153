//! Devcourse - a terminal companion for web development topics
//!
//! Devcourse tracks how far you have read through each topic, follows the
//! current section in a collapsible table of contents, runs per-topic
//! quizzes and recommends a front-end framework from a short questionnaire.

pub mod app;
pub mod cli;
pub mod config;
pub mod progress;
pub mod quiz;
pub mod recommend;
pub mod storage;
pub mod theme;
pub mod toc;
pub mod topic;
pub mod ui;

pub use app::App;
pub use config::Config;
pub use progress::{ProgressRecord, ProgressStore, compute_scroll_percent};
pub use theme::Theme;
pub use topic::{TopicCatalog, TopicPage};
