//! Reading progress: scroll percentage and persisted per-topic records

pub mod record;
pub mod scroll;
pub mod store;

pub use record::ProgressRecord;
pub use scroll::compute_scroll_percent;
pub use store::ProgressStore;
