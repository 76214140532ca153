//! Output of the non-interactive subcommands

use std::collections::BTreeMap;

use crate::progress::ProgressStore;
use crate::recommend::{self, Answers, RecommendError, frameworks};
use crate::storage::KeyValueStore;
use crate::topic::TopicCatalog;
use crate::ui::topic_list::topic_status;

/// One line per topic: status glyph, id, scroll percentage and title.
///
/// Topics whose record is unreadable still show the mirrored scalar
/// percentage when it survives.
pub fn topic_lines<S: KeyValueStore>(
    catalog: &TopicCatalog,
    store: &ProgressStore<S>,
) -> Vec<String> {
    let records: BTreeMap<_, _> =
        store.records().into_iter().map(|r| (r.topic_id.clone(), r)).collect();

    catalog
        .topics()
        .iter()
        .map(|topic| {
            let record = records.get(&topic.id);
            let percent = record
                .map(|r| r.scroll_percent)
                .or_else(|| store.load_scroll_percent(&topic.id))
                .unwrap_or(0.0);
            format!("{} {:<12} {:>4.0}%  {}", topic_status(record), topic.id, percent, topic.title)
        })
        .collect()
}

/// Answers for the framework table from optional command-line values
pub fn framework_answers(
    project_size: Option<String>,
    team_size: Option<String>,
    timeline: Option<String>,
    complexity: Option<String>,
) -> Answers {
    [
        (frameworks::PROJECT_SIZE, project_size),
        (frameworks::TEAM_SIZE, team_size),
        (frameworks::TIMELINE, timeline),
        (frameworks::COMPLEXITY, complexity),
    ]
    .into_iter()
    .filter_map(|(criterion, value)| Some((criterion.to_string(), value?)))
    .collect()
}

/// Ranked frameworks with score and confidence, best first
pub fn recommendation_lines(answers: &Answers) -> Result<Vec<String>, RecommendError> {
    let rec = recommend::recommend(answers, &recommend::framework_table())?;

    Ok(rec
        .ranked
        .iter()
        .map(|(framework, score)| {
            format!("{framework:<10} {score:>2} pts  {:>3.0}%", rec.confidence(*score) * 100.0)
        })
        .collect())
}
