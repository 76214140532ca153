//! Weighted recommendation scoring
//!
//! Each answered criterion adds a fixed contribution to every candidate; the
//! candidates are then ranked by total. Ties are broken by the table's
//! candidate order so identical answers always produce identical rankings.

pub mod frameworks;
pub mod table;

use std::collections::BTreeMap;

use thiserror::Error;

pub use frameworks::framework_table;
pub use table::{Criterion, CriterionValue, WeightTable};

/// Criterion name to chosen value
pub type Answers = BTreeMap<String, String>;

/// Errors raised while building tables or scoring answers
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RecommendError {
    /// Not every criterion has an answer
    #[error("Please complete all fields (missing: {})", .missing.join(", "))]
    Incomplete { missing: Vec<String> },

    /// Answer names a criterion the table does not have
    #[error("Unknown criterion {0:?}")]
    UnknownCriterion(String),

    /// Answer value is not one of the criterion's values
    #[error("Unknown value {value:?} for {criterion}")]
    UnknownValue { criterion: String, value: String },

    /// Candidate listed twice in a table
    #[error("Candidate {0:?} is listed more than once")]
    DuplicateCandidate(String),

    /// Weight given to a candidate the table does not declare
    #[error("Criterion {criterion} weights undeclared candidate {candidate:?}")]
    UndeclaredCandidate { candidate: String, criterion: String },
}

/// Accumulated score per candidate
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScoreTable {
    scores: BTreeMap<String, u32>,
}

impl ScoreTable {
    pub fn get(&self, candidate: &str) -> u32 {
        self.scores.get(candidate).copied().unwrap_or(0)
    }
}

/// Ranked outcome of a complete set of answers
#[derive(Debug, Clone, PartialEq)]
pub struct Recommendation {
    /// Candidates by descending score, ties in priority order
    pub ranked: Vec<(String, u32)>,
    /// Score of the top candidate
    pub best_score: u32,
    /// Highest total the table allows
    pub max_possible_score: u32,
}

impl Recommendation {
    /// The winning candidate
    pub fn best(&self) -> Option<&(String, u32)> {
        self.ranked.first()
    }

    /// `score` as a fraction of the best achievable total
    pub fn confidence(&self, score: u32) -> f64 {
        if self.max_possible_score == 0 {
            0.0
        } else {
            f64::from(score) / f64::from(self.max_possible_score)
        }
    }
}

/// Criteria in `table` that `answers` leaves unanswered, in table order
pub fn missing_criteria(answers: &Answers, table: &WeightTable) -> Vec<String> {
    table
        .criteria()
        .iter()
        .filter(|c| !answers.contains_key(&c.name))
        .map(|c| c.name.clone())
        .collect()
}

/// Add up contributions for the answered criteria.
///
/// Unanswered criteria contribute nothing.
pub fn score(answers: &Answers, table: &WeightTable) -> Result<ScoreTable, RecommendError> {
    let mut scores: BTreeMap<String, u32> =
        table.candidates().iter().map(|c| (c.clone(), 0)).collect();

    for (criterion_name, value_name) in answers {
        let criterion = table
            .criterion(criterion_name)
            .ok_or_else(|| RecommendError::UnknownCriterion(criterion_name.clone()))?;
        let value = criterion.value(value_name).ok_or_else(|| RecommendError::UnknownValue {
            criterion: criterion_name.clone(),
            value: value_name.clone(),
        })?;

        for (candidate, total) in scores.iter_mut() {
            *total += value.weight_for(candidate);
        }
    }

    Ok(ScoreTable { scores })
}

/// Rank the candidates for a complete set of answers.
///
/// Incomplete answers are rejected before any scoring happens.
pub fn recommend(answers: &Answers, table: &WeightTable) -> Result<Recommendation, RecommendError> {
    let missing = missing_criteria(answers, table);
    if !missing.is_empty() {
        return Err(RecommendError::Incomplete { missing });
    }

    let scores = score(answers, table)?;

    let mut ranked: Vec<(String, u32)> =
        table.candidates().iter().map(|c| (c.clone(), scores.get(c))).collect();
    ranked.sort_by(|(a, a_score), (b, b_score)| {
        b_score.cmp(a_score).then_with(|| table.priority(a).cmp(&table.priority(b)))
    });

    let best_score = ranked.first().map(|(_, s)| *s).unwrap_or(0);

    Ok(Recommendation { ranked, best_score, max_possible_score: table.max_possible_score() })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn size_table() -> WeightTable {
        WeightTable::new(
            vec!["A".into(), "B".into()],
            vec![Criterion::new(
                "size",
                vec![
                    CriterionValue::new("small", &[("A", 3), ("B", 1)]),
                    CriterionValue::new("large", &[("A", 1), ("B", 3)]),
                ],
            )],
        )
        .unwrap()
    }

    fn two_criteria_table() -> WeightTable {
        WeightTable::new(
            vec!["A".into(), "B".into(), "C".into()],
            vec![
                Criterion::new(
                    "size",
                    vec![CriterionValue::new("small", &[("A", 1), ("B", 2), ("C", 2)])],
                ),
                Criterion::new(
                    "team",
                    vec![CriterionValue::new("solo", &[("A", 3), ("B", 1), ("C", 1)])],
                ),
            ],
        )
        .unwrap()
    }

    fn answers(pairs: &[(&str, &str)]) -> Answers {
        pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
    }

    #[test]
    fn single_criterion_ranking() {
        let rec = recommend(&answers(&[("size", "small")]), &size_table()).unwrap();
        assert_eq!(rec.ranked, vec![("A".to_string(), 3), ("B".to_string(), 1)]);
        assert_eq!(rec.best_score, 3);
        assert_eq!(rec.confidence(rec.best_score), 1.0);
    }

    #[test]
    fn ties_follow_candidate_order() {
        let table = two_criteria_table();
        let input = answers(&[("size", "small"), ("team", "solo")]);

        let first = recommend(&input, &table).unwrap();
        let second = recommend(&input, &table).unwrap();

        assert_eq!(
            first.ranked,
            vec![("A".to_string(), 4), ("B".to_string(), 3), ("C".to_string(), 3)]
        );
        assert_eq!(first, second);
    }

    #[test]
    fn missing_criterion_is_incomplete() {
        let err = recommend(&answers(&[("size", "small")]), &two_criteria_table()).unwrap_err();
        assert_eq!(err, RecommendError::Incomplete { missing: vec!["team".to_string()] });
        assert_eq!(err.to_string(), "Please complete all fields (missing: team)");
    }

    #[test]
    fn raw_score_skips_unanswered_criteria() {
        let scores = score(&answers(&[("team", "solo")]), &two_criteria_table()).unwrap();
        assert_eq!(scores.get("A"), 3);
        assert_eq!(scores.get("B"), 1);
    }

    #[test]
    fn unknown_value_is_rejected() {
        let err = recommend(&answers(&[("size", "huge")]), &size_table()).unwrap_err();
        assert!(matches!(err, RecommendError::UnknownValue { .. }));
    }

    #[test]
    fn unknown_criterion_is_rejected() {
        let err = score(&answers(&[("budget", "low")]), &size_table()).unwrap_err();
        assert_eq!(err, RecommendError::UnknownCriterion("budget".into()));
    }

    #[test]
    fn confidence_is_relative_to_table_maximum() {
        let rec = recommend(&answers(&[("size", "small"), ("team", "solo")]), &two_criteria_table())
            .unwrap();
        assert_eq!(rec.max_possible_score, 5);
        assert_eq!(rec.confidence(4), 0.8);
    }
}
