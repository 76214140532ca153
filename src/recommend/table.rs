//! Weight tables for the recommender

use std::collections::{BTreeMap, HashSet};

use serde::{Deserialize, Serialize};

use super::RecommendError;

/// One selectable answer for a criterion and what it adds to each candidate
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionValue {
    pub name: String,
    /// Candidate name to score contribution. Missing candidates get 0.
    pub weights: BTreeMap<String, u32>,
}

impl CriterionValue {
    pub fn new(name: impl Into<String>, weights: &[(&str, u32)]) -> Self {
        Self {
            name: name.into(),
            weights: weights.iter().map(|(c, w)| (c.to_string(), *w)).collect(),
        }
    }

    pub fn weight_for(&self, candidate: &str) -> u32 {
        self.weights.get(candidate).copied().unwrap_or(0)
    }

    fn max_weight(&self) -> u32 {
        self.weights.values().copied().max().unwrap_or(0)
    }
}

/// A question the user answers, with its possible values in display order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criterion {
    pub name: String,
    pub values: Vec<CriterionValue>,
}

impl Criterion {
    pub fn new(name: impl Into<String>, values: Vec<CriterionValue>) -> Self {
        Self { name: name.into(), values }
    }

    pub fn value(&self, name: &str) -> Option<&CriterionValue> {
        self.values.iter().find(|v| v.name == name)
    }

    /// Largest contribution any single answer can give any single candidate
    pub fn max_contribution(&self) -> u32 {
        self.values.iter().map(CriterionValue::max_weight).max().unwrap_or(0)
    }
}

/// Candidates, criteria and weights for one recommendation question set.
///
/// Candidate order doubles as the tie-break priority: earlier wins.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct WeightTable {
    candidates: Vec<String>,
    criteria: Vec<Criterion>,
}

#[derive(Deserialize)]
struct RawTable {
    candidates: Vec<String>,
    criteria: Vec<Criterion>,
}

impl TryFrom<RawTable> for WeightTable {
    type Error = RecommendError;

    fn try_from(raw: RawTable) -> Result<Self, Self::Error> {
        Self::new(raw.candidates, raw.criteria)
    }
}

impl WeightTable {
    /// Build a table, checking that every weighted candidate is declared once
    pub fn new(candidates: Vec<String>, criteria: Vec<Criterion>) -> Result<Self, RecommendError> {
        let mut seen = HashSet::new();
        for candidate in &candidates {
            if !seen.insert(candidate.as_str()) {
                return Err(RecommendError::DuplicateCandidate(candidate.clone()));
            }
        }

        for criterion in &criteria {
            for value in &criterion.values {
                if let Some(unknown) = value.weights.keys().find(|c| !seen.contains(c.as_str())) {
                    return Err(RecommendError::UndeclaredCandidate {
                        candidate: unknown.clone(),
                        criterion: criterion.name.clone(),
                    });
                }
            }
        }

        Ok(Self { candidates, criteria })
    }

    /// Candidates in priority order
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    pub fn criteria(&self) -> &[Criterion] {
        &self.criteria
    }

    pub fn criterion(&self, name: &str) -> Option<&Criterion> {
        self.criteria.iter().find(|c| c.name == name)
    }

    /// Position of `candidate` in the priority order
    pub fn priority(&self, candidate: &str) -> usize {
        self.candidates.iter().position(|c| c == candidate).unwrap_or(usize::MAX)
    }

    /// Best total a candidate could reach: the sum of each criterion's
    /// largest single contribution
    pub fn max_possible_score(&self) -> u32 {
        self.criteria.iter().map(Criterion::max_contribution).sum()
    }
}
