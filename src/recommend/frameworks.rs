//! Built-in frontend framework weights

use super::table::{Criterion, CriterionValue, WeightTable};

pub const REACT: &str = "React";
pub const ANGULAR: &str = "Angular";
pub const VUE: &str = "Vue";

/// Criteria names, in the order the questionnaire asks them
pub const PROJECT_SIZE: &str = "projectSize";
pub const TEAM_SIZE: &str = "teamSize";
pub const TIMELINE: &str = "timeline";
pub const COMPLEXITY: &str = "complexity";

fn value(name: &str, react: u32, angular: u32, vue: u32) -> CriterionValue {
    CriterionValue::new(name, &[(REACT, react), (ANGULAR, angular), (VUE, vue)])
}

/// Weight table for picking between React, Angular and Vue.
///
/// Ties go to React, then Angular, then Vue.
pub fn framework_table() -> WeightTable {
    let criteria = vec![
        Criterion::new(
            PROJECT_SIZE,
            vec![value("small", 2, 0, 3), value("medium", 3, 2, 2), value("large", 2, 3, 1)],
        ),
        Criterion::new(
            TEAM_SIZE,
            vec![value("solo", 2, 0, 3), value("small", 3, 1, 2), value("large", 2, 3, 1)],
        ),
        Criterion::new(
            TIMELINE,
            vec![value("short", 2, 0, 3), value("medium", 3, 2, 2), value("long", 2, 3, 2)],
        ),
        Criterion::new(
            COMPLEXITY,
            vec![value("low", 1, 0, 3), value("medium", 3, 2, 2), value("high", 2, 3, 1)],
        ),
    ];

    let candidates = vec![REACT.to_string(), ANGULAR.to_string(), VUE.to_string()];

    // Every weighted candidate above is declared, so validation cannot fail
    match WeightTable::new(candidates, criteria) {
        Ok(table) => table,
        Err(e) => unreachable!("built-in framework table is invalid: {e}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recommend::{Answers, recommend};

    fn answers(size: &str, team: &str, timeline: &str, complexity: &str) -> Answers {
        [(PROJECT_SIZE, size), (TEAM_SIZE, team), (TIMELINE, timeline), (COMPLEXITY, complexity)]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn max_possible_is_twelve() {
        assert_eq!(framework_table().max_possible_score(), 12);
    }

    #[test]
    fn small_quick_projects_pick_vue() {
        let rec = recommend(&answers("small", "solo", "short", "low"), &framework_table()).unwrap();
        assert_eq!(rec.best().map(|(c, _)| c.as_str()), Some(VUE));
        assert_eq!(rec.best_score, 12);
    }

    #[test]
    fn large_long_projects_pick_angular() {
        let rec =
            recommend(&answers("large", "large", "long", "high"), &framework_table()).unwrap();
        assert_eq!(rec.best().map(|(c, _)| c.as_str()), Some(ANGULAR));
    }

    #[test]
    fn medium_projects_pick_react() {
        let rec =
            recommend(&answers("medium", "small", "medium", "medium"), &framework_table()).unwrap();
        assert_eq!(rec.best().map(|(c, _)| c.as_str()), Some(REACT));
    }
}
