//! The engine's per-candidate output.

use serde::{Deserialize, Serialize};

use crate::types::GoalNode;

/// A compatible candidate together with the querying user's goals that
/// drove the match.
///
/// Matches are independent values: the shared goals are copies, so a match
/// stays valid after the source users change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Match {
    /// Candidate user id
    pub user_id: String,

    /// Candidate display name
    pub user_name: String,

    /// Normalized score, in (0, 1] for well-formed accepted matches
    pub compatibility_score: f64,

    /// Querying user's goals judged similar to one of the candidate's,
    /// unique by id, in traversal order of first encounter
    pub shared_goals: Vec<GoalNode>,
}

impl Match {
    pub fn new(
        user_id: impl Into<String>,
        user_name: impl Into<String>,
        compatibility_score: f64,
        shared_goals: Vec<GoalNode>,
    ) -> Self {
        Self {
            user_id: user_id.into(),
            user_name: user_name.into(),
            compatibility_score,
            shared_goals,
        }
    }

    /// Ids of the shared goals, in order
    pub fn shared_goal_ids(&self) -> impl Iterator<Item = &str> {
        self.shared_goals.iter().map(|goal| goal.id.as_str())
    }
}
