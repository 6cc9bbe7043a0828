//! Collaboration sessions between matched users.
//!
//! Completing a collaboration feeds the owner's grade back into the weight
//! of the goal the two users worked on.

use serde::{Deserialize, Serialize};

use crate::error::CalibrationError;
use crate::types::{FeedbackGrade, User};

/// A session started from a match, tied to one of the owner's goals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Collaboration {
    pub id: String,

    /// The matched partner's user id
    pub match_id: String,

    /// Owner's goal this collaboration works toward
    pub goal_id: String,

    /// Start time in milliseconds
    pub started_at: u64,

    pub completed_at: Option<u64>,

    pub my_grade: Option<FeedbackGrade>,

    pub their_grade: Option<FeedbackGrade>,
}

impl Collaboration {
    pub fn new(
        id: impl Into<String>,
        match_id: impl Into<String>,
        goal_id: impl Into<String>,
        started_at: u64,
    ) -> Self {
        Self {
            id: id.into(),
            match_id: match_id.into(),
            goal_id: goal_id.into(),
            started_at,
            completed_at: None,
            my_grade: None,
            their_grade: None,
        }
    }

    #[inline]
    pub fn is_completed(&self) -> bool {
        self.completed_at.is_some()
    }

    #[inline]
    pub fn is_mutually_graded(&self) -> bool {
        self.my_grade.is_some() && self.their_grade.is_some()
    }

    /// Complete the session with the owner's grade and recalibrate the
    /// owner's goal.
    ///
    /// Completion and grade are recorded even when the goal is no longer in
    /// the owner's tree; only the weight update is skipped then.
    ///
    /// # Returns
    ///
    /// The goal's new weight, or `None` if the goal is gone
    ///
    /// # Errors
    ///
    /// [`CalibrationError::AlreadyCompleted`] if the session was already
    /// completed. Nothing is mutated in that case.
    ///
    /// # Example
    ///
    /// ```
    /// use praxis_match::types::{Collaboration, Domain, FeedbackGrade, GoalNode, User};
    ///
    /// let mut owner = User::new("u1", "Alex")
    ///     .with_goals(vec![GoalNode::new("g1", Domain::Fitness, "Cardio")]);
    /// let mut collab = Collaboration::new("c1", "u2", "g1", 1_000);
    ///
    /// let weight = collab.complete(FeedbackGrade::Succeeded, 2_000, &mut owner).unwrap();
    /// assert_eq!(weight, Some(0.8));
    /// assert!(collab.is_completed());
    /// ```
    pub fn complete(
        &mut self,
        grade: FeedbackGrade,
        completed_at: u64,
        owner: &mut User,
    ) -> Result<Option<f64>, CalibrationError> {
        if self.is_completed() {
            return Err(CalibrationError::AlreadyCompleted(self.id.clone()));
        }

        self.completed_at = Some(completed_at);
        self.my_grade = Some(grade);

        let weight = owner.apply_grade(&self.goal_id, grade);
        if weight.is_none() {
            tracing::debug!(
                collaboration_id = %self.id,
                goal_id = %self.goal_id,
                "collaboration_goal_missing"
            );
        }
        Ok(weight)
    }

    /// Store the partner's grade of this session
    pub fn record_partner_grade(&mut self, grade: FeedbackGrade) {
        self.their_grade = Some(grade);
    }
}
