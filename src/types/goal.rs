//! Goal tree nodes and feedback-driven weight calibration.
//!
//! ## Tree Shape
//!
//! ```text
//! Strength Training (root)
//! ├── Squat 100kg
//! └── Bench 80kg
//! ```
//!
//! Children are owned values, so a tree can never contain a cycle.
//!
//! ## Weight Calibration
//!
//! After a collaboration the user grades how it went. The grade scales the
//! goal's weight, and the result is kept in [`MIN_WEIGHT`, `MAX_WEIGHT`].
//! The matching engine only ever reads weights.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::Domain;

/// Default priority multiplier for a new goal
pub const DEFAULT_WEIGHT: f64 = 1.0;

/// Lower bound applied by [`GoalNode::apply_grade`]
pub const MIN_WEIGHT: f64 = 0.5;

/// Upper bound applied by [`GoalNode::apply_grade`]
pub const MAX_WEIGHT: f64 = 2.0;

// ============================================================================
// FeedbackGrade
// ============================================================================

/// Self-assessment recorded after a collaboration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FeedbackGrade {
    /// Harder than expected
    Distracted,
    /// Much harder than expected
    TotalNoob,
    /// Slightly harder than expected
    Mediocre,
    /// About right
    TriedButFailed,
    /// Easier than expected
    Succeeded,
}

impl FeedbackGrade {
    /// Factor applied to the graded goal's weight
    pub fn weight_multiplier(self) -> f64 {
        match self {
            FeedbackGrade::Distracted => 1.2,
            FeedbackGrade::TotalNoob => 1.5,
            FeedbackGrade::Mediocre => 1.1,
            FeedbackGrade::TriedButFailed => 0.95,
            FeedbackGrade::Succeeded => 0.8,
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            FeedbackGrade::Distracted => "Distracted",
            FeedbackGrade::TotalNoob => "Total Noob",
            FeedbackGrade::Mediocre => "Mediocre",
            FeedbackGrade::TriedButFailed => "Tried but Failed",
            FeedbackGrade::Succeeded => "Succeeded",
        }
    }
}

// ============================================================================
// GoalNode
// ============================================================================

/// A node in a user's goal tree.
///
/// ## Example
///
/// ```
/// use praxis_match::types::{Domain, GoalNode};
///
/// let goal = GoalNode::new("g1", Domain::Fitness, "Strength Training")
///     .with_weight(1.2)
///     .with_progress(60)
///     .with_sub_goal(GoalNode::new("g2", Domain::Fitness, "Squat 100kg").with_progress(70));
///
/// assert_eq!(goal.sub_goals.len(), 1);
/// assert_eq!(goal.total_progress(), 65);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GoalNode {
    /// Opaque identifier, unique within one user's tree
    pub id: String,

    pub domain: Domain,

    /// Human-readable label
    pub name: String,

    /// Priority multiplier, conventionally in [0.5, 2.0]
    #[serde(default = "default_weight")]
    pub weight: f64,

    /// Completion percentage, 0..=100 for well-formed data
    #[serde(default)]
    pub progress: i32,

    #[serde(default)]
    pub sub_goals: Vec<GoalNode>,
}

fn default_weight() -> f64 {
    DEFAULT_WEIGHT
}

impl GoalNode {
    /// Create a leaf goal with default weight and zero progress
    pub fn new(id: impl Into<String>, domain: Domain, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            domain,
            name: name.into(),
            weight: DEFAULT_WEIGHT,
            progress: 0,
            sub_goals: Vec::new(),
        }
    }

    pub fn with_weight(mut self, weight: f64) -> Self {
        self.weight = weight;
        self
    }

    pub fn with_progress(mut self, progress: i32) -> Self {
        self.progress = progress;
        self
    }

    /// Append a child goal
    pub fn with_sub_goal(mut self, child: GoalNode) -> Self {
        self.sub_goals.push(child);
        self
    }

    #[inline]
    pub fn is_leaf(&self) -> bool {
        self.sub_goals.is_empty()
    }

    /// Progress rolled up from the subtree.
    ///
    /// A leaf reports its own progress. An inner node averages its own
    /// progress with the mean of its children's rolled-up progress,
    /// truncated toward zero.
    pub fn total_progress(&self) -> i32 {
        // Nodes with their parent's index; every child lands after its parent
        let mut nodes: Vec<(&GoalNode, Option<usize>)> = vec![(self, None)];
        let mut next = 0;
        while next < nodes.len() {
            let node = nodes[next].0;
            nodes.extend(node.sub_goals.iter().map(|child| (child, Some(next))));
            next += 1;
        }

        // Walk backwards so children are rolled up before their parent
        let mut child_sums = vec![0.0f64; nodes.len()];
        let mut total = self.progress;
        for (index, &(node, parent)) in nodes.iter().enumerate().rev() {
            total = if node.sub_goals.is_empty() {
                node.progress
            } else {
                let child_mean = child_sums[index] / node.sub_goals.len() as f64;
                ((node.progress as f64 + child_mean) / 2.0) as i32
            };
            if let Some(parent) = parent {
                child_sums[parent] += total as f64;
            }
        }
        total
    }

    /// Scale this goal's weight by a feedback grade.
    ///
    /// The result is clamped to [`MIN_WEIGHT`, `MAX_WEIGHT`].
    ///
    /// # Returns
    ///
    /// The new weight
    pub fn apply_grade(&mut self, grade: FeedbackGrade) -> f64 {
        let previous = self.weight;
        self.weight = (self.weight * grade.weight_multiplier()).clamp(MIN_WEIGHT, MAX_WEIGHT);

        tracing::debug!(
            goal_id = %self.id,
            grade = grade.display_name(),
            previous,
            weight = self.weight,
            "goal_weight_calibrated"
        );
        self.weight
    }

    /// Check this node's own fields (not its children).
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyGoalId);
        }
        if !(0..=100).contains(&self.progress) {
            return Err(ValidationError::ProgressOutOfRange {
                goal_id: self.id.clone(),
                progress: self.progress,
            });
        }
        if !self.weight.is_finite() || self.weight <= 0.0 {
            return Err(ValidationError::InvalidWeight {
                goal_id: self.id.clone(),
                weight: self.weight,
            });
        }
        Ok(())
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
