//! Users and traversal of their goal trees.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::types::{Domain, FeedbackGrade, GoalNode};

/// Root goals a free-tier user may hold
pub const FREE_TIER_ROOT_GOALS: usize = 3;

/// Accountability points a new user starts with
pub const STARTING_PRAXIS_POINTS: u32 = 100;

/// A participant with a goal tree.
///
/// ## Example
///
/// ```
/// use praxis_match::types::{Domain, GoalNode, User};
///
/// let mut user = User::new("u1", "Alex");
/// user.add_primary_goal(
///     GoalNode::new("g1", Domain::Fitness, "Strength Training")
///         .with_sub_goal(GoalNode::new("g2", Domain::Fitness, "Squat 100kg")),
/// );
///
/// let ids: Vec<&str> = user.iter_goals().map(|g| g.id.as_str()).collect();
/// assert_eq!(ids, ["g1", "g2"]);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub age: u32,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub is_verified: bool,
    /// Premium users are not subject to the root-goal cap
    #[serde(default)]
    pub is_premium: bool,
    /// Consecutive days of activity
    #[serde(default)]
    pub current_streak: u32,
    #[serde(default = "starting_praxis_points")]
    pub praxis_points: u32,
    /// Ordered root goals
    #[serde(default)]
    pub goal_tree: Vec<GoalNode>,
}

fn starting_praxis_points() -> u32 {
    STARTING_PRAXIS_POINTS
}

impl User {
    /// Create a free-tier user with an empty goal tree
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            age: 0,
            bio: String::new(),
            is_verified: false,
            is_premium: false,
            current_streak: 0,
            praxis_points: STARTING_PRAXIS_POINTS,
            goal_tree: Vec::new(),
        }
    }

    /// Replace the goal tree wholesale
    pub fn with_goals(mut self, goals: Vec<GoalNode>) -> Self {
        self.goal_tree = goals;
        self
    }

    pub fn premium(mut self) -> Self {
        self.is_premium = true;
        self
    }

    /// Root goals, in order
    #[inline]
    pub fn primary_goals(&self) -> &[GoalNode] {
        &self.goal_tree
    }

    /// Add a root goal, honouring the free-tier cap.
    ///
    /// # Returns
    ///
    /// `true` if the goal was added
    pub fn add_primary_goal(&mut self, goal: GoalNode) -> bool {
        if self.is_premium || self.goal_tree.len() < FREE_TIER_ROOT_GOALS {
            self.goal_tree.push(goal);
            true
        } else {
            false
        }
    }

    /// Walk every goal in pre-order: a node, then each child subtree in
    /// list order.
    pub fn iter_goals(&self) -> PreOrder<'_> {
        PreOrder::new(&self.goal_tree)
    }

    /// Number of goals across the whole tree
    pub fn goal_count(&self) -> usize {
        self.iter_goals().count()
    }

    pub fn has_goals(&self) -> bool {
        !self.goal_tree.is_empty()
    }

    /// Flattened goals belonging to `domain`, in pre-order
    pub fn goals_by_domain(&self, domain: Domain) -> Vec<&GoalNode> {
        self.iter_goals().filter(|goal| goal.domain == domain).collect()
    }

    /// First goal in pre-order with this id
    pub fn find_goal(&self, goal_id: &str) -> Option<&GoalNode> {
        self.iter_goals().find(|goal| goal.id == goal_id)
    }

    /// Mutable access to the first goal in pre-order with this id
    pub fn find_goal_mut(&mut self, goal_id: &str) -> Option<&mut GoalNode> {
        let mut stack: Vec<&mut GoalNode> = self.goal_tree.iter_mut().rev().collect();
        while let Some(node) = stack.pop() {
            if node.id == goal_id {
                return Some(node);
            }
            stack.extend(node.sub_goals.iter_mut().rev());
        }
        None
    }

    /// Calibrate one goal's weight from a feedback grade.
    ///
    /// # Returns
    ///
    /// The new weight, or `None` if no goal has this id
    pub fn apply_grade(&mut self, goal_id: &str, grade: FeedbackGrade) -> Option<f64> {
        self.find_goal_mut(goal_id).map(|goal| goal.apply_grade(grade))
    }

    /// Check the user id and every goal in the tree, including that goal
    /// ids are unique within the tree.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.id.is_empty() {
            return Err(ValidationError::EmptyUserId);
        }

        let mut seen = HashSet::new();
        for goal in self.iter_goals() {
            goal.validate()?;
            if !seen.insert(goal.id.as_str()) {
                return Err(ValidationError::DuplicateGoalId(goal.id.clone()));
            }
        }
        Ok(())
    }
}

// ============================================================================
// Pre-order traversal
// ============================================================================

/// Pre-order iterator over a goal forest.
///
/// Uses an explicit stack rather than recursion.
#[derive(Debug, Clone)]
pub struct PreOrder<'a> {
    stack: Vec<&'a GoalNode>,
}

impl<'a> PreOrder<'a> {
    fn new(roots: &'a [GoalNode]) -> Self {
        Self {
            stack: roots.iter().rev().collect(),
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = &'a GoalNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        // Children pushed in reverse so the first child is visited next
        self.stack.extend(node.sub_goals.iter().rev());
        Some(node)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
