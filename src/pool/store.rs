//! In-memory candidate pool.
//!
//! ## Architecture
//!
//! - **Slab**: user storage with stable keys
//! - **HashMap**: user id to slab key, for O(1) lookup and removal
//! - **Vec**: slab keys in insertion order, which is the candidate order the
//!   engine sees and therefore the tie-break order of a ranking
//!
//! Every user is validated on the way in, so the engine only ever scores
//! well-formed goal trees drawn from a pool.
//!
//! ## Example
//!
//! ```
//! use praxis_match::engine::MatchingEngine;
//! use praxis_match::pool::CandidatePool;
//! use praxis_match::types::{Domain, GoalNode, User};
//!
//! let mut pool = CandidatePool::with_capacity(16);
//! pool.insert(User::new("u1", "Sam").with_goals(vec![
//!     GoalNode::new("s1", Domain::Fitness, "Cardio").with_progress(55),
//! ]))
//! .unwrap();
//!
//! let me = User::new("me", "Me").with_goals(vec![
//!     GoalNode::new("m1", Domain::Fitness, "Strength").with_progress(60),
//! ]);
//! let matches = pool.find_matches_for(&MatchingEngine::new(), &me);
//! assert_eq!(matches[0].user_id, "u1");
//! ```

use std::collections::HashMap;

use slab::Slab;
use tracing::{debug, warn};

use crate::engine::MatchingEngine;
use crate::error::{CalibrationError, ValidationError};
use crate::types::{Collaboration, FeedbackGrade, GoalNode, Match, User};

/// Users available for matching.
#[derive(Debug, Default)]
pub struct CandidatePool {
    /// Key: slab index, Value: user
    users: Slab<User>,

    /// User id to slab key
    index: HashMap<String, usize>,

    /// Slab keys in insertion order
    order: Vec<usize>,
}

impl CandidatePool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a pool with room for `capacity` users
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            users: Slab::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
            order: Vec::with_capacity(capacity),
        }
    }

    // ========================================================================
    // Capacity and Size
    // ========================================================================

    #[inline]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.users.capacity()
    }

    // ========================================================================
    // Membership
    // ========================================================================

    /// Add a user after validating their goal tree.
    ///
    /// # Returns
    ///
    /// The slab key for the user
    ///
    /// # Errors
    ///
    /// Any [`ValidationError`] from [`User::validate`], or
    /// [`ValidationError::DuplicateUser`] if the id is taken.
    pub fn insert(&mut self, user: User) -> Result<usize, ValidationError> {
        if let Err(err) = user.validate() {
            warn!(user_id = %user.id, error = %err, "pool_user_rejected");
            return Err(err);
        }
        if self.index.contains_key(&user.id) {
            warn!(user_id = %user.id, "pool_duplicate_user");
            return Err(ValidationError::DuplicateUser(user.id));
        }

        let user_id = user.id.clone();
        let goals = user.goal_count();
        let key = self.users.insert(user);
        self.index.insert(user_id.clone(), key);
        self.order.push(key);

        debug!(user_id = %user_id, key, goals, pool_size = self.len(), "pool_user_inserted");
        Ok(key)
    }

    /// Remove a user by id
    pub fn remove(&mut self, user_id: &str) -> Option<User> {
        let key = self.index.remove(user_id)?;
        self.order.retain(|&k| k != key);
        let user = self.users.remove(key);

        debug!(user_id = %user_id, pool_size = self.len(), "pool_user_removed");
        Some(user)
    }

    #[inline]
    pub fn contains(&self, user_id: &str) -> bool {
        self.index.contains_key(user_id)
    }

    pub fn get(&self, user_id: &str) -> Option<&User> {
        let key = *self.index.get(user_id)?;
        self.users.get(key)
    }

    /// Users in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &User> + '_ {
        self.order.iter().filter_map(move |&key| self.users.get(key))
    }

    pub fn clear(&mut self) {
        self.users.clear();
        self.index.clear();
        self.order.clear();
    }

    // ========================================================================
    // Goal updates
    // ========================================================================

    /// Replace a member's goal tree.
    ///
    /// The new tree is validated first; on error the member is unchanged.
    ///
    /// # Returns
    ///
    /// `Ok(false)` if no member has this id
    pub fn update_goals(
        &mut self,
        user_id: &str,
        goals: Vec<GoalNode>,
    ) -> Result<bool, ValidationError> {
        let Some(&key) = self.index.get(user_id) else {
            return Ok(false);
        };
        let Some(user) = self.users.get_mut(key) else {
            return Ok(false);
        };

        let previous = std::mem::replace(&mut user.goal_tree, goals);
        if let Err(err) = user.validate() {
            user.goal_tree = previous;
            warn!(user_id = %user_id, error = %err, "pool_goal_update_rejected");
            return Err(err);
        }

        debug!(user_id = %user_id, goals = user.goal_count(), "pool_goals_updated");
        Ok(true)
    }

    /// Complete a collaboration owned by a member and recalibrate the
    /// member's goal.
    ///
    /// # Returns
    ///
    /// The goal's new weight, or `None` if the member no longer has the goal
    pub fn complete_collaboration(
        &mut self,
        user_id: &str,
        collaboration: &mut Collaboration,
        grade: FeedbackGrade,
        completed_at: u64,
    ) -> Result<Option<f64>, CalibrationError> {
        let owner = self
            .index
            .get(user_id)
            .and_then(|&key| self.users.get_mut(key))
            .ok_or_else(|| CalibrationError::UserNotFound(user_id.to_string()))?;

        collaboration.complete(grade, completed_at, owner)
    }

    // ========================================================================
    // Matching
    // ========================================================================

    /// Pool members other than `user`, in insertion order
    pub fn candidates_for<'a>(&'a self, user: &User) -> Vec<&'a User> {
        self.iter().filter(|candidate| candidate.id != user.id).collect()
    }

    /// Rank the pool for `user` with the engine's default limit.
    ///
    /// A member with the same id as `user` is never matched with itself.
    pub fn find_matches_for(&self, engine: &MatchingEngine, user: &User) -> Vec<Match> {
        engine.find_matches(user, &self.candidates_for(user))
    }

    /// Rank the pool for `user`, keeping at most `limit` matches
    pub fn find_top_matches_for(
        &self,
        engine: &MatchingEngine,
        user: &User,
        limit: usize,
    ) -> Vec<Match> {
        engine.find_top_matches(user, &self.candidates_for(user), limit)
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
