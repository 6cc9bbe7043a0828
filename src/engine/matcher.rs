//! Compatibility scoring and candidate ranking.
//!
//! ## Score
//!
//! ```text
//!         Σ_i Σ_j  δ(i, j) · sim(i, j) · W_i · W_j
//! S_AB = ───────────────────────────────────────────
//!                   Σ_i W_i  ·  Σ_j W_j
//! ```
//!
//! where `i` ranges over A's flattened goals, `j` over B's, and `δ` is 1
//! when the two goals share a domain.

use std::borrow::Borrow;
use std::collections::HashSet;
use std::time::Instant;

use tracing::debug;

use crate::config::EngineConfig;
use crate::engine::similarity::{similarity, MATCH_THRESHOLD, SHARED_GOAL_THRESHOLD};
use crate::types::{GoalNode, Match, MatchReceipt, User};

// ============================================================================
// Flattened goal sets
// ============================================================================

/// A user's goals in pre-order plus their total weight.
///
/// Built once per user per ranking so the querying user is not re-walked
/// for every candidate.
struct FlatGoals<'a> {
    user: &'a User,
    goals: Vec<&'a GoalNode>,
    weight_sum: f64,
}

impl<'a> FlatGoals<'a> {
    fn new(user: &'a User) -> Self {
        let goals: Vec<&GoalNode> = user.iter_goals().collect();
        let weight_sum = goals.iter().map(|goal| goal.weight).sum();
        Self {
            user,
            goals,
            weight_sum,
        }
    }
}

/// Normalized score of `a` against `b`.
///
/// When `shared` is given, every goal of `a` that pairs with a goal of `b`
/// above [`SHARED_GOAL_THRESHOLD`] is pushed, once per qualifying pair.
///
/// Returns None for an empty goal set or a zero weight sum.
fn normalized_score<'a>(
    a: &FlatGoals<'a>,
    b: &FlatGoals<'_>,
    mut shared: Option<&mut Vec<&'a GoalNode>>,
) -> Option<f64> {
    if a.goals.is_empty() || b.goals.is_empty() {
        return None;
    }

    let mut total = 0.0;
    for &node_a in &a.goals {
        for &node_b in &b.goals {
            if node_a.domain != node_b.domain {
                continue;
            }

            let sim = similarity(node_a, node_b);
            total += sim * node_a.weight * node_b.weight;

            if sim > SHARED_GOAL_THRESHOLD {
                if let Some(shared) = shared.as_deref_mut() {
                    shared.push(node_a);
                }
            }
        }
    }

    if a.weight_sum == 0.0 || b.weight_sum == 0.0 {
        return None;
    }

    Some(total / (a.weight_sum * b.weight_sum))
}

/// Score `candidate` for `query` and apply both thresholds.
fn evaluate(query: &FlatGoals<'_>, candidate: &FlatGoals<'_>) -> Option<Match> {
    let mut shared = Vec::new();
    let score = normalized_score(query, candidate, Some(&mut shared))?;

    if score > MATCH_THRESHOLD && !shared.is_empty() {
        Some(Match::new(
            candidate.user.id.clone(),
            candidate.user.name.clone(),
            score,
            dedup_by_id(shared),
        ))
    } else {
        None
    }
}

/// First occurrence of each id wins; encounter order is kept.
fn dedup_by_id(goals: Vec<&GoalNode>) -> Vec<GoalNode> {
    let mut seen = HashSet::with_capacity(goals.len());
    goals
        .into_iter()
        .filter(|goal| seen.insert(goal.id.as_str()))
        .cloned()
        .collect()
}

// ============================================================================
// MatchingEngine
// ============================================================================

/// Stateless compatibility engine.
///
/// The engine holds only its configuration. Every operation is a pure
/// function of its arguments, so one engine can be shared across threads.
///
/// ## Example
///
/// ```
/// use praxis_match::engine::MatchingEngine;
/// use praxis_match::types::{Domain, GoalNode, User};
///
/// let alex = User::new("u1", "Alex").with_goals(vec![
///     GoalNode::new("a1", Domain::Fitness, "Strength").with_progress(60).with_weight(1.2),
/// ]);
/// let sam = User::new("u2", "Sam").with_goals(vec![
///     GoalNode::new("s1", Domain::Fitness, "Cardio").with_progress(50),
/// ]);
///
/// let engine = MatchingEngine::new();
/// let m = engine.compute_match(&alex, &sam).unwrap();
/// assert!((m.compatibility_score - 0.87).abs() < 1e-9);
/// ```
#[derive(Debug, Clone, Default)]
pub struct MatchingEngine {
    config: EngineConfig,
}

impl MatchingEngine {
    /// Create an engine with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: EngineConfig) -> Self {
        Self { config }
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    // ========================================================================
    // Pairwise scoring
    // ========================================================================

    /// Normalized compatibility of `user_a` with `user_b`, before any
    /// threshold is applied.
    ///
    /// Returns None when either goal set is empty or has zero total weight.
    pub fn compatibility(&self, user_a: &User, user_b: &User) -> Option<f64> {
        normalized_score(&FlatGoals::new(user_a), &FlatGoals::new(user_b), None)
    }

    /// Compare two users' goal trees.
    ///
    /// # Returns
    ///
    /// * `Some(Match)` describing `user_b` when the normalized score is
    ///   above 0.2 and at least one of `user_a`'s goals is shared
    /// * `None` otherwise, including when either tree is empty
    pub fn compute_match(&self, user_a: &User, user_b: &User) -> Option<Match> {
        evaluate(&FlatGoals::new(user_a), &FlatGoals::new(user_b))
    }

    // ========================================================================
    // Ranking
    // ========================================================================

    /// Rank `candidates` for `user`, keeping at most
    /// [`EngineConfig::default_limit`] matches.
    pub fn find_matches<C>(&self, user: &User, candidates: &[C]) -> Vec<Match>
    where
        C: Borrow<User> + Sync,
    {
        self.find_top_matches(user, candidates, self.config.default_limit)
    }

    /// Rank `candidates` for `user`, keeping at most `limit` matches.
    ///
    /// Matches are sorted by score, highest first. Equal scores keep the
    /// order their candidates had in `candidates`. Neither argument is
    /// modified.
    pub fn find_top_matches<C>(&self, user: &User, candidates: &[C], limit: usize) -> Vec<Match>
    where
        C: Borrow<User> + Sync,
    {
        let start = Instant::now();
        let query = FlatGoals::new(user);

        let mut matches = self.score_all(&query, candidates);
        let accepted = matches.len();

        // Stable: ties stay in candidate order
        matches.sort_by(|a, b| b.compatibility_score.total_cmp(&a.compatibility_score));
        matches.truncate(limit);

        debug!(
            user_id = %user.id,
            candidates = candidates.len(),
            accepted,
            returned = matches.len(),
            elapsed_micros = start.elapsed().as_micros() as u64,
            "match_ranking_complete"
        );
        matches
    }

    /// Rank like [`find_top_matches`](Self::find_top_matches) and summarize
    /// the run in a [`MatchReceipt`].
    pub fn find_matches_with_receipt<C>(
        &self,
        user: &User,
        candidates: &[C],
        limit: usize,
        batch_id: u64,
        timestamp: u64,
    ) -> (Vec<Match>, MatchReceipt)
    where
        C: Borrow<User> + Sync,
    {
        let matches = self.find_top_matches(user, candidates, limit);
        let receipt =
            MatchReceipt::from_matches(batch_id, candidates.len() as u64, &matches, timestamp);
        (matches, receipt)
    }

    /// Evaluate every candidate, keeping accepted matches in candidate
    /// order.
    fn score_all<C>(&self, query: &FlatGoals<'_>, candidates: &[C]) -> Vec<Match>
    where
        C: Borrow<User> + Sync,
    {
        #[cfg(feature = "parallel")]
        if self.config.parallel && candidates.len() >= self.config.parallel_threshold {
            use rayon::prelude::*;

            // collect preserves candidate order
            return candidates
                .par_iter()
                .filter_map(|candidate| evaluate(query, &FlatGoals::new(candidate.borrow())))
                .collect();
        }

        candidates
            .iter()
            .filter_map(|candidate| evaluate(query, &FlatGoals::new(candidate.borrow())))
            .collect()
    }
}

// ============================================================================
// Unit Tests
// ============================================================================
