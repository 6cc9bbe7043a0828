//! Matching engine module for Praxis.
//!
//! ## Design Principles
//!
//! 1. **Pure**: scoring reads its inputs and returns new values
//! 2. **Stateless**: the engine holds configuration only, so it is safe to
//!    share across threads
//! 3. **Deterministic ranking**: highest score first, ties keep candidate
//!    order, parallel and sequential scoring agree exactly
//!
//! ## Matching Rules
//!
//! - Only goals in the **same domain** contribute
//! - A pair above **0.3** similarity marks the querying user's goal as shared
//! - A normalized score above **0.2** with at least one shared goal is a match
//! - An **empty** goal tree never matches
//!
//! ## Example
//!
//! ```
//! use praxis_match::engine::MatchingEngine;
//! use praxis_match::types::{Domain, GoalNode, User};
//!
//! let me = User::new("me", "Me").with_goals(vec![
//!     GoalNode::new("m1", Domain::Career, "Promotion").with_progress(40),
//! ]);
//! let pool = vec![
//!     User::new("u1", "Jordan").with_goals(vec![
//!         GoalNode::new("j1", Domain::Career, "Launch Startup").with_progress(30),
//!     ]),
//!     User::new("u2", "Sam").with_goals(vec![
//!         GoalNode::new("s1", Domain::MentalHealth, "Meditation").with_progress(80),
//!     ]),
//! ];
//!
//! let engine = MatchingEngine::new();
//! let matches = engine.find_matches(&me, &pool);
//!
//! assert_eq!(matches.len(), 1);
//! assert_eq!(matches[0].user_name, "Jordan");
//! ```

pub mod matcher;
pub mod similarity;

pub use matcher::MatchingEngine;
pub use similarity::{similarity, MATCH_THRESHOLD, SHARED_GOAL_THRESHOLD};
