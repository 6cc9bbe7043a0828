//! # Praxis Match
//!
//! Compatibility matching for the Praxis goal-accountability network.
//!
//! ## Architecture
//!
//! - **Types**: goal trees, users, matches, receipts, collaborations
//! - **Engine**: pure pairwise scoring and candidate ranking
//! - **Pool**: validated in-memory candidate storage
//! - **Config**: TOML-backed engine tuning
//!
//! ## Design Principles
//!
//! 1. **Pure scoring**: the engine never mutates users and keeps no state
//! 2. **Absence, not errors**: "no match" is `None`
//! 3. **Reproducible rankings**: stable tie-break, identical sequential and
//!    parallel results, SHA-256 ranking roots on receipts
//! 4. **Validation at the edge**: data owners validate; the engine trusts
//!    the arithmetic
//!
//! ## Example
//!
//! ```
//! use praxis_match::{Domain, GoalNode, MatchingEngine, User};
//!
//! let alex = User::new("u1", "Alex").with_goals(vec![
//!     GoalNode::new("a1", Domain::Fitness, "Strength Training")
//!         .with_weight(1.2)
//!         .with_progress(60),
//! ]);
//! let sam = User::new("u2", "Sam").with_goals(vec![
//!     GoalNode::new("s1", Domain::Fitness, "Cardio Training").with_progress(50),
//! ]);
//!
//! let engine = MatchingEngine::new();
//! let matches = engine.find_matches(&alex, &[sam]);
//! assert_eq!(matches.len(), 1);
//! ```

// ============================================================================
// Module declarations
// ============================================================================

/// Core data types: GoalNode, User, Match, MatchReceipt
pub mod types;

/// Matching engine: compatibility scoring and ranking
pub mod engine;

/// Candidate pool: validated user storage
pub mod pool;

/// Engine configuration
pub mod config;

/// Error types
pub mod error;

// ============================================================================
// Re-exports for convenience
// ============================================================================

pub use types::{Collaboration, Domain, FeedbackGrade, GoalNode, Match, MatchReceipt, User};
pub use engine::{MatchingEngine, MATCH_THRESHOLD, SHARED_GOAL_THRESHOLD};
pub use pool::CandidatePool;
pub use config::EngineConfig;
pub use error::{CalibrationError, ConfigError, ValidationError};
