//! Core data types for Praxis matching
//!
//! Goal trees and users are owned by the surrounding application; the
//! engine reads them and produces independent [`Match`] values.
//!
//! ## Types
//!
//! - [`Domain`]: Life area a goal belongs to
//! - [`GoalNode`]: A node in a user's goal tree
//! - [`FeedbackGrade`]: Post-collaboration grade that recalibrates weights
//! - [`User`]: A participant and their goal tree
//! - [`Match`]: A compatible candidate with shared goals
//! - [`MatchReceipt`]: Summary of a ranking run
//! - [`Collaboration`]: A session between matched users

mod domain;
mod goal;
mod user;
mod matched;
mod receipt;
mod collaboration;

// Re-export all types at module level
pub use domain::Domain;
pub use goal::{FeedbackGrade, GoalNode, DEFAULT_WEIGHT, MAX_WEIGHT, MIN_WEIGHT};
pub use user::{PreOrder, User, FREE_TIER_ROOT_GOALS, STARTING_PRAXIS_POINTS};
pub use matched::Match;
pub use receipt::MatchReceipt;
pub use collaboration::Collaboration;
