//! Candidate pool for the Praxis matching engine.
//!
//! The pool is an explicit value owned by the caller. Rankings draw their
//! candidates from it in insertion order, which makes insertion order the
//! tie-break for equal scores.
//!
//! ## Components
//!
//! - [`CandidatePool`]: validated, id-indexed user storage plus ranking
//!   helpers that keep a user from matching with themselves
//!
//! ## Performance
//!
//! | Operation | Complexity |
//! |-----------|------------|
//! | Insert user | O(goals) validation + O(1) |
//! | Lookup by id | O(1) |
//! | Remove by id | O(n) (order list) |
//! | Rank for a user | O(n · \|goals_a\| · \|goals_b\|) |

pub mod store;

pub use store::CandidatePool;
