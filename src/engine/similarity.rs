//! Per-pair goal similarity and the fixed scoring thresholds.

use crate::types::GoalNode;

/// A pair with similarity strictly above this marks the querying user's
/// goal as shared.
pub const SHARED_GOAL_THRESHOLD: f64 = 0.3;

/// A normalized score strictly above this is a match.
pub const MATCH_THRESHOLD: f64 = 0.2;

/// Share of the similarity driven by progress alignment
pub const PROGRESS_FACTOR: f64 = 0.7;

/// Share of the similarity driven by priority alignment
pub const WEIGHT_FACTOR: f64 = 0.3;

/// Similarity of two goals, assumed to be in the same domain.
///
/// ```text
/// progress_sim = 1 - |pA - pB| / 100
/// weight_sim   = 1 - min(|wA - wB|, 1)
/// similarity   = 0.7 * progress_sim + 0.3 * weight_sim
/// ```
///
/// For well-formed goals the result lies in [0, 1]. Out-of-range values
/// are not clamped; the result is whatever the formula gives.
///
/// ## Example
///
/// ```
/// use praxis_match::engine::similarity;
/// use praxis_match::types::{Domain, GoalNode};
///
/// let a = GoalNode::new("a", Domain::Fitness, "Cardio").with_progress(40);
/// let b = GoalNode::new("b", Domain::Fitness, "Cardio").with_progress(40);
/// assert_eq!(similarity(&a, &b), 1.0);
/// ```
#[inline]
pub fn similarity(a: &GoalNode, b: &GoalNode) -> f64 {
    let progress_diff = a.progress.abs_diff(b.progress) as f64;
    let progress_similarity = 1.0 - progress_diff / 100.0;

    let weight_diff = (a.weight - b.weight).abs().min(1.0);
    let weight_similarity = 1.0 - weight_diff;

    PROGRESS_FACTOR * progress_similarity + WEIGHT_FACTOR * weight_similarity
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Domain;

    fn goal(progress: i32, weight: f64) -> GoalNode {
        GoalNode::new("g", Domain::Fitness, "g")
            .with_progress(progress)
            .with_weight(weight)
    }

    #[test]
    fn test_identical_goals() {
        assert_eq!(similarity(&goal(50, 1.0), &goal(50, 1.0)), 1.0);
    }

    #[test]
    fn test_opposite_progress_same_weight() {
        // 0.7 * 0 + 0.3 * 1 = 0.3, exactly on the shared boundary
        assert_eq!(similarity(&goal(0, 1.0), &goal(100, 1.0)), 0.3);
    }

    #[test]
    fn test_weight_diff_clamped() {
        // |0.5 - 2.0| = 1.5 clamps to 1.0, so weight similarity is 0
        let s = similarity(&goal(20, 0.5), &goal(20, 2.0));
        assert!((s - 0.7).abs() < 1e-12);
    }

    #[test]
    fn test_worked_example() {
        // progress 0.9, weight 0.8 -> 0.63 + 0.24
        let s = similarity(&goal(60, 1.2), &goal(50, 1.0));
        assert!((s - 0.87).abs() < 1e-9);
    }

    #[test]
    fn test_symmetric() {
        let a = goal(13, 0.7);
        let b = goal(88, 1.9);
        assert_eq!(similarity(&a, &b), similarity(&b, &a));
    }

    #[test]
    fn test_out_of_range_passes_through() {
        // 150 vs 0 -> progress similarity -0.5
        let s = similarity(&goal(150, 1.0), &goal(0, 1.0));
        assert!((s - (0.7 * -0.5 + 0.3)).abs() < 1e-12);

        // extreme values do not overflow
        let s = similarity(&goal(i32::MIN, 1.0), &goal(i32::MAX, 1.0));
        assert!(s.is_finite());
    }
}
