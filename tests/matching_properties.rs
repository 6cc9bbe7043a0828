// Property-based tests for compatibility scoring and ranking.
// CI: 256 cases (default). Soak: PROPTEST_CASES=10000 cargo test --release

use std::ops::RangeInclusive;

use proptest::prelude::*;
use praxis_match::{Domain, EngineConfig, GoalNode, MatchingEngine, User};

// ---------------------------------------------------------------------------
// Config
// ---------------------------------------------------------------------------

fn config_256() -> ProptestConfig {
    ProptestConfig {
        cases: std::env::var("PROPTEST_CASES")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(256),
        failure_persistence: None,
        ..ProptestConfig::default()
    }
}

const EPSILON: f64 = 1e-9;

// ---------------------------------------------------------------------------
// Generators
// ---------------------------------------------------------------------------

fn arb_node(domains: Vec<Domain>) -> impl Strategy<Value = GoalNode> {
    (prop::sample::select(domains), 0..=100i32, 0.5..=2.0f64)
        .prop_map(|(domain, progress, weight)| {
            GoalNode::new("", domain, "goal")
                .with_progress(progress)
                .with_weight(weight)
        })
}

/// Goal trees up to three levels deep
fn arb_tree(domains: Vec<Domain>) -> impl Strategy<Value = GoalNode> {
    arb_node(domains.clone()).prop_recursive(3, 24, 3, move |inner| {
        (arb_node(domains.clone()), prop::collection::vec(inner, 0..3)).prop_map(
            |(mut node, children)| {
                node.sub_goals = children;
                node
            },
        )
    })
}

/// Give every node a unique id in pre-order
fn assign_ids(nodes: &mut [GoalNode], prefix: &str, next: &mut usize) {
    for node in nodes {
        node.id = format!("{prefix}-{next}");
        *next += 1;
        assign_ids(&mut node.sub_goals, prefix, next);
    }
}

fn arb_user_in(
    id: String,
    domains: Vec<Domain>,
    roots: RangeInclusive<usize>,
) -> impl Strategy<Value = User> {
    prop::collection::vec(arb_tree(domains), roots).prop_map(move |mut goals| {
        let mut next = 0;
        assign_ids(&mut goals, &id, &mut next);
        User::new(id.clone(), id.to_uppercase()).with_goals(goals)
    })
}

fn arb_user(id: &str) -> impl Strategy<Value = User> {
    arb_user_in(id.to_string(), Domain::ALL.to_vec(), 1..=3)
}

fn arb_pool(max: usize) -> impl Strategy<Value = Vec<User>> {
    prop::collection::vec(arb_user("c"), 0..=max).prop_map(|mut users| {
        for (i, user) in users.iter_mut().enumerate() {
            user.id = format!("c{i}");
        }
        users
    })
}

fn fitness_user(id: &str, progress: i32, weight: f64) -> User {
    User::new(id, id).with_goals(vec![
        GoalNode::new(format!("{id}-g"), Domain::Fitness, "goal")
            .with_progress(progress)
            .with_weight(weight),
    ])
}

// ---------------------------------------------------------------------------
// Pairwise properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_256())]

    /// Scores agree in both directions
    #[test]
    fn score_is_symmetric(a in arb_user("a"), b in arb_user("b")) {
        let engine = MatchingEngine::new();
        let ab = engine.compatibility(&a, &b).unwrap();
        let ba = engine.compatibility(&b, &a).unwrap();
        prop_assert!((ab - ba).abs() < EPSILON, "ab={} ba={}", ab, ba);

        let m_ab = engine.compute_match(&a, &b);
        let m_ba = engine.compute_match(&b, &a);
        if (ab - 0.2).abs() > EPSILON {
            prop_assert_eq!(m_ab.is_some(), m_ba.is_some());
        }
        if let (Some(x), Some(y)) = (m_ab, m_ba) {
            prop_assert!((x.compatibility_score - y.compatibility_score).abs() < EPSILON);
        }
    }

    /// An empty goal tree on either side never matches
    #[test]
    fn empty_tree_never_matches(a in arb_user("a")) {
        let engine = MatchingEngine::new();
        let empty = User::new("e", "Empty");
        prop_assert!(engine.compute_match(&a, &empty).is_none());
        prop_assert!(engine.compute_match(&empty, &a).is_none());
        prop_assert!(engine.compatibility(&empty, &a).is_none());
    }

    /// Users with no domain in common never match
    #[test]
    fn disjoint_domains_never_match(
        a in arb_user_in("a".into(), Domain::ALL[..4].to_vec(), 1..=3),
        b in arb_user_in("b".into(), Domain::ALL[4..].to_vec(), 1..=3),
    ) {
        let engine = MatchingEngine::new();
        prop_assert_eq!(engine.compatibility(&a, &b), Some(0.0));
        prop_assert!(engine.compute_match(&a, &b).is_none());
    }

    /// Accepted matches respect both thresholds and stay in (0.2, 1]
    #[test]
    fn accepted_match_is_well_formed(a in arb_user("a"), b in arb_user("b")) {
        let engine = MatchingEngine::new();
        if let Some(m) = engine.compute_match(&a, &b) {
            prop_assert_eq!(&m.user_id, &b.id);
            prop_assert!(m.compatibility_score > 0.2);
            prop_assert!(m.compatibility_score <= 1.0 + EPSILON);
            prop_assert!(!m.shared_goals.is_empty());

            // Shared goals are A's, unique, and in pre-order
            let order: Vec<&str> = a.iter_goals().map(|g| g.id.as_str()).collect();
            let positions: Vec<usize> = m
                .shared_goals
                .iter()
                .map(|g| order.iter().position(|id| *id == g.id).unwrap())
                .collect();
            prop_assert!(positions.windows(2).all(|w| w[0] < w[1]));
        }
    }

    /// Scoring leaves its inputs untouched
    #[test]
    fn inputs_are_not_mutated(a in arb_user("a"), pool in arb_pool(6)) {
        let a_before = a.clone();
        let pool_before = pool.clone();

        let engine = MatchingEngine::new();
        let _ = engine.find_matches(&a, &pool);

        prop_assert_eq!(a, a_before);
        prop_assert_eq!(pool, pool_before);
    }
}

// ---------------------------------------------------------------------------
// Ranking properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config_256())]

    /// Rankings are sorted highest first and contain exactly the accepted
    /// candidates
    #[test]
    fn ranking_is_sorted_and_complete(user in arb_user("me"), pool in arb_pool(12)) {
        let engine = MatchingEngine::new();
        let ranked = engine.find_top_matches(&user, &pool, usize::MAX);

        prop_assert!(ranked
            .windows(2)
            .all(|w| w[0].compatibility_score >= w[1].compatibility_score));

        let accepted = pool
            .iter()
            .filter(|c| engine.compute_match(&user, c).is_some())
            .count();
        prop_assert_eq!(ranked.len(), accepted);

        for m in &ranked {
            let candidate = pool.iter().find(|c| c.id == m.user_id).unwrap();
            let expected = engine.compute_match(&user, candidate);
            prop_assert_eq!(Some(m), expected.as_ref());
        }
    }

    /// Equal scores keep candidate order
    #[test]
    fn ranking_ties_keep_input_order(user in arb_user("me"), pool in arb_pool(12)) {
        let ranked = MatchingEngine::new().find_top_matches(&user, &pool, usize::MAX);
        let index_of = |id: &str| pool.iter().position(|c| c.id == id).unwrap();

        for w in ranked.windows(2) {
            if w[0].compatibility_score == w[1].compatibility_score {
                prop_assert!(index_of(&w[0].user_id) < index_of(&w[1].user_id));
            }
        }
    }

    /// A limit takes a prefix of the full ranking
    #[test]
    fn limit_truncates_ranking(user in arb_user("me"), pool in arb_pool(12), limit in 0usize..8) {
        let engine = MatchingEngine::new();
        let full = engine.find_top_matches(&user, &pool, usize::MAX);
        let limited = engine.find_top_matches(&user, &pool, limit);

        prop_assert_eq!(limited.len(), full.len().min(limit));
        prop_assert_eq!(&limited[..], &full[..limited.len()]);
    }

    /// Parallel scoring returns exactly the sequential ranking
    #[test]
    fn parallel_ranking_matches_sequential(user in arb_user("me"), pool in arb_pool(24)) {
        let sequential = MatchingEngine::with_config(EngineConfig::default().sequential());
        let parallel =
            MatchingEngine::with_config(EngineConfig::default().with_parallel_threshold(1));

        prop_assert_eq!(
            sequential.find_top_matches(&user, &pool, usize::MAX),
            parallel.find_top_matches(&user, &pool, usize::MAX)
        );
    }
}

// ---------------------------------------------------------------------------
// Scenarios
// ---------------------------------------------------------------------------

#[test]
fn scenario_fitness_pair() {
    let a = fitness_user("a", 60, 1.2);
    let b = fitness_user("b", 50, 1.0);

    let m = MatchingEngine::new().compute_match(&a, &b).unwrap();
    assert!((m.compatibility_score - 0.87).abs() < EPSILON);
    assert_eq!(m.shared_goals.len(), 1);
    assert_eq!(m.shared_goals[0].id, "a-g");
}

#[test]
fn shared_boundary_is_exclusive() {
    // similarity = 0.7 * 0 + 0.3 * 1 = 0.3 exactly
    let a = fitness_user("a", 0, 1.0);
    let b = fitness_user("b", 100, 1.0);

    let engine = MatchingEngine::new();
    assert_eq!(engine.compatibility(&a, &b), Some(0.3));
    assert!(engine.compute_match(&a, &b).is_none());
}

#[test]
fn acceptance_boundary_is_exclusive() {
    // One perfect fitness pair over a 1 x 5 weight product: 1 / 5 = 0.2
    let a = fitness_user("a", 50, 1.0);
    let mut goals = vec![GoalNode::new("b-fit", Domain::Fitness, "goal").with_progress(50)];
    for (i, domain) in [Domain::Career, Domain::Academics, Domain::Philosophy, Domain::Investing]
        .into_iter()
        .enumerate()
    {
        goals.push(GoalNode::new(format!("b-{i}"), domain, "other"));
    }
    let b = User::new("b", "B").with_goals(goals);

    let engine = MatchingEngine::new();
    assert_eq!(engine.compatibility(&a, &b), Some(0.2));
    assert!(engine.compute_match(&a, &b).is_none());
}

#[test]
fn ranking_orders_known_scores() {
    let me = fitness_user("me", 50, 1.0);
    // progress gaps 30, 0, 10 -> scores 0.79, 1.0, 0.93
    let pool = vec![
        fitness_user("far", 80, 1.0),
        fitness_user("same", 50, 1.0),
        fitness_user("near", 60, 1.0),
    ];

    let ranked = MatchingEngine::new().find_matches(&me, &pool);
    let ids: Vec<&str> = ranked.iter().map(|m| m.user_id.as_str()).collect();
    assert_eq!(ids, ["same", "near", "far"]);
    assert!(ranked[0].compatibility_score > ranked[1].compatibility_score);
    assert!(ranked[1].compatibility_score > ranked[2].compatibility_score);
}

#[test]
fn limit_two_of_five() {
    let me = fitness_user("me", 50, 1.0);
    let pool: Vec<User> = [10, 45, 90, 52, 30]
        .iter()
        .enumerate()
        .map(|(i, &p)| fitness_user(&format!("c{i}"), p, 1.0))
        .collect();

    let engine = MatchingEngine::new();
    assert_eq!(engine.find_top_matches(&me, &pool, usize::MAX).len(), 5);

    let top = engine.find_top_matches(&me, &pool, 2);
    let ids: Vec<&str> = top.iter().map(|m| m.user_id.as_str()).collect();
    assert_eq!(ids, ["c3", "c1"]);
}
