//! Praxis Match - demo binary
//!
//! Seeds a candidate pool with sample members, ranks them for a sample
//! user and prints the matches with a receipt.
//!
//! ```bash
//! praxis-match [engine.toml]
//! RUST_LOG=debug praxis-match
//! ```

use std::process::ExitCode;
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::EnvFilter;

use praxis_match::{CandidatePool, Domain, EngineConfig, GoalNode, MatchingEngine, User};

fn sample_members() -> Vec<User> {
    vec![
        User::new("u-alex", "Alex").with_goals(vec![
            GoalNode::new("alex-strength", Domain::Fitness, "Strength Training")
                .with_weight(1.2)
                .with_progress(60)
                .with_sub_goal(
                    GoalNode::new("alex-squat", Domain::Fitness, "Squat 100kg").with_progress(70),
                )
                .with_sub_goal(
                    GoalNode::new("alex-bench", Domain::Fitness, "Bench 80kg").with_progress(50),
                ),
            GoalNode::new("alex-promo", Domain::Career, "Senior Promotion").with_progress(40),
        ]),
        User::new("u-sam", "Sam").with_goals(vec![
            GoalNode::new("sam-cardio", Domain::Fitness, "Cardio Training")
                .with_weight(1.3)
                .with_progress(55),
            GoalNode::new("sam-meditation", Domain::MentalHealth, "Daily Meditation")
                .with_weight(1.1)
                .with_progress(80),
        ]),
        User::new("u-jordan", "Jordan").with_goals(vec![
            GoalNode::new("jordan-startup", Domain::Career, "Launch Startup")
                .with_weight(1.5)
                .with_progress(30),
            GoalNode::new("jordan-stoicism", Domain::Philosophy, "Study Stoicism")
                .with_weight(0.9)
                .with_progress(50),
        ]),
    ]
}

fn sample_user() -> User {
    User::new("u-me", "You").with_goals(vec![
        GoalNode::new("me-fitness", Domain::Fitness, "Muscle Gain").with_progress(50),
        GoalNode::new("me-career", Domain::Career, "Skill Learning")
            .with_weight(1.3)
            .with_progress(35),
    ])
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn main() -> ExitCode {
    let config = match std::env::args().nth(1) {
        Some(path) => match EngineConfig::load(&path) {
            Ok(config) => config,
            Err(err) => {
                eprintln!("error: {err}");
                return ExitCode::FAILURE;
            }
        },
        None => EngineConfig::default(),
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let mut pool = CandidatePool::with_capacity(8);
    for member in sample_members() {
        if let Err(err) = pool.insert(member) {
            eprintln!("error: {err}");
            return ExitCode::FAILURE;
        }
    }

    let me = sample_user();
    let engine = MatchingEngine::with_config(config);
    let candidates = pool.candidates_for(&me);
    let (matches, receipt) = engine.find_matches_with_receipt(
        &me,
        &candidates,
        engine.config().default_limit,
        1,
        now_millis(),
    );

    println!("===========================================");
    println!("  Praxis Match");
    println!("===========================================");
    println!();
    println!("Matches for {} ({} goals):", me.name, me.goal_count());

    if matches.is_empty() {
        println!("  (none)");
    }
    for (rank, m) in matches.iter().enumerate() {
        println!("  #{} {:<10} score {:.4}", rank + 1, m.user_name, m.compatibility_score);
        for goal in &m.shared_goals {
            println!("       {} {} ({})", goal.domain.emoji(), goal.name, goal.domain);
        }
    }

    println!();
    println!("Receipt:");
    println!("  Candidates scored: {}", receipt.candidates_scored);
    println!("  Matches returned:  {}", receipt.matches_returned);
    println!("  Ranking root:      {}", receipt.ranking_root_hex());

    ExitCode::SUCCESS
}
