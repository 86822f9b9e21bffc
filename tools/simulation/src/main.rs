use std::sync::Arc;

use scoreboard::ScoreBoard;
use simulation::export::{build_export, export_json};
use simulation::scenarios::goal_flood::{self, GoalFloodConfig};
use simulation::scenarios::kickoff_burst::{self, KickoffBurstConfig};
use simulation::scenarios::rivalry_clash::{self, RivalryClashConfig};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let seed = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<u64>()?,
        None => 42,
    };
    tracing::info!(seed, version = simulation::VERSION, "Starting scoreboard simulation");

    let results = vec![
        kickoff_burst::run(&Arc::new(ScoreBoard::world_cup()), &KickoffBurstConfig::default()),
        goal_flood::run(
            &Arc::new(ScoreBoard::world_cup()),
            &GoalFloodConfig {
                seed,
                ..Default::default()
            },
        ),
        rivalry_clash::run(
            &Arc::new(ScoreBoard::world_cup()),
            &RivalryClashConfig {
                seed,
                ..Default::default()
            },
        ),
    ];

    for r in &results {
        tracing::info!(scenario = %r.name, passed = r.passed, "{}", r.details);
    }

    let board = demo_board()?;
    for (position, m) in board.summary().iter().enumerate() {
        println!(
            "{}. {} {} - {} {}",
            position + 1,
            m.home_team,
            m.home_score,
            m.away_team,
            m.away_score
        );
    }

    let export = build_export(&results, board.summary());
    println!("{}", export_json(&export)?);

    if !export.all_passed() {
        let failed: Vec<_> = results.iter().filter(|r| !r.passed).map(|r| r.name.as_str()).collect();
        anyhow::bail!("Scenarios failed: {}", failed.join(", "));
    }
    Ok(())
}

fn demo_board() -> anyhow::Result<ScoreBoard> {
    let board = ScoreBoard::world_cup();
    let fixtures = [
        ("Mexico", "Canada", 0, 5),
        ("Spain", "Brazil", 10, 2),
        ("Germany", "France", 2, 2),
        ("Uruguay", "Italy", 6, 6),
        ("Argentina", "Australia", 3, 1),
    ];
    for (home, away, home_goals, away_goals) in fixtures {
        board.start_match(home, away)?;
        board.update_score(home, away, home_goals, away_goals)?;
    }
    Ok(board)
}
