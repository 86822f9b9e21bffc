//! Summary ordering tests
//!
//! End-to-end ranking through the board, plus property tests checking that
//! arbitrary start/update/finish sequences keep the registry sorted and
//! conflict-free.

use std::cmp::Ordering;

use proptest::prelude::*;
use scoreboard::clock::KickoffClock;
use scoreboard::ranking::rank;
use scoreboard::{BoardConfig, ConflictPolicy, RankingComparator, ScoreBoard, Verdict};
use types::fixture::Match;
use types::score::Score;

const TEAMS: [&str; 6] = ["Spain", "Brazil", "Uruguay", "Italy", "Mexico", "Canada"];

fn line(m: &Match) -> (String, String, u32, u32) {
    (
        m.home_team.to_string(),
        m.away_team.to_string(),
        m.home_score.goals(),
        m.away_score.goals(),
    )
}

fn expected(home: &str, away: &str, home_score: u32, away_score: u32) -> (String, String, u32, u32) {
    (home.to_string(), away.to_string(), home_score, away_score)
}

#[test]
fn test_summary_sorted_by_total_then_recency() {
    let board = ScoreBoard::world_cup();

    board.start_match("Mexico", "Canada").unwrap();
    board.update_score("Mexico", "Canada", 0, 5).unwrap();

    board.start_match("Spain", "Brazil").unwrap();
    board.update_score("Spain", "Brazil", 10, 2).unwrap();

    board.start_match("Germany", "France").unwrap();
    board.update_score("Germany", "France", 2, 2).unwrap();

    board.start_match("Uruguay", "Italy").unwrap();
    board.update_score("Uruguay", "Italy", 6, 6).unwrap();

    board.start_match("Argentina", "Australia").unwrap();
    board.update_score("Argentina", "Australia", 3, 1).unwrap();

    let summary: Vec<_> = board.summary().iter().map(line).collect();
    assert_eq!(
        summary,
        vec![
            expected("Uruguay", "Italy", 6, 6),
            expected("Spain", "Brazil", 10, 2),
            expected("Mexico", "Canada", 0, 5),
            expected("Argentina", "Australia", 3, 1),
            expected("Germany", "France", 2, 2),
        ]
    );
}

#[test]
fn test_score_change_reorders_summary() {
    let board = ScoreBoard::with_clock(BoardConfig::default(), KickoffClock::sequential(1));
    board.start_match("Mexico", "Canada").unwrap();
    board.start_match("Spain", "Brazil").unwrap();

    assert_eq!(board.summary()[0].home_team, "Spain");

    board.update_score("Mexico", "Canada", 1, 0).unwrap();
    assert_eq!(board.summary()[0].home_team, "Mexico");

    board.update_score("Mexico", "Canada", 0, 0).unwrap();
    assert_eq!(board.summary()[0].home_team, "Spain");
}

#[test]
fn test_team_names_break_identical_start_times() {
    // Same kick-off time can only come from outside the board's clock
    let cmp = RankingComparator::default();
    let a = Match::start("Argentina".into(), "Australia".into(), 7);
    let b = Match::start("Germany".into(), "France".into(), 7);

    assert_eq!(cmp.compare(&a, &b), Verdict::Ranked(Ordering::Less));
    assert_eq!(cmp.compare(&b, &a), Verdict::Ranked(Ordering::Greater));
}

fn arb_match() -> impl Strategy<Value = Match> {
    (0..TEAMS.len(), 0..TEAMS.len(), 0u32..6, 0u32..6, 0i64..4).prop_map(
        |(home, away, home_goals, away_goals, started_at)| {
            Match::start(TEAMS[home].into(), TEAMS[away].into(), started_at)
                .with_score(Score::new(home_goals), Score::new(away_goals))
        },
    )
}

#[derive(Debug, Clone)]
enum Op {
    Start(usize, usize),
    Update(usize, usize, i32, i32),
    Finish(usize, usize),
}

fn arb_op() -> impl Strategy<Value = Op> {
    let team = 0..TEAMS.len();
    prop_oneof![
        (team.clone(), team.clone()).prop_map(|(h, a)| Op::Start(h, a)),
        (team.clone(), team.clone(), -1i32..6, -1i32..6).prop_map(|(h, a, hs, as_)| Op::Update(h, a, hs, as_)),
        (team.clone(), team).prop_map(|(h, a)| Op::Finish(h, a)),
    ]
}

fn assert_board_invariants(board: &ScoreBoard) {
    let cmp = RankingComparator::new(board.config().conflict_policy);
    let summary = board.summary();

    for pair in summary.windows(2) {
        assert_eq!(rank(&pair[0], &pair[1]), Ordering::Less);
    }
    for (i, a) in summary.iter().enumerate() {
        for b in &summary[i + 1..] {
            assert!(!cmp.compare(a, b).collides(), "{:?} collides with {:?}", a, b);
        }
    }
}

proptest! {
    #[test]
    fn prop_compare_is_antisymmetric(a in arb_match(), b in arb_match()) {
        for policy in [ConflictPolicy::SharedTeam, ConflictPolicy::ExactPair] {
            let cmp = RankingComparator::new(policy);
            match (cmp.compare(&a, &b), cmp.compare(&b, &a)) {
                (Verdict::Collides, Verdict::Collides) => {}
                (Verdict::Ranked(x), Verdict::Ranked(y)) => {
                    prop_assert_eq!(x, y.reverse());
                }
                (x, y) => {
                    prop_assert!(false, "asymmetric verdicts {:?} / {:?}", x, y);
                }
            }
        }
    }

    #[test]
    fn prop_distinct_non_colliding_never_equal(a in arb_match(), b in arb_match()) {
        let cmp = RankingComparator::new(ConflictPolicy::ExactPair);
        if let Verdict::Ranked(order) = cmp.compare(&a, &b) {
            prop_assert_ne!(order, Ordering::Equal);
        }
    }

    #[test]
    fn prop_board_stays_sorted_and_conflict_free(
        ops in prop::collection::vec(arb_op(), 1..60),
        exact_pair in any::<bool>(),
    ) {
        let policy = if exact_pair { ConflictPolicy::ExactPair } else { ConflictPolicy::SharedTeam };
        let board = ScoreBoard::with_clock(
            BoardConfig::default().with_conflict_policy(policy),
            KickoffClock::sequential(1),
        );

        for op in ops {
            let len_before = board.len();
            let result = match op {
                Op::Start(h, a) => board.start_match(TEAMS[h], TEAMS[a]),
                Op::Update(h, a, hs, as_) => board.update_score(TEAMS[h], TEAMS[a], hs, as_),
                Op::Finish(h, a) => board.finish_match(TEAMS[h], TEAMS[a]),
            };
            if result.is_err() {
                prop_assert_eq!(board.len(), len_before);
            }
            assert_board_invariants(&board);
        }
    }
}
