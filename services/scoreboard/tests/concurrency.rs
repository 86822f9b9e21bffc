//! Concurrency tests
//!
//! One board shared by many threads: concurrent kick-offs, update/finish
//! races on the same pair, and readers taking summaries while scores
//! change underneath them.

use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::{Arc, Barrier};
use std::thread;

use scoreboard::ScoreBoard;

fn home(index: usize) -> String {
    format!("Mexico{}", index)
}

fn away(index: usize) -> String {
    format!("Brazil{}", index * 10_000)
}

/// Start `count` disjoint matches from `num_threads` threads
fn start_all(board: &Arc<ScoreBoard>, count: usize, num_threads: usize) {
    let barrier = Arc::new(Barrier::new(num_threads));
    let handles: Vec<_> = (0..num_threads)
        .map(|t| {
            let board = Arc::clone(board);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for index in (1..=count).filter(|i| i % num_threads == t) {
                    board
                        .start_match(&home(index), &away(index))
                        .unwrap_or_else(|e| panic!("Start match failed: {}", e));
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }
}

#[test]
fn test_concurrent_starts_all_recorded() {
    let board = Arc::new(ScoreBoard::world_cup());
    let num_matches = 1000;

    start_all(&board, num_matches, 16);

    let summary = board.summary();
    assert_eq!(summary.len(), num_matches);

    let keys: HashSet<_> = summary.iter().map(|m| m.key()).collect();
    assert_eq!(keys.len(), num_matches, "Duplicate match in summary");

    // No scores yet, so most recent kick-off leads
    assert!(summary.windows(2).all(|p| p[0].started_at > p[1].started_at));
}

#[test]
fn test_concurrent_duplicate_starts_single_winner() {
    let board = Arc::new(ScoreBoard::world_cup());
    let num_threads = 32;
    let barrier = Arc::new(Barrier::new(num_threads));

    let handles: Vec<_> = (0..num_threads)
        .map(|_| {
            let board = Arc::clone(&board);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                board.start_match("Spain", "Brazil").is_ok()
            })
        })
        .collect();

    let winners = handles
        .into_iter()
        .map(|h| h.join().unwrap())
        .filter(|won| *won)
        .count();

    assert_eq!(winners, 1);
    assert_eq!(board.len(), 1);
}

#[test]
fn test_concurrent_update_and_finish_leave_board_empty() {
    let board = Arc::new(ScoreBoard::world_cup());
    let num_matches = 100;
    let num_threads = 50;

    start_all(&board, num_matches, 8);
    assert_eq!(board.len(), num_matches);

    let barrier = Arc::new(Barrier::new(num_threads * 2));
    let mut handles = Vec::new();
    for t in 0..num_threads {
        let home_score = t as i32;
        let away_score = t as i32 + 1;

        let updater = {
            let board = Arc::clone(&board);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for index in 1..=num_matches {
                    match board.update_score(&home(index), &away(index), home_score, away_score) {
                        Ok(()) => {}
                        // Lost the race against a finish
                        Err(e) if e.is_not_found() => {}
                        Err(e) => panic!("Update match score failed: {}", e),
                    }
                }
            })
        };
        let finisher = {
            let board = Arc::clone(&board);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for index in 1..=num_matches {
                    board
                        .finish_match(&home(index), &away(index))
                        .unwrap_or_else(|e| panic!("Finish match failed: {}", e));
                }
            })
        };
        handles.push(updater);
        handles.push(finisher);
    }

    for handle in handles {
        handle.join().unwrap();
    }

    assert!(board.summary().is_empty());
}

#[test]
fn test_concurrent_finishes_leave_board_empty() {
    let board = Arc::new(ScoreBoard::world_cup());
    let num_matches = 100;

    start_all(&board, num_matches, 4);

    let handles: Vec<_> = (1..=num_matches)
        .map(|index| {
            let board = Arc::clone(&board);
            thread::spawn(move || board.finish_match(&home(index), &away(index)))
        })
        .collect();

    for handle in handles {
        handle.join().unwrap().unwrap();
    }

    assert!(board.is_empty());
}

#[test]
fn test_summary_never_observes_partial_update() {
    let board = Arc::new(ScoreBoard::world_cup());
    let num_matches = 50;
    start_all(&board, num_matches, 4);

    let running = Arc::new(AtomicBool::new(true));

    let writers: Vec<_> = (0..4)
        .map(|w| {
            let board = Arc::clone(&board);
            thread::spawn(move || {
                for round in 0..200 {
                    for index in 1..=num_matches {
                        let goals = ((round + index + w) % 7) as i32;
                        board
                            .update_score(&home(index), &away(index), goals, goals / 2)
                            .unwrap();
                    }
                }
            })
        })
        .collect();

    let readers: Vec<_> = (0..4)
        .map(|_| {
            let board = Arc::clone(&board);
            let running = Arc::clone(&running);
            thread::spawn(move || {
                let mut snapshots = 0;
                while running.load(AtomicOrdering::SeqCst) || snapshots == 0 {
                    let summary = board.summary();
                    assert_eq!(summary.len(), num_matches, "Match missing or duplicated");

                    let keys: HashSet<_> = summary.iter().map(|m| m.key()).collect();
                    assert_eq!(keys.len(), num_matches);

                    assert!(summary
                        .windows(2)
                        .all(|p| scoreboard::ranking::rank(&p[0], &p[1]).is_lt()));
                    snapshots += 1;
                }
                snapshots
            })
        })
        .collect();

    for writer in writers {
        writer.join().unwrap();
    }
    running.store(false, AtomicOrdering::SeqCst);

    for reader in readers {
        assert!(reader.join().unwrap() > 0);
    }
}
