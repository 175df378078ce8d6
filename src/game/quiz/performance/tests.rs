use super::*;

fn tracker(correct: usize, answered: usize) -> PerformanceTracker {
    let mut tracker = PerformanceTracker::new();
    for i in 0..answered {
        tracker.record_outcome(i < correct);
    }
    tracker
}

#[test]
fn starts_empty() {
    let tracker = PerformanceTracker::new();
    assert_eq!(tracker.answered(), 0);
    assert_eq!(tracker.correct(), 0);
    assert_eq!(tracker.ratio(), 0.0);
    assert_eq!(
        tracker.target_difficulty(&Settings::default()),
        Difficulty::Easy
    );
}

#[test]
fn records_outcomes() {
    let mut tracker = PerformanceTracker::new();
    tracker.record_outcome(true);
    tracker.record_outcome(false);
    tracker.record_outcome(true);
    assert_eq!(tracker.answered(), 3);
    assert_eq!(tracker.correct(), 2);
    assert!(tracker.correct() <= tracker.answered());
}

#[test]
fn thresholds_are_strict() {
    let settings = Settings::default();
    assert_eq!(tracker(71, 100).target_difficulty(&settings), Difficulty::Hard);
    assert_eq!(tracker(7, 10).target_difficulty(&settings), Difficulty::Medium);
    assert_eq!(tracker(41, 100).target_difficulty(&settings), Difficulty::Medium);
    assert_eq!(tracker(2, 5).target_difficulty(&settings), Difficulty::Easy);
    assert_eq!(tracker(0, 4).target_difficulty(&settings), Difficulty::Easy);
    assert_eq!(tracker(1, 1).target_difficulty(&settings), Difficulty::Hard);
}

#[test]
fn reset_clears_tally() {
    let mut tracker = tracker(3, 4);
    tracker.reset();
    assert_eq!(tracker, PerformanceTracker::new());
}
