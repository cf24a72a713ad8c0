// Integration tests for the runner engine and catalogue, driven through the
// public API the binary itself uses.

use algotty::catalog::{self, LESSONS};
use algotty::runner::{errors::RunnerError, Runner, STEP_FUSE};

#[test]
fn every_lesson_finishes_on_its_default_input() {
    for lesson in LESSONS {
        let mut runner = lesson
            .build_runner(lesson.default_input)
            .unwrap_or_else(|e| panic!("{}: build failed: {}", lesson.id, e));
        runner
            .run_to_end()
            .unwrap_or_else(|e| panic!("{}: run failed: {}", lesson.id, e));
        assert!(runner.is_exhausted(), "{}: not exhausted after run", lesson.id);
        let total = runner.total_steps();
        assert_eq!(total, Some(runner.recorded()), "{}", lesson.id);
        assert!(total.unwrap() >= 1, "{}: no snapshots recorded", lesson.id);
        assert!(total.unwrap() <= STEP_FUSE, "{}: fuse-sized run", lesson.id);
    }
}

#[test]
fn stepping_at_terminal_is_a_guarded_no_op() {
    for lesson in LESSONS {
        let mut runner = lesson.build_runner(lesson.default_input).unwrap();
        runner.run_to_end().unwrap();
        let last = runner.current().clone();
        // Forward at the live edge past terminal must fail without mutating.
        for _ in 0..3 {
            assert!(matches!(
                runner.step_forward(),
                Err(RunnerError::EndOfHistory)
            ));
        }
        assert_eq!(runner.current(), &last, "{}: terminal step mutated", lesson.id);
    }
}

#[test]
fn replay_matches_the_original_run() {
    let lesson = catalog::find("merge-intervals").unwrap();
    let mut runner = lesson.build_runner(lesson.default_input).unwrap();
    runner.run_to_end().unwrap();
    let recorded: Vec<_> = (0..runner.recorded())
        .map(|i| runner.snapshot_at(i).unwrap().clone())
        .collect();

    runner.rewind_to_start();
    assert_eq!(runner.position(), 0);
    for (i, expected) in recorded.iter().enumerate() {
        assert_eq!(runner.current(), expected, "replay diverged at step {}", i);
        if i + 1 < recorded.len() {
            runner.step_forward().unwrap();
        }
    }
}

#[test]
fn backward_navigation_stops_at_step_zero() {
    let lesson = catalog::find("binary-search").unwrap();
    let mut runner = lesson.build_runner(lesson.default_input).unwrap();
    runner.step_forward().unwrap();
    runner.step_forward().unwrap();
    runner.step_backward().unwrap();
    runner.step_backward().unwrap();
    assert_eq!(runner.position(), 0);
    assert!(matches!(
        runner.step_backward(),
        Err(RunnerError::StartOfHistory)
    ));
}

#[test]
fn stepping_inside_history_does_not_record_new_snapshots() {
    let lesson = catalog::find("climbing-stairs").unwrap();
    let mut runner = lesson.build_runner(lesson.default_input).unwrap();
    for _ in 0..3 {
        runner.step_forward().unwrap();
    }
    let recorded = runner.recorded();
    runner.step_backward().unwrap();
    runner.step_backward().unwrap();
    runner.step_forward().unwrap();
    assert_eq!(runner.recorded(), recorded);
    assert_eq!(runner.position(), 2);
}

#[test]
fn total_steps_is_unknown_until_terminal() {
    let lesson = catalog::find("islands").unwrap();
    let mut runner = lesson.build_runner(lesson.default_input).unwrap();
    assert_eq!(runner.total_steps(), None);
    runner.run_to_end().unwrap();
    assert!(runner.total_steps().is_some());
}

#[test]
fn cap_failure_mid_run_latches_the_runner() {
    let lesson = catalog::find("climbing-stairs").unwrap();
    // Cap sized to admit the initial snapshot plus a few steps, then trip.
    let mut runner = Runner::new(lesson.build(lesson.default_input), 400).unwrap();

    let mut tripped = None;
    for _ in 0..1000 {
        match runner.step_forward() {
            Ok(()) => {}
            Err(e) => {
                tripped = Some(e);
                break;
            }
        }
    }
    let error = tripped.expect("cap never tripped");
    assert!(matches!(error, RunnerError::SnapshotLimitExceeded { .. }));

    // Later attempts must return the same error without advancing the
    // algorithm, so history and current() stay frozen and consistent.
    let recorded = runner.recorded();
    let last = runner.current().clone();
    for _ in 0..5 {
        assert_eq!(runner.step_forward(), Err(error.clone()));
    }
    assert_eq!(runner.recorded(), recorded);
    assert_eq!(runner.current(), &last);

    // The frozen mid-run snapshot is not the final answer.
    assert!(!runner.is_exhausted());
    assert_eq!(runner.total_steps(), None);

    // Recorded history remains navigable.
    runner.rewind_to_start();
    assert_eq!(runner.position(), 0);
    runner.step_forward().unwrap();
    assert_eq!(runner.position(), 1);
}

#[test]
fn tiny_memory_cap_rejects_recording() {
    let lesson = catalog::find("trapping-rain").unwrap();
    let result = Runner::new(lesson.build(lesson.default_input), 8);
    assert!(matches!(
        result,
        Err(RunnerError::SnapshotLimitExceeded { .. })
    ));
}

#[test]
fn unknown_lesson_id_is_an_error() {
    assert!(matches!(
        catalog::find("no-such-lesson"),
        Err(RunnerError::UnknownLesson { .. })
    ));
}
