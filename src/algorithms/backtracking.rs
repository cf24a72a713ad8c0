//! Backtracking lesson: combination sum with an explicit frame stack
//!
//! The recursion is unrolled into a stack of frames so one `step()` performs
//! exactly one of: choose a candidate (push), record a completed combination,
//! or backtrack (pop). Candidates may be reused, so a child frame starts at
//! its parent's cursor, and the parent advances only when the child returns.

use crate::runner::SteppedAlgorithm;
use crate::scene::{Cell, Role, Row, Scene};
use crate::snapshot::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Exploring,
    Finished,
}

/// One unfinished recursion frame
#[derive(Debug, Clone)]
struct Frame {
    /// Next candidate index to try at this depth
    cursor: usize,
    /// Target remaining below this frame's partial sum
    remaining: i64,
    /// Candidate appended to the path when this frame was entered
    chosen: Option<i64>,
}

/// Combination Sum: all multisets of candidates summing to the target
pub struct CombinationSum {
    candidates: Vec<i64>,
    target: i64,
    stack: Vec<Frame>,
    path: Vec<i64>,
    results: Vec<Vec<i64>>,
    phase: Phase,
    narration: String,
}

impl CombinationSum {
    pub fn new(mut candidates: Vec<i64>, target: i64) -> Self {
        candidates.retain(|c| *c > 0);
        candidates.sort_unstable();
        candidates.dedup();
        if candidates.is_empty() && target != 0 {
            return CombinationSum {
                candidates,
                target,
                stack: Vec::new(),
                path: Vec::new(),
                results: Vec::new(),
                phase: Phase::Finished,
                narration: "No positive candidates; nothing can reach the target".to_string(),
            };
        }
        CombinationSum {
            candidates,
            stack: vec![Frame {
                cursor: 0,
                remaining: target,
                chosen: None,
            }],
            path: Vec::new(),
            results: Vec::new(),
            phase: Phase::Exploring,
            narration: format!("Explore combinations summing to {}", target),
            target,
        }
    }

    /// All combinations found so far (complete once terminal)
    pub fn results(&self) -> &[Vec<i64>] {
        &self.results
    }

    fn pop_frame(&mut self) {
        if let Some(frame) = self.stack.pop() {
            if frame.chosen.is_some() {
                self.path.pop();
            }
        }
        if let Some(parent) = self.stack.last_mut() {
            parent.cursor += 1;
        }
    }

    fn phase_label(&self) -> &'static str {
        match self.phase {
            Phase::Exploring => "EXPLORE",
            Phase::Finished => "FINISHED",
        }
    }
}

impl SteppedAlgorithm for CombinationSum {
    fn step(&mut self) {
        if self.phase == Phase::Finished {
            return;
        }
        let Some(top) = self.stack.last() else {
            self.phase = Phase::Finished;
            self.narration = format!(
                "Search space exhausted; found {} combination(s)",
                self.results.len()
            );
            return;
        };

        if top.remaining == 0 {
            self.results.push(self.path.clone());
            self.narration = format!(
                "Sum reached: record {:?} (combination #{})",
                self.path,
                self.results.len()
            );
            self.pop_frame();
        } else if top.cursor >= self.candidates.len()
            || self.candidates[top.cursor] > top.remaining
        {
            // Candidates are sorted, so everything from the cursor on overshoots.
            self.narration = if self.path.is_empty() {
                "No candidate fits; done exploring from the root".to_string()
            } else {
                format!("No candidate fits remaining {}; backtrack from {:?}", top.remaining, self.path)
            };
            self.pop_frame();
        } else {
            let choice = self.candidates[top.cursor];
            let remaining = top.remaining - choice;
            let cursor = top.cursor;
            self.path.push(choice);
            self.stack.push(Frame {
                cursor,
                remaining,
                chosen: Some(choice),
            });
            self.narration = format!(
                "Choose {} -> path {:?}, remaining {}",
                choice, self.path, remaining
            );
        }

        if self.stack.is_empty() {
            self.phase = Phase::Finished;
            self.narration = format!(
                "Search space exhausted; found {} combination(s)",
                self.results.len()
            );
        }
    }

    fn is_terminal(&self) -> bool {
        self.phase == Phase::Finished
    }

    fn snapshot(&self) -> Snapshot {
        let mut scene = Scene::new();
        let cursor = self.stack.last().map(|f| f.cursor);
        let cells = self
            .candidates
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let role = if Some(i) == cursor {
                    Role::Cursor
                } else {
                    Role::Normal
                };
                Cell::new(c.to_string(), role)
            })
            .collect();
        scene.row(Row::new("candidates", cells));
        scene.row(Row::new(
            "path",
            self.path
                .iter()
                .map(|v| Cell::new(v.to_string(), Role::Active))
                .collect(),
        ));
        for (i, combo) in self.results.iter().enumerate() {
            scene.row(Row::new(
                format!("found #{}", i + 1),
                combo
                    .iter()
                    .map(|v| Cell::new(v.to_string(), Role::Accepted))
                    .collect(),
            ));
        }
        scene
            .var("target", self.target)
            .var("depth", self.stack.len())
            .var(
                "remaining",
                self.stack
                    .last()
                    .map_or("-".to_string(), |f| f.remaining.to_string()),
            );
        Snapshot::new(scene, self.narration.clone(), self.phase_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(alg: &mut CombinationSum) {
        while !alg.is_terminal() {
            alg.step();
        }
    }

    #[test]
    fn classic_case_finds_both_combinations() {
        let mut alg = CombinationSum::new(vec![2, 3, 6, 7], 7);
        run(&mut alg);
        assert_eq!(alg.results(), &[vec![2, 2, 3], vec![7]]);
    }

    #[test]
    fn unreachable_target_finds_nothing() {
        let mut alg = CombinationSum::new(vec![4, 6], 3);
        run(&mut alg);
        assert!(alg.results().is_empty());
    }

    #[test]
    fn zero_target_yields_empty_combination() {
        let mut alg = CombinationSum::new(vec![2, 3], 0);
        run(&mut alg);
        assert_eq!(alg.results(), &[Vec::<i64>::new()]);
    }
}
