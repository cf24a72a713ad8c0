//! Sliding-window lesson: longest repeating character replacement
//!
//! Classic frequency-map window: grow the right edge one character per step;
//! when the window needs more than `k` replacements, the next step shrinks
//! the left edge by one. `max_count` tracks the best single-character
//! frequency ever seen, so the window never shrinks below the best answer.

use crate::runner::SteppedAlgorithm;
use crate::scene::{Cell, Role, Row, Scene};
use crate::snapshot::Snapshot;
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Expanding,
    Shrinking,
    Finished,
}

/// Longest substring of equal characters after at most `k` replacements
pub struct CharReplacement {
    chars: Vec<char>,
    k: usize,
    left: usize,
    right: usize,
    counts: FxHashMap<char, usize>,
    max_count: usize,
    best: usize,
    phase: Phase,
    narration: String,
}

impl CharReplacement {
    pub fn new(text: &str, k: usize) -> Self {
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            return CharReplacement {
                chars,
                k,
                left: 0,
                right: 0,
                counts: FxHashMap::default(),
                max_count: 0,
                best: 0,
                phase: Phase::Finished,
                narration: "Empty string; longest window is 0".to_string(),
            };
        }
        CharReplacement {
            chars,
            k,
            left: 0,
            right: 0,
            counts: FxHashMap::default(),
            max_count: 0,
            best: 0,
            phase: Phase::Expanding,
            narration: format!("Grow a window that needs at most k={} replacements", k),
        }
    }

    /// Longest valid window found (final answer once terminal)
    pub fn longest(&self) -> usize {
        self.best
    }

    fn phase_label(&self) -> &'static str {
        match self.phase {
            Phase::Expanding => "EXPAND",
            Phase::Shrinking => "SHRINK",
            Phase::Finished => "FINISHED",
        }
    }
}

impl SteppedAlgorithm for CharReplacement {
    fn step(&mut self) {
        match self.phase {
            Phase::Expanding => {
                if self.right == self.chars.len() {
                    self.phase = Phase::Finished;
                    self.narration =
                        format!("Right edge reached the end; longest window is {}", self.best);
                    return;
                }
                let c = self.chars[self.right];
                let count = self.counts.entry(c).or_insert(0);
                *count += 1;
                self.max_count = self.max_count.max(*count);
                self.right += 1;
                let window = self.right - self.left;
                if window - self.max_count > self.k {
                    self.narration = format!(
                        "Took '{}'; window {} needs {} replacements (> k), must shrink",
                        c,
                        window,
                        window - self.max_count
                    );
                    self.phase = Phase::Shrinking;
                } else {
                    self.best = self.best.max(window);
                    self.narration = format!(
                        "Took '{}'; window {} is valid ({} replacements), best = {}",
                        c,
                        window,
                        window - self.max_count,
                        self.best
                    );
                }
            }
            Phase::Shrinking => {
                let c = self.chars[self.left];
                if let Some(count) = self.counts.get_mut(&c) {
                    *count = count.saturating_sub(1);
                }
                self.left += 1;
                // One drop restores validity: the window only ever exceeds k by one.
                self.narration = format!(
                    "Dropped '{}' from the left; window back to {}",
                    c,
                    self.right - self.left
                );
                self.phase = Phase::Expanding;
            }
            Phase::Finished => {}
        }
    }

    fn is_terminal(&self) -> bool {
        self.phase == Phase::Finished
    }

    fn snapshot(&self) -> Snapshot {
        let mut scene = Scene::new();
        let cells = self
            .chars
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let role = if self.phase == Phase::Finished {
                    Role::Normal
                } else if i >= self.left && i < self.right {
                    Role::Active
                } else if i < self.left {
                    Role::Visited
                } else {
                    Role::Normal
                };
                Cell::new(c.to_string(), role)
            })
            .collect();
        scene.row(Row::new("text", cells));

        let mut freq: Vec<(char, usize)> = self
            .counts
            .iter()
            .filter(|(_, n)| **n > 0)
            .map(|(c, n)| (*c, *n))
            .collect();
        freq.sort_unstable();
        let freq_cells = freq
            .iter()
            .map(|(c, n)| Cell::plain(format!("{}:{}", c, n)))
            .collect();
        scene.row(Row::new("counts", freq_cells));

        scene
            .var("k", self.k)
            .var("window", self.right - self.left)
            .var("max count", self.max_count)
            .var("best", self.best);
        Snapshot::new(scene, self.narration.clone(), self.phase_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(alg: &mut CharReplacement) {
        while !alg.is_terminal() {
            alg.step();
        }
    }

    #[test]
    fn classic_case() {
        let mut alg = CharReplacement::new("AABABBA", 1);
        run(&mut alg);
        assert_eq!(alg.longest(), 4);
    }

    #[test]
    fn uniform_string_needs_no_replacements() {
        let mut alg = CharReplacement::new("BBBB", 0);
        run(&mut alg);
        assert_eq!(alg.longest(), 4);
    }

    #[test]
    fn empty_string_is_terminal() {
        let alg = CharReplacement::new("", 2);
        assert!(alg.is_terminal());
        assert_eq!(alg.longest(), 0);
    }
}
