//! Greedy interval lessons: merge, insert, erase-overlapping
//!
//! Merge and insert consume one interval per step; erase-overlapping keeps or
//! removes one interval per step after an end-time sort. Intervals are
//! `(start, end)` pairs, inclusive ends, as in the classic problems.

use crate::runner::SteppedAlgorithm;
use crate::scene::{Cell, Role, Row, Scene};
use crate::snapshot::Snapshot;

type Interval = (i64, i64);

fn interval_cell(iv: Interval, role: Role) -> Cell {
    Cell::new(format!("[{},{}]", iv.0, iv.1), role)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Scanning,
    Finished,
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Scanning => "SCAN",
        Phase::Finished => "FINISHED",
    }
}

/// Merge Intervals: coalesce everything that overlaps
pub struct MergeIntervals {
    intervals: Vec<Interval>,
    cursor: usize,
    merged: Vec<Interval>,
    phase: Phase,
    narration: String,
}

impl MergeIntervals {
    pub fn new(mut intervals: Vec<Interval>) -> Self {
        intervals.sort_unstable();
        let phase = if intervals.is_empty() {
            Phase::Finished
        } else {
            Phase::Scanning
        };
        MergeIntervals {
            narration: if intervals.is_empty() {
                "No intervals to merge".to_string()
            } else {
                format!("Sweep {} intervals sorted by start", intervals.len())
            },
            intervals,
            cursor: 0,
            merged: Vec::new(),
            phase,
        }
    }

    /// Merged intervals so far (final answer once terminal)
    pub fn merged(&self) -> &[Interval] {
        &self.merged
    }
}

impl SteppedAlgorithm for MergeIntervals {
    fn step(&mut self) {
        if self.phase == Phase::Finished {
            return;
        }
        let iv = self.intervals[self.cursor];
        match self.merged.last_mut() {
            Some(last) if iv.0 <= last.1 => {
                let old = *last;
                last.1 = last.1.max(iv.1);
                self.narration = format!(
                    "[{},{}] overlaps [{},{}]; extend to [{},{}]",
                    iv.0, iv.1, old.0, old.1, last.0, last.1
                );
            }
            _ => {
                self.merged.push(iv);
                self.narration = format!("[{},{}] starts a new merged block", iv.0, iv.1);
            }
        }
        self.cursor += 1;
        if self.cursor == self.intervals.len() {
            self.phase = Phase::Finished;
            self.narration = format!("Sweep complete: {} merged interval(s)", self.merged.len());
        }
    }

    fn is_terminal(&self) -> bool {
        self.phase == Phase::Finished
    }

    fn snapshot(&self) -> Snapshot {
        let mut scene = Scene::new();
        let cells = self
            .intervals
            .iter()
            .enumerate()
            .map(|(i, iv)| {
                let role = if i == self.cursor && self.phase == Phase::Scanning {
                    Role::Cursor
                } else if i < self.cursor {
                    Role::Visited
                } else {
                    Role::Normal
                };
                interval_cell(*iv, role)
            })
            .collect();
        scene.row(Row::new("sorted", cells));
        scene.row(Row::new(
            "merged",
            self.merged
                .iter()
                .map(|iv| interval_cell(*iv, Role::Accepted))
                .collect(),
        ));
        Snapshot::new(scene, self.narration.clone(), phase_label(self.phase))
    }
}

/// Insert Interval into a sorted, non-overlapping list
pub struct InsertInterval {
    intervals: Vec<Interval>,
    current: Interval,
    cursor: usize,
    placed: bool,
    result: Vec<Interval>,
    phase: Phase,
    narration: String,
}

impl InsertInterval {
    pub fn new(mut intervals: Vec<Interval>, new_interval: Interval) -> Self {
        intervals.sort_unstable();
        InsertInterval {
            narration: format!(
                "Insert [{},{}] into {} interval(s)",
                new_interval.0,
                new_interval.1,
                intervals.len()
            ),
            intervals,
            current: new_interval,
            cursor: 0,
            placed: false,
            result: Vec::new(),
            phase: Phase::Scanning,
        }
    }

    /// Final interval list (meaningful once terminal)
    pub fn result(&self) -> &[Interval] {
        &self.result
    }

    fn finish_if_done(&mut self) {
        if self.cursor == self.intervals.len() && self.placed {
            self.phase = Phase::Finished;
            self.narration = format!("Done: {} interval(s) in the result", self.result.len());
        }
    }
}

impl SteppedAlgorithm for InsertInterval {
    fn step(&mut self) {
        if self.phase == Phase::Finished {
            return;
        }
        if self.cursor == self.intervals.len() {
            // Nothing left to compare against; place the merged interval.
            self.result.push(self.current);
            self.placed = true;
            self.narration = format!(
                "Place merged interval [{},{}] at the end",
                self.current.0, self.current.1
            );
            self.finish_if_done();
            return;
        }
        let iv = self.intervals[self.cursor];
        if iv.1 < self.current.0 {
            self.result.push(iv);
            self.cursor += 1;
            self.narration = format!(
                "[{},{}] ends before [{},{}]; keep it as-is",
                iv.0, iv.1, self.current.0, self.current.1
            );
        } else if iv.0 > self.current.1 {
            if self.placed {
                self.result.push(iv);
                self.cursor += 1;
                self.narration = format!("[{},{}] lies after the insertion; keep it", iv.0, iv.1);
            } else {
                self.result.push(self.current);
                self.placed = true;
                self.narration = format!(
                    "[{},{}] starts after [{},{}]; place the merged interval first",
                    iv.0, iv.1, self.current.0, self.current.1
                );
            }
        } else {
            let old = self.current;
            self.current = (old.0.min(iv.0), old.1.max(iv.1));
            self.cursor += 1;
            self.narration = format!(
                "[{},{}] overlaps; grow the new interval to [{},{}]",
                iv.0, iv.1, self.current.0, self.current.1
            );
        }
        self.finish_if_done();
    }

    fn is_terminal(&self) -> bool {
        self.phase == Phase::Finished
    }

    fn snapshot(&self) -> Snapshot {
        let mut scene = Scene::new();
        let cells = self
            .intervals
            .iter()
            .enumerate()
            .map(|(i, iv)| {
                let role = if i == self.cursor && self.phase == Phase::Scanning {
                    Role::Cursor
                } else if i < self.cursor {
                    Role::Visited
                } else {
                    Role::Normal
                };
                interval_cell(*iv, role)
            })
            .collect();
        scene.row(Row::new("existing", cells));
        scene.row(Row::new(
            "new",
            vec![interval_cell(self.current, Role::Active)],
        ));
        scene.row(Row::new(
            "result",
            self.result
                .iter()
                .map(|iv| interval_cell(*iv, Role::Accepted))
                .collect(),
        ));
        Snapshot::new(scene, self.narration.clone(), phase_label(self.phase))
    }
}

/// Non-overlapping Intervals: fewest removals so nothing overlaps.
///
/// Greedy by end time: always keep the interval that frees the timeline
/// earliest; anything starting before the kept end is removed.
pub struct EraseOverlap {
    intervals: Vec<Interval>,
    cursor: usize,
    kept_end: Option<i64>,
    removed: usize,
    /// Indices of removed intervals, for display
    removed_set: Vec<usize>,
    phase: Phase,
    narration: String,
}

impl EraseOverlap {
    pub fn new(mut intervals: Vec<Interval>) -> Self {
        intervals.sort_unstable_by_key(|iv| iv.1);
        let phase = if intervals.is_empty() {
            Phase::Finished
        } else {
            Phase::Scanning
        };
        EraseOverlap {
            narration: if intervals.is_empty() {
                "No intervals; nothing overlaps".to_string()
            } else {
                format!("Sweep {} intervals sorted by end time", intervals.len())
            },
            intervals,
            cursor: 0,
            kept_end: None,
            removed: 0,
            removed_set: Vec::new(),
            phase,
        }
    }

    /// Number of removals so far (final answer once terminal)
    pub fn removed(&self) -> usize {
        self.removed
    }
}

impl SteppedAlgorithm for EraseOverlap {
    fn step(&mut self) {
        if self.phase == Phase::Finished {
            return;
        }
        let iv = self.intervals[self.cursor];
        match self.kept_end {
            Some(end) if iv.0 < end => {
                self.removed += 1;
                self.removed_set.push(self.cursor);
                self.narration = format!(
                    "[{},{}] starts before the kept end {}; remove it (total {})",
                    iv.0, iv.1, end, self.removed
                );
            }
            _ => {
                self.kept_end = Some(iv.1);
                self.narration = format!("[{},{}] fits; keep it, timeline now free after {}", iv.0, iv.1, iv.1);
            }
        }
        self.cursor += 1;
        if self.cursor == self.intervals.len() {
            self.phase = Phase::Finished;
            self.narration = format!("Sweep complete: {} interval(s) removed", self.removed);
        }
    }

    fn is_terminal(&self) -> bool {
        self.phase == Phase::Finished
    }

    fn snapshot(&self) -> Snapshot {
        let mut scene = Scene::new();
        let cells = self
            .intervals
            .iter()
            .enumerate()
            .map(|(i, iv)| {
                let role = if i == self.cursor && self.phase == Phase::Scanning {
                    Role::Cursor
                } else if self.removed_set.contains(&i) {
                    Role::Rejected
                } else if i < self.cursor {
                    Role::Accepted
                } else {
                    Role::Normal
                };
                interval_cell(*iv, role)
            })
            .collect();
        scene.row(Row::new("by end", cells));
        scene.var("removed", self.removed);
        if let Some(end) = self.kept_end {
            scene.var("kept end", end);
        }
        Snapshot::new(scene, self.narration.clone(), phase_label(self.phase))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(alg: &mut dyn SteppedAlgorithm) {
        while !alg.is_terminal() {
            alg.step();
        }
    }

    #[test]
    fn merge_classic_case() {
        let mut alg = MergeIntervals::new(vec![(1, 3), (2, 6), (8, 10), (15, 18)]);
        run(&mut alg);
        assert_eq!(alg.merged(), &[(1, 6), (8, 10), (15, 18)]);
    }

    #[test]
    fn merge_is_idempotent() {
        let mut first = MergeIntervals::new(vec![(1, 3), (2, 6), (8, 10), (15, 18)]);
        run(&mut first);
        let mut again = MergeIntervals::new(first.merged().to_vec());
        run(&mut again);
        assert_eq!(again.merged(), first.merged());
    }

    #[test]
    fn insert_merges_across_overlaps() {
        let mut alg = InsertInterval::new(vec![(1, 2), (3, 5), (6, 7), (8, 10), (12, 16)], (4, 8));
        run(&mut alg);
        assert_eq!(alg.result(), &[(1, 2), (3, 10), (12, 16)]);
    }

    #[test]
    fn insert_into_empty_list() {
        let mut alg = InsertInterval::new(Vec::new(), (5, 7));
        run(&mut alg);
        assert_eq!(alg.result(), &[(5, 7)]);
    }

    #[test]
    fn erase_overlap_counts_removals() {
        let mut alg = EraseOverlap::new(vec![(1, 2), (2, 3), (3, 4), (1, 3)]);
        run(&mut alg);
        assert_eq!(alg.removed(), 1);
    }

    #[test]
    fn erase_overlap_identical_intervals() {
        let mut alg = EraseOverlap::new(vec![(1, 2), (1, 2), (1, 2)]);
        run(&mut alg);
        assert_eq!(alg.removed(), 2);
    }
}
