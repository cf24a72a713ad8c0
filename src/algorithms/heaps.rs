//! Two-heap streaming median lesson
//!
//! A max-heap holds the lower half of the stream, a min-heap the upper half.
//! Each arriving value takes three steps: insert into the proper heap,
//! rebalance so the size gap is at most one, then report the median (top of
//! the larger heap, or the average of both tops when sizes match).

use crate::runner::SteppedAlgorithm;
use crate::scene::{Cell, Role, Row, Scene};
use crate::snapshot::Snapshot;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Inserting,
    Rebalancing,
    Reporting,
    Finished,
}

/// Streaming median over a fixed insertion sequence
pub struct TwoHeapMedian {
    stream: Vec<i64>,
    cursor: usize,
    /// Lower half, max-heap
    lower: BinaryHeap<i64>,
    /// Upper half, min-heap
    upper: BinaryHeap<Reverse<i64>>,
    medians: Vec<f64>,
    phase: Phase,
    narration: String,
}

impl TwoHeapMedian {
    pub fn new(stream: Vec<i64>) -> Self {
        let phase = if stream.is_empty() {
            Phase::Finished
        } else {
            Phase::Inserting
        };
        TwoHeapMedian {
            narration: if stream.is_empty() {
                "Empty stream has no medians".to_string()
            } else {
                format!("Maintain the median of {} streamed values", stream.len())
            },
            stream,
            cursor: 0,
            lower: BinaryHeap::new(),
            upper: BinaryHeap::new(),
            medians: Vec::new(),
            phase,
        }
    }

    /// Median after each completed insertion
    pub fn medians(&self) -> &[f64] {
        &self.medians
    }

    /// Median of everything inserted so far, if anything has been
    pub fn current_median(&self) -> Option<f64> {
        self.medians.last().copied()
    }

    /// (lower, upper) heap sizes, for the balance invariant
    pub fn heap_sizes(&self) -> (usize, usize) {
        (self.lower.len(), self.upper.len())
    }

    fn phase_label(&self) -> &'static str {
        match self.phase {
            Phase::Inserting => "INSERT",
            Phase::Rebalancing => "REBALANCE",
            Phase::Reporting => "REPORT",
            Phase::Finished => "FINISHED",
        }
    }

    fn compute_median(&self) -> f64 {
        if self.lower.len() > self.upper.len() {
            self.lower.peek().copied().unwrap_or(0) as f64
        } else if self.upper.len() > self.lower.len() {
            self.upper.peek().map_or(0, |Reverse(v)| *v) as f64
        } else {
            let low = self.lower.peek().copied().unwrap_or(0) as f64;
            let high = self.upper.peek().map_or(0, |Reverse(v)| *v) as f64;
            (low + high) / 2.0
        }
    }
}

impl SteppedAlgorithm for TwoHeapMedian {
    fn step(&mut self) {
        match self.phase {
            Phase::Inserting => {
                let v = self.stream[self.cursor];
                if self.lower.peek().map_or(true, |&top| v <= top) {
                    self.lower.push(v);
                    self.narration =
                        format!("Insert {} into the lower half (max-heap)", v);
                } else {
                    self.upper.push(Reverse(v));
                    self.narration =
                        format!("Insert {} into the upper half (min-heap)", v);
                }
                self.phase = Phase::Rebalancing;
            }
            Phase::Rebalancing => {
                if self.lower.len() > self.upper.len() + 1 {
                    if let Some(v) = self.lower.pop() {
                        self.upper.push(Reverse(v));
                        self.narration =
                            format!("Lower half too big; move {} up", v);
                    }
                } else if self.upper.len() > self.lower.len() + 1 {
                    if let Some(Reverse(v)) = self.upper.pop() {
                        self.lower.push(v);
                        self.narration =
                            format!("Upper half too big; move {} down", v);
                    }
                } else {
                    self.narration = format!(
                        "Heaps already balanced ({} vs {})",
                        self.lower.len(),
                        self.upper.len()
                    );
                }
                self.phase = Phase::Reporting;
            }
            Phase::Reporting => {
                let median = self.compute_median();
                self.medians.push(median);
                self.cursor += 1;
                if self.cursor == self.stream.len() {
                    self.phase = Phase::Finished;
                    self.narration = format!("Stream consumed; final median is {}", median);
                } else {
                    self.narration = format!("Median after {} value(s): {}", self.cursor, median);
                    self.phase = Phase::Inserting;
                }
            }
            Phase::Finished => {}
        }
    }

    fn is_terminal(&self) -> bool {
        self.phase == Phase::Finished
    }

    fn snapshot(&self) -> Snapshot {
        let mut scene = Scene::new();
        let stream_cells = self
            .stream
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let role = if i == self.cursor && self.phase != Phase::Finished {
                    Role::Cursor
                } else if i < self.cursor {
                    Role::Visited
                } else {
                    Role::Normal
                };
                Cell::new(v.to_string(), role)
            })
            .collect();
        scene.row(Row::new("stream", stream_cells));

        // Heaps render sorted so the halves read as the split sorted stream.
        let mut lower: Vec<i64> = self.lower.iter().copied().collect();
        lower.sort_unstable();
        let mut upper: Vec<i64> = self.upper.iter().map(|Reverse(v)| *v).collect();
        upper.sort_unstable();
        let lower_cells = lower
            .iter()
            .map(|v| {
                let role = if Some(v) == self.lower.peek() {
                    Role::Cursor
                } else {
                    Role::Active
                };
                Cell::new(v.to_string(), role)
            })
            .collect();
        scene.row(Row::new("lower half", lower_cells));
        let upper_cells = upper
            .iter()
            .map(|v| {
                let role = if self.upper.peek().map_or(false, |Reverse(top)| top == v) {
                    Role::Cursor
                } else {
                    Role::Active
                };
                Cell::new(v.to_string(), role)
            })
            .collect();
        scene.row(Row::new("upper half", upper_cells));

        scene.var(
            "sizes",
            format!("{} / {}", self.lower.len(), self.upper.len()),
        );
        if let Some(median) = self.current_median() {
            scene.var("median", median);
        }
        Snapshot::new(scene, self.narration.clone(), self.phase_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn medians_track_the_true_median() {
        let stream = vec![2, 10, 5];
        let mut alg = TwoHeapMedian::new(stream);
        while !alg.is_terminal() {
            alg.step();
        }
        assert_eq!(alg.medians(), &[2.0, 6.0, 5.0]);
    }

    #[test]
    fn heaps_stay_balanced_after_every_report() {
        let mut alg = TwoHeapMedian::new(vec![5, 1, 9, 3, 8, 7, 2]);
        let mut seen = 0;
        while !alg.is_terminal() {
            alg.step();
            if alg.medians().len() > seen {
                seen = alg.medians().len();
                let (lo, hi) = alg.heap_sizes();
                assert!(lo.abs_diff(hi) <= 1, "unbalanced after insert {}", seen);
                assert_eq!(lo + hi, seen);
            }
        }
    }

    #[test]
    fn matches_sorted_median_for_longer_stream() {
        let stream = vec![4, -1, 7, 7, 0, 12, 3, 5];
        let mut alg = TwoHeapMedian::new(stream.clone());
        while !alg.is_terminal() {
            alg.step();
        }
        for (i, median) in alg.medians().iter().enumerate() {
            let mut prefix: Vec<i64> = stream[..=i].to_vec();
            prefix.sort_unstable();
            let expected = if prefix.len() % 2 == 1 {
                prefix[prefix.len() / 2] as f64
            } else {
                (prefix[prefix.len() / 2 - 1] + prefix[prefix.len() / 2]) as f64 / 2.0
            };
            assert_eq!(*median, expected, "median after {} inserts", i + 1);
        }
    }
}
