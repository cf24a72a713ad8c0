//! Binary search lessons: classic search and minimum in a rotated array
//!
//! Both alternate a probe step (compute the midpoint, narrate the comparison)
//! and a narrow step (discard half the range), so every comparison is visible
//! on its own.

use crate::runner::SteppedAlgorithm;
use crate::scene::{Cell, Role, Row, Scene};
use crate::snapshot::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Probing,
    Narrowing,
    Finished,
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Probing => "PROBE",
        Phase::Narrowing => "NARROW",
        Phase::Finished => "FINISHED",
    }
}

/// Classic binary search over a sorted array
pub struct BinarySearch {
    nums: Vec<i64>,
    target: i64,
    lo: i64,
    hi: i64,
    mid: Option<usize>,
    found: Option<usize>,
    phase: Phase,
    narration: String,
}

impl BinarySearch {
    pub fn new(nums: Vec<i64>, target: i64) -> Self {
        if nums.is_empty() {
            return BinarySearch {
                nums,
                target,
                lo: 0,
                hi: -1,
                mid: None,
                found: None,
                phase: Phase::Finished,
                narration: "Empty array; target cannot be present".to_string(),
            };
        }
        let hi = nums.len() as i64 - 1;
        BinarySearch {
            nums,
            target,
            lo: 0,
            hi,
            mid: None,
            found: None,
            phase: Phase::Probing,
            narration: format!("Search for {} in [0, {}]", target, hi),
        }
    }

    /// Index of the target, if it was found (meaningful once terminal)
    pub fn found(&self) -> Option<usize> {
        self.found
    }
}

impl SteppedAlgorithm for BinarySearch {
    fn step(&mut self) {
        match self.phase {
            Phase::Probing => {
                if self.lo > self.hi {
                    self.phase = Phase::Finished;
                    self.narration = format!("Range is empty; {} is not present", self.target);
                    return;
                }
                let mid = ((self.lo + self.hi) / 2) as usize;
                self.mid = Some(mid);
                let v = self.nums[mid];
                if v == self.target {
                    self.found = Some(mid);
                    self.phase = Phase::Finished;
                    self.narration = format!("nums[{}] = {} matches the target", mid, v);
                } else {
                    self.narration = format!(
                        "Probe mid={}: {} {} {}",
                        mid,
                        v,
                        if v < self.target { "<" } else { ">" },
                        self.target
                    );
                    self.phase = Phase::Narrowing;
                }
            }
            Phase::Narrowing => {
                // mid is always set by the preceding probe
                let mid = self.mid.unwrap_or(0);
                if self.nums[mid] < self.target {
                    self.lo = mid as i64 + 1;
                    self.narration = format!("Discard the left half; search [{}, {}]", self.lo, self.hi);
                } else {
                    self.hi = mid as i64 - 1;
                    self.narration = format!("Discard the right half; search [{}, {}]", self.lo, self.hi);
                }
                self.mid = None;
                self.phase = Phase::Probing;
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
            .nums
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let role = if Some(i) == self.found {
                    Role::Accepted
                } else if Some(i) == self.mid {
                    Role::Cursor
                } else if (i as i64) < self.lo || (i as i64) > self.hi {
                    Role::Rejected
                } else {
                    Role::Normal
                };
                Cell::new(v.to_string(), role)
            })
            .collect();
        scene.row(Row::new("nums", cells));
        scene
            .var("target", self.target)
            .var("lo", self.lo)
            .var("hi", self.hi);
        if let Some(found) = self.found {
            scene.var("found at", found);
        }
        Snapshot::new(scene, self.narration.clone(), phase_label(self.phase))
    }
}

/// Minimum in a rotated sorted array
pub struct RotatedMin {
    nums: Vec<i64>,
    lo: usize,
    hi: usize,
    mid: Option<usize>,
    phase: Phase,
    narration: String,
}

impl RotatedMin {
    pub fn new(nums: Vec<i64>) -> Self {
        if nums.is_empty() {
            return RotatedMin {
                nums,
                lo: 0,
                hi: 0,
                mid: None,
                phase: Phase::Finished,
                narration: "Empty array has no minimum".to_string(),
            };
        }
        let hi = nums.len() - 1;
        let phase = if hi == 0 { Phase::Finished } else { Phase::Probing };
        RotatedMin {
            narration: if hi == 0 {
                "Single element is the minimum".to_string()
            } else {
                format!("Find the rotation point in [0, {}]", hi)
            },
            nums,
            lo: 0,
            hi,
            mid: None,
            phase,
        }
    }

    /// The minimum value (meaningful once terminal, `None` for empty input)
    pub fn min_value(&self) -> Option<i64> {
        self.nums.get(self.lo).copied()
    }
}

impl SteppedAlgorithm for RotatedMin {
    fn step(&mut self) {
        match self.phase {
            Phase::Probing => {
                if self.lo >= self.hi {
                    self.phase = Phase::Finished;
                    self.narration = format!(
                        "Range collapsed; minimum is nums[{}] = {}",
                        self.lo, self.nums[self.lo]
                    );
                    return;
                }
                let mid = (self.lo + self.hi) / 2;
                self.mid = Some(mid);
                self.narration = format!(
                    "Probe mid={}: nums[{}]={} vs nums[{}]={}",
                    mid, mid, self.nums[mid], self.hi, self.nums[self.hi]
                );
                self.phase = Phase::Narrowing;
            }
            Phase::Narrowing => {
                let mid = self.mid.unwrap_or(self.lo);
                if self.nums[mid] > self.nums[self.hi] {
                    // The rotation point is strictly to the right of mid.
                    self.lo = mid + 1;
                    self.narration = format!(
                        "Mid is above the right end; minimum lies in [{}, {}]",
                        self.lo, self.hi
                    );
                } else {
                    self.hi = mid;
                    self.narration = format!(
                        "Mid is at or below the right end; minimum lies in [{}, {}]",
                        self.lo, self.hi
                    );
                }
                self.mid = None;
                if self.lo == self.hi {
                    self.phase = Phase::Finished;
                    self.narration = format!(
                        "Range collapsed; minimum is nums[{}] = {}",
                        self.lo, self.nums[self.lo]
                    );
                } else {
                    self.phase = Phase::Probing;
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
        let terminal = self.phase == Phase::Finished;
        let cells = self
            .nums
            .iter()
            .enumerate()
            .map(|(i, v)| {
                let role = if terminal && i == self.lo {
                    Role::Accepted
                } else if Some(i) == self.mid {
                    Role::Cursor
                } else if i < self.lo || i > self.hi {
                    Role::Rejected
                } else {
                    Role::Normal
                };
                Cell::new(v.to_string(), role)
            })
            .collect();
        scene.row(Row::new("nums", cells));
        scene.var("lo", self.lo).var("hi", self.hi);
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
    fn finds_present_target() {
        let mut alg = BinarySearch::new(vec![-1, 0, 3, 5, 9, 12], 9);
        run(&mut alg);
        assert_eq!(alg.found(), Some(4));
    }

    #[test]
    fn reports_absent_target() {
        let mut alg = BinarySearch::new(vec![-1, 0, 3, 5, 9, 12], 2);
        run(&mut alg);
        assert_eq!(alg.found(), None);
    }

    #[test]
    fn rotated_min_basic() {
        let mut alg = RotatedMin::new(vec![4, 5, 6, 7, 0, 1, 2]);
        run(&mut alg);
        assert_eq!(alg.min_value(), Some(0));
    }

    #[test]
    fn rotated_min_without_rotation() {
        let mut alg = RotatedMin::new(vec![1, 2, 3]);
        run(&mut alg);
        assert_eq!(alg.min_value(), Some(1));
    }
}
