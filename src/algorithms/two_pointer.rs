//! Two-pointer lessons: container with most water, trapping rain water
//!
//! Both converge a left and a right pointer over an immutable height array.
//! Container-with-most-water alternates a measure step and an advance step;
//! trapping-rain-water does one index of work per step, tracking the best
//! wall seen from each side.

use crate::runner::SteppedAlgorithm;
use crate::scene::{Cell, Role, Row, Scene};
use crate::snapshot::Snapshot;

/// What the next step of [`ContainerWater`] does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ContainerPhase {
    Measuring,
    Advancing,
    Finished,
}

/// Container With Most Water: widest area between two lines
pub struct ContainerWater {
    heights: Vec<i64>,
    left: usize,
    right: usize,
    best: i64,
    best_pair: Option<(usize, usize)>,
    phase: ContainerPhase,
    narration: String,
}

impl ContainerWater {
    pub fn new(heights: Vec<i64>) -> Self {
        if heights.len() < 2 {
            return ContainerWater {
                heights,
                left: 0,
                right: 0,
                best: 0,
                best_pair: None,
                phase: ContainerPhase::Finished,
                narration: "Need at least two lines to hold water; nothing to do".to_string(),
            };
        }
        let right = heights.len() - 1;
        ContainerWater {
            heights,
            left: 0,
            right,
            best: 0,
            best_pair: None,
            phase: ContainerPhase::Measuring,
            narration: format!("Start with the widest container: left=0, right={}", right),
        }
    }

    /// Largest area found so far (final answer once terminal)
    pub fn best_area(&self) -> i64 {
        self.best
    }

    fn phase_label(&self) -> &'static str {
        match self.phase {
            ContainerPhase::Measuring => "MEASURE",
            ContainerPhase::Advancing => "ADVANCE",
            ContainerPhase::Finished => "FINISHED",
        }
    }
}

impl SteppedAlgorithm for ContainerWater {
    fn step(&mut self) {
        match self.phase {
            ContainerPhase::Measuring => {
                let width = (self.right - self.left) as i64;
                let limit = self.heights[self.left].min(self.heights[self.right]);
                let area = width * limit;
                if area > self.best {
                    self.best = area;
                    self.best_pair = Some((self.left, self.right));
                    self.narration = format!(
                        "Area = min({}, {}) x {} = {} -> new best",
                        self.heights[self.left], self.heights[self.right], width, area
                    );
                } else {
                    self.narration = format!(
                        "Area = min({}, {}) x {} = {}, best stays {}",
                        self.heights[self.left], self.heights[self.right], width, area, self.best
                    );
                }
                self.phase = ContainerPhase::Advancing;
            }
            ContainerPhase::Advancing => {
                // The shorter line can never do better with a narrower container.
                if self.heights[self.left] <= self.heights[self.right] {
                    self.left += 1;
                    self.narration = format!(
                        "Left line is shorter; move left pointer to {}",
                        self.left
                    );
                } else {
                    self.right -= 1;
                    self.narration = format!(
                        "Right line is shorter; move right pointer to {}",
                        self.right
                    );
                }
                if self.left == self.right {
                    self.phase = ContainerPhase::Finished;
                    self.narration = format!("Pointers met; largest area is {}", self.best);
                } else {
                    self.phase = ContainerPhase::Measuring;
                }
            }
            ContainerPhase::Finished => {}
        }
    }

    fn is_terminal(&self) -> bool {
        self.phase == ContainerPhase::Finished
    }

    fn snapshot(&self) -> Snapshot {
        let mut scene = Scene::new();
        let cells = self
            .heights
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let role = if self.phase != ContainerPhase::Finished
                    && (i == self.left || i == self.right)
                {
                    Role::Cursor
                } else if self
                    .best_pair
                    .is_some_and(|(l, r)| i == l || i == r)
                {
                    Role::Accepted
                } else if self.phase != ContainerPhase::Finished
                    && (i < self.left || i > self.right)
                {
                    Role::Visited
                } else {
                    Role::Normal
                };
                Cell::new(h.to_string(), role)
            })
            .collect();
        scene.row(Row::new("height", cells));
        scene
            .var("left", self.left)
            .var("right", self.right)
            .var("best area", self.best);
        Snapshot::new(scene, self.narration.clone(), self.phase_label())
    }
}

/// What the next step of [`TrappingRain`] does
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TrappingPhase {
    Scanning,
    Finished,
}

/// Trapping Rain Water: water held above each bar between taller walls
pub struct TrappingRain {
    heights: Vec<i64>,
    left: usize,
    right: usize,
    left_max: i64,
    right_max: i64,
    trapped: i64,
    /// Index processed by the latest step, for highlighting
    last_index: Option<usize>,
    phase: TrappingPhase,
    narration: String,
}

impl TrappingRain {
    pub fn new(heights: Vec<i64>) -> Self {
        if heights.is_empty() {
            return TrappingRain {
                heights,
                left: 0,
                right: 0,
                left_max: 0,
                right_max: 0,
                trapped: 0,
                last_index: None,
                phase: TrappingPhase::Finished,
                narration: "Empty elevation map traps no water".to_string(),
            };
        }
        let right = heights.len() - 1;
        TrappingRain {
            heights,
            left: 0,
            right,
            left_max: 0,
            right_max: 0,
            trapped: 0,
            last_index: None,
            phase: TrappingPhase::Scanning,
            narration: "Scan inward from both ends, tracking the tallest wall on each side"
                .to_string(),
        }
    }

    /// Total water trapped so far (final answer once terminal)
    pub fn trapped(&self) -> i64 {
        self.trapped
    }

    fn phase_label(&self) -> &'static str {
        match self.phase {
            TrappingPhase::Scanning => "SCAN",
            TrappingPhase::Finished => "FINISHED",
        }
    }
}

impl SteppedAlgorithm for TrappingRain {
    fn step(&mut self) {
        if self.phase == TrappingPhase::Finished {
            return;
        }

        // Process the side bounded by the shorter outer wall.
        if self.heights[self.left] <= self.heights[self.right] {
            let h = self.heights[self.left];
            self.last_index = Some(self.left);
            if h >= self.left_max {
                self.left_max = h;
                self.narration = format!("Bar {} (height {}) is a new left wall", self.left, h);
            } else {
                let gained = self.left_max - h;
                self.trapped += gained;
                self.narration = format!(
                    "Bar {} sits below the left wall {}; trap {} (total {})",
                    self.left, self.left_max, gained, self.trapped
                );
            }
            self.left += 1;
        } else {
            let h = self.heights[self.right];
            self.last_index = Some(self.right);
            if h >= self.right_max {
                self.right_max = h;
                self.narration = format!("Bar {} (height {}) is a new right wall", self.right, h);
            } else {
                let gained = self.right_max - h;
                self.trapped += gained;
                self.narration = format!(
                    "Bar {} sits below the right wall {}; trap {} (total {})",
                    self.right, self.right_max, gained, self.trapped
                );
            }
            if self.right == 0 {
                self.phase = TrappingPhase::Finished;
                self.narration = format!("Scan complete; total water trapped is {}", self.trapped);
                return;
            }
            self.right -= 1;
        }

        if self.left > self.right {
            self.phase = TrappingPhase::Finished;
            self.narration = format!("Pointers crossed; total water trapped is {}", self.trapped);
        }
    }

    fn is_terminal(&self) -> bool {
        self.phase == TrappingPhase::Finished
    }

    fn snapshot(&self) -> Snapshot {
        let mut scene = Scene::new();
        let cells = self
            .heights
            .iter()
            .enumerate()
            .map(|(i, h)| {
                let role = if Some(i) == self.last_index {
                    Role::Active
                } else if self.phase == TrappingPhase::Scanning
                    && (i == self.left || i == self.right)
                {
                    Role::Cursor
                } else if self.phase == TrappingPhase::Scanning
                    && (i < self.left || i > self.right)
                {
                    Role::Visited
                } else {
                    Role::Normal
                };
                Cell::new(h.to_string(), role)
            })
            .collect();
        scene.row(Row::new("height", cells));
        scene
            .var("left max", self.left_max)
            .var("right max", self.right_max)
            .var("trapped", self.trapped);
        Snapshot::new(scene, self.narration.clone(), self.phase_label())
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
    fn container_finds_best_area() {
        let mut alg = ContainerWater::new(vec![1, 8, 6, 2, 5, 4, 8, 3, 7]);
        run(&mut alg);
        assert_eq!(alg.best_area(), 49);
    }

    #[test]
    fn container_with_one_line_is_immediately_terminal() {
        let alg = ContainerWater::new(vec![5]);
        assert!(alg.is_terminal());
        assert_eq!(alg.best_area(), 0);
    }

    #[test]
    fn trapping_rain_classic_case() {
        let mut alg = TrappingRain::new(vec![0, 1, 0, 2, 1, 0, 1, 3, 2, 1, 2, 1]);
        run(&mut alg);
        assert_eq!(alg.trapped(), 6);
    }

    #[test]
    fn trapping_rain_monotone_traps_nothing() {
        let mut alg = TrappingRain::new(vec![1, 2, 3, 4]);
        run(&mut alg);
        assert_eq!(alg.trapped(), 0);
    }
}
