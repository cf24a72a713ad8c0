//! Fast/slow pointer lesson: Floyd cycle detection on an arena list
//!
//! The list is synthetic: node `i` links to `i + 1`, and the tail optionally
//! links back to an earlier index. One step advances the slow pointer by one
//! node and the fast pointer by two; the pointers meeting proves a cycle.

use crate::runner::SteppedAlgorithm;
use crate::scene::{GraphView, Role, Scene};
use crate::snapshot::Snapshot;

/// Singly linked list stored as parallel arrays
#[derive(Debug, Clone, Default)]
pub struct ListArena {
    pub values: Vec<i64>,
    pub next: Vec<Option<usize>>,
}

impl ListArena {
    /// Chain the values in order; if `cycle_to` names a valid index, the tail
    /// links back to it.
    pub fn with_cycle(values: Vec<i64>, cycle_to: Option<usize>) -> Self {
        let n = values.len();
        let mut next: Vec<Option<usize>> = (0..n).map(|i| (i + 1 < n).then_some(i + 1)).collect();
        if let (Some(tail), Some(target)) = (next.last_mut(), cycle_to) {
            if target < n {
                *tail = Some(target);
            }
        }
        ListArena { values, next }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Racing,
    Finished,
}

/// Floyd's tortoise-and-hare cycle detection
pub struct FloydCycle {
    list: ListArena,
    slow: Option<usize>,
    fast: Option<usize>,
    /// Where the pointers met, if they did
    met: Option<usize>,
    /// Whether the race has settled the question yet
    verdict: Option<bool>,
    steps: usize,
    phase: Phase,
    narration: String,
}

impl FloydCycle {
    pub fn new(list: ListArena) -> Self {
        let empty = list.values.is_empty();
        let head = if empty { None } else { Some(0) };
        FloydCycle {
            narration: if empty {
                "Empty list cannot contain a cycle".to_string()
            } else {
                "Race a slow (1 hop) and a fast (2 hops) pointer from the head".to_string()
            },
            list,
            slow: head,
            fast: head,
            met: None,
            verdict: if empty { Some(false) } else { None },
            steps: 0,
            phase: if empty { Phase::Finished } else { Phase::Racing },
        }
    }

    /// `Some(true)` once a cycle is proven, `Some(false)` once ruled out
    pub fn has_cycle(&self) -> Option<bool> {
        self.verdict
    }

    /// Node where slow and fast met, if a cycle was found
    pub fn meeting_point(&self) -> Option<usize> {
        self.met
    }

    /// Race steps taken so far
    pub fn steps(&self) -> usize {
        self.steps
    }

    fn hop(&self, from: Option<usize>) -> Option<usize> {
        from.and_then(|i| self.list.next.get(i).copied().flatten())
    }

    fn phase_label(&self) -> &'static str {
        match self.phase {
            Phase::Racing => "RACE",
            Phase::Finished => "FINISHED",
        }
    }
}

impl SteppedAlgorithm for FloydCycle {
    fn step(&mut self) {
        if self.phase == Phase::Finished {
            return;
        }
        self.steps += 1;
        self.slow = self.hop(self.slow);
        self.fast = self.hop(self.hop(self.fast));
        match (self.slow, self.fast) {
            (Some(s), Some(f)) if s == f => {
                self.met = Some(s);
                self.verdict = Some(true);
                self.phase = Phase::Finished;
                self.narration = format!(
                    "Pointers met at index {} after {} step(s): the list has a cycle",
                    s, self.steps
                );
            }
            (_, None) => {
                self.verdict = Some(false);
                self.phase = Phase::Finished;
                self.narration = format!(
                    "Fast pointer ran off the end after {} step(s): no cycle",
                    self.steps
                );
            }
            (Some(s), Some(f)) => {
                self.narration = format!(
                    "Slow at index {} (value {}), fast at index {} (value {})",
                    s, self.list.values[s], f, self.list.values[f]
                );
            }
            (None, Some(_)) => {
                // Slow exhausts only if fast already did; treated as no cycle.
                self.verdict = Some(false);
                self.phase = Phase::Finished;
                self.narration = "List ended: no cycle".to_string();
            }
        }
    }

    fn is_terminal(&self) -> bool {
        self.phase == Phase::Finished
    }

    fn snapshot(&self) -> Snapshot {
        let mut scene = Scene::new();
        let mut view = GraphView::default();
        for (i, v) in self.list.values.iter().enumerate() {
            let role = if self.slow == Some(i) && self.fast == Some(i) {
                Role::Cursor
            } else if self.slow == Some(i) {
                Role::Active
            } else if self.fast == Some(i) {
                Role::Accepted
            } else {
                Role::Normal
            };
            let mut label = v.to_string();
            if self.slow == Some(i) {
                label.push_str(" <-slow");
            }
            if self.fast == Some(i) {
                label.push_str(" <-fast");
            }
            view.node(label, role);
        }
        for (i, next) in self.list.next.iter().enumerate() {
            if let Some(n) = next {
                let role = if *n <= i { Role::Rejected } else { Role::Normal };
                view.edge(i, *n, role);
            }
        }
        scene.graph = Some(view);
        scene.var("race steps", self.steps);
        if let Some(verdict) = self.verdict {
            scene.var("cycle", verdict);
        }
        Snapshot::new(scene, self.narration.clone(), self.phase_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(alg: &mut FloydCycle) {
        while !alg.is_terminal() {
            alg.step();
        }
    }

    #[test]
    fn detects_cycle_within_bounded_steps() {
        let list = ListArena::with_cycle(vec![3, 2, 0, -4], Some(1));
        let len = list.values.len();
        let mut alg = FloydCycle::new(list);
        run(&mut alg);
        assert_eq!(alg.has_cycle(), Some(true));
        assert!(alg.meeting_point().is_some());
        assert!(alg.steps() <= 2 * len, "Floyd must meet within 2n steps");
    }

    #[test]
    fn acyclic_list_ends_without_meeting() {
        let list = ListArena::with_cycle(vec![1, 2, 3, 4, 5], None);
        let mut alg = FloydCycle::new(list);
        run(&mut alg);
        assert_eq!(alg.has_cycle(), Some(false));
        assert_eq!(alg.meeting_point(), None);
    }

    #[test]
    fn single_node_self_loop() {
        let list = ListArena::with_cycle(vec![7], Some(0));
        let mut alg = FloydCycle::new(list);
        run(&mut alg);
        assert_eq!(alg.has_cycle(), Some(true));
    }
}
