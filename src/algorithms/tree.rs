//! Binary-tree lessons on an arena: invert, validate BST, BST lowest common ancestor
//!
//! Nodes live in a `Vec` and reference children by index, so "mutation" is a
//! plain field write and cloning a tree is cloning the arena. The recursive
//! lessons carry an explicit work stack and advance one frame per step.

use crate::runner::SteppedAlgorithm;
use crate::scene::{GraphView, Role, Scene};
use crate::snapshot::Snapshot;
use std::collections::VecDeque;

/// One node of an arena-allocated binary tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TreeNode {
    pub value: i64,
    pub left: Option<usize>,
    pub right: Option<usize>,
}

/// Binary tree stored as an index arena
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeArena {
    pub nodes: Vec<TreeNode>,
    pub root: Option<usize>,
}

impl TreeArena {
    /// Build from a level-order listing with `None` for missing children
    pub fn from_level_order(items: &[Option<i64>]) -> Self {
        let Some(&Some(root_value)) = items.first() else {
            return TreeArena::default();
        };
        let mut arena = TreeArena {
            nodes: vec![TreeNode {
                value: root_value,
                left: None,
                right: None,
            }],
            root: Some(0),
        };
        let mut queue = VecDeque::from([0usize]);
        let mut i = 1;
        while let Some(parent) = queue.pop_front() {
            for is_left in [true, false] {
                if i >= items.len() {
                    return arena;
                }
                if let Some(value) = items[i] {
                    let idx = arena.nodes.len();
                    arena.nodes.push(TreeNode {
                        value,
                        left: None,
                        right: None,
                    });
                    if is_left {
                        arena.nodes[parent].left = Some(idx);
                    } else {
                        arena.nodes[parent].right = Some(idx);
                    }
                    queue.push_back(idx);
                }
                i += 1;
            }
        }
        arena
    }

    /// In-order values, for structural assertions
    pub fn in_order(&self) -> Vec<i64> {
        let mut out = Vec::new();
        let mut stack = Vec::new();
        let mut current = self.root;
        while current.is_some() || !stack.is_empty() {
            while let Some(n) = current {
                stack.push(n);
                current = self.nodes[n].left;
            }
            if let Some(n) = stack.pop() {
                out.push(self.nodes[n].value);
                current = self.nodes[n].right;
            }
        }
        out
    }

    fn view(&self, highlight: impl Fn(usize) -> Role) -> GraphView {
        let mut view = GraphView::default();
        for (i, node) in self.nodes.iter().enumerate() {
            view.node(node.value.to_string(), highlight(i));
        }
        for (i, node) in self.nodes.iter().enumerate() {
            if let Some(l) = node.left {
                view.edge(i, l, Role::Normal);
            }
            if let Some(r) = node.right {
                view.edge(i, r, Role::Normal);
            }
        }
        view
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Working,
    Finished,
}

/// Invert Binary Tree: swap every node's children, one node per step
pub struct InvertTree {
    arena: TreeArena,
    stack: Vec<usize>,
    swapped: usize,
    /// Node swapped by the latest step
    last: Option<usize>,
    phase: Phase,
    narration: String,
}

impl InvertTree {
    pub fn new(arena: TreeArena) -> Self {
        let stack: Vec<usize> = arena.root.into_iter().collect();
        let phase = if stack.is_empty() {
            Phase::Finished
        } else {
            Phase::Working
        };
        InvertTree {
            narration: if stack.is_empty() {
                "Empty tree; nothing to invert".to_string()
            } else {
                "Swap children at every node, top down".to_string()
            },
            arena,
            stack,
            swapped: 0,
            last: None,
            phase,
        }
    }

    pub fn arena(&self) -> &TreeArena {
        &self.arena
    }
}

impl SteppedAlgorithm for InvertTree {
    fn step(&mut self) {
        if self.phase == Phase::Finished {
            return;
        }
        if let Some(n) = self.stack.pop() {
            let node = &mut self.arena.nodes[n];
            std::mem::swap(&mut node.left, &mut node.right);
            self.swapped += 1;
            self.last = Some(n);
            self.narration = format!("Swap children of {}", node.value);
            let (left, right) = (node.left, node.right);
            if let Some(r) = right {
                self.stack.push(r);
            }
            if let Some(l) = left {
                self.stack.push(l);
            }
        }
        if self.stack.is_empty() {
            self.phase = Phase::Finished;
            self.narration = format!("Inverted the tree: {} node(s) swapped", self.swapped);
        }
    }

    fn is_terminal(&self) -> bool {
        self.phase == Phase::Finished
    }

    fn snapshot(&self) -> Snapshot {
        let mut scene = Scene::new();
        let last = self.last;
        let pending = self.stack.clone();
        scene.graph = Some(self.arena.view(|i| {
            if Some(i) == last {
                Role::Cursor
            } else if pending.contains(&i) {
                Role::Active
            } else {
                Role::Normal
            }
        }));
        scene.var("swapped", self.swapped);
        let phase = match self.phase {
            Phase::Working => "SWAP",
            Phase::Finished => "FINISHED",
        };
        Snapshot::new(scene, self.narration.clone(), phase)
    }
}

/// Validate BST by range check, one node per step
pub struct ValidateBst {
    arena: TreeArena,
    /// (node, exclusive lower bound, exclusive upper bound)
    stack: Vec<(usize, Option<i64>, Option<i64>)>,
    valid: Option<bool>,
    violation: Option<usize>,
    last: Option<usize>,
    phase: Phase,
    narration: String,
}

impl ValidateBst {
    pub fn new(arena: TreeArena) -> Self {
        let stack: Vec<(usize, Option<i64>, Option<i64>)> =
            arena.root.map(|r| (r, None, None)).into_iter().collect();
        let phase = if stack.is_empty() {
            Phase::Finished
        } else {
            Phase::Working
        };
        ValidateBst {
            narration: if stack.is_empty() {
                "Empty tree is a valid BST".to_string()
            } else {
                "Check every node against the range its ancestors allow".to_string()
            },
            valid: if stack.is_empty() { Some(true) } else { None },
            arena,
            stack,
            violation: None,
            last: None,
            phase,
        }
    }

    pub fn is_valid(&self) -> Option<bool> {
        self.valid
    }
}

impl SteppedAlgorithm for ValidateBst {
    fn step(&mut self) {
        if self.phase == Phase::Finished {
            return;
        }
        if let Some((n, lo, hi)) = self.stack.pop() {
            let node = &self.arena.nodes[n];
            self.last = Some(n);
            let below = lo.map_or(false, |lo| node.value <= lo);
            let above = hi.map_or(false, |hi| node.value >= hi);
            if below || above {
                self.valid = Some(false);
                self.violation = Some(n);
                self.phase = Phase::Finished;
                self.narration = format!(
                    "{} breaks its allowed range ({}, {}): not a BST",
                    node.value,
                    lo.map_or("-inf".to_string(), |v| v.to_string()),
                    hi.map_or("+inf".to_string(), |v| v.to_string()),
                );
                return;
            }
            self.narration = format!(
                "{} fits ({}, {}); push children with tightened ranges",
                node.value,
                lo.map_or("-inf".to_string(), |v| v.to_string()),
                hi.map_or("+inf".to_string(), |v| v.to_string()),
            );
            if let Some(r) = node.right {
                self.stack.push((r, Some(node.value), hi));
            }
            if let Some(l) = node.left {
                self.stack.push((l, lo, Some(node.value)));
            }
        }
        if self.stack.is_empty() && self.phase == Phase::Working {
            self.valid = Some(true);
            self.phase = Phase::Finished;
            self.narration = "Every node fits its range: valid BST".to_string();
        }
    }

    fn is_terminal(&self) -> bool {
        self.phase == Phase::Finished
    }

    fn snapshot(&self) -> Snapshot {
        let mut scene = Scene::new();
        let last = self.last;
        let violation = self.violation;
        let pending: Vec<usize> = self.stack.iter().map(|&(n, _, _)| n).collect();
        scene.graph = Some(self.arena.view(|i| {
            if Some(i) == violation {
                Role::Rejected
            } else if Some(i) == last {
                Role::Cursor
            } else if pending.contains(&i) {
                Role::Active
            } else {
                Role::Normal
            }
        }));
        if let Some(valid) = self.valid {
            scene.var("valid", valid);
        }
        let phase = match self.phase {
            Phase::Working => "CHECK",
            Phase::Finished => "FINISHED",
        };
        Snapshot::new(scene, self.narration.clone(), phase)
    }
}

/// Lowest common ancestor in a BST, descending from the root
pub struct BstLca {
    arena: TreeArena,
    p: i64,
    q: i64,
    current: Option<usize>,
    result: Option<usize>,
    phase: Phase,
    narration: String,
}

impl BstLca {
    pub fn new(arena: TreeArena, p: i64, q: i64) -> Self {
        let current = arena.root;
        let phase = if current.is_none() {
            Phase::Finished
        } else {
            Phase::Working
        };
        BstLca {
            narration: if current.is_none() {
                "Empty tree has no ancestor".to_string()
            } else {
                format!("Descend from the root until {} and {} split", p, q)
            },
            arena,
            p,
            q,
            current,
            result: None,
            phase,
        }
    }

    /// Value of the LCA node (meaningful once terminal, `None` for empty tree)
    pub fn lca_value(&self) -> Option<i64> {
        self.result.map(|n| self.arena.nodes[n].value)
    }
}

impl SteppedAlgorithm for BstLca {
    fn step(&mut self) {
        if self.phase == Phase::Finished {
            return;
        }
        let Some(n) = self.current else {
            self.phase = Phase::Finished;
            return;
        };
        let v = self.arena.nodes[n].value;
        let next = if self.p < v && self.q < v {
            self.narration = format!("Both {} and {} are below {}; go left", self.p, self.q, v);
            self.arena.nodes[n].left
        } else if self.p > v && self.q > v {
            self.narration = format!("Both {} and {} are above {}; go right", self.p, self.q, v);
            self.arena.nodes[n].right
        } else {
            self.result = Some(n);
            self.phase = Phase::Finished;
            self.narration = format!("{} and {} split at {}: lowest common ancestor", self.p, self.q, v);
            return;
        };
        match next {
            Some(child) => self.current = Some(child),
            None => {
                // Target values are absent below; the split point is here.
                self.result = Some(n);
                self.phase = Phase::Finished;
                self.narration = format!("No child to descend into; answer is {}", v);
            }
        }
    }

    fn is_terminal(&self) -> bool {
        self.phase == Phase::Finished
    }

    fn snapshot(&self) -> Snapshot {
        let mut scene = Scene::new();
        let current = self.current;
        let result = self.result;
        scene.graph = Some(self.arena.view(|i| {
            if Some(i) == result {
                Role::Accepted
            } else if Some(i) == current && self.phase == Phase::Working {
                Role::Cursor
            } else {
                Role::Normal
            }
        }));
        scene.var("p", self.p).var("q", self.q);
        if let Some(value) = self.lca_value() {
            scene.var("lca", value);
        }
        let phase = match self.phase {
            Phase::Working => "DESCEND",
            Phase::Finished => "FINISHED",
        };
        Snapshot::new(scene, self.narration.clone(), phase)
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
    fn level_order_builder_places_children() {
        let arena = TreeArena::from_level_order(&[
            Some(4),
            Some(2),
            Some(7),
            Some(1),
            Some(3),
            Some(6),
            Some(9),
        ]);
        assert_eq!(arena.in_order(), vec![1, 2, 3, 4, 6, 7, 9]);
    }

    #[test]
    fn invert_reverses_in_order() {
        let arena = TreeArena::from_level_order(&[
            Some(4),
            Some(2),
            Some(7),
            Some(1),
            Some(3),
            Some(6),
            Some(9),
        ]);
        let mut alg = InvertTree::new(arena);
        run(&mut alg);
        assert_eq!(alg.arena().in_order(), vec![9, 7, 6, 4, 3, 2, 1]);
    }

    #[test]
    fn validate_accepts_a_bst() {
        let arena = TreeArena::from_level_order(&[Some(2), Some(1), Some(3)]);
        let mut alg = ValidateBst::new(arena);
        run(&mut alg);
        assert_eq!(alg.is_valid(), Some(true));
    }

    #[test]
    fn validate_rejects_deep_violation() {
        // 5 / (1, 4 / (3, 6)): 3 and 6 sit under 4, but 6 > 5 violates the root range
        let arena = TreeArena::from_level_order(&[
            Some(5),
            Some(1),
            Some(4),
            None,
            None,
            Some(3),
            Some(6),
        ]);
        let mut alg = ValidateBst::new(arena);
        run(&mut alg);
        assert_eq!(alg.is_valid(), Some(false));
    }

    #[test]
    fn lca_splits_at_the_root_subtree() {
        let arena = TreeArena::from_level_order(&[
            Some(6),
            Some(2),
            Some(8),
            Some(0),
            Some(4),
            Some(7),
            Some(9),
            None,
            None,
            Some(3),
            Some(5),
        ]);
        let mut alg = BstLca::new(arena.clone(), 2, 8);
        run(&mut alg);
        assert_eq!(alg.lca_value(), Some(6));

        let mut alg = BstLca::new(arena, 2, 4);
        run(&mut alg);
        assert_eq!(alg.lca_value(), Some(2));
    }
}
