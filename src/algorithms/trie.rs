//! Trie lesson: insert / search / starts_with over an arena of nodes
//!
//! [`Trie`] is the plain data structure (nodes in a `Vec`, children as
//! `FxHashMap<char, usize>`); [`TrieLesson`] replays a script of operations
//! against it one character per step.

use crate::runner::SteppedAlgorithm;
use crate::scene::{GraphView, Role, Scene};
use crate::snapshot::Snapshot;
use rustc_hash::FxHashMap;

/// A trie node in the arena
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    pub children: FxHashMap<char, usize>,
    pub word_end: bool,
}

/// Prefix tree over an index arena; node 0 is the root
#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<TrieNode>,
}

impl Trie {
    pub fn new() -> Self {
        Trie {
            nodes: vec![TrieNode::default()],
        }
    }

    pub fn nodes(&self) -> &[TrieNode] {
        &self.nodes
    }

    /// Child of `node` along `c`, if present
    pub fn child(&self, node: usize, c: char) -> Option<usize> {
        self.nodes.get(node).and_then(|n| n.children.get(&c)).copied()
    }

    /// Child of `node` along `c`, creating it if missing. Returns the child
    /// index and whether it was freshly created.
    pub fn child_or_insert(&mut self, node: usize, c: char) -> (usize, bool) {
        if let Some(&existing) = self.nodes[node].children.get(&c) {
            return (existing, false);
        }
        let fresh = self.nodes.len();
        self.nodes.push(TrieNode::default());
        self.nodes[node].children.insert(c, fresh);
        (fresh, true)
    }

    pub fn insert(&mut self, word: &str) {
        let mut node = 0;
        for c in word.chars() {
            node = self.child_or_insert(node, c).0;
        }
        self.nodes[node].word_end = true;
    }

    fn walk(&self, prefix: &str) -> Option<usize> {
        let mut node = 0;
        for c in prefix.chars() {
            node = self.child(node, c)?;
        }
        Some(node)
    }

    pub fn search(&self, word: &str) -> bool {
        self.walk(word).is_some_and(|n| self.nodes[n].word_end)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }
}

impl Default for Trie {
    fn default() -> Self {
        Trie::new()
    }
}

/// One scripted trie operation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrieOp {
    Insert(String),
    Search(String),
    StartsWith(String),
}

impl TrieOp {
    /// Parse a comma/whitespace separated script: `insert:apple`,
    /// `search:app`, `prefix:app`. A bare word is an insert.
    pub fn parse_script(script: &str) -> Vec<TrieOp> {
        script
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|tok| !tok.is_empty())
            .map(|tok| match tok.split_once(':') {
                Some(("search", word)) => TrieOp::Search(word.to_string()),
                Some(("prefix", word)) | Some(("startswith", word)) => {
                    TrieOp::StartsWith(word.to_string())
                }
                Some(("insert", word)) => TrieOp::Insert(word.to_string()),
                Some((_, word)) => TrieOp::Insert(word.to_string()),
                None => TrieOp::Insert(tok.to_string()),
            })
            .collect()
    }

    fn word(&self) -> &str {
        match self {
            TrieOp::Insert(w) | TrieOp::Search(w) | TrieOp::StartsWith(w) => w,
        }
    }

    fn verb(&self) -> &'static str {
        match self {
            TrieOp::Insert(_) => "insert",
            TrieOp::Search(_) => "search",
            TrieOp::StartsWith(_) => "startsWith",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    NextOp,
    Walking,
    Finished,
}

/// Replays a script of trie operations one character at a time
pub struct TrieLesson {
    trie: Trie,
    ops: Vec<TrieOp>,
    op_idx: usize,
    chars: Vec<char>,
    char_idx: usize,
    node: usize,
    /// (operation description, outcome) per completed query; inserts record `true`
    results: Vec<(String, bool)>,
    phase: Phase,
    narration: String,
}

impl TrieLesson {
    pub fn new(ops: Vec<TrieOp>) -> Self {
        let phase = if ops.is_empty() {
            Phase::Finished
        } else {
            Phase::NextOp
        };
        TrieLesson {
            narration: if ops.is_empty() {
                "Empty script; the trie stays a lone root".to_string()
            } else {
                format!("Replay {} trie operation(s)", ops.len())
            },
            trie: Trie::new(),
            ops,
            op_idx: 0,
            chars: Vec::new(),
            char_idx: 0,
            node: 0,
            results: Vec::new(),
            phase,
        }
    }

    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Outcome of each completed operation, in script order
    pub fn results(&self) -> &[(String, bool)] {
        &self.results
    }

    fn finish_op(&mut self, outcome: bool) {
        let op = &self.ops[self.op_idx];
        self.results
            .push((format!("{}(\"{}\")", op.verb(), op.word()), outcome));
        self.op_idx += 1;
        self.phase = Phase::NextOp;
    }

    fn phase_label(&self) -> &'static str {
        match self.phase {
            Phase::NextOp => "NEXT-OP",
            Phase::Walking => "WALK",
            Phase::Finished => "FINISHED",
        }
    }
}

impl SteppedAlgorithm for TrieLesson {
    fn step(&mut self) {
        match self.phase {
            Phase::NextOp => {
                if self.op_idx >= self.ops.len() {
                    self.phase = Phase::Finished;
                    self.narration = format!(
                        "Script complete: {} node(s) in the trie",
                        self.trie.nodes().len()
                    );
                    return;
                }
                let op = &self.ops[self.op_idx];
                self.chars = op.word().chars().collect();
                self.char_idx = 0;
                self.node = 0;
                self.narration = format!("Begin {}(\"{}\") at the root", op.verb(), op.word());
                self.phase = Phase::Walking;
            }
            Phase::Walking => {
                let op = self.ops[self.op_idx].clone();
                if self.char_idx == self.chars.len() {
                    // Walk complete; settle the operation.
                    match op {
                        TrieOp::Insert(ref w) => {
                            self.trie.nodes[self.node].word_end = true;
                            self.narration =
                                format!("Mark node {} as the end of \"{}\"", self.node, w);
                            self.finish_op(true);
                        }
                        TrieOp::Search(ref w) => {
                            let found = self.trie.nodes[self.node].word_end;
                            self.narration = if found {
                                format!("Node {} ends a word: \"{}\" found", self.node, w)
                            } else {
                                format!(
                                    "Node {} is only a prefix: \"{}\" NOT found",
                                    self.node, w
                                )
                            };
                            self.finish_op(found);
                        }
                        TrieOp::StartsWith(ref w) => {
                            self.narration = format!("Prefix \"{}\" exists in the trie", w);
                            self.finish_op(true);
                        }
                    }
                    return;
                }
                let c = self.chars[self.char_idx];
                match op {
                    TrieOp::Insert(_) => {
                        let (child, created) = self.trie.child_or_insert(self.node, c);
                        self.narration = if created {
                            format!("No edge '{}' from node {}; create node {}", c, self.node, child)
                        } else {
                            format!("Follow existing edge '{}' to node {}", c, child)
                        };
                        self.node = child;
                        self.char_idx += 1;
                    }
                    TrieOp::Search(ref w) | TrieOp::StartsWith(ref w) => {
                        match self.trie.child(self.node, c) {
                            Some(child) => {
                                self.narration =
                                    format!("Follow edge '{}' to node {}", c, child);
                                self.node = child;
                                self.char_idx += 1;
                            }
                            None => {
                                self.narration = format!(
                                    "No edge '{}' from node {}; \"{}\" NOT present",
                                    c, self.node, w
                                );
                                self.finish_op(false);
                            }
                        }
                    }
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
        let mut view = GraphView::default();
        for (i, node) in self.trie.nodes().iter().enumerate() {
            let role = if i == self.node && self.phase == Phase::Walking {
                Role::Cursor
            } else if node.word_end {
                Role::Accepted
            } else {
                Role::Normal
            };
            let label = if node.word_end {
                format!("{}*", i)
            } else {
                i.to_string()
            };
            view.node(label, role);
        }
        for (i, node) in self.trie.nodes().iter().enumerate() {
            let mut children: Vec<(char, usize)> =
                node.children.iter().map(|(c, n)| (*c, *n)).collect();
            children.sort_unstable();
            for (_, child) in children {
                view.edge(i, child, Role::Normal);
            }
        }
        scene.graph = Some(view);

        if self.phase == Phase::Walking {
            let word: String = self.chars.iter().collect();
            scene.var(
                "operation",
                format!("{}(\"{}\")", self.ops[self.op_idx].verb(), word),
            );
            scene.var("char", self.char_idx);
        }
        for (desc, outcome) in &self.results {
            scene.var(desc.clone(), outcome);
        }
        Snapshot::new(scene, self.narration.clone(), self.phase_label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trie_semantics_for_apple_and_app() {
        let mut trie = Trie::new();
        trie.insert("apple");
        assert!(trie.search("apple"));
        assert!(!trie.search("app"));
        assert!(trie.starts_with("app"));
        trie.insert("app");
        assert!(trie.search("app"));
        assert!(trie.search("apple"));
    }

    #[test]
    fn lesson_records_outcomes_in_script_order() {
        let ops = TrieOp::parse_script("insert:apple, search:apple, search:app, prefix:app");
        let mut lesson = TrieLesson::new(ops);
        while !lesson.is_terminal() {
            lesson.step();
        }
        let outcomes: Vec<bool> = lesson.results().iter().map(|(_, b)| *b).collect();
        assert_eq!(outcomes, vec![true, true, false, true]);
    }

    #[test]
    fn parse_script_defaults_to_insert() {
        assert_eq!(
            TrieOp::parse_script("apple search:app"),
            vec![
                TrieOp::Insert("apple".to_string()),
                TrieOp::Search("app".to_string())
            ]
        );
    }
}
