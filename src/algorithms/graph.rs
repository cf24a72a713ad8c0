//! Graph lessons: course schedule, island counting, clone graph
//!
//! All three store structure as adjacency lists indexed by `usize`; there are
//! no node objects. DFS and BFS frontiers are explicit stacks/queues in the
//! lesson state, advanced one pop or one edge per step.

use crate::runner::SteppedAlgorithm;
use crate::scene::{Cell, GraphView, Role, Row, Scene};
use crate::snapshot::Snapshot;
use std::collections::VecDeque;

/// 3-colour DFS mark
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// Never visited
    White,
    /// On the current DFS path
    Gray,
    /// Fully explored
    Black,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SchedulePhase {
    Searching,
    Finished,
}

/// Course Schedule: can all courses be taken, or do prerequisites cycle?
///
/// Edges run prerequisite -> dependent. A gray-to-gray edge during DFS is a
/// back edge, which proves a cycle.
pub struct CourseSchedule {
    adj: Vec<Vec<usize>>,
    mark: Vec<Mark>,
    /// DFS stack of (node, next outgoing edge index)
    stack: Vec<(usize, usize)>,
    /// Scan cursor for the next unvisited root
    root: usize,
    /// Back edge that closed a cycle, if one was found
    cycle_edge: Option<(usize, usize)>,
    phase: SchedulePhase,
    narration: String,
}

impl CourseSchedule {
    /// `prerequisites` holds pairs `(course, needs)`: to take `course` you
    /// must first take `needs`.
    pub fn new(num_courses: usize, prerequisites: &[(usize, usize)]) -> Self {
        let mut adj = vec![Vec::new(); num_courses];
        for &(course, needs) in prerequisites {
            if course < num_courses && needs < num_courses {
                adj[needs].push(course);
            }
        }
        let phase = if num_courses == 0 {
            SchedulePhase::Finished
        } else {
            SchedulePhase::Searching
        };
        CourseSchedule {
            narration: if num_courses == 0 {
                "No courses; trivially possible".to_string()
            } else {
                format!("DFS over {} courses looking for a cycle", num_courses)
            },
            adj,
            mark: vec![Mark::White; num_courses],
            stack: Vec::new(),
            root: 0,
            cycle_edge: None,
            phase,
        }
    }

    /// `Some(true)` if every course can be taken, `None` while searching
    pub fn possible(&self) -> Option<bool> {
        match self.phase {
            SchedulePhase::Finished => Some(self.cycle_edge.is_none()),
            SchedulePhase::Searching => None,
        }
    }

    fn phase_label(&self) -> &'static str {
        match self.phase {
            SchedulePhase::Searching => "DFS",
            SchedulePhase::Finished => "FINISHED",
        }
    }
}

impl SteppedAlgorithm for CourseSchedule {
    fn step(&mut self) {
        if self.phase == SchedulePhase::Finished {
            return;
        }

        if let Some(&(u, edge)) = self.stack.last() {
            if edge < self.adj[u].len() {
                let v = self.adj[u][edge];
                if let Some(top) = self.stack.last_mut() {
                    top.1 += 1;
                }
                match self.mark[v] {
                    Mark::Gray => {
                        self.cycle_edge = Some((u, v));
                        self.phase = SchedulePhase::Finished;
                        self.narration = format!(
                            "Edge {} -> {} reaches a course on the current path: cycle, impossible",
                            u, v
                        );
                    }
                    Mark::Black => {
                        self.narration =
                            format!("Edge {} -> {}: already fully explored, skip", u, v);
                    }
                    Mark::White => {
                        self.mark[v] = Mark::Gray;
                        self.stack.push((v, 0));
                        self.narration = format!("Edge {} -> {}: descend into {}", u, v, v);
                    }
                }
            } else {
                self.mark[u] = Mark::Black;
                self.stack.pop();
                self.narration = format!("Course {} fully explored; retreat", u);
            }
            return;
        }

        // Stack empty: pick the next unvisited root, or finish.
        while self.root < self.mark.len() && self.mark[self.root] != Mark::White {
            self.root += 1;
        }
        if self.root < self.mark.len() {
            let r = self.root;
            self.mark[r] = Mark::Gray;
            self.stack.push((r, 0));
            self.narration = format!("Start a DFS at course {}", r);
        } else {
            self.phase = SchedulePhase::Finished;
            self.narration = "Every course explored without a back edge: possible".to_string();
        }
    }

    fn is_terminal(&self) -> bool {
        self.phase == SchedulePhase::Finished
    }

    fn snapshot(&self) -> Snapshot {
        let mut scene = Scene::new();
        let mut view = GraphView::default();
        let on_stack: Vec<usize> = self.stack.iter().map(|&(u, _)| u).collect();
        for (i, mark) in self.mark.iter().enumerate() {
            let role = match mark {
                Mark::Gray if on_stack.last() == Some(&i) => Role::Cursor,
                Mark::Gray => Role::Active,
                Mark::Black => Role::Visited,
                Mark::White => Role::Normal,
            };
            view.node(i.to_string(), role);
        }
        for (u, targets) in self.adj.iter().enumerate() {
            for &v in targets {
                let role = if self.cycle_edge == Some((u, v)) {
                    Role::Rejected
                } else {
                    Role::Normal
                };
                view.edge(u, v, role);
            }
        }
        scene.graph = Some(view);
        scene.var(
            "dfs path",
            on_stack
                .iter()
                .map(usize::to_string)
                .collect::<Vec<_>>()
                .join(" -> "),
        );
        if let Some(possible) = self.possible() {
            scene.var("possible", possible);
        }
        Snapshot::new(scene, self.narration.clone(), self.phase_label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum IslandPhase {
    Scanning,
    Flooding,
    Finished,
}

/// Number of Islands: flood fill over a 0/1 grid
pub struct IslandCount {
    grid: Vec<Vec<u8>>,
    visited: Vec<Vec<bool>>,
    /// Flood-fill stack of land cells awaiting expansion
    frontier: Vec<(usize, usize)>,
    /// Linear scan cursor, `row * cols + col`
    scan: usize,
    islands: usize,
    phase: IslandPhase,
    narration: String,
}

impl IslandCount {
    pub fn new(grid: Vec<Vec<u8>>) -> Self {
        let empty = grid.is_empty() || grid[0].is_empty();
        let visited = grid.iter().map(|row| vec![false; row.len()]).collect();
        IslandCount {
            narration: if empty {
                "Empty grid has no islands".to_string()
            } else {
                "Scan for land, flooding each island as it is found".to_string()
            },
            grid,
            visited,
            frontier: Vec::new(),
            scan: 0,
            islands: 0,
            phase: if empty {
                IslandPhase::Finished
            } else {
                IslandPhase::Scanning
            },
        }
    }

    /// Islands counted so far (final answer once terminal)
    pub fn islands(&self) -> usize {
        self.islands
    }

    fn cols(&self) -> usize {
        self.grid.first().map_or(0, Vec::len)
    }

    fn phase_label(&self) -> &'static str {
        match self.phase {
            IslandPhase::Scanning => "SCAN",
            IslandPhase::Flooding => "FLOOD",
            IslandPhase::Finished => "FINISHED",
        }
    }
}

impl SteppedAlgorithm for IslandCount {
    fn step(&mut self) {
        match self.phase {
            IslandPhase::Flooding => {
                if let Some((r, c)) = self.frontier.pop() {
                    let rows = self.grid.len();
                    let cols = self.cols();
                    let mut spread = 0;
                    let neighbors = [
                        (r.wrapping_sub(1), c),
                        (r + 1, c),
                        (r, c.wrapping_sub(1)),
                        (r, c + 1),
                    ];
                    for (nr, nc) in neighbors {
                        if nr < rows && nc < cols && self.grid[nr][nc] == 1 && !self.visited[nr][nc]
                        {
                            self.visited[nr][nc] = true;
                            self.frontier.push((nr, nc));
                            spread += 1;
                        }
                    }
                    self.narration = format!(
                        "Flood ({}, {}): {} new land cell(s) joined island #{}",
                        r, c, spread, self.islands
                    );
                }
                if self.frontier.is_empty() {
                    self.phase = IslandPhase::Scanning;
                }
            }
            IslandPhase::Scanning => {
                let cols = self.cols();
                let total = self.grid.len() * cols;
                while self.scan < total {
                    let (r, c) = (self.scan / cols, self.scan % cols);
                    if self.grid[r][c] == 1 && !self.visited[r][c] {
                        break;
                    }
                    self.scan += 1;
                }
                if self.scan < total {
                    let (r, c) = (self.scan / cols, self.scan % cols);
                    self.islands += 1;
                    self.visited[r][c] = true;
                    self.frontier.push((r, c));
                    self.phase = IslandPhase::Flooding;
                    self.narration =
                        format!("New island #{} discovered at ({}, {})", self.islands, r, c);
                } else {
                    self.phase = IslandPhase::Finished;
                    self.narration = format!("Grid fully scanned: {} island(s)", self.islands);
                }
            }
            IslandPhase::Finished => {}
        }
    }

    fn is_terminal(&self) -> bool {
        self.phase == IslandPhase::Finished
    }

    fn snapshot(&self) -> Snapshot {
        let mut scene = Scene::new();
        for (r, row) in self.grid.iter().enumerate() {
            let cells = row
                .iter()
                .enumerate()
                .map(|(c, v)| {
                    let role = if self.frontier.contains(&(r, c)) {
                        Role::Cursor
                    } else if self.visited[r][c] {
                        Role::Accepted
                    } else if *v == 1 {
                        Role::Active
                    } else {
                        Role::Dim
                    };
                    Cell::new(if *v == 1 { "#" } else { "~" }, role)
                })
                .collect();
            scene.row(Row::new(format!("row {}", r), cells));
        }
        scene.var("islands", self.islands);
        Snapshot::new(scene, self.narration.clone(), self.phase_label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ClonePhase {
    Cloning,
    Finished,
}

/// Clone Graph: BFS copy of an undirected graph into a fresh arena.
///
/// The "pointerless" rendition of the classic: originals and clones are both
/// adjacency lists, and `clone_of` is the visited map.
pub struct CloneGraph {
    adj: Vec<Vec<usize>>,
    clone_of: Vec<Option<usize>>,
    clones: Vec<Vec<usize>>,
    queue: VecDeque<usize>,
    /// Node processed by the latest step
    last: Option<usize>,
    phase: ClonePhase,
    narration: String,
}

impl CloneGraph {
    /// Build from undirected edges; node count is the highest endpoint + 1
    pub fn from_edges(edges: &[(usize, usize)]) -> Self {
        let count = edges
            .iter()
            .map(|&(a, b)| a.max(b) + 1)
            .max()
            .unwrap_or(0);
        let mut adj = vec![Vec::new(); count];
        for &(a, b) in edges {
            if a != b {
                adj[a].push(b);
                adj[b].push(a);
            }
        }
        if count == 0 {
            return CloneGraph {
                adj,
                clone_of: Vec::new(),
                clones: Vec::new(),
                queue: VecDeque::new(),
                last: None,
                phase: ClonePhase::Finished,
                narration: "Empty graph clones to an empty graph".to_string(),
            };
        }
        let mut clone_of = vec![None; count];
        clone_of[0] = Some(0);
        CloneGraph {
            adj,
            clone_of,
            clones: vec![Vec::new()],
            queue: VecDeque::from([0]),
            last: None,
            phase: ClonePhase::Cloning,
            narration: "Clone the start node, then BFS outward".to_string(),
        }
    }

    /// Adjacency lists of the clone built so far
    pub fn clones(&self) -> &[Vec<usize>] {
        &self.clones
    }

    fn phase_label(&self) -> &'static str {
        match self.phase {
            ClonePhase::Cloning => "BFS",
            ClonePhase::Finished => "FINISHED",
        }
    }
}

impl SteppedAlgorithm for CloneGraph {
    fn step(&mut self) {
        if self.phase == ClonePhase::Finished {
            return;
        }
        let Some(u) = self.queue.pop_front() else {
            self.phase = ClonePhase::Finished;
            self.narration = format!(
                "Queue drained; cloned {} node(s)",
                self.clones.len()
            );
            return;
        };
        self.last = Some(u);
        // cu exists: a node only enters the queue after its clone is allocated
        let cu = self.clone_of[u].unwrap_or(0);
        let mut fresh = 0;
        for i in 0..self.adj[u].len() {
            let v = self.adj[u][i];
            let cv = match self.clone_of[v] {
                Some(cv) => cv,
                None => {
                    let cv = self.clones.len();
                    self.clones.push(Vec::new());
                    self.clone_of[v] = Some(cv);
                    self.queue.push_back(v);
                    fresh += 1;
                    cv
                }
            };
            self.clones[cu].push(cv);
        }
        self.narration = format!(
            "Visit node {}: allocated {} new clone(s), wired {} edge(s)",
            u,
            fresh,
            self.adj[u].len()
        );
        if self.queue.is_empty() {
            self.phase = ClonePhase::Finished;
            self.narration = format!(
                "Queue drained; cloned {} node(s) reachable from node 0",
                self.clones.len()
            );
        }
    }

    fn is_terminal(&self) -> bool {
        self.phase == ClonePhase::Finished
    }

    fn snapshot(&self) -> Snapshot {
        let mut scene = Scene::new();
        let mut view = GraphView::default();
        for (i, clone) in self.clone_of.iter().enumerate() {
            let role = if Some(i) == self.last {
                Role::Cursor
            } else if self.queue.contains(&i) {
                Role::Active
            } else if clone.is_some() {
                Role::Accepted
            } else {
                Role::Normal
            };
            let label = match clone {
                Some(c) => format!("{} => clone {}", i, c),
                None => i.to_string(),
            };
            view.node(label, role);
        }
        for (u, targets) in self.adj.iter().enumerate() {
            for &v in targets {
                if u < v {
                    view.edge(u, v, Role::Normal);
                }
            }
        }
        scene.graph = Some(view);
        scene
            .var("queue", format!("{:?}", self.queue))
            .var("clones", self.clones.len());
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
    fn schedule_with_cycle_is_impossible() {
        let mut alg = CourseSchedule::new(5, &[(1, 0), (2, 1), (0, 2), (4, 3)]);
        run(&mut alg);
        assert_eq!(alg.possible(), Some(false));
    }

    #[test]
    fn schedule_without_cycle_is_possible() {
        let mut alg = CourseSchedule::new(5, &[(1, 0), (2, 1), (4, 3)]);
        run(&mut alg);
        assert_eq!(alg.possible(), Some(true));
    }

    #[test]
    fn island_count_classic_grid() {
        let grid = vec![
            vec![1, 1, 0, 0, 0],
            vec![1, 1, 0, 0, 0],
            vec![0, 0, 1, 0, 0],
            vec![0, 0, 0, 1, 1],
        ];
        let mut alg = IslandCount::new(grid);
        run(&mut alg);
        assert_eq!(alg.islands(), 3);
    }

    #[test]
    fn clone_graph_preserves_degree_sequence() {
        let mut alg = CloneGraph::from_edges(&[(0, 1), (0, 2), (1, 2), (2, 3)]);
        run(&mut alg);
        let clones = alg.clones();
        assert_eq!(clones.len(), 4);
        let mut original_degrees = vec![2, 2, 3, 1];
        let mut clone_degrees: Vec<usize> = clones.iter().map(Vec::len).collect();
        original_degrees.sort_unstable();
        clone_degrees.sort_unstable();
        assert_eq!(clone_degrees, original_degrees);
    }
}
