//! Visual state model shared by all lessons
//!
//! A [`Scene`] is the render-agnostic picture of an algorithm's state at one
//! step: rows of labelled cells (arrays, DP tables, heap contents), an
//! optional node/edge view for graph and tree lessons, and a key/value panel
//! for scalar state (pointers, accumulators, the current phase).
//!
//! Scenes are pure data. The algorithm modules build them, snapshots carry
//! them, and the TUI panes turn them into styled text. Nothing in here knows
//! about ratatui.

/// Visual role of a cell or node, mapped to a colour by the UI theme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Role {
    /// Plain, untouched element
    #[default]
    Normal,
    /// Element under an algorithm cursor/pointer this step
    Cursor,
    /// Element actively being read or written this step
    Active,
    /// Element already examined and left behind
    Visited,
    /// Element accepted into the answer
    Accepted,
    /// Element ruled out (outside the search range, removed, pruned)
    Rejected,
    /// De-emphasized element (padding, empty slot)
    Dim,
}

/// A single displayed element: one array slot, table cell, or heap entry
#[derive(Debug, Clone, PartialEq)]
pub struct Cell {
    pub text: String,
    pub role: Role,
}

impl Cell {
    pub fn new(text: impl Into<String>, role: Role) -> Self {
        Cell {
            text: text.into(),
            role,
        }
    }

    /// Plain cell with no highlight
    pub fn plain(text: impl Into<String>) -> Self {
        Cell::new(text, Role::Normal)
    }
}

/// A labelled row of cells
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub label: String,
    pub cells: Vec<Cell>,
}

impl Row {
    pub fn new(label: impl Into<String>, cells: Vec<Cell>) -> Self {
        Row {
            label: label.into(),
            cells,
        }
    }

    /// Row of plain numeric cells, highlighting nothing
    pub fn from_values<T: std::fmt::Display>(label: impl Into<String>, values: &[T]) -> Self {
        Row::new(
            label,
            values.iter().map(|v| Cell::plain(v.to_string())).collect(),
        )
    }
}

/// A node in a graph or tree view
#[derive(Debug, Clone, PartialEq)]
pub struct SceneNode {
    pub label: String,
    pub role: Role,
}

/// A directed edge between node indices, with its own highlight role
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneEdge {
    pub from: usize,
    pub to: usize,
    pub role: Role,
}

/// Node/edge view for graph, tree, and linked-list lessons.
///
/// Rendered as one line per node: the node label followed by its outgoing
/// edges. Layout is the UI's concern; the view only records structure and
/// highlight roles.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GraphView {
    pub nodes: Vec<SceneNode>,
    pub edges: Vec<SceneEdge>,
}

impl GraphView {
    pub fn node(&mut self, label: impl Into<String>, role: Role) -> usize {
        self.nodes.push(SceneNode {
            label: label.into(),
            role,
        });
        self.nodes.len() - 1
    }

    pub fn edge(&mut self, from: usize, to: usize, role: Role) {
        self.edges.push(SceneEdge { from, to, role });
    }

    /// Outgoing edges of a node, in insertion order
    pub fn edges_from(&self, from: usize) -> impl Iterator<Item = &SceneEdge> {
        self.edges.iter().filter(move |e| e.from == from)
    }
}

/// Full visual state for one step
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Scene {
    pub rows: Vec<Row>,
    pub graph: Option<GraphView>,
    pub vars: Vec<(String, String)>,
}

impl Scene {
    pub fn new() -> Self {
        Scene::default()
    }

    pub fn row(&mut self, row: Row) -> &mut Self {
        self.rows.push(row);
        self
    }

    pub fn var(&mut self, key: impl Into<String>, value: impl std::fmt::Display) -> &mut Self {
        self.vars.push((key.into(), value.to_string()));
        self
    }

    /// Estimate the memory footprint of this scene in bytes.
    ///
    /// Used by the snapshot manager's memory cap. Counts string payloads plus
    /// a fixed overhead per element; precision does not matter, only that the
    /// estimate grows with the scene.
    pub fn estimated_size(&self) -> usize {
        let row_size: usize = self
            .rows
            .iter()
            .map(|r| r.label.len() + r.cells.iter().map(|c| c.text.len() + 8).sum::<usize>())
            .sum();
        let graph_size = self.graph.as_ref().map_or(0, |g| {
            g.nodes.iter().map(|n| n.label.len() + 8).sum::<usize>() + g.edges.len() * 24
        });
        let var_size: usize = self.vars.iter().map(|(k, v)| k.len() + v.len() + 16).sum();
        row_size + graph_size + var_size
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_from_values_is_plain() {
        let row = Row::from_values("nums", &[1, 2, 3]);
        assert_eq!(row.cells.len(), 3);
        assert!(row.cells.iter().all(|c| c.role == Role::Normal));
        assert_eq!(row.cells[2].text, "3");
    }

    #[test]
    fn estimated_size_grows_with_content() {
        let mut small = Scene::new();
        small.row(Row::from_values("a", &[1]));
        let mut big = Scene::new();
        big.row(Row::from_values("a", &[1, 2, 3, 4, 5, 6, 7, 8]));
        big.var("left", 0);
        assert!(big.estimated_size() > small.estimated_size());
    }
}
