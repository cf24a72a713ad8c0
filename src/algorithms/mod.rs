//! The lesson catalogue: stepped classic-algorithm state machines
//!
//! Each module hosts one algorithm family. Every lesson is a small struct
//! implementing [`SteppedAlgorithm`](crate::runner::SteppedAlgorithm): an
//! explicit phase tag decides what the next `step()` does, and a narration
//! string describes the transition just taken.
//!
//! # Conventions
//!
//! - Construction from already-parsed input never fails; trivially empty
//!   input starts the lesson in its terminal phase.
//! - `step()` in the terminal phase is a guarded no-op.
//! - Linked structures (trees, lists, tries, graphs) live in arenas indexed
//!   by `usize`, never in pointer graphs.
//! - Result accessors (`best_area()`, `medians()`, `merged()`, ...) expose
//!   the final answer for tests, independent of any rendering.

pub mod backtracking;
pub mod binary_search;
pub mod dp_table;
pub mod graph;
pub mod heaps;
pub mod intervals;
pub mod linked_list;
pub mod sliding_window;
pub mod tree;
pub mod trie;
pub mod two_pointer;
