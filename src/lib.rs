//! # Introduction
//!
//! algotty animates classic interview algorithms one step at a time, capturing
//! a snapshot of the full algorithm state at each step.  The snapshot history
//! is then navigated forward and backward through a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Execution pipeline
//!
//! ```text
//! Input text → Lesson → SteppedAlgorithm → Runner → Snapshots → TUI
//! ```
//!
//! 1. [`input`] — forgiving text parsers for lesson inputs.
//! 2. [`catalog`] — the lesson registry: every algorithm the binary can show,
//!    with titles, complexities, and default inputs.
//! 3. [`algorithms`] — the lessons themselves, each an explicit state machine
//!    implementing [`runner::SteppedAlgorithm`].
//! 4. [`scene`] — the render-agnostic picture a lesson draws of itself.
//! 5. [`snapshot`] — snapshot history with a configurable memory limit.
//! 6. [`runner`] — drives a lesson lazily and records its snapshots.
//! 7. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Lesson families
//!
//! Two-pointer scans, sliding window, binary search, dynamic-programming
//! tables, backtracking, graph traversal, two-heap streaming median, tries,
//! tree recursion, cycle detection, and greedy interval sweeps.

pub mod algorithms;
pub mod catalog;
pub mod input;
pub mod runner;
pub mod scene;
pub mod snapshot;
pub mod ui;
