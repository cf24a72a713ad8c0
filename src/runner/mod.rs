//! Generic stepped-runner engine
//!
//! Every lesson is a small state machine implementing [`SteppedAlgorithm`]:
//! one call to `step` performs exactly one unit of algorithmic work (one
//! comparison, one pointer move, one table cell fill, one queue pop) and
//! refreshes the narration. The [`Runner`] drives a boxed lesson lazily,
//! recording a [`Snapshot`] after every real step so history can be walked
//! backward and forward the same way the source pane of a debugger is.
//!
//! # Stepping model
//!
//! Steps are computed on demand: stepping forward past the end of recorded
//! history performs one real `step()` and records the result; stepping
//! anywhere inside recorded history just moves the position. A step fuse
//! bounds `run_to_end` so a lesson that fails to reach its terminal phase
//! cannot spin forever.

pub mod errors;

use crate::snapshot::{Snapshot, SnapshotManager};
use errors::RunnerError;

/// Default snapshot history cap (bytes). Lessons operate on a few dozen
/// elements, so real runs stay far below this.
pub const DEFAULT_MEMORY_LIMIT: usize = 64 * 1024 * 1024;

/// Upper bound on real steps in a single run
pub const STEP_FUSE: usize = 100_000;

/// A lesson that advances one discrete operation per call.
///
/// Implementations keep an explicit phase tag and treat `step` in a terminal
/// state as a guarded no-op: no mutation, no panic.
pub trait SteppedAlgorithm {
    /// Perform exactly one unit of algorithmic work.
    ///
    /// Must be a no-op once [`is_terminal`](Self::is_terminal) returns true.
    fn step(&mut self);

    /// True once the algorithm has produced its final answer
    fn is_terminal(&self) -> bool;

    /// Visual state, narration, and phase label after the latest step.
    ///
    /// Pure function of state; calling it repeatedly without stepping must
    /// return an identical snapshot.
    fn snapshot(&self) -> Snapshot;
}

/// Drives one lesson and owns its navigable step history
pub struct Runner {
    algorithm: Box<dyn SteppedAlgorithm>,
    history: SnapshotManager,
    position: usize,
    steps_taken: usize,
    step_fuse: usize,
    /// Set once a real step could not be recorded. The algorithm may be one
    /// step ahead of history at that point, so no further real steps are
    /// allowed; navigation inside recorded history stays valid.
    fault: Option<RunnerError>,
}

impl Runner {
    /// Create a runner, recording the lesson's initial snapshot as step 0
    pub fn new(
        algorithm: Box<dyn SteppedAlgorithm>,
        memory_limit: usize,
    ) -> Result<Self, RunnerError> {
        let mut history = SnapshotManager::new(memory_limit);
        history
            .push(algorithm.snapshot())
            .map_err(|message| RunnerError::SnapshotLimitExceeded { message })?;
        Ok(Runner {
            algorithm,
            history,
            position: 0,
            steps_taken: 0,
            step_fuse: STEP_FUSE,
            fault: None,
        })
    }

    /// Create a runner with the default memory cap
    pub fn with_defaults(algorithm: Box<dyn SteppedAlgorithm>) -> Result<Self, RunnerError> {
        Runner::new(algorithm, DEFAULT_MEMORY_LIMIT)
    }

    /// Move one step forward, computing a new step if at the live edge.
    ///
    /// Fails with [`RunnerError::EndOfHistory`] once the lesson is terminal
    /// and the position is already on the last recorded snapshot.
    pub fn step_forward(&mut self) -> Result<(), RunnerError> {
        // Replaying inside recorded history never recomputes.
        if self.position + 1 < self.history.len() {
            self.position += 1;
            return Ok(());
        }

        if let Some(fault) = &self.fault {
            return Err(fault.clone());
        }

        if self.algorithm.is_terminal() {
            return Err(RunnerError::EndOfHistory);
        }

        if self.steps_taken >= self.step_fuse {
            return Err(RunnerError::StepFuseExceeded {
                limit: self.step_fuse,
            });
        }

        self.algorithm.step();
        self.steps_taken += 1;
        match self.history.push(self.algorithm.snapshot()) {
            Ok(()) => {
                self.position = self.history.len() - 1;
                Ok(())
            }
            Err(message) => {
                // The step just taken has no snapshot; latch so the
                // algorithm cannot drift further ahead of history.
                let error = RunnerError::SnapshotLimitExceeded { message };
                self.fault = Some(error.clone());
                Err(error)
            }
        }
    }

    /// Move one step backward through recorded history
    pub fn step_backward(&mut self) -> Result<(), RunnerError> {
        if self.position == 0 {
            return Err(RunnerError::StartOfHistory);
        }
        self.position -= 1;
        Ok(())
    }

    /// Jump back to the initial snapshot, keeping recorded history
    pub fn rewind_to_start(&mut self) {
        self.position = 0;
    }

    /// Step forward until the lesson is terminal and the position is at the
    /// live edge. Bounded by the step fuse.
    pub fn run_to_end(&mut self) -> Result<(), RunnerError> {
        loop {
            match self.step_forward() {
                Ok(()) => {}
                Err(RunnerError::EndOfHistory) => return Ok(()),
                Err(e) => return Err(e),
            }
        }
    }

    /// Snapshot at the current position
    pub fn current(&self) -> &Snapshot {
        // Position is always a valid index: step 0 is recorded at construction.
        self.history
            .get(self.position)
            .unwrap_or_else(|| unreachable!("runner position out of recorded history"))
    }

    /// Snapshot at an arbitrary recorded position
    pub fn snapshot_at(&self, index: usize) -> Option<&Snapshot> {
        self.history.get(index)
    }

    /// Current position in history (0 = initial state)
    pub fn position(&self) -> usize {
        self.position
    }

    /// Number of recorded snapshots so far
    pub fn recorded(&self) -> usize {
        self.history.len()
    }

    /// Total step count once known.
    ///
    /// `None` while the lesson has not reached its terminal phase, since the
    /// lazy model cannot know how many steps remain.
    pub fn total_steps(&self) -> Option<usize> {
        if self.fault.is_none() && self.algorithm.is_terminal() {
            Some(self.history.len())
        } else {
            None
        }
    }

    /// True when the current position shows the lesson's final answer.
    ///
    /// A faulted runner is never exhausted: its last recorded snapshot is a
    /// mid-run state, not the answer.
    pub fn is_exhausted(&self) -> bool {
        self.fault.is_none()
            && self.algorithm.is_terminal()
            && self.position + 1 == self.history.len()
    }

    /// Direct access to the lesson, for result accessors in tests
    pub fn algorithm(&self) -> &dyn SteppedAlgorithm {
        self.algorithm.as_ref()
    }

    /// History memory usage in bytes
    pub fn memory_usage(&self) -> usize {
        self.history.memory_usage()
    }
}
