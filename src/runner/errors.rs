//! Error types for the stepped runner
//!
//! This module defines [`RunnerError`], which represents all errors that can occur
//! while building a lesson or navigating its step history (as opposed to the
//! algorithms themselves, which never fail: out-of-range conditions inside a
//! lesson are guarded no-ops that transition to the terminal phase).

use std::fmt;

/// Errors raised by lesson construction and history navigation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunnerError {
    /// Lesson input could not be turned into a runnable instance
    InvalidInput { message: String },

    /// Snapshot history memory cap exceeded
    SnapshotLimitExceeded { message: String },

    /// Step forward requested while already at the live edge of a finished run
    EndOfHistory,

    /// Step backward requested at the initial snapshot
    StartOfHistory,

    /// Lesson id not present in the catalogue
    UnknownLesson { id: String },

    /// Safety fuse: a single run performed more steps than the configured limit
    StepFuseExceeded { limit: usize },
}

impl fmt::Display for RunnerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RunnerError::InvalidInput { message } => {
                write!(f, "Invalid input: {}", message)
            }
            RunnerError::SnapshotLimitExceeded { message } => {
                write!(f, "{}", message)
            }
            RunnerError::EndOfHistory => {
                write!(f, "Already at the end of the run")
            }
            RunnerError::StartOfHistory => {
                write!(f, "Already at the initial state")
            }
            RunnerError::UnknownLesson { id } => {
                write!(f, "Unknown lesson '{}'", id)
            }
            RunnerError::StepFuseExceeded { limit } => {
                write!(f, "Run exceeded the {} step safety limit", limit)
            }
        }
    }
}

impl std::error::Error for RunnerError {}
