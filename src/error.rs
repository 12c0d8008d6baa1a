//! # Error types used by the supervisor and tasks.
//!
//! Three enums, one per failure domain:
//!
//! - [`ConfigError`] — fatal startup errors (malformed patience argument).
//! - [`TaskError`] — errors surfaced by a task execution.
//! - [`RuntimeError`] — failures of the supervision run itself.
//!
//! Cooperative cancellation is carried as [`TaskError::Canceled`] but is not
//! a process-level failure: the supervisor maps it to a normal
//! [`WaitOutcome::Interrupted`](crate::WaitOutcome) instead of propagating it.

use thiserror::Error;

/// # Fatal configuration errors.
///
/// Raised before any task is started; the binary prints the display to
/// stderr and exits with status 1.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The patience argument did not parse as an integer count of seconds.
    ///
    /// The display is the exact line the CLI contract requires on stderr.
    #[error("Argument must be an integer.")]
    PatienceNotInteger {
        /// The offending argument, kept for debugging.
        arg: String,
    },
}

impl ConfigError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            ConfigError::PatienceNotInteger { .. } => "config_patience_not_integer",
        }
    }
}

/// # Errors produced by task execution.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum TaskError {
    /// Task observed cancellation and stopped cooperatively.
    ///
    /// Expected during timeout escalation, never a fault.
    #[error("context cancelled")]
    Canceled,

    /// Task failed on its own.
    #[error("execution failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },
}

impl TaskError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            TaskError::Canceled => "task_canceled",
            TaskError::Fail { .. } => "task_failed",
        }
    }
}

/// # Errors produced by the supervision run itself.
///
/// Both variants mean the worker ended in a state the wait loop does not
/// model; the run stops without emitting its final `Finished` event.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RuntimeError {
    /// The worker returned a non-cancellation error.
    #[error("worker failed: {reason}")]
    WorkerFailed {
        /// Message of the underlying [`TaskError`].
        reason: String,
    },

    /// The worker's join handle reported a panic or abort.
    #[error("worker panicked: {reason}")]
    WorkerPanicked {
        /// Join error message.
        reason: String,
    },
}

impl RuntimeError {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            RuntimeError::WorkerFailed { .. } => "runtime_worker_failed",
            RuntimeError::WorkerPanicked { .. } => "runtime_worker_panicked",
        }
    }
}
