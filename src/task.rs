//! # Task abstraction.
//!
//! [`Task`] is the cancelable-unit seam: an async `run` that receives a
//! [`CancellationToken`] and is expected to observe it at its suspension
//! points and stop cooperatively. The worker is never torn down from
//! outside; cancellation is a request, detection is the task's job.
//!
//! [`TaskRef`] is the shared handle form the supervisor consumes.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::error::TaskError;

/// Shared handle to a task.
pub type TaskRef = Arc<dyn Task>;

/// # Asynchronous, cancelable unit.
///
/// A `Task` has a stable [`name`](Task::name) and an async
/// [`run`](Task::run) method that receives a [`CancellationToken`].
///
/// ## Contract
/// - Check the token at each suspension point and exit promptly once it is
///   cancelled, returning [`TaskError::Canceled`].
/// - `Ok(())` means the task ran its full course.
#[async_trait]
pub trait Task: Send + Sync + 'static {
    /// Returns a stable, human-readable task name.
    fn name(&self) -> &str;

    /// Executes the task until completion or cancellation.
    async fn run(&self, ctx: CancellationToken) -> Result<(), TaskError>;
}
