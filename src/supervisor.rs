//! # Supervisor: patience-bounded waiting with cancellation escalation.
//!
//! Spawns one [`Task`] and waits for it in a poll loop built from bounded
//! joins. Once the elapsed time exceeds the configured patience, the
//! supervisor cancels the task's token and performs a single unbounded join.
//!
//! ## Wait loop
//! ```text
//! spawn(task, child token)
//! loop {
//!   ├─► emit StillWaiting
//!   ├─► timeout(poll, &mut handle)
//!   │     ├─ Ok(joined)  → break           (worker finished)
//!   │     └─ Err(Elapsed)→ fall through    (worker still alive)
//!   └─► elapsed > patience?
//!         ├─► emit PatienceExceeded
//!         ├─► token.cancel()
//!         └─► handle.await → break          (unbounded join, at most once)
//! }
//! emit Finished
//! ```
//!
//! ## Rules
//! - A bounded join blocks at most `poll` per iteration.
//! - The patience check runs only after a bounded wait expires, so
//!   cancellation delivery may lag the nominal patience by up to one poll
//!   interval. Accepted tolerance, inherited from the original demo.
//! - `PatienceExceeded` is emitted at most once; the unbounded join that
//!   follows it is entered at most once.
//! - Cooperative cancellation is not a failure: it maps to
//!   [`WaitOutcome::Interrupted`], and `Finished` is still emitted.

use std::sync::Arc;
use std::time::Duration;

use tokio::time::{self, Instant};
use tokio_util::sync::CancellationToken;

use crate::{
    config::Config,
    error::{RuntimeError, TaskError},
    events::{Event, EventKind},
    observers::Observe,
    task::TaskRef,
};

/// Source name the supervisor stamps on its own events.
const SOURCE: &str = "main";

/// How a supervised run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WaitOutcome {
    /// The worker ran its full course before patience ran out.
    Completed,
    /// Patience ran out; the worker was cancelled and stopped cooperatively.
    Interrupted,
}

/// Summary of one supervised run.
#[derive(Debug, Clone, Copy)]
pub struct WaitReport {
    /// How the run ended.
    pub outcome: WaitOutcome,
    /// Total time from spawn to confirmed termination.
    pub waited: Duration,
}

/// Coordinates one worker task: spawn, poll, escalate, join.
pub struct Supervisor {
    /// Runtime configuration (patience and poll interval).
    pub cfg: Config,
    /// Sink for lifecycle events.
    pub observer: Arc<dyn Observe>,
}

impl Supervisor {
    /// Creates a supervisor with the given config and event sink.
    pub fn new(cfg: Config, observer: Arc<dyn Observe>) -> Self {
        Self { cfg, observer }
    }

    /// Runs the task to confirmed termination.
    ///
    /// Returns a [`WaitReport`] on both normal completion and timeout
    /// escalation. Worker faults (a non-cancellation [`TaskError`] or a
    /// panic) surface as [`RuntimeError`] without the final `Finished`
    /// event.
    pub async fn run(&self, task: TaskRef) -> Result<WaitReport, RuntimeError> {
        let name = task.name().to_string();
        self.emit(Event::new(EventKind::TaskStarting, SOURCE).with_task(name.clone()))
            .await;

        let started = Instant::now();
        let token = CancellationToken::new();
        let mut handle = {
            let task = Arc::clone(&task);
            let child = token.child_token();
            tokio::spawn(async move { task.run(child).await })
        };

        self.emit(Event::new(EventKind::WaitBegin, SOURCE).with_task(name))
            .await;

        let joined = loop {
            self.emit(Event::new(EventKind::StillWaiting, SOURCE)).await;

            // Bounded join: returns early if the worker finishes.
            match time::timeout(self.cfg.poll, &mut handle).await {
                Ok(joined) => break joined,
                Err(_elapsed) => {}
            }

            if started.elapsed() > self.cfg.patience {
                self.emit(Event::new(EventKind::PatienceExceeded, SOURCE))
                    .await;
                token.cancel();

                // Shouldn't be long now: the worker detects the token at its
                // next pause boundary. Unbounded join, entered at most once.
                break (&mut handle).await;
            }
        };

        let outcome = match joined {
            Ok(Ok(())) => WaitOutcome::Completed,
            Ok(Err(TaskError::Canceled)) => WaitOutcome::Interrupted,
            Ok(Err(err)) => {
                return Err(RuntimeError::WorkerFailed {
                    reason: err.to_string(),
                });
            }
            Err(join_err) => {
                return Err(RuntimeError::WorkerPanicked {
                    reason: join_err.to_string(),
                });
            }
        };

        self.emit(Event::new(EventKind::Finished, SOURCE)).await;
        Ok(WaitReport {
            outcome,
            waited: started.elapsed(),
        })
    }

    async fn emit(&self, ev: Event) {
        self.observer.on_event(&ev).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        observers::Recorder,
        task::Task,
        worker::{MessageLoop, MESSAGES},
    };
    use async_trait::async_trait;

    fn cfg(patience: Duration) -> Config {
        Config {
            patience,
            poll: Duration::from_secs(1),
            pause: Duration::from_secs(4),
        }
    }

    fn setup(patience: Duration) -> (Supervisor, TaskRef, Arc<Recorder>) {
        let rec = Arc::new(Recorder::new());
        let cfg = cfg(patience);
        let task: TaskRef = Arc::new(MessageLoop::new(cfg.pause, rec.clone()));
        let sup = Supervisor::new(cfg, rec.clone());
        (sup, task, rec)
    }

    fn count(lines: &[String], needle: &str) -> usize {
        lines.iter().filter(|l| l.as_str() == needle).count()
    }

    #[tokio::test(start_paused = true)]
    async fn test_generous_patience_runs_to_completion() {
        let (sup, task, rec) = setup(Duration::from_secs(60));

        let report = sup.run(task).await.unwrap();
        assert_eq!(report.outcome, WaitOutcome::Completed);

        let lines = rec.lines();
        assert_eq!(lines[0], "main: Starting MessageLoop thread");
        assert_eq!(lines[1], "main: Waiting for MessageLoop thread to finish");
        assert_eq!(lines.last().unwrap(), "main: Finally!");

        // All four data messages, in sequence order.
        let data: Vec<&String> = lines
            .iter()
            .filter(|l| l.starts_with("MessageLoop: ") && !l.ends_with("done!"))
            .collect();
        let want: Vec<String> = MESSAGES
            .iter()
            .map(|m| format!("MessageLoop: {m}"))
            .collect();
        assert_eq!(data.len(), 4);
        for (got, want) in data.iter().zip(&want) {
            assert_eq!(*got, want);
        }

        assert_eq!(count(&lines, "main: Tired of waiting!"), 0);
        assert_eq!(count(&lines, "MessageLoop: I wasn't done!"), 0);
        assert!(count(&lines, "main: Still waiting...") >= 1);
        assert_eq!(count(&lines, "main: Finally!"), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_zero_patience_interrupts_before_first_message() {
        let (sup, task, rec) = setup(Duration::ZERO);

        let report = sup.run(task).await.unwrap();
        assert_eq!(report.outcome, WaitOutcome::Interrupted);

        let lines = rec.lines();
        assert_eq!(count(&lines, "main: Tired of waiting!"), 1);
        assert_eq!(count(&lines, "MessageLoop: I wasn't done!"), 1);
        assert_eq!(lines.last().unwrap(), "main: Finally!");

        // First pause (4s) never completes: cancel lands after the first
        // 1s poll, so no data message is emitted.
        assert_eq!(count(&lines, &format!("MessageLoop: {}", MESSAGES[0])), 0);

        // Escalation order: Tired → I wasn't done! → Finally!
        let tired = lines.iter().position(|l| l == "main: Tired of waiting!");
        let done = lines.iter().position(|l| l == "MessageLoop: I wasn't done!");
        let finally = lines.iter().position(|l| l == "main: Finally!");
        assert!(tired < done && done < finally);
    }

    #[tokio::test(start_paused = true)]
    async fn test_patience_covering_two_pauses_truncates_after_two_messages() {
        // Patience of 9s: messages land at t=4 and t=8, the check at t=10
        // (first poll expiry past 9s) cancels during the third pause.
        let (sup, task, rec) = setup(Duration::from_secs(9));

        let report = sup.run(task).await.unwrap();
        assert_eq!(report.outcome, WaitOutcome::Interrupted);

        let lines = rec.lines();
        assert_eq!(count(&lines, &format!("MessageLoop: {}", MESSAGES[0])), 1);
        assert_eq!(count(&lines, &format!("MessageLoop: {}", MESSAGES[1])), 1);
        assert_eq!(count(&lines, &format!("MessageLoop: {}", MESSAGES[2])), 0);
        assert_eq!(count(&lines, "main: Tired of waiting!"), 1);
        assert_eq!(lines.last().unwrap(), "main: Finally!");
    }

    struct Faulty;

    #[async_trait]
    impl Task for Faulty {
        fn name(&self) -> &str {
            "Faulty"
        }

        async fn run(&self, _ctx: CancellationToken) -> Result<(), TaskError> {
            Err(TaskError::Fail {
                error: "boom".into(),
            })
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_worker_fault_surfaces_without_finished_event() {
        let rec = Arc::new(Recorder::new());
        let sup = Supervisor::new(cfg(Duration::from_secs(60)), rec.clone());

        let err = sup.run(Arc::new(Faulty)).await.unwrap_err();
        assert_eq!(err.as_label(), "runtime_worker_failed");

        let lines = rec.lines();
        assert_eq!(count(&lines, "main: Finally!"), 0);
    }
}
