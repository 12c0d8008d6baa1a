//! # MessageLoop: the supervised worker.
//!
//! Emits [`MESSAGES`] in order, pausing before each entry. Each iteration
//! races the pause against cancellation:
//!
//! ```text
//! for msg in MESSAGES {
//!   select! {
//!     sleep(pause)    => emit TaskMessage(msg)
//!     ctx.cancelled() => emit TaskInterrupted ("I wasn't done!"), return Canceled
//!   }
//! }
//! ```
//!
//! Cancellation is therefore observed only at the pause boundary. A token
//! cancelled between pauses short-circuits the next pause immediately, so no
//! further message is emitted after the request lands.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use tokio::{select, time};
use tokio_util::sync::CancellationToken;

use crate::{
    error::TaskError,
    events::{Event, EventKind},
    observers::Observe,
    task::Task,
};

/// The fixed message sequence, in emission order.
pub const MESSAGES: [&str; 4] = [
    "Mares eat oats",
    "Does eat oats",
    "Little lambs eat ivy",
    "A kid will eat ivy too",
];

/// Worker task emitting [`MESSAGES`] with a pause before each entry.
pub struct MessageLoop {
    /// Pause taken before each message.
    pause: Duration,
    /// Sink for emitted events.
    observer: Arc<dyn Observe>,
}

impl MessageLoop {
    /// Creates a message loop with the given per-entry pause.
    pub fn new(pause: Duration, observer: Arc<dyn Observe>) -> Self {
        Self { pause, observer }
    }

    async fn emit(&self, ev: Event) {
        self.observer.on_event(&ev).await;
    }
}

#[async_trait]
impl Task for MessageLoop {
    fn name(&self) -> &str {
        "MessageLoop"
    }

    /// Runs the full sequence, or aborts at the first cancelled pause.
    ///
    /// Returns `Ok(())` after the last message, `Err(TaskError::Canceled)`
    /// if cancellation cut the sequence short.
    async fn run(&self, ctx: CancellationToken) -> Result<(), TaskError> {
        for text in MESSAGES {
            select! {
                _ = ctx.cancelled() => {
                    self.emit(Event::new(EventKind::TaskInterrupted, self.name().to_string()))
                        .await;
                    return Err(TaskError::Canceled);
                }
                _ = time::sleep(self.pause) => {
                    self.emit(
                        Event::new(EventKind::TaskMessage, self.name().to_string())
                            .with_text(text),
                    )
                    .await;
                }
            }
        }
        Ok(())
    }
}
