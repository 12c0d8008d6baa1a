//! # Event delivery.
//!
//! [`Observe`] is the seam between the units that produce [`Event`]s (the
//! supervisor and the worker) and whatever consumes them. The only production
//! implementation is [`ConsoleWriter`]: console output is this program's
//! whole external surface.
//!
//! Delivery is direct and awaited, not fanned out through a channel: with a
//! single observer and two emitting units, awaiting `on_event` at each
//! emission point is what preserves the line ordering the program promises
//! (worker messages in sequence order, `Finally!` strictly last).

use async_trait::async_trait;

use crate::events::Event;

/// Consumes lifecycle events.
#[async_trait]
pub trait Observe: Send + Sync + 'static {
    /// Handles one event. Called in emission order; implementations should
    /// return promptly.
    async fn on_event(&self, ev: &Event);
}

/// Stdout observer: prints each event as its rendered console line.
pub struct ConsoleWriter;

#[async_trait]
impl Observe for ConsoleWriter {
    async fn on_event(&self, ev: &Event) {
        println!("{}", ev.render());
    }
}

/// Test observer that records rendered lines in emission order.
#[cfg(test)]
pub(crate) struct Recorder {
    lines: std::sync::Mutex<Vec<String>>,
}

#[cfg(test)]
impl Recorder {
    pub(crate) fn new() -> Self {
        Self {
            lines: std::sync::Mutex::new(Vec::new()),
        }
    }

    /// Snapshot of everything recorded so far.
    pub(crate) fn lines(&self) -> Vec<String> {
        self.lines.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl Observe for Recorder {
    async fn on_event(&self, ev: &Event) {
        self.lines.lock().unwrap().push(ev.render());
    }
}
