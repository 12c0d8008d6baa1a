//! # Lifecycle events and their console rendering.
//!
//! [`EventKind`] classifies everything the program says on stdout; [`Event`]
//! carries the emitting source plus optional task name and message text.
//! [`Event::render`] turns an event into exactly one console line, prefixed
//! with the source name:
//!
//! ```text
//! main: Starting MessageLoop thread
//! main: Waiting for MessageLoop thread to finish
//! main: Still waiting...
//! MessageLoop: Mares eat oats
//! main: Tired of waiting!
//! MessageLoop: I wasn't done!
//! main: Finally!
//! ```
//!
//! The line bodies are fixed: console output is this program's whole
//! external surface, so the strings live here and nowhere else.

use std::borrow::Cow;

/// Classification of lifecycle events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    /// Supervisor is about to spawn the worker.
    ///
    /// Sets: `task` (worker name). Renders `Starting {task} thread`.
    TaskStarting,

    /// Supervisor entered its wait loop.
    ///
    /// Sets: `task`. Renders `Waiting for {task} thread to finish`.
    WaitBegin,

    /// One poll-loop iteration began; the worker is still alive.
    ///
    /// Renders `Still waiting...`.
    StillWaiting,

    /// Worker emitted one entry of its message sequence.
    ///
    /// Sets: `text` (the entry). Renders the text verbatim.
    TaskMessage,

    /// Patience elapsed; the supervisor is cancelling the worker.
    ///
    /// At most once per run. Renders `Tired of waiting!`.
    PatienceExceeded,

    /// Worker observed cancellation mid-sequence and stopped.
    ///
    /// Renders `I wasn't done!`.
    TaskInterrupted,

    /// Worker terminated and the supervisor is done waiting.
    ///
    /// Always the last event of a run. Renders `Finally!`.
    Finished,
}

/// A lifecycle event with its emitting source.
#[derive(Debug, Clone)]
pub struct Event {
    /// What happened.
    pub kind: EventKind,
    /// Name of the emitting unit (`main` or the worker's task name).
    pub source: Cow<'static, str>,
    /// Task the event refers to, where the rendering needs it.
    pub task: Option<Cow<'static, str>>,
    /// Message payload for [`EventKind::TaskMessage`].
    pub text: Option<Cow<'static, str>>,
}

impl Event {
    /// Creates an event with the given kind and source.
    pub fn new(kind: EventKind, source: impl Into<Cow<'static, str>>) -> Self {
        Self {
            kind,
            source: source.into(),
            task: None,
            text: None,
        }
    }

    /// Attaches the task name the rendering refers to.
    pub fn with_task(mut self, task: impl Into<Cow<'static, str>>) -> Self {
        self.task = Some(task.into());
        self
    }

    /// Attaches a message payload.
    pub fn with_text(mut self, text: impl Into<Cow<'static, str>>) -> Self {
        self.text = Some(text.into());
        self
    }

    /// Renders the event as its single console line, `{source}: {body}`.
    pub fn render(&self) -> String {
        let task = self.task.as_deref().unwrap_or("?");
        let body: Cow<'_, str> = match self.kind {
            EventKind::TaskStarting => format!("Starting {task} thread").into(),
            EventKind::WaitBegin => format!("Waiting for {task} thread to finish").into(),
            EventKind::StillWaiting => "Still waiting...".into(),
            EventKind::TaskMessage => self.text.as_deref().unwrap_or("").into(),
            EventKind::PatienceExceeded => "Tired of waiting!".into(),
            EventKind::TaskInterrupted => "I wasn't done!".into(),
            EventKind::Finished => "Finally!".into(),
        };
        format!("{}: {}", self.source, body)
    }
}
