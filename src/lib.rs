//! # patience
//!
//! **Patience** is a small demonstration of cooperative cancellation and
//! timed waiting on top of tokio.
//!
//! One worker task (the [`MessageLoop`]) emits a fixed sequence of messages,
//! pausing before each entry. A [`Supervisor`] starts it, polls its liveness
//! with a bounded join, and once a configurable *patience* interval has
//! elapsed, cancels the worker cooperatively and waits unconditionally for it
//! to stop.
//!
//! ## Architecture
//! ```text
//!   ┌──────────────────┐                      ┌──────────────────┐
//!   │  Supervisor      │── spawn(child token)─►  MessageLoop     │
//!   │  (source "main") │                      │  (worker task)   │
//!   └────────┬─────────┘                      └────────┬─────────┘
//!            │ loop {                                  │ for msg in MESSAGES {
//!            │   timeout(poll, &mut handle)            │   select! {
//!            │   elapsed > patience?                   │     sleep(pause) => emit msg
//!            │     └─► token.cancel() ────────────────►│     cancelled()  => emit
//!            │         handle.await (once)             │       "I wasn't done!"
//!            │ }                                       │   }
//!            ▼                                         ▼
//!       ┌───────────────────────────────────────────────────┐
//!       │  Observe (ConsoleWriter): one stdout line / Event │
//!       └───────────────────────────────────────────────────┘
//! ```
//!
//! ## Lifecycle
//! ```text
//! TaskStarting → WaitBegin → StillWaiting* → (PatienceExceeded → TaskInterrupted)? → Finished
//! ```
//!
//! Cancellation is cooperative: the worker is never torn down from outside,
//! it observes the token at its pause boundaries and stops itself. The
//! patience check runs only after each bounded wait expires, so cancellation
//! delivery may lag the nominal patience by up to one poll interval.

mod config;
mod error;
mod events;
mod observers;
mod supervisor;
mod task;
mod worker;

pub use config::{parse_patience, Config};
pub use error::{ConfigError, RuntimeError, TaskError};
pub use events::{Event, EventKind};
pub use observers::{ConsoleWriter, Observe};
pub use supervisor::{Supervisor, WaitOutcome, WaitReport};
pub use task::{Task, TaskRef};
pub use worker::{MessageLoop, MESSAGES};
