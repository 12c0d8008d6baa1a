//! Binary entry point: `patience [patience_seconds]`.
//!
//! Resolves the optional patience argument, then runs the supervised
//! message loop to confirmed termination. A malformed argument prints
//! `Argument must be an integer.` to stderr and exits with status 1 before
//! anything is started.

use std::sync::Arc;

use patience::{parse_patience, Config, ConsoleWriter, MessageLoop, Supervisor, TaskRef};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let mut cfg = Config::default();
    if let Some(arg) = std::env::args().nth(1) {
        match parse_patience(&arg) {
            Ok(patience) => cfg.patience = patience,
            Err(err) => {
                eprintln!("{err}");
                std::process::exit(1);
            }
        }
    }

    let observer = Arc::new(ConsoleWriter);
    let task: TaskRef = Arc::new(MessageLoop::new(cfg.pause, observer.clone()));
    let supervisor = Supervisor::new(cfg, observer);

    supervisor.run(task).await?;
    Ok(())
}
