use std::process::Stdio;

use anyhow::{anyhow, Context};
use async_trait::async_trait;
use camino::Utf8Path;
use tokio::process::Command;

/// Runs a program to completion. Returning only once the program has exited
/// is part of the contract: callers treat "done" as "the program closed".
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RunProgram {
    async fn run_program(&self, program: &Utf8Path) -> anyhow::Result<()>;
}

/// Spawns programs with the standard streams of this process.
///
/// With a `wrapper` (e.g. `wine`) the program is passed as the wrapper's
/// only argument instead of being executed directly.
#[derive(Clone, Debug, Default)]
pub struct TokioRunner {
    wrapper: Option<String>,
}

impl TokioRunner {
    pub fn new(wrapper: Option<String>) -> TokioRunner {
        TokioRunner { wrapper }
    }

    fn command(&self, program: &Utf8Path) -> Command {
        match &self.wrapper {
            Some(wrapper) => {
                let mut command = Command::new(wrapper);
                command.arg(program);
                command
            }
            None => Command::new(program),
        }
    }
}

#[async_trait]
impl RunProgram for TokioRunner {
    async fn run_program(&self, program: &Utf8Path) -> anyhow::Result<()> {
        let mut command = self.command(program);
        command
            .stdin(Stdio::inherit())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit());
        tracing::debug!(?command, "spawning");

        let status = command
            .status()
            .await
            .with_context(|| format!("could not start {program}"))?;
        tracing::debug!(%program, %status, "exited");

        if status.success() {
            Ok(())
        } else {
            Err(anyhow!("{program} exited unsuccessfully ({status})"))
        }
    }
}
