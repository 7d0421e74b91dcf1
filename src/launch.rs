use anyhow::Context;
use bon::Builder;
use nerd_std::{infoln, Style};

use crate::{effect::RunProgram, run_all, BootstrapError, LaunchTarget, Task};

/// Starts every launch target at once and stays around until all of them
/// have been closed.
#[derive(Builder)]
pub struct Launcher<R> {
    runner: R,
    targets: Vec<LaunchTarget>,
}

impl<R> Launcher<R>
where
    R: RunProgram + Sync,
{
    pub async fn launch_all(&self) -> Result<(), BootstrapError> {
        let tasks = self
            .targets
            .iter()
            .map(|target| {
                Task::new(target.name.clone(), async move {
                    infoln!(
                        "launching {} from {}",
                        Style::Program.paint(&target.name),
                        Style::Path.paint(target.program.as_str())
                    );
                    self.runner
                        .run_program(&target.program)
                        .await
                        .with_context(|| format!("could not run {}", target.name))
                })
            })
            .collect();
        run_all(tasks).await?;
        Ok(())
    }
}
