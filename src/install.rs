use anyhow::Context;
use binstall::extract_zip;
use bon::Builder;
use camino::Utf8PathBuf;
use houston::Marker;
use nerd_std::{infoln, successln, Fs, Style};

use crate::{
    effect::{Fetch, RunProgram},
    run_all, BootstrapError, InstallTarget, PostDownload, Task,
};

/// Downloads every install target at once, runs or unpacks each download,
/// and records the installation once all of them made it.
#[derive(Builder)]
pub struct Installer<F, R> {
    fetcher: F,
    runner: R,
    marker: Marker,
    /// Downloads are written here before being run or extracted
    #[builder(into)]
    staging_dir: Utf8PathBuf,
    targets: Vec<InstallTarget>,
}

impl<F, R> Installer<F, R>
where
    F: Fetch + Sync,
    R: RunProgram + Sync,
{
    /// Installs every target concurrently.
    ///
    /// The marker is only written when every target succeeded. Otherwise the
    /// returned error lists each failed target, and the next run will try
    /// the whole installation again.
    pub async fn install_all(&self) -> Result<(), BootstrapError> {
        Fs::create_dir_all(&self.staging_dir).map_err(|source| BootstrapError::Staging {
            path: self.staging_dir.to_string(),
            source,
        })?;

        let tasks = self
            .targets
            .iter()
            .map(|target| Task::new(target.name.clone(), self.install_one(target)))
            .collect();
        run_all(tasks).await?;

        self.marker.mark_installed()?;
        successln!("everything is installed");
        Ok(())
    }

    async fn install_one(&self, target: &InstallTarget) -> anyhow::Result<()> {
        infoln!(
            "downloading {} from {}",
            Style::Program.paint(&target.name),
            Style::Link.paint(&target.url)
        );
        let staged = target.staging_path(&self.staging_dir);

        self.fetcher
            .fetch(&target.url, &staged)
            .await
            .with_context(|| format!("could not download {} from {}", target.name, target.url))?;

        match &target.action {
            PostDownload::RunInstaller => {
                infoln!(
                    "running the {} installer, close it once it is done",
                    Style::Program.paint(&target.name)
                );
                self.runner
                    .run_program(&staged)
                    .await
                    .with_context(|| format!("the {} installer did not succeed", target.name))?;
            }
            PostDownload::ExtractTo { directory } => {
                let archive = staged.clone();
                let destination = directory.clone();
                tokio::task::spawn_blocking(move || extract_zip(&archive, &destination))
                    .await
                    .context("the extraction task did not complete")?
                    .with_context(|| {
                        format!("could not extract {} into {}", staged, directory)
                    })?;
            }
        }

        successln!("{} installed", Style::Program.paint(&target.name));
        Ok(())
    }
}
