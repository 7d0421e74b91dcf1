use std::fmt::{self, Display};

use binstall::InstallerError;
use houston::HoustonProblem;
use nerd_std::NerdStdError;
use thiserror::Error;

/// Everything that can stop `hsnerd` from finishing a run.
#[derive(Error, Debug)]
pub enum BootstrapError {
    /// Per-user directories or the installation marker could not be used
    #[error(transparent)]
    Houston(#[from] HoustonProblem),

    /// The HTTP client could not be set up
    #[error(transparent)]
    Installer(#[from] InstallerError),

    /// The directory downloads are staged in could not be created
    #[error("could not prepare the download directory '{path}'")]
    Staging {
        path: String,
        #[source]
        source: NerdStdError,
    },

    /// An existing targets file could not be read
    #[error("could not read targets from '{path}'")]
    ReadManifest {
        path: String,
        #[source]
        source: NerdStdError,
    },

    /// An existing targets file is not valid
    #[error("'{path}' is not a valid targets file")]
    ParseManifest {
        path: String,
        #[source]
        source: toml::de::Error,
    },

    /// At least one install or launch task failed
    #[error(transparent)]
    Tasks(#[from] TaskErrors),
}

/// The failure of a single task, tagged with the task's name.
#[derive(Debug)]
pub struct TaskFailure {
    pub name: String,
    pub error: anyhow::Error,
}

/// Every failure from one fan-out, kept together so that no message is lost.
#[derive(Debug)]
pub struct TaskErrors {
    total: usize,
    failures: Vec<TaskFailure>,
}

impl TaskErrors {
    /// `None` when nothing failed.
    pub(crate) fn from_failures(total: usize, failures: Vec<TaskFailure>) -> Option<TaskErrors> {
        if failures.is_empty() {
            None
        } else {
            Some(TaskErrors { total, failures })
        }
    }

    pub fn failures(&self) -> &[TaskFailure] {
        &self.failures
    }

    /// How many tasks ran, failed or not.
    pub fn total(&self) -> usize {
        self.total
    }
}

impl Display for TaskErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {} tasks failed:", self.failures.len(), self.total)?;
        for failure in &self.failures {
            write!(f, "\n  {}: {:#}", failure.name, failure.error)?;
        }
        Ok(())
    }
}

impl std::error::Error for TaskErrors {}
