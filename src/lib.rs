//! `hsnerd` gets Battle.net and Hearthstone Deck Tracker onto a machine the
//! first time it runs, and launches both of them every time after that.

pub mod cli;
mod effect;
mod error;
mod install;
mod launch;
mod layout;
mod targets;
mod task;

pub use cli::Hsnerd;
pub use effect::{Fetch, RunProgram, TokioRunner};
pub use error::{BootstrapError, TaskErrors, TaskFailure};
pub use install::Installer;
pub use launch::Launcher;
pub use layout::Layout;
pub use targets::{InstallTarget, LaunchTarget, Manifest, PostDownload};
pub use task::{run_all, Task};

pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");
