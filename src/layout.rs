use std::env;

use camino::{Utf8Path, Utf8PathBuf};
use houston::HoustonProblem;

const WINDOWS_PROGRAM_FILES: &str = r"C:\Program Files (x86)";
const WINE: &str = "wine";

/// Where the managed programs live on this machine, and how to start them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    program_files: Utf8PathBuf,
    wrapper: Option<String>,
}

impl Layout {
    /// A plain Windows installation: programs are started directly.
    pub fn windows() -> Layout {
        Layout {
            program_files: Utf8PathBuf::from(WINDOWS_PROGRAM_FILES),
            wrapper: None,
        }
    }

    /// A Wine prefix: the Windows drive lives under `prefix` and every
    /// program is started through `wine`.
    pub fn wine(prefix: impl AsRef<Utf8Path>) -> Layout {
        Layout {
            program_files: prefix.as_ref().join("drive_c").join("Program Files (x86)"),
            wrapper: Some(WINE.to_string()),
        }
    }

    /// The layout for the machine we are running on. Outside of Windows the
    /// prefix is `$WINEPREFIX`, falling back to `~/.wine`.
    pub fn native() -> Result<Layout, HoustonProblem> {
        if cfg!(windows) {
            return Ok(Layout::windows());
        }
        let prefix = match env::var("WINEPREFIX") {
            Ok(prefix) if !prefix.is_empty() => Utf8PathBuf::from(prefix),
            _ => houston::home_dir()?.join(".wine"),
        };
        tracing::debug!(wine_prefix = %prefix);
        Ok(Layout::wine(prefix))
    }

    pub fn with_program_files(self, program_files: impl Into<Utf8PathBuf>) -> Layout {
        Layout {
            program_files: program_files.into(),
            ..self
        }
    }

    /// An empty wrapper means "start programs directly".
    pub fn with_wrapper(self, wrapper: Option<String>) -> Layout {
        Layout {
            wrapper: wrapper.filter(|wrapper| !wrapper.is_empty()),
            ..self
        }
    }

    pub fn program_files(&self) -> &Utf8Path {
        &self.program_files
    }

    pub fn wrapper(&self) -> Option<&str> {
        self.wrapper.as_deref()
    }

    pub fn battle_net_exe(&self) -> Utf8PathBuf {
        self.program_files.join("Battle.net").join("Battle.net.exe")
    }

    /// Where the Hearthstone Deck Tracker archive is unpacked.
    pub fn deck_tracker_dir(&self) -> Utf8PathBuf {
        self.program_files.join("hnl")
    }

    pub fn deck_tracker_exe(&self) -> Utf8PathBuf {
        self.deck_tracker_dir()
            .join("Hearthstone Deck Tracker")
            .join("Hearthstone Deck Tracker.exe")
    }
}
