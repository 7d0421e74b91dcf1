use camino::{Utf8Path, Utf8PathBuf};

use crate::{HoustonProblem, Marker};

const MARKER_FILE_NAME: &str = "installed";
const TARGETS_FILE_NAME: &str = "targets.toml";

/// The per-user locations `hsnerd` reads and writes.
///
/// Both fields may be overridden, which is how end users (and tests)
/// redirect state away from their real configuration directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// home is where the marker file and the optional targets file live
    pub home: Utf8PathBuf,

    /// cache is where downloads are staged
    pub cache: Utf8PathBuf,
}

impl Config {
    /// Creates a new instance of `Config`
    pub fn new(
        override_home: Option<&Utf8Path>,
        override_cache: Option<&Utf8Path>,
    ) -> Result<Config, HoustonProblem> {
        Ok(Config {
            home: crate::config_dir(override_home)?,
            cache: crate::cache_dir(override_cache)?,
        })
    }

    /// The marker recording a finished installation
    pub fn marker(&self) -> Marker {
        Marker::new(self.home.join(MARKER_FILE_NAME))
    }

    /// Location of the optional file overriding the built-in targets
    pub fn targets_file(&self) -> Utf8PathBuf {
        self.home.join(TARGETS_FILE_NAME)
    }
}
