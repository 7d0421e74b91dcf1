use camino::{Utf8Path, Utf8PathBuf};
use directories_next::BaseDirs;

use crate::HoustonProblem;

/// The directory name used for our state under the user's configuration directory.
pub(crate) const NAMESPACE: &str = "HearthstoneNerdLinux";

/// Returns `override_dir` when present, otherwise our namespace under the
/// default OS configuration directory.
pub fn config_dir(override_dir: Option<&Utf8Path>) -> Result<Utf8PathBuf, HoustonProblem> {
    let dir = match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => {
            // Lin: /home/alice/.config/HearthstoneNerdLinux
            // Win: C:\Users\Alice\AppData\Roaming\HearthstoneNerdLinux
            // Mac: /Users/Alice/Library/Application Support/HearthstoneNerdLinux
            let base_dirs = BaseDirs::new().ok_or(HoustonProblem::DefaultConfigDirNotFound)?;
            Utf8PathBuf::try_from(base_dirs.config_dir().to_path_buf())?.join(NAMESPACE)
        }
    };
    tracing::debug!(config_dir = %dir);
    Ok(dir)
}

/// Returns `override_dir` when present, otherwise the default OS cache directory.
/// Downloads are staged here before being run or extracted.
pub fn cache_dir(override_dir: Option<&Utf8Path>) -> Result<Utf8PathBuf, HoustonProblem> {
    let dir = match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => {
            let base_dirs = BaseDirs::new().ok_or(HoustonProblem::DefaultCacheDirNotFound)?;
            Utf8PathBuf::try_from(base_dirs.cache_dir().to_path_buf())?
        }
    };
    tracing::debug!(cache_dir = %dir);
    Ok(dir)
}

/// Returns the current user's home directory.
pub fn home_dir() -> Result<Utf8PathBuf, HoustonProblem> {
    let base_dirs = BaseDirs::new().ok_or(HoustonProblem::HomeDirNotFound)?;
    Ok(Utf8PathBuf::try_from(base_dirs.home_dir().to_path_buf())?)
}
