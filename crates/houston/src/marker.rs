use camino::{Utf8Path, Utf8PathBuf};
use nerd_std::Fs;

use crate::HoustonProblem;

/// A zero-content file whose presence means every install target finished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Marker {
    path: Utf8PathBuf,
}

impl Marker {
    /// Creates a marker living at `path`. Nothing is touched on disk.
    pub fn new(path: impl Into<Utf8PathBuf>) -> Marker {
        Marker { path: path.into() }
    }

    /// Where the marker lives
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Whether installation has already completed.
    ///
    /// A missing marker is `Ok(false)`; failing to look (e.g. permission
    /// denied on the directory) is an error rather than "not installed".
    pub fn is_installed(&self) -> Result<bool, HoustonProblem> {
        let installed =
            Fs::path_exists(&self.path).map_err(|source| HoustonProblem::CouldNotCheckMarker {
                path: self.path.to_string(),
                source,
            })?;
        tracing::debug!(marker = %self.path, installed);
        Ok(installed)
    }

    /// Records that installation has completed. Calling this again is harmless.
    pub fn mark_installed(&self) -> Result<(), HoustonProblem> {
        let to_problem = |source| HoustonProblem::CouldNotCreateMarker {
            path: self.path.to_string(),
            source,
        };
        if let Some(parent) = self.path.parent() {
            Fs::create_dir_all(parent).map_err(to_problem)?;
        }
        Fs::create_empty_file(&self.path).map_err(to_problem)?;
        tracing::info!("marked installation complete at {}", self.path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use assert_fs::TempDir;
    use camino::Utf8PathBuf;
    use rstest::{fixture, rstest};
    use speculoos::prelude::*;

    use super::Marker;

    #[fixture]
    fn home() -> TempDir {
        TempDir::new().unwrap()
    }

    fn marker_in(home: &TempDir) -> Marker {
        let home = Utf8PathBuf::try_from(home.path().to_path_buf()).unwrap();
        Marker::new(home.join("nested").join("HearthstoneNerdLinux").join("installed"))
    }

    #[rstest]
    fn it_is_not_installed_without_a_marker(home: TempDir) {
        let marker = marker_in(&home);
        assert_that!(marker.is_installed()).is_ok().is_false();
    }

    #[rstest]
    fn it_is_installed_after_marking(home: TempDir) {
        let marker = marker_in(&home);
        marker.mark_installed().unwrap();
        assert_that!(marker.is_installed()).is_ok().is_true();
    }

    #[rstest]
    fn it_can_be_marked_twice(home: TempDir) {
        let marker = marker_in(&home);
        assert_that!(marker.mark_installed()).is_ok();
        assert_that!(marker.mark_installed()).is_ok();
        assert_that!(marker.is_installed()).is_ok().is_true();
    }

    #[cfg(unix)]
    #[rstest]
    fn it_reports_unreadable_locations(home: TempDir) {
        use std::os::unix::fs::PermissionsExt;

        let locked = home.path().join("locked");
        std::fs::create_dir(&locked).unwrap();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o000)).unwrap();

        // privileged users see through directory permissions
        if std::fs::read_dir(&locked).is_ok() {
            std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
            return;
        }
        let marker = Marker::new(
            Utf8PathBuf::try_from(locked.join("inner").join("installed")).unwrap(),
        );

        let result = marker.is_installed();
        std::fs::set_permissions(&locked, std::fs::Permissions::from_mode(0o755)).unwrap();
        assert_that!(result).is_err();
    }
}
