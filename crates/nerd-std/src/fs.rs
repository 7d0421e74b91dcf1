use std::fs::{self, OpenOptions};
use std::io::ErrorKind;

use anyhow::{anyhow, Context};
use camino::Utf8Path;

use crate::NerdStdError;

/// Interact with a file system
#[derive(Default, Copy, Clone)]
pub struct Fs {}

impl Fs {
    /// reads a file from disk, returning `None` when nothing exists at `path`
    pub fn read_file_if_exists<P>(path: P) -> Result<Option<String>, NerdStdError>
    where
        P: AsRef<Utf8Path>,
    {
        let path = path.as_ref();
        match fs::metadata(path) {
            Ok(metadata) => {
                if metadata.is_file() {
                    tracing::info!("reading {} from disk", &path);
                    let contents = fs::read_to_string(path)
                        .with_context(|| format!("could not read {}", &path))?;
                    Ok(Some(contents))
                } else {
                    Err(NerdStdError::NotAFile {
                        path: path.to_string(),
                    })
                }
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("nothing to read at {}", &path);
                Ok(None)
            }
            Err(e) => Err(anyhow!("could not inspect '{}'", path).context(e).into()),
        }
    }

    /// checks whether anything exists at `path`.
    ///
    /// Only a "not found" answer from the OS means `false`; any other failure
    /// (permission denied, broken mount, ...) is returned as an error.
    pub fn path_exists<P>(path: P) -> Result<bool, NerdStdError>
    where
        P: AsRef<Utf8Path>,
    {
        let path = path.as_ref();
        match fs::metadata(path) {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(anyhow!("could not check whether '{}' exists", path)
                .context(e)
                .into()),
        }
    }

    /// creates a directory and any missing parents
    pub fn create_dir_all<P>(path: P) -> Result<(), NerdStdError>
    where
        P: AsRef<Utf8Path>,
    {
        let path = path.as_ref();
        tracing::info!("creating {} directory", &path);
        fs::create_dir_all(path)
            .with_context(|| format!("could not create {} directory", &path))?;
        Ok(())
    }

    /// creates an empty file, truncating it if it already exists
    pub fn create_empty_file<P>(path: P) -> Result<(), NerdStdError>
    where
        P: AsRef<Utf8Path>,
    {
        let path = path.as_ref();
        tracing::info!("creating empty file {}", &path);
        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(path)
            .with_context(|| format!("tried to create {} but was unable to do so", &path))?;
        file.sync_all()
            .with_context(|| format!("could not sync {} to disk", &path))?;
        Ok(())
    }
}
