use std::{
    fs::{self, File, OpenOptions},
    io::{self, BufReader, Read, Write},
};

use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use zip::ZipArchive;

use crate::InstallerError;

const DEFAULT_DIR_MODE: u32 = 0o755;
const DEFAULT_FILE_MODE: u32 = 0o644;
const PERMISSION_BITS: u32 = 0o777;

/// Extracts every entry of the zip archive at `archive_path` into `destination`.
///
/// Entries are processed in archive order and extraction stops at the first
/// failure; entries written before that point are left on disk. Any entry
/// whose name would resolve outside of `destination` aborts the whole
/// extraction with [`InstallerError::IllegalEntryPath`].
pub fn extract_zip(archive_path: &Utf8Path, destination: &Utf8Path) -> Result<(), InstallerError> {
    let archive_file = File::open(archive_path).map_err(|source| InstallerError::Open {
        path: archive_path.to_string(),
        source,
    })?;
    let mut archive = ZipArchive::new(BufReader::new(archive_file))?;

    let destination = normalize(&Utf8PathBuf::try_from(std::path::absolute(destination)?)?);
    create_dir(&destination, DEFAULT_DIR_MODE)?;

    tracing::info!(
        "extracting {} entries from {} into {}",
        archive.len(),
        archive_path,
        destination
    );
    for index in 0..archive.len() {
        let mut entry = archive.by_index(index)?;
        let out_path = entry_destination(&destination, entry.name())?;
        let mode = entry.unix_mode().map(|mode| mode & PERMISSION_BITS);

        if entry.is_dir() {
            tracing::debug!("creating directory {}", out_path);
            create_dir(&out_path, mode.unwrap_or(DEFAULT_DIR_MODE))?;
        } else {
            tracing::debug!("writing {}", out_path);
            if let Some(parent) = out_path.parent() {
                create_dir(parent, DEFAULT_DIR_MODE)?;
            }
            write_entry(&mut entry, &out_path, mode.unwrap_or(DEFAULT_FILE_MODE))?;
        }
    }
    Ok(())
}

/// Resolves where `entry_name` should be written, refusing anything that is
/// not strictly inside of `destination`. `destination` must already be normalized.
fn entry_destination(
    destination: &Utf8Path,
    entry_name: &str,
) -> Result<Utf8PathBuf, InstallerError> {
    let candidate = normalize(&destination.join(entry_name));
    if candidate.starts_with(destination) && candidate != destination {
        Ok(candidate)
    } else {
        Err(InstallerError::IllegalEntryPath {
            entry: entry_name.to_string(),
            destination: destination.to_string(),
        })
    }
}

/// Lexically removes `.` and `..` components without touching the filesystem.
fn normalize(path: &Utf8Path) -> Utf8PathBuf {
    let mut normalized = Utf8PathBuf::new();
    for component in path.components() {
        match component {
            Utf8Component::CurDir => {}
            Utf8Component::ParentDir => match normalized.components().next_back() {
                Some(Utf8Component::Normal(_)) => {
                    normalized.pop();
                }
                Some(Utf8Component::RootDir) | Some(Utf8Component::Prefix(_)) => {}
                _ => normalized.push(".."),
            },
            other => normalized.push(other.as_str()),
        }
    }
    normalized
}

fn write_entry<R: Read>(entry: &mut R, out_path: &Utf8Path, mode: u32) -> Result<(), InstallerError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    let mut out_file = options
        .open(out_path)
        .map_err(|source| InstallerError::Open {
            path: out_path.to_string(),
            source,
        })?;
    let to_write_error = |source| InstallerError::Write {
        path: out_path.to_string(),
        source,
    };
    io::copy(entry, &mut out_file).map_err(to_write_error)?;
    out_file.flush().map_err(to_write_error)?;
    out_file.sync_all().map_err(to_write_error)?;
    Ok(())
}

fn create_dir(path: &Utf8Path, mode: u32) -> Result<(), InstallerError> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(mode);
    }
    #[cfg(not(unix))]
    let _ = mode;

    builder.create(path).map_err(|source| InstallerError::Open {
        path: path.to_string(),
        source,
    })
}
