//! Getting third-party software onto disk.
//!
//! Two building blocks live here: a [`Fetcher`] that streams an HTTP(S)
//! resource into a local file, and [`extract_zip`], which unpacks a zip
//! archive while refusing any entry that would land outside of the
//! destination directory.
//!
//! Neither verifies what it downloads or unpacks. Neither retries.

mod download;
mod error;
mod extract;

pub use download::Fetcher;
pub use error::InstallerError;
pub use extract::extract_zip;
