use std::io;

use thiserror::Error;

/// InstallerError is the type of Error that occurred while fetching or unpacking a download.
#[derive(Error, Debug)]
pub enum InstallerError {
    /// Something went wrong with system I/O
    #[error(transparent)]
    IoError(#[from] io::Error),

    /// The download location could not be parsed
    #[error("'{url}' is not a valid URL")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// A file could not be opened or created
    #[error("could not open '{path}'")]
    Open {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Writing to a file that was already open failed
    #[error("could not write to '{path}'")]
    Write {
        path: String,
        #[source]
        source: io::Error,
    },

    /// Something went wrong while making an HTTP request
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),

    /// The archive could not be read
    #[error(transparent)]
    ZipError(#[from] zip::result::ZipError),

    /// An archive entry tried to escape the extraction directory
    #[error("illegal file path '{entry}': it would be extracted outside of '{destination}'")]
    IllegalEntryPath { entry: String, destination: String },

    /// A specified path was not valid UTF-8
    #[error(transparent)]
    PathNotUtf8(#[from] camino::FromPathBufError),
}
