use nerd_std::NerdStdError;
use thiserror::Error;

/// HoustonProblem is the type of Error that occured.
#[derive(Error, Debug)]
pub enum HoustonProblem {
    /// DefaultConfigDirNotFound occurs when the default OS config directory can't be found.
    #[error("Could not determine default OS configuration directory.")]
    DefaultConfigDirNotFound,

    /// DefaultCacheDirNotFound occurs when the default OS cache directory can't be found.
    #[error("Could not determine default OS cache directory.")]
    DefaultCacheDirNotFound,

    /// HomeDirNotFound occurs when the current user's home directory can't be found.
    #[error("Could not find the home directory of the current user.")]
    HomeDirNotFound,

    /// CouldNotCheckMarker occurs when the marker's existence can't be determined.
    #[error("Could not determine whether '{path}' exists.")]
    CouldNotCheckMarker {
        /// Location of the marker file
        path: String,
        /// Underlying failure
        #[source]
        source: NerdStdError,
    },

    /// CouldNotCreateMarker occurs when the marker, or its directory, can't be created.
    #[error("Could not record a finished installation at '{path}'.")]
    CouldNotCreateMarker {
        /// Location of the marker file
        path: String,
        /// Underlying failure
        #[source]
        source: NerdStdError,
    },

    /// PathNotUtf8 occurs when Houston encounters a file path that is not valid UTF-8
    #[error(transparent)]
    PathNotUtf8(#[from] camino::FromPathBufError),
}
