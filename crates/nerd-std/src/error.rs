use thiserror::Error;

#[derive(Error, Debug)]
pub enum NerdStdError {
    /// AdhocError comes from the anyhow crate
    #[error(transparent)]
    AdhocError(#[from] anyhow::Error),

    /// This error is thrown when a path exists but is not a regular file
    #[error("\"{path}\" exists but is not a file.")]
    NotAFile {
        /// The offending path
        path: String,
    },
}
