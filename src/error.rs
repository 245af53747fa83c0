// SPDX-License-Identifier: FSL-1.1

/// Errors created by this library
#[derive(Clone, Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Stack error
    #[error(transparent)]
    Stack(#[from] StackError),

    /// Failed to write to the print sink
    #[error("I/O error: {0}")]
    Io(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

/// Stack errors created by this library
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum StackError {
    /// Access operation attempted on a stack holding zero values
    #[error("{0} on an empty container")]
    EmptyContainer(&'static str),
}
