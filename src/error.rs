//! Ways in which a run can fail

use std::{fmt, io, path::PathBuf};

/// Result type used throughout the pipeline
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Everything that can end a run early
#[derive(Debug)]
pub enum Error {
    /// No input path was given on the command line
    Usage,

    /// The input path does not point to an existing file
    NotFound(PathBuf),

    /// The input file does not have a `.txt` extension
    InvalidExtension(PathBuf),

    /// The sort order answer was not recognized
    ///
    /// Holds the answer that was given, or `None` if input ended before one
    /// could be read.
    InvalidSortOrder(Option<Box<str>>),

    /// The input file could not be read
    Read { path: PathBuf, source: io::Error },

    /// The output file could not be written
    Write { path: PathBuf, source: io::Error },

    /// Anything else
    Unexpected(anyhow::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Usage => write!(f, "Usage: {} \"path_to_F1.txt\"", env!("CARGO_PKG_NAME")),
            Self::NotFound(path) => write!(f, "Input file not found: {}", path.display()),
            Self::InvalidExtension(path) => {
                write!(f, "Input file must be a .txt file: {}", path.display())
            }
            Self::InvalidSortOrder(Some(answer)) => write!(
                f,
                "Invalid sort order {answer:?}. Use 'a' for ascending or 'd' for descending."
            ),
            Self::InvalidSortOrder(None) => write!(
                f,
                "No sort order given. Use 'a' for ascending or 'd' for descending."
            ),
            Self::Read { path, source } => {
                write!(f, "Error reading file {}: {source}", path.display())
            }
            Self::Write { path, source } => {
                write!(f, "Error writing to file {}: {source}", path.display())
            }
            Self::Unexpected(e) => write!(f, "Unexpected error: {e:#}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Read { source, .. } | Self::Write { source, .. } => Some(source),
            Self::Unexpected(e) => Some(e.as_ref()),
            Self::Usage
            | Self::NotFound(_)
            | Self::InvalidExtension(_)
            | Self::InvalidSortOrder(_) => None,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(e: anyhow::Error) -> Self {
        Self::Unexpected(e)
    }
}

impl From<dialoguer::Error> for Error {
    fn from(e: dialoguer::Error) -> Self {
        Self::Unexpected(anyhow::Error::new(e).context("reading the sort order"))
    }
}
