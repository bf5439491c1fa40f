//! Errors the binary reports before exiting.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

use crate::error::Error;

/// Exit codes from `sysexits.h`.
mod exitcode {
    pub const USAGE: i32 = 64;
    pub const DATAERR: i32 = 65;
    pub const IOERR: i32 = 74;
}

/// Everything a command can fail with.
#[derive(Error, Debug)]
pub enum CliError {
    /// Rejected by the library.
    #[error("{0}")]
    Tree(#[from] Error),

    /// Reading or writing a file failed.
    #[error("{}: {source}", path.display())]
    Io {
        /// The file involved.
        path: PathBuf,
        /// What went wrong.
        #[source]
        source: io::Error,
    },

    /// Arguments clap accepted but the command can't use.
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// The process exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::InvalidArgs(_) => exitcode::USAGE,
            Self::Tree(_) => exitcode::DATAERR,
            Self::Io { .. } => exitcode::IOERR,
        }
    }
}

macro_rules! from_tree_error {
    ($($source:ty),+) => {
        $(
            impl From<$source> for CliError {
                fn from(e: $source) -> Self {
                    Self::Tree(e.into())
                }
            }
        )+
    };
}

from_tree_error!(
    crate::error::InputError,
    crate::error::BuildError,
    crate::error::FormatError,
    crate::error::SpeedError
);
