//!
//! The LLVM builder error.
//!

use std::path::PathBuf;
use std::process::ExitStatus;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The subprocess could not be started.
    #[error("{description} process: {source}")]
    CommandSpawn {
        /// The command description.
        description: String,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The subprocess exited with a non-zero status.
    #[error("{description} failed: {status}")]
    CommandFailed {
        /// The command description.
        description: String,
        /// The exit status.
        status: ExitStatus,
    },
    #[error("The LLVM source tree {0:?} does not exist")]
    SourceTreeMissing(PathBuf),
    #[error("Found more than one LLVM package: {0:?}")]
    AmbiguousArchive(Vec<PathBuf>),
    #[error("The `{0}` executable is not found. Please install it and try again")]
    ToolMissing(String),
}
