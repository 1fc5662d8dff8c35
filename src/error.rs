// src/error.rs

//! Error type for repository packaging
//!
//! Every failure the packager can hit is a filesystem-class failure. The
//! variants only differ in which operation failed and on which path, so the
//! single message printed at the top level says where the run stopped.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Packaging errors
#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to create directory {}", path.display())]
    CreateDir { path: PathBuf, source: io::Error },

    #[error("failed to write {}", path.display())]
    Write { path: PathBuf, source: io::Error },

    #[error("failed to read {}", path.display())]
    Read { path: PathBuf, source: io::Error },

    #[error("failed to serialize manifest {}: {message}", path.display())]
    Xml { path: PathBuf, message: String },

    #[error("failed to write archive {}", path.display())]
    Archive {
        path: PathBuf,
        source: zip::result::ZipError,
    },

    #[error("failed to walk {}", path.display())]
    Walk {
        path: PathBuf,
        source: walkdir::Error,
    },
}

impl Error {
    /// Path the failing operation was working on
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::CreateDir { path, .. }
            | Self::Write { path, .. }
            | Self::Read { path, .. }
            | Self::Xml { path, .. }
            | Self::Archive { path, .. }
            | Self::Walk { path, .. } => path,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
