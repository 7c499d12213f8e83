use crate::database::DbError;
use std::path::PathBuf;

/// Failures that halt a run.
///
/// Statement errors never reach this level on their own: the executor
/// policies either tolerate or ignore them. Anything that does arrive
/// here stops the remaining queue and ends the process with status 1.
#[derive(Debug)]
pub enum Error {
    /// A creation SQL resource is missing.
    ResourceNotFound(PathBuf),
    /// A creation SQL resource exists but could not be read.
    Resource(PathBuf, std::io::Error),
    /// A command token other than `setup` or `clean`.
    InvalidCommand(String),
    /// A database failure the executor did not recover.
    Database(DbError),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ResourceNotFound(path) => write!(f, "resource not found: {}", path.display()),
            Self::Resource(path, e) => write!(f, "unreadable resource {}: {}", path.display(), e),
            Self::InvalidCommand(token) => write!(f, "unrecognized command: {}", token),
            Self::Database(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Resource(_, e) => Some(e),
            Self::Database(e) => Some(e),
            _ => None,
        }
    }
}

impl From<DbError> for Error {
    fn from(e: DbError) -> Self {
        Self::Database(e)
    }
}
