// Centralized error handling module
// Provides error types with path and operation context for all stages

use std::fmt;
use std::io;
use std::path::PathBuf;

/// Main error type for the sha12csv tool
/// Provides context-rich error messages with file paths and operations
#[derive(Debug)]
pub enum Sha1CsvError {
    /// Traversal errors (fatal, abort before any hashing)
    DirectoryNotFound { path: PathBuf },
    PermissionDenied { path: PathBuf, operation: String },
    IoError { path: Option<PathBuf>, operation: String, source: io::Error },

    /// Final CSV write errors (fatal, no partial output retained)
    OutputWriteError { path: PathBuf, source: io::Error },
}

impl fmt::Display for Sha1CsvError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Sha1CsvError::DirectoryNotFound { path } => {
                write!(f, "Directory not found: {}\n", path.display())?;
                write!(f, "Suggestion: Check that the directory path is correct and the directory exists")
            }
            Sha1CsvError::PermissionDenied { path, operation } => {
                write!(f, "Permission denied while {} {}\n", operation, path.display())?;
                write!(f, "Suggestion: Check file permissions or run with appropriate privileges")
            }
            Sha1CsvError::IoError { path, operation, source } => {
                if let Some(p) = path {
                    write!(f, "I/O error while {} {}: {}\n", operation, p.display(), source)?;
                } else {
                    write!(f, "I/O error while {}: {}\n", operation, source)?;
                }
                write!(f, "Suggestion: Check file permissions and disk space")
            }
            Sha1CsvError::OutputWriteError { path, source } => {
                write!(f, "Failed to write output file {}: {}\n", path.display(), source)?;
                write!(f, "Suggestion: Check disk space and write permissions")
            }
        }
    }
}

impl std::error::Error for Sha1CsvError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Sha1CsvError::IoError { source, .. } => Some(source),
            Sha1CsvError::OutputWriteError { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl Sha1CsvError {
    /// Create an error from an io::Error with context about the operation
    /// and optional path, specializing the common error kinds
    pub fn from_io_error(err: io::Error, operation: &str, path: Option<PathBuf>) -> Self {
        match err.kind() {
            io::ErrorKind::NotFound => {
                if let Some(p) = path {
                    if operation.contains("directory") || operation.contains("walking") {
                        Sha1CsvError::DirectoryNotFound { path: p }
                    } else {
                        Sha1CsvError::IoError {
                            path: Some(p),
                            operation: operation.to_string(),
                            source: err,
                        }
                    }
                } else {
                    Sha1CsvError::IoError {
                        path: None,
                        operation: operation.to_string(),
                        source: err,
                    }
                }
            }
            io::ErrorKind::PermissionDenied => {
                if let Some(p) = path {
                    Sha1CsvError::PermissionDenied {
                        path: p,
                        operation: operation.to_string(),
                    }
                } else {
                    Sha1CsvError::IoError {
                        path: None,
                        operation: operation.to_string(),
                        source: err,
                    }
                }
            }
            _ => Sha1CsvError::IoError {
                path,
                operation: operation.to_string(),
                source: err,
            },
        }
    }
}

// Default From implementation for io::Error (without context)
impl From<io::Error> for Sha1CsvError {
    fn from(err: io::Error) -> Self {
        Sha1CsvError::from_io_error(err, "unknown operation", None)
    }
}
