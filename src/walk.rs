// Directory walking module
// Recursive traversal producing the complete list of paths to hash

use crate::error::Sha1CsvError;
use std::fs;
use std::path::{Path, PathBuf};

/// Recursively collect every non-directory entry under `root`
///
/// Anything under a directory named exactly `.git` is skipped. Directories
/// themselves are never returned. Any traversal error aborts the whole
/// enumeration: no partial file list is ever handed to the pool.
pub fn collect_files(root: &Path) -> Result<Vec<PathBuf>, Sha1CsvError> {
    if !root.exists() {
        return Err(Sha1CsvError::DirectoryNotFound {
            path: root.to_path_buf(),
        });
    }

    let mut files = Vec::new();
    collect_files_recursive(root, &mut files)?;
    Ok(files)
}

fn collect_files_recursive(dir: &Path, files: &mut Vec<PathBuf>) -> Result<(), Sha1CsvError> {
    let entries = fs::read_dir(dir).map_err(|e| {
        Sha1CsvError::from_io_error(e, "reading directory", Some(dir.to_path_buf()))
    })?;

    for entry_result in entries {
        let entry = entry_result.map_err(|e| {
            Sha1CsvError::from_io_error(e, "reading directory entry", Some(dir.to_path_buf()))
        })?;
        let path = entry.path();

        let file_type = entry.file_type().map_err(|e| {
            Sha1CsvError::from_io_error(e, "reading metadata for", Some(path.clone()))
        })?;

        if file_type.is_dir() {
            // Skip .git subtrees entirely; a plain file named .git still counts
            if entry.file_name() == ".git" {
                continue;
            }
            collect_files_recursive(&path, files)?;
        } else {
            // Non-directory entries (regular files, symlinks, special files)
            // are all handed to the pool; unreadable ones get skipped there
            files.push(path);
        }
    }

    Ok(())
}
