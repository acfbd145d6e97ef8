// Result collection and CSV output module

use crate::error::Sha1CsvError;
use crate::pool::FileDigest;
use std::fs;
use std::path::{Path, PathBuf};

/// Output file path for a given base name: `<name>.csv` in the CWD
pub fn csv_path(name: &str) -> PathBuf {
    PathBuf::from(format!("{}.csv", name))
}

/// Write one `<path>, <digest>` line per record to `output`
///
/// No header row, no quoting of paths. The whole buffer is assembled in
/// memory and written in a single call, truncating any existing file.
/// Zero records still produce an (empty) output file.
pub fn write_csv(records: &[FileDigest], output: &Path) -> Result<(), Sha1CsvError> {
    let mut buffer = String::new();
    for record in records {
        buffer.push_str(&format!("{}, {}\n", record.path.display(), record.sha1));
    }

    fs::write(output, buffer.as_bytes()).map_err(|e| Sha1CsvError::OutputWriteError {
        path: output.to_path_buf(),
        source: e,
    })
}
