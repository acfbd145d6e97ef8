// Hash worker pool module
// Fixed-size pool of threads mapping file paths to SHA-1 digests

use crate::error::Sha1CsvError;
use crossbeam_channel::bounded;
use sha1::{Digest, Sha1};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::thread;
use tracing::{error, trace};

/// Default number of concurrent hash workers
pub const DEFAULT_WORKERS: usize = 10;

/// Default streaming read buffer size (1MB)
pub const DEFAULT_BUFFER_SIZE: usize = 1024 * 1024;

/// One successfully hashed file: path plus lowercase hex SHA-1 digest
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileDigest {
    pub path: PathBuf,
    pub sha1: String,
}

/// Pool of hash workers fed from a shared bounded work queue
pub struct HashPool {
    workers: usize,
    buffer_size: usize,
}

impl HashPool {
    /// Create a new HashPool with default settings
    pub fn new() -> Self {
        Self {
            workers: DEFAULT_WORKERS,
            buffer_size: DEFAULT_BUFFER_SIZE,
        }
    }

    /// Set the number of concurrent workers (clamped to at least 1)
    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers.max(1);
        self
    }

    /// Set the streaming read buffer size
    pub fn with_buffer_size(mut self, buffer_size: usize) -> Self {
        self.buffer_size = buffer_size.max(1);
        self
    }

    /// Hash every path in `files`, returning one record per readable file
    ///
    /// Paths are distributed over a bounded work queue consumed by exactly
    /// `workers` threads; each path is taken by exactly one worker. Files
    /// that fail to open or read are logged and omitted from the result,
    /// the run itself never fails. Result order is completion order.
    pub fn run(&self, files: Vec<PathBuf>) -> Vec<FileDigest> {
        // Bounded queue gives the producer backpressure; the result channel
        // is pre-sized to the file count so workers never block sending
        let (work_tx, work_rx) = bounded::<PathBuf>(self.workers);
        let (result_tx, result_rx) = bounded::<FileDigest>(files.len());

        let mut handles = Vec::with_capacity(self.workers);
        for worker_id in 0..self.workers {
            let work_rx = work_rx.clone();
            let result_tx = result_tx.clone();
            let buffer_size = self.buffer_size;

            handles.push(thread::spawn(move || {
                // Runs until the queue is closed and drained
                for path in work_rx.iter() {
                    match hash_file(&path, buffer_size) {
                        Ok(sha1) => {
                            trace!(
                                worker_id,
                                file = %path.display(),
                                sha1sum = %sha1,
                                "finished processing file"
                            );
                            // Send only fails if the receiver is gone, which
                            // cannot happen before the join below
                            let _ = result_tx.send(FileDigest { path, sha1 });
                        }
                        Err(e) => {
                            error!(worker_id, file = %path.display(), "{}", e);
                        }
                    }
                }
            }));
        }

        // Only the worker clones keep the channels alive past this point
        drop(work_rx);
        drop(result_tx);

        for path in files {
            if work_tx.send(path).is_err() {
                // All workers gone (panicked); nothing left to feed
                break;
            }
        }
        drop(work_tx);

        // Completion barrier: the result channel is safe to drain only
        // once every worker has exited
        for handle in handles {
            if handle.join().is_err() {
                error!("hash worker panicked");
            }
        }

        result_rx.into_iter().collect()
    }
}

impl Default for HashPool {
    fn default() -> Self {
        Self::new()
    }
}

/// Compute the lowercase hex SHA-1 of a file's byte content, streaming
/// through a fixed-size buffer so memory stays bounded for large files
pub fn hash_file(path: &Path, buffer_size: usize) -> Result<String, Sha1CsvError> {
    let mut file = File::open(path).map_err(|e| {
        Sha1CsvError::from_io_error(e, "opening", Some(path.to_path_buf()))
    })?;

    let mut hasher = Sha1::new();
    let mut buffer = vec![0u8; buffer_size];

    loop {
        let bytes_read = file.read(&mut buffer).map_err(|e| {
            Sha1CsvError::from_io_error(e, "reading", Some(path.to_path_buf()))
        })?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
    }

    Ok(bytes_to_hex(&hasher.finalize()))
}

fn bytes_to_hex(bytes: &[u8]) -> String {
    bytes.iter()
        .map(|b| format!("{:02x}", b))
        .collect()
}
