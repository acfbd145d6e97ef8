// Library module for sha12csv
// Re-exports modules for use in integration tests and external crates

pub mod error;
pub mod output;
pub mod pool;
pub mod walk;

// Re-export commonly used types for convenience
pub use error::Sha1CsvError;
pub use output::{csv_path, write_csv};
pub use pool::{FileDigest, HashPool};
pub use walk::collect_files;
