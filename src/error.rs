//! Error types shared across the crate.

use std::path::PathBuf;

use thiserror::Error;

/// The file could not be opened for reading.
///
/// This is raised from validation rather than recorded as a violation: an
/// unreadable path is an environment or caller defect and means validation
/// could not be attempted, not that the file content is invalid.
#[derive(Error, Debug)]
#[error("file is missing or not readable: {}", .path.display())]
pub struct UnreadableFile {
    pub path: PathBuf,
    #[source]
    pub source: Option<std::io::Error>,
}

/// A rule set that can never be satisfied or was written incorrectly.
/// Rejected at configuration time, before any file is touched.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RuleError {
    #[error("max_size_mb must be positive, got {0}")]
    NonPositiveSize(f64),

    #[error("malformed dimension range {0:?}, expected \"min:max\"")]
    MalformedRange(String),

    #[error("{axis} bounds are inverted: min {min} > max {max}")]
    InvertedBounds {
        axis: &'static str,
        min: u32,
        max: u32,
    },
}
