//! The validation core: runs a rule set against one file.

use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::models::FileSource;
use super::probe::{DiskStat, FileStat, HeaderProbe, ImageProbe};
use super::transport::TransportError;
use crate::error::UnreadableFile;
use crate::rules::RuleSet;

/// A single rule violation. Messages are parameterized here rather than
/// hard-coded at call sites, so a frontend can render or translate them
/// from the structured form.
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Violation {
    #[error("{0}")]
    Transport(TransportError),

    #[error("file is not a valid image")]
    NotAnImage,

    #[error("image width must be at least {min}px, got {actual}px")]
    WidthBelowMin { min: u32, actual: u32 },

    #[error("image width must be exactly {expected}px, got {actual}px")]
    WidthNotExact { expected: u32, actual: u32 },

    #[error("image width must be at most {max}px, got {actual}px")]
    WidthAboveMax { max: u32, actual: u32 },

    #[error("image height must be at least {min}px, got {actual}px")]
    HeightBelowMin { min: u32, actual: u32 },

    #[error("image height must be exactly {expected}px, got {actual}px")]
    HeightNotExact { expected: u32, actual: u32 },

    #[error("image height must be at most {max}px, got {actual}px")]
    HeightAboveMax { max: u32, actual: u32 },

    #[error("file size {size} bytes exceeds the limit of {max_mb} MB")]
    TooLarge { size: u64, max_mb: f64 },

    #[error("extension {extension:?} is not allowed, expected one of: {}", .allowed.join(", "))]
    ExtensionNotAllowed {
        extension: String,
        allowed: Vec<String>,
    },
}

/// Outcome of one validation run. Violation order follows the fixed check
/// order, so assertions against it are reproducible.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn ok(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    /// Rendered message per violation, in check order.
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().map(ToString::to_string).collect()
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }

    fn push(&mut self, violation: Violation) {
        self.violations.push(violation);
    }
}

/// Validates one file against a rule set.
///
/// Collaborators for filesystem facts and image dimensions are injected;
/// [`FileValidator::new`] wires up the real ones. The validator holds no
/// per-run state, so one instance can serve any number of validations,
/// concurrently included.
#[derive(Clone)]
pub struct FileValidator {
    rules: RuleSet,
    stat: Arc<dyn FileStat + Send + Sync>,
    probe: Arc<dyn ImageProbe + Send + Sync>,
}

impl FileValidator {
    pub fn new(rules: RuleSet) -> Self {
        Self::with_collaborators(rules, DiskStat, HeaderProbe)
    }

    pub fn with_collaborators(
        rules: RuleSet,
        stat: impl FileStat + Send + Sync + 'static,
        probe: impl ImageProbe + Send + Sync + 'static,
    ) -> Self {
        Self {
            rules,
            stat: Arc::new(stat),
            probe: Arc::new(probe),
        }
    }

    pub fn rules(&self) -> &RuleSet {
        &self.rules
    }

    /// Runs every configured check against `source` and returns a fresh
    /// report.
    ///
    /// A non-zero transport code short-circuits with that single violation.
    /// An unreadable file is an environment defect and raises instead of
    /// being reported. Every other failed check accumulates: image bounds
    /// first, then size, then extension.
    pub fn validate(&self, source: &FileSource) -> Result<ValidationReport, UnreadableFile> {
        let mut report = ValidationReport::default();
        let path = source.path();

        tracing::debug!(path = %path.display(), "validating file");

        if let Some(error) = source.transport_code().and_then(TransportError::from_code) {
            tracing::warn!(%error, "upload transport failed");
            report.push(Violation::Transport(error));
            return Ok(report);
        }

        if !self.stat.is_readable(path) {
            tracing::warn!(path = %path.display(), "file is missing or not readable");
            return Err(UnreadableFile {
                path: path.to_path_buf(),
                source: None,
            });
        }

        if self.rules.requires_image() {
            match self.probe.dimensions(path) {
                Some((width, height)) => self.check_dimensions(width, height, &mut report),
                // Dimension rules are unanswerable without an image; the
                // size and extension checks below still run.
                None => report.push(Violation::NotAnImage),
            }
        }

        self.check_size(path, &mut report)?;
        self.check_extension(source.extension(), &mut report);

        tracing::debug!(
            ok = report.ok(),
            violations = report.violations().len(),
            "validation finished"
        );
        Ok(report)
    }

    fn check_dimensions(&self, width: u32, height: u32, report: &mut ValidationReport) {
        if let Some(min) = self.rules.min_width() {
            if width < min {
                report.push(Violation::WidthBelowMin { min, actual: width });
            }
        }
        if let Some(expected) = self.rules.exact_width() {
            if width != expected {
                report.push(Violation::WidthNotExact {
                    expected,
                    actual: width,
                });
            }
        }
        if let Some(max) = self.rules.max_width() {
            if width > max {
                report.push(Violation::WidthAboveMax { max, actual: width });
            }
        }
        if let Some(min) = self.rules.min_height() {
            if height < min {
                report.push(Violation::HeightBelowMin {
                    min,
                    actual: height,
                });
            }
        }
        if let Some(expected) = self.rules.exact_height() {
            if height != expected {
                report.push(Violation::HeightNotExact {
                    expected,
                    actual: height,
                });
            }
        }
        if let Some(max) = self.rules.max_height() {
            if height > max {
                report.push(Violation::HeightAboveMax {
                    max,
                    actual: height,
                });
            }
        }
    }

    fn check_size(
        &self,
        path: &Path,
        report: &mut ValidationReport,
    ) -> Result<(), UnreadableFile> {
        let Some(max_mb) = self.rules.max_size_mb() else {
            return Ok(());
        };

        // The readability probe passed, so a stat failure here is a race
        // with whatever removed the file; same hard failure either way.
        let size = self.stat.size_bytes(path).map_err(|e| UnreadableFile {
            path: path.to_path_buf(),
            source: Some(e),
        })?;

        // Strict greater-than: a file of exactly the limit passes.
        if size as f64 > max_mb * 1024.0 * 1024.0 {
            report.push(Violation::TooLarge { size, max_mb });
        }
        Ok(())
    }

    fn check_extension(&self, extension: &str, report: &mut ValidationReport) {
        let allowed = self.rules.allowed_extensions();
        if allowed.is_empty() || allowed.contains(extension) {
            return;
        }

        let mut allowed: Vec<String> = allowed.iter().cloned().collect();
        allowed.sort();
        report.push(Violation::ExtensionNotAllowed {
            extension: extension.to_string(),
            allowed,
        });
    }
}
