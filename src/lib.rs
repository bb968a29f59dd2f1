//! Declarative validation of uploaded and on-disk files before they are
//! persisted or processed further.
//!
//! A [`RuleSet`] describes what an acceptable file looks like (size cap,
//! allowed extensions, image dimension bounds), a [`FileSource`] names the
//! file under validation, and a [`FileValidator`] runs the checks:
//!
//! ```no_run
//! use upload_validator::{FileSource, FileValidator, RuleSet};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let rules = RuleSet::builder()
//!     .max_size_mb(2.0)
//!     .extensions(["jpg", "png"])
//!     .width_range("100:1920")
//!     .build()?;
//!
//! let validator = FileValidator::new(rules);
//! let report = validator.validate(&FileSource::from_path("photo.png"))?;
//!
//! if !report.ok() {
//!     for message in report.messages() {
//!         eprintln!("{message}");
//!     }
//! }
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod files;
pub mod rules;

pub use config::ValidationSettings;
pub use error::{RuleError, UnreadableFile};
pub use files::{
    extension_of, DiskStat, FileSource, FileStat, FileValidator, HeaderProbe, ImageProbe,
    TransportError, UploadDescriptor, ValidationReport, Violation,
};
pub use rules::{Dimension, RuleSet, RuleSetBuilder, RuleSpec};
