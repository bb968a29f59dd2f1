pub mod models;
pub mod probe;
pub mod transport;
pub mod validation;

pub use models::{extension_of, FileSource, UploadDescriptor};
pub use probe::{DiskStat, FileStat, HeaderProbe, ImageProbe};
pub use transport::TransportError;
pub use validation::{FileValidator, ValidationReport, Violation};
