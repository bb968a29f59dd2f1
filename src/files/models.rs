//! File references handed to the validator.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use super::transport;

/// Upload metadata as handed over by the transport layer: where the bytes
/// landed, what the client called the file, and the transport's error code.
///
/// The original name matters: the temp path is something like
/// `/tmp/upload_8f2a01` and carries no meaningful extension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadDescriptor {
    pub temp_path: PathBuf,
    pub original_name: String,
    pub transport_code: Option<u32>,
}

impl UploadDescriptor {
    pub fn new(temp_path: impl Into<PathBuf>, original_name: impl Into<String>) -> Self {
        Self {
            temp_path: temp_path.into(),
            original_name: original_name.into(),
            transport_code: None,
        }
    }

    pub fn with_transport_code(mut self, code: u32) -> Self {
        self.transport_code = Some(code);
        self
    }
}

/// The file under validation. Exactly one mode per run: a plain path on
/// disk, or an upload descriptor from the transport layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FileSource {
    Path(PathBuf),
    Upload(UploadDescriptor),
}

impl FileSource {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        Self::Path(path.into())
    }

    pub fn from_upload(descriptor: UploadDescriptor) -> Self {
        Self::Upload(descriptor)
    }

    /// Where the bytes actually live.
    pub fn path(&self) -> &Path {
        match self {
            Self::Path(path) => path,
            Self::Upload(upload) => &upload.temp_path,
        }
    }

    /// Extension of the logical filename: for uploads the originally
    /// submitted name, otherwise the final component of the path.
    pub fn extension(&self) -> &str {
        match self {
            Self::Path(path) => path
                .file_name()
                .and_then(|name| name.to_str())
                .map(extension_of)
                .unwrap_or(""),
            Self::Upload(upload) => extension_of(&upload.original_name),
        }
    }

    pub fn transport_code(&self) -> Option<u32> {
        match self {
            Self::Path(_) => None,
            Self::Upload(upload) => upload.transport_code,
        }
    }

    /// Whether the client actually sent a file. False only for the
    /// "no file selected" transport code; an upload that failed any other
    /// way still counts as an attempt.
    pub fn was_submitted(&self) -> bool {
        self.transport_code() != Some(transport::CODE_NO_FILE)
    }
}

/// Substring after the last `.` of the final path component, or the empty
/// string when the name carries no extension. No case normalization.
pub fn extension_of(name: &str) -> &str {
    let base = name.rsplit(['/', '\\']).next().unwrap_or(name);
    match base.rsplit_once('.') {
        Some((_, extension)) => extension,
        None => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_the_last_dot_suffix() {
        assert_eq!(extension_of("photo.png"), "png");
        assert_eq!(extension_of("archive.tar.gz"), "gz");
        assert_eq!(extension_of("README"), "");
        assert_eq!(extension_of("trailing."), "");
        assert_eq!(extension_of("dir.v1/no_extension"), "");
        assert_eq!(extension_of("Photo.JPG"), "JPG");
    }

    #[test]
    fn path_mode_derives_extension_from_the_path() {
        let source = FileSource::from_path("/var/data/avatar.jpeg");
        assert_eq!(source.extension(), "jpeg");
        assert_eq!(source.path(), Path::new("/var/data/avatar.jpeg"));
        assert_eq!(source.transport_code(), None);
    }

    #[test]
    fn upload_mode_derives_extension_from_the_original_name() {
        let source = FileSource::from_upload(UploadDescriptor::new(
            "/tmp/upload_8f2a01",
            "holiday photo.png",
        ));

        assert_eq!(source.extension(), "png");
        assert_eq!(source.path(), Path::new("/tmp/upload_8f2a01"));
    }

    #[test]
    fn was_submitted_is_false_only_for_the_no_file_code() {
        let upload = |code| {
            FileSource::from_upload(
                UploadDescriptor::new("/tmp/x", "a.png").with_transport_code(code),
            )
        };

        assert!(!upload(4).was_submitted());
        assert!(upload(0).was_submitted());
        assert!(upload(1).was_submitted());
        assert!(upload(7).was_submitted());
        assert!(FileSource::from_upload(UploadDescriptor::new("/tmp/x", "a.png")).was_submitted());
        assert!(FileSource::from_path("a.png").was_submitted());
    }
}
