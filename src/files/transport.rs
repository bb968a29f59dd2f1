//! Classification of upload-transport error codes.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Code reported by the transport when the user submitted no file at all.
pub(crate) const CODE_NO_FILE: u32 = 4;

/// Why the transport layer failed to deliver a file, keyed by the fixed
/// integer codes the upload-handling layer reports.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransportError {
    #[error("file size exceeds the server upload limit")]
    SizeExceedsServerLimit,

    #[error("file size exceeds the limit declared by the form")]
    SizeExceedsClientLimit,

    #[error("file was only partially uploaded")]
    PartialUpload,

    #[error("no file was selected")]
    NoFileSelected,

    #[error("server is missing its temporary upload directory")]
    MissingTempDir,

    #[error("server failed to write the uploaded file to disk")]
    WriteFailed,

    #[error("upload failed with transport error code {0}")]
    Unknown(u32),
}

impl TransportError {
    /// Maps a transport code to its classification. Zero means the transfer
    /// succeeded and yields `None`; unrecognized non-zero codes are kept
    /// verbatim in [`TransportError::Unknown`].
    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => None,
            1 => Some(Self::SizeExceedsServerLimit),
            2 => Some(Self::SizeExceedsClientLimit),
            3 => Some(Self::PartialUpload),
            CODE_NO_FILE => Some(Self::NoFileSelected),
            6 => Some(Self::MissingTempDir),
            7 => Some(Self::WriteFailed),
            other => Some(Self::Unknown(other)),
        }
    }

    /// Codes 1 and 2 both mean the file was too large to transfer.
    pub fn is_size_limit(self) -> bool {
        matches!(
            self,
            Self::SizeExceedsServerLimit | Self::SizeExceedsClientLimit
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_means_success() {
        assert_eq!(TransportError::from_code(0), None);
    }

    #[test]
    fn known_codes_map_to_their_classification() {
        assert_eq!(
            TransportError::from_code(1),
            Some(TransportError::SizeExceedsServerLimit)
        );
        assert_eq!(
            TransportError::from_code(2),
            Some(TransportError::SizeExceedsClientLimit)
        );
        assert_eq!(
            TransportError::from_code(3),
            Some(TransportError::PartialUpload)
        );
        assert_eq!(
            TransportError::from_code(4),
            Some(TransportError::NoFileSelected)
        );
        assert_eq!(
            TransportError::from_code(6),
            Some(TransportError::MissingTempDir)
        );
        assert_eq!(
            TransportError::from_code(7),
            Some(TransportError::WriteFailed)
        );
    }

    #[test]
    fn unrecognized_codes_keep_their_value() {
        assert_eq!(
            TransportError::from_code(5),
            Some(TransportError::Unknown(5))
        );
        assert_eq!(
            TransportError::from_code(42).map(|e| e.to_string()),
            Some("upload failed with transport error code 42".to_string())
        );
    }

    #[test]
    fn only_the_first_two_codes_are_the_size_family() {
        assert!(TransportError::SizeExceedsServerLimit.is_size_limit());
        assert!(TransportError::SizeExceedsClientLimit.is_size_limit());
        assert!(!TransportError::PartialUpload.is_size_limit());
        assert!(!TransportError::Unknown(5).is_size_limit());
    }
}
