//! Collaborators the validator consults for file metadata.
//!
//! Both traits exist so tests can inject deterministic stand-ins; production
//! code uses [`DiskStat`] and [`HeaderProbe`].

use std::fs;
use std::io;
use std::path::Path;

use image::ImageReader;

/// Filesystem facts about the file under validation.
pub trait FileStat {
    fn is_readable(&self, path: &Path) -> bool;

    fn size_bytes(&self, path: &Path) -> io::Result<u64>;
}

/// Reports pixel dimensions for a decodable image, `None` otherwise.
/// A probe never fails; undecodable content is an answer, not an error.
pub trait ImageProbe {
    fn dimensions(&self, path: &Path) -> Option<(u32, u32)>;
}

/// Stat over the local filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiskStat;

impl FileStat for DiskStat {
    fn is_readable(&self, path: &Path) -> bool {
        fs::File::open(path).is_ok()
    }

    fn size_bytes(&self, path: &Path) -> io::Result<u64> {
        Ok(fs::metadata(path)?.len())
    }
}

/// Dimension probe that reads only the image header, never the pixel data.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderProbe;

impl ImageProbe for HeaderProbe {
    fn dimensions(&self, path: &Path) -> Option<(u32, u32)> {
        // Guess the format from the content, not the path: upload temp
        // files carry no meaningful extension.
        let reader = ImageReader::open(path).ok()?.with_guessed_format().ok()?;
        reader.into_dimensions().ok()
    }
}
