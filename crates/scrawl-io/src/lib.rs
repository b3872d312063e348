//! scrawl-io - Surface and bitmap export
//!
//! Writes captured gestures to disk for inspection:
//!
//! - surfaces as 8-bit RGBA PNG (`png-format` feature)
//! - bitmaps as 1-bit grayscale PNG (`png-format` feature)
//! - bitmaps as plain-text PBM P1 (`pnm` feature)
//!
//! and reads them back.

mod error;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};

use scrawl_encode::Bitmap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tracing::debug;

/// On-disk bitmap format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BitmapFormat {
    /// 1-bit grayscale PNG
    Png,
    /// Plain PBM (P1)
    Pbm,
}

impl BitmapFormat {
    /// Guess the format from a file extension
    pub fn from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let ext = path.as_ref().extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "png" => Some(Self::Png),
            "pbm" => Some(Self::Pbm),
            _ => None,
        }
    }
}

fn format_for(path: &Path) -> IoResult<BitmapFormat> {
    BitmapFormat::from_path(path).ok_or_else(|| {
        IoError::UnsupportedFormat(format!("unknown bitmap extension: {}", path.display()))
    })
}

/// Write a bitmap to `path`, choosing the format from its extension
pub fn write_bitmap<P: AsRef<Path>>(bitmap: &Bitmap, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let format = format_for(path)?;
    let writer = BufWriter::new(File::create(path)?);
    debug!(path = %path.display(), ?format, "writing bitmap");
    match format {
        #[cfg(feature = "png-format")]
        BitmapFormat::Png => png::write_bitmap_png(bitmap, writer),
        #[cfg(feature = "pnm")]
        BitmapFormat::Pbm => pnm::write_pbm(bitmap, writer),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            other
        ))),
    }
}

/// Read a bitmap from `path`, choosing the format from its extension
pub fn read_bitmap<P: AsRef<Path>>(path: P) -> IoResult<Bitmap> {
    let path = path.as_ref();
    let format = format_for(path)?;
    let reader = BufReader::new(File::open(path)?);
    match format {
        #[cfg(feature = "png-format")]
        BitmapFormat::Png => png::read_bitmap_png(reader),
        #[cfg(feature = "pnm")]
        BitmapFormat::Pbm => pnm::read_pbm(reader),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{:?} support not enabled",
            other
        ))),
    }
}

/// Write a surface to `path` as PNG
#[cfg(feature = "png-format")]
pub fn write_surface<P: AsRef<Path>>(surface: &scrawl_core::Surface, path: P) -> IoResult<()> {
    let path = path.as_ref();
    debug!(path = %path.display(), "writing surface");
    png::write_png(surface, BufWriter::new(File::create(path)?))
}

/// Read a PNG file into a surface
#[cfg(feature = "png-format")]
pub fn read_surface<P: AsRef<Path>>(path: P) -> IoResult<scrawl_core::Surface> {
    png::read_png(BufReader::new(File::open(path)?))
}
