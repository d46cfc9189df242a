//! Detection of installed image processors
//!
//! Probes the host for known processor binaries through an injectable
//! [`BinaryProbe`] capability, so tests never touch the real file system or
//! process table.

use crate::config::ImageProcessor;
use log::debug;

/// Binary names probed for the ImageMagick/GraphicsMagick family, in priority order
pub const MAGICK_BINARIES: [&str; 3] = ["magick", "convert", "gm"];

/// Binary name probed for libvips
pub const VIPS_BINARY: &str = "vips";

/// Capability for checking whether a binary is executable on this host
pub trait BinaryProbe: Send + Sync {
    /// Returns `true` when `binary_name` can be executed on this host
    fn is_available(&self, binary_name: &str) -> bool;
}

impl<F> BinaryProbe for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn is_available(&self, binary_name: &str) -> bool {
        self(binary_name)
    }
}

/// Default probe backed by a lookup on the executable search path
#[derive(Debug, Clone, Copy, Default)]
pub struct PathProbe;

impl BinaryProbe for PathProbe {
    fn is_available(&self, binary_name: &str) -> bool {
        which::which(binary_name).is_ok()
    }
}

/// Detect which supported image processor is installed
///
/// Candidates are probed in a fixed priority order: the ImageMagick family
/// (`magick`, `convert`, `gm`) before libvips. The first matching family
/// wins; probing stops at the first hit within the family. Returns `None`
/// when no candidate probes true.
pub fn detect_image_processor(probe: &dyn BinaryProbe) -> Option<ImageProcessor> {
    if MAGICK_BINARIES
        .iter()
        .any(|binary| probe.is_available(binary))
    {
        debug!("Detected ImageMagick/GraphicsMagick family image processor");
        return Some(ImageProcessor::Magick);
    }

    if probe.is_available(VIPS_BINARY) {
        debug!("Detected libvips image processor");
        return Some(ImageProcessor::Vips);
    }

    debug!("No supported image processor found");
    None
}
