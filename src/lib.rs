#![allow(clippy::missing_errors_doc)]
#![allow(clippy::uninlined_format_args)]

//! # bgcompose
//!
//! Composes two image files — an RGB color image and a grayscale alpha
//! mask — into a single image with transparency, delegating all pixel work
//! to whichever external image processor is installed on the host
//! (ImageMagick, GraphicsMagick, or libvips).
//!
//! The typical producer of these inputs is a background-removal service
//! that returns the full-size color image and the segmentation mask as
//! separate downloads; this crate merges them locally into the final
//! transparent output.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bgcompose::{ComposerConfig, ImageComposer};
//!
//! # fn main() -> bgcompose::Result<()> {
//! // Detect the installed processor once, then compose.
//! let composer = ImageComposer::new(ComposerConfig::detect());
//! composer.compose("color.jpg", "alpha.png", "no-bg.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! ## Processor Selection
//!
//! The processor can also be pinned explicitly instead of detected:
//!
//! ```rust,no_run
//! use bgcompose::{ComposerConfig, ImageComposer, ImageProcessor};
//!
//! # fn main() -> bgcompose::Result<()> {
//! let composer = ImageComposer::new(ComposerConfig::new(ImageProcessor::Vips));
//! composer.compose("color.jpg", "alpha.png", "no-bg.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! Composition fails with a descriptive error when no processor is
//! configured or when the configured value matches no supported backend;
//! failures of the external pipeline itself propagate unchanged.

mod backends;
pub mod composer;
pub mod config;
pub mod detection;
pub mod error;
pub mod runner;

// Public API exports
pub use composer::ImageComposer;
pub use config::{ComposerConfig, ImageProcessor};
pub use detection::{
    detect_image_processor, BinaryProbe, PathProbe, MAGICK_BINARIES, VIPS_BINARY,
};
pub use error::{ComposeError, Result};
pub use runner::{CommandRunner, Invocation, SystemCommandRunner};

/// Compose using whatever image processor is installed on this host
///
/// Convenience wrapper that runs backend detection with the default PATH
/// probe and performs a single composition. Callers doing repeated
/// compositions should build an [`ImageComposer`] once instead, so
/// detection is not repeated per call.
///
/// # Errors
///
/// Returns `ComposeError::NoProcessorConfigured` when no supported binary
/// is installed; execution failures of the external pipeline propagate
/// unchanged.
///
/// # Examples
///
/// ```rust,no_run
/// # fn main() -> bgcompose::Result<()> {
/// bgcompose::compose_with_detected_processor("color.jpg", "alpha.png", "no-bg.png")?;
/// # Ok(())
/// # }
/// ```
pub fn compose_with_detected_processor<C, A, D>(color: C, alpha: A, destination: D) -> Result<()>
where
    C: AsRef<std::path::Path>,
    A: AsRef<std::path::Path>,
    D: AsRef<std::path::Path>,
{
    ImageComposer::new(ComposerConfig::detect()).compose(color, alpha, destination)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_compiles() {
        // Basic compilation test to ensure API is well-formed
        let _config = ComposerConfig::default();
    }
}
