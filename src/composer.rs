//! Image composer that delegates to the configured external processor

use crate::backends;
use crate::config::{ComposerConfig, ImageProcessor};
use crate::detection::{BinaryProbe, PathProbe};
use crate::error::{ComposeError, Result};
use crate::runner::{CommandRunner, SystemCommandRunner};
use log::debug;
use std::path::Path;
use tracing::instrument;

/// Combines a color image and a grayscale alpha mask into a single image
/// with transparency
///
/// All pixel manipulation is delegated to the configured external image
/// processor; this type only selects the matching composition recipe and
/// executes it. Each call is independent and stateless, so one composer can
/// be shared across a whole process.
pub struct ImageComposer {
    config: ComposerConfig,
    probe: Box<dyn BinaryProbe>,
    runner: Box<dyn CommandRunner>,
}

impl ImageComposer {
    /// Create a composer with the default capabilities (PATH probe and
    /// child-process runner)
    #[must_use]
    pub fn new(config: ComposerConfig) -> Self {
        Self::with_capabilities(config, Box::new(PathProbe), Box::new(SystemCommandRunner))
    }

    /// Create a composer with injected probe and runner capabilities
    #[must_use]
    pub fn with_capabilities(
        config: ComposerConfig,
        probe: Box<dyn BinaryProbe>,
        runner: Box<dyn CommandRunner>,
    ) -> Self {
        Self {
            config,
            probe,
            runner,
        }
    }

    /// Get the current configuration
    #[must_use]
    pub fn config(&self) -> &ComposerConfig {
        &self.config
    }

    /// Compose `color` and `alpha` into a transparent image at `destination`
    ///
    /// Blocks until the external pipeline completes. The output encoding is
    /// chosen by the external tool from the destination extension.
    ///
    /// # Errors
    ///
    /// Returns `ComposeError` for:
    /// - No image processor configured, or an unrecognized one
    /// - Spawn failures (processor binary missing at execution time)
    /// - Non-zero exit of the external pipeline
    #[instrument(skip_all, fields(processor = ?self.config.image_processor))]
    pub fn compose<C, A, D>(&self, color: C, alpha: A, destination: D) -> Result<()>
    where
        C: AsRef<Path>,
        A: AsRef<Path>,
        D: AsRef<Path>,
    {
        let (color, alpha, destination) = (color.as_ref(), alpha.as_ref(), destination.as_ref());

        let invocation = match self.config.image_processor {
            Some(ImageProcessor::Vips) => backends::vips::invocation(color, alpha, destination),
            Some(ImageProcessor::Magick) => {
                backends::magick::invocation(self.probe.as_ref(), color, alpha, destination)
            },
            Some(ImageProcessor::Unrecognized(ref value)) => {
                return Err(ComposeError::unsupported_processor(value.clone()));
            },
            None => return Err(ComposeError::NoProcessorConfigured),
        };

        debug!(
            "Composing '{}' + '{}' -> '{}' via '{}'",
            color.display(),
            alpha.display(),
            destination.display(),
            invocation.program
        );
        self.runner.run(&invocation)
    }
}
