//! Configuration types for image composition

use crate::detection::{detect_image_processor, PathProbe};
use crate::error::ComposeError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

/// External image processor used to perform the actual pixel composition
///
/// The two supported backends are represented as closed variants so the
/// composition branch is checked exhaustively at compile time. Configuration
/// values that match neither backend are carried as [`Unrecognized`] and
/// rejected loudly when a composition is attempted.
///
/// [`Unrecognized`]: ImageProcessor::Unrecognized
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageProcessor {
    /// ImageMagick or GraphicsMagick command line tools (`magick`, `convert`, `gm`)
    Magick,
    /// libvips command line tool (`vips`)
    Vips,
    /// A configured value that matches no supported processor
    Unrecognized(String),
}

impl ImageProcessor {
    /// Interpret a configured value, keeping unknown values for later diagnosis
    ///
    /// Unlike [`FromStr`], this never fails: values that match no supported
    /// processor become [`ImageProcessor::Unrecognized`] and are rejected
    /// when a composition is attempted, preserving the original value in the
    /// error message.
    #[must_use]
    pub fn from_configured_value(value: &str) -> Self {
        match value.to_ascii_lowercase().as_str() {
            "magick" | "imagemagick" | "graphicsmagick" | "minimagick" => Self::Magick,
            "vips" | "libvips" => Self::Vips,
            _ => Self::Unrecognized(value.to_string()),
        }
    }

    /// Canonical string form of this processor selection
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Magick => "magick",
            Self::Vips => "vips",
            Self::Unrecognized(value) => value,
        }
    }
}

impl std::fmt::Display for ImageProcessor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ImageProcessor {
    type Err = ComposeError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match Self::from_configured_value(value) {
            Self::Unrecognized(value) => Err(ComposeError::UnsupportedProcessor(value)),
            processor => Ok(processor),
        }
    }
}

impl Serialize for ImageProcessor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ImageProcessor {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = String::deserialize(deserializer)?;
        Ok(Self::from_configured_value(&value))
    }
}

/// Configuration for image composition operations
///
/// Held explicitly by the composer rather than in process-wide state; a
/// process that wants a single shared configuration can share one composer.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ComposerConfig {
    /// Image processor used for composition (`None` = not configured)
    pub image_processor: Option<ImageProcessor>,
}

impl ComposerConfig {
    /// Create a configuration using the given image processor
    #[must_use]
    pub fn new(image_processor: ImageProcessor) -> Self {
        Self {
            image_processor: Some(image_processor),
        }
    }

    /// Create a configuration from whatever image processor is installed
    ///
    /// Probes the host's executable search path; the processor stays unset
    /// when no supported binary is found, and composition then fails with a
    /// descriptive error.
    #[must_use]
    pub fn detect() -> Self {
        Self {
            image_processor: detect_image_processor(&PathProbe),
        }
    }
}
