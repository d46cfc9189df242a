//! Error types for image composition operations

use thiserror::Error;

/// Result type alias for image composition operations
pub type Result<T> = std::result::Result<T, ComposeError>;

/// Error types for image composition operations
#[derive(Error, Debug)]
pub enum ComposeError {
    /// No image processor has been configured
    #[error("Please configure an image processor to use image composition")]
    NoProcessorConfigured,

    /// The configured image processor does not match any supported backend
    #[error("unsupported image processor: {0}")]
    UnsupportedProcessor(String),

    /// Input/output errors (processor binary missing at execution time,
    /// unwritable destination, etc.)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The external image pipeline exited unsuccessfully
    #[error("image processor command '{program}' failed ({status}): {stderr}")]
    CommandFailed {
        /// Program that was executed
        program: String,
        /// Exit status reported by the operating system
        status: std::process::ExitStatus,
        /// Captured standard error output, trimmed
        stderr: String,
    },
}

impl ComposeError {
    /// Create a new unsupported processor error
    pub fn unsupported_processor<S: Into<String>>(value: S) -> Self {
        Self::UnsupportedProcessor(value.into())
    }
}
