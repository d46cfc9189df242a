//! Copy-opacity composition via the ImageMagick/GraphicsMagick family

use crate::detection::{BinaryProbe, MAGICK_BINARIES};
use crate::runner::Invocation;
use std::ffi::OsString;
use std::path::Path;

/// Build the copy-opacity composite invocation for the given sources
///
/// The concrete family binary is resolved through the probe in detection
/// priority order. When nothing probes true the canonical `magick` form is
/// built anyway; the spawn failure then surfaces to the caller unchanged.
pub(crate) fn invocation(
    probe: &dyn BinaryProbe,
    color: &Path,
    alpha: &Path,
    destination: &Path,
) -> Invocation {
    let binary = MAGICK_BINARIES
        .iter()
        .copied()
        .find(|binary| probe.is_available(binary))
        .unwrap_or("magick");

    if binary == "gm" {
        // GraphicsMagick composites through its `composite` sub-command,
        // with the change image (the mask) before the base image.
        Invocation::new(
            "gm",
            vec![
                OsString::from("composite"),
                OsString::from("-compose"),
                OsString::from("CopyOpacity"),
                alpha.into(),
                color.into(),
                destination.into(),
            ],
        )
    } else {
        Invocation::new(
            binary,
            vec![
                color.into(),
                alpha.into(),
                OsString::from("-compose"),
                OsString::from("CopyOpacity"),
                OsString::from("-composite"),
                destination.into(),
            ],
        )
    }
}
