//! Band-join composition via the libvips command line tool

use crate::runner::Invocation;
use std::ffi::OsString;
use std::path::Path;

/// Build the band-join invocation for the given sources
///
/// Joins the mask's pixel bands onto the color image as an additional
/// channel. The vips CLI takes image arrays as a single space-separated
/// argument; since no shell is involved the joined value stays one argv
/// entry.
pub(crate) fn invocation(color: &Path, alpha: &Path, destination: &Path) -> Invocation {
    let mut sources = OsString::from(color);
    sources.push(" ");
    sources.push(alpha);

    Invocation::new(
        "vips",
        vec![OsString::from("bandjoin"), sources, destination.into()],
    )
}
