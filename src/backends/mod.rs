//! Composition recipes for the supported image processor families
//!
//! Each backend builds an [`Invocation`](crate::runner::Invocation) for its
//! external tool:
//! - ImageMagick/GraphicsMagick family: copy the mask into the destination
//!   alpha channel via a `CopyOpacity` composite
//! - libvips: append the mask as an additional band via `bandjoin`
//!
//! The output encoding is chosen by the external tool from the destination
//! extension; no encoder is mandated here.

pub(crate) mod magick;
pub(crate) mod vips;
