//! PNG snapshots of a rendered pixmap.
//!
//! Feature-gated behind `png` (default on) so embedders that bring their own
//! surface can depend on this crate without pulling in the `image` crate.

use crate::pixmap::Pixmap;
use driftfield_core::FieldError;
use std::path::Path;

/// Writes the pixmap as a PNG file.
///
/// Returns `FieldError::InvalidDimensions` if the pixmap dimensions overflow
/// `u32`, or `FieldError::Io` on write failure.
pub fn write_png(pixmap: &Pixmap, path: &Path) -> Result<(), FieldError> {
    let w = u32::try_from(pixmap.width()).map_err(|_| FieldError::InvalidDimensions)?;
    let h = u32::try_from(pixmap.height()).map_err(|_| FieldError::InvalidDimensions)?;
    let img = image::RgbaImage::from_raw(w, h, pixmap.data().to_vec())
        .ok_or_else(|| FieldError::Io("RGBA buffer size mismatch".into()))?;
    img.save(path).map_err(|e| FieldError::Io(e.to_string()))
}
