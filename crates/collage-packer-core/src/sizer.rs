use crate::error::Result;
use crate::model::SizedAsset;
use std::path::Path;

/// Sizes one image into a bounding box, preserving aspect ratio.
///
/// The box may be passed in either order; it is normalized to portrait
/// (`max_w <= max_h`) first. Every asset is likewise oriented portrait before
/// scaling: a landscape source has its axes swapped and `rotated` set, and the
/// 90° correction is re-applied at render time.
///
/// Reads only the image header; failure to decode it is returned as an error
/// so callers can skip the file.
pub fn size_asset(path: &Path, max_w: f32, max_h: f32) -> Result<SizedAsset> {
    let (max_w, max_h) = if max_w <= max_h {
        (max_w, max_h)
    } else {
        (max_h, max_w)
    };

    let (native_w, native_h) = image::image_dimensions(path)?;
    let (rotated, width, height) = if native_w >= native_h {
        (true, native_h as f32, native_w as f32)
    } else {
        (false, native_w as f32, native_h as f32)
    };

    let ratio = width / height;
    let (new_w, new_h) = if ratio > max_w / max_h {
        // width-constrained
        (max_w, max_w / ratio)
    } else {
        (max_h * ratio, max_h)
    };

    Ok(SizedAsset::new(path, new_w, new_h, rotated))
}
