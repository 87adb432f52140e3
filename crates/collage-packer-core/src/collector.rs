use crate::model::SizedAsset;
use crate::sizer::size_asset;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Gathers sized assets from a directory tree.
///
/// Every file with a supported raster extension is run through the sizer with
/// the given bounding box. Unreadable files are skipped with a warning. The
/// returned global minimum dimension starts at `min(max_w, max_h)` and is
/// lowered by every successfully sized asset; leftover gaps smaller than it
/// are never worth tracking.
///
/// Assets come back sorted tallest-first (ties widest-first) so the packer
/// fills large shelves before funneling small assets into leftover gaps.
pub fn collect_assets(dir: &Path, max_w: f32, max_h: f32) -> (Vec<SizedAsset>, f32) {
    let mut min_dim = max_w.min(max_h);
    let mut assets: Vec<SizedAsset> = Vec::new();

    for entry in WalkDir::new(dir).into_iter().filter_map(|e| e.ok()) {
        let path = entry.path();
        if !path.is_file() || !is_image(path) {
            continue;
        }
        match size_asset(path, max_w, max_h) {
            Ok(asset) => {
                min_dim = min_dim.min(asset.width).min(asset.height);
                debug!(path = %path.display(), w = asset.width, h = asset.height, rotated = asset.rotated, "sized asset");
                assets.push(asset);
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "skipping unreadable asset");
            }
        }
    }

    assets.sort_by(|a, b| a.packing_order(b));
    (assets, min_dim)
}

fn is_image(path: &Path) -> bool {
    matches!(
        path.extension()
            .and_then(|e| e.to_str())
            .map(|s| s.to_ascii_lowercase()),
        Some(ext) if matches!(ext.as_str(), "png" | "jpg" | "jpeg" | "gif" | "bmp")
    )
}
