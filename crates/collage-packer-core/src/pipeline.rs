use crate::collector::collect_assets;
use crate::config::LayoutConfig;
use crate::error::Result;
use crate::model::Layout;
use crate::packer::pack;
use crate::pdf::PdfCanvas;
use crate::progress::Progress;
use crate::render::render;
use std::path::Path;
use tracing::{info, instrument};

/// Walks `dir`, sizes every image into the `box_w` x `box_h` bounding box,
/// packs the sorted assets onto pages and writes a PDF to `output`.
///
/// The box is clamped to the usable page area so no asset can be sized larger
/// than a page. An empty directory yields a zero-page layout and an empty
/// document. Returns the layout so callers can inspect or export it.
#[instrument(skip_all)]
pub fn compose_pdf(
    dir: &Path,
    output: &Path,
    box_w: f32,
    box_h: f32,
    cfg: &LayoutConfig,
    progress: &mut dyn Progress,
) -> Result<Layout> {
    cfg.validate()?;

    // Sized assets are portrait, so width lands on the page's x axis and
    // height on y; clamping the normalized box to the usable extents keeps
    // every asset placeable.
    let (box_w, box_h) = if box_w <= box_h {
        (box_w, box_h)
    } else {
        (box_h, box_w)
    };
    let box_h = box_h.min(cfg.usable_height());
    let box_w = box_w.min(cfg.usable_width()).min(box_h);

    let (assets, min_dim) = collect_assets(dir, box_w, box_h);
    info!(count = assets.len(), min_dim, "collected assets");

    let layout = pack(assets, min_dim, cfg, progress);
    info!("{}", layout.stats().summary());

    let mut canvas = PdfCanvas::new(output, cfg);
    render(&layout, &mut canvas, progress)?;
    Ok(layout)
}
