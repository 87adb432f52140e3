use crate::error::Result;
use crate::model::Layout;
use crate::progress::{Phase, Progress, percent};
use std::path::Path;
use tracing::info;

/// Abstract page-document target.
///
/// Coordinates are page points with the origin at the bottom-left corner.
/// Implementations must honor `save_state`/`restore_state` nesting around
/// `rotate`, and must treat `finish` as the single, final flush of the
/// document.
pub trait PageCanvas {
    /// Draws the image at `source` with its bottom-left corner at `(x, y)`,
    /// scaled to `width` x `height` points in the current coordinate frame.
    fn draw_image(&mut self, source: &Path, x: f32, y: f32, width: f32, height: f32) -> Result<()>;
    /// Pushes the current coordinate frame.
    fn save_state(&mut self);
    /// Rotates the coordinate frame counter-clockwise around the page origin.
    fn rotate(&mut self, degrees: f32);
    /// Pops back to the frame saved by the matching `save_state`.
    fn restore_state(&mut self);
    /// Commits a page break and starts the next page.
    fn new_page(&mut self);
    /// Flushes the finished document. Attempted exactly once, no retries.
    fn finish(&mut self) -> Result<()>;
}

/// Draws a finalized layout onto `canvas`, pages in id order, placements in
/// insertion order.
///
/// Placement geometry is stored in upright terms; assets flagged `rotated`
/// are drawn under a 90°-rotated frame at the transformed position
/// `(y, -(width + x))` with the axes swapped back to their native-fit values,
/// so they occupy the same page footprint either way. Reports the `placement`
/// phase, one notification per drawn image.
pub fn render<C: PageCanvas + ?Sized>(
    layout: &Layout,
    canvas: &mut C,
    progress: &mut dyn Progress,
) -> Result<()> {
    let total: usize = layout.pages.iter().map(|p| p.placements.len()).sum();
    info!(images = total, pages = layout.pages.len(), "rendering layout");
    progress.report(0, Some(Phase::Placement));

    let mut done = 0;
    for (i, page) in layout.pages.iter().enumerate() {
        if i > 0 {
            canvas.new_page();
        }
        for pl in &page.placements {
            if pl.asset.rotated {
                canvas.save_state();
                canvas.rotate(90.0);
                canvas.draw_image(
                    &pl.asset.source,
                    pl.y,
                    -(pl.asset.width + pl.x),
                    pl.asset.height,
                    pl.asset.width,
                )?;
                canvas.restore_state();
            } else {
                canvas.draw_image(&pl.asset.source, pl.x, pl.y, pl.asset.width, pl.asset.height)?;
            }
            done += 1;
            progress.report(percent(done, total), None);
        }
    }
    canvas.finish()
}
