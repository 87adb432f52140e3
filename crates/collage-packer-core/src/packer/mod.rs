//! Greedy shelf packer with free-space reclamation.
//!
//! Assets are consumed tallest-first and laid into left-to-right rows
//! ("shelves"). Wrapping a row or a page leaves a rectangular gap behind; any
//! gap at least as large as the global minimum asset dimension is recorded in
//! one of two sorted indexes (trailing row width, trailing page height) and
//! offered to later assets before the shelf grows. Reuse is best-fit and may
//! rotate the asset 90°.

mod free;
pub use free::{FreeIndex, FreeSpace};

use crate::config::LayoutConfig;
use crate::model::{Layout, Page, Placement, SizedAsset};
use crate::progress::{Phase, Progress, percent};
use tracing::debug;

/// Current writing position on the active page. `row_height` is the tallest
/// asset committed to the current row; zero exactly until the first row is
/// established.
#[derive(Debug, Clone, Copy)]
struct Cursor {
    x: f32,
    y: f32,
    row_height: f32,
    page: usize,
}

/// State of one packing run: shelf cursor, both free-space indexes and the
/// growing page list. Constructed per run and consumed by [`into_layout`].
///
/// [`into_layout`]: ShelfPacker::into_layout
pub struct ShelfPacker<'a> {
    cfg: &'a LayoutConfig,
    min_dim: f32,
    cursor: Cursor,
    right: FreeIndex,
    bottom: FreeIndex,
    pages: Vec<Page>,
}

impl<'a> ShelfPacker<'a> {
    /// `min_dim` is the global minimum usable dimension: gaps smaller than it
    /// are discarded since no asset in the run could ever fill them.
    pub fn new(cfg: &'a LayoutConfig, min_dim: f32) -> Self {
        let mut pages = Vec::new();
        pages.push(Self::blank_page(0, cfg));
        Self {
            cfg,
            min_dim,
            cursor: Cursor {
                x: cfg.margin,
                y: cfg.page_height - cfg.margin,
                row_height: 0.0,
                page: 0,
            },
            right: FreeIndex::new(),
            bottom: FreeIndex::new(),
            pages,
        }
    }

    fn blank_page(id: usize, cfg: &LayoutConfig) -> Page {
        Page {
            id,
            width: cfg.page_width,
            height: cfg.page_height,
            placements: Vec::new(),
        }
    }

    /// Places one asset: row/page transition first (so transition gaps are
    /// visible immediately), then gap reuse, then the shelf fallback.
    pub fn place(&mut self, asset: SizedAsset) {
        self.reposition(&asset);
        if !self.try_reuse(&asset) {
            self.shelf(asset);
        }
    }

    fn reposition(&mut self, asset: &SizedAsset) {
        if self.cursor.row_height == 0.0 {
            // Fresh row: establish it without moving the cursor.
            self.cursor.row_height = asset.height;
        } else if self.cursor.x + asset.width > self.cfg.right_bound() {
            let gap = self.cfg.right_bound() - self.cursor.x;
            if gap >= self.min_dim {
                let space = FreeSpace {
                    available: gap,
                    x: self.cursor.x,
                    y: self.cursor.y,
                    page: self.cursor.page,
                };
                debug!(?space, rooms = self.right.len() + 1, "recording trailing row gap");
                self.right.insert(space);
            }
            self.cursor.x = self.cfg.margin;
            self.cursor.y -= self.cursor.row_height + self.cfg.margin;
            self.cursor.row_height = asset.height;

            if self.cursor.y - asset.height < self.cfg.margin {
                let gap = self.cursor.y - self.cfg.margin;
                if gap >= self.min_dim {
                    let space = FreeSpace {
                        available: gap,
                        x: self.cfg.margin,
                        y: self.cursor.y,
                        page: self.cursor.page,
                    };
                    debug!(?space, rooms = self.bottom.len() + 1, "recording trailing page gap");
                    self.bottom.insert(space);
                }
                self.cursor.page += 1;
                self.cursor.x = self.cfg.margin;
                self.cursor.y = self.cfg.page_height - self.cfg.margin;
                self.pages
                    .push(Self::blank_page(self.cursor.page, self.cfg));
            }
        }
    }

    /// Tries the four reuse paths in fixed order, stopping at the first hit:
    /// right-edge, bottom-edge, then both again with the asset rotated.
    fn try_reuse(&mut self, asset: &SizedAsset) -> bool {
        self.try_right(asset)
            || self.try_bottom(asset)
            || self.try_right(&asset.rotate())
            || self.try_bottom(&asset.rotate())
    }

    /// Best-fit lookup by width in the right-edge index.
    fn try_right(&mut self, asset: &SizedAsset) -> bool {
        let at = self.right.first_at_least(asset.width);
        if at >= self.right.len() {
            return false;
        }
        let spot = self.right.remove(at);
        debug!(?spot, w = asset.width, rotated = asset.rotated, "reusing trailing row gap");
        self.record(spot.page, asset.clone(), spot.x, spot.y - asset.height);

        let new_x = spot.x + asset.width + self.cfg.margin;
        if new_x + self.min_dim <= self.cfg.right_bound() {
            self.right.insert(FreeSpace {
                available: self.cfg.right_bound() - new_x,
                x: new_x,
                y: spot.y,
                page: spot.page,
            });
        }
        true
    }

    /// Lookup by height in the bottom-edge index. Height order alone does not
    /// guarantee horizontal fit, so this walks forward from the binary-search
    /// point past entries whose remaining row would overflow the right bound.
    fn try_bottom(&mut self, asset: &SizedAsset) -> bool {
        let mut at = self.bottom.first_at_least(asset.height);
        while at < self.bottom.len() {
            let spot = self.bottom.get(at);
            if spot.x + asset.width <= self.cfg.right_bound() {
                debug!(?spot, h = asset.height, rotated = asset.rotated, "reusing trailing page gap");
                self.record(spot.page, asset.clone(), spot.x, spot.y - asset.height);

                let new_x = spot.x + asset.width + self.cfg.margin;
                if new_x + self.min_dim <= self.cfg.right_bound() {
                    self.bottom.replace(at, FreeSpace { x: new_x, ..spot });
                } else {
                    self.bottom.remove(at);
                }
                return true;
            }
            at += 1;
        }
        false
    }

    fn shelf(&mut self, asset: SizedAsset) {
        let Cursor { x, y, page, .. } = self.cursor;
        self.cursor.x += asset.width + self.cfg.margin;
        self.cursor.row_height = self.cursor.row_height.max(asset.height);
        let dy = y - asset.height;
        self.record(page, asset, x, dy);
    }

    fn record(&mut self, page: usize, asset: SizedAsset, x: f32, y: f32) {
        self.pages[page].placements.push(Placement { asset, x, y });
    }

    /// Seals the run. The trailing page is dropped if nothing landed on it
    /// (the cursor may have opened it while every later asset reused an older
    /// gap); whatever is left in the indexes is reported as unused capacity.
    pub fn into_layout(mut self) -> Layout {
        if self
            .pages
            .last()
            .is_some_and(|p| p.placements.is_empty())
        {
            self.pages.pop();
        }
        let unused_right = self.right.into_entries();
        let unused_bottom = self.bottom.into_entries();
        if !unused_right.is_empty() || !unused_bottom.is_empty() {
            debug!(
                right = unused_right.len(),
                bottom = unused_bottom.len(),
                "free spaces left unclaimed"
            );
        }
        Layout {
            pages: self.pages,
            unused_right,
            unused_bottom,
        }
    }
}

/// Packs a pre-sorted asset sequence onto pages.
///
/// Pure apart from the progress callback: repeated runs over the same input
/// yield identical layouts. Reports the `calculation` phase, one notification
/// per asset.
pub fn pack(
    assets: Vec<SizedAsset>,
    min_dim: f32,
    cfg: &LayoutConfig,
    progress: &mut dyn Progress,
) -> Layout {
    let total = assets.len();
    let mut packer = ShelfPacker::new(cfg, min_dim);
    progress.report(0, Some(Phase::Calculation));
    for (done, asset) in assets.into_iter().enumerate() {
        packer.place(asset);
        progress.report(percent(done + 1, total), None);
    }
    packer.into_layout()
}
