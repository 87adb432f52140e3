use crate::packer::FreeSpace;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::path::PathBuf;

/// A source image scaled into document points.
///
/// Sizer-produced assets are always portrait (`width <= height`); `rotated`
/// records whether reaching that orientation swapped the natively decoded
/// axes. Width/height are final placement dimensions, the rotation is applied
/// visually at render time only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SizedAsset {
    pub source: PathBuf,
    pub width: f32,
    pub height: f32,
    pub rotated: bool,
}

impl SizedAsset {
    pub fn new(source: impl Into<PathBuf>, width: f32, height: f32, rotated: bool) -> Self {
        Self {
            source: source.into(),
            width,
            height,
            rotated,
        }
    }

    /// The same asset with width/height swapped and the rotation flag inverted.
    pub fn rotate(&self) -> Self {
        Self {
            source: self.source.clone(),
            width: self.height,
            height: self.width,
            rotated: !self.rotated,
        }
    }

    /// Packing order: tallest first, ties broken by widest first.
    pub fn packing_order(&self, other: &Self) -> Ordering {
        other
            .height
            .total_cmp(&self.height)
            .then(other.width.total_cmp(&self.width))
    }
}

impl PartialEq for SizedAsset {
    fn eq(&self, other: &Self) -> bool {
        self.width == other.width && self.height == other.height
    }
}

/// A finalized asset position on a page. `x`/`y` is the bottom-left corner of
/// the drawn image in page coordinates (origin bottom-left, y up).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    pub asset: SizedAsset,
    pub x: f32,
    pub y: f32,
}

/// A single document page (logical record).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    pub id: usize,
    pub width: f32,
    pub height: f32,
    pub placements: Vec<Placement>,
}

/// Result of one packing run: pages in id order plus the free spaces that
/// were still unclaimed when the input ran out.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Layout {
    pub pages: Vec<Page>,
    pub unused_right: Vec<FreeSpace>,
    pub unused_bottom: Vec<FreeSpace>,
}

/// Statistics about layout density.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct LayoutStats {
    /// Total number of pages in the layout.
    pub num_pages: usize,
    /// Total number of placements.
    pub num_placements: usize,
    /// Number of placements drawn through the rotated path.
    pub num_rotated: usize,
    /// Total area of all pages (points squared).
    pub total_page_area: f64,
    /// Area covered by placed assets (points squared).
    pub used_area: f64,
    /// Occupancy ratio: used_area / total_page_area (0.0 to 1.0).
    pub occupancy: f64,
}

impl Layout {
    /// Computes density statistics for this layout.
    pub fn stats(&self) -> LayoutStats {
        let num_pages = self.pages.len();
        let mut num_placements = 0;
        let mut num_rotated = 0;
        let mut total_page_area = 0f64;
        let mut used_area = 0f64;

        for page in &self.pages {
            total_page_area += (page.width as f64) * (page.height as f64);
            for pl in &page.placements {
                num_placements += 1;
                used_area += (pl.asset.width as f64) * (pl.asset.height as f64);
                if pl.asset.rotated {
                    num_rotated += 1;
                }
            }
        }

        let occupancy = if total_page_area > 0.0 {
            used_area / total_page_area
        } else {
            0.0
        };

        LayoutStats {
            num_pages,
            num_placements,
            num_rotated,
            total_page_area,
            used_area,
            occupancy,
        }
    }

    /// Looks up a page by id, if present.
    pub fn page(&self, id: usize) -> Option<&Page> {
        self.pages.get(id)
    }

    /// Iterates placements across all pages in draw order.
    pub fn placements(&self) -> impl Iterator<Item = (&Page, &Placement)> {
        self.pages
            .iter()
            .flat_map(|p| p.placements.iter().map(move |pl| (p, pl)))
    }
}

impl LayoutStats {
    /// Returns a human-readable summary of the statistics.
    pub fn summary(&self) -> String {
        format!(
            "Pages: {}, Placements: {}, Occupancy: {:.2}%, Rotated: {}",
            self.num_pages,
            self.num_placements,
            self.occupancy * 100.0,
            self.num_rotated,
        )
    }
}
