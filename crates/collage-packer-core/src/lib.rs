//! Core library for laying out image assets onto fixed-size PDF pages.
//!
//! - Algorithm: greedy shelf packing with best-fit reclamation of row/page
//!   leftovers and optional 90° rotation.
//! - Pipeline: `compose_pdf` walks a directory, sizes every image into a
//!   bounding box, packs the sorted assets onto pages and writes a PDF.
//! - Data model is serde-serializable; a JSON layout export is provided.
//!
//! Quick example:
//! ```ignore
//! use collage_packer_core::{compose_pdf, LayoutConfig, NullProgress, cm_to_points};
//! # fn main() -> anyhow::Result<()> {
//! let cfg = LayoutConfig::default(); // A4, 0.3 cm margin
//! let layout = compose_pdf(
//!     "photos/".as_ref(),
//!     "collage.pdf".as_ref(),
//!     cm_to_points(10.0),
//!     cm_to_points(15.5),
//!     &cfg,
//!     &mut NullProgress,
//! )?;
//! println!("{}", layout.stats().summary());
//! # Ok(()) }
//! ```

pub mod collector;
pub mod config;
pub mod error;
pub mod export;
pub mod model;
pub mod packer;
pub mod pdf;
pub mod pipeline;
pub mod progress;
pub mod render;
pub mod sizer;

pub use collector::*;
pub use config::*;
pub use error::*;
pub use export::*;
pub use model::*;
pub use packer::*;
pub use pdf::*;
pub use pipeline::*;
pub use progress::*;
pub use render::*;
pub use sizer::*;

/// Convenience prelude for common types and functions.
/// Importing `collage_packer_core::prelude::*` brings the primary APIs into scope.
pub mod prelude {
    pub use crate::collector::collect_assets;
    pub use crate::config::{LayoutConfig, cm_to_points};
    pub use crate::model::{Layout, LayoutStats, Page, Placement, SizedAsset};
    pub use crate::packer::{FreeSpace, pack};
    pub use crate::pdf::PdfCanvas;
    pub use crate::pipeline::compose_pdf;
    pub use crate::progress::{NullProgress, Phase, Progress};
    pub use crate::render::{PageCanvas, render};
    pub use crate::sizer::size_asset;
}
