use crate::config::LayoutConfig;
use crate::error::Result;
use crate::render::PageCanvas;
use printpdf::{
    ColorBits, ColorSpace, CurTransMat, ImageTransform, ImageXObject, Mm, PdfDocument,
    PdfDocumentReference, PdfLayerReference, Px,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use tracing::debug;

const PT_TO_MM: f32 = 0.352_777_78;
const LAYER_NAME: &str = "images";

/// printpdf-backed [`PageCanvas`].
///
/// Pages are created at the configured size; images are embedded as RGB
/// XObjects at 72 dpi so one source pixel scales to one point, then stretched
/// to the requested point extent. The document is written to `output` on
/// `finish`.
pub struct PdfCanvas {
    doc: Option<PdfDocumentReference>,
    layer: PdfLayerReference,
    page_width: f32,
    page_height: f32,
    output: PathBuf,
}

impl PdfCanvas {
    pub fn new(output: impl Into<PathBuf>, cfg: &LayoutConfig) -> Self {
        let (doc, page, layer) = PdfDocument::new(
            "collage",
            Mm(cfg.page_width * PT_TO_MM),
            Mm(cfg.page_height * PT_TO_MM),
            LAYER_NAME,
        );
        let layer = doc.get_page(page).get_layer(layer);
        Self {
            doc: Some(doc),
            layer,
            page_width: cfg.page_width,
            page_height: cfg.page_height,
            output: output.into(),
        }
    }
}

impl PageCanvas for PdfCanvas {
    fn draw_image(&mut self, source: &Path, x: f32, y: f32, width: f32, height: f32) -> Result<()> {
        let rgb = image::open(source)?.to_rgb8();
        let (px_w, px_h) = rgb.dimensions();
        let xobject = ImageXObject {
            width: Px(px_w as usize),
            height: Px(px_h as usize),
            color_space: ColorSpace::Rgb,
            bits_per_component: ColorBits::Bit8,
            interpolate: true,
            image_data: rgb.into_raw(),
            image_filter: None,
            clipping_bbox: None,
            smask: None,
        };
        let image = printpdf::Image::from(xobject);
        // At 72 dpi one pixel is one point; scale pixels to the target extent.
        image.add_to_layer(
            self.layer.clone(),
            ImageTransform {
                translate_x: Some(Mm(x * PT_TO_MM)),
                translate_y: Some(Mm(y * PT_TO_MM)),
                scale_x: Some(width / px_w as f32),
                scale_y: Some(height / px_h as f32),
                dpi: Some(72.0),
                ..Default::default()
            },
        );
        Ok(())
    }

    fn save_state(&mut self) {
        self.layer.save_graphics_state();
    }

    fn rotate(&mut self, degrees: f32) {
        self.layer.set_ctm(CurTransMat::Rotate(degrees));
    }

    fn restore_state(&mut self) {
        self.layer.restore_graphics_state();
    }

    fn new_page(&mut self) {
        if let Some(doc) = &self.doc {
            let (page, layer) = doc.add_page(
                Mm(self.page_width * PT_TO_MM),
                Mm(self.page_height * PT_TO_MM),
                LAYER_NAME,
            );
            self.layer = doc.get_page(page).get_layer(layer);
        }
    }

    fn finish(&mut self) -> Result<()> {
        if let Some(doc) = self.doc.take() {
            debug!(path = %self.output.display(), "writing document");
            let mut writer = BufWriter::new(File::create(&self.output)?);
            doc.save(&mut writer)?;
        }
        Ok(())
    }
}
