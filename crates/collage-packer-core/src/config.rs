use serde::{Deserialize, Serialize};

/// A4 portrait width in PostScript points.
pub const A4_WIDTH_PT: f32 = 595.2756;
/// A4 portrait height in PostScript points.
pub const A4_HEIGHT_PT: f32 = 841.8898;

/// Converts centimeters to PostScript points (1 inch = 72 pt).
pub fn cm_to_points(cm: f32) -> f32 {
    cm / 2.54 * 72.0
}

/// Page geometry for one layout run.
///
/// The margin is applied on all four page sides and doubles as the spacing
/// between neighboring assets.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutConfig {
    /// Page width in points.
    pub page_width: f32,
    /// Page height in points.
    pub page_height: f32,
    /// Uniform margin in points.
    pub margin: f32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width: A4_WIDTH_PT,
            page_height: A4_HEIGHT_PT,
            margin: cm_to_points(0.3),
        }
    }
}

impl LayoutConfig {
    /// Rightmost x coordinate an asset may extend to.
    pub fn right_bound(&self) -> f32 {
        self.page_width - self.margin
    }

    /// Horizontal extent available to assets.
    pub fn usable_width(&self) -> f32 {
        self.page_width - 2.0 * self.margin
    }

    /// Vertical extent available to assets.
    pub fn usable_height(&self) -> f32 {
        self.page_height - 2.0 * self.margin
    }

    /// Validates the page geometry.
    ///
    /// Returns an error if the page dimensions are non-positive or non-finite,
    /// the margin is negative, or the margins leave no usable area.
    pub fn validate(&self) -> crate::error::Result<()> {
        use crate::error::CollageError;

        if !self.page_width.is_finite()
            || !self.page_height.is_finite()
            || self.page_width <= 0.0
            || self.page_height <= 0.0
        {
            return Err(CollageError::InvalidConfig(format!(
                "page dimensions must be positive, got {}x{}",
                self.page_width, self.page_height
            )));
        }
        if !self.margin.is_finite() || self.margin < 0.0 {
            return Err(CollageError::InvalidConfig(format!(
                "margin must be non-negative, got {}",
                self.margin
            )));
        }
        if self.usable_width() <= 0.0 || self.usable_height() <= 0.0 {
            return Err(CollageError::InvalidConfig(format!(
                "no usable space after margins: {}x{} - {} * 2 = {}x{}",
                self.page_width,
                self.page_height,
                self.margin,
                self.usable_width(),
                self.usable_height()
            )));
        }
        Ok(())
    }
}
