//! Sizing calculations for fitting a glyph to its surface.

/// Padding around the glyph area, in pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl Padding {
    /// Same padding on every side.
    pub const fn uniform(value: u32) -> Self {
        Self {
            left: value,
            top: value,
            right: value,
            bottom: value,
        }
    }

    #[inline]
    fn horizontal(&self) -> u32 {
        self.left.saturating_add(self.right)
    }

    #[inline]
    fn vertical(&self) -> u32 {
        self.top.saturating_add(self.bottom)
    }
}

/// Glyph sizing configuration and calculations.
///
/// Glyph outlines live in a unit square. The renderer scales that square to
/// a fraction of the smaller surface dimension, and measurement keeps the
/// view at a fixed aspect ratio.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GlyphSizing {
    /// Fraction of the smaller surface dimension the unit square maps to
    pub fill_ratio: f64,
    /// Width / height of the content area
    pub aspect_ratio: f64,
}

impl Default for GlyphSizing {
    fn default() -> Self {
        Self {
            fill_ratio: 0.95,
            aspect_ratio: 1.0,
        }
    }
}

impl GlyphSizing {
    /// Create a new GlyphSizing with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Scale factor from unit-square coordinates to surface pixels.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use glyph_morph::GlyphSizing;
    ///
    /// let scale = GlyphSizing::default().scale(200.0, 100.0);
    /// assert!((scale - 95.0).abs() < 1e-9);
    /// ```
    #[inline]
    pub fn scale(&self, width: f64, height: f64) -> f64 {
        self.fill_ratio * width.min(height).max(0.0)
    }

    /// Shrink a proposed size so the content area keeps `aspect_ratio`.
    ///
    /// `width` and `height` are the sizes offered by the host layout,
    /// padding included. The constrained dimension is reduced; the other is
    /// left as proposed.
    ///
    /// ## Returns
    ///
    /// A tuple of (width, height) in pixels, padding included.
    pub fn measure(&self, width: u32, height: u32, padding: Padding) -> (u32, u32) {
        let inner_width = width.saturating_sub(padding.horizontal());
        let inner_height = height.saturating_sub(padding.vertical());

        let max_width = (inner_height as f64 * self.aspect_ratio) as u32;
        let max_height = if self.aspect_ratio > 0.0 {
            (inner_width as f64 / self.aspect_ratio) as u32
        } else {
            inner_height
        };

        if inner_width > max_width {
            (max_width.saturating_add(padding.horizontal()), height)
        } else {
            (width, max_height.saturating_add(padding.vertical()))
        }
    }
}
