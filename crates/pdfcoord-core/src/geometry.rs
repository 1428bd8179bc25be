//! Points and corner-pair rectangles in pixel space and PDF space.

/// Point on a rendered raster.
///
/// Pixel space: origin at the top-left corner, y increasing downward.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelPoint {
    pub x: f64,
    pub y: f64,
}

impl PixelPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for PixelPoint {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Point in PDF user space.
///
/// PDF space: origin at the bottom-left corner, y increasing upward, in points.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PdfPoint {
    pub x: f64,
    pub y: f64,
}

impl PdfPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<PdfPoint> for (f64, f64) {
    fn from(p: PdfPoint) -> Self {
        (p.x, p.y)
    }
}

impl From<PixelPoint> for (f64, f64) {
    fn from(p: PixelPoint) -> Self {
        (p.x, p.y)
    }
}

/// Rectangle dragged on the raster, given by two opposite corners.
///
/// The corners keep the order the input device reported them in; nothing
/// requires `(x1, y1)` to be the top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PixelRect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl PixelRect {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Build a rectangle from its two corners, first corner first.
    pub fn from_corners(first: PixelPoint, second: PixelPoint) -> Self {
        Self::new(first.x, first.y, second.x, second.y)
    }

    pub fn first(&self) -> PixelPoint {
        PixelPoint::new(self.x1, self.y1)
    }

    pub fn second(&self) -> PixelPoint {
        PixelPoint::new(self.x2, self.y2)
    }
}

/// Rectangle in PDF space, given by two opposite corners.
///
/// Produced by transforming a [`PixelRect`] corner by corner. Because of the
/// y-flip, the corner with the smaller pixel y ends up with the larger PDF y;
/// call [`normalized`](PdfRect::normalized) for min/max ordering.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PdfRect {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl PdfRect {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn from_corners(first: PdfPoint, second: PdfPoint) -> Self {
        Self::new(first.x, first.y, second.x, second.y)
    }

    pub fn first(&self) -> PdfPoint {
        PdfPoint::new(self.x1, self.y1)
    }

    pub fn second(&self) -> PdfPoint {
        PdfPoint::new(self.x2, self.y2)
    }

    /// Reorder the corners to `(min_x, min_y, max_x, max_y)`.
    pub fn normalized(&self) -> PdfRect {
        PdfRect {
            x1: self.x1.min(self.x2),
            y1: self.y1.min(self.y2),
            x2: self.x1.max(self.x2),
            y2: self.y1.max(self.y2),
        }
    }

    /// Width of the rectangle, independent of corner order.
    pub fn width(&self) -> f64 {
        (self.x2 - self.x1).abs()
    }

    /// Height of the rectangle, independent of corner order.
    pub fn height(&self) -> f64 {
        (self.y2 - self.y1).abs()
    }
}

impl From<PdfRect> for (f64, f64, f64, f64) {
    fn from(r: PdfRect) -> Self {
        (r.x1, r.y1, r.x2, r.y2)
    }
}
