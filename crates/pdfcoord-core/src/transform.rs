//! Pixel space to PDF space conversion.
//!
//! A raster of `pixel_width × pixel_height` rendered from a page of
//! `point_width × point_height` relates the two spaces by a per-axis scale
//! plus a vertical flip:
//!
//! ```text
//! x_pdf = x_px * (point_width  / pixel_width)
//! y_pdf = point_height - y_px * (point_height / pixel_height)
//! ```
//!
//! The zoom the renderer used is implied by the frame ratio and never needed
//! on its own.
//!
//! # Example
//!
//! ```
//! use pdfcoord_core::{PageFrame, RasterFrame, point_to_pdf};
//!
//! let raster = RasterFrame::new(612.0, 792.0);
//! let page = PageFrame::new(306.0, 396.0);
//! assert_eq!(point_to_pdf(306.0, 396.0, &raster, &page).unwrap(), (153.0, 198.0));
//! ```

use crate::error::Result;
use crate::frame::{PageFrame, RasterFrame};
use crate::geometry::{PdfPoint, PdfRect, PixelPoint, PixelRect};

/// Affine map between a raster and the page it was rendered from.
///
/// Built from validated frames; rebuild it whenever either frame changes.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "RawTransform")
)]
pub struct CoordTransform {
    scale_x: f64,
    scale_y: f64,
    page_height: f64,
}

impl CoordTransform {
    /// Derive the transform, failing with
    /// [`InvalidDimension`](crate::TransformError::InvalidDimension) if any
    /// of the four dimensions is not strictly positive.
    pub fn new(raster: &RasterFrame, page: &PageFrame) -> Result<Self> {
        raster.validate()?;
        page.validate()?;

        let transform = Self {
            scale_x: page.point_width / raster.pixel_width,
            scale_y: page.point_height / raster.pixel_height,
            page_height: page.point_height,
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(
            pixel_width = raster.pixel_width,
            pixel_height = raster.pixel_height,
            point_width = page.point_width,
            point_height = page.point_height,
            scale_x = transform.scale_x,
            scale_y = transform.scale_y,
            "built pixel-to-pdf transform"
        );

        Ok(transform)
    }

    /// Points per pixel along x.
    pub fn scale_x(&self) -> f64 {
        self.scale_x
    }

    /// Points per pixel along y.
    pub fn scale_y(&self) -> f64 {
        self.scale_y
    }

    /// Map a pixel-space point to PDF space. Points outside the raster
    /// extrapolate linearly.
    pub fn to_pdf(&self, p: PixelPoint) -> PdfPoint {
        PdfPoint::new(p.x * self.scale_x, self.page_height - p.y * self.scale_y)
    }

    /// Map a PDF-space point back to pixel space.
    pub fn to_pixel(&self, p: PdfPoint) -> PixelPoint {
        PixelPoint::new(p.x / self.scale_x, (self.page_height - p.y) / self.scale_y)
    }

    /// Map both corners of a rectangle, keeping their order.
    ///
    /// The result is not normalized: the first corner of the output is the
    /// image of the first corner of the input, so the vertical ordering of
    /// the two corners is exchanged by the flip.
    pub fn rect_to_pdf(&self, r: PixelRect) -> PdfRect {
        PdfRect::from_corners(self.to_pdf(r.first()), self.to_pdf(r.second()))
    }
}

/// Unchecked wire form of [`CoordTransform`]; every field must pass the same
/// positive-and-finite check as the frames it was derived from.
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawTransform {
    scale_x: f64,
    scale_y: f64,
    page_height: f64,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTransform> for CoordTransform {
    type Error = crate::TransformError;

    fn try_from(raw: RawTransform) -> Result<Self> {
        use crate::error::check_dimension;

        Ok(Self {
            scale_x: check_dimension("scale_x", raw.scale_x)?,
            scale_y: check_dimension("scale_y", raw.scale_y)?,
            page_height: check_dimension("page_height", raw.page_height)?,
        })
    }
}

/// Convert a pixel-space click to PDF coordinates.
pub fn point_to_pdf(
    px: f64,
    py: f64,
    raster: &RasterFrame,
    page: &PageFrame,
) -> Result<(f64, f64)> {
    let transform = CoordTransform::new(raster, page)?;
    Ok(transform.to_pdf(PixelPoint::new(px, py)).into())
}

/// Convert a dragged pixel-space rectangle to PDF coordinates, corner by
/// corner, in the order given.
pub fn rect_to_pdf(
    x1: f64,
    y1: f64,
    x2: f64,
    y2: f64,
    raster: &RasterFrame,
    page: &PageFrame,
) -> Result<(f64, f64, f64, f64)> {
    let transform = CoordTransform::new(raster, page)?;
    Ok(transform.rect_to_pdf(PixelRect::new(x1, y1, x2, y2)).into())
}

/// Convert a PDF-space point back to the raster pixel it came from.
pub fn pdf_to_point(
    x: f64,
    y: f64,
    raster: &RasterFrame,
    page: &PageFrame,
) -> Result<(f64, f64)> {
    let transform = CoordTransform::new(raster, page)?;
    Ok(transform.to_pixel(PdfPoint::new(x, y)).into())
}
