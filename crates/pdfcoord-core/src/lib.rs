//! pdfcoord-core: map positions on a rendered PDF page back to PDF space.
//!
//! A page rendered to a bitmap at some zoom factor is shown to the user, who
//! clicks a point or drags a rectangle. This crate converts those pixel
//! positions (origin top-left, y down) into the page's native point
//! coordinates (origin bottom-left, y up).
//!
//! Everything here is a pure function of the raster size, the page size and
//! the input position. Rendering and PDF parsing live elsewhere.

pub mod error;
pub mod frame;
pub mod geometry;
pub mod paper;
pub mod transform;

pub use error::{Result, TransformError};
pub use frame::{PageFrame, RasterFrame};
pub use geometry::{PdfPoint, PdfRect, PixelPoint, PixelRect};
pub use paper::PaperSize;
pub use transform::{CoordTransform, pdf_to_point, point_to_pdf, rect_to_pdf};
