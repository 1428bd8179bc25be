//! Raster and page frames: the two sets of dimensions a transform is built from.

use std::fmt;
use std::str::FromStr;

use crate::error::{Result, TransformError, check_dimension};
use crate::paper::PaperSize;

/// Products closer than this to a whole pixel count are treated as exact.
const PIXEL_SNAP: f64 = 1e-3;

const LANDSCAPE_SUFFIX: &str = "-landscape";

/// Dimensions of the displayed bitmap, in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RasterFrame {
    pub pixel_width: f64,
    pub pixel_height: f64,
}

impl RasterFrame {
    /// Create a frame without validation; see [`validate`](Self::validate).
    pub fn new(pixel_width: f64, pixel_height: f64) -> Self {
        Self {
            pixel_width,
            pixel_height,
        }
    }

    /// Raster size a renderer produces for `page` at `zoom`.
    ///
    /// Each axis is `ceil(points * zoom)`, except that products within a
    /// thousandth of a pixel of a whole number snap to it, so float noise in
    /// the product never adds a spurious pixel row or column. A zoom that
    /// overflows either axis is rejected as [`TransformError::InvalidZoom`].
    pub fn for_zoom(page: &PageFrame, zoom: f64) -> Result<Self> {
        if !(zoom.is_finite() && zoom > 0.0) {
            return Err(TransformError::InvalidZoom(zoom));
        }
        page.validate()?;
        let raster = Self::new(
            scaled_pixels(page.point_width * zoom),
            scaled_pixels(page.point_height * zoom),
        );
        if !(raster.pixel_width.is_finite() && raster.pixel_height.is_finite()) {
            return Err(TransformError::InvalidZoom(zoom));
        }
        raster.validate()?;
        Ok(raster)
    }

    /// Fail with [`TransformError::InvalidDimension`] unless both sides are
    /// strictly positive and finite.
    pub fn validate(&self) -> Result<()> {
        check_dimension("pixel_width", self.pixel_width)?;
        check_dimension("pixel_height", self.pixel_height)?;
        Ok(())
    }
}

fn scaled_pixels(value: f64) -> f64 {
    let rounded = value.round();
    let pixels = if (value - rounded).abs() < PIXEL_SNAP {
        rounded
    } else {
        value.ceil()
    };
    pixels.max(1.0)
}

impl fmt::Display for RasterFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.pixel_width, self.pixel_height)
    }
}

impl FromStr for RasterFrame {
    type Err = TransformError;

    /// Parse `"WIDTHxHEIGHT"`, e.g. `"1224x1584"`.
    fn from_str(s: &str) -> Result<Self> {
        let (w, h) = parse_pair(s)?;
        let frame = Self::new(w, h);
        frame.validate()?;
        Ok(frame)
    }
}

/// Dimensions of the source PDF page, in points.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PageFrame {
    pub point_width: f64,
    pub point_height: f64,
}

impl PageFrame {
    /// Create a frame without validation; see [`validate`](Self::validate).
    pub fn new(point_width: f64, point_height: f64) -> Self {
        Self {
            point_width,
            point_height,
        }
    }

    /// Same page turned on its side.
    pub fn landscape(&self) -> Self {
        Self::new(self.point_height, self.point_width)
    }

    pub fn validate(&self) -> Result<()> {
        check_dimension("point_width", self.point_width)?;
        check_dimension("point_height", self.point_height)?;
        Ok(())
    }
}

impl From<PaperSize> for PageFrame {
    fn from(paper: PaperSize) -> Self {
        paper.frame()
    }
}

impl fmt::Display for PageFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.point_width, self.point_height)
    }
}

impl FromStr for PageFrame {
    type Err = TransformError;

    /// Parse `"WIDTHxHEIGHT"` or a paper size name such as `"a4"` or
    /// `"letter-landscape"`.
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        let lower = s.to_ascii_lowercase();
        let (name, landscape) = match lower.strip_suffix(LANDSCAPE_SUFFIX) {
            Some(name) => (name, true),
            None => (lower.as_str(), false),
        };
        if let Some(paper) = PaperSize::from_name(name) {
            let frame = paper.frame();
            return Ok(if landscape { frame.landscape() } else { frame });
        }

        let (w, h) = parse_pair(s)?;
        let frame = Self::new(w, h);
        frame.validate()?;
        Ok(frame)
    }
}

/// Split `"WxH"` on `x`, `X` or `×` and parse both halves.
fn parse_pair(s: &str) -> Result<(f64, f64)> {
    let s = s.trim();
    let (w, h) = s
        .split_once(['x', 'X', '×'])
        .ok_or_else(|| TransformError::ParseFrame(format!("expected WIDTHxHEIGHT, got {s:?}")))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f64>()
            .map_err(|e| TransformError::ParseFrame(format!("{:?} in {s:?}: {e}", part.trim())))
    };
    Ok((parse(w)?, parse(h)?))
}
