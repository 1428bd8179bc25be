//! Error types for coordinate conversion.
//!
//! Uses [`thiserror`] for error derivation. Every failure is fatal to the
//! single call that produced it: a degenerate frame means the caller handed
//! over a page or raster that was never produced successfully.

use thiserror::Error;

/// Errors raised while building or applying a pixel-to-PDF transform.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransformError {
    /// A raster or page dimension was zero, negative, NaN or infinite.
    #[error("invalid dimension: {name} must be positive and finite, got {value}")]
    InvalidDimension {
        /// Field name of the offending dimension (e.g. "pixel_width").
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A zoom factor was zero, negative, NaN or infinite.
    #[error("invalid zoom factor: {0} (must be positive and finite)")]
    InvalidZoom(f64),

    /// A frame string could not be parsed.
    #[error("cannot parse frame: {0}")]
    ParseFrame(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TransformError>;

/// Check that a single dimension is usable as a divisor and scale.
pub(crate) fn check_dimension(name: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(TransformError::InvalidDimension { name, value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_dimension_message() {
        let err = TransformError::InvalidDimension {
            name: "pixel_width",
            value: 0.0,
        };
        assert_eq!(
            err.to_string(),
            "invalid dimension: pixel_width must be positive and finite, got 0"
        );
    }

    #[test]
    fn invalid_zoom_message() {
        let err = TransformError::InvalidZoom(-1.5);
        assert_eq!(
            err.to_string(),
            "invalid zoom factor: -1.5 (must be positive and finite)"
        );
    }

    #[test]
    fn parse_frame_message() {
        let err = TransformError::ParseFrame("expected WIDTHxHEIGHT, got \"abc\"".to_string());
        assert!(err.to_string().starts_with("cannot parse frame:"));
    }

    #[test]
    fn check_dimension_accepts_positive() {
        assert_eq!(check_dimension("point_width", 612.0), Ok(612.0));
        assert_eq!(check_dimension("point_width", 1e-9), Ok(1e-9));
    }

    #[test]
    fn check_dimension_rejects_zero_and_negative() {
        assert!(matches!(
            check_dimension("pixel_height", 0.0),
            Err(TransformError::InvalidDimension {
                name: "pixel_height",
                ..
            })
        ));
        assert!(check_dimension("pixel_height", -3.0).is_err());
    }

    #[test]
    fn check_dimension_rejects_non_finite() {
        assert!(check_dimension("point_height", f64::NAN).is_err());
        assert!(check_dimension("point_height", f64::INFINITY).is_err());
    }
}
