//! Named paper sizes in PDF points (1/72 inch), portrait orientation.

use crate::frame::PageFrame;

/// A standard paper size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "lowercase")
)]
pub enum PaperSize {
    Letter,
    Legal,
    Tabloid,
    A3,
    A4,
    A5,
}

impl PaperSize {
    /// Every known paper size.
    pub const ALL: [PaperSize; 6] = [
        PaperSize::Letter,
        PaperSize::Legal,
        PaperSize::Tabloid,
        PaperSize::A3,
        PaperSize::A4,
        PaperSize::A5,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PaperSize::Letter => "letter",
            PaperSize::Legal => "legal",
            PaperSize::Tabloid => "tabloid",
            PaperSize::A3 => "a3",
            PaperSize::A4 => "a4",
            PaperSize::A5 => "a5",
        }
    }

    /// `(width, height)` in points.
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            PaperSize::Letter => (612.0, 792.0),
            PaperSize::Legal => (612.0, 1008.0),
            PaperSize::Tabloid => (792.0, 1224.0),
            PaperSize::A3 => (842.0, 1191.0),
            PaperSize::A4 => (595.0, 842.0),
            PaperSize::A5 => (420.0, 595.0),
        }
    }

    pub fn frame(&self) -> PageFrame {
        let (w, h) = self.dimensions();
        PageFrame::new(w, h)
    }

    /// Look up a paper size by name, ignoring ASCII case.
    pub fn from_name(name: &str) -> Option<PaperSize> {
        Self::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(name.trim()))
    }
}
