use pdfcoord_core::{CoordTransform, PixelPoint};

use crate::cli::{FrameArgs, OutputArgs, OutputFormat};
use crate::shared::{format_coords, print_json, report, resolve_frames};

pub fn run(x: f64, y: f64, frames: &FrameArgs, output: &OutputArgs) -> Result<(), i32> {
    let (raster, page) = resolve_frames(frames)?;
    let transform = CoordTransform::new(&raster, &page).map_err(report)?;

    let pixel = PixelPoint::new(x, y);
    let pdf = transform.to_pdf(pixel);
    tracing::debug!(?pixel, ?pdf, "converted point");

    match output.format {
        OutputFormat::Text => {
            println!("{}", format_coords(&[pdf.x, pdf.y], output.precision))
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "pixel": pixel,
            "pdf": pdf,
            "raster": raster,
            "page": page,
        }))?,
    }
    Ok(())
}
