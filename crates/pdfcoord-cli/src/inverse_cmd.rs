use pdfcoord_core::{CoordTransform, PdfPoint};

use crate::cli::{FrameArgs, OutputArgs, OutputFormat};
use crate::shared::{format_coords, print_json, report, resolve_frames};

pub fn run(x: f64, y: f64, frames: &FrameArgs, output: &OutputArgs) -> Result<(), i32> {
    let (raster, page) = resolve_frames(frames)?;
    let transform = CoordTransform::new(&raster, &page).map_err(report)?;

    let pdf = PdfPoint::new(x, y);
    let pixel = transform.to_pixel(pdf);
    tracing::debug!(?pdf, ?pixel, "converted point back to pixels");

    match output.format {
        OutputFormat::Text => {
            println!("{}", format_coords(&[pixel.x, pixel.y], output.precision))
        }
        OutputFormat::Json => print_json(&serde_json::json!({
            "pdf": pdf,
            "pixel": pixel,
            "raster": raster,
            "page": page,
        }))?,
    }
    Ok(())
}
