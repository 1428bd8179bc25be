use pdfcoord_core::{CoordTransform, PixelRect};

use crate::cli::{FrameArgs, OutputArgs, OutputFormat};
use crate::shared::{format_coords, print_json, report, resolve_frames};

pub fn run(
    corners: [f64; 4],
    normalize: bool,
    frames: &FrameArgs,
    output: &OutputArgs,
) -> Result<(), i32> {
    let (raster, page) = resolve_frames(frames)?;
    let transform = CoordTransform::new(&raster, &page).map_err(report)?;

    let [x1, y1, x2, y2] = corners;
    let pixel = PixelRect::new(x1, y1, x2, y2);
    let mut pdf = transform.rect_to_pdf(pixel);
    if normalize {
        pdf = pdf.normalized();
    }
    tracing::debug!(?pixel, ?pdf, normalize, "converted rectangle");

    match output.format {
        OutputFormat::Text => println!(
            "{}",
            format_coords(&[pdf.x1, pdf.y1, pdf.x2, pdf.y2], output.precision)
        ),
        OutputFormat::Json => print_json(&serde_json::json!({
            "pixel": pixel,
            "pdf": pdf,
            "normalized": normalize,
            "width": pdf.width(),
            "height": pdf.height(),
            "raster": raster,
            "page": page,
        }))?,
    }
    Ok(())
}
