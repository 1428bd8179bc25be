//! Convert a click on a zoom-2 render of a Letter page to PDF coordinates.
//!
//! Usage: cargo run --example pick_point -- <X> <Y>

use pdfcoord_core::{PaperSize, RasterFrame, point_to_pdf};

fn main() {
    let args: Vec<f64> = std::env::args()
        .skip(1)
        .filter_map(|a| a.parse().ok())
        .collect();
    let (px, py) = match args.as_slice() {
        [x, y] => (*x, *y),
        _ => {
            eprintln!("Usage: pick_point <X> <Y>");
            std::process::exit(1);
        }
    };

    let page = PaperSize::Letter.frame();
    let raster = match RasterFrame::for_zoom(&page, 2.0) {
        Ok(r) => r,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    match point_to_pdf(px, py, &raster, &page) {
        Ok((x, y)) => println!("pixel ({px}, {py}) on {raster} -> pdf ({x:.1}, {y:.1})"),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
