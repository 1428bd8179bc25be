use crate::cli::{OutputArgs, OutputFormat};
use crate::shared::{DEFAULT_ZOOM, parse_page, print_json, raster_for_zoom};

pub fn run(page: &str, zoom: Option<f64>, output: &OutputArgs) -> Result<(), i32> {
    let page = parse_page(page)?;
    let raster = raster_for_zoom(&page, zoom)?;

    match output.format {
        OutputFormat::Text => println!("{raster}"),
        OutputFormat::Json => print_json(&serde_json::json!({
            "page": page,
            "zoom": zoom.unwrap_or(DEFAULT_ZOOM),
            "raster": raster,
        }))?,
    }
    Ok(())
}
