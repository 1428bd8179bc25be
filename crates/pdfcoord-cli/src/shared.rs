use pdfcoord_core::{PageFrame, RasterFrame, TransformError};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::FrameArgs;

/// Zoom used when neither `--raster` nor `--zoom` is given.
pub const DEFAULT_ZOOM: f64 = 2.0;

/// Install a stderr log subscriber. `RUST_LOG` overrides the level.
pub fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

/// Print a core error to stderr and turn it into exit code 1.
pub fn report(err: TransformError) -> i32 {
    eprintln!("Error: {err}");
    1
}

/// Parse `--page`, then take `--raster` as given or derive it from the zoom.
pub fn resolve_frames(args: &FrameArgs) -> Result<(RasterFrame, PageFrame), i32> {
    let page = parse_page(&args.page)?;
    let raster = match &args.raster {
        Some(raster) => raster.parse::<RasterFrame>().map_err(report)?,
        None => raster_for_zoom(&page, args.zoom)?,
    };
    tracing::debug!(%raster, %page, "resolved frames");
    Ok((raster, page))
}

pub fn parse_page(page: &str) -> Result<PageFrame, i32> {
    page.parse::<PageFrame>().map_err(report)
}

pub fn raster_for_zoom(page: &PageFrame, zoom: Option<f64>) -> Result<RasterFrame, i32> {
    RasterFrame::for_zoom(page, zoom.unwrap_or(DEFAULT_ZOOM)).map_err(report)
}

/// Format coordinates as `(a, b, ...)` with a fixed number of decimals.
pub fn format_coords(values: &[f64], precision: u8) -> String {
    let precision = usize::from(precision);
    let parts: Vec<String> = values
        .iter()
        .map(|v| format!("{v:.precision$}"))
        .collect();
    format!("({})", parts.join(", "))
}

/// Pretty-print a JSON value to stdout.
pub fn print_json(value: &serde_json::Value) -> Result<(), i32> {
    let text = serde_json::to_string_pretty(value).map_err(|e| {
        eprintln!("Error: failed to serialize output: {e}");
        1
    })?;
    println!("{text}");
    Ok(())
}
