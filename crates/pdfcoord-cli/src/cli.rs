use clap::{Args, Parser, Subcommand, ValueEnum};

/// Convert clicks and drags on a rendered PDF page to PDF coordinates.
#[derive(Debug, Parser)]
#[command(name = "pdfcoord", about, version)]
pub struct Cli {
    /// Log transform details to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Convert a clicked pixel to a PDF point
    #[command(allow_negative_numbers = true)]
    Point {
        /// Pixel x (from the left edge of the image)
        #[arg(value_name = "X")]
        x: f64,

        /// Pixel y (from the top edge of the image)
        #[arg(value_name = "Y")]
        y: f64,

        #[command(flatten)]
        frames: FrameArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Convert a dragged pixel rectangle to PDF corners
    #[command(allow_negative_numbers = true)]
    Rect {
        /// First corner x
        #[arg(value_name = "X1")]
        x1: f64,

        /// First corner y
        #[arg(value_name = "Y1")]
        y1: f64,

        /// Opposite corner x
        #[arg(value_name = "X2")]
        x2: f64,

        /// Opposite corner y
        #[arg(value_name = "Y2")]
        y2: f64,

        /// Reorder the result to (min_x, min_y, max_x, max_y)
        #[arg(long)]
        normalize: bool,

        #[command(flatten)]
        frames: FrameArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Convert a PDF point back to the pixel it was rendered at
    #[command(allow_negative_numbers = true)]
    Inverse {
        /// PDF x (from the left edge of the page)
        #[arg(value_name = "X")]
        x: f64,

        /// PDF y (from the bottom edge of the page)
        #[arg(value_name = "Y")]
        y: f64,

        #[command(flatten)]
        frames: FrameArgs,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Show the raster size a page renders to at a zoom factor
    Frame {
        /// Page size in points ('WIDTHxHEIGHT') or a paper name like 'a4'
        #[arg(long, value_name = "FRAME")]
        page: String,

        /// Zoom factor applied by the renderer (default: 2.0)
        #[arg(long)]
        zoom: Option<f64>,

        #[command(flatten)]
        output: OutputArgs,
    },
}

/// Page and raster dimensions shared by the conversion subcommands.
#[derive(Debug, Args)]
pub struct FrameArgs {
    /// Page size in points ('WIDTHxHEIGHT') or a paper name like 'letter'
    #[arg(long, value_name = "FRAME")]
    pub page: String,

    /// Rendered image size in pixels ('WIDTHxHEIGHT')
    #[arg(long, value_name = "WxH", conflicts_with = "zoom")]
    pub raster: Option<String>,

    /// Zoom factor the image was rendered at, used when --raster is absent (default: 2.0)
    #[arg(long)]
    pub zoom: Option<f64>,
}

/// Output options shared by all subcommands.
#[derive(Debug, Args)]
pub struct OutputArgs {
    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Decimal places in text output, 0 to 17 (default: 1)
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u8).range(0..=17))]
    pub precision: u8,
}

/// Output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
