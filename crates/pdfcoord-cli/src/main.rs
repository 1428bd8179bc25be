mod cli;
mod frame_cmd;
mod inverse_cmd;
mod point_cmd;
mod rect_cmd;
mod shared;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    shared::init_logging(cli.verbose);

    let result = match cli.command {
        cli::Commands::Point {
            x,
            y,
            ref frames,
            ref output,
        } => point_cmd::run(x, y, frames, output),
        cli::Commands::Rect {
            x1,
            y1,
            x2,
            y2,
            normalize,
            ref frames,
            ref output,
        } => rect_cmd::run([x1, y1, x2, y2], normalize, frames, output),
        cli::Commands::Inverse {
            x,
            y,
            ref frames,
            ref output,
        } => inverse_cmd::run(x, y, frames, output),
        cli::Commands::Frame {
            ref page,
            zoom,
            ref output,
        } => frame_cmd::run(page, zoom, output),
    };

    if let Err(code) = result {
        std::process::exit(code);
    }
}
