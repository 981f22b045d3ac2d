//! Collage CLI entrypoint.
//!
//! Parses arguments, sets up logging, runs the collage pipeline and exits
//! with a status that identifies the failure. For programmatic use, call
//! `collage_core::build_collage` directly.

use std::process::ExitCode;

use clap::Parser;
use tracing::{info, Level};

mod args;

use args::CliArgs;

fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.debug);
    run(&args)
}

/// Log to stderr without timestamps. Only warnings show unless `debug`.
fn init_logging(debug: bool) {
    let level = if debug { Level::DEBUG } else { Level::WARN };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
    info!("Debug logging enabled");
}

fn run(args: &CliArgs) -> ExitCode {
    let config = args.to_config();
    info!(
        "Input: {}, output: {}, tile size: {}, removing {} row(s)",
        config.input_dir.display(),
        config.output.display(),
        config.tile_size,
        config.remove_rows
    );

    match collage_core::build_collage(&config) {
        Ok(summary) => {
            info!(
                "Wrote {}x{} collage to {}",
                summary.width,
                summary.height,
                summary.output.display()
            );
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::from(err.exit_code())
        }
    }
}
