use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use mandelbrot_explorer::{CliOptions, PpmFilePresenter, RenderToFileController};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mandelbrot_explorer=info")),
        )
        .init();

    let options = CliOptions::parse();
    let presenter = PpmFilePresenter::new(&options.output);
    let mut controller =
        RenderToFileController::new(options, presenter).context("invalid render settings")?;

    controller.generate().context("render failed")?;
    controller.write().context("failed to write frame")?;

    Ok(())
}
