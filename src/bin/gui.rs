use anyhow::Context;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("mandelbrot_explorer=info,wgpu=warn")),
        )
        .init();

    mandelbrot_explorer::run_gui(mandelbrot_explorer::MandelbrotConfig::default())
        .context("explorer window failed")
}
