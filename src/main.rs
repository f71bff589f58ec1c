use clap::Parser;

use strategy_hist::cli::Args;
use strategy_hist::render::WindowRenderer;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    strategy_hist::run(&args, &mut std::io::stdout(), &WindowRenderer::default())
}
