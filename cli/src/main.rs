use std::io;

use anyhow::Context;
use clap::Parser;
use posts_cli::{Config, Shell, StdinLines, TerminalConfirm, UreqTransport};
use posts_core::{PostsApi, PostsController};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();
    config.init_logging();
    tracing::info!(base_url = %config.base_url, "starting posts shell");

    let api = PostsApi::new(&config.base_url, UreqTransport::new());
    let controller = PostsController::new(api, TerminalConfirm::new(StdinLines, io::stdout()));

    Shell::new(controller, StdinLines, io::stdout())
        .run()
        .context("terminal I/O failed")
}
