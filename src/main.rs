mod cli;
mod collector;
mod config;
mod refresh;
mod server;
mod shutdown;
mod types;

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, Level};

use crate::server::state::AppState;
use crate::shutdown::ShutdownFlag;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Arc::new(cli::parse());
    init_tracing(config.verbose);

    let state = AppState::new();
    let flag = ShutdownFlag::new();
    flag.spawn_signal_handler();

    tokio::spawn(refresh::run(state.clone(), Arc::clone(&config), flag));

    info!(
        host = config::BIND_ADDR.0,
        port = config::BIND_ADDR.1,
        "starting HTTP server"
    );
    server::serve(state).await?;

    Ok(())
}

fn init_tracing(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();
}
