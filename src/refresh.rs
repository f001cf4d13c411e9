use std::sync::Arc;

use tracing::{error, info};

use crate::collector;
use crate::config::{Config, REFRESH_INTERVAL, RETRY_DELAY};
use crate::server::state::AppState;
use crate::shutdown::ShutdownFlag;

/// Re-collects the investor table for the process lifetime, publishing each
/// completed run wholesale.
///
/// Request handlers never wait on this loop. A failed run is logged and
/// retried after a short flat delay; only the shutdown flag ends the loop.
pub async fn run(state: AppState, config: Arc<Config>, shutdown: ShutdownFlag) {
    while shutdown.is_running() {
        info!("starting background crawl");
        match collector::run(&config).await {
            Ok(records) => {
                info!(total = records.len(), "background crawl completed");
                state.publish(records).await;
                shutdown.sleep(REFRESH_INTERVAL).await;
            }
            Err(err) => {
                error!(error = %err, "background crawl failed");
                shutdown.sleep(RETRY_DELAY).await;
            }
        }
    }
    info!("refresh loop stopped");
}
