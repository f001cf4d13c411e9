mod browser;
mod extract;
mod session;

use anyhow::{Context, Result};
use chromiumoxide::error::CdpError;
use chromiumoxide::{Browser, Page};
use tokio::time;
use tracing::{error, info, warn};

use crate::config::{self, Config};
use crate::types::{InvestorRecord, RawExtraction};

use session::ScrapeSession;

/// Performs one full collection run against the target page.
///
/// Only launch and navigation failures propagate. Errors inside the scroll
/// loop either retry the step (timeouts) or end the run early with whatever
/// was accumulated. Exactly one browser instance is acquired per run and
/// released on every exit path.
pub async fn run(config: &Config) -> Result<Vec<InvestorRecord>> {
    let (mut browser, handler_task) = browser::launch(config).await?;

    let outcome = collect(&browser).await;

    // Release the instance on every exit path, success or not.
    if let Err(err) = browser.close().await {
        warn!(error = %err, "failed to close browser cleanly");
    }
    let _ = browser.wait().await;
    handler_task.abort();

    outcome
}

async fn collect(browser: &Browser) -> Result<Vec<InvestorRecord>> {
    info!(url = config::TARGET_URL, "starting investor table scrape");

    let page = time::timeout(
        config::NAVIGATION_TIMEOUT,
        browser.new_page(config::TARGET_URL),
    )
    .await
    .context("page load timed out")?
    .context("failed to open target page")?;

    info!("target page loaded");
    time::sleep(config::PAGE_SETTLE).await;

    let mut session = ScrapeSession::start();

    while !session.finished() {
        session.record_scroll();

        match step(&page).await {
            Ok(raw) => {
                let visible = raw.investors.len();
                let fresh = session.ingest(raw);
                if fresh > 0 {
                    info!(
                        position = session.position(),
                        visible,
                        fresh,
                        total = session.len(),
                        "scroll step found new investors"
                    );
                } else {
                    info!(
                        position = session.position(),
                        stale = session.stale_steps(),
                        limit = config::QUIESCENCE_LIMIT,
                        "no new investors this step"
                    );
                }
            }
            Err(CdpError::Timeout) => {
                warn!(position = session.position(), "scroll step timed out, retrying");
                continue;
            }
            Err(err) => {
                error!(error = %err, "unexpected browser error, keeping partial results");
                break;
            }
        }
    }

    let records = session.into_records();
    info!(total = records.len(), "scrape complete");
    Ok(records)
}

async fn step(page: &Page) -> Result<RawExtraction, CdpError> {
    extract::scroll_by(page, config::SCROLL_STEP).await?;
    time::sleep(config::SCROLL_SETTLE).await;
    extract::raw_columns(page).await
}
