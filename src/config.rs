use std::path::PathBuf;
use std::time::Duration;

/// Page listing investors across fundraising rounds.
pub const TARGET_URL: &str = "https://defillama.com/raises/investors";

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36";

/// Pixels scrolled per loop iteration.
pub const SCROLL_STEP: u32 = 300;
/// Total scroll distance after which the collector gives up.
pub const MAX_SCROLL_DISTANCE: u32 = 30_000;
/// Consecutive no-new-data iterations after which the table counts as drained.
pub const QUIESCENCE_LIMIT: u32 = 5;

/// Settle time after the initial page load, before the first extraction.
pub const PAGE_SETTLE: Duration = Duration::from_secs(5);
/// Settle time after each scroll step, for lazy-loaded rows to render.
pub const SCROLL_SETTLE: Duration = Duration::from_millis(1500);
pub const NAVIGATION_TIMEOUT: Duration = Duration::from_secs(60);

/// Pause between successful collection runs.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(3600);
/// Pause before retrying a failed collection run.
pub const RETRY_DELAY: Duration = Duration::from_secs(60);

pub const BIND_ADDR: (&str, u16) = ("0.0.0.0", 8080);

#[derive(Debug, Clone)]
pub struct Config {
    pub chrome_bin: Option<PathBuf>,
    pub verbose: bool,
}
