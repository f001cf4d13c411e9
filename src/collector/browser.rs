use std::env;
use std::path::PathBuf;

use anyhow::{bail, Result};
use chromiumoxide::browser::{Browser, BrowserConfig};
use futures::StreamExt;
use tokio::task::JoinHandle;
use tracing::debug;

use crate::config::{self, Config};

/// Launches one headless Chromium instance and drains its CDP event stream
/// on a spawned task. The caller owns the browser and must close it.
pub async fn launch(config: &Config) -> Result<(Browser, JoinHandle<()>)> {
    let chrome_binary = resolve_chrome_binary(config.chrome_bin.clone())?;
    debug!(binary = %chrome_binary.display(), "using Chrome binary");

    let user_agent = format!("--user-agent={}", config::USER_AGENT);
    let (browser, mut handler) = Browser::launch(
        BrowserConfig::builder()
            .chrome_executable(chrome_binary)
            .args(vec![
                "--headless",
                "--no-sandbox",
                "--disable-setuid-sandbox",
                "--disable-dev-shm-usage",
                "--disable-gpu",
                "--disable-software-rasterizer",
                user_agent.as_str(),
            ])
            .build()
            .map_err(|e| anyhow::anyhow!("failed to build browser config: {}", e))?,
    )
    .await?;

    let handler_task = tokio::spawn(async move {
        loop {
            match handler.next().await {
                Some(Ok(_)) => continue,
                Some(Err(_)) => continue,
                None => break,
            }
        }
    });

    Ok((browser, handler_task))
}

fn resolve_chrome_binary(override_path: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = override_path {
        if path.is_file() {
            return Ok(path);
        }
        bail!(
            "Chrome/Chromium binary not found at provided path: {}",
            path.display()
        );
    }

    for key in ["CHROME_BIN", "CHROMIUM_BIN"] {
        if let Ok(val) = env::var(key) {
            let candidate = PathBuf::from(val);
            if candidate.is_file() {
                return Ok(candidate);
            }
        }
    }

    let mut candidates: Vec<PathBuf> = Vec::new();

    if let Some(path_var) = env::var_os("PATH") {
        for dir in env::split_paths(&path_var) {
            candidates.extend(candidate_names().map(|name| dir.join(name)));
        }
    }

    candidates.extend(
        [
            "/usr/bin/google-chrome",
            "/usr/bin/google-chrome-stable",
            "/usr/bin/chromium",
            "/usr/bin/chromium-browser",
            "/snap/bin/chromium",
        ]
        .into_iter()
        .map(PathBuf::from),
    );

    if let Some(found) = candidates.into_iter().find(|p| p.is_file()) {
        return Ok(found);
    }

    bail!(
        "Could not locate Chrome/Chromium. Set --chrome-bin or CHROME_BIN. Checked common names (google-chrome, chromium, chrome) on PATH and standard install locations."
    );
}

fn candidate_names() -> impl Iterator<Item = &'static str> {
    [
        "google-chrome",
        "google-chrome-stable",
        "chromium",
        "chromium-browser",
        "chrome",
    ]
    .into_iter()
}
