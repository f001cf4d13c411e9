use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use tokio::signal;
use tokio::time::sleep;
use tracing::info;

/// Cooperative stop signal for the refresh loop.
///
/// Production runs forever; the flag exists so Ctrl+C ends the loop between
/// runs and so tests can stop it deterministically.
#[derive(Clone)]
pub struct ShutdownFlag {
    running: Arc<AtomicBool>,
}

impl ShutdownFlag {
    pub fn new() -> Self {
        Self {
            running: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Spawns a Ctrl+C handler that clears the flag.
    pub fn spawn_signal_handler(&self) {
        let flag = self.clone();
        tokio::spawn(async move {
            if signal::ctrl_c().await.is_ok() {
                info!("received shutdown signal");
                flag.stop();
            }
        });
    }

    pub fn is_running(&self) -> bool {
        self.running.load(Ordering::Acquire)
    }

    pub fn stop(&self) {
        self.running.store(false, Ordering::Release);
    }

    /// Sleeps for `duration`, waking early when the flag clears.
    pub async fn sleep(&self, duration: Duration) {
        let tick = Duration::from_millis(50);
        let mut elapsed = Duration::ZERO;

        while elapsed < duration && self.is_running() {
            sleep(tick).await;
            elapsed += tick;
        }
    }
}

impl Default for ShutdownFlag {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn stop_clears_the_flag() {
        let flag = ShutdownFlag::new();
        assert!(flag.is_running());
        flag.stop();
        assert!(!flag.is_running());
    }

    #[tokio::test]
    async fn sleep_wakes_early_on_stop() {
        let flag = ShutdownFlag::new();
        let sleeper = flag.clone();

        let waited = tokio::spawn(async move {
            let start = tokio::time::Instant::now();
            sleeper.sleep(Duration::from_secs(60)).await;
            start.elapsed()
        });

        tokio::time::sleep(Duration::from_millis(120)).await;
        flag.stop();

        let elapsed = waited.await.unwrap();
        assert!(elapsed < Duration::from_secs(5));
    }
}
