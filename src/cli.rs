use clap::Parser;
use std::path::PathBuf;

use crate::config::Config;

#[derive(Parser, Debug)]
#[command(name = "llamafeed")]
#[command(about = "Background scraper + JSON API for DeFi Llama investor raises", long_about = None)]
#[command(version)]
pub struct Args {
    /// Path to a Chrome/Chromium binary
    ///
    /// When omitted the binary is resolved from CHROME_BIN/CHROMIUM_BIN,
    /// PATH, and standard install locations.
    #[arg(long, value_name = "PATH")]
    pub chrome_bin: Option<PathBuf>,

    /// Enable debug-level logging
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    pub fn into_config(self) -> Config {
        Config {
            chrome_bin: self.chrome_bin,
            verbose: self.verbose,
        }
    }
}

pub fn parse() -> Config {
    Args::parse().into_config()
}
