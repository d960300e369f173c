//! Loads `ScrapeConfig` from an optional RON file and applies CLI overrides.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use engine_logging::engine_info;
use sbs_engine::ScrapeConfig;

use crate::cli::Args;

pub fn load(args: &Args) -> Result<ScrapeConfig> {
    let mut config = match args.config.as_deref() {
        Some(path) => read_config(path)?,
        None => ScrapeConfig::default(),
    };

    if let Some(url) = &args.url {
        config.listing_url = url.clone();
    }
    if let Some(timeout) = args.timeout {
        config.timeout_secs = timeout;
        config.connect_timeout_secs = timeout;
    }
    if let Some(concurrency) = args.concurrency {
        config.concurrency = concurrency;
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn read_config(path: &Path) -> Result<ScrapeConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let config: ScrapeConfig = ron::from_str(&content)
        .with_context(|| format!("failed to parse config file {}", path.display()))?;
    engine_info!("Loaded configuration from {:?}", path);
    Ok(config)
}
