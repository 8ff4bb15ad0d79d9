//! Configuration file loading

use crate::error::Result;
use crate::models::ScanConfig;
use serde::Deserialize;
use std::path::Path;

/// File-based configuration structure matching webcheck.toml
#[derive(Debug, Deserialize)]
struct FileConfig {
    scan: Option<ScanSection>,
}

#[derive(Debug, Deserialize)]
struct ScanSection {
    timeout_secs: Option<u64>,
    user_agent: Option<String>,
    follow_redirects: Option<bool>,
}

/// Loads configuration from a TOML file and merges it over the defaults
pub fn load_config(path: &Path) -> Result<ScanConfig> {
    let content = std::fs::read_to_string(path)?;
    let file_config: FileConfig = toml::from_str(&content)?;

    let mut config = ScanConfig::default();

    if let Some(scan) = file_config.scan {
        if let Some(timeout) = scan.timeout_secs {
            config.timeout_secs = timeout;
        }
        if let Some(user_agent) = scan.user_agent {
            config.user_agent = user_agent;
        }
        if let Some(follow) = scan.follow_redirects {
            config.follow_redirects = follow;
        }
    }

    Ok(config)
}
