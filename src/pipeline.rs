//! Scan orchestration: validate, fetch, analyze, report

use crate::analysis;
use crate::error::{Result, ScanError};
use crate::http::HttpFetcher;
use crate::models::ScanConfig;
use crate::report;
use crate::target;
use tracing::{info, warn};

/// One-shot scan pipeline for a single target URL.
///
/// A scan either aborts before analysis with a single `[ERROR]` line
/// (invalid URL, fetch failure) or always produces a full report; failures
/// inside individual checks surface as `error`-status findings within the
/// report, never as a scan abort.
pub struct ScanPipeline {
    fetcher: HttpFetcher,
}

impl ScanPipeline {
    /// Creates a pipeline with a fetcher built from the scan configuration
    pub fn new(config: &ScanConfig) -> Result<Self> {
        Ok(Self {
            fetcher: HttpFetcher::from_config(config)?,
        })
    }

    /// Runs the full scan and returns the report text, or a single-line
    /// `[ERROR] ...` string when the scan aborts before analysis.
    pub async fn run(&self, raw_url: &str) -> String {
        let normalized = match validate_and_normalize(raw_url) {
            Ok(normalized) => normalized,
            Err(e) => {
                warn!("{e}");
                return format!("[ERROR] Invalid URL provided: {raw_url}");
            }
        };

        if !target::is_single_domain(&normalized) {
            info!("Target appears to be a multi-level domain: {normalized}");
        }

        info!("Fetching {normalized}");
        let mut response = match self.fetcher.fetch(&normalized).await {
            Ok(response) => response,
            Err(e) => {
                warn!("Fetch failed for {normalized}: {e}");
                return format!("[ERROR] Unable to fetch response from {normalized}");
            }
        };

        // The requested URL may have redirected across schemes; the final
        // URL decides whether HTTPS-only checks apply.
        response.is_secure = response.secure_transport();

        let findings = analysis::analyze(&response);
        info!("Analysis produced {} findings", findings.len());

        let mut out = report::render(&findings);
        out.push_str(&format!(
            "\n\nScanned URL      : {normalized}\nFinal Destination: {}",
            response.final_url
        ));
        out
    }
}

/// Validating stage: rejects syntactically broken targets, then normalizes
/// the survivors (default scheme, query/fragment stripped).
fn validate_and_normalize(raw_url: &str) -> Result<String> {
    if !target::validate_url(raw_url) {
        return Err(ScanError::InvalidUrl(raw_url.to_string()));
    }
    Ok(target::normalize_url(raw_url))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FetchedResponse;
    use std::collections::HashMap;

    #[test]
    fn test_secure_transport_follows_final_url() {
        let response = FetchedResponse {
            requested_url: "http://example.com".to_string(),
            final_url: "https://example.com/".to_string(),
            status_code: 200,
            headers: HashMap::new(),
            cookies: Vec::new(),
            body: None,
            is_secure: false,
        };
        assert!(response.secure_transport());
    }

    #[tokio::test]
    async fn test_invalid_url_aborts_with_error_line() {
        let pipeline = ScanPipeline::new(&ScanConfig::default()).expect("pipeline");
        let result = pipeline.run("not a url").await;
        assert_eq!(result, "[ERROR] Invalid URL provided: not a url");
    }
}
