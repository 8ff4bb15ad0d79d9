//! Security headers check

use crate::error::Result;
use crate::models::{Finding, Severity, Status};
use std::collections::{HashMap, HashSet};
use tracing::debug;

struct HeaderRule {
    name: &'static str,
    severity: Severity,
    /// Only evaluated when the final transport is HTTPS
    https_only: bool,
    description: &'static str,
    remediation: &'static str,
}

const RULES: &[HeaderRule] = &[
    HeaderRule {
        name: "Content-Security-Policy",
        severity: Severity::Medium,
        https_only: false,
        description: "Controls which resources the browser is allowed to load.",
        remediation: "Define a Content-Security-Policy header to restrict allowed resources.",
    },
    HeaderRule {
        name: "X-Frame-Options",
        severity: Severity::Low,
        https_only: false,
        description: "Prevents the page from being embedded in frames or iframes.",
        remediation: "Add the X-Frame-Options header to control iframe embedding.",
    },
    HeaderRule {
        name: "X-Content-Type-Options",
        severity: Severity::Low,
        https_only: false,
        description: "Prevents browsers from MIME-sniffing a response away from the declared content type.",
        remediation: "Set X-Content-Type-Options to 'nosniff'.",
    },
    HeaderRule {
        name: "Referrer-Policy",
        severity: Severity::Low,
        https_only: false,
        description: "Controls how much referrer information is included with requests.",
        remediation: "Define a Referrer-Policy to limit information leakage.",
    },
    HeaderRule {
        name: "Strict-Transport-Security",
        severity: Severity::Medium,
        https_only: true,
        description: "Forces browsers to interact with the site only over HTTPS.",
        remediation: "Enable Strict-Transport-Security to enforce HTTPS connections.",
    },
];

/// Checks the response headers for the presence of baseline security headers.
///
/// Membership tests are exact header-name matches after case normalization;
/// one `present`/`missing` finding per rule. The HSTS rule only applies when
/// the final transport is HTTPS.
pub fn evaluate(headers: &HashMap<String, String>, is_secure: bool) -> Result<Vec<Finding>> {
    let present: HashSet<String> = headers.keys().map(|k| k.to_ascii_lowercase()).collect();

    let mut findings = Vec::new();

    for rule in RULES {
        if rule.https_only && !is_secure {
            continue;
        }

        let status = if present.contains(&rule.name.to_ascii_lowercase()) {
            Status::Present
        } else {
            Status::Missing
        };
        debug!("Header '{}': {status}", rule.name);

        findings.push(
            Finding::new(rule.name, status, rule.severity)
                .with_description(rule.description)
                .with_remediation(rule.remediation),
        );
    }

    Ok(findings)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_of(names: &[&str]) -> HashMap<String, String> {
        names
            .iter()
            .map(|n| (n.to_string(), "value".to_string()))
            .collect()
    }

    #[test]
    fn test_all_missing_non_secure() {
        let findings = evaluate(&HashMap::new(), false).unwrap();
        assert_eq!(findings.len(), 4);
        assert!(findings.iter().all(|f| f.status == Status::Missing));
        assert!(!findings
            .iter()
            .any(|f| f.title == "Strict-Transport-Security"));
    }

    #[test]
    fn test_all_missing_secure_includes_hsts() {
        let findings = evaluate(&HashMap::new(), true).unwrap();
        assert_eq!(findings.len(), 5);
        assert!(findings.iter().all(|f| f.status == Status::Missing));
        assert!(findings
            .iter()
            .any(|f| f.title == "Strict-Transport-Security" && f.severity == Severity::Medium));
    }

    #[test]
    fn test_case_insensitive_lookup() {
        let headers = headers_of(&["content-security-policy", "X-FRAME-OPTIONS"]);
        let findings = evaluate(&headers, false).unwrap();

        let csp = findings
            .iter()
            .find(|f| f.title == "Content-Security-Policy")
            .unwrap();
        assert_eq!(csp.status, Status::Present);

        let xfo = findings.iter().find(|f| f.title == "X-Frame-Options").unwrap();
        assert_eq!(xfo.status, Status::Present);
    }

    #[test]
    fn test_no_partial_name_match() {
        let headers = headers_of(&["X-Content-Type-Options-Extra"]);
        let findings = evaluate(&headers, false).unwrap();

        let xcto = findings
            .iter()
            .find(|f| f.title == "X-Content-Type-Options")
            .unwrap();
        assert_eq!(xcto.status, Status::Missing);
    }

    #[test]
    fn test_idempotent() {
        let headers = headers_of(&["Referrer-Policy"]);
        let first = evaluate(&headers, true).unwrap();
        let second = evaluate(&headers, true).unwrap();
        assert_eq!(first, second);
    }
}
