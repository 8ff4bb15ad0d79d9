//! Analysis phase: fault-isolated checks over a fetched response

pub mod cookies;
pub mod forms;
pub mod headers;

use crate::error::Result;
use crate::html;
use crate::models::{FetchedResponse, Finding, Severity, Status};
use tracing::warn;

/// Runs every applicable check over the response and collects the findings.
///
/// Header and cookie checks always run; form extraction and the form check
/// only run when a body is present (otherwise a single missing-content
/// finding is appended). A failing step is folded into one `error` finding
/// so partial results always survive and sibling checks are never skipped.
pub fn analyze(response: &FetchedResponse) -> Vec<Finding> {
    let mut findings = Vec::new();

    findings.extend(fold_failure(
        "Header Analysis",
        "Inspect response headers manually.",
        headers::evaluate(&response.headers, response.is_secure),
    ));

    findings.extend(fold_failure(
        "Cookie Analysis",
        "Inspect cookies manually.",
        cookies::evaluate(&response.cookies, response.is_secure),
    ));

    match &response.body {
        Some(body) => match html::extract_forms(body) {
            Ok(extracted) => findings.extend(fold_failure(
                "Form Analysis",
                "Manually inspect forms if applicable.",
                forms::evaluate(&extracted),
            )),
            Err(e) => findings.push(error_finding(
                "HTML Parsing",
                &e.to_string(),
                "Manually inspect forms if applicable.",
            )),
        },
        None => findings.push(
            Finding::new("HTML Content", Status::Missing, Severity::Low)
                .with_description("No HTML body was returned by the server.")
                .with_remediation("Ensure the endpoint serves HTML content."),
        ),
    }

    findings
}

/// Converts a failed check into exactly one `error` finding; a successful
/// check passes its findings through untouched.
fn fold_failure(name: &str, remediation: &str, result: Result<Vec<Finding>>) -> Vec<Finding> {
    match result {
        Ok(findings) => findings,
        Err(e) => vec![error_finding(name, &e.to_string(), remediation)],
    }
}

fn error_finding(name: &str, message: &str, remediation: &str) -> Finding {
    warn!("{name} failed: {message}");
    Finding::new(name, Status::Error, Severity::Low)
        .with_description(format!("{name} failed: {message}"))
        .with_remediation(remediation)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ScanError;
    use std::collections::HashMap;

    fn response(body: Option<&str>, final_url: &str) -> FetchedResponse {
        FetchedResponse {
            requested_url: "http://example.com".to_string(),
            final_url: final_url.to_string(),
            status_code: 200,
            headers: HashMap::new(),
            cookies: Vec::new(),
            body: body.map(String::from),
            is_secure: final_url.starts_with("https://"),
        }
    }

    #[test]
    fn test_missing_body_appends_single_content_finding() {
        let findings = analyze(&response(None, "http://example.com"));

        let content: Vec<_> = findings.iter().filter(|f| f.title == "HTML Content").collect();
        assert_eq!(content.len(), 1);
        assert_eq!(content[0].status, Status::Missing);
        assert_eq!(content[0].severity, Severity::Low);
        // Form analysis is skipped entirely
        assert!(!findings.iter().any(|f| f.title.contains("Form")));
    }

    #[test]
    fn test_body_without_forms_reports_forms_absent() {
        let findings = analyze(&response(Some("<html><body></body></html>"), "http://example.com"));
        assert!(findings
            .iter()
            .any(|f| f.title == "Forms" && f.status == Status::Absent));
    }

    #[test]
    fn test_secure_final_url_enables_hsts_check() {
        // Requested over HTTP, final URL HTTPS: the HSTS rule must apply
        let findings = analyze(&response(None, "https://example.com"));
        assert!(findings
            .iter()
            .any(|f| f.title == "Strict-Transport-Security"));
    }

    #[test]
    fn test_fold_failure_produces_one_error_finding() {
        let failed: crate::error::Result<Vec<Finding>> =
            Err(ScanError::Analysis("boom".to_string()));
        let findings = fold_failure("Header Analysis", "Inspect manually.", failed);

        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].title, "Header Analysis");
        assert_eq!(findings[0].status, Status::Error);
        assert_eq!(findings[0].severity, Severity::Low);
        assert!(findings[0].description.contains("boom"));
    }

    #[test]
    fn test_fold_failure_passes_success_through() {
        let ok: crate::error::Result<Vec<Finding>> = Ok(vec![Finding::new(
            "X",
            Status::Present,
            Severity::Low,
        )]);
        let findings = fold_failure("Header Analysis", "n/a", ok);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].title, "X");
    }
}
