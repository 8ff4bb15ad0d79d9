//! Plaintext report rendering

use crate::models::Finding;
use std::cmp::Reverse;
use std::fmt::Write;

const RULE_WIDTH: usize = 60;

/// Renders findings as a human-readable report, ordered by severity.
///
/// The sort is stable: findings of equal severity keep their original
/// relative order, so report sections stay grouped the way the checks
/// emitted them.
pub fn render(findings: &[Finding]) -> String {
    if findings.is_empty() {
        return "No findings to report.".to_string();
    }

    let mut sorted: Vec<&Finding> = findings.iter().collect();
    sorted.sort_by_key(|f| Reverse(f.severity.rank()));

    let mut out = String::new();
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out, "WEB SECURITY CHECK REPORT");
    let _ = writeln!(out, "{}", "=".repeat(RULE_WIDTH));
    let _ = writeln!(out, "Total Findings: {}", sorted.len());
    let _ = writeln!(out);

    for finding in sorted {
        let _ = writeln!(out, "[{}] {}", finding.severity, finding.title);
        let _ = writeln!(out, "Status      : {}", finding.status);
        let _ = writeln!(out, "Why it matters:");
        let _ = writeln!(out, "  {}", finding.description);
        let _ = writeln!(out, "Remediation : {}", finding.remediation);
        let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
    }

    // No trailing newline after the last separator
    let trimmed = out.trim_end_matches('\n').len();
    out.truncate(trimmed);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Severity, Status};

    fn finding(title: &str, severity: Severity) -> Finding {
        Finding::new(title, Status::Missing, severity)
            .with_description("description")
            .with_remediation("remediation")
    }

    #[test]
    fn test_empty_findings() {
        assert_eq!(render(&[]), "No findings to report.");
    }

    #[test]
    fn test_severity_ordering_is_stable() {
        let findings = vec![
            finding("low", Severity::Low),
            finding("high-first", Severity::High),
            finding("medium", Severity::Medium),
            finding("high-second", Severity::High),
        ];

        let report = render(&findings);
        let order: Vec<usize> = ["high-first", "high-second", "medium", "low"]
            .iter()
            .map(|t| report.find(&format!("] {t}\n")).expect("title missing"))
            .collect();

        assert!(order.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_report_structure() {
        let report = render(&[finding("Content-Security-Policy", Severity::Medium)]);

        assert!(report.contains("Total Findings: 1"));
        assert!(report.contains("[MEDIUM] Content-Security-Policy"));
        assert!(report.contains("Status      : missing"));
        assert!(report.contains("Why it matters:"));
        assert!(report.contains("  description"));
        assert!(report.contains("Remediation : remediation"));
    }

    #[test]
    fn test_method_status_renders_verbatim() {
        let f = Finding::new(
            "Form 1 - HTTP Method",
            Status::Method("GET".to_string()),
            Severity::Medium,
        );
        let report = render(&[f]);
        assert!(report.contains("Status      : GET"));
    }
}
