//! Cookie security attributes check

use crate::error::Result;
use crate::models::{CookieRecord, Finding, Severity, Status};

fn flag_status(set: bool) -> Status {
    if set {
        Status::Present
    } else {
        Status::Missing
    }
}

/// Checks each cookie for the Secure, HttpOnly, and SameSite attributes.
///
/// An empty cookie set yields a single `absent` finding and nothing else.
/// The Secure-flag finding is only emitted when the final transport is HTTPS,
/// since the flag is meaningless for a plain-HTTP scan.
pub fn evaluate(cookies: &[CookieRecord], is_secure: bool) -> Result<Vec<Finding>> {
    if cookies.is_empty() {
        return Ok(vec![Finding::new("Cookies", Status::Absent, Severity::Low)
            .with_description("No cookies were set by the server.")
            .with_remediation(
                "No action required if the application does not rely on cookies.",
            )]);
    }

    let mut findings = Vec::new();

    for cookie in cookies {
        let name = &cookie.name;

        if is_secure {
            findings.push(
                Finding::new(
                    format!("Cookie '{name}' - Secure Flag"),
                    flag_status(cookie.secure),
                    Severity::Medium,
                )
                .with_description("Ensures the cookie is only sent over HTTPS connections.")
                .with_remediation(
                    "Set the Secure flag to prevent the cookie from being sent over HTTP.",
                ),
            );
        }

        findings.push(
            Finding::new(
                format!("Cookie '{name}' - HttpOnly Flag"),
                flag_status(cookie.http_only),
                Severity::Medium,
            )
            .with_description("Prevents JavaScript from accessing the cookie.")
            .with_remediation(
                "Enable the HttpOnly flag to protect against client-side script access.",
            ),
        );

        let has_same_site = cookie
            .same_site
            .as_deref()
            .is_some_and(|v| !v.is_empty());
        findings.push(
            Finding::new(
                format!("Cookie '{name}' - SameSite Attribute"),
                flag_status(has_same_site),
                Severity::Low,
            )
            .with_description("Controls whether cookies are sent with cross-site requests.")
            .with_remediation(
                "Set SameSite to 'Lax' or 'Strict' to reduce cross-site request risks.",
            ),
        );
    }

    Ok(findings)
}
