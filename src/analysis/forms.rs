//! Form hygiene check: method, password exposure, CSRF protection

use crate::error::Result;
use crate::models::{Finding, FormRecord, Severity, Status};

/// Hidden-input name fragments that indicate a CSRF token
const CSRF_KEYWORDS: &[&str] = &["csrf", "token", "auth", "nonce"];

/// Checks each extracted form for basic security hygiene.
///
/// An empty form list yields a single `absent` finding noting that
/// JavaScript-rendered forms may be undetected. Per form: a method finding
/// whose status is the literal method string (Medium unless POST), a
/// password-field finding only when one is present, and a CSRF finding
/// always.
pub fn evaluate(forms: &[FormRecord]) -> Result<Vec<Finding>> {
    if forms.is_empty() {
        return Ok(vec![Finding::new("Forms", Status::Absent, Severity::Low)
            .with_description(
                "No HTML forms were detected in the page source. \
                 This may be due to JavaScript-rendered forms.",
            )
            .with_remediation(
                "If the application uses forms, ensure they are protected against CSRF attacks.",
            )]);
    }

    let mut findings = Vec::new();

    for (index, form) in forms.iter().enumerate() {
        let index = index + 1;

        let method = if form.method.is_empty() {
            "GET".to_string()
        } else {
            form.method.to_uppercase()
        };
        let is_post = method == "POST";

        let mut has_password = false;
        let mut has_csrf_token = false;
        for input in &form.inputs {
            if input.input_type.eq_ignore_ascii_case("password") {
                has_password = true;
            }
            if input.is_hidden && !has_csrf_token {
                let name = input.name.to_lowercase();
                has_csrf_token = CSRF_KEYWORDS.iter().any(|kw| name.contains(kw));
            }
        }

        findings.push(
            Finding::new(
                format!("Form {index} - HTTP Method"),
                Status::Method(method),
                if is_post { Severity::Low } else { Severity::Medium },
            )
            .with_description(
                "GET forms expose submitted data in URLs, logs, and browser history.",
            )
            .with_remediation("Use POST for forms that submit sensitive data."),
        );

        if has_password {
            findings.push(
                Finding::new(
                    format!("Form {index} - Password Field"),
                    Status::Present,
                    Severity::Low,
                )
                .with_description("The form contains a password input field.")
                .with_remediation("Ensure the form is protected with HTTPS and CSRF tokens."),
            );
        }

        findings.push(
            Finding::new(
                format!("Form {index} - CSRF Protection"),
                flag_status(has_csrf_token),
                Severity::Medium,
            )
            .with_description("CSRF tokens help prevent unauthorized cross-site requests.")
            .with_remediation("Include a unique, unpredictable CSRF token in the form."),
        );
    }

    Ok(findings)
}

fn flag_status(set: bool) -> Status {
    if set {
        Status::Present
    } else {
        Status::Missing
    }
}
