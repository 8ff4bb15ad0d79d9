//! Target URL validation and normalization

use url::Url;

/// Returns true when the raw input carries an explicit scheme prefix
fn has_scheme(raw: &str) -> bool {
    raw.starts_with("http://") || raw.starts_with("https://")
}

/// Validates that the input resolves to a syntactically sound http/https URL.
///
/// Inputs without a scheme are parsed as if prefixed with `http://`. Rejects
/// a missing hostname, a hostname without a dot or with a leading/trailing
/// dot, characters outside `[a-zA-Z0-9.-]` in the hostname, and any explicit
/// scheme other than http or https.
pub fn validate_url(raw: &str) -> bool {
    if let Some((scheme, _)) = raw.split_once("://") {
        let looks_like_scheme = !scheme.is_empty()
            && scheme
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '+' || c == '-' || c == '.');
        if looks_like_scheme && scheme != "http" && scheme != "https" {
            return false;
        }
    }

    let candidate = if has_scheme(raw) {
        raw.to_string()
    } else {
        format!("http://{raw}")
    };

    let parsed = match Url::parse(&candidate) {
        Ok(url) => url,
        Err(_) => return false,
    };

    let host = match parsed.host_str() {
        Some(host) if !host.is_empty() => host,
        _ => return false,
    };

    if !host.contains('.') || host.starts_with('.') || host.ends_with('.') {
        return false;
    }

    host.chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '.' || c == '-')
}

/// Normalizes a URL for scanning: prefixes `http://` when no scheme is given
/// and strips the query and fragment while keeping the path.
pub fn normalize_url(raw: &str) -> String {
    let mut url = if has_scheme(raw) {
        raw.to_string()
    } else {
        format!("http://{raw}")
    };

    if let Some(idx) = url.find(['?', '#']) {
        url.truncate(idx);
    }

    url
}

/// Returns true when the host is a single or base regional domain
/// (2-3 dot-separated labels, e.g. `example.com` or `example.co.uk`).
///
/// Purely informational; never blocks a scan.
pub fn is_single_domain(url: &str) -> bool {
    let candidate = if has_scheme(url) {
        url.to_string()
    } else {
        format!("http://{url}")
    };

    let parsed = match Url::parse(&candidate) {
        Ok(url) => url,
        Err(_) => return false,
    };

    let host = match parsed.host_str() {
        Some(host) => host,
        None => return false,
    };

    if !host.contains('.') {
        return false;
    }

    let labels = host.split('.').count();
    (2..=3).contains(&labels)
}
