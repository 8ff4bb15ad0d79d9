//! HTTP fetcher: one timeout-bounded GET producing a typed response

use crate::error::Result;
use crate::models::{CookieRecord, FetchedResponse, ScanConfig};
use reqwest::header::SET_COOKIE;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;
use tracing::debug;

/// HTTP client wrapper that fetches a page into a [`FetchedResponse`]
pub struct HttpFetcher {
    client: Client,
}

impl HttpFetcher {
    /// Creates a new HttpFetcher from scan configuration
    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(&config.user_agent)
            .redirect(if config.follow_redirects {
                reqwest::redirect::Policy::limited(10)
            } else {
                reqwest::redirect::Policy::none()
            })
            .build()?;

        Ok(Self { client })
    }

    /// Fetches the URL, following redirects, and extracts headers, cookies,
    /// and the decoded body into a typed response record.
    pub async fn fetch(&self, url: &str) -> Result<FetchedResponse> {
        let response = self.client.get(url).send().await?;

        let final_url = response.url().to_string();
        let status_code = response.status().as_u16();
        debug!("Response: {status_code} for {final_url}");

        let cookies: Vec<CookieRecord> = response
            .headers()
            .get_all(SET_COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .filter_map(parse_set_cookie)
            .collect();

        let headers: HashMap<String, String> = response
            .headers()
            .iter()
            .filter_map(|(name, value)| {
                value
                    .to_str()
                    .ok()
                    .map(|v| (name.as_str().to_string(), v.to_string()))
            })
            .collect();

        let is_secure = url.starts_with("https://");
        let bytes = response.bytes().await?;
        let body = decode_body(&bytes);

        Ok(FetchedResponse {
            requested_url: url.to_string(),
            final_url,
            status_code,
            headers,
            cookies,
            body: if body.is_empty() { None } else { Some(body) },
            is_secure,
        })
    }
}

/// Decodes a response body as UTF-8, falling back to Latin-1
fn decode_body(bytes: &[u8]) -> String {
    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => bytes.iter().map(|&b| b as char).collect(),
    }
}

/// Parses a single Set-Cookie header value into a [`CookieRecord`].
///
/// Returns None when the header has no `name=value` pair. Attribute flags
/// are matched case-insensitively; an empty SameSite value counts as unset.
fn parse_set_cookie(header: &str) -> Option<CookieRecord> {
    let mut parts = header.split(';');
    let (name, value) = parts.next()?.trim().split_once('=')?;
    if name.trim().is_empty() {
        return None;
    }

    let mut record = CookieRecord {
        name: name.trim().to_string(),
        value: value.trim().to_string(),
        secure: false,
        http_only: false,
        same_site: None,
    };

    for attr in parts {
        let attr = attr.trim();
        if attr.eq_ignore_ascii_case("secure") {
            record.secure = true;
        } else if attr.eq_ignore_ascii_case("httponly") {
            record.http_only = true;
        } else if let Some((key, val)) = attr.split_once('=') {
            if key.trim().eq_ignore_ascii_case("samesite") && !val.trim().is_empty() {
                record.same_site = Some(val.trim().to_string());
            }
        }
    }

    Some(record)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_set_cookie_all_attributes() {
        let record =
            parse_set_cookie("sid=abc123; Path=/; Secure; HttpOnly; SameSite=Strict").unwrap();
        assert_eq!(record.name, "sid");
        assert_eq!(record.value, "abc123");
        assert!(record.secure);
        assert!(record.http_only);
        assert_eq!(record.same_site.as_deref(), Some("Strict"));
    }

    #[test]
    fn test_parse_set_cookie_bare() {
        let record = parse_set_cookie("tracking=xyz").unwrap();
        assert_eq!(record.name, "tracking");
        assert!(!record.secure);
        assert!(!record.http_only);
        assert!(record.same_site.is_none());
    }

    #[test]
    fn test_parse_set_cookie_case_insensitive_flags() {
        let record = parse_set_cookie("a=1; SECURE; httponly; samesite=lax").unwrap();
        assert!(record.secure);
        assert!(record.http_only);
        assert_eq!(record.same_site.as_deref(), Some("lax"));
    }

    #[test]
    fn test_parse_set_cookie_rejects_nameless() {
        assert!(parse_set_cookie("no-equals-sign").is_none());
        assert!(parse_set_cookie("=value; Secure").is_none());
    }

    #[test]
    fn test_decode_body_utf8_and_latin1() {
        assert_eq!(decode_body("hello".as_bytes()), "hello");
        // 0xE9 is é in Latin-1 but invalid standalone UTF-8
        assert_eq!(decode_body(&[0x63, 0x61, 0x66, 0xE9]), "caf\u{e9}");
    }
}
