//! Core data models for the webcheck scanner

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Severity level for security findings
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    /// Ordinal rank used for report ordering (High outranks Medium outranks Low)
    pub fn rank(&self) -> u8 {
        match self {
            Severity::Low => 1,
            Severity::Medium => 2,
            Severity::High => 3,
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Low => write!(f, "LOW"),
            Severity::Medium => write!(f, "MEDIUM"),
            Severity::High => write!(f, "HIGH"),
        }
    }
}

/// Status of a checked attribute.
///
/// Most checks report `Present`/`Missing`/`Absent`. A failed check is folded
/// into a single `Error` finding. The form method check reports the literal
/// HTTP method string instead, which `Method` carries verbatim.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub enum Status {
    Present,
    Missing,
    Absent,
    Error,
    Method(String),
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Present => write!(f, "present"),
            Status::Missing => write!(f, "missing"),
            Status::Absent => write!(f, "absent"),
            Status::Error => write!(f, "error"),
            Status::Method(m) => write!(f, "{m}"),
        }
    }
}

/// One reported observation about a security-relevant attribute of the response
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Finding {
    /// Human-readable label, parameterized per cookie/form instance
    pub title: String,
    /// Checked attribute state
    pub status: Status,
    /// Severity level
    pub severity: Severity,
    /// Why the attribute matters
    pub description: String,
    /// Remediation guidance
    pub remediation: String,
}

impl Finding {
    /// Creates a new Finding with empty description and remediation
    pub fn new(title: impl Into<String>, status: Status, severity: Severity) -> Self {
        Self {
            title: title.into(),
            status,
            severity,
            description: String::new(),
            remediation: String::new(),
        }
    }

    /// Sets the description for this finding
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the remediation guidance for this finding
    pub fn with_remediation(mut self, remediation: impl Into<String>) -> Self {
        self.remediation = remediation.into();
        self
    }
}

/// One cookie set by the server, with its security attributes
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CookieRecord {
    pub name: String,
    pub value: String,
    pub secure: bool,
    pub http_only: bool,
    /// Value of the SameSite attribute, if present and non-empty
    pub same_site: Option<String>,
}

/// One input element inside a form
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormInput {
    /// The name attribute, empty string when missing
    pub name: String,
    /// The type attribute lower-cased, "text" when missing
    pub input_type: String,
    pub is_hidden: bool,
}

/// One HTML form extracted from the page body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormRecord {
    /// The method attribute lower-cased, "get" when missing
    pub method: String,
    /// The action attribute, possibly empty
    pub action: String,
    pub inputs: Vec<FormInput>,
}

/// The fetched HTTP response handed to the analysis phase
#[derive(Debug, Clone)]
pub struct FetchedResponse {
    /// URL the request was sent to (post-normalization)
    pub requested_url: String,
    /// URL the response actually came from, after redirects
    pub final_url: String,
    pub status_code: u16,
    /// Response headers, case preserved; checks normalize on lookup
    pub headers: HashMap<String, String>,
    /// Cookies from Set-Cookie headers, in response order
    pub cookies: Vec<CookieRecord>,
    /// Decoded body text, None when the server returned nothing
    pub body: Option<String>,
    /// Whether the transport is HTTPS; corrected post-redirect by the pipeline
    pub is_secure: bool,
}

impl FetchedResponse {
    /// Whether the final (post-redirect) URL uses HTTPS.
    ///
    /// Authoritative over `is_secure` derived from the requested URL: a
    /// plain-HTTP request that redirects to HTTPS is a secure scan.
    pub fn secure_transport(&self) -> bool {
        self.final_url.starts_with("https://")
    }
}

/// Configuration for a scan session
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Request timeout in seconds
    pub timeout_secs: u64,
    /// User-Agent header value
    pub user_agent: String,
    /// Whether to follow HTTP redirects
    pub follow_redirects: bool,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            timeout_secs: 10,
            user_agent: "webcheck/0.1.0".to_string(),
            follow_redirects: true,
        }
    }
}
