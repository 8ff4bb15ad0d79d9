//! Webcheck - Single-Target Web Security Checker
//!
//! Fetches one page, inspects its response headers, cookies, and HTML forms
//! against a fixed rule set, and renders a severity-ranked plaintext report.
//! Each analysis step is fault-isolated: a failing check becomes a single
//! error finding instead of aborting the scan.

pub mod analysis;
pub mod config;
pub mod error;
pub mod html;
pub mod http;
pub mod models;
pub mod pipeline;
pub mod report;
pub mod target;
