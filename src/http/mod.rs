//! HTTP client module for the webcheck scanner

pub mod client;
pub use client::HttpFetcher;
