//! Data Transfer Objects for the SecurityCheck REST API
//!
//! Request bodies and the `{ "success": ..., <key>: ... }` envelopes the
//! backend wraps its responses in. The `success` flag is redundant with the
//! HTTP status code and is not decoded.

pub mod common;
pub mod dashboard;
pub mod domain_intel;
pub mod file_analysis;
pub mod link_check;
pub mod status;
pub mod subscription;
pub mod web_scan;
