//! Core domain types
//!
//! These types mirror the records the SecurityCheck backend returns. Open-ended
//! payloads keep unknown fields in a flattened `extra` map so that new backend
//! fields survive a round trip through the client.

pub mod account;
pub mod domain_intel;
pub mod file;
pub mod job;
pub mod link;
pub mod scan;
