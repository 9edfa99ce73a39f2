//! SecurityCheck Core
//!
//! Core types shared by SecurityCheck API consumers.
//!
//! This crate contains:
//! - Domain types: jobs, web scans, link checks, file analyses, domain intel
//! - DTOs: request bodies and response envelopes of the REST API

pub mod domain;
pub mod dto;
