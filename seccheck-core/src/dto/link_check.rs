//! Link check DTOs

use serde::{Deserialize, Serialize};

use crate::domain::link::LinkCheck;
use crate::dto::common::Pagination;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckLink {
    pub url: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinkCheckEnvelope {
    pub check: LinkCheck,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinkCheckHistory {
    pub checks: Vec<LinkCheck>,
    pub pagination: Pagination,
}
