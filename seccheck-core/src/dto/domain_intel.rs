//! Domain intel DTOs

use serde::{Deserialize, Serialize};

use crate::domain::domain_intel::{DnsRecords, DomainIntel};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LookupDomain {
    pub domain: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DomainIntelEnvelope {
    pub intel: DomainIntel,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DnsRecordsEnvelope {
    pub dns: DnsRecords,
}
