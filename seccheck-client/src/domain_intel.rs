//! Domain intel API endpoints

use seccheck_core::domain::domain_intel::{DnsRecords, DomainIntel};
use seccheck_core::dto::domain_intel::{DnsRecordsEnvelope, DomainIntelEnvelope, LookupDomain};

use crate::SecurityCheckClient;
use crate::endpoint::Endpoint;
use crate::error::Result;

impl SecurityCheckClient {
    /// Look up WHOIS, DNS and email-security data for a domain
    pub async fn lookup_domain(&self, domain: &str) -> Result<DomainIntel> {
        let envelope: DomainIntelEnvelope = self
            .send(
                Endpoint::LookupDomain,
                &LookupDomain {
                    domain: domain.to_string(),
                },
            )
            .await?;
        Ok(envelope.intel)
    }

    /// Get a past lookup
    pub async fn get_domain_intel(&self, intel_id: u64) -> Result<DomainIntel> {
        let envelope: DomainIntelEnvelope = self.call(Endpoint::DomainIntel(intel_id)).await?;
        Ok(envelope.intel)
    }

    /// Get the DNS records collected by a lookup
    pub async fn get_dns_records(&self, intel_id: u64) -> Result<DnsRecords> {
        let envelope: DnsRecordsEnvelope = self.call(Endpoint::DnsRecords(intel_id)).await?;
        Ok(envelope.dns)
    }
}
